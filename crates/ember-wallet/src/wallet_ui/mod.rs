//! Wallet UI surfaces routed by `WalletUiState::page`.

pub mod approve_spend;
pub mod onboarding_import;
pub mod overview;
pub mod state;
pub mod unlock;
