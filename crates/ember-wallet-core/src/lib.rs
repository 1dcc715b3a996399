pub mod approval;
pub mod approve_spend;
pub mod domain;
pub mod format;
pub mod onboarding;
pub mod ports;
pub mod state_machine;
pub mod store;

pub use approval::{
    approval_amount_word, approval_spender, is_approve_call, is_infinite_approval,
    number_to_32_bytes_hex, numeric_string_from_hex, replace_approval_amount, ApprovalError,
    APPROVE_SELECTOR, INFINITE_APPROVAL_WORD,
};
pub use approve_spend::{
    find_asset, ApproveSpendBlock, ApproveSpendView, UpdateOutcome, INVALID_SPEND_LIMIT,
};
pub use domain::{
    AccountBalances, Asset, AssetAmount, ImportLegacyKeyringRequest, KeyringImportStatus,
    PendingTransaction,
};
pub use format::truncate_address;
pub use onboarding::{
    DerivationPathOption, ImportLegacyOnboarding, DERIVATION_PATHS, IMPORT_FAILED,
    INVALID_RECOVERY_PHRASE,
};
pub use ports::{ClockPort, MnemonicPort, PortError, StorePort};
pub use state_machine::{import_transition, ImportAction};
pub use store::{
    get_assets_state, reduce, select_current_account_balances, select_keyring_import_status,
    select_keyrings_unlocked, select_transaction_request, BackgroundAction, BackgroundState,
    KeyringsState, TransactionConstructionState,
};
