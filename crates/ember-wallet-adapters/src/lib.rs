pub mod clock;
pub mod config;
pub mod crypto;
pub mod keyring;
pub mod mnemonic;
pub mod store;

pub use clock::SystemClockAdapter;
pub use config::AdapterConfig;
pub use crypto::KdfAlgorithm;
pub use keyring::{derive_legacy_address, EncryptedVault, KeyringService};
pub use mnemonic::{normalize_phrase, Bip39MnemonicAdapter};
pub use store::{BackgroundStore, ChangeHook};
