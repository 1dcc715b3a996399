use thiserror::Error;

use crate::store::{BackgroundAction, BackgroundState};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("policy error: {0}")]
    Policy(String),
}

/// Redux-like application store: snapshot reads, dispatched write intents.
pub trait StorePort {
    fn state(&self) -> Result<BackgroundState, PortError>;
    fn dispatch(&self, action: BackgroundAction) -> Result<(), PortError>;
}

pub trait MnemonicPort {
    /// Word-list and checksum validity of a BIP-39 phrase.
    fn is_valid_mnemonic(&self, phrase: &str) -> bool;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}

impl<T: StorePort + ?Sized> StorePort for &T {
    fn state(&self) -> Result<BackgroundState, PortError> {
        (**self).state()
    }

    fn dispatch(&self, action: BackgroundAction) -> Result<(), PortError> {
        (**self).dispatch(action)
    }
}
