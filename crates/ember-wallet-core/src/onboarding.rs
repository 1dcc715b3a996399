//! View model for importing a legacy wallet from a recovery phrase.

use crate::domain::{ImportLegacyKeyringRequest, KeyringImportStatus};
use crate::ports::{MnemonicPort, PortError, StorePort};
use crate::store::BackgroundAction;

pub const INVALID_RECOVERY_PHRASE: &str = "Invalid recovery phrase";
pub const IMPORT_FAILED: &str = "Import failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationPathOption {
    pub value: &'static str,
    pub label: &'static str,
}

// TODO: pick the table per active network once more than one is supported.
pub const DERIVATION_PATHS: &[DerivationPathOption] = &[
    DerivationPathOption {
        value: "m/44'/60'/0'/0",
        label: "ETH (m/44'/60'/0'/0)",
    },
    DerivationPathOption {
        value: "m/44'/1'/0'/0",
        label: "ETH Testnet (m/44'/1'/0'/0)",
    },
    DerivationPathOption {
        value: "m/44'/61'/0'/0",
        label: "Trezor (m/44'/61'/0'/0)",
    },
    DerivationPathOption {
        value: "m/44'/137'/0'/0",
        label: "RSK (m/44'/137'/0'/0)",
    },
    DerivationPathOption {
        value: "m/44'/37310'/0'/1",
        label: "RSK Testnet (m/44'/37310'/0'/0)",
    },
];

#[derive(Debug, Clone)]
pub struct ImportLegacyOnboarding {
    pub recovery_phrase: String,
    pub error_message: Option<String>,
    pub is_checked: bool,
    pub path: Option<String>,
    pub is_importing: bool,
    pub next_page: String,
    pub hide_derivation_path: bool,
}

impl ImportLegacyOnboarding {
    pub fn new(next_page: impl Into<String>, hide_derivation_path: bool) -> Self {
        Self {
            recovery_phrase: String::new(),
            error_message: None,
            is_checked: false,
            path: None,
            is_importing: false,
            next_page: next_page.into(),
            hide_derivation_path,
        }
    }

    pub fn set_recovery_phrase(&mut self, value: impl Into<String>) {
        self.error_message = None;
        self.recovery_phrase = value.into();
    }

    pub fn toggle_custom_derivation(&mut self) {
        self.is_checked = !self.is_checked;
        if !self.is_checked {
            self.path = None;
        }
    }

    pub fn select_path(&mut self, value: impl Into<String>) {
        if self.is_checked {
            self.path = Some(value.into());
        }
    }

    pub fn selected_path_label(&self) -> Option<&'static str> {
        let path = self.path.as_deref()?;
        DERIVATION_PATHS
            .iter()
            .find(|option| option.value == path)
            .map(|option| option.label)
    }

    pub fn derivation_controls_visible(&self) -> bool {
        !self.hide_derivation_path
    }

    pub fn path_select_visible(&self) -> bool {
        !self.hide_derivation_path && self.is_checked
    }

    pub fn should_render(&self, keyrings_unlocked: bool) -> bool {
        keyrings_unlocked
    }

    /// Validates the trimmed phrase and dispatches one import request.
    /// Returns whether a request was dispatched.
    pub fn import_wallet<S: StorePort, M: MnemonicPort>(
        &mut self,
        store: &S,
        validator: &M,
    ) -> Result<bool, PortError> {
        if self.is_importing {
            return Ok(false);
        }
        let trimmed = self.recovery_phrase.trim();
        if !validator.is_valid_mnemonic(trimmed) {
            self.error_message = Some(INVALID_RECOVERY_PHRASE.to_owned());
            return Ok(false);
        }

        let request = ImportLegacyKeyringRequest {
            mnemonic: trimmed.to_owned(),
            path: self.path.clone(),
        };
        self.is_importing = true;
        if let Err(e) = store.dispatch(BackgroundAction::ImportLegacyKeyring(request)) {
            self.is_importing = false;
            return Err(e);
        }
        tracing::info!(path = ?self.path, "legacy keyring import requested");
        Ok(true)
    }

    /// Reacts to store updates. Returns the page to navigate to once the
    /// import this view started has finished.
    pub fn observe(
        &mut self,
        keyrings_unlocked: bool,
        importing: &KeyringImportStatus,
    ) -> Option<String> {
        if !self.is_importing {
            return None;
        }
        match importing {
            KeyringImportStatus::Done if keyrings_unlocked => {
                self.is_importing = false;
                Some(self.next_page.clone())
            }
            KeyringImportStatus::Failed(reason) => {
                tracing::warn!(%reason, "legacy keyring import failed");
                self.is_importing = false;
                self.error_message = Some(IMPORT_FAILED.to_owned());
                None
            }
            _ => None,
        }
    }
}
