//! Application state snapshot, the reducer that advances it, and the
//! selectors views read it through.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AccountBalances, Asset, ImportLegacyKeyringRequest, KeyringImportStatus, PendingTransaction,
};
use crate::ports::PortError;
use crate::state_machine::{import_transition, ImportAction};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringsState {
    pub unlocked: bool,
    pub importing: KeyringImportStatus,
    pub accounts: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionConstructionState {
    pub transaction_request: Option<PendingTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundState {
    pub account_balances: Option<AccountBalances>,
    pub assets: Vec<Asset>,
    pub keyrings: KeyringsState,
    pub transaction_construction: TransactionConstructionState,
    /// Bumped once per reduced action.
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundAction {
    RequestTransactionSignature(PendingTransaction),
    UpdateTransactionOptions(PendingTransaction),
    RejectTransactionSignature,
    ImportLegacyKeyring(ImportLegacyKeyringRequest),
    KeyringImported { address: Address },
    KeyringImportFailed { reason: String },
    KeyringsUnlocked { accounts: Vec<Address> },
    KeyringsLocked,
    AccountBalancesUpdated(AccountBalances),
    AssetsAdded(Vec<Asset>),
}

impl BackgroundAction {
    pub fn name(&self) -> &'static str {
        match self {
            BackgroundAction::RequestTransactionSignature(_) => "requestTransactionSignature",
            BackgroundAction::UpdateTransactionOptions(_) => "updateTransactionOptions",
            BackgroundAction::RejectTransactionSignature => "rejectTransactionSignature",
            BackgroundAction::ImportLegacyKeyring(_) => "importLegacyKeyring",
            BackgroundAction::KeyringImported { .. } => "keyringImported",
            BackgroundAction::KeyringImportFailed { .. } => "keyringImportFailed",
            BackgroundAction::KeyringsUnlocked { .. } => "keyringsUnlocked",
            BackgroundAction::KeyringsLocked => "keyringsLocked",
            BackgroundAction::AccountBalancesUpdated(_) => "accountBalancesUpdated",
            BackgroundAction::AssetsAdded(_) => "assetsAdded",
        }
    }
}

pub fn reduce(
    mut state: BackgroundState,
    action: BackgroundAction,
) -> Result<BackgroundState, PortError> {
    match action {
        BackgroundAction::RequestTransactionSignature(tx) => {
            state.transaction_construction.transaction_request = Some(tx);
        }
        BackgroundAction::UpdateTransactionOptions(tx) => {
            let slot = &mut state.transaction_construction.transaction_request;
            if slot.is_none() {
                return Err(PortError::Validation(
                    "no transaction request to update".to_owned(),
                ));
            }
            *slot = Some(tx);
        }
        BackgroundAction::RejectTransactionSignature => {
            state.transaction_construction.transaction_request = None;
        }
        BackgroundAction::ImportLegacyKeyring(_) => {
            if !state.keyrings.unlocked {
                return Err(PortError::Policy("KEYRINGS_LOCKED".to_owned()));
            }
            let (next, _) = import_transition(&state.keyrings.importing, ImportAction::Start)?;
            state.keyrings.importing = next;
        }
        BackgroundAction::KeyringImported { address } => {
            let (next, _) = import_transition(&state.keyrings.importing, ImportAction::Complete)?;
            state.keyrings.importing = next;
            if !state.keyrings.accounts.contains(&address) {
                state.keyrings.accounts.push(address);
            }
        }
        BackgroundAction::KeyringImportFailed { reason } => {
            let (next, _) =
                import_transition(&state.keyrings.importing, ImportAction::Fail(reason))?;
            state.keyrings.importing = next;
        }
        BackgroundAction::KeyringsUnlocked { accounts } => {
            state.keyrings.unlocked = true;
            state.keyrings.accounts = accounts;
        }
        BackgroundAction::KeyringsLocked => state.keyrings.unlocked = false,
        BackgroundAction::AccountBalancesUpdated(balances) => {
            state.account_balances = Some(balances);
        }
        BackgroundAction::AssetsAdded(assets) => {
            for asset in assets {
                let known = state.assets.iter().any(|a| {
                    a.symbol == asset.symbol && a.contract_address == asset.contract_address
                });
                if !known {
                    state.assets.push(asset);
                }
            }
        }
    }
    state.revision = state.revision.saturating_add(1);
    Ok(state)
}

pub fn select_current_account_balances(state: &BackgroundState) -> Option<&AccountBalances> {
    state.account_balances.as_ref()
}

pub fn get_assets_state(state: &BackgroundState) -> &[Asset] {
    &state.assets
}

pub fn select_keyrings_unlocked(state: &BackgroundState) -> bool {
    state.keyrings.unlocked
}

pub fn select_keyring_import_status(state: &BackgroundState) -> &KeyringImportStatus {
    &state.keyrings.importing
}

pub fn select_transaction_request(state: &BackgroundState) -> Option<&PendingTransaction> {
    state.transaction_construction.transaction_request.as_ref()
}
