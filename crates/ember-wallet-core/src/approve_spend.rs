//! View model for the "approve spend" block of the sign-transaction page.

use alloy::primitives::Address;

use crate::approval::{
    approval_amount_word, approval_spender, is_infinite_approval, numeric_string_from_hex,
    replace_approval_amount, ApprovalError,
};
use crate::domain::{AccountBalances, Asset, PendingTransaction};
use crate::format::truncate_address;
use crate::ports::{PortError, StorePort};
use crate::store::{
    get_assets_state, select_current_account_balances, BackgroundAction, BackgroundState,
};

pub const INVALID_SPEND_LIMIT: &str = "Invalid spend limit";

/// Token record for the contract a transaction is sent to: the current
/// account's holdings first, then the globally known asset list.
pub fn find_asset(
    to: Option<Address>,
    balances: Option<&AccountBalances>,
    assets: &[Asset],
) -> Option<Asset> {
    let to = to?;
    balances
        .into_iter()
        .flat_map(|b| b.asset_amounts.iter())
        .map(|amount| &amount.asset)
        .chain(assets.iter())
        .find(|asset| asset.contract_address == Some(to))
        .cloned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveSpendView {
    /// Icon symbol; empty when no asset matched.
    pub symbol: String,
    pub spending_label: String,
    pub amount_label: String,
    pub button_label: &'static str,
    pub editing: bool,
    pub infinite: bool,
    pub spender: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    EnteredEdit,
    Dispatched(PendingTransaction),
    /// Edited amount could not be encoded; still editing.
    Rejected(ApprovalError),
    /// Left edit mode without a call data to rewrite.
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct ApproveSpendBlock {
    pub approval_limit: String,
    pub changing: bool,
    pub error: Option<String>,
    seeded_word: Option<String>,
}

impl ApproveSpendBlock {
    /// Reseeds the limit whenever the transaction's amount word changes.
    pub fn sync(&mut self, tx: &PendingTransaction) {
        let word = approval_amount_word(tx.input.as_deref());
        if self.seeded_word.as_deref() == Some(word) {
            return;
        }
        self.approval_limit = numeric_string_from_hex(word);
        self.seeded_word = Some(word.to_owned());
        tracing::debug!(limit = %self.approval_limit, "approval limit reseeded");
    }

    pub fn set_approval_limit(&mut self, value: impl Into<String>) {
        self.error = None;
        self.approval_limit = value.into();
    }

    pub fn view(&self, tx: &PendingTransaction, state: &BackgroundState) -> ApproveSpendView {
        let asset = find_asset(
            tx.to,
            select_current_account_balances(state),
            get_assets_state(state),
        );
        let symbol = asset.map(|a| a.symbol).unwrap_or_default();
        let spent = if symbol.is_empty() {
            truncate_address(&tx.to.map(|to| to.to_string()).unwrap_or_default())
        } else {
            symbol.clone()
        };
        let infinite = is_infinite_approval(approval_amount_word(tx.input.as_deref()));
        let amount = if infinite {
            "Infinite"
        } else {
            self.approval_limit.as_str()
        };

        ApproveSpendView {
            spending_label: format!("Spend {spent} tokens"),
            amount_label: format!("{amount} {}", symbol.to_uppercase())
                .trim_end()
                .to_owned(),
            symbol,
            button_label: if self.changing {
                "Update spend limit"
            } else {
                "Change limit"
            },
            editing: self.changing,
            infinite,
            spender: approval_spender(tx.input.as_deref()),
        }
    }

    /// Toggles edit mode. Leaving edit mode rewrites the amount word and
    /// dispatches the modified transaction once.
    pub fn handle_update_click<S: StorePort>(
        &mut self,
        tx: &PendingTransaction,
        store: &S,
    ) -> Result<UpdateOutcome, PortError> {
        if !self.changing {
            self.changing = true;
            self.error = None;
            return Ok(UpdateOutcome::EnteredEdit);
        }

        let Some(input) = tx.input.as_deref() else {
            tracing::warn!("transaction has no call data; spend limit left unchanged");
            self.changing = false;
            return Ok(UpdateOutcome::Skipped);
        };

        let updated_input = match replace_approval_amount(input, &self.approval_limit) {
            Ok(updated) => updated,
            Err(ApprovalError::CalldataTooShort { len }) => {
                tracing::warn!(len, "call data too short for an approval amount");
                self.changing = false;
                return Ok(UpdateOutcome::Skipped);
            }
            Err(e) => {
                self.error = Some(INVALID_SPEND_LIMIT.to_owned());
                return Ok(UpdateOutcome::Rejected(e));
            }
        };

        let mut updated = tx.clone();
        updated.input = Some(updated_input);
        store.dispatch(BackgroundAction::UpdateTransactionOptions(updated.clone()))?;
        tracing::info!(limit = %self.approval_limit, "spend limit updated");
        self.changing = false;
        Ok(UpdateOutcome::Dispatched(updated))
    }
}
