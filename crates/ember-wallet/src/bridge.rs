//! Bridge between the egui shell and the wallet workspace crates.
//! This must remain the only shell-facing boundary for store operations.

use std::sync::Arc;

use eyre::{Result, WrapErr};

use ember_wallet_adapters::{AdapterConfig, BackgroundStore, Bip39MnemonicAdapter};
use ember_wallet_core::{
    AccountBalances, ApproveSpendBlock, Asset, BackgroundAction, BackgroundState, ImportLegacyOnboarding,
    PendingTransaction, StorePort, UpdateOutcome,
};

#[derive(Clone)]
pub struct StoreBridge {
    store: BackgroundStore,
    config: AdapterConfig,
}

impl StoreBridge {
    pub fn new(config: AdapterConfig) -> Result<Self> {
        let store = BackgroundStore::new(config.clone()).wrap_err("failed to open wallet store")?;
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Repaints the UI whenever the store changes, including from the import
    /// worker thread.
    pub fn repaint_on_change(&self, ctx: egui::Context) -> Result<()> {
        self.store
            .set_change_hook(Arc::new(move || ctx.request_repaint()))
            .wrap_err("failed to install store change hook")
    }

    pub fn state(&self) -> Result<BackgroundState> {
        self.store.state().wrap_err("failed to read wallet state")
    }

    pub fn unlock(&self, password: &str) -> Result<()> {
        self.store.unlock(password).wrap_err("unlock failed")
    }

    pub fn lock(&self) -> Result<()> {
        self.store.lock().wrap_err("lock failed")
    }

    pub fn import_wallet(&self, page: &mut ImportLegacyOnboarding) -> Result<bool> {
        page.import_wallet(&self.store, &Bip39MnemonicAdapter)
            .wrap_err("failed to submit keyring import")
    }

    pub fn update_spend_limit(
        &self,
        block: &mut ApproveSpendBlock,
        tx: &PendingTransaction,
    ) -> Result<UpdateOutcome> {
        block
            .handle_update_click(tx, &self.store)
            .wrap_err("failed to update spend limit")
    }

    /// Parses a pending transaction from JSON and queues it for signature.
    pub fn load_transaction_request(&self, json: &str) -> Result<PendingTransaction> {
        let tx: PendingTransaction =
            serde_json::from_str(json.trim()).wrap_err("invalid transaction request JSON")?;
        self.store
            .dispatch(BackgroundAction::RequestTransactionSignature(tx.clone()))
            .wrap_err("failed to queue transaction request")?;
        Ok(tx)
    }

    /// Adds token records (a JSON array) the approval block can match against.
    pub fn add_assets(&self, json: &str) -> Result<usize> {
        let assets: Vec<Asset> =
            serde_json::from_str(json.trim()).wrap_err("invalid asset list JSON")?;
        let count = assets.len();
        self.store
            .dispatch(BackgroundAction::AssetsAdded(assets))
            .wrap_err("failed to add assets")?;
        Ok(count)
    }

    /// Replaces the current account's holdings; matched before the global
    /// token list when labelling an approval.
    pub fn set_account_balances(&self, json: &str) -> Result<AccountBalances> {
        let balances: AccountBalances =
            serde_json::from_str(json.trim()).wrap_err("invalid account balances JSON")?;
        self.store
            .dispatch(BackgroundAction::AccountBalancesUpdated(balances.clone()))
            .wrap_err("failed to update account balances")?;
        Ok(balances)
    }

    pub fn reject_transaction(&self) -> Result<()> {
        self.store
            .dispatch(BackgroundAction::RejectTransactionSignature)
            .wrap_err("failed to reject transaction")
    }
}
