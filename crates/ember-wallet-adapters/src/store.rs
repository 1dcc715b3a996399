//! Thread-safe background store. Reductions happen under one mutex; keyring
//! imports run on a worker thread and report back through `dispatch`.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use ember_wallet_core::{
    reduce, BackgroundAction, BackgroundState, ClockPort, ImportLegacyKeyringRequest, PortError,
    StorePort,
};

use crate::clock::SystemClockAdapter;
use crate::config::AdapterConfig;
use crate::keyring::KeyringService;

/// Called after every reduced action (the GUI uses it to request a repaint).
pub type ChangeHook = Arc<dyn Fn() + Send + Sync>;

pub struct BackgroundStore<C: ClockPort = SystemClockAdapter> {
    inner: Arc<StoreInner<C>>,
}

impl<C: ClockPort> Clone for BackgroundStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct StoreInner<C: ClockPort> {
    state: Mutex<BackgroundState>,
    revision_tx: watch::Sender<u64>,
    keyrings: KeyringService<C>,
    on_change: Mutex<Option<ChangeHook>>,
}

impl BackgroundStore<SystemClockAdapter> {
    pub fn new(config: AdapterConfig) -> Result<Self, PortError> {
        Self::with_clock(config, SystemClockAdapter)
    }
}

impl<C> BackgroundStore<C>
where
    C: ClockPort + Send + Sync + 'static,
{
    pub fn with_clock(config: AdapterConfig, clock: C) -> Result<Self, PortError> {
        let keyrings = KeyringService::new(config, clock)?;
        let (revision_tx, _) = watch::channel(0);
        Ok(Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(BackgroundState::default()),
                revision_tx,
                keyrings,
                on_change: Mutex::new(None),
            }),
        })
    }

    /// Receiver that observes the state revision after every reduction.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision_tx.subscribe()
    }

    pub fn set_change_hook(&self, hook: ChangeHook) -> Result<(), PortError> {
        let mut slot = self
            .inner
            .on_change
            .lock()
            .map_err(|e| PortError::Transport(format!("hook lock poisoned: {e}")))?;
        *slot = Some(hook);
        Ok(())
    }

    pub fn keyrings(&self) -> &KeyringService<C> {
        &self.inner.keyrings
    }

    pub fn unlock(&self, password: &str) -> Result<(), PortError> {
        let accounts = self.inner.keyrings.unlock(password)?;
        self.dispatch(BackgroundAction::KeyringsUnlocked { accounts })
    }

    pub fn lock(&self) -> Result<(), PortError> {
        self.inner.keyrings.lock()?;
        self.dispatch(BackgroundAction::KeyringsLocked)
    }

    fn notify(&self, revision: u64) {
        self.inner.revision_tx.send_replace(revision);
        let hook = self
            .inner
            .on_change
            .lock()
            .ok()
            .and_then(|slot| slot.clone());
        if let Some(hook) = hook {
            hook();
        }
    }

    fn spawn_import(&self, request: ImportLegacyKeyringRequest) {
        let store = self.clone();
        let spawned = std::thread::Builder::new()
            .name("keyring-import".to_owned())
            .spawn(move || store.run_import(request));
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start keyring import worker");
            self.report_import_failure(format!("worker spawn failed: {e}"));
        }
    }

    fn run_import(&self, request: ImportLegacyKeyringRequest) {
        match self.inner.keyrings.import_legacy(&request) {
            Ok(address) => {
                if let Err(e) = self.dispatch(BackgroundAction::KeyringImported { address }) {
                    tracing::warn!(error = %e, "keyring import result dropped");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "keyring import failed");
                self.report_import_failure(e.to_string());
            }
        }
    }

    fn report_import_failure(&self, reason: String) {
        if let Err(e) = self.dispatch(BackgroundAction::KeyringImportFailed { reason }) {
            tracing::warn!(error = %e, "keyring import failure dropped");
        }
    }
}

impl<C> StorePort for BackgroundStore<C>
where
    C: ClockPort + Send + Sync + 'static,
{
    fn state(&self) -> Result<BackgroundState, PortError> {
        self.inner
            .state
            .lock()
            .map(|state| state.clone())
            .map_err(|e| PortError::Transport(format!("store lock poisoned: {e}")))
    }

    fn dispatch(&self, action: BackgroundAction) -> Result<(), PortError> {
        let name = action.name();
        let import = match &action {
            BackgroundAction::ImportLegacyKeyring(request) => Some(request.clone()),
            _ => None,
        };

        let revision = {
            let mut state = self
                .inner
                .state
                .lock()
                .map_err(|e| PortError::Transport(format!("store lock poisoned: {e}")))?;
            let next = reduce(state.clone(), action)?;
            *state = next;
            state.revision
        };
        tracing::debug!(action = name, revision, "action reduced");
        self.notify(revision);

        if let Some(request) = import {
            self.spawn_import(request);
        }
        Ok(())
    }
}
