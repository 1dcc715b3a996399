#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ember_wallet_adapters::{AdapterConfig, BackgroundStore};
use ember_wallet_core::{ClockPort, KeyringImportStatus, PortError, StorePort};

pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// m/44'/60'/0'/0/0 of `TEST_MNEMONIC`.
pub const TEST_ACCOUNT_0: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

#[derive(Debug, Default)]
pub struct TestClock {
    now: AtomicU64,
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.fetch_add(1, Ordering::SeqCst) + 1_739_750_400_000)
    }
}

/// Small KDF parameters so tests stay fast in debug builds.
pub fn test_config(vault_path: Option<PathBuf>) -> AdapterConfig {
    AdapterConfig {
        vault_path,
        vault_kdf_memory_kib: 1024,
        vault_kdf_iterations: 1,
        ..AdapterConfig::default()
    }
}

pub fn new_store() -> BackgroundStore<TestClock> {
    BackgroundStore::with_clock(test_config(None), TestClock::default()).expect("store")
}

/// Waits until the store leaves `InProgress` and returns the final status.
pub async fn wait_for_import(store: &BackgroundStore<TestClock>) -> KeyringImportStatus {
    let mut rx = store.subscribe();
    loop {
        let status = store.state().expect("state").keyrings.importing;
        if status != KeyringImportStatus::InProgress {
            return status;
        }
        tokio::time::timeout(Duration::from_secs(60), rx.changed())
            .await
            .expect("import timed out")
            .expect("store alive");
    }
}
