#![allow(dead_code)]

use std::sync::Mutex;

use alloy::primitives::{Address, U256};

use ember_wallet_core::{
    reduce, Asset, BackgroundAction, BackgroundState, MnemonicPort, PendingTransaction, PortError,
    StorePort,
};

/// Store fake that reduces actions like the real store and keeps every
/// dispatched action for assertions.
#[derive(Debug, Default)]
pub struct RecordingStore {
    state: Mutex<BackgroundState>,
    dispatched: Mutex<Vec<BackgroundAction>>,
}

impl RecordingStore {
    pub fn with_state(state: BackgroundState) -> Self {
        Self {
            state: Mutex::new(state),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    pub fn dispatched(&self) -> Vec<BackgroundAction> {
        self.dispatched.lock().expect("dispatched lock").clone()
    }
}

impl StorePort for RecordingStore {
    fn state(&self) -> Result<BackgroundState, PortError> {
        Ok(self.state.lock().expect("state lock").clone())
    }

    fn dispatch(&self, action: BackgroundAction) -> Result<(), PortError> {
        let mut guard = self.state.lock().expect("state lock");
        let next = reduce(guard.clone(), action.clone())?;
        *guard = next;
        self.dispatched.lock().expect("dispatched lock").push(action);
        Ok(())
    }
}

/// Accepts exactly the phrases it was built with.
pub struct FixedMnemonics(pub Vec<&'static str>);

impl MnemonicPort for FixedMnemonics {
    fn is_valid_mnemonic(&self, phrase: &str) -> bool {
        self.0.iter().any(|p| *p == phrase)
    }
}

pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

pub fn usdc_address() -> Address {
    "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        .parse()
        .expect("valid usdc address")
}

pub fn spender_address() -> Address {
    "0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45"
        .parse()
        .expect("valid spender address")
}

pub fn usdc() -> Asset {
    Asset {
        symbol: "usdc".to_owned(),
        name: "USD Coin".to_owned(),
        decimals: 6,
        contract_address: Some(usdc_address()),
    }
}

/// `approve(spender, amount)` call data, 0x-prefixed.
pub fn approve_calldata(spender: Address, amount: U256) -> String {
    format!(
        "0x095ea7b3{:0>64}{}",
        alloy::primitives::hex::encode(spender.as_slice()),
        alloy::primitives::hex::encode(amount.to_be_bytes::<32>())
    )
}

pub fn approve_tx(to: Address, input: String) -> PendingTransaction {
    PendingTransaction {
        from: Address::repeat_byte(0x11),
        to: Some(to),
        input: Some(input),
        value: U256::ZERO,
        nonce: Some(7),
        gas_limit: Some(60_000),
        max_fee_per_gas: Some(30_000_000_000),
        max_priority_fee_per_gas: Some(1_000_000_000),
        chain_id: 1,
    }
}

pub fn state_with_request(tx: &PendingTransaction) -> BackgroundState {
    reduce(
        BackgroundState::default(),
        BackgroundAction::RequestTransactionSignature(tx.clone()),
    )
    .expect("request transaction")
}
