use std::fmt;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// EIP-1559 transaction request awaiting the user's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransaction {
    pub from: Address,
    #[serde(default)]
    pub to: Option<Address>,
    /// 0x-prefixed hex call data.
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub value: U256,
    #[serde(default)]
    pub nonce: Option<u64>,
    #[serde(default)]
    pub gas_limit: Option<u64>,
    #[serde(default)]
    pub max_fee_per_gas: Option<u128>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<u128>,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// `None` for a network's base asset.
    #[serde(default)]
    pub contract_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    pub asset: Asset,
    pub amount: U256,
}

/// Balances of the currently selected account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalances {
    pub address: Address,
    pub asset_amounts: Vec<AssetAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum KeyringImportStatus {
    #[default]
    NotStarted,
    InProgress,
    Done,
    Failed(String),
}

impl KeyringImportStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, KeyringImportStatus::Done)
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeyringImportStatus::NotStarted => "not started",
            KeyringImportStatus::InProgress => "importing",
            KeyringImportStatus::Done => "done",
            KeyringImportStatus::Failed(_) => "failed",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportLegacyKeyringRequest {
    pub mnemonic: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl fmt::Debug for ImportLegacyKeyringRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportLegacyKeyringRequest")
            .field("mnemonic", &"<redacted>")
            .field("path", &self.path)
            .finish()
    }
}
