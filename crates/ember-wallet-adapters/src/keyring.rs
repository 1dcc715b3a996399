//! Legacy (mnemonic) keyrings and the encrypted vault holding them.

use std::fmt;
use std::path::Path;
use std::sync::Mutex;

use alloy::primitives::{hex, Address};
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::MnemonicBuilder;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use ember_wallet_core::{ClockPort, ImportLegacyKeyringRequest, PortError};

use crate::config::AdapterConfig;
use crate::mnemonic::normalize_phrase;
use crate::crypto::{
    decrypt_aes_gcm, derive_vault_key, encrypt_aes_gcm, generate_nonce, generate_salt,
    KdfAlgorithm, KdfParams, VaultKey,
};

const VAULT_VERSION: u8 = 1;

/// At-rest form of the keyring list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedVault {
    pub version: u8,
    pub kdf_algorithm: KdfAlgorithm,
    pub salt: String,
    pub nonce: String,
    pub ciphertext: String,
}

#[derive(Clone, Serialize, Deserialize)]
struct StoredKeyring {
    id: String,
    mnemonic: String,
    path: String,
    addresses: Vec<Address>,
    imported_at_ms: u64,
}

impl fmt::Debug for StoredKeyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredKeyring")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("addresses", &self.addresses)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct UnlockedVault {
    key: VaultKey,
    keyrings: Vec<StoredKeyring>,
}

#[derive(Debug, Default)]
struct VaultSlot {
    sealed: Option<EncryptedVault>,
    unlocked: Option<UnlockedVault>,
}

/// Account 0 under `path` (or `default_path`) for a BIP-39 phrase.
pub fn derive_legacy_address(
    mnemonic: &str,
    path: Option<&str>,
    default_path: &str,
) -> Result<Address, PortError> {
    let base = path.unwrap_or(default_path).trim_end_matches('/');
    let full_path = format!("{base}/0");
    let signer = MnemonicBuilder::<English>::default()
        .phrase(normalize_phrase(mnemonic))
        .derivation_path(full_path.as_str())
        .map_err(|e| {
            PortError::Validation(format!("invalid derivation path {full_path}: {e}"))
        })?
        .build()
        .map_err(|e| PortError::Validation(format!("keyring derivation failed: {e}")))?;
    Ok(signer.address())
}

pub struct KeyringService<C: ClockPort> {
    config: AdapterConfig,
    clock: C,
    slot: Mutex<VaultSlot>,
}

impl<C: ClockPort> KeyringService<C> {
    /// Loads a previously sealed vault from `config.vault_path` when present.
    pub fn new(config: AdapterConfig, clock: C) -> Result<Self, PortError> {
        let sealed = match config.vault_path.as_deref() {
            Some(path) if path.exists() => Some(read_vault(path)?),
            _ => None,
        };
        Ok(Self {
            config,
            clock,
            slot: Mutex::new(VaultSlot {
                sealed,
                unlocked: None,
            }),
        })
    }

    /// Opens the vault with `password`, creating an empty one on first use.
    /// Returns the accounts it holds.
    pub fn unlock(&self, password: &str) -> Result<Vec<Address>, PortError> {
        if password.is_empty() {
            return Err(PortError::Validation("password must not be empty".to_owned()));
        }
        let mut slot = self.lock_slot()?;
        if let Some(sealed) = slot.sealed.clone() {
            let salt = decode_fixed::<16>(&sealed.salt, "salt")?;
            let nonce = decode_fixed::<12>(&sealed.nonce, "nonce")?;
            let ciphertext = BASE64
                .decode(&sealed.ciphertext)
                .map_err(|e| PortError::Validation(format!("vault ciphertext: {e}")))?;
            let key = derive_vault_key(
                password.as_bytes(),
                salt,
                self.kdf_params(),
                Some(sealed.kdf_algorithm),
            )?;
            let plaintext = decrypt_aes_gcm(&key.enc_key, nonce, &ciphertext)?;
            let keyrings: Vec<StoredKeyring> = serde_json::from_slice(&plaintext)
                .map_err(|e| PortError::Validation(format!("vault contents: {e}")))?;
            tracing::info!(keyrings = keyrings.len(), "vault unlocked");
            let accounts = accounts_of(&keyrings);
            slot.unlocked = Some(UnlockedVault { key, keyrings });
            return Ok(accounts);
        }

        let key = derive_vault_key(
            password.as_bytes(),
            generate_salt()?,
            self.kdf_params(),
            None,
        )?;
        let vault = UnlockedVault {
            key,
            keyrings: Vec::new(),
        };
        slot.sealed = Some(self.seal(&vault)?);
        slot.unlocked = Some(vault);
        tracing::info!("new vault created");
        Ok(Vec::new())
    }

    pub fn lock(&self) -> Result<(), PortError> {
        self.lock_slot()?.unlocked = None;
        Ok(())
    }

    pub fn is_unlocked(&self) -> bool {
        self.lock_slot()
            .map(|slot| slot.unlocked.is_some())
            .unwrap_or(false)
    }

    pub fn accounts(&self) -> Result<Vec<Address>, PortError> {
        let slot = self.lock_slot()?;
        Ok(slot
            .unlocked
            .as_ref()
            .map(|vault| accounts_of(&vault.keyrings))
            .unwrap_or_default())
    }

    pub fn sealed_vault(&self) -> Result<Option<EncryptedVault>, PortError> {
        Ok(self.lock_slot()?.sealed.clone())
    }

    /// Derives the keyring's first account and adds it to the vault. A phrase
    /// already imported under the same path resolves to its existing account.
    pub fn import_legacy(
        &self,
        request: &ImportLegacyKeyringRequest,
    ) -> Result<Address, PortError> {
        if !self.is_unlocked() {
            return Err(PortError::Policy("KEYRINGS_LOCKED".to_owned()));
        }
        let path = request
            .path
            .clone()
            .unwrap_or_else(|| self.config.default_derivation_path.clone());
        let mnemonic = normalize_phrase(&request.mnemonic);
        let address = derive_legacy_address(&mnemonic, None, &path)?;
        let imported_at_ms = self.clock.now_ms()?;

        let mut slot = self.lock_slot()?;
        let vault = slot
            .unlocked
            .as_mut()
            .ok_or_else(|| PortError::Policy("KEYRINGS_LOCKED".to_owned()))?;
        if vault.keyrings.iter().any(|k| k.addresses.contains(&address)) {
            tracing::info!(%address, "keyring already imported");
            return Ok(address);
        }

        vault.keyrings.push(StoredKeyring {
            id: keyring_id(&address),
            mnemonic,
            path,
            addresses: vec![address],
            imported_at_ms,
        });
        let sealed = match self.seal(vault) {
            Ok(sealed) => sealed,
            Err(e) => {
                vault.keyrings.pop();
                return Err(e);
            }
        };
        slot.sealed = Some(sealed);
        tracing::info!(%address, "legacy keyring imported");
        Ok(address)
    }

    fn seal(&self, vault: &UnlockedVault) -> Result<EncryptedVault, PortError> {
        let plaintext = serde_json::to_vec(&vault.keyrings)
            .map_err(|e| PortError::Validation(format!("vault serialization failed: {e}")))?;
        let nonce = generate_nonce()?;
        let ciphertext = encrypt_aes_gcm(&vault.key.enc_key, nonce, &plaintext)?;
        let sealed = EncryptedVault {
            version: VAULT_VERSION,
            kdf_algorithm: vault.key.kdf_algorithm,
            salt: BASE64.encode(vault.key.salt),
            nonce: BASE64.encode(nonce),
            ciphertext: BASE64.encode(ciphertext),
        };
        if let Some(path) = self.config.vault_path.as_deref() {
            write_vault(path, &sealed)?;
        }
        Ok(sealed)
    }

    fn kdf_params(&self) -> KdfParams {
        KdfParams {
            memory_kib: self.config.vault_kdf_memory_kib,
            iterations: self.config.vault_kdf_iterations,
        }
    }

    fn lock_slot(&self) -> Result<std::sync::MutexGuard<'_, VaultSlot>, PortError> {
        self.slot
            .lock()
            .map_err(|e| PortError::Transport(format!("vault lock poisoned: {e}")))
    }
}

fn accounts_of(keyrings: &[StoredKeyring]) -> Vec<Address> {
    keyrings
        .iter()
        .flat_map(|k| k.addresses.iter().copied())
        .collect()
}

fn keyring_id(address: &Address) -> String {
    let digest = Sha256::digest(address.as_slice());
    format!("legacy-{}", hex::encode(&digest[..8]))
}

fn decode_fixed<const N: usize>(encoded: &str, field: &str) -> Result<[u8; N], PortError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| PortError::Validation(format!("vault {field}: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| PortError::Validation(format!("vault {field}: expected {N} bytes")))
}

fn read_vault(path: &Path) -> Result<EncryptedVault, PortError> {
    let raw = std::fs::read(path)
        .map_err(|e| PortError::Transport(format!("read {}: {e}", path.display())))?;
    let vault: EncryptedVault = serde_json::from_slice(&raw)
        .map_err(|e| PortError::Validation(format!("vault file: {e}")))?;
    if vault.version != VAULT_VERSION {
        return Err(PortError::Validation(format!(
            "unsupported vault version {}",
            vault.version
        )));
    }
    Ok(vault)
}

fn write_vault(path: &Path, vault: &EncryptedVault) -> Result<(), PortError> {
    let json = serde_json::to_vec_pretty(vault)
        .map_err(|e| PortError::Validation(format!("vault serialization failed: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| PortError::Transport(format!("write {}: {e}", path.display())))
}
