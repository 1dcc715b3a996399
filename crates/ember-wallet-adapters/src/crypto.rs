use std::fmt;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use ember_wallet_core::PortError;

const PBKDF2_ROUNDS: u32 = 600_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KdfAlgorithm {
    Argon2idV1,
    Pbkdf2HmacSha256V1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
}

#[derive(Clone)]
pub struct VaultKey {
    pub kdf_algorithm: KdfAlgorithm,
    pub salt: [u8; 16],
    pub enc_key: [u8; 32],
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultKey")
            .field("kdf_algorithm", &self.kdf_algorithm)
            .field("enc_key", &"<redacted>")
            .finish()
    }
}

pub fn generate_salt() -> Result<[u8; 16], PortError> {
    let mut salt = [0u8; 16];
    getrandom::getrandom(&mut salt)
        .map_err(|e| PortError::Transport(format!("salt generation failed: {e}")))?;
    Ok(salt)
}

pub fn generate_nonce() -> Result<[u8; 12], PortError> {
    let mut nonce = [0u8; 12];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| PortError::Transport(format!("nonce generation failed: {e}")))?;
    Ok(nonce)
}

/// Derives the vault encryption key. `algorithm` pins the KDF recorded in an
/// existing vault; `None` picks Argon2id and falls back to PBKDF2.
pub fn derive_vault_key(
    password: &[u8],
    salt: [u8; 16],
    params: KdfParams,
    algorithm: Option<KdfAlgorithm>,
) -> Result<VaultKey, PortError> {
    let (root_key, kdf_algorithm) = derive_root_key(password, &salt, params, algorithm)?;
    let hk = Hkdf::<Sha256>::new(Some(&salt[..]), &root_key);
    let mut enc_key = [0u8; 32];
    hk.expand(b"vault_enc_key_v1", &mut enc_key).map_err(|_| {
        PortError::Validation("hkdf expand for vault_enc_key_v1 failed".to_owned())
    })?;
    Ok(VaultKey {
        kdf_algorithm,
        salt,
        enc_key,
    })
}

pub fn encrypt_aes_gcm(
    enc_key: &[u8; 32],
    nonce: [u8; 12],
    plaintext: &[u8],
) -> Result<Vec<u8>, PortError> {
    let cipher = Aes256Gcm::new_from_slice(enc_key)
        .map_err(|e| PortError::Validation(format!("aes-gcm init failed: {e}")))?;
    let nonce = Nonce::<aes_gcm::aead::consts::U12>::from(nonce);
    cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PortError::Transport(format!("aes-gcm encrypt failed: {e}")))
}

pub fn decrypt_aes_gcm(
    enc_key: &[u8; 32],
    nonce: [u8; 12],
    ciphertext: &[u8],
) -> Result<Vec<u8>, PortError> {
    let cipher = Aes256Gcm::new_from_slice(enc_key)
        .map_err(|e| PortError::Validation(format!("aes-gcm init failed: {e}")))?;
    let nonce = Nonce::<aes_gcm::aead::consts::U12>::from(nonce);
    cipher
        .decrypt(&nonce, ciphertext)
        .map_err(|_| PortError::Validation("vault decrypt failed".to_owned()))
}

fn derive_root_key(
    password: &[u8],
    salt: &[u8; 16],
    params: KdfParams,
    algorithm: Option<KdfAlgorithm>,
) -> Result<([u8; 32], KdfAlgorithm), PortError> {
    let mut root = [0u8; 32];
    if algorithm != Some(KdfAlgorithm::Pbkdf2HmacSha256V1) {
        let argon = Params::new(params.memory_kib, params.iterations, 1, Some(32))
            .map(|p| Argon2::new(Algorithm::Argon2id, Version::V0x13, p));
        match argon.map(|a| a.hash_password_into(password, salt, &mut root)) {
            Ok(Ok(())) => return Ok((root, KdfAlgorithm::Argon2idV1)),
            Ok(Err(e)) | Err(e) => {
                if algorithm == Some(KdfAlgorithm::Argon2idV1) {
                    return Err(PortError::Validation(format!("argon2id failed: {e}")));
                }
                tracing::warn!(error = %e, "argon2id unavailable, using pbkdf2");
            }
        }
    }

    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ROUNDS, &mut root);
    Ok((root, KdfAlgorithm::Pbkdf2HmacSha256V1))
}
