use bip39::{Language, Mnemonic};

use ember_wallet_core::MnemonicPort;

/// Canonical form of a pasted phrase: lowercase words joined by single spaces.
/// Validation and derivation both go through it so they agree on the words.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// English BIP-39 word list and checksum check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bip39MnemonicAdapter;

impl MnemonicPort for Bip39MnemonicAdapter {
    fn is_valid_mnemonic(&self, phrase: &str) -> bool {
        Mnemonic::parse_in_normalized(Language::English, &normalize_phrase(phrase)).is_ok()
    }
}
