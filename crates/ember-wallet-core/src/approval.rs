//! ERC-20 `approve(address,uint256)` call data helpers.
//!
//! Offsets are hex-character offsets into the 0x-prefixed call data string:
//! `0x` + 8 selector chars + 64 spender chars puts the amount word at
//! `[74, 138)`.

use std::ops::Range;

use alloy::primitives::{hex, Address, U256};
use thiserror::Error;

pub const APPROVE_SELECTOR: &str = "0x095ea7b3";

pub const INFINITE_APPROVAL_WORD: &str =
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

const SPENDER_RANGE: Range<usize> = 10..74;
const AMOUNT_RANGE: Range<usize> = 74..138;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("invalid approval amount: {0:?}")]
    InvalidAmount(String),
    #[error("approval amount exceeds uint256")]
    Overflow,
    #[error("call data too short for an approval amount ({len} hex chars)")]
    CalldataTooShort { len: usize },
}

/// The 64-hex-character amount word, or `""` when the call data is absent or
/// does not reach the end of the word.
pub fn approval_amount_word(input: Option<&str>) -> &str {
    input.and_then(|s| s.get(AMOUNT_RANGE)).unwrap_or("")
}

pub fn is_infinite_approval(word: &str) -> bool {
    word.eq_ignore_ascii_case(INFINITE_APPROVAL_WORD)
}

/// Hex word to its exact decimal string. Empty or malformed input gives `""`.
pub fn numeric_string_from_hex(word: &str) -> String {
    let digits = word.trim_start_matches("0x");
    if digits.is_empty() {
        return String::new();
    }
    U256::from_str_radix(digits, 16)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Decimal string to a zero-padded 32-byte hex word (64 lowercase digits,
/// no prefix).
pub fn number_to_32_bytes_hex(decimal: &str) -> Result<String, ApprovalError> {
    let digits = decimal.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApprovalError::InvalidAmount(decimal.to_owned()));
    }
    let value = U256::from_str_radix(digits, 10).map_err(|_| ApprovalError::Overflow)?;
    Ok(hex::encode(value.to_be_bytes::<32>()))
}

/// Rebuilds `input` with the amount word replaced; every other character is
/// kept as-is.
pub fn replace_approval_amount(input: &str, decimal: &str) -> Result<String, ApprovalError> {
    let (Some(prefix), Some(suffix)) = (
        input.get(..AMOUNT_RANGE.start),
        input.get(AMOUNT_RANGE.end..),
    ) else {
        return Err(ApprovalError::CalldataTooShort { len: input.len() });
    };
    let word = number_to_32_bytes_hex(decimal)?;
    Ok(format!("{prefix}{word}{suffix}"))
}

pub fn is_approve_call(input: Option<&str>) -> bool {
    input
        .and_then(|s| s.get(..APPROVE_SELECTOR.len()))
        .is_some_and(|selector| selector.eq_ignore_ascii_case(APPROVE_SELECTOR))
}

/// Spender address from the first argument word.
pub fn approval_spender(input: Option<&str>) -> Option<Address> {
    let word = input?.get(SPENDER_RANGE)?;
    // Left-padded: the address is the trailing 20 bytes.
    word.get(24..)?.parse().ok()
}
