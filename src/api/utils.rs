//! Utility functions for API operations

use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Number;

/// Render an address in EIP-55 checksum form
pub fn checksum(address: &Address) -> String {
    to_checksum(address, None)
}

/// Join a base URL and a path without doubling or dropping the separator
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else if !base_url.ends_with('/') && !path.starts_with('/') {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Append URL-encoded query parameters to `url`
pub fn append_query(url: &mut String, params: &[(&str, String)]) {
    if params.is_empty() {
        return;
    }
    url.push('?');
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(&format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }
}

/// Parse a decimal (or `0x`-prefixed hex) integer string
pub fn parse_u256(value: &str) -> Result<U256, String> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => U256::from_str_radix(hex, 16).map_err(|e| e.to_string()),
        None => U256::from_dec_str(value).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| format!("invalid integer {:?}: {}", value, e))
}

/// Convert an integral, non-negative `f64` to `U256` without rounding
fn u256_from_f64(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    if exponent == 0 {
        // zero or subnormal; only zero is integral
        return Some(U256::zero());
    }
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let shift = exponent - 1075;
    if shift >= 0 {
        if shift > 256 - 53 {
            return None;
        }
        Some(U256::from(mantissa) << shift as usize)
    } else {
        Some(U256::from(mantissa >> (-shift) as u32))
    }
}

/// Integer from a JSON number. Integers past `u64` arrive as `f64` and are
/// accepted when integral; pass exact large amounts as strings.
fn number_to_u256(number: &Number) -> Result<U256, String> {
    if let Some(n) = number.as_u64() {
        return Ok(U256::from(n));
    }
    number
        .as_f64()
        .and_then(u256_from_f64)
        .ok_or_else(|| format!("invalid integer {}", number))
}

fn number_to_u64(number: &Number) -> Result<u64, String> {
    number
        .as_u64()
        .ok_or_else(|| format!("invalid integer {}", number))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Num(Number),
    Str(String),
}

/// Deserialize a `U256` from a JSON integer or integer string
pub fn u256_from_str<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Num(n) => number_to_u256(&n).map_err(D::Error::custom),
        IntOrString::Str(s) => parse_u256(&s).map_err(D::Error::custom),
    }
}

/// Deserialize a `u64` from a JSON integer or integer string
pub fn u64_from_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Num(n) => number_to_u64(&n).map_err(D::Error::custom),
        IntOrString::Str(s) => parse_u64(&s).map_err(D::Error::custom),
    }
}

/// Optional variant of [`u256_from_str`]; pair with `#[serde(default)]`
pub fn opt_u256_from_str<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Num(n)) => number_to_u256(&n).map(Some).map_err(D::Error::custom),
        Some(IntOrString::Str(s)) => parse_u256(&s).map(Some).map_err(D::Error::custom),
    }
}

/// Optional variant of [`u64_from_str`]; pair with `#[serde(default)]`
pub fn opt_u64_from_str<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Num(n)) => number_to_u64(&n).map(Some).map_err(D::Error::custom),
        Some(IntOrString::Str(s)) => parse_u64(&s).map(Some).map_err(D::Error::custom),
    }
}

fn parse_u64(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid integer {:?}: {}", value, e))
}
