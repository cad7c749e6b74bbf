//! Utility functions for the SDK core
//!
//! This module contains common utility functions used throughout the SDK core.

use crate::shared::error::SdkError;
use crate::shared::types::SdkResult;

/// Validate that a value fits an unsigned 8-bit integer
pub fn validate_uint8(value: i64) -> SdkResult<u8> {
    u8::try_from(value).map_err(|_| SdkError::validation(format!("{} is not a uint8", value)))
}

/// Format a base-unit amount with decimals
///
/// `"1000000"` with 6 decimals renders as `"1.000000"`.
pub fn format_units(amount: &str, decimals: u8) -> SdkResult<String> {
    if amount.is_empty() {
        return Err(SdkError::validation("Amount cannot be empty"));
    }

    let amount_u128 = amount
        .parse::<u128>()
        .map_err(|_| SdkError::validation("Invalid amount format"))?;

    let digits = amount_u128.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return Ok(digits);
    }

    if digits.len() <= decimals {
        Ok(format!("0.{:0>width$}", digits, width = decimals))
    } else {
        let (whole, frac) = digits.split_at(digits.len() - decimals);
        Ok(format!("{}.{}", whole, frac))
    }
}

/// Parse a formatted amount back into base units
///
/// Fractional digits beyond `decimals` are truncated.
pub fn parse_units(amount: &str, decimals: u8) -> SdkResult<String> {
    if amount.is_empty() {
        return Err(SdkError::validation("Amount cannot be empty"));
    }

    let mut parts = amount.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let frac = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(SdkError::validation("Invalid amount format"));
    }
    if whole.is_empty() && frac.is_empty() {
        return Err(SdkError::validation("Invalid amount format"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(SdkError::validation("Invalid amount format"));
    }

    let decimals = decimals as usize;
    let frac = if frac.len() > decimals {
        &frac[..decimals]
    } else {
        frac
    };

    let mut base_units = if whole.is_empty() {
        String::from("0")
    } else {
        whole.to_string()
    };
    base_units.push_str(frac);
    for _ in 0..(decimals - frac.len()) {
        base_units.push('0');
    }

    // Normalizes leading zeros, rejects overflow
    let value = base_units
        .parse::<u128>()
        .map_err(|_| SdkError::validation("Invalid amount format"))?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uint8() {
        // Valid values
        assert_eq!(validate_uint8(0).expect("0 is a uint8"), 0);
        assert_eq!(validate_uint8(18).expect("18 is a uint8"), 18);
        assert_eq!(validate_uint8(255).expect("255 is a uint8"), 255);

        // Invalid values
        assert!(validate_uint8(-1).is_err());
        assert!(validate_uint8(256).is_err());
        assert!(validate_uint8(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_uint8_error_kind() {
        let error = validate_uint8(300).unwrap_err();
        assert!(matches!(error, SdkError::Validation(_)));
        assert!(format!("{}", error).contains("300 is not a uint8"));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units("1000000", 6).expect("Failed to format amount"), "1.000000");
        assert_eq!(format_units("100000", 6).expect("Failed to format amount"), "0.100000");
        assert_eq!(
            format_units("1000000000000000000", 18).expect("Failed to format amount"),
            "1.000000000000000000"
        );
        assert_eq!(format_units("42", 0).expect("Failed to format amount"), "42");
    }

    #[test]
    fn test_format_units_invalid() {
        assert!(format_units("", 6).is_err());
        assert!(format_units("1.5", 6).is_err());
        assert!(format_units("abc", 6).is_err());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1.000000", 6).expect("Failed to parse amount"), "1000000");
        assert_eq!(parse_units("0.100000", 6).expect("Failed to parse amount"), "100000");
        assert_eq!(parse_units(".5", 6).expect("Failed to parse amount"), "500000");
        assert_eq!(parse_units("7", 2).expect("Failed to parse amount"), "700");
        assert_eq!(
            parse_units("1.000000000000000000", 18).expect("Failed to parse amount"),
            "1000000000000000000"
        );
    }

    #[test]
    fn test_parse_units_truncates_extra_digits() {
        assert_eq!(parse_units("1.23456789", 4).expect("Failed to parse amount"), "12345");
    }

    #[test]
    fn test_parse_units_invalid() {
        assert!(parse_units("", 6).is_err());
        assert!(parse_units(".", 6).is_err());
        assert!(parse_units("1.2.3", 6).is_err());
        assert!(parse_units("12a", 6).is_err());
    }
}
