use alloy::primitives::U256;
use rust_decimal::prelude::*;

use crate::error::{EthereumError, Result};

/// Render a raw token amount (smallest on-chain unit) as an exact decimal
/// string.
///
/// The conversion never touches floating point: the base-10 digit string of
/// `raw` is split (or zero-padded) at `decimals` fractional places, so the
/// result is always the mathematically exact value at that precision.
///
/// A zero-decimals token has no fractional representation, so `decimals == 0`
/// returns the integer digits verbatim.
///
/// # Examples
/// ```ignore
/// let raw = U256::from(1_500_000_000_000_000_000u64);
/// assert_eq!(to_decimal_string(raw, 18), "1.5");
/// ```
pub fn to_decimal_string(raw: U256, decimals: u32) -> String {
    let digits = raw.to_string();
    if decimals == 0 {
        return digits;
    }

    let places = decimals as usize;
    let formatted = if digits.len() > places {
        let (int_part, frac_part) = digits.split_at(digits.len() - places);
        format!("{int_part}.{frac_part}")
    } else {
        // Whole value below one display unit; pad up to the full width.
        format!("0.{digits:0>places$}")
    };

    trim_fraction(&formatted)
}

/// Convert a raw amount to a high-precision fraction for computation.
///
/// Zero short-circuits to `Decimal::ZERO` without going through the division.
/// Values whose integer part exceeds `Decimal`'s 96-bit mantissa are
/// rejected; fractional digits beyond `Decimal`'s 28-digit precision are
/// rounded, matching the finite precision of the computed-fraction path.
/// Display rendering goes through [`to_decimal_string`], never this.
pub fn to_scaled(raw: U256, decimals: u32) -> Result<Decimal> {
    if raw.is_zero() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&to_decimal_string(raw, decimals))
        .map_err(|e| EthereumError::Precision(format!("amount does not fit a Decimal: {}", e)))
}

/// Strip trailing fractional zeros from a `<int>.<frac>` string.
///
/// Keeps exactly one zero when the whole fraction strips away ("5.00" ->
/// "5.0") and restores a leading zero if the integer part was stripped
/// (".5" -> "0.5"), so the result never starts or ends with the point.
fn trim_fraction(formatted: &str) -> String {
    let mut trimmed = formatted.trim_end_matches('0').to_string();
    if trimmed.ends_with('.') {
        trimmed.push('0');
    }
    if trimmed.starts_with('.') {
        trimmed.insert(0, '0');
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u256(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn test_one_and_a_half_eth() {
        let raw = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(to_decimal_string(raw, 18), "1.5");
    }

    #[test]
    fn test_whole_unit_keeps_single_zero() {
        let raw = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(to_decimal_string(raw, 18), "1.0");
    }

    #[test]
    fn test_zero_with_decimals() {
        assert_eq!(to_decimal_string(U256::ZERO, 18), "0.0");
        assert_eq!(to_decimal_string(U256::ZERO, 1), "0.0");
    }

    #[test]
    fn test_zero_decimals_is_verbatim() {
        assert_eq!(to_decimal_string(U256::ZERO, 0), "0");
        assert_eq!(to_decimal_string(U256::from(12345u64), 0), "12345");
    }

    #[test]
    fn test_sub_unit_amount_is_padded() {
        assert_eq!(to_decimal_string(U256::from(5u64), 18), "0.000000000000000005");
        assert_eq!(to_decimal_string(U256::from(5u64), 1), "0.5");
    }

    #[test]
    fn test_partial_trailing_zeros_trimmed() {
        assert_eq!(to_decimal_string(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(to_decimal_string(U256::from(1_230_000u64), 6), "1.23");
    }

    #[test]
    fn test_value_larger_than_u128() {
        let raw = u256("123456789012345678901234567890123456789");
        assert_eq!(
            to_decimal_string(raw, 18),
            "123456789012345678901.234567890123456789"
        );
    }

    #[test]
    fn test_never_starts_or_ends_with_point() {
        let cases = [
            (U256::from(1u64), 6u32),
            (U256::from(1_000_000u64), 6),
            (U256::from(999_999u64), 6),
            (U256::ZERO, 6),
            (u256("100000000000000000000000000000000"), 18),
        ];
        for (raw, decimals) in cases {
            let s = to_decimal_string(raw, decimals);
            assert!(!s.starts_with('.'), "leading point in {:?}", s);
            assert!(!s.ends_with('.'), "trailing point in {:?}", s);
        }
    }

    #[test]
    fn test_digits_round_trip_through_integer_scaling() {
        // Re-assemble the raw integer from the rendered string: strip the
        // point, restore trailing zero padding to the full width, parse.
        let cases = [
            (U256::from(1_500_000_000_000_000_000u64), 18u32),
            (U256::from(42u64), 6),
            (U256::from(1_000_000u64), 6),
            (u256("123456789012345678901234567890123456789"), 18),
        ];
        for (raw, decimals) in cases {
            let rendered = to_decimal_string(raw, decimals);
            let (int_part, frac_part) = rendered.split_once('.').unwrap();
            let width = decimals as usize;
            let restored = format!("{int_part}{frac_part:0<width$}");
            assert_eq!(u256(&restored), raw, "round trip failed for {:?}", rendered);
        }
    }

    #[test]
    fn test_scaled_zero_short_circuits() {
        assert_eq!(to_scaled(U256::ZERO, 18).unwrap(), Decimal::ZERO);
        assert_eq!(to_scaled(U256::ZERO, 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_scaled_matches_exact_division() {
        let raw = U256::from(1_500_000_000_000_000_000u64);
        let expected = Decimal::from_str("1.5").unwrap();
        assert_eq!(to_scaled(raw, 18).unwrap(), expected);

        let raw = U256::from(1_000_000u64);
        assert_eq!(to_scaled(raw, 6).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_scaled_rounds_excess_fractional_digits() {
        // 39 significant digits with 18 fractional places: the integer part
        // fits, so the fraction is rounded to Decimal's 28-digit precision
        // instead of erroring.
        let raw = u256("123456789012345678901234567890123456789");
        let scaled = to_scaled(raw, 18).unwrap();
        let expected = Decimal::from_str("123456789012345678901.2345679").unwrap();
        assert_eq!(scaled, expected);
    }

    #[test]
    fn test_scaled_rejects_oversized_integer_part() {
        // 10^40 has no fractional digits to round away; it simply cannot fit.
        let raw = u256("10000000000000000000000000000000000000000");
        assert!(matches!(
            to_scaled(raw, 0),
            Err(EthereumError::Precision(_))
        ));
    }
}
