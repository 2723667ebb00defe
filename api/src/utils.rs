use crate::consts::*;
use crate::error::{ApiError, ApiResult};

/// Whole units to stroops (e.g., 100 -> 1_000_000_000).
pub fn to_stroops(units: i64) -> ApiResult<i64> {
    units.checked_mul(STROOPS_PER_UNIT).ok_or(ApiError::AmountOverflow)
}

/// Stroops to a decimal string with trailing zeros removed (e.g., 25_000_000 -> "2.5").
pub fn from_stroops(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let whole = abs / STROOPS_PER_UNIT as u64;
    let frac = abs % STROOPS_PER_UNIT as u64;
    if frac == 0 {
        return format!("{}{}", sign, whole);
    }
    let frac = format!("{:0width$}", frac, width = DECIMAL_PLACES as usize);
    format!("{}{}.{}", sign, whole, frac.trim_end_matches('0'))
}

/// Parses a non-negative decimal amount with at most 7 fractional digits into stroops.
pub fn parse_amount(value: &str) -> ApiResult<i64> {
    let invalid = || ApiError::InvalidAmount(value.to_string());

    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if frac.len() > DECIMAL_PLACES as usize {
        return Err(invalid());
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
    let scale = 10i64.pow(DECIMAL_PLACES as u32 - frac.len() as u32);
    let frac: i64 = if frac.is_empty() { 0 } else { frac.parse::<i64>().map_err(|_| invalid())? * scale };

    to_stroops(whole)?
        .checked_add(frac)
        .ok_or(ApiError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_stroops() {
        assert_eq!(to_stroops(1).unwrap(), 10_000_000);
        assert_eq!(to_stroops(100_000).unwrap(), 1_000_000_000_000);
        assert!(to_stroops(i64::MAX).is_err());
    }

    #[test]
    fn test_from_stroops() {
        assert_eq!(from_stroops(200_000_000), "20");
        assert_eq!(from_stroops(25_000_000), "2.5");
        assert_eq!(from_stroops(1), "0.0000001");
        assert_eq!(from_stroops(0), "0");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("80").unwrap(), 800_000_000);
        assert_eq!(parse_amount("2.5").unwrap(), 25_000_000);
        assert_eq!(parse_amount("0.0000001").unwrap(), 1);
        assert_eq!(parse_amount(".5").unwrap(), 5_000_000);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount(".").is_err());
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("1.00000001").is_err());
        assert!(parse_amount("1e3").is_err());
    }
}
