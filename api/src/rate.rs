use stellar_xdr::curr::Price;

use crate::error::{ApiError, ApiResult};

/// Price of one local unit expressed in HOURs, as the fraction `n / d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    n: u32,
    d: u32,
}

impl Rate {
    pub fn new(n: u32, d: u32) -> ApiResult<Self> {
        let fits = |v: u32| v > 0 && v <= i32::MAX as u32;
        if !fits(n) || !fits(d) {
            return Err(ApiError::InvalidRate { n, d });
        }
        Ok(Self { n, d })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn d(&self) -> u32 {
        self.d
    }

    /// Price of one HOUR in local units.
    pub fn reciprocal(&self) -> Self {
        Self { n: self.d, d: self.n }
    }

    pub fn to_price(&self) -> Price {
        // Both terms are bounded by i32::MAX in `new`.
        Price { n: self.n as i32, d: self.d as i32 }
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

/// Maximum amount of the source asset to spend so that the receiver gets
/// `dest_amount` of the destination asset.
///
/// The destination amount is first valued in HOURs with the destination
/// rate, then converted into source units with the inverse of the source
/// rate:
///
/// ```text
/// send_max = dest_amount * (dest.n / dest.d) * (source.d / source.n)
/// ```
///
/// All amounts are in stroops. The result is rounded up to the next stroop.
pub fn send_max(dest_amount: i64, dest: &Rate, source: &Rate) -> ApiResult<i64> {
    if dest_amount <= 0 {
        return Err(ApiError::InvalidAmount(dest_amount.to_string()));
    }

    let num = (dest_amount as i128)
        .checked_mul(dest.n as i128)
        .and_then(|v| v.checked_mul(source.d as i128))
        .ok_or(ApiError::AmountOverflow)?;
    let den = dest.d as i128 * source.n as i128;

    let quotient = num / den;
    let rounded = if num % den == 0 { quotient } else { quotient + 1 };

    i64::try_from(rounded).map_err(|_| ApiError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_stroops;

    fn rate(n: u32, d: u32) -> Rate {
        Rate::new(n, d).unwrap()
    }

    #[test]
    fn test_reciprocal_is_exact_inverse() {
        let r = rate(1, 10).reciprocal();
        assert_eq!((r.n(), r.d()), (10, 1));
        assert_eq!(rate(3, 7).reciprocal().reciprocal(), rate(3, 7));

        let price = rate(1, 10).reciprocal().to_price();
        assert_eq!((price.n, price.d), (10, 1));
    }

    #[test]
    fn test_rejects_degenerate_rates() {
        assert!(Rate::new(0, 1).is_err());
        assert!(Rate::new(1, 0).is_err());
        assert!(Rate::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn test_send_max_equal_rates_is_identity() {
        let amount = to_stroops(20).unwrap();
        assert_eq!(send_max(amount, &rate(1, 1), &rate(1, 1)).unwrap(), amount);
        assert_eq!(send_max(amount, &rate(1, 10), &rate(1, 10)).unwrap(), amount);
        assert_eq!(send_max(amount, &rate(7, 3), &rate(7, 3)).unwrap(), amount);
    }

    #[test]
    fn test_send_max_between_unequal_rates() {
        let a = rate(1, 1);
        let b = rate(1, 10);

        // 20 COINB = 2 HOUR = 2 COINA.
        assert_eq!(
            send_max(to_stroops(20).unwrap(), &b, &a).unwrap(),
            to_stroops(2).unwrap()
        );

        // 5 COINA = 5 HOUR = 50 COINB.
        assert_eq!(
            send_max(to_stroops(5).unwrap(), &a, &b).unwrap(),
            to_stroops(50).unwrap()
        );
    }

    #[test]
    fn test_send_max_matches_formula() {
        let cases = [
            (123_456_789i64, rate(2, 3), rate(5, 7)),
            (10_000_000, rate(1, 4), rate(3, 2)),
            (999, rate(9, 1), rate(1, 9)),
        ];
        for (amount, dest, source) in cases {
            let num = amount as i128 * dest.n() as i128 * source.d() as i128;
            let den = dest.d() as i128 * source.n() as i128;
            let expected = (num + den - 1) / den;
            assert_eq!(send_max(amount, &dest, &source).unwrap() as i128, expected);
        }
    }

    #[test]
    fn test_send_max_rounds_up() {
        // 1 stroop at 1/3 HOUR per unit is a third of a stroop of a 1/1 currency.
        assert_eq!(send_max(1, &rate(1, 3), &rate(1, 1)).unwrap(), 1);
        assert_eq!(send_max(4, &rate(1, 3), &rate(1, 1)).unwrap(), 2);
    }

    #[test]
    fn test_send_max_rejects_bad_amounts() {
        assert!(send_max(0, &rate(1, 1), &rate(1, 1)).is_err());
        assert!(send_max(i64::MAX, &rate(i32::MAX as u32, 1), &rate(1, 1)).is_err());
    }
}
