//! Local/shared decimal conversion
//!
//! Amounts cross the wire in shared decimals. A token with more local
//! precision than the shared precision loses its sub-rate remainder ("dust")
//! when bridged; the dust is returned to the sender and never locked.

use cosmwasm_std::{StdResult, Uint128};

/// `10^(local - shared)`, or `None` if `shared > local` or the rate overflows.
pub fn conversion_rate(local_decimals: u8, shared_decimals: u8) -> Option<Uint128> {
    let exponent = local_decimals.checked_sub(shared_decimals)?;
    10u128.checked_pow(exponent as u32).map(Uint128::new)
}

/// Split a local-decimal amount into `(amount_sd, dust)`.
pub fn remove_dust(amount: Uint128, rate: Uint128) -> (Uint128, Uint128) {
    let amount_sd = amount / rate;
    let dust = amount % rate;
    (amount_sd, dust)
}

pub fn sd_to_ld(amount_sd: Uint128, rate: Uint128) -> StdResult<Uint128> {
    Ok(amount_sd.checked_mul(rate)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rate() {
        assert_eq!(conversion_rate(18, 6), Some(Uint128::new(1_000_000_000_000)));
        assert_eq!(conversion_rate(6, 6), Some(Uint128::one()));
        assert_eq!(conversion_rate(8, 0), Some(Uint128::new(100_000_000)));
    }

    #[test]
    fn test_conversion_rate_rejects_shared_above_local() {
        assert_eq!(conversion_rate(6, 8), None);
    }

    #[test]
    fn test_conversion_rate_overflow() {
        // 10^38 fits in u128, 10^39 does not
        assert!(conversion_rate(38, 0).is_some());
        assert_eq!(conversion_rate(39, 0), None);
    }

    #[test]
    fn test_remove_dust_exact() {
        let rate = conversion_rate(18, 6).unwrap();
        let amount = Uint128::new(10_000_000_000_000_000_000);
        assert_eq!(
            remove_dust(amount, rate),
            (Uint128::new(10_000_000), Uint128::zero())
        );
    }

    #[test]
    fn test_remove_dust_with_remainder() {
        let rate = conversion_rate(18, 6).unwrap();
        let amount = Uint128::new(10_000_000_000_000_012_345);
        let (amount_sd, dust) = remove_dust(amount, rate);
        assert_eq!(amount_sd, Uint128::new(10_000_000));
        assert_eq!(dust, Uint128::new(12_345));
        assert_eq!(sd_to_ld(amount_sd, rate).unwrap() + dust, amount);
    }

    #[test]
    fn test_remove_dust_below_rate() {
        let rate = Uint128::new(100);
        assert_eq!(
            remove_dust(Uint128::new(99), rate),
            (Uint128::zero(), Uint128::new(99))
        );
    }

    #[test]
    fn test_sd_to_ld_overflow() {
        assert!(sd_to_ld(Uint128::MAX, Uint128::new(10)).is_err());
    }
}
