//! Truncating fixed-point helpers.
//!
//! Voltages and ratios are carried as `i64` scaled by `2^BIT_SHIFT`.
//! Division truncates toward zero and a zero divisor yields 0, so no helper
//! here can panic.

/// Fractional bits of every fixed-point quantity in the engine.
pub const BIT_SHIFT: u32 = 22;

/// `1.0` in fixed point (`2^BIT_SHIFT`).
pub const ONE: i64 = 4_194_304;

/// `(num << BIT_SHIFT) / den`, truncating. Returns 0 when `den == 0`.
pub const fn ratio(num: i64, den: i64) -> i64 {
    match num.wrapping_shl(BIT_SHIFT).checked_div(den) {
        Some(q) => q,
        None => 0,
    }
}

/// `(value * ratio) >> BIT_SHIFT`.
pub const fn scale(value: i64, ratio: i64) -> i64 {
    value.wrapping_mul(ratio) >> BIT_SHIFT
}

/// `num / den`, truncating toward zero. Returns 0 when `den == 0`.
pub const fn div(num: i64, den: i64) -> i64 {
    match num.checked_div(den) {
        Some(q) => q,
        None => 0,
    }
}

/// Millivolts to fixed-point volts, used for the `vreg` constants.
pub const fn volts(millivolts: i64) -> i64 {
    div(millivolts.wrapping_mul(ONE), 1000)
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn ratio_truncates() {
        // 1/3 in Q22 is 1398101.33…
        assert_eq!(ratio(1, 3), 1_398_101);
        assert_eq!(ratio(860, 860), ONE);
    }

    #[test]
    fn zero_divisor_is_zero() {
        assert_eq!(ratio(5, 0), 0);
        assert_eq!(div(5, 0), 0);
    }

    #[test]
    fn scale_by_half() {
        assert_eq!(scale(1000, ONE / 2), 500);
        assert_eq!(scale(1001, ONE / 2), 500);
    }

    #[test]
    fn div_truncates_toward_zero() {
        assert_eq!(div(-7, 2), -3);
        assert_eq!(div(7, 2), 3);
    }

    #[test]
    fn one_is_two_to_the_shift() {
        assert_eq!(ONE, 1 << BIT_SHIFT);
    }

    #[test]
    fn volts_matches_panel_constants() {
        assert_eq!(volts(6200), 26_004_684);
        assert_eq!(volts(6400), 26_843_545);
    }
}
