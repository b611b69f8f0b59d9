//! 256-level gray-scale voltage table.
//!
//! Reference voltages are copied into their gray slots verbatim; every
//! other slot is interpolated from the two enclosing anchors with a
//! per-gap (coefficient, multiple, denominator) triple.

use crate::error::SmartDimError;
use crate::fixed;
use crate::point::{RefPoint, Rgb, REFERENCE_LEVELS};
use crate::voltage::ReferenceVoltages;

/// Number of gray levels.
pub const GRAY_SCALE_MAX: usize = 256;

/// Interpolation parameters between two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// Lower gray index, higher voltage.
    pub high: RefPoint,
    /// Upper gray index, lower voltage.
    pub low: RefPoint,
    /// Numerator for the first interior level.
    pub coeff: i64,
    /// Numerator step per level.
    pub mul: i64,
    /// Denominator.
    pub denom: i64,
}

const fn gap(high: RefPoint, low: RefPoint, coeff: i64, mul: i64, denom: i64) -> Gap {
    Gap {
        high,
        low,
        coeff,
        mul,
        denom,
    }
}

/// The gap V1 sits in.
pub const V0_TO_V3: Gap = gap(RefPoint::V0, RefPoint::V3, 2, 1, 3);

/// Gaps between anchors. V1 is itself the first V0→V3 interpolant, so the
/// first gap spans it.
pub const GAPS: [Gap; 9] = [
    V0_TO_V3,
    gap(RefPoint::V3, RefPoint::V11, 7, 1, 8),
    gap(RefPoint::V11, RefPoint::V23, 11, 1, 12),
    gap(RefPoint::V23, RefPoint::V35, 11, 1, 12),
    gap(RefPoint::V35, RefPoint::V51, 15, 1, 16),
    gap(RefPoint::V51, RefPoint::V87, 35, 1, 36),
    gap(RefPoint::V87, RefPoint::V151, 63, 1, 64),
    gap(RefPoint::V151, RefPoint::V203, 51, 1, 52),
    gap(RefPoint::V203, RefPoint::V255, 51, 1, 52),
];

/// `k`-th interior level of `gap` (0 is next to `high`).
///
/// `low + ((high - low) * (coeff - k * mul) << 22) / denom >> 22`
#[allow(clippy::arithmetic_side_effects)] // Safety: Q22 voltages < 2^26, factor < 64; product < 2^32 before the shift
pub fn interpolate(high: i64, low: i64, gap: &Gap, k: i64) -> i64 {
    let weighted = (high - low) * (gap.coeff - k * gap.mul);
    low + (fixed::ratio(weighted, gap.denom) >> fixed::BIT_SHIFT)
}

/// Voltage for each of the 256 gray levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayScale {
    table: [Rgb<i64>; GRAY_SCALE_MAX],
}

impl GrayScale {
    /// Build the table from the computed reference voltages.
    pub fn generate(volts: &ReferenceVoltages) -> Result<Self, SmartDimError> {
        Self::generate_with(&REFERENCE_LEVELS, volts.levels())
    }

    /// Build with explicit reference levels (one per [`RefPoint`]).
    pub fn generate_with(
        levels: &[u8; 11],
        refs: &[Rgb<i64>; 11],
    ) -> Result<Self, SmartDimError> {
        if let Some(index) = levels.windows(2).position(|w| w.first() >= w.get(1)) {
            return Err(SmartDimError::GrayScaleOrder { index });
        }

        let mut table = [Rgb::default(); GRAY_SCALE_MAX];
        for (level, volts) in levels.iter().zip(refs) {
            if let Some(slot) = table.get_mut(usize::from(*level)) {
                *slot = *volts;
            }
        }

        for g in &GAPS {
            let (Some(&from), Some(&to)) = (levels.get(g.high.slot()), levels.get(g.low.slot()))
            else {
                continue;
            };
            let (Some(high), Some(low)) = (refs.get(g.high.slot()), refs.get(g.low.slot())) else {
                continue;
            };
            let interior = usize::from(from).saturating_add(1)..usize::from(to);
            for (k, level) in (0_i64..).zip(interior) {
                // Reference slots inside a gap (V1) are the interpolant by construction.
                if levels.contains(&u8::try_from(level).unwrap_or(u8::MAX)) {
                    continue;
                }
                if let Some(slot) = table.get_mut(level) {
                    *slot = high.map(|ch, h| interpolate(h, low.get(ch), g, k));
                }
            }
        }

        Ok(Self { table })
    }

    /// Voltage at `level`.
    pub fn get(&self, level: u8) -> Rgb<i64> {
        self.table
            .get(usize::from(level))
            .copied()
            .unwrap_or_default()
    }

    /// The full table, ascending gray level.
    pub fn as_slice(&self) -> &[Rgb<i64>] {
        &self.table
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    fn linear_refs() -> [Rgb<i64>; 11] {
        let mut refs = [Rgb::default(); 11];
        for (i, level) in REFERENCE_LEVELS.iter().enumerate() {
            refs[i] = Rgb::splat(1_000_000 - i64::from(*level) * 1000);
        }
        // V1 must be the V0→V3 interpolant
        refs[1] = Rgb::splat(interpolate(refs[0].r, refs[2].r, &GAPS[0], 0));
        refs
    }

    #[test]
    fn interpolate_first_gap() {
        // 2/3 of the way from 3000 (low) toward 6000 (high)
        assert_eq!(interpolate(6000, 3000, &GAPS[0], 0), 5000);
        assert_eq!(interpolate(6000, 3000, &GAPS[0], 1), 4000);
    }

    #[test]
    fn reference_slots_are_exact() {
        let refs = linear_refs();
        let gs = GrayScale::generate_with(&REFERENCE_LEVELS, &refs).unwrap();
        for (i, level) in REFERENCE_LEVELS.iter().enumerate() {
            assert_eq!(gs.get(*level), refs[i], "slot {level}");
        }
    }

    #[test]
    fn interior_levels_descend() {
        let gs = GrayScale::generate_with(&REFERENCE_LEVELS, &linear_refs()).unwrap();
        let t = gs.as_slice();
        for w in t.windows(2) {
            assert!(w[0].r >= w[1].r);
        }
    }

    #[test]
    fn gap_restarts_count_at_each_anchor() {
        let refs = linear_refs();
        let gs = GrayScale::generate_with(&REFERENCE_LEVELS, &refs).unwrap();
        // Level 4 is the first interior level after V3: 7/8 toward V3.
        let v3 = refs[2].r;
        let v11 = refs[3].r;
        assert_eq!(gs.get(4).r, interpolate(v3, v11, &GAPS[1], 0));
        assert_eq!(gs.get(10).r, interpolate(v3, v11, &GAPS[1], 6));
    }

    #[test]
    fn unordered_levels_rejected() {
        let mut levels = REFERENCE_LEVELS;
        levels.swap(4, 5);
        let err = GrayScale::generate_with(&levels, &linear_refs()).unwrap_err();
        assert_eq!(err, SmartDimError::GrayScaleOrder { index: 4 });
    }
}
