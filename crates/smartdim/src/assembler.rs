//! Per-brightness gamma assembly.
//!
//! [`Calibration`] holds everything derived once from a panel's MTP dump
//! (offsets, reference voltages, the 256-level gray scale and the curve
//! tables) and turns a brightness level into register bytes:
//!
//! 1. brightness → base candela ([`CandelaMap`](crate::revision::CandelaMap))
//! 2. per-point candela targets from the 2.15 or 2.2 coefficient curve
//! 3. gray index search for V1..V255
//! 4. gradation correction of the indices
//! 5. hexify
//! 6. RGB correction
//! 7. MTP subtraction
//!
//! The pure-gamma path skips steps 1, 4 and 6.

use crate::curve::{CurveTable, GammaCurve};
use crate::error::SmartDimError;
use crate::gamma::{GammaSetting, GammaWork, GrayIndices};
use crate::gray_scale::GrayScale;
use crate::mtp::{CenterCell, MtpOffsets};
use crate::point::{RefPoint, SEARCHED};
use crate::revision::RevisionProfile;
use crate::search::search_or_clamp;
use crate::voltage::ReferenceVoltages;

/// How cached tables are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AssemblyMode {
    /// Candela map, gradation and RGB corrections (AID panels).
    #[default]
    Aid,
    /// Brightness used as candela on the 2.2 curve, no corrections.
    Pure,
}

/// Brightness range where the pure path nudges V3 up by one gray level.
const PURE_V3_BUMP: core::ops::RangeInclusive<u16> = 190..=210;

/// Per-panel state the assembler works from.
#[derive(Debug, Clone)]
pub struct Calibration {
    profile: RevisionProfile,
    mtp: MtpOffsets,
    cell: CenterCell,
    volts: ReferenceVoltages,
    gray: GrayScale,
    coeff_2p15: CurveTable,
    coeff_2p2: CurveTable,
    search: CurveTable,
}

impl Calibration {
    /// Decode `raw_mtp` against `profile` at the profile's regulator voltage.
    pub fn new(profile: &RevisionProfile, raw_mtp: &[u8]) -> Result<Self, SmartDimError> {
        Self::with_vreg(profile, raw_mtp, profile.vreg)
    }

    /// As [`Calibration::new`] with an explicit Q22 regulator voltage.
    pub fn with_vreg(
        profile: &RevisionProfile,
        raw_mtp: &[u8],
        vreg: i64,
    ) -> Result<Self, SmartDimError> {
        let mtp = MtpOffsets::from_raw(profile.family, raw_mtp)?;
        let cell = CenterCell::from_register_bytes(profile.family, profile.center_cell)?;
        let volts = ReferenceVoltages::compute(vreg, &cell, &mtp);
        let gray = GrayScale::generate(&volts).map_err(|e| {
            warn!("gray scale generation failed: {}", e);
            e
        })?;

        Ok(Self {
            profile: *profile,
            mtp,
            cell,
            volts,
            gray,
            coeff_2p15: CurveTable::coefficients(GammaCurve::G2p15),
            coeff_2p2: CurveTable::coefficients(GammaCurve::G2p2),
            search: profile.search_curve.table(),
        })
    }

    /// Gamma bytes for `brightness` in the given mode.
    pub fn gamma(&self, brightness: u16, mode: AssemblyMode) -> GammaSetting {
        match mode {
            AssemblyMode::Aid => self.gamma_for(brightness),
            AssemblyMode::Pure => self.pure_gamma(brightness),
        }
    }

    /// Full AID pipeline for `brightness`.
    pub fn gamma_for(&self, brightness: u16) -> GammaSetting {
        let row = self.bracket(brightness);
        let index = self.gray_indices_at(brightness, row);

        let mut work = GammaWork::hexify(&self.volts, &self.gray, &self.cell, &index);
        if let Some(offsets) = self.profile.rgb_offset.get(row) {
            work.apply_rgb_offsets(offsets);
        }
        work.subtract_mtp(&self.mtp);
        work.finish()
    }

    /// Gamma bytes treating `candela` as the target on the plain 2.2 curve.
    pub fn pure_gamma(&self, candela: u16) -> GammaSetting {
        let mut index = self.search_indices(&self.coeff_2p2, candela);
        if PURE_V3_BUMP.contains(&candela) {
            index.set(RefPoint::V3, index.get(RefPoint::V3).saturating_add(1));
        }

        let mut work = GammaWork::hexify(&self.volts, &self.gray, &self.cell, &index);
        work.subtract_mtp(&self.mtp);
        work.finish()
    }

    /// Corrected gray indices the AID path encodes for `brightness`.
    pub fn gray_indices(&self, brightness: u16) -> GrayIndices {
        self.gray_indices_at(brightness, self.bracket(brightness))
    }

    fn gray_indices_at(&self, brightness: u16, row: usize) -> GrayIndices {
        let base = self.profile.candela_map.base_candela(brightness);
        let coeff = if brightness < self.profile.top_brightness {
            &self.coeff_2p15
        } else {
            &self.coeff_2p2
        };
        let mut index = self.search_indices(coeff, base);
        if let Some(steps) = self.profile.gradation.get(row) {
            apply_gradation(&mut index, steps);
        }
        index
    }

    fn search_indices(&self, coeff: &CurveTable, base: u16) -> GrayIndices {
        let base = i64::from(base);
        GrayIndices::new(SEARCHED.map(|point| {
            let target = coeff.get(point.gray_level()).saturating_mul(base);
            search_or_clamp(target, &self.search)
        }))
    }

    fn bracket(&self, brightness: u16) -> usize {
        let brackets = &self.profile.brackets;
        brackets.row(brightness).unwrap_or_else(|e| {
            warn!("{}, using row {}", e, brackets.last());
            brackets.last()
        })
    }

    /// Minimum-brightness table (pure path at the profile's minimum candela).
    pub fn min_lux_table(&self) -> GammaSetting {
        self.pure_gamma(self.profile.min_candela)
    }

    /// Center-cell defaults in register order.
    pub fn max_lux_table(&self) -> GammaSetting {
        self.cell.max_lux_table()
    }

    /// Profile the calibration was built from.
    pub fn profile(&self) -> &RevisionProfile {
        &self.profile
    }

    /// Decoded MTP offsets.
    pub fn mtp(&self) -> &MtpOffsets {
        &self.mtp
    }

    /// Reference voltages.
    pub fn voltages(&self) -> &ReferenceVoltages {
        &self.volts
    }

    /// 256-level gray scale.
    pub fn gray_scale(&self) -> &GrayScale {
        &self.gray
    }
}

/// Add one gradation row to the searched indices.
///
/// Columns run V255, V203, …, V3. Gray 0 is reserved, so results are held
/// to `1..=255`.
pub fn apply_gradation(index: &mut GrayIndices, steps: &[i8; 9]) {
    for (&point, &step) in SEARCHED.iter().rev().zip(steps) {
        let level = i16::from(index.get(point)).saturating_add(i16::from(step));
        let level = u8::try_from(level.clamp(1, 255)).unwrap_or(u8::MAX);
        index.set(point, level);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::point::REFERENCE_LEVELS;
    use crate::tables::{ams452ef, s6e3ha2, s6e88a};

    fn zero_mtp() -> Calibration {
        Calibration::new(&s6e88a::DEFAULT, &[0u8; 33]).unwrap()
    }

    /// Zero MTP at full brightness lands on the reference levels; the
    /// truncating encode reads back one code below the center cell.
    const TOP_ZERO_MTP: [u8; 33] = [
        0, 255, 0, 255, 0, 255, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
        127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 0, 0, 0,
    ];

    #[test]
    fn top_level_hits_reference_points() {
        let cal = zero_mtp();
        let idx = cal.gray_indices(350);
        assert_eq!(idx.as_array()[..], REFERENCE_LEVELS[1..]);
        assert_eq!(cal.gamma_for(350).as_slice(), &TOP_ZERO_MTP);
    }

    #[test]
    fn pure_matches_aid_at_top() {
        let cal = zero_mtp();
        assert_eq!(cal.pure_gamma(350), cal.gamma_for(350));
        assert_eq!(cal.gamma(350, AssemblyMode::Pure), cal.gamma(350, AssemblyMode::Aid));
    }

    #[test]
    fn indices_drop_with_brightness() {
        let cal = zero_mtp();
        let hi = cal.gray_indices(300);
        let lo = cal.gray_indices(20);
        assert!(lo.get(RefPoint::V255) < hi.get(RefPoint::V255));
        for p in SEARCHED {
            assert!(lo.get(p) >= 1);
        }
    }

    #[test]
    fn bracket_miss_uses_last_row() {
        let cal = zero_mtp();
        // 18 is not a supported level; the last row carries no correction.
        let got = cal.gray_indices(18);
        let base = i64::from(s6e88a::DEFAULT.candela_map.base_candela(18));
        for p in SEARCHED {
            let target = cal.coeff_2p15.get(p.gray_level()) * base;
            assert_eq!(got.get(p), search_or_clamp(target, &cal.search).max(1), "{p:?}");
        }
    }

    #[test]
    fn gradation_holds_indices_in_range() {
        let mut idx = GrayIndices::new([0, 2, 11, 23, 35, 51, 87, 151, 203, 250]);
        apply_gradation(&mut idx, &[10, 0, 0, 0, 0, 0, 0, 0, -5]);
        assert_eq!(idx.get(RefPoint::V255), 255);
        assert_eq!(idx.get(RefPoint::V3), 1);
        // V1 has no column.
        assert_eq!(idx.get(RefPoint::V1), 0);
    }

    #[test]
    fn gradation_maps_columns_high_to_low() {
        let mut idx = GrayIndices::new([1, 3, 11, 23, 35, 51, 87, 151, 203, 200]);
        apply_gradation(&mut idx, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(idx.as_array(), &[1, 12, 19, 30, 41, 56, 91, 154, 205, 201]);
    }

    #[test]
    fn pure_bumps_v3_in_window() {
        let cal = zero_mtp();
        let plain = cal.search_indices(&cal.coeff_2p2, 200);
        let g = cal.pure_gamma(200);
        let mut bumped = plain;
        bumped.set(RefPoint::V3, plain.get(RefPoint::V3) + 1);
        let mut work = GammaWork::hexify(&cal.volts, &cal.gray, &cal.cell, &bumped);
        work.subtract_mtp(&cal.mtp);
        assert_eq!(g, work.finish());
    }

    #[test]
    fn max_lux_table_is_center_cell() {
        let cal = zero_mtp();
        assert_eq!(cal.max_lux_table().as_slice(), &s6e88a::DEFAULT.center_cell[..]);
    }

    #[test]
    fn wrong_mtp_length_rejected() {
        let err = Calibration::new(&s6e88a::DEFAULT, &[0u8; 35]).unwrap_err();
        assert_eq!(err, SmartDimError::MtpLength { expected: 33, actual: 35 });
    }

    #[test]
    fn s6e3ha2_tables_are_35_bytes() {
        let cal = Calibration::new(&s6e3ha2::REV_C, &[0u8; 35]).unwrap();
        for level in [2u16, 77, 172, 350] {
            let g = cal.gamma_for(level);
            assert_eq!(g.len(), 35);
            assert_eq!(&g.as_slice()[30..], &[0, 0, 0, 0, 0]);
        }
        assert_eq!(cal.min_lux_table().len(), 35);
    }

    #[test]
    fn ams452ef_searches_360_curve() {
        let cal = Calibration::new(&ams452ef::REV_A, &[0u8; 33]).unwrap();
        // 336 cd sits below the 360 cd peak.
        assert!(cal.gray_indices(333).get(RefPoint::V255) < 255);
        assert_eq!(cal.gray_indices(350).get(RefPoint::V255), 255);
    }

    #[test]
    fn vreg_override_changes_voltages() {
        let a = zero_mtp();
        let b = Calibration::with_vreg(&s6e88a::DEFAULT, &[0u8; 33], crate::fixed::volts(6000))
            .unwrap();
        assert_ne!(a.voltages(), b.voltages());
    }
}
