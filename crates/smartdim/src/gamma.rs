//! Gamma register encoding.
//!
//! Assembly happens in a signed work buffer ([`GammaWork`]) so the RGB and
//! MTP corrections can overshoot a byte before being folded back; the
//! result is truncated to bytes in [`GammaWork::finish`].

use crate::error::SmartDimError;
use crate::fixed;
use crate::gray_scale::GrayScale;
use crate::mtp::{CenterCell, MtpOffsets, PanelFamily};
use crate::point::{Channel, RefPoint, Rgb, BYTE_POINTS, SEARCHED};
use crate::voltage::{
    ReferenceVoltages, POINT_COEFFICIENT, POINT_DENOMINATOR, V255_COEFFICIENT, V255_DENOMINATOR,
};

/// Largest gamma register block across families.
pub const GAMMA_SET_MAX: usize = 35;

/// First byte of the single-byte point block (V203 R).
const POINT_BASE: usize = 6;

/// Number of RGB correction columns: 3 × V255 + 3 × (V203..V11).
pub const RGB_COMPENSATION: usize = 24;

/// Register-ready gamma bytes for one brightness level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GammaSetting {
    bytes: heapless::Vec<u8, GAMMA_SET_MAX>,
}

impl GammaSetting {
    /// All-zero block sized for `family`.
    pub fn zeroed(family: PanelFamily) -> Self {
        let mut bytes = heapless::Vec::new();
        // gamma_len() never exceeds GAMMA_SET_MAX
        let _ = bytes.resize(family.gamma_len(), 0);
        Self { bytes }
    }

    /// Copy of `bytes`, `None` if longer than [`GAMMA_SET_MAX`].
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        heapless::Vec::from_slice(bytes)
            .ok()
            .map(|bytes| Self { bytes })
    }

    /// Register bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable register bytes.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Byte count.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for an unsized block.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy into the head of `out`, returning the byte count.
    pub fn write_to(&self, out: &mut [u8]) -> Result<usize, SmartDimError> {
        let needed = self.bytes.len();
        let dst = out
            .get_mut(..needed)
            .ok_or(SmartDimError::BufferTooSmall { needed })?;
        dst.copy_from_slice(&self.bytes);
        Ok(needed)
    }
}

/// Space-separated decimal bytes, the AID log format.
impl core::fmt::Display for GammaSetting {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in &self.bytes {
            write!(f, " {b}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GammaSetting {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]}", self.bytes.as_slice());
    }
}

/// Searched gray index per reference point (V1..V255).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrayIndices {
    levels: [u8; SEARCHED.len()],
}

impl GrayIndices {
    /// From raw levels in [`SEARCHED`] order.
    pub const fn new(levels: [u8; SEARCHED.len()]) -> Self {
        Self { levels }
    }

    /// Gray index for `point`; V0 is always gray 0.
    pub fn get(&self, point: RefPoint) -> u8 {
        point
            .searched_slot()
            .and_then(|i| self.levels.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the index for `point`. Ignored for V0.
    pub fn set(&mut self, point: RefPoint, level: u8) {
        if let Some(slot) = point.searched_slot().and_then(|i| self.levels.get_mut(i)) {
            *slot = level;
        }
    }

    /// Raw levels in [`SEARCHED`] order.
    pub fn as_array(&self) -> &[u8; SEARCHED.len()] {
        &self.levels
    }
}

/// `clamp(value - offset, 0, 255)`.
pub fn offset_cal(offset: i32, value: i32) -> u8 {
    let v = value.saturating_sub(offset).clamp(0, 255);
    u8::try_from(v).unwrap_or(u8::MAX)
}

fn low_byte(v: i64) -> i32 {
    i32::try_from(v & 0xFF).unwrap_or(0)
}

/// Signed intermediate gamma block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammaWork {
    family: PanelFamily,
    values: [i32; GAMMA_SET_MAX],
}

impl GammaWork {
    /// Encode the gray-scale voltages at `index` as register values.
    ///
    /// V255 is a 16-bit code relative to `vreg`; V203..V11 are ratios of the
    /// VT span to the next brighter point; V3 uses `vreg` in place of VT.
    /// Bytes past V3 (VT, or V0 and packed VT) are the center-cell defaults.
    #[allow(clippy::arithmetic_side_effects)] // Safety: operands are Q22 voltages < 2^26 scaled by <= 860
    pub fn hexify(
        volts: &ReferenceVoltages,
        gray: &GrayScale,
        cell: &CenterCell,
        index: &GrayIndices,
    ) -> Self {
        let family = cell.family();
        let mut work = Self {
            family,
            values: [0; GAMMA_SET_MAX],
        };
        let vreg = volts.vreg();
        let vt = volts.vt();

        let v255 = gray.get(index.get(RefPoint::V255));
        for ch in Channel::ALL {
            let code = fixed::div((vreg - v255.get(ch)) * V255_DENOMINATOR, vreg) - V255_COEFFICIENT;
            let at = ch.index() * 2;
            work.put(at, low_byte(code >> 8));
            work.put(at + 1, low_byte(code));
        }

        for (k, point) in BYTE_POINTS.iter().enumerate() {
            let anchor = if *point == RefPoint::V3 {
                Rgb::splat(vreg)
            } else {
                vt
            };
            let here = gray.get(index.get(*point));
            let upper = gray.get(index.get(point.upper().unwrap_or(RefPoint::V255)));
            for ch in Channel::ALL {
                let a = anchor.get(ch);
                let code = fixed::div((a - here.get(ch)) * POINT_DENOMINATOR, a - upper.get(ch))
                    - POINT_COEFFICIENT;
                work.put(POINT_BASE + 3 * k + ch.index(), low_byte(code));
            }
        }

        let defaults = cell.max_lux_table();
        let tail_start = POINT_BASE + 3 * BYTE_POINTS.len();
        for (i, b) in defaults.as_slice().iter().enumerate().skip(tail_start) {
            work.put(i, i32::from(*b));
        }

        work
    }

    fn put(&mut self, at: usize, v: i32) {
        if let Some(slot) = self.values.get_mut(at) {
            *slot = v;
        }
    }

    fn at(&self, at: usize) -> i32 {
        self.values.get(at).copied().unwrap_or(0)
    }

    fn v255(&self, ch: Channel) -> i32 {
        let at = ch.index().saturating_mul(2);
        (self.at(at) << 8) | self.at(at.saturating_add(1))
    }

    fn set_v255(&mut self, ch: Channel, level: i32) {
        let at = ch.index().saturating_mul(2);
        // Truncating division keeps the driver's MSB for negative levels.
        self.put(at, (level / 256) & 0xFF);
        self.put(at.saturating_add(1), level & 0xFF);
    }

    /// Add one RGB correction row: columns 0..3 adjust the 16-bit V255
    /// codes, columns 3..24 add to bytes 6..27 (V203..V11).
    pub fn apply_rgb_offsets(&mut self, row: &[i8; RGB_COMPENSATION]) {
        for (col, off) in row.iter().enumerate() {
            let off = i32::from(*off);
            match Channel::ALL.get(col) {
                Some(&ch) => self.set_v255(ch, self.v255(ch).saturating_add(off)),
                None => {
                    let at = col.saturating_add(3);
                    self.put(at, self.at(at).saturating_add(off));
                }
            }
        }
    }

    /// Remove the panel's own MTP offsets so the IC's built-in correction
    /// is not applied twice.
    pub fn subtract_mtp(&mut self, mtp: &MtpOffsets) {
        for ch in Channel::ALL {
            self.set_v255(ch, self.v255(ch).saturating_sub(mtp.v255.get(ch)));
        }
        for (k, offsets) in mtp.points.iter().enumerate() {
            for ch in Channel::ALL {
                let at = POINT_BASE
                    .saturating_add(k.saturating_mul(3))
                    .saturating_add(ch.index());
                self.put(at, i32::from(offset_cal(offsets.get(ch), self.at(at))));
            }
        }
    }

    /// Truncate every value to its low byte.
    pub fn finish(&self) -> GammaSetting {
        let mut out = GammaSetting::zeroed(self.family);
        for (dst, v) in out.as_mut_slice().iter_mut().zip(self.values) {
            *dst = v.to_le_bytes()[0];
        }
        out
    }

    /// Raw signed values (test and debug inspection).
    pub fn values(&self) -> &[i32] {
        self.values.get(..self.family.gamma_len()).unwrap_or(&[])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn offset_cal_clamps() {
        assert_eq!(offset_cal(0, -5), 0);
        assert_eq!(offset_cal(-10, 250), 255);
        assert_eq!(offset_cal(3, 130), 127);
        assert_eq!(offset_cal(-3, 130), 133);
    }

    #[test]
    fn setting_writes_into_buffer() {
        let g = GammaSetting::from_slice(&[1, 2, 3]).unwrap();
        let mut out = [0u8; 5];
        assert_eq!(g.write_to(&mut out).unwrap(), 3);
        assert_eq!(out, [1, 2, 3, 0, 0]);
        let mut short = [0u8; 2];
        assert_eq!(
            g.write_to(&mut short),
            Err(SmartDimError::BufferTooSmall { needed: 3 })
        );
    }

    #[test]
    fn setting_display_is_decimal() {
        let g = GammaSetting::from_slice(&[1, 0, 128]).unwrap();
        assert_eq!(g.to_string(), " 1 0 128");
    }

    #[test]
    fn oversized_setting_rejected() {
        assert!(GammaSetting::from_slice(&[0u8; 36]).is_none());
    }

    #[test]
    fn zeroed_matches_family() {
        assert_eq!(GammaSetting::zeroed(PanelFamily::S6e88a).len(), 33);
        assert_eq!(GammaSetting::zeroed(PanelFamily::S6e3ha2).len(), 35);
    }

    #[test]
    fn gray_indices_skip_v0() {
        let mut idx = GrayIndices::default();
        idx.set(RefPoint::V255, 255);
        idx.set(RefPoint::V0, 9);
        assert_eq!(idx.get(RefPoint::V255), 255);
        assert_eq!(idx.get(RefPoint::V0), 0);
        assert_eq!(idx.as_array()[9], 255);
    }

    fn work_with(values: &[i32]) -> GammaWork {
        let mut w = GammaWork {
            family: PanelFamily::S6e88a,
            values: [0; GAMMA_SET_MAX],
        };
        w.values[..values.len()].copy_from_slice(values);
        w
    }

    #[test]
    fn rgb_v255_carries_into_msb() {
        let mut w = work_with(&[0x00, 0xFF, 0x01, 0x00, 0x00, 0x10, 100]);
        let mut row = [0i8; RGB_COMPENSATION];
        row[0] = 1; // R 0x00FF + 1
        row[1] = -1; // G 0x0100 - 1
        row[3] = -4; // V203 R
        w.apply_rgb_offsets(&row);
        assert_eq!(&w.values()[..7], &[0x01, 0x00, 0x00, 0xFF, 0x00, 0x10, 96]);
    }

    #[test]
    fn mtp_subtraction() {
        let mut w = work_with(&[0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x80, 0x80, 0x05]);
        let mut mtp = MtpOffsets::default();
        mtp.v255 = Rgb { r: 1, g: -1, b: 0 };
        mtp.points[0] = Rgb { r: 3, g: -3, b: 10 };
        w.subtract_mtp(&mtp);
        assert_eq!(&w.values()[..9], &[0x00, 0xFF, 0x01, 0x01, 0x01, 0x00, 125, 131, 0]);
    }

    #[test]
    fn finish_truncates() {
        let mut w = work_with(&[256 + 7, -1]);
        w.values[32] = 0x1FF;
        let g = w.finish();
        assert_eq!(g.len(), 33);
        assert_eq!(g.as_slice()[0], 7);
        assert_eq!(g.as_slice()[1], 0xFF);
        assert_eq!(g.as_slice()[32], 0xFF);
    }
}
