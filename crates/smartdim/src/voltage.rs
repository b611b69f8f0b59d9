//! Reference voltage adjustment.
//!
//! Each reference point's output voltage is derived from the center-cell
//! default plus the panel's MTP offset. V255 and VT hang off `vreg`; V203
//! down to V11 are each a fraction of the span between VT and the next
//! brighter point; V3 uses `vreg` in place of VT.

use crate::fixed;
use crate::gray_scale::{self, V0_TO_V3};
use crate::mtp::{CenterCell, MtpOffsets};
use crate::point::{RefPoint, Rgb};

/// V255 ratio offset.
pub const V255_COEFFICIENT: i64 = 72;
/// V255 ratio denominator.
pub const V255_DENOMINATOR: i64 = 860;
/// VT ratio numerators, indexed by the 4-bit VT code.
pub const VT_COEFFICIENTS: [i64; 16] = [
    0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 138, 148, 158, 168, 178, 186,
];
/// VT ratio denominator.
pub const VT_DENOMINATOR: i64 = 860;
/// V203..V3 ratio offset.
pub const POINT_COEFFICIENT: i64 = 64;
/// V203..V3 ratio denominator.
pub const POINT_DENOMINATOR: i64 = 320;

/// Points derived from VT and their upper neighbour, in evaluation order.
const VT_RELATIVE: [RefPoint; 7] = [
    RefPoint::V203,
    RefPoint::V151,
    RefPoint::V87,
    RefPoint::V51,
    RefPoint::V35,
    RefPoint::V23,
    RefPoint::V11,
];

/// `V255 = vreg - vreg * (72 + default + mtp) / 860`
#[allow(clippy::arithmetic_side_effects)] // Safety: default <= 0xFFFF, |mtp| <= 255; vreg < 2^26
pub fn v255_level(vreg: i64, default: i32, mtp: i32) -> i64 {
    let add = i64::from(default) + i64::from(mtp);
    let ratio = fixed::ratio(V255_COEFFICIENT + add, V255_DENOMINATOR);
    vreg - fixed::scale(vreg, ratio)
}

/// `VT = vreg - vreg * VT_COEFFICIENTS[default + mtp] / 860`, code clamped to 0..=15.
#[allow(clippy::arithmetic_side_effects)] // Safety: vreg < 2^26, coefficient ratio < 1.0
pub fn vt_level(vreg: i64, default: i32, mtp: i32) -> i64 {
    let code = default.saturating_add(mtp).clamp(0, 15);
    let coeff = usize::try_from(code)
        .ok()
        .and_then(|i| VT_COEFFICIENTS.get(i))
        .copied()
        .unwrap_or(0);
    vreg - fixed::scale(vreg, fixed::ratio(coeff, VT_DENOMINATOR))
}

/// `V = anchor - (anchor - upper) * (64 + default + mtp) / 320`
#[allow(clippy::arithmetic_side_effects)] // Safety: anchor, upper < 2^26; |default + mtp| < 2^9
pub fn relative_level(anchor: i64, upper: i64, default: i32, mtp: i32) -> i64 {
    let add = i64::from(default) + i64::from(mtp);
    let ratio = fixed::ratio(POINT_COEFFICIENT + add, POINT_DENOMINATOR);
    anchor - fixed::scale(anchor - upper, ratio)
}

/// Output voltages at the eleven reference points plus VT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceVoltages {
    levels: [Rgb<i64>; 11],
    vt: Rgb<i64>,
    vreg: i64,
}

impl ReferenceVoltages {
    /// Run the adjusters in dependency order: V255, VT, V203 … V11, V3, V1.
    pub fn compute(vreg: i64, cell: &CenterCell, mtp: &MtpOffsets) -> Self {
        let mut levels = [Rgb::splat(vreg); 11];

        let defaults = cell.v255();
        let v255 = Rgb::from_fn(|ch| v255_level(vreg, defaults.get(ch), mtp.v255.get(ch)));
        set(&mut levels, RefPoint::V255, v255);

        let vt_defaults = cell.vt();
        let vt = Rgb::from_fn(|ch| vt_level(vreg, vt_defaults.get(ch), mtp.vt.get(ch)));

        for point in VT_RELATIVE {
            let upper = point.upper().map_or(v255, |u| get(&levels, u));
            let v = relative(vt, upper, cell.point(point), mtp.point(point));
            set(&mut levels, point, v);
        }

        let v3 = relative(
            Rgb::splat(vreg),
            get(&levels, RefPoint::V11),
            cell.point(RefPoint::V3),
            mtp.point(RefPoint::V3),
        );
        set(&mut levels, RefPoint::V3, v3);

        let v1 = v3.map(|_, low| gray_scale::interpolate(vreg, low, &V0_TO_V3, 0));
        set(&mut levels, RefPoint::V1, v1);

        Self { levels, vt, vreg }
    }

    /// Voltage at `point`.
    pub fn level(&self, point: RefPoint) -> Rgb<i64> {
        get(&self.levels, point)
    }

    /// All reference voltages, ascending gray level.
    pub fn levels(&self) -> &[Rgb<i64>; 11] {
        &self.levels
    }

    /// VT voltages.
    pub fn vt(&self) -> Rgb<i64> {
        self.vt
    }

    /// Regulator output the chain is anchored to.
    pub fn vreg(&self) -> i64 {
        self.vreg
    }
}

fn get(levels: &[Rgb<i64>; 11], point: RefPoint) -> Rgb<i64> {
    levels.get(point.slot()).copied().unwrap_or_default()
}

fn set(levels: &mut [Rgb<i64>; 11], point: RefPoint, v: Rgb<i64>) {
    if let Some(slot) = levels.get_mut(point.slot()) {
        *slot = v;
    }
}

fn relative(anchor: Rgb<i64>, upper: Rgb<i64>, default: Rgb<i32>, mtp: Rgb<i32>) -> Rgb<i64> {
    Rgb::from_fn(|ch| relative_level(anchor.get(ch), upper.get(ch), default.get(ch), mtp.get(ch)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::mtp::PanelFamily;

    const VREG: i64 = 26_004_684; // 6.2 V

    fn center() -> CenterCell {
        let mut bytes = [0x80u8; 33];
        bytes[..6].copy_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x01, 0x00]);
        bytes[30..].copy_from_slice(&[0, 0, 0]);
        CenterCell::from_register_bytes(PanelFamily::S6e88a, &bytes).unwrap()
    }

    #[test]
    fn zero_mtp_chain() {
        let v = ReferenceVoltages::compute(VREG, &center(), &MtpOffsets::default());
        let expect = [
            (RefPoint::V0, 26_004_684),
            (RefPoint::V1, 25_949_156),
            (RefPoint::V3, 25_838_100),
            (RefPoint::V11, 25_727_043),
            (RefPoint::V23, 25_541_948),
            (RefPoint::V35, 25_233_457),
            (RefPoint::V51, 24_719_305),
            (RefPoint::V87, 23_862_384),
            (RefPoint::V151, 22_434_182),
            (RefPoint::V203, 20_053_846),
            (RefPoint::V255, 16_086_619),
        ];
        for (p, volts) in expect {
            assert_eq!(v.level(p), Rgb::splat(volts), "{p:?}");
        }
        assert_eq!(v.vt(), Rgb::splat(VREG));
    }

    #[test]
    fn offsets_shift_the_chain() {
        let mut raw = [0u8; 33];
        raw[..6].copy_from_slice(&[0x01, 0x03, 0x01, 0x03, 0x01, 0x03]); // V255 -3
        raw[12..15].copy_from_slice(&[0x05, 0x05, 0x05]); // V87 +5
        raw[30..].copy_from_slice(&[0x02, 0x02, 0x02]); // VT +2
        let mtp = MtpOffsets::from_raw(PanelFamily::S6e88a, &raw).unwrap();
        let v = ReferenceVoltages::compute(VREG, &center(), &mtp);

        assert_eq!(v.vt(), Rgb::splat(25_278_975));
        assert_eq!(v.level(RefPoint::V255).g, 16_177_338);
        assert_eq!(v.level(RefPoint::V203).b, 19_817_994);
        assert_eq!(v.level(RefPoint::V87).r, 23_261_826);
        assert_eq!(v.level(RefPoint::V3).r, 25_412_407);
        assert_eq!(v.level(RefPoint::V1).r, 25_807_258);
    }

    #[test]
    fn vt_code_clamps() {
        assert_eq!(vt_level(VREG, 0, -5), VREG);
        assert_eq!(vt_level(VREG, 10, 20), vt_level(VREG, 15, 0));
    }

    #[test]
    fn v3_anchors_on_vreg() {
        // With V11 == vreg the V3 span is empty.
        assert_eq!(relative_level(VREG, VREG, 128, 0), VREG);
    }
}
