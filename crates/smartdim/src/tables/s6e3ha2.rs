//! S6E3HA2 WQHD calibration tables.
//!
//! Rows follow [`BRACKETS`](super::S6E3HA2_BRACKETS): 2 cd to 350 cd.

use super::{S6E3HA2_BRACKETS, S6E3HA2_CENTER_CELL};
use crate::curve::SearchCurve;
use crate::fixed;
use crate::mtp::PanelFamily;
use crate::revision::{BrightnessBand, CandelaMap, RevisionProfile};

/// Regulator output, 6.4 V.
pub const VREG: i64 = fixed::volts(6400);

/// Brightness used for the minimum-brightness table.
pub const MIN_CANDELA: u16 = 2;

/// Revision A tables, also the family default.
pub const REV_A: RevisionProfile = RevisionProfile {
    name: "S6E3HA2 WQHD rev A",
    family: PanelFamily::S6e3ha2,
    vreg: VREG,
    center_cell: &S6E3HA2_CENTER_CELL,
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 350), (333, 337), (316, 321), (300, 303), (282, 287), (265, 271)],
                fallback: 0,
            },
            BrightnessBand::flat(172, 264, 256),
            BrightnessBand {
                min: 77,
                max: 171,
                exact: &[
                    (77, 122),
                    (82, 130),
                    (87, 137),
                    (93, 146),
                    (98, 153),
                    (105, 162),
                    (111, 171),
                    (119, 183),
                    (126, 192),
                    (134, 205),
                    (143, 216),
                    (152, 229),
                    (162, 241),
                ],
                fallback: 0,
            },
        ],
        default: 116,
    },
    brackets: S6E3HA2_BRACKETS,
    gradation: &GRADATION_REV_A,
    rgb_offset: &RGB_OFFSET_REV_A,
    search_curve: SearchCurve::G2P2_350,
    top_brightness: 350,
    min_candela: MIN_CANDELA,
};

/// Revision C tables (rev C and rev D silicon).
pub const REV_C: RevisionProfile = RevisionProfile {
    name: "S6E3HA2 WQHD rev C",
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 350), (333, 334), (316, 317), (300, 304), (282, 288), (265, 270)],
                fallback: 0,
            },
            BrightnessBand::flat(183, 264, 256),
            BrightnessBand {
                min: 82,
                max: 182,
                exact: &[
                    (82, 123),
                    (87, 130),
                    (93, 139),
                    (98, 148),
                    (105, 157),
                    (111, 164),
                    (119, 177),
                    (126, 185),
                    (134, 195),
                    (143, 208),
                    (152, 220),
                    (162, 231),
                    (172, 246),
                ],
                fallback: 0,
            },
        ],
        default: 117,
    },
    gradation: &GRADATION_REV_C,
    rgb_offset: &RGB_OFFSET_REV_C,
    ..REV_A
};

/// Gray-index nudges per bracket.
#[rustfmt::skip]
pub const GRADATION_REV_A: [[i8; 9]; 65] = [
    [0, 7, 13, 19, 27, 31, 34, 32, 32], // 2
    [0, 6, 11, 15, 20, 25, 28, 32, 32], // 3
    [0, 5, 8, 12, 16, 20, 23, 27, 26], // 4
    [0, 5, 7, 11, 14, 17, 20, 25, 22], // 5
    [0, 4, 6, 9, 12, 15, 18, 22, 21], // 6
    [0, 4, 6, 8, 11, 13, 16, 20, 22], // 7
    [0, 3, 5, 8, 10, 12, 15, 19, 19], // 8
    [0, 3, 4, 7, 9, 11, 14, 18, 16], // 9
    [0, 3, 4, 6, 8, 10, 13, 16, 19], // 10
    [0, 3, 4, 6, 7, 9, 11, 15, 19], // 11
    [0, 3, 4, 6, 7, 9, 11, 15, 14], // 12
    [0, 3, 4, 5, 7, 8, 10, 14, 16], // 13
    [0, 3, 4, 5, 6, 8, 10, 14, 13], // 14
    [0, 3, 4, 5, 6, 7, 9, 13, 16], // 15
    [0, 3, 4, 4, 5, 7, 8, 13, 13], // 16
    [0, 3, 3, 5, 5, 7, 8, 13, 12], // 17
    [0, 3, 3, 4, 5, 6, 7, 12, 10], // 19
    [0, 3, 3, 4, 4, 6, 7, 12, 10], // 20
    [0, 3, 3, 4, 4, 6, 7, 11, 12], // 21
    [0, 3, 3, 4, 4, 6, 7, 11, 11], // 22
    [0, 2, 3, 4, 4, 5, 6, 10, 12], // 24
    [0, 3, 3, 4, 4, 5, 6, 10, 12], // 25
    [0, 3, 3, 3, 3, 4, 6, 9, 13], // 27
    [0, 2, 3, 3, 3, 4, 6, 9, 10], // 29
    [0, 2, 3, 3, 3, 4, 6, 9, 10], // 30
    [0, 2, 3, 3, 3, 4, 5, 8, 11], // 32
    [0, 2, 3, 3, 3, 3, 5, 8, 9], // 34
    [0, 2, 3, 3, 2, 3, 5, 8, 7], // 37
    [0, 2, 2, 2, 2, 3, 4, 7, 10], // 39
    [0, 2, 2, 2, 2, 3, 4, 7, 8], // 41
    [0, 2, 2, 2, 2, 3, 4, 6, 5], // 44
    [0, 2, 2, 2, 2, 2, 4, 6, 9], // 47
    [0, 2, 2, 2, 2, 2, 4, 6, 7], // 50
    [0, 2, 2, 2, 2, 2, 3, 6, 4], // 53
    [0, 2, 2, 2, 1, 2, 3, 5, 7], // 56
    [0, 2, 2, 2, 1, 1, 3, 5, 4], // 60
    [0, 2, 2, 2, 1, 1, 3, 4, 8], // 64
    [0, 2, 1, 2, 1, 1, 2, 4, 5], // 68
    [0, 2, 1, 1, 1, 1, 2, 4, 3], // 72
    [0, 3, 0, 1, 1, 1, 3, 4, 5], // 77
    [0, 2, 2, 2, 1, 1, 3, 3, 5], // 82
    [0, 1, 1, 2, 0, 1, 2, 3, 4], // 87
    [0, 1, 0, 1, 0, 0, 2, 3, 5], // 93
    [0, 2, 2, 2, 2, 1, 2, 3, 7], // 98
    [0, 2, 2, 2, 1, 1, 2, 3, 6], // 105
    [0, 2, 3, 2, 1, 1, 1, 2, 6], // 111
    [0, 1, 3, 3, 1, 1, 2, 3, 2], // 119
    [0, 2, 4, 2, 1, 1, 2, 3, 3], // 126
    [0, 2, 3, 2, 2, 1, 2, 3, 2], // 134
    [0, 2, 3, 2, 2, 1, 2, 3, 4], // 143
    [0, 3, 4, 2, 1, 1, 1, 2, 4], // 152
    [0, 2, 3, 2, 1, 1, 2, 2, 3], // 162
    [0, 3, 4, 3, 1, 1, 1, 3, 1], // 172
    [0, 2, 3, 2, 1, 0, 1, 1, 4], // 183
    [0, 2, 2, 2, 0, 0, 1, 1, 3], // 195
    [0, 2, 2, 1, 0, 0, 0, 1, 0], // 207
    [0, 1, 1, 1, 0, -1, 0, 1, 0], // 220
    [0, 1, 1, 1, 0, -1, 0, 1, 0], // 234
    [0, 1, 1, 0, 0, -1, 0, 0, 4], // 249
    [0, 1, 1, 0, 0, -1, -1, 0, 0], // 265
    [0, 1, 1, 0, 0, 0, 0, 0, 0], // 282
    [0, 1, 1, 0, -1, -1, -1, 0, 1], // 300
    [0, 2, 1, 0, -1, 0, 0, 0, 2], // 316
    [0, 0, 1, -2, -1, -1, -1, -1, 3], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET_REV_A: [[i8; 24]; 65] = [
    [-6, 0, -4, -4, 0, -3, -4, 0, -3, -14, 2, -6, -15, 5, -12, -6, 5, -10, -1, 5, -12, 0, 6, -12], // 2
    [-4, 0, -3, -2, 0, -2, -4, 0, -3, -10, 1, -4, -16, 4, -10, -8, 4, -8, -1, 4, -12, 0, 6, -12], // 3
    [-2, 0, -2, -3, 0, -2, -3, 0, -2, -7, 1, -3, -13, 4, -8, -10, 4, -9, -3, 4, -12, 0, 5, -12], // 4
    [-2, 0, -2, -2, 0, -2, -3, 0, -2, -7, 1, -2, -13, 3, -8, -11, 4, -9, -4, 4, -10, 0, 6, -13], // 5
    [-1, 0, -1, -2, 0, -2, -3, 0, -2, -7, 0, -2, -11, 2, -6, -11, 4, -9, -5, 4, -10, -1, 8, -16], // 6
    [-1, 0, -1, -2, 0, -2, -1, 0, -1, -6, 1, -2, -10, 2, -5, -12, 4, -9, -6, 4, -12, 1, 8, -16], // 7
    [0, 0, -1, -2, 0, -1, -2, 0, -2, -6, 0, -2, -8, 2, -5, -13, 4, -9, -6, 4, -10, -1, 9, -18], // 8
    [0, 0, -1, -1, 0, -1, -2, 0, -1, -4, 0, -1, -9, 2, -5, -12, 3, -8, -6, 3, -10, -2, 8, -16], // 9
    [0, 0, -1, -1, 0, -1, -2, 0, -1, -5, 0, -1, -7, 2, -5, -12, 3, -8, -6, 3, -10, -2, 10, -20], // 10
    [0, 0, -1, -1, 0, -1, -2, 0, -1, -4, 0, 0, -7, 2, -4, -11, 3, -7, -7, 3, -12, -1, 9, -20], // 11
    [0, 0, -1, -1, 0, -1, -2, 0, -1, -4, 0, 0, -7, 1, -4, -9, 3, -6, -8, 3, -11, -2, 8, -18], // 12
    [0, 0, -1, -1, 0, -1, -1, 0, 0, -4, 0, -1, -6, 2, -4, -10, 3, -6, -9, 3, -11, 0, 10, -21], // 13
    [0, 0, 0, -1, 0, -2, -1, 0, 0, -4, 0, -1, -5, 1, -4, -10, 3, -6, -8, 3, -10, -2, 9, -20], // 14
    [0, 0, 0, -1, 0, -2, -1, 0, 0, -2, 0, 0, -6, 2, -4, -10, 2, -6, -8, 2, -11, -1, 10, -22], // 15
    [0, 0, 0, -1, 0, -2, -1, 0, 0, -2, 0, 0, -5, 1, -3, -10, 2, -6, -9, 2, -11, 0, 9, -19], // 16
    [0, 0, 0, 0, 0, -1, -2, 0, -2, -2, 0, 0, -5, 1, -3, -10, 2, -6, -9, 2, -11, -3, 8, -18], // 17
    [0, 0, 0, 0, 0, -1, -2, 0, -2, -1, 0, 1, -3, 1, -2, -9, 2, -5, -9, 2, -12, -2, 8, -17], // 19
    [0, 0, 0, 0, 0, -1, -2, 0, -2, -1, 0, 1, -3, 1, -2, -9, 2, -5, -9, 2, -12, -2, 7, -16], // 20
    [0, 0, 0, 0, 0, -1, -1, 0, -1, -2, 0, 0, -3, 1, -2, -8, 2, -4, -7, 2, -10, -3, 10, -22], // 21
    [0, 0, 0, 0, 0, -1, -1, 0, -1, -2, 0, 0, -3, 0, -2, -8, 2, -4, -7, 2, -10, -4, 10, -21], // 22
    [0, 0, 0, 0, 0, -1, -1, 0, -1, -2, 0, 0, -2, 0, -1, -8, 2, -4, -7, 2, -11, -2, 11, -22], // 24
    [0, 0, 0, 0, 0, -1, -1, 0, -2, -2, 0, 1, -2, 0, -1, -8, 1, -4, -7, 1, -11, -4, 10, -22], // 25
    [0, 0, 0, 0, 0, 0, 0, 0, -2, -3, 0, 0, -2, 1, -2, -8, 2, -4, -5, 2, -9, -3, 12, -26], // 27
    [0, 0, 0, 0, 0, 0, 0, 0, -2, -3, 0, 0, -2, 0, -2, -7, 2, -4, -5, 2, -8, -4, 11, -22], // 29
    [0, 0, 0, 0, 0, 0, 0, 0, -2, -3, 0, 0, -1, 0, -2, -8, 1, -4, -5, 1, -8, -5, 10, -22], // 30
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, -1, 0, -2, -8, 1, -4, -4, 1, -10, -5, 12, -24], // 32
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, -1, 0, -2, -7, 2, -4, -3, 2, -8, -5, 10, -22], // 34
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, -2, 0, -2, -6, 1, -4, -3, 1, -8, -6, 10, -20], // 37
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, 0, 0, -1, -6, 1, -3, -2, 1, -10, -6, 10, -22], // 39
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, 0, 0, -1, -6, 1, -3, -2, 1, -10, -6, 10, -20], // 41
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, 0, 0, -1, -4, 1, -2, -1, 1, -9, -7, 12, -25], // 44
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -2, 0, 0, 0, 0, 0, -5, 1, -3, -1, 1, -9, -8, 11, -23], // 47
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -1, -5, 1, -3, -1, 1, -8, -9, 10, -22], // 50
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -1, -4, 1, -2, -2, 1, -10, -5, 8, -16], // 53
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -4, 1, -3, 0, 1, -9, -6, 10, -20], // 56
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -3, 1, -2, 0, 1, -8, -4, 9, -18], // 60
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -3, 1, -2, 1, 1, -8, -6, 10, -22], // 64
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, 1, -2, 2, 1, -9, -4, 9, -18], // 68
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, 1, -2, 3, 1, -9, -5, 8, -16], // 72
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -1, 0, -1, 0, 0, -8, -4, 8, -18], // 77
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, -2, 0, -1, 0, 0, -8, -4, 8, -18], // 82
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -3, 0, -2, 2, 0, -7, -5, 8, -16], // 87
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, 0, -1, 1, 0, -7, -4, 7, -16], // 93
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, -6, -5, 8, -18], // 98
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, -6, -4, 8, -17], // 105
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, -1, 0, 0, -6, -4, 7, -16], // 111
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -5, -1, 6, -14], // 119
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -5, -2, 6, -14], // 126
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, -4, -1, 6, -13], // 134
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -2, 0, 0, 0, 0, -4, -2, 6, -14], // 143
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -4, -1, 6, -13], // 152
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, 0, 0, -2, 0, 6, -13], // 162
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -3, 0, 5, -12], // 172
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, -2, 0, 5, -11], // 183
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -2, 0, 5, -11], // 195
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 2, 0, -2, 3, 4, -9], // 207
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, -2, 4, 4, -9], // 220
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, -2, 4, 4, -9], // 234
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 249
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 265
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 282
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 300
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 316
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Gray-index nudges per bracket.
#[rustfmt::skip]
pub const GRADATION_REV_C: [[i8; 9]; 65] = [
    [0, 8, 14, 23, 32, 37, 40, 35, 37], // 2
    [0, 7, 12, 19, 25, 28, 32, 35, 37], // 3
    [0, 6, 10, 16, 21, 25, 28, 31, 32], // 4
    [0, 6, 8, 14, 17, 21, 23, 27, 28], // 5
    [0, 5, 7, 12, 15, 19, 21, 25, 25], // 6
    [0, 5, 6, 11, 14, 16, 19, 23, 21], // 7
    [0, 5, 6, 10, 12, 15, 17, 22, 20], // 8
    [0, 4, 5, 9, 12, 14, 16, 20, 22], // 9
    [0, 4, 5, 9, 11, 13, 16, 19, 20], // 10
    [0, 3, 4, 8, 10, 11, 14, 18, 18], // 11
    [0, 3, 4, 7, 9, 11, 13, 17, 17], // 12
    [0, 3, 4, 7, 9, 10, 13, 16, 16], // 13
    [0, 3, 4, 7, 8, 10, 12, 15, 18], // 14
    [0, 3, 3, 6, 8, 9, 11, 15, 14], // 15
    [0, 3, 3, 6, 7, 9, 11, 15, 13], // 16
    [0, 3, 3, 6, 7, 8, 10, 14, 14], // 17
    [0, 3, 3, 5, 6, 8, 9, 13, 15], // 19
    [0, 3, 3, 5, 6, 8, 9, 13, 12], // 20
    [0, 3, 3, 5, 6, 7, 9, 13, 11], // 21
    [0, 3, 2, 5, 5, 7, 8, 12, 15], // 22
    [0, 3, 2, 5, 5, 7, 8, 12, 9], // 24
    [0, 3, 2, 5, 5, 6, 7, 11, 14], // 25
    [0, 3, 2, 5, 5, 6, 7, 11, 9], // 27
    [0, 3, 2, 5, 4, 6, 7, 10, 13], // 29
    [0, 3, 2, 4, 4, 5, 6, 10, 11], // 30
    [0, 3, 2, 4, 4, 5, 6, 10, 9], // 32
    [0, 3, 2, 4, 3, 5, 6, 9, 11], // 34
    [0, 3, 2, 3, 3, 4, 5, 9, 7], // 37
    [0, 2, 2, 3, 3, 4, 5, 8, 10], // 39
    [0, 2, 2, 3, 3, 4, 5, 8, 8], // 41
    [0, 2, 2, 3, 3, 4, 5, 7, 10], // 44
    [0, 2, 2, 3, 2, 3, 4, 7, 8], // 47
    [0, 2, 1, 3, 2, 3, 4, 7, 6], // 50
    [0, 2, 1, 3, 2, 3, 4, 6, 9], // 53
    [0, 2, 1, 2, 2, 3, 4, 6, 6], // 56
    [0, 2, 1, 2, 2, 2, 3, 5, 9], // 60
    [0, 2, 1, 2, 2, 2, 3, 5, 7], // 64
    [0, 2, 1, 2, 2, 2, 3, 5, 5], // 68
    [0, 2, 1, 2, 1, 2, 3, 5, 4], // 72
    [0, 2, 1, 2, 1, 2, 3, 4, 6], // 77
    [0, 3, 1, 2, 1, 1, 3, 4, 7], // 82
    [0, 2, 2, 2, 1, 1, 3, 3, 5], // 87
    [0, 2, 3, 2, 1, 1, 2, 3, 6], // 93
    [0, 1, 2, 2, 0, 1, 3, 3, 6], // 98
    [0, 1, 2, 2, 1, 2, 2, 4, 4], // 105
    [0, 1, 2, 2, 1, 1, 2, 3, 6], // 111
    [0, 1, 3, 3, 1, 1, 2, 3, 3], // 119
    [0, 1, 3, 2, 1, 1, 2, 3, 4], // 126
    [0, 2, 3, 2, 0, 1, 1, 3, 3], // 134
    [0, 2, 2, 2, 1, 1, 2, 3, 3], // 143
    [0, 2, 3, 2, 1, 1, 1, 2, 4], // 152
    [0, 2, 4, 2, 1, 1, 2, 2, 5], // 162
    [0, 2, 4, 2, 1, 1, 1, 3, 1], // 172
    [0, 3, 4, 3, 1, 0, 1, 2, 3], // 183
    [0, 2, 3, 2, 1, 0, 1, 2, 0], // 195
    [0, 2, 2, 2, 0, 0, 1, 1, 3], // 207
    [0, 2, 2, 1, 0, 0, 0, 1, 1], // 220
    [0, 1, 1, 1, 0, -1, 0, 1, 0], // 234
    [0, 1, 1, 1, 0, -1, 0, 1, 0], // 249
    [0, 2, 2, 1, 0, -1, 0, 1, 1], // 265
    [0, 0, 1, -1, 0, -1, 0, 0, 2], // 282
    [0, 1, 1, -1, -1, -1, -1, 0, 2], // 300
    [0, 2, 2, 0, 0, 0, 0, 0, 3], // 316
    [0, 1, 1, 0, 0, -1, -1, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET_REV_C: [[i8; 24]; 65] = [
    [-7, 1, -5, -3, 0, -2, -5, 0, -4, -10, 3, -6, -9, 5, -12, -5, 3, -8, 0, 3, -8, 4, 5, -10], // 2
    [-5, 0, -4, -3, 0, -2, -5, 0, -4, -8, 2, -4, -10, 5, -11, -7, 4, -9, 0, 4, -8, 4, 5, -10], // 3
    [-4, 0, -3, -2, 0, -2, -4, 0, -3, -8, 1, -4, -10, 4, -9, -10, 4, -10, -2, 4, -10, 2, 6, -12], // 4
    [-3, 0, -3, -2, 0, -1, -3, 0, -2, -7, 1, -4, -11, 4, -8, -8, 4, -9, -3, 4, -12, 0, 6, -13], // 5
    [-3, 0, -3, -1, 0, 0, -3, 0, -3, -6, 1, -3, -10, 3, -8, -8, 4, -8, -4, 4, -12, 1, 7, -14], // 6
    [-2, 0, -2, -2, 0, -1, -2, 0, -2, -6, 1, -2, -8, 3, -6, -9, 4, -9, -5, 4, -9, 0, 8, -16], // 7
    [-2, 0, -2, -2, 0, -1, -1, 0, -1, -5, 1, -2, -8, 3, -6, -9, 3, -8, -6, 3, -12, 0, 6, -14], // 8
    [-2, 0, -2, -1, 0, 0, -2, 0, -2, -6, 0, -2, -6, 2, -6, -10, 4, -9, -6, 4, -11, 1, 7, -16], // 9
    [-2, 0, -2, -1, 0, 0, -1, 0, -1, -5, 0, -2, -8, 2, -6, -9, 3, -8, -7, 3, -10, -1, 9, -18], // 10
    [0, 0, -1, -3, 0, -1, -1, 0, -1, -4, 1, -2, -6, 2, -5, -10, 3, -8, -6, 3, -10, 0, 7, -16], // 11
    [0, 0, -1, -3, 0, -1, -1, 0, -1, -3, 0, -1, -6, 2, -5, -10, 3, -8, -7, 3, -11, 0, 7, -16], // 12
    [0, 0, -1, -3, 0, -1, -1, 0, -1, -3, 0, -1, -5, 2, -4, -10, 3, -8, -6, 3, -8, -2, 9, -18], // 13
    [0, 0, -1, -3, 0, -1, -1, 0, -1, -2, 0, 0, -5, 2, -5, -8, 3, -6, -8, 3, -12, -1, 10, -20], // 14
    [0, 0, 0, -2, 0, -1, -1, 0, -1, -3, 0, 0, -5, 2, -4, -8, 3, -6, -8, 3, -11, -1, 8, -16], // 15
    [0, 0, 0, -2, 0, -1, -1, 0, -1, -3, 0, 0, -6, 2, -5, -8, 2, -6, -8, 2, -10, -3, 7, -16], // 16
    [0, 0, 0, 0, 0, -1, -3, 0, -1, -3, 0, 0, -5, 2, -4, -8, 2, -6, -7, 2, -10, -2, 9, -18], // 17
    [0, 0, 0, 0, 0, -1, -3, 0, -1, -2, 0, 0, -5, 2, -4, -7, 2, -5, -8, 2, -11, 0, 9, -20], // 19
    [0, 0, 0, 0, 0, -1, -3, 0, -1, -2, 0, 0, -5, 1, -4, -7, 2, -5, -8, 2, -10, -1, 9, -18], // 20
    [0, 0, 0, 0, 0, -1, -3, 0, -1, -2, 0, 0, -5, 1, -4, -8, 2, -6, -7, 2, -9, -2, 9, -18], // 21
    [0, 0, 0, 0, 0, -1, -2, 0, -1, -2, 0, 0, -4, 1, -4, -8, 2, -5, -7, 2, -10, -1, 10, -22], // 22
    [0, 0, 0, 0, 0, -1, -2, 0, -1, -2, 0, 0, -3, 1, -3, -7, 2, -4, -5, 2, -8, -3, 8, -18], // 24
    [0, 0, 0, 0, 0, -1, -2, 0, -1, -2, 0, 0, -3, 1, -3, -7, 2, -5, -6, 2, -11, -2, 10, -22], // 25
    [0, 0, 0, 0, 0, -1, -2, 0, -1, -2, 0, 0, -2, 1, -2, -6, 2, -4, -6, 2, -10, -2, 8, -18], // 27
    [0, 0, 0, 0, 0, 0, -2, 0, -2, -2, 0, 0, -2, 1, -3, -6, 1, -4, -5, 1, -9, -2, 11, -24], // 29
    [0, 0, 0, 0, 0, 0, -2, 0, -2, -1, 0, 1, -2, 1, -2, -5, 1, -4, -5, 1, -10, -4, 9, -20], // 30
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -2, 0, -2, -5, 1, -4, -5, 1, -10, -5, 8, -18], // 32
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -2, -6, 1, -4, -5, 1, -9, -2, 11, -22], // 34
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 1, -2, -5, 1, -4, -4, 1, -10, -3, 8, -17], // 37
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -2, -5, 2, -4, -3, 2, -9, -3, 10, -22], // 39
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -2, -5, 1, -4, -3, 1, -9, -3, 10, -20], // 41
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -2, -4, 1, -3, -2, 1, -8, -4, 12, -24], // 44
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -1, -5, 1, -3, -2, 1, -8, -3, 10, -20], // 47
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -1, -4, 1, -2, -2, 1, -8, -3, 9, -19], // 50
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -3, 0, 0, -1, 0, -1, -4, 0, -2, -2, 0, -8, -3, 11, -23], // 53
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, -1, -4, 1, -2, -1, 1, -7, -2, 10, -20], // 56
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, -1, -4, 1, -2, 0, 1, -9, -2, 11, -22], // 60
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, -1, -4, 0, -2, 1, 0, -8, -2, 10, -21], // 64
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, 0, -2, 1, -2, 0, 1, -8, -2, 9, -19], // 68
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, -1, -3, 0, -2, 0, 0, -8, -2, 8, -18], // 72
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, -1, -3, 0, -2, 1, 0, -8, -2, 9, -20], // 77
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, -4, 0, -2, 1, 0, -8, -1, 9, -20], // 82
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, 0, -1, 0, 0, 2, 0, -7, -2, 8, -18], // 87
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -1, -2, 0, -1, 1, 0, -7, -1, 9, -18], // 93
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, 0, -2, 0, -1, 2, 0, -6, 0, 9, -18], // 98
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 1, -1, 0, 0, 1, 0, -6, -2, 7, -16], // 105
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -2, 0, 0, 2, 0, -5, 0, 8, -17], // 111
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, -5, 0, 7, -16], // 119
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -5, 0, 7, -15], // 126
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, -4, 0, 7, -14], // 134
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 0, 0, 0, -3, 0, 7, -15], // 143
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, -3, 0, 7, -15], // 152
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, -2, 0, 7, -14], // 162
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -1, 0, 0, -1, 0, -3, 2, 6, -12], // 172
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, 0, -2, 0, 5, -12], // 183
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -1, 0, 1, 0, 0, -2, 2, 5, -11], // 195
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, -2, 0, 5, -12], // 207
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, -2, 2, 5, -10], // 220
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 0, -2, 2, 4, -10], // 234
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 249
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 265
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 282
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 300
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 316
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
