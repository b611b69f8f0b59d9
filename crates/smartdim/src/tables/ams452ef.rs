//! AMS452EF calibration tables (S6E88A family, 360 cd peak).

use super::{S6E88A_BRACKETS, S6E88A_CENTER_CELL};
use crate::curve::SearchCurve;
use crate::fixed;
use crate::mtp::PanelFamily;
use crate::revision::{BrightnessBand, CandelaMap, RevisionProfile};

/// Regulator output for rev A, 6.3 V.
pub const VREG_REV_A: i64 = fixed::volts(6300);

/// Revision A tables; the search curve peaks at 360 cd.
pub const REV_A: RevisionProfile = RevisionProfile {
    name: "AMS452EF rev A",
    family: PanelFamily::S6e88a,
    vreg: VREG_REV_A,
    center_cell: &S6E88A_CENTER_CELL,
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 360), (333, 336), (316, 321), (300, 303), (282, 289), (265, 276)],
                fallback: 112,
            },
            BrightnessBand::flat(162, 249, 257),
            BrightnessBand {
                min: 72,
                max: 152,
                exact: &[
                    (72, 120),
                    (77, 129),
                    (82, 134),
                    (87, 144),
                    (93, 153),
                    (98, 162),
                    (105, 173),
                    (111, 182),
                    (119, 196),
                    (126, 206),
                    (134, 218),
                    (143, 232),
                ],
                fallback: 245,
            },
        ],
        default: 112,
    },
    brackets: S6E88A_BRACKETS,
    gradation: &GRADATION,
    rgb_offset: &RGB_OFFSET,
    search_curve: SearchCurve::G2P2_360,
    top_brightness: 350,
    min_candela: super::s6e88a::MIN_CANDELA,
};

/// Gray-index nudges per bracket.
#[rustfmt::skip]
pub const GRADATION: [[i8; 9]; 62] = [
    [0, 6, 10, 20, 29, 34, 38, -1, 0], // 5
    [0, 5, 9, 19, 26, 30, 35, -1, -2], // 6
    [0, 5, 7, 16, 22, 26, 30, 3, 1], // 7
    [0, 4, 7, 14, 20, 24, 27, 29, 4], // 8
    [0, 4, 6, 13, 19, 22, 26, 28, 14], // 9
    [0, 4, 6, 12, 17, 20, 24, 27, 22], // 10
    [0, 4, 6, 11, 16, 19, 23, 25, 22], // 11
    [0, 3, 5, 10, 14, 17, 21, 24, 28], // 12
    [0, 3, 5, 10, 14, 16, 20, 23, 24], // 13
    [0, 3, 5, 9, 13, 15, 19, 22, 22], // 14
    [0, 3, 4, 8, 12, 14, 18, 21, 22], // 15
    [0, 3, 4, 8, 11, 13, 17, 20, 24], // 16
    [0, 3, 4, 7, 10, 12, 16, 19, 25], // 17
    [0, 3, 4, 6, 9, 11, 15, 18, 19], // 19
    [0, 3, 3, 6, 9, 10, 14, 17, 19], // 20
    [0, 3, 3, 6, 9, 10, 14, 17, 18], // 21
    [0, 3, 3, 6, 8, 10, 14, 16, 18], // 22
    [0, 3, 3, 5, 7, 9, 13, 15, 18], // 24
    [0, 3, 3, 5, 7, 9, 12, 15, 18], // 25
    [0, 3, 3, 5, 6, 8, 11, 14, 18], // 27
    [0, 3, 3, 4, 6, 7, 10, 13, 20], // 29
    [0, 3, 3, 4, 5, 7, 10, 13, 17], // 30
    [0, 3, 3, 4, 5, 7, 9, 12, 16], // 32
    [0, 2, 3, 4, 5, 6, 9, 12, 12], // 34
    [0, 2, 2, 3, 4, 5, 8, 11, 13], // 37
    [0, 2, 2, 3, 4, 5, 8, 11, 10], // 39
    [0, 2, 2, 3, 4, 5, 7, 10, 12], // 41
    [0, 2, 2, 3, 4, 4, 7, 10, 10], // 44
    [0, 2, 2, 3, 3, 4, 6, 9, 8], // 47
    [0, 2, 2, 2, 3, 3, 6, 8, 9], // 50
    [0, 2, 2, 2, 3, 3, 6, 8, 7], // 53
    [0, 2, 2, 2, 2, 3, 5, 7, 10], // 56
    [0, 2, 2, 2, 2, 2, 5, 6, 8], // 60
    [0, 2, 2, 2, 2, 2, 4, 6, 4], // 64
    [0, 2, 2, 2, 2, 2, 4, 5, 6], // 68
    [0, 1, 2, 2, 2, 3, 3, 5, 8], // 72
    [0, 2, 2, 2, 2, 3, 4, 6, 6], // 77
    [0, 2, 2, 2, 1, 3, 4, 5, 2], // 82
    [0, 1, 2, 2, 1, 2, 3, 5, 5], // 87
    [0, 1, 1, 2, 1, 2, 3, 5, 3], // 93
    [0, 1, 2, 2, 1, 3, 3, 5, 5], // 98
    [0, 1, 1, 2, 1, 2, 3, 5, 5], // 105
    [0, 0, 2, 2, 1, 2, 2, 4, 5], // 111
    [0, -1, 1, 1, 1, 1, 3, 4, 6], // 119
    [0, 1, 1, 2, 2, 2, 3, 5, 3], // 126
    [0, 1, 1, 1, 1, 2, 3, 5, 0], // 134
    [0, 1, 2, 2, 2, 2, 2, 4, 0], // 143
    [0, 2, 2, 2, 2, 2, 2, 4, 1], // 152
    [0, 2, 3, 2, 2, 2, 2, 4, 3], // 162
    [0, 2, 2, 2, 2, 2, 2, 4, 0], // 172
    [0, 2, 2, 2, 1, 1, 1, 3, 0], // 183
    [0, 2, 2, 2, 1, 1, 1, 2, 3], // 195
    [0, 2, 2, 2, 1, 1, 1, 2, 0], // 207
    [0, 1, 2, 2, 1, 1, 1, 1, 3], // 220
    [0, 1, 1, 2, 1, 1, 1, 1, 1], // 234
    [0, 1, 1, 2, 1, 1, 1, 1, 0], // 249
    [0, 1, 2, 1, 0, 1, 0, 1, 2], // 265
    [0, 2, 2, 1, 1, 1, 1, 1, 0], // 282
    [0, 1, 1, 1, 0, 0, 0, 0, 1], // 300
    [0, 2, 1, 0, 0, 0, 0, 1, 0], // 316
    [0, 2, 1, 0, 0, 0, -1, 0, 3], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET: [[i8; 24]; 62] = [
    [-3, 0, -3, -1, 0, -2, -4, 0, -4, -7, 4, -8, -7, 4, -10, -4, 3, -7, -1, 1, -3, -2, 3, -8], // 5
    [-2, 0, -2, -2, 0, -2, -3, 0, -4, -7, 3, -8, -7, 4, -10, -4, 2, -5, 0, 1, -2, -2, 4, -10], // 6
    [-2, 0, -2, -1, 0, -1, -2, 0, -3, -7, 3, -8, -7, 4, -9, -2, 2, -4, 0, 1, -4, -2, 4, -9], // 7
    [-1, 0, -1, -2, 0, -2, -1, 0, -2, -6, 3, -7, -7, 3, -8, -1, 2, -4, -1, 2, -6, 0, 1, -3], // 8
    [-1, 0, -1, -1, 0, -1, -2, 0, -3, -5, 2, -6, -7, 4, -9, -4, 2, -6, -1, 1, -4, 2, 1, -2], // 9
    [-1, 0, -1, -1, 0, -1, -1, 0, -2, -4, 2, -5, -6, 4, -8, -2, 2, -6, -3, 2, -6, 0, 2, -4], // 10
    [-1, 0, -1, 0, 0, -1, -2, 0, -2, -4, 2, -5, -7, 3, -8, -2, 2, -6, -3, 2, -5, 0, 2, -4], // 11
    [-1, 0, -1, 0, 0, 0, -1, 0, -2, -4, 2, -4, -6, 3, -8, -3, 2, -5, -2, 1, -4, 0, 3, -7], // 12
    [0, 0, 0, -1, 0, -1, -2, 0, -2, -4, 1, -4, -3, 3, -6, -5, 2, -6, -2, 2, -5, -1, 2, -5], // 13
    [0, 0, 0, -1, 0, -1, -1, 0, -1, -3, 1, -4, -4, 3, -7, -3, 2, -5, -2, 2, -6, -1, 3, -8], // 14
    [0, 0, 0, -1, 0, -1, -1, 0, -1, -4, 1, -4, -3, 3, -7, -3, 2, -5, -2, 2, -6, 0, 3, -6], // 15
    [0, 0, 0, -1, 0, -1, -1, 0, -1, -3, 1, -3, -4, 3, -8, -3, 2, -5, -1, 3, -6, -2, 2, -6], // 16
    [0, 0, 0, 0, 0, 0, -1, 0, -2, -3, 1, -3, -3, 3, -6, -3, 2, -5, -2, 2, -6, -4, 3, -7], // 17
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -3, 1, -4, -4, 3, -7, -3, 1, -4, -2, 3, -7, -2, 3, -6], // 19
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -2, 1, -3, -2, 3, -6, -5, 2, -6, -3, 3, -7, -2, 3, -7], // 20
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -2, 1, -3, -3, 2, -6, -5, 2, -6, -2, 3, -6, -3, 3, -8], // 21
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -2, 1, -3, -3, 3, -6, -3, 1, -4, -2, 2, -6, -3, 5, -10], // 22
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -1, 0, -2, -2, 3, -6, -4, 1, -4, -3, 2, -6, -1, 4, -9], // 24
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -1, 0, -2, -2, 2, -6, -3, 2, -4, -6, 3, -8, -2, 4, -8], // 25
    [0, 0, 0, 0, 0, 0, -1, 0, -1, -1, 0, -2, -2, 2, -6, -2, 1, -3, -4, 3, -7, -3, 4, -8], // 27
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -2, -1, 2, -6, -4, 2, -4, -2, 2, -6, -4, 4, -9], // 29
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -2, -2, 2, -6, -4, 1, -4, -3, 2, -6, -3, 5, -10], // 30
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -2, -2, 2, -6, -2, 1, -2, -5, 4, -8, -1, 4, -8], // 32
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, -2, -1, 2, -5, -4, 1, -4, -3, 2, -6, -1, 4, -8], // 34
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 2, -5, -4, 1, -3, -2, 2, -6, -4, 5, -10], // 37
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 2, -5, -3, 1, -2, -2, 2, -6, -4, 4, -10], // 39
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 2, -4, -4, 1, -2, -3, 2, -6, -2, 4, -9], // 41
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 2, -4, -3, 0, -2, -3, 2, -6, -3, 3, -8], // 44
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -4, -1, 0, -2, -3, 2, -6, -2, 3, -8], // 47
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -4, -3, 0, -2, 0, 1, -4, -3, 4, -8], // 50
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -4, -3, 0, -2, -1, 1, -4, -2, 3, -8], // 53
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -4, -2, 0, -2, -1, 2, -5, -2, 4, -10], // 56
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -4, -1, 0, -1, 0, 1, -3, -2, 4, -9], // 60
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -3, -1, 0, -1, -2, 1, -4, -1, 4, -8], // 64
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -3, -1, 0, 0, -1, 1, -4, 0, 4, -8], // 68
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -3, 0, 0, 0, -1, 1, -4, 0, 4, -8], // 72
    [0, 0, 0, 0, 0, -1, 0, 0, 0, -1, 0, -1, 0, 1, -4, -2, 0, 0, -1, 1, -4, -2, 3, -8], // 77
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, -2, -1, 0, 0, 0, 1, -3, -3, 3, -8], // 82
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -2, -1, 0, 0, -1, 1, -4, -3, 3, -8], // 87
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -2, 0, 0, 0, -2, 1, -4, -2, 3, -7], // 93
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -3, -1, 0, 0, -2, 1, -3, -2, 3, -8], // 98
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -3, 0, 0, 0, -1, 1, -2, -2, 3, -8], // 105
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 0, 0, 0, 1, -3, -2, 3, -8], // 111
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -2, 0, 0, 0, 0, 0, -2, -2, 3, -8], // 119
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -2, -1, 0, -2, -2, 0, -2, -2, 3, -8], // 126
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -1, 0, 0, -1, -3, 0, -2, 0, 3, -6], // 134
    [0, 0, 1, 0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 0, -1, 0, 1, -2, 0, 0, 0, 0, 3, -6], // 143
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 1, -2, 0, 0, -1, -1, 2, -6], // 152
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -1, 0, 0, -2, -2, 0, -1, 0, 3, -6], // 162
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -1, 0, 0, -2, -1, 0, 0, -1, 2, -6], // 172
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1, 0, 0, 0, 1, -2, -1, 0, 0, 0, 2, -4], // 183
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1, 0, 0, 0, 1, -2, 0, 0, 1, -1, 2, -6], // 195
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0, 1, 0, 2, -5], // 207
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, -2, 0, 0, 1, 0, 1, -4], // 220
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, -2, 0, 0, 2, 0, 1, -4], // 234
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 249
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 265
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 282
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 300
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 316
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
