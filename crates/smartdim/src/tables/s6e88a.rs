//! S6E88A0 calibration tables.
//!
//! Rows follow [`BRACKETS`](super::S6E88A_BRACKETS): one per supported
//! brightness, 5 cd to 350 cd. Gradation columns are V255, V203, V151, V87,
//! V51, V35, V23, V11, V3; RGB columns are R/G/B V255 then R/G/B for V203
//! down to V11.

use super::{S6E88A_BRACKETS, S6E88A_CENTER_CELL};
use crate::curve::SearchCurve;
use crate::fixed;
use crate::mtp::PanelFamily;
use crate::revision::{BrightnessBand, CandelaMap, RevisionProfile};

/// Regulator output, 6.2 V.
pub const VREG: i64 = fixed::volts(6200);

/// Brightness used for the minimum-brightness table.
pub const MIN_CANDELA: u16 = 5;

/// Default tables, used for any revision without its own set.
pub const DEFAULT: RevisionProfile = RevisionProfile {
    name: "S6E88A0",
    family: PanelFamily::S6e88a,
    vreg: VREG,
    center_cell: &S6E88A_CENTER_CELL,
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 350), (333, 345), (316, 330), (300, 309), (282, 293), (265, 259)],
                fallback: 112,
            },
            BrightnessBand::flat(162, 249, 259),
            BrightnessBand {
                min: 72,
                max: 152,
                exact: &[
                    (72, 112),
                    (77, 120),
                    (82, 138),
                    (87, 146),
                    (93, 155),
                    (98, 162),
                    (105, 172),
                    (111, 181),
                    (119, 196),
                    (126, 206),
                    (134, 217),
                    (143, 231),
                ],
                fallback: 245,
            },
        ],
        default: 112,
    },
    brackets: S6E88A_BRACKETS,
    gradation: &GRADATION,
    rgb_offset: &RGB_OFFSET,
    search_curve: SearchCurve::G2P2_350,
    top_brightness: 350,
    min_candela: MIN_CANDELA,
};

/// Revision B tables (shipped on rev A, C and D silicon).
pub const REV_B: RevisionProfile = RevisionProfile {
    name: "S6E88A0 rev B",
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 350), (333, 326), (316, 314), (300, 295), (282, 285), (265, 265)],
                fallback: 116,
            },
            BrightnessBand::flat(162, 249, 249),
            BrightnessBand {
                min: 77,
                max: 152,
                exact: &[
                    (77, 122),
                    (82, 131),
                    (87, 140),
                    (93, 148),
                    (98, 154),
                    (105, 166),
                    (111, 174),
                    (119, 188),
                    (126, 199),
                    (134, 209),
                    (143, 223),
                ],
                fallback: 235,
            },
        ],
        default: 116,
    },
    gradation: &GRADATION_REV_B,
    rgb_offset: &RGB_OFFSET_REV_B,
    ..DEFAULT
};

/// Revision G tables.
pub const REV_G: RevisionProfile = RevisionProfile {
    name: "S6E88A0 rev G",
    candela_map: CandelaMap {
        bands: &[
            BrightnessBand {
                min: 265,
                max: 350,
                exact: &[(350, 350), (333, 326), (316, 314), (300, 297), (282, 283), (265, 265)],
                fallback: 112,
            },
            BrightnessBand::flat(162, 249, 254),
            BrightnessBand {
                min: 72,
                max: 152,
                exact: &[
                    (72, 118),
                    (77, 126),
                    (82, 134),
                    (87, 143),
                    (93, 151),
                    (98, 159),
                    (105, 170),
                    (111, 180),
                    (119, 192),
                    (126, 203),
                    (134, 214),
                    (143, 226),
                ],
                fallback: 239,
            },
        ],
        default: 112,
    },
    gradation: &GRADATION_REV_G,
    rgb_offset: &RGB_OFFSET_REV_G,
    ..DEFAULT
};

/// Gray-index nudges per bracket.
#[rustfmt::skip]
pub const GRADATION: [[i8; 9]; 62] = [
    [0, 2, 5, 12, 16, 20, 23, 25, 26], // 5
    [0, 2, 6, 12, 14, 17, 20, 22, 24], // 6
    [0, -1, 2, 7, 12, 14, 17, 20, 20], // 7
    [0, -1, 1, 5, 10, 12, 15, 16, 15], // 8
    [0, -1, 0, 5, 9, 11, 14, 16, 19], // 9
    [0, -1, 0, 5, 8, 10, 12, 14, 17], // 10
    [0, 0, 0, 4, 7, 10, 12, 14, 17], // 11
    [0, 2, -1, 3, 6, 9, 11, 13, 16], // 12
    [0, 6, 0, 3, 6, 8, 11, 13, 13], // 13
    [0, 2, -1, 2, 5, 7, 9, 12, 10], // 14
    [0, 2, -1, 1, 4, 7, 9, 11, 14], // 15
    [0, 2, -1, 1, 4, 6, 8, 10, 12], // 16
    [0, 2, -1, 1, 3, 5, 8, 10, 10], // 17
    [0, 2, -1, 1, 3, 4, 7, 9, 8], // 19
    [0, 2, -1, 0, 3, 4, 7, 8, 12], // 20
    [0, 2, -1, 0, 3, 4, 6, 8, 8], // 21
    [0, 2, -1, 0, 2, 4, 6, 7, 6], // 22
    [0, 1, 0, 1, 2, 3, 6, 7, 9], // 24
    [0, 1, 2, 1, 2, 4, 6, 7, 8], // 25
    [0, 1, 2, 1, 2, 3, 5, 6, 5], // 27
    [0, 1, 2, 1, 2, 3, 5, 6, 5], // 29
    [0, 1, 2, 1, 2, 2, 4, 5, 8], // 30
    [0, 1, 2, 0, 1, 2, 4, 5, 6], // 32
    [0, 1, 1, 0, 1, 2, 4, 4, 3], // 34
    [0, 1, 1, 0, 1, 1, 3, 4, 3], // 37
    [0, 1, 1, 0, 0, 1, 3, 3, 2], // 39
    [0, 1, 1, 0, 0, 1, 2, 3, 4], // 41
    [0, 1, 1, 0, 0, 1, 2, 3, 2], // 44
    [0, 1, 1, 0, 0, 0, 2, 2, 1], // 47
    [0, 1, 1, 0, 0, 0, 1, 2, 3], // 50
    [0, 1, 0, 0, 0, 0, 1, 2, 1], // 53
    [0, 1, 0, 0, 0, 0, 1, 2, 1], // 56
    [0, 1, 0, 0, 0, 0, 1, 1, 4], // 60
    [0, 1, 0, -1, -1, 0, 1, 1, 1], // 64
    [0, 1, 0, -1, -1, -1, 0, 1, 1], // 68
    [0, 1, 0, -1, -1, -1, 0, 0, 2], // 72
    [0, 1, -1, -2, -2, -2, -1, 0, 1], // 77
    [0, 2, 2, 2, 2, 3, 4, 7, 7], // 82
    [0, 2, 2, 1, 2, 2, 4, 7, 6], // 87
    [0, 2, 2, 1, 2, 3, 4, 7, 7], // 93
    [0, 2, 2, 1, 2, 2, 4, 7, 6], // 98
    [0, 2, 3, 2, 3, 2, 0, 6, 7], // 105
    [0, 3, 4, 3, 3, 3, 3, 6, 6], // 111
    [0, 2, 4, 2, 2, 3, 3, 6, 8], // 119
    [0, 2, 3, 2, 2, 3, 4, 7, 5], // 126
    [0, 3, 3, 2, 2, 3, 3, 6, 6], // 134
    [0, 2, 4, 2, 2, 3, 3, 5, 8], // 143
    [0, 2, 4, 2, 2, 2, 2, 5, 7], // 152
    [0, 2, 4, 2, 2, 2, 3, 5, 8], // 162
    [0, 2, 3, 1, 2, 2, 2, 4, 7], // 172
    [0, 1, 3, 1, 1, 1, 2, 4, 6], // 183
    [0, 1, 3, 1, 1, 1, 2, 4, 4], // 195
    [0, 1, 3, 1, 1, 1, 1, 3, 4], // 207
    [0, 1, 2, 0, 0, 0, 1, 2, 4], // 220
    [0, 1, 2, -1, 0, 0, 0, 2, 0], // 234
    [0, 0, 2, 0, 0, 0, 1, 1, 5], // 249
    [0, 1, 2, 0, 0, 0, 0, 1, 1], // 265
    [0, 1, 2, 0, 0, 0, 1, 1, 3], // 282
    [0, 0, 3, 0, 0, 0, 1, 1, 5], // 300
    [0, 0, 1, 0, -1, 0, 0, 2, 1], // 316
    [0, -1, 1, -2, -1, 0, 0, 0, 5], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET: [[i8; 24]; 62] = [
    [4, 0, 4, 0, 0, -1, -4, 1, -4, -7, 3, -8, -5, 3, -6, -1, 2, -5, 0, 2, -4, 0, 0, 0], // 5
    [4, -1, 4, -1, 0, -2, -3, 0, -3, -5, 3, -6, -3, 3, -6, -1, 1, -4, -1, 1, -6, -2, 0, -1], // 6
    [0, 0, 0, 3, 0, 2, 0, 0, -1, -7, 2, -6, -3, 2, -6, -2, 2, -6, -2, 2, -6, -2, 1, -2], // 7
    [-1, 0, 0, 5, 0, 3, 0, 0, -1, -7, 3, -7, -2, 2, -6, 0, 2, -4, -2, 2, -4, -2, 1, -3], // 8
    [-1, 0, 0, 6, 0, 4, -1, 0, -2, -6, 2, -6, -2, 2, -6, -2, 2, -5, -2, 2, -5, -2, 1, -3], // 9
    [0, 0, 0, 5, 0, 4, -1, 0, -2, -5, 2, -5, -2, 3, -6, -1, 2, -4, -2, 2, -5, -1, 1, -2], // 10
    [0, 0, 0, 2, 0, 2, 0, 0, 0, -4, 1, -4, -2, 3, -7, -3, 1, -4, -2, 1, -6, -2, 1, -2], // 11
    [0, 0, 1, 0, 0, -1, 0, 0, 0, -4, 1, -4, -2, 2, -6, -2, 2, -4, -3, 2, -6, -1, 1, -3], // 12
    [0, 0, 1, -1, 0, -1, 4, 0, 3, -4, 1, -4, -2, 2, -6, -4, 2, -4, -1, 2, -4, -3, 1, -4], // 13
    [1, 0, 2, -1, 0, -2, 4, 0, 3, -3, 1, -3, -1, 2, -6, -3, 1, -4, -4, 1, -6, -1, 1, -3], // 14
    [1, 0, 2, -1, 0, -2, 4, 0, 3, -2, 1, -3, -2, 2, -6, -4, 1, -4, -3, 1, -6, -3, 1, -3], // 15
    [1, 0, 2, -1, 0, -2, 5, 0, 4, -2, 1, -3, -2, 3, -6, -3, 1, -3, -3, 1, -6, -1, 1, -3], // 16
    [1, 0, 2, 0, 0, -1, 4, 0, 3, -2, 1, -3, -1, 2, -5, -5, 1, -4, -2, 1, -4, -3, 1, -4], // 17
    [2, 0, 3, -1, 0, -2, 4, 0, 3, -1, 1, -2, -1, 2, -5, -4, 1, -4, -2, 1, -4, -2, 1, -2], // 19
    [2, 0, 3, -1, 0, -2, 4, 0, 3, -2, 1, -2, 0, 2, -5, -5, 1, -4, -1, 1, -3, -3, 1, -3], // 20
    [2, 0, 3, 0, 0, -1, 3, 0, 2, -2, 1, -2, 0, 2, -5, -4, 1, -3, -3, 1, -4, -2, 1, -3], // 21
    [2, 0, 3, 0, 0, -1, 3, 0, 2, -2, 1, -2, 0, 2, -5, -4, 1, -2, -3, 1, -4, -3, 1, -3], // 22
    [2, 0, 3, 0, 0, -1, 1, 0, 1, -1, 0, -2, 0, 2, -4, -4, 1, -3, -2, 1, -4, -4, 1, -3], // 24
    [2, 0, 3, 0, 0, -1, -1, 0, -2, 0, 0, 0, 0, 1, -4, -4, 1, -2, -3, 1, -3, -3, 1, -4], // 25
    [2, 0, 3, 0, 0, -1, -2, 0, -2, 0, 0, 0, 1, 1, -3, -2, 1, -2, -3, 1, -4, -3, 1, -4], // 27
    [2, 0, 3, 0, 0, -1, -2, 0, -2, 0, 0, 0, 2, 1, -2, -3, 1, -2, -1, 1, -3, -4, 2, -4], // 29
    [2, 0, 3, 0, 0, -1, -2, 0, -2, 0, 0, 0, 2, 1, -2, -3, 1, -2, -1, 1, -2, -4, 1, -4], // 30
    [2, 0, 3, 0, 0, -1, -2, 0, -2, 0, 0, 0, 1, 1, -3, -2, 0, -2, -1, 0, -2, -4, 1, -4], // 32
    [2, 0, 3, 0, 0, -1, -2, 0, -2, 0, 0, 1, 1, 1, -3, -2, 0, -2, -1, 0, -2, -5, 1, -4], // 34
    [1, 0, 2, 0, 0, 0, -1, 0, -2, 0, 0, 1, 3, 1, -2, -3, 0, -2, -2, 0, -2, -3, 1, -3], // 37
    [1, 0, 2, 0, 0, 0, -1, 0, -2, 0, 0, 1, 2, 1, -2, -2, 0, -2, -1, 0, -1, -3, 1, -4], // 39
    [1, 0, 2, 0, 0, -1, -1, 0, -1, 0, 0, 1, 2, 1, -2, -1, 0, -1, -2, 0, -2, 0, 1, -2], // 41
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1, 0, -2, -1, 0, -1, -1, 0, -1, -1, 1, -2], // 44
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 2, 0, -1, -2, 0, -1, -1, 0, -1, -1, 1, -3], // 47
    [0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 3, 0, -1, -1, 0, 0, -1, 0, -1, -1, 1, -2], // 50
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -2, -1, 0, 0, -1, 0, 0, 0, 1, -2], // 53
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -2, -1, 0, 0, -1, 0, 0, 0, 0, -2], // 56
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -2, -2, 0, 0, 0, 0, 1, 0, 0, -2], // 60
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -1, -1, 0, 0, 0, 0, 0, 0, 0, -1], // 64
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -1, -1, 0, 0, 0, 0, 0, 1, 0, 0], // 68
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -1, -1, 0, 0, 0, 0, 1, 1, 0, 0], // 72
    [0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 3, 0, -1, -1, 0, 1, 0, 0, 2, 2, 0, 0], // 77
    [0, 0, -1, 0, 0, 0, 0, 0, 0, 0, 0, -1, 2, 0, -1, -2, 0, -2, -2, 0, -5, -2, 2, -6], // 82
    [0, 0, 0, 0, 0, -1, 1, 0, 0, 0, 0, 0, 2, 0, -2, -2, 0, -2, -2, 0, -4, -3, 3, -7], // 87
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1, 1, -2, -1, 0, -1, -2, 0, -4, -3, 2, -6], // 93
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, -2, -1, 0, -1, -1, 0, -3, -4, 2, -6], // 98
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, -1, 0, 0, -1, -2, 0, -4, -3, 2, -6], // 105
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 1, 0, -2, 0, 0, 0, -1, 0, -4, -2, 3, -6], // 111
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 1, 0, -2, 0, 0, 0, -2, 0, -4, -2, 2, -6], // 119
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -2, 0, 0, -1, -1, 0, -4, -2, 2, -5], // 126
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, -1, 1, 0, -1, -1, 0, -3, -2, 2, -6], // 134
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -1, 1, 0, -1, -2, 0, -4, -2, 2, -6], // 143
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 2, 0, 0, -2, 0, -3, -2, 2, -6], // 152
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, -1, 0, 0, -2, -1, 0, -2, -3, 2, -6], // 162
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 0, 2, 0, -1, -1, 0, -2, -2, 2, -5], // 172
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, -1, 2, 0, 0, -1, 0, -2, -2, 2, -5], // 183
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, -1, -2, 0, -2, -1, 1, -4], // 195
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, -2, 0, -2, -1, 1, -3], // 207
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 2, 0, -1, -1, 0, -1, -2, 1, -4], // 220
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 1, 0, 0, 2, 0, -1, -1, 0, -1, -1, 1, -2], // 234
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
pub const GRADATION_REV_B: [[i8; 9]; 62] = [
    [0, 5, 12, 22, 32, 36, 40, 0, 0], // 5
    [0, 5, 12, 20, 29, 33, 37, 0, 0], // 6
    [0, 5, 10, 17, 26, 29, 33, 5, 3], // 7
    [0, 4, 9, 16, 23, 27, 30, 31, 2], // 8
    [0, 4, 8, 14, 20, 25, 28, 31, 0], // 9
    [0, 3, 7, 12, 19, 23, 27, 30, 1], // 10
    [0, 3, 7, 12, 17, 22, 25, 29, 24], // 11
    [0, 3, 6, 10, 16, 20, 23, 27, 26], // 12
    [0, 3, 6, 10, 15, 19, 22, 26, 25], // 13
    [0, 3, 5, 9, 14, 18, 21, 25, 23], // 14
    [0, 3, 5, 8, 13, 16, 20, 24, 24], // 15
    [0, 3, 5, 8, 12, 15, 19, 22, 21], // 16
    [0, 3, 5, 7, 11, 14, 18, 22, 22], // 17
    [0, 2, 5, 7, 11, 14, 17, 20, 19], // 19
    [0, 2, 5, 7, 10, 13, 16, 20, 21], // 20
    [0, 2, 5, 6, 9, 12, 15, 19, 18], // 21
    [0, 2, 5, 6, 9, 11, 15, 18, 20], // 22
    [0, 2, 5, 5, 8, 11, 14, 17, 20], // 24
    [0, 2, 5, 5, 8, 10, 13, 17, 16], // 25
    [0, 2, 5, 5, 7, 9, 12, 15, 18], // 27
    [0, 2, 4, 5, 7, 9, 12, 15, 14], // 29
    [0, 2, 4, 5, 7, 9, 11, 15, 15], // 30
    [0, 2, 4, 4, 6, 8, 11, 14, 15], // 32
    [0, 2, 4, 4, 6, 8, 10, 13, 17], // 34
    [0, 2, 4, 4, 5, 7, 9, 13, 12], // 37
    [0, 2, 4, 4, 5, 6, 8, 12, 13], // 39
    [0, 2, 4, 4, 5, 6, 8, 12, 10], // 41
    [0, 2, 4, 3, 5, 6, 7, 11, 11], // 44
    [0, 2, 4, 3, 4, 5, 7, 10, 9], // 47
    [0, 2, 4, 3, 4, 5, 6, 10, 8], // 50
    [0, 2, 4, 3, 4, 4, 6, 9, 12], // 53
    [0, 2, 3, 2, 3, 4, 5, 9, 6], // 56
    [0, 2, 3, 2, 3, 3, 5, 8, 5], // 60
    [0, 2, 3, 2, 3, 3, 5, 7, 9], // 64
    [0, 2, 3, 2, 3, 3, 4, 7, 5], // 68
    [0, 2, 3, 2, 2, 3, 4, 6, 8], // 72
    [0, 3, 2, 2, 2, 2, 4, 6, 6], // 77
    [0, 1, 2, 2, 1, 2, 3, 5, 5], // 82
    [0, 1, 2, 2, 2, 3, 4, 6, 3], // 87
    [0, 1, 2, 2, 1, 2, 4, 5, 7], // 93
    [0, 1, 3, 2, 3, 2, 3, 6, 4], // 98
    [0, 2, 3, 2, 2, 3, 4, 6, 6], // 105
    [0, 1, 3, 2, 3, 2, 3, 5, 5], // 111
    [0, 1, 2, 2, 2, 1, 3, 5, 4], // 119
    [0, 1, 3, 2, 2, 2, 3, 5, 4], // 126
    [0, 2, 3, 2, 2, 2, 3, 5, 6], // 134
    [0, 2, 3, 2, 2, 1, 2, 4, 5], // 143
    [0, 2, 3, 2, 2, 1, 3, 5, 0], // 152
    [0, 2, 3, 3, 3, 3, 3, 5, 2], // 162
    [0, 2, 3, 3, 2, 2, 2, 4, 5], // 172
    [0, 2, 3, 2, 2, 2, 2, 4, 0], // 183
    [0, 1, 3, 2, 2, 2, 1, 3, 2], // 195
    [0, 1, 2, 2, 2, 1, 1, 3, 0], // 207
    [0, 1, 2, 2, 1, 1, 1, 2, 2], // 220
    [0, 1, 2, 2, 1, 1, 1, 2, 0], // 234
    [0, 1, 2, 1, 1, 1, 0, 1, 2], // 249
    [0, 1, 2, 1, 0, 1, 1, 1, 4], // 265
    [0, 1, 2, 1, 1, 1, 1, 1, 0], // 282
    [0, 1, 2, 1, 0, 0, 1, 1, 0], // 300
    [0, 1, 2, 0, 1, 0, 1, 1, 1], // 316
    [0, 1, 1, 0, 0, 0, 0, 1, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET_REV_B: [[i8; 24]; 62] = [
    [-2, 1, -4, -3, 0, -3, -4, 1, -4, -6, 4, -9, -5, 5, -11, -4, 3, -8, -2, 3, -3, -10, 2, -6], // 5
    [-2, 0, -4, -3, 0, -3, -4, 0, -4, -6, 4, -9, -5, 5, -11, -5, 4, -9, -2, 4, -4, -10, 2, -6], // 6
    [-2, 0, -4, -1, 0, -1, -4, 0, -4, -6, 4, -9, -5, 5, -10, -4, 4, -9, -3, 4, -6, -19, 3, -7], // 7
    [-1, 0, -3, -2, 0, -2, -2, 0, -3, -5, 3, -7, -5, 5, -11, -5, 3, -8, -2, 3, -6, -19, 3, -7], // 8
    [-1, 0, -3, -1, 0, -1, -2, 0, -3, -5, 3, -8, -5, 5, -10, -4, 3, -8, -3, 3, -6, -19, 3, -7], // 9
    [0, 0, -2, -1, 0, -1, -3, 0, -3, -5, 3, -8, -5, 4, -10, -6, 4, -9, -1, 4, -5, -8, 3, -8], // 10
    [0, 0, -2, -1, 0, -1, -3, 0, -3, -3, 3, -6, -6, 4, -10, -5, 3, -8, -4, 3, -8, -4, 3, -7], // 11
    [0, 0, -2, -1, 0, -1, -2, 0, -2, -3, 2, -6, -6, 4, -10, -5, 4, -8, -4, 4, -8, -2, 2, -6], // 12
    [0, 0, -2, -1, 0, 0, -2, 0, -2, -2, 2, -5, -6, 4, -10, -6, 3, -8, -3, 3, -8, -4, 3, -7], // 13
    [0, 0, -2, 0, 0, -1, -2, 0, -1, -2, 2, -6, -6, 5, -10, -5, 4, -8, -4, 4, -8, -3, 2, -6], // 14
    [0, 0, -1, 0, 0, -1, -2, 0, -1, -2, 2, -4, -5, 4, -10, -6, 3, -8, -4, 3, -8, -3, 3, -7], // 15
    [0, 0, -1, 0, 0, -1, -1, 0, 0, -2, 2, -4, -5, 4, -10, -6, 4, -8, -3, 4, -6, -4, 4, -10], // 16
    [0, 0, -1, 0, 0, -1, -1, 0, 0, -2, 2, -5, -4, 4, -9, -7, 3, -8, -5, 3, -8, -4, 4, -8], // 17
    [0, 0, -1, 0, 0, -1, -2, 0, -1, -1, 2, -4, -4, 3, -8, -7, 3, -8, -4, 3, -8, -5, 4, -9], // 19
    [0, 0, -1, 0, 0, -1, -2, 0, -1, -1, 1, -4, -5, 4, -9, -6, 3, -7, -4, 3, -8, -4, 3, -8], // 20
    [0, 0, -1, 0, 0, -1, -1, 0, 0, -1, 2, -4, -3, 3, -8, -5, 3, -6, -5, 3, -8, -4, 3, -8], // 21
    [0, 0, -1, 0, 0, -1, -1, 0, 0, -1, 2, -4, -3, 3, -8, -6, 3, -7, -4, 3, -6, -4, 4, -10], // 22
    [0, 0, -1, 0, 0, -1, -1, 0, 0, 0, 1, -3, -4, 3, -8, -6, 2, -6, -5, 2, -8, -3, 4, -9], // 24
    [0, 0, -1, 0, 0, -1, -1, 0, 0, 0, 1, -3, -3, 3, -7, -6, 3, -6, -5, 3, -8, -3, 4, -8], // 25
    [0, 0, -1, 0, 0, -1, -1, 0, 0, 0, 1, -2, -3, 3, -7, -5, 3, -6, -3, 3, -6, -4, 4, -10], // 27
    [0, 0, -1, 0, 0, -1, -2, 0, -1, 0, 1, -2, -2, 3, -6, -5, 2, -6, -4, 2, -6, -4, 5, -10], // 29
    [0, 0, -1, 0, 0, -1, -1, 0, 0, 0, 1, -3, -3, 2, -6, -6, 2, -6, -5, 2, -8, -4, 4, -9], // 30
    [0, 0, -1, 0, 0, -1, -1, 0, 0, 0, 1, -3, -3, 3, -7, -5, 2, -5, -4, 2, -6, -4, 4, -10], // 32
    [0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 1, -3, -2, 3, -6, -4, 2, -4, -5, 2, -7, -4, 4, -10], // 34
    [0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 1, -3, -2, 2, -6, -5, 1, -4, -4, 1, -7, -2, 3, -8], // 37
    [0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 1, -2, -1, 3, -6, -5, 1, -4, -5, 1, -8, -3, 4, -9], // 39
    [0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 0, -2, -2, 2, -6, -4, 1, -4, -5, 1, -7, -2, 4, -8], // 41
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 0, -2, 0, 2, -4, -4, 1, -4, -4, 1, -7, -1, 3, -8], // 44
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, -2, -1, 2, -5, -4, 1, -2, -2, 1, -5, -2, 4, -10], // 47
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 0, -2, 0, 2, -5, -4, 1, -2, -4, 1, -6, -3, 4, -8], // 50
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 0, -2, 0, 2, -5, -3, 0, -2, -4, 0, -6, -4, 4, -10], // 53
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, -2, 0, 2, -4, -4, 0, -2, -3, 0, -6, -4, 3, -8], // 56
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 1, -2, 0, 2, -4, -4, 0, -2, -1, 0, -4, -2, 4, -8], // 60
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 1, -2, 0, 1, -4, -4, 0, -1, -2, 0, -4, -3, 5, -10], // 64
    [0, 0, 0, 0, 0, -1, -1, 0, 0, 0, 0, -2, 0, 2, -4, -3, 0, 0, -2, 0, -4, -2, 3, -8], // 68
    [0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, -1, 2, -4, -2, 0, 0, -2, 0, -4, -2, 4, -9], // 72
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, -1, 0, 1, -4, -2, 0, 0, -2, 0, -4, -1, 4, -9], // 77
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, -4, -2, 0, 0, -2, 0, -4, -1, 4, -8], // 82
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 1, -4, -2, 0, 0, -2, 0, -4, -2, 3, -8], // 87
    [0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, -4, -1, 0, 0, -3, 0, -4, -2, 4, -9], // 93
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -3, -3, 0, -1, -2, 0, -4, -2, 3, -7], // 98
    [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -4, -2, 0, -1, -2, 0, -3, -2, 4, -8], // 105
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, -1, 0, 1, -4, -1, 0, -1, -2, 0, -3, -1, 4, -8], // 111
    [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, -1, 2, 1, -3, -2, 0, -2, -1, 0, -2, -2, 3, -8], // 119
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, -3, 0, 0, -1, -3, 0, -2, -1, 4, -8], // 126
    [0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -3, -2, 0, -2, -2, 1, -2, -2, 3, -8], // 134
    [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, -1, 1, 1, -2, 0, 1, -2, -3, 1, -3, -2, 3, -8], // 143
    [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -3, 0, 0, -2, -3, 0, -1, 0, 3, -6], // 152
    [0, 0, 1, 0, 0, 0, 0, 0, -1, -1, 0, -1, 0, 0, -2, 0, 1, -2, -2, 1, 0, 0, 3, -6], // 162
    [0, 0, 1, 0, 0, 0, 0, 0, -1, -1, 0, -1, 1, 1, -2, 0, 1, -2, -2, 1, 0, -1, 2, -6], // 172
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, -2, 0, 1, -2, -2, 1, 0, 0, 2, -5], // 183
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 1, 1, -2, 0, 1, -2, -2, 1, 0, 0, 2, -5], // 195
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 1, -2, 0, 0, -2, 0, 0, 0, 0, 1, -4], // 207
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, 0, 0, -1, 0, 0, 0, 0, 1, -4], // 220
    [0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, -2, 0, 0, -1, 0, 0, 0, 1, 1, -3], // 234
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
pub const GRADATION_REV_G: [[i8; 9]; 62] = [
    [-1, 6, 13, 23, 31, 36, 40, 44, 44], // 5
    [-1, 5, 12, 21, 29, 34, 38, 42, 42], // 6
    [-1, 4, 10, 18, 24, 29, 33, 37, 37], // 7
    [-1, 3, 8, 16, 23, 27, 32, 35, 35], // 8
    [-1, 3, 8, 15, 21, 26, 30, 33, 39], // 9
    [-1, 2, 7, 14, 20, 24, 28, 31, 31], // 10
    [-1, 2, 7, 13, 18, 22, 26, 29, 29], // 11
    [-1, 2, 7, 13, 18, 22, 26, 28, 28], // 12
    [-1, 2, 6, 11, 16, 20, 24, 26, 27], // 13
    [-1, 2, 6, 11, 15, 18, 22, 25, 26], // 14
    [-1, 2, 6, 10, 14, 17, 21, 24, 25], // 15
    [-1, 2, 5, 9, 13, 16, 20, 22, 23], // 16
    [-1, 2, 5, 8, 12, 15, 18, 21, 22], // 17
    [-1, 2, 5, 8, 11, 14, 17, 19, 20], // 19
    [-1, 2, 5, 8, 10, 12, 16, 18, 19], // 20
    [-1, 1, 3, 6, 9, 11, 15, 17, 17], // 21
    [-1, 1, 3, 6, 9, 11, 14, 16, 20], // 22
    [-1, 2, 3, 6, 8, 10, 13, 15, 16], // 24
    [-1, 1, 3, 5, 8, 10, 13, 15, 19], // 25
    [-1, 2, 3, 5, 7, 9, 12, 14, 17], // 27
    [-1, 1, 2, 4, 6, 8, 11, 13, 17], // 29
    [-1, 1, 2, 4, 6, 8, 11, 13, 15], // 30
    [-1, 2, 3, 4, 6, 8, 10, 12, 16], // 32
    [-1, 1, 2, 4, 6, 7, 10, 12, 10], // 34
    [-1, 1, 2, 4, 5, 7, 9, 11, 12], // 37
    [-1, 1, 2, 3, 4, 6, 8, 10, 11], // 39
    [-1, 1, 2, 3, 4, 5, 8, 10, 8], // 41
    [-1, 1, 2, 2, 4, 5, 8, 9, 13], // 44
    [-1, 1, 2, 2, 3, 4, 7, 9, 9], // 47
    [-1, 1, 2, 2, 3, 4, 7, 8, 10], // 50
    [-1, 1, 2, 2, 3, 4, 6, 8, 8], // 53
    [-1, 1, 2, 2, 3, 3, 6, 7, 8], // 56
    [-1, 1, 1, 2, 2, 3, 6, 7, 6], // 60
    [-1, 1, 1, 2, 2, 3, 5, 7, 8], // 64
    [-1, 1, 2, 1, 2, 2, 5, 6, 5], // 68
    [-1, 1, 1, 1, 2, 2, 5, 5, 8], // 72
    [0, 2, 1, 1, 1, 2, 4, 5, 7], // 77
    [0, 1, 2, 1, 1, 2, 4, 6, 5], // 82
    [0, 1, 2, 2, 3, 2, 3, 5, 4], // 87
    [0, 1, 1, 1, 1, 1, 4, 5, 4], // 93
    [0, 1, 1, 1, 2, 3, 3, 5, 6], // 98
    [0, 0, 1, 2, 1, 2, 3, 5, 6], // 105
    [0, 0, 1, 1, 2, 2, 3, 4, 7], // 111
    [0, 0, 2, 1, 2, 2, 3, 4, 6], // 119
    [0, 0, 2, 2, 1, 2, 2, 4, 7], // 126
    [0, 1, 2, 1, 2, 2, 3, 5, 4], // 134
    [0, 0, 1, 2, 1, 1, 2, 4, 3], // 143
    [0, 0, 1, 1, 2, 1, 2, 4, 2], // 152
    [0, 1, 1, 1, 2, 2, 2, 4, 3], // 162
    [0, 0, 1, 1, 2, 2, 1, 3, 4], // 172
    [0, 1, 1, 0, 1, 1, 1, 3, 4], // 183
    [0, 0, 1, 0, 1, 1, 1, 2, 6], // 195
    [0, 0, 1, 0, 1, 1, 1, 2, 2], // 207
    [0, 0, 1, 0, 1, 1, 1, 2, 1], // 220
    [0, 0, 1, 0, 1, 1, 0, 1, 2], // 234
    [0, 0, 1, 0, 1, 1, 0, 1, 3], // 249
    [0, 0, 0, 0, 0, 0, 1, 1, 2], // 265
    [0, 1, 0, 0, 0, 0, 0, 0, 4], // 282
    [0, 1, 1, 0, 0, 0, 0, 1, 0], // 300
    [0, -1, -1, 0, 0, 0, 0, 1, 0], // 316
    [0, 0, -1, -1, -1, -1, -1, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
/// Register offsets per bracket.
#[rustfmt::skip]
pub const RGB_OFFSET_REV_G: [[i8; 24]; 62] = [
    [-5, 0, -4, -4, 1, -4, -5, 1, -6, -8, 3, -10, -11, 2, -9, -5, 3, -9, -4, 3, -5, -4, 0, -6], // 5
    [-3, 1, -2, -5, 0, -5, -5, 1, -6, -10, 3, -11, -13, 3, -12, -6, 3, -10, -5, 3, -6, -2, 0, -7], // 6
    [-2, 0, -1, -5, 0, -6, -5, 0, -5, -10, 3, -10, -12, 2, -10, -9, 2, -12, -4, 4, -9, -2, 1, -9], // 7
    [-2, 0, -1, -4, 0, -5, -4, 0, -5, -10, 3, -11, -14, 3, -10, -8, 2, -13, -3, 3, -4, -2, 1, -11], // 8
    [-1, 0, 0, -3, 0, -4, -4, 0, -5, -9, 2, -10, -13, 3, -9, -8, 2, -13, -6, 3, -8, -2, 2, -11], // 9
    [-1, 0, 0, -3, 0, -4, -4, 0, -5, -9, 2, -9, -13, 3, -9, -7, 2, -14, -5, 3, -8, -4, 2, -10], // 10
    [-1, 0, 0, -2, 0, -3, -4, 0, -4, -8, 1, -9, -13, 3, -9, -8, 3, -15, -5, 3, -9, -4, 2, -10], // 11
    [-1, 0, 0, -2, 0, -3, -4, 0, -4, -8, 1, -9, -13, 3, -9, -7, 3, -14, -5, 3, -9, -4, 2, -9], // 12
    [-1, 0, 0, -1, 0, -2, -4, 0, -4, -9, 1, -9, -12, 2, -9, -7, 2, -13, -6, 3, -8, -3, 3, -11], // 13
    [-1, 0, 0, -1, 0, -2, -4, 0, -4, -7, 1, -7, -12, 2, -9, -9, 3, -16, -6, 3, -8, -3, 3, -8], // 14
    [-1, 0, 0, 0, 0, -1, -3, 0, -4, -8, 1, -8, -12, 2, -9, -8, 3, -15, -5, 3, -6, -3, 3, -8], // 15
    [-1, 0, 0, -1, 0, -1, -3, 0, -4, -6, 1, -6, -12, 2, -9, -7, 3, -14, -6, 3, -6, -4, 3, -11], // 16
    [-1, 0, 0, -1, 0, -1, -2, 0, -3, -6, 1, -6, -10, 2, -7, -6, 3, -14, -7, 3, -9, -3, 3, -8], // 17
    [-1, 0, 0, -1, 0, -1, -2, 0, -2, -4, 1, -5, -11, 2, -10, -7, 3, -11, -5, 3, -7, -5, 3, -11], // 19
    [-1, 0, 0, -2, 0, -2, -3, 0, -2, -4, 1, -4, -8, 2, -9, -8, 3, -12, -4, 3, -6, -5, 3, -11], // 20
    [0, 0, 0, -2, 0, -2, 0, 0, -2, -3, 2, -4, -6, 4, -9, -6, 4, -8, -6, 4, -7, -4, 4, -8], // 21
    [0, 0, 0, -1, 0, -1, 0, 0, -3, -4, 2, -4, -6, 4, -9, -7, 3, -8, -5, 3, -8, -5, 4, -10], // 22
    [0, 0, 0, -1, 0, -1, 0, 0, -2, -3, 1, -4, -5, 4, -8, -7, 3, -7, -5, 3, -8, -6, 4, -10], // 24
    [0, 0, 0, -1, 0, -1, 0, 0, -3, -4, 1, -4, -7, 4, -8, -8, 3, -8, -5, 3, -8, -5, 4, -9], // 25
    [0, 0, 0, -1, 0, -1, 1, 0, -1, -4, 1, -4, -5, 4, -8, -6, 3, -6, -5, 3, -8, -5, 4, -10], // 27
    [0, 0, 0, -1, 0, -1, 0, 0, -1, -2, 1, -2, -5, 4, -8, -6, 2, -6, -6, 2, -8, -5, 4, -9], // 29
    [0, 0, 0, -1, 0, -1, 0, 0, -1, -1, 1, -2, -6, 3, -8, -6, 2, -6, -6, 2, -7, -5, 4, -9], // 30
    [0, 0, 0, -1, 0, -1, -1, 0, -2, 0, 0, -2, -5, 3, -7, -6, 2, -5, -5, 2, -8, -5, 5, -11], // 32
    [0, 0, 0, 0, 0, -1, -1, 0, -2, -1, 0, -1, -6, 3, -8, -6, 2, -5, -4, 2, -6, -3, 4, -8], // 34
    [0, 0, 0, 0, 0, 0, -1, 0, -2, -1, 0, -2, -5, 3, -8, -5, 1, -4, -5, 1, -8, -5, 4, -10], // 37
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 1, -2, -4, 3, -8, -6, 1, -4, -6, 1, -8, -4, 4, -10], // 39
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 1, -2, -3, 3, -7, -5, 1, -4, -5, 1, -6, -3, 4, -8], // 41
    [0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 0, -2, -4, 3, -7, -5, 1, -4, -5, 1, -6, -3, 4, -10], // 44
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -1, -4, 3, -7, -6, 1, -4, -4, 1, -6, -3, 3, -8], // 47
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -1, -3, 3, -6, -5, 1, -3, -4, 1, -6, -4, 5, -10], // 50
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -1, -3, 2, -6, -6, 1, -3, -3, 1, -6, -5, 4, -10], // 53
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, -2, 3, -6, -4, 1, -3, -4, 1, -5, -4, 4, -9], // 56
    [0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -1, -3, 2, -6, -5, 1, -3, -3, 1, -4, -3, 4, -8], // 60
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, -3, 2, -6, -4, 1, -2, -3, 1, -4, -4, 4, -10], // 64
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 2, -6, -4, 0, -2, -3, 0, -5, -4, 3, -8], // 68
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, -3, 2, -6, -4, 0, -2, -2, 0, -4, -4, 4, -10], // 72
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, -5, -3, 0, -2, -4, 0, -4, -4, 5, -10], // 77
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -1, 2, -6, -5, 0, -2, -3, 0, -4, -4, 3, -8], // 82
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 2, -4, -4, 0, -2, -2, 0, -4, -4, 3, -8], // 87
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 2, -4, -4, 0, -1, -2, 0, -4, -4, 4, -8], // 93
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, -5, -3, 0, -2, -3, 0, -4, -4, 4, -8], // 98
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 2, -4, -2, -2, 0, -2, -3, 0, -4, 4, -8], // 105
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -3, -2, 1, -2, -4, 1, -4, -4, 4, -8], // 111
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -3, -1, 1, -2, -3, 1, -3, -4, 4, -8], // 119
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, -3, -1, 1, -2, -3, 1, -3, -5, 3, -8], // 126
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, -2, 0, -2, -3, -3, 1, -2, -5, 3, -8], // 134
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, -1, 1, -4, -3, 1, -2, -5, 3, -8], // 143
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, -2, 0, 2, -4, -4, 2, -2, -3, 3, -6], // 152
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 1, -4, -2, 1, -1, -4, 3, -8], // 162
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 2, -4, -4, 2, -2, -2, 3, -6], // 172
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, -2, 0, 1, -4, -3, 1, -2, -3, 2, -6], // 183
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 1, -4, -1, 1, 0, -5, 3, -8], // 195
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -2, 1, 1, -3, -1, 1, 0, -4, 2, -6], // 207
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 1, 1, -3, -1, 1, 0, -4, 2, -6], // 220
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -2, 1, 1, -3, -1, 1, 0, -2, 2, -4], // 234
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 249
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 265
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 282
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 300
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 316
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 333
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 350
];
