//! Shipped calibration data.
//!
//! Everything here is `const` data in the form [`RevisionProfile`]
//! expects; integrators with other panel revisions can build their own
//! profiles the same way.
//!
//! [`RevisionProfile`]: crate::revision::RevisionProfile

pub mod ams452ef;
pub mod s6e3ha2;
pub mod s6e88a;

use crate::revision::BracketTable;

/// S6E88A family center cell, register order: V255 = 0x100 on every
/// channel, V203..V3 = 0x80, VT code 0.
#[rustfmt::skip]
pub const S6E88A_CENTER_CELL: [u8; 33] = [
    0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x00, 0x00, 0x00,
];

/// S6E3HA2 family center cell: as S6E88A plus V0 = 0 and packed VT = 0.
#[rustfmt::skip]
pub const S6E3HA2_CENTER_CELL: [u8; 35] = [
    0x01, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
    0x00, 0x00, 0x00,
    0x00, 0x00,
];

/// Supported brightness levels of the S6E88A family, ascending.
#[rustfmt::skip]
pub const S6E88A_LEVELS: [u16; 62] = [
    5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 19, 20, 21, 22, 24, 25, 27,
    29, 30, 32, 34, 37, 39, 41, 44, 47, 50, 53, 56, 60, 64, 68, 72, 77, 82, 87,
    93, 98, 105, 111, 119, 126, 134, 143, 152, 162, 172, 183, 195, 207, 220,
    234, 249, 265, 282, 300, 316, 333, 350,
];

/// Supported brightness levels of the S6E3HA2 family, ascending.
#[rustfmt::skip]
pub const S6E3HA2_LEVELS: [u16; 65] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 19, 20, 21, 22, 24,
    25, 27, 29, 30, 32, 34, 37, 39, 41, 44, 47, 50, 53, 56, 60, 64, 68, 72, 77,
    82, 87, 93, 98, 105, 111, 119, 126, 134, 143, 152, 162, 172, 183, 195, 207,
    220, 234, 249, 265, 282, 300, 316, 333, 350,
];

/// Brightness → correction-row index for the S6E88A family.
pub const S6E88A_BRACKETS: BracketTable = BracketTable::new(&S6E88A_LEVELS);

/// Brightness → correction-row index for the S6E3HA2 family.
pub const S6E3HA2_BRACKETS: BracketTable = BracketTable::new(&S6E3HA2_LEVELS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::RevisionProfile;

    const PROFILES: [RevisionProfile; 6] = [
        s6e88a::DEFAULT,
        s6e88a::REV_B,
        s6e88a::REV_G,
        ams452ef::REV_A,
        s6e3ha2::REV_A,
        s6e3ha2::REV_C,
    ];

    #[test]
    fn tables_cover_every_bracket() {
        for p in &PROFILES {
            assert_eq!(p.gradation.len(), p.brackets.len(), "{}", p.name);
            assert_eq!(p.rgb_offset.len(), p.brackets.len(), "{}", p.name);
        }
    }

    #[test]
    fn center_cells_match_family() {
        for p in &PROFILES {
            assert_eq!(p.center_cell.len(), p.family.gamma_len(), "{}", p.name);
        }
    }

    #[test]
    fn levels_ascend() {
        assert!(S6E88A_LEVELS.windows(2).all(|w| w.first() < w.get(1)));
        assert!(S6E3HA2_LEVELS.windows(2).all(|w| w.first() < w.get(1)));
    }

    #[test]
    fn top_row_has_no_correction() {
        for p in &PROFILES {
            assert_eq!(p.gradation.last(), Some(&[0i8; 9]), "{}", p.name);
        }
    }
}
