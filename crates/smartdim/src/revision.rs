//! Per-revision calibration profiles.
//!
//! A [`RevisionProfile`] is everything that differs between panel
//! revisions: regulator voltage, center cell, the brightness → candela map,
//! the bracket table that selects a correction row, the gradation and RGB
//! correction tables, and the search curve. The assembler is generic over
//! it; [`lookup`] picks one from the panel's `ldi_revision` word.

use crate::curve::SearchCurve;
use crate::error::SmartDimError;
use crate::gamma::RGB_COMPENSATION;
use crate::mtp::PanelFamily;
use crate::tables::{ams452ef, s6e3ha2, s6e88a};

/// Brightness range with per-level candela overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessBand {
    /// Lowest brightness in the band.
    pub min: u16,
    /// Highest brightness in the band.
    pub max: u16,
    /// `(brightness, base candela)` exact matches.
    pub exact: &'static [(u16, u16)],
    /// Base candela for in-band levels without an exact match.
    pub fallback: u16,
}

impl BrightnessBand {
    /// Band mapping every level to one candela.
    pub const fn flat(min: u16, max: u16, candela: u16) -> Self {
        Self {
            min,
            max,
            exact: &[],
            fallback: candela,
        }
    }

    fn candela(&self, brightness: u16) -> Option<u16> {
        if !(self.min..=self.max).contains(&brightness) {
            return None;
        }
        let hit = self.exact.iter().find(|(b, _)| *b == brightness);
        Some(hit.map_or(self.fallback, |(_, cd)| *cd))
    }
}

/// Brightness → base candela, first matching band wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandelaMap {
    /// Bands, checked in order.
    pub bands: &'static [BrightnessBand],
    /// Candela below/between/above every band (the AOR dimming base).
    pub default: u16,
}

impl CandelaMap {
    /// Base candela the per-point targets are scaled by.
    pub fn base_candela(&self, brightness: u16) -> u16 {
        self.bands
            .iter()
            .find_map(|band| band.candela(brightness))
            .unwrap_or(self.default)
    }
}

/// Supported brightness levels; a level's position selects its
/// gradation/RGB correction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketTable {
    levels: &'static [u16],
}

impl BracketTable {
    /// Wrap an ascending level list.
    pub const fn new(levels: &'static [u16]) -> Self {
        Self { levels }
    }

    /// Row for `brightness`, `None` when the level is not supported.
    pub fn find(&self, brightness: u16) -> Option<usize> {
        self.levels.iter().position(|&l| l == brightness)
    }

    /// As [`BracketTable::find`], reporting a miss as
    /// [`SmartDimError::TableIndexMiss`].
    pub fn row(&self, brightness: u16) -> Result<usize, SmartDimError> {
        self.find(brightness)
            .ok_or(SmartDimError::TableIndexMiss { brightness })
    }

    /// Row used when `find` misses.
    pub fn last(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// `true` when no levels are listed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The supported levels.
    pub fn levels(&self) -> &'static [u16] {
        self.levels
    }
}

/// Revision-specific inputs to the gamma assembler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevisionProfile {
    /// Display name for logs.
    pub name: &'static str,
    /// Register layout.
    pub family: PanelFamily,
    /// Regulator output in Q22 volts.
    pub vreg: i64,
    /// Center-cell defaults in register order.
    pub center_cell: &'static [u8],
    /// Brightness → base candela.
    pub candela_map: CandelaMap,
    /// Brightness → correction row.
    pub brackets: BracketTable,
    /// Gray-index nudges, columns V255, V203, …, V3.
    pub gradation: &'static [[i8; 9]],
    /// Register offsets, columns R/G/B × V255, V203, …, V11.
    pub rgb_offset: &'static [[i8; RGB_COMPENSATION]],
    /// Curve searched for gray indices.
    pub search_curve: SearchCurve,
    /// Levels at or above this use gamma 2.2 targets, below it 2.15.
    pub top_brightness: u16,
    /// Brightness of the minimum-brightness table.
    pub min_candela: u16,
}

/// Panel part, the namespace revision IDs are interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PanelModel {
    /// S6E88A0 AMOLED (33-byte gamma block).
    S6e88a0,
    /// AMS452EF on the S6E88A driver IC.
    Ams452ef,
    /// S6E3HA2 WQHD (35-byte gamma block).
    S6e3ha2Wqhd,
}

impl PanelModel {
    /// Register layout of this part.
    pub const fn family(self) -> PanelFamily {
        match self {
            Self::S6e88a0 | Self::Ams452ef => PanelFamily::S6e88a,
            Self::S6e3ha2Wqhd => PanelFamily::S6e3ha2,
        }
    }

    /// Profile used for unlisted revisions.
    pub const fn default_profile(self) -> &'static RevisionProfile {
        match self {
            Self::S6e88a0 | Self::Ams452ef => &s6e88a::DEFAULT,
            Self::S6e3ha2Wqhd => &s6e3ha2::REV_A,
        }
    }
}

/// Panel ID word as read from the driver IC: `id1 << 16 | id2 << 8 | id3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LdiRevision(pub u32);

impl LdiRevision {
    /// Manufacturer byte.
    pub const fn id1(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Panel-type byte.
    pub const fn id2(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Silicon revision byte; selects the profile.
    pub const fn id3(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

/// id3 values, silicon revision letter index (A = 1).
pub mod id3 {
    /// S6E88A0 rev A.
    pub const S6E88A0_REV_A: u8 = 0x01;
    /// S6E88A0 rev C.
    pub const S6E88A0_REV_C: u8 = 0x03;
    /// S6E88A0 rev D.
    pub const S6E88A0_REV_D: u8 = 0x04;
    /// S6E88A0 rev G.
    pub const S6E88A0_REV_G: u8 = 0x07;
    /// AMS452EF rev A.
    pub const AMS452EF_REV_A: u8 = 0x01;
    /// S6E3HA2 WQHD rev C.
    pub const S6E3HA2_WQHD_REV_C: u8 = 0x03;
    /// S6E3HA2 WQHD rev D.
    pub const S6E3HA2_WQHD_REV_D: u8 = 0x04;
}

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// Part the IDs belong to.
    pub model: PanelModel,
    /// Matching id3 values.
    pub id3: &'static [u8],
    /// Profile to use.
    pub profile: &'static RevisionProfile,
}

/// Built-in revision → profile table.
pub static REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        model: PanelModel::S6e88a0,
        id3: &[id3::S6E88A0_REV_G],
        profile: &s6e88a::REV_G,
    },
    RegistryEntry {
        model: PanelModel::S6e88a0,
        id3: &[id3::S6E88A0_REV_A, id3::S6E88A0_REV_C, id3::S6E88A0_REV_D],
        profile: &s6e88a::REV_B,
    },
    RegistryEntry {
        model: PanelModel::Ams452ef,
        id3: &[id3::AMS452EF_REV_A],
        profile: &ams452ef::REV_A,
    },
    RegistryEntry {
        model: PanelModel::S6e3ha2Wqhd,
        id3: &[id3::S6E3HA2_WQHD_REV_C, id3::S6E3HA2_WQHD_REV_D],
        profile: &s6e3ha2::REV_C,
    },
];

/// Profile for `model` at `revision`, falling back to the model default.
pub fn lookup(model: PanelModel, revision: LdiRevision) -> &'static RevisionProfile {
    lookup_in(REGISTRY, model, revision)
}

/// [`lookup`] against a caller-supplied registry.
pub fn lookup_in(
    registry: &[RegistryEntry],
    model: PanelModel,
    revision: LdiRevision,
) -> &'static RevisionProfile {
    let id3 = revision.id3();
    registry
        .iter()
        .find(|e| e.model == model && e.id3.contains(&id3))
        .map_or_else(|| model.default_profile(), |e| e.profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldi_revision_bytes() {
        let rev = LdiRevision(0x00AB_CD12);
        assert_eq!(rev.id1(), 0xAB);
        assert_eq!(rev.id2(), 0xCD);
        assert_eq!(rev.id3(), 0x12);
    }

    #[test]
    fn candela_map_bands() {
        let map = &s6e88a::DEFAULT.candela_map;
        assert_eq!(map.base_candela(350), 350);
        assert_eq!(map.base_candela(265), 259);
        assert_eq!(map.base_candela(270), 112); // in the top band, no exact match
        assert_eq!(map.base_candela(200), 259);
        assert_eq!(map.base_candela(72), 112);
        assert_eq!(map.base_candela(143), 231);
        assert_eq!(map.base_candela(152), 245);
        assert_eq!(map.base_candela(60), 112);
        assert_eq!(map.base_candela(5), 112);
    }

    #[test]
    fn s6e3ha2_bands_use_aor_base() {
        assert_eq!(s6e3ha2::REV_A.candela_map.base_candela(72), 116);
        assert_eq!(s6e3ha2::REV_C.candela_map.base_candela(77), 117);
        assert_eq!(s6e3ha2::REV_C.candela_map.base_candela(172), 246);
        assert_eq!(s6e3ha2::REV_A.candela_map.base_candela(172), 256);
    }

    #[test]
    fn brackets_find_and_miss() {
        let b = s6e88a::DEFAULT.brackets;
        assert_eq!(b.find(5), Some(0));
        assert_eq!(b.find(350), Some(61));
        assert_eq!(b.find(18), None);
        assert_eq!(
            b.row(18),
            Err(SmartDimError::TableIndexMiss { brightness: 18 })
        );
        assert_eq!(b.last(), 61);
        assert_eq!(s6e3ha2::REV_A.brackets.last(), 64);
    }

    #[test]
    fn registry_dispatch() {
        let p = lookup(PanelModel::S6e88a0, LdiRevision(0x0000_0007));
        assert_eq!(p.name, s6e88a::REV_G.name);
        let p = lookup(PanelModel::S6e88a0, LdiRevision(0x0040_0003));
        assert_eq!(p.name, s6e88a::REV_B.name);
        let p = lookup(PanelModel::Ams452ef, LdiRevision(0x01));
        assert_eq!(p.search_curve, SearchCurve::G2P2_360);
        let p = lookup(PanelModel::S6e3ha2Wqhd, LdiRevision(0x04));
        assert_eq!(p.name, s6e3ha2::REV_C.name);
    }

    #[test]
    fn unknown_revision_falls_back() {
        let p = lookup(PanelModel::S6e88a0, LdiRevision(0xFF));
        assert_eq!(p.name, s6e88a::DEFAULT.name);
        let p = lookup(PanelModel::S6e3ha2Wqhd, LdiRevision(0x09));
        assert_eq!(p.name, s6e3ha2::REV_A.name);
    }

    #[test]
    fn custom_registry() {
        let custom = [RegistryEntry {
            model: PanelModel::S6e3ha2Wqhd,
            id3: &[0x42],
            profile: &s6e3ha2::REV_C,
        }];
        let p = lookup_in(&custom, PanelModel::S6e3ha2Wqhd, LdiRevision(0x42));
        assert_eq!(p.name, s6e3ha2::REV_C.name);
        let p = lookup_in(&custom, PanelModel::S6e3ha2Wqhd, LdiRevision(0x03));
        assert_eq!(p.name, s6e3ha2::REV_A.name);
    }
}
