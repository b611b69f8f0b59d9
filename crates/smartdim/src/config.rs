//! Runtime panel configuration.
//!
//! Everything the driver learns at probe time: which part is fitted, the
//! ID word read from it, the brightness levels the backlight exposes and
//! how tables should be built. With the `serde` feature it loads from JSON
//! (see `xtask`).

use crate::assembler::AssemblyMode;
use crate::context::MAX_LUX_ENTRIES;
use crate::error::SmartDimError;
use crate::fixed;
use crate::revision::{self, LdiRevision, PanelModel, RevisionProfile};

/// Probe-time panel description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelConfig {
    /// Fitted part.
    pub model: PanelModel,
    /// ID word read from the driver IC.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ldi_revision: LdiRevision,
    /// Supported brightness levels; the last is the brightest.
    pub lux_tab: heapless::Vec<u16, MAX_LUX_ENTRIES>,
    /// Table build mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: AssemblyMode,
    /// Regulator output in millivolts, replacing the profile's value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vreg_mv: Option<u16>,
}

impl PanelConfig {
    /// Config for `model` with the given levels and defaults elsewhere.
    pub fn new(model: PanelModel, lux_tab: &[u16]) -> Result<Self, SmartDimError> {
        let lux_tab = heapless::Vec::from_slice(lux_tab).map_err(|_| {
            SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES,
            }
        })?;
        Ok(Self {
            model,
            ldi_revision: LdiRevision::default(),
            lux_tab,
            mode: AssemblyMode::default(),
            vreg_mv: None,
        })
    }

    /// Profile the registry selects for this panel.
    pub fn profile(&self) -> &'static RevisionProfile {
        revision::lookup(self.model, self.ldi_revision)
    }

    /// Q22 regulator voltage override, if configured.
    pub fn vreg(&self) -> Option<i64> {
        self.vreg_mv.map(|mv| fixed::volts(i64::from(mv)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::tables::{s6e3ha2, S6E3HA2_LEVELS};

    #[test]
    fn new_uses_defaults() {
        let cfg = PanelConfig::new(PanelModel::S6e3ha2Wqhd, &S6E3HA2_LEVELS).unwrap();
        assert_eq!(cfg.mode, AssemblyMode::Aid);
        assert_eq!(cfg.vreg(), None);
        assert_eq!(cfg.profile().name, s6e3ha2::REV_A.name);
        assert_eq!(cfg.lux_tab.len(), 65);
    }

    #[test]
    fn too_many_levels() {
        let err = PanelConfig::new(PanelModel::S6e88a0, &[1u16; MAX_LUX_ENTRIES + 1]).unwrap_err();
        assert_eq!(
            err,
            SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES
            }
        );
    }

    #[test]
    fn vreg_override_in_millivolts() {
        let mut cfg = PanelConfig::new(PanelModel::S6e88a0, &[350]).unwrap();
        cfg.vreg_mv = Some(6400);
        assert_eq!(cfg.vreg(), Some(s6e3ha2::VREG));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let cfg: PanelConfig = serde_json::from_str(
            r#"{ "model": "S6e3ha2Wqhd", "ldi_revision": 3, "lux_tab": [2, 100, 350] }"#,
        )
        .unwrap();
        assert_eq!(cfg.profile().name, s6e3ha2::REV_C.name);
        assert_eq!(cfg.lux_tab.as_slice(), &[2, 100, 350]);
        assert_eq!(cfg.mode, AssemblyMode::Aid);
    }
}
