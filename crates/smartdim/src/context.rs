//! Init-once gamma cache.
//!
//! [`SmartDimContext`] runs the assembler for every supported brightness
//! level up front. Afterwards lookups are a linear scan over at most
//! [`MAX_LUX_ENTRIES`] entries and never recompute anything.

use core::fmt;

use crate::assembler::{AssemblyMode, Calibration};
use crate::error::SmartDimError;
use crate::gamma::GammaSetting;
use crate::mtp::MtpOffsets;
use crate::point::{Rgb, RefPoint};
use crate::revision::RevisionProfile;

/// Cache capacity in brightness levels.
pub const MAX_LUX_ENTRIES: usize = 80;

/// One cached brightness level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuxEntry {
    /// Brightness level (candela).
    pub lux: u16,
    /// Register bytes for the level.
    pub gamma: GammaSetting,
}

/// `lux : 350   0 255 …`, the AID log row format.
impl fmt::Display for LuxEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lux : {:3}  {}", self.lux, self.gamma)
    }
}

/// Engine state after `init`.
#[derive(Debug, Clone)]
pub struct SmartDimContext {
    calibration: Calibration,
    entries: heapless::Vec<LuxEntry, MAX_LUX_ENTRIES>,
    min_lux: GammaSetting,
    mode: AssemblyMode,
}

impl SmartDimContext {
    /// Decode `raw_mtp` and build the table for every level in `lux_tab`.
    pub fn init(
        profile: &RevisionProfile,
        raw_mtp: &[u8],
        lux_tab: &[u16],
        mode: AssemblyMode,
    ) -> Result<Self, SmartDimError> {
        Self::with_calibration(Calibration::new(profile, raw_mtp)?, lux_tab, mode)
    }

    /// Build the cache from an existing calibration.
    ///
    /// The last level is always the center-cell table, whatever the
    /// assembler would have produced for it.
    pub fn with_calibration(
        calibration: Calibration,
        lux_tab: &[u16],
        mode: AssemblyMode,
    ) -> Result<Self, SmartDimError> {
        if lux_tab.is_empty() {
            return Err(SmartDimError::LuxTableEmpty);
        }
        if lux_tab.len() > MAX_LUX_ENTRIES {
            return Err(SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES,
            });
        }

        info!(
            "smart dimming init: {} ({} levels)",
            calibration.profile().name,
            lux_tab.len()
        );

        let mut entries = heapless::Vec::new();
        for &lux in lux_tab {
            let entry = LuxEntry {
                lux,
                gamma: calibration.gamma(lux, mode),
            };
            entries.push(entry).map_err(|_| SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES,
            })?;
        }
        if let Some(top) = entries.last_mut() {
            top.gamma = calibration.max_lux_table();
        }

        let min_lux = calibration.min_lux_table();
        debug!("smart dimming init done, min table {}", min_lux);

        Ok(Self {
            calibration,
            entries,
            min_lux,
            mode,
        })
    }

    /// Cached table for `brightness`, `None` if the level was not configured.
    pub fn lookup(&self, brightness: u16) -> Option<&GammaSetting> {
        self.entries
            .iter()
            .find(|e| e.lux == brightness)
            .map(|e| &e.gamma)
    }

    /// Cached table for `brightness`; unknown levels get the center-cell
    /// table.
    pub fn generate_gamma(&self, brightness: u16) -> GammaSetting {
        match self.lookup(brightness) {
            Some(gamma) => gamma.clone(),
            None => {
                info!("gamma lookup miss for brightness {}, using max table", brightness);
                self.max_lux_table()
            }
        }
    }

    /// Pure-gamma table at the profile's minimum candela.
    pub fn min_lux_table(&self) -> &GammaSetting {
        &self.min_lux
    }

    /// Center-cell defaults in register order.
    pub fn max_lux_table(&self) -> GammaSetting {
        self.calibration.max_lux_table()
    }

    /// Cached levels in configuration order.
    pub fn entries(&self) -> &[LuxEntry] {
        &self.entries
    }

    /// Calibration the cache was built from.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Mode the cache was built in.
    pub fn mode(&self) -> AssemblyMode {
        self.mode
    }

    /// AID log rows: MTP offsets, then one row per cached level.
    pub fn aid_log(&self) -> impl Iterator<Item = AidLogLine<'_>> {
        let mtp = *self.calibration.mtp();
        OFFSET_ROWS
            .iter()
            .map(move |&row| AidLogLine::Offset {
                label: row.label(),
                values: row.values(&mtp),
            })
            .chain(self.entries.iter().map(AidLogLine::Lux))
    }

    /// Emit [`SmartDimContext::aid_log`] through the logger.
    pub fn print_aid_log(&self) {
        for line in self.aid_log() {
            match line {
                AidLogLine::Offset { label, values } => info!(
                    "MTP Offset {} R:{} G:{} B:{}",
                    label, values.r, values.g, values.b
                ),
                AidLogLine::Lux(entry) => info!("lux : {}  {}", entry.lux, entry.gamma),
            }
        }
    }
}

/// One row of the AID log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AidLogLine<'a> {
    /// Decoded MTP offsets at one point.
    Offset {
        /// Point label (`"VT"`, `"V0"`, …).
        label: &'static str,
        /// Offsets per channel.
        values: Rgb<i32>,
    },
    /// A cached level.
    Lux(&'a LuxEntry),
}

impl fmt::Display for AidLogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset { label, values } => write!(
                f,
                "MTP Offset {label} R:{} G:{} B:{}",
                values.r, values.g, values.b
            ),
            Self::Lux(entry) => fmt::Display::fmt(entry, f),
        }
    }
}

#[derive(Clone, Copy)]
enum OffsetRow {
    Vt,
    Point(RefPoint),
}

impl OffsetRow {
    fn label(self) -> &'static str {
        match self {
            Self::Vt => "VT",
            Self::Point(p) => p.name(),
        }
    }

    fn values(self, mtp: &MtpOffsets) -> Rgb<i32> {
        match self {
            Self::Vt => mtp.vt,
            Self::Point(p) => mtp.point(p),
        }
    }
}

const OFFSET_ROWS: [OffsetRow; 11] = [
    OffsetRow::Vt,
    OffsetRow::Point(RefPoint::V0),
    OffsetRow::Point(RefPoint::V3),
    OffsetRow::Point(RefPoint::V11),
    OffsetRow::Point(RefPoint::V23),
    OffsetRow::Point(RefPoint::V35),
    OffsetRow::Point(RefPoint::V51),
    OffsetRow::Point(RefPoint::V87),
    OffsetRow::Point(RefPoint::V151),
    OffsetRow::Point(RefPoint::V203),
    OffsetRow::Point(RefPoint::V255),
];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::tables::{s6e3ha2, s6e88a, S6E88A_LEVELS};

    fn context(lux: &[u16]) -> SmartDimContext {
        SmartDimContext::init(&s6e88a::DEFAULT, &[0u8; 33], lux, AssemblyMode::Aid).unwrap()
    }

    #[test]
    fn caches_every_level() {
        let ctx = context(&S6E88A_LEVELS);
        assert_eq!(ctx.entries().len(), S6E88A_LEVELS.len());
        for e in ctx.entries() {
            assert_eq!(e.gamma.len(), 33);
        }
    }

    #[test]
    fn last_level_is_center_cell() {
        let ctx = context(&S6E88A_LEVELS);
        assert_eq!(ctx.generate_gamma(350), ctx.max_lux_table());
        assert_eq!(ctx.generate_gamma(350).as_slice(), &s6e88a::DEFAULT.center_cell[..]);
    }

    #[test]
    fn last_entry_wins_even_when_not_brightest() {
        let ctx = context(&[350, 5]);
        assert_eq!(ctx.generate_gamma(5), ctx.max_lux_table());
        assert_eq!(ctx.generate_gamma(350), ctx.calibration().gamma_for(350));
    }

    #[test]
    fn miss_returns_max_table() {
        let ctx = context(&[5, 10, 350]);
        assert!(ctx.lookup(18).is_none());
        assert_eq!(ctx.generate_gamma(18), ctx.max_lux_table());
    }

    #[test]
    fn lookup_matches_assembler() {
        let ctx = context(&S6E88A_LEVELS);
        for &lux in &S6E88A_LEVELS[..S6E88A_LEVELS.len() - 1] {
            assert_eq!(ctx.lookup(lux), Some(&ctx.calibration().gamma_for(lux)));
        }
    }

    #[test]
    fn empty_and_oversized_tables_rejected() {
        let empty = SmartDimContext::init(&s6e88a::DEFAULT, &[0u8; 33], &[], AssemblyMode::Aid);
        assert_eq!(empty.unwrap_err(), SmartDimError::LuxTableEmpty);

        let big = [10u16; MAX_LUX_ENTRIES + 1];
        let full = SmartDimContext::init(&s6e88a::DEFAULT, &[0u8; 33], &big, AssemblyMode::Aid);
        assert_eq!(
            full.unwrap_err(),
            SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES
            }
        );
    }

    #[test]
    fn min_table_uses_pure_path() {
        let ctx = context(&S6E88A_LEVELS);
        let want = ctx.calibration().pure_gamma(s6e88a::MIN_CANDELA);
        assert_eq!(ctx.min_lux_table(), &want);
    }

    #[test]
    fn pure_mode_builds_pure_tables() {
        let ctx =
            SmartDimContext::init(&s6e88a::DEFAULT, &[0u8; 33], &[100, 200, 350], AssemblyMode::Pure)
                .unwrap();
        assert_eq!(ctx.mode(), AssemblyMode::Pure);
        assert_eq!(ctx.generate_gamma(100), ctx.calibration().pure_gamma(100));
        assert_eq!(ctx.generate_gamma(200), ctx.calibration().pure_gamma(200));
    }

    #[test]
    fn aid_log_rows() {
        let mut raw = [0u8; 35];
        raw[33] = 0x21; // packed VT: G = 2, R = 1
        raw[34] = 0x83; // VT B = -3
        let ctx =
            SmartDimContext::init(&s6e3ha2::REV_A, &raw, &[2, 350], AssemblyMode::Aid).unwrap();
        let lines: Vec<String> = ctx.aid_log().map(|l| l.to_string()).collect();
        assert_eq!(lines.len(), 11 + 2);
        assert_eq!(lines[0], "MTP Offset VT R:1 G:2 B:-3");
        assert_eq!(lines[1], "MTP Offset V0 R:0 G:0 B:0");
        assert_eq!(lines[10], "MTP Offset V255 R:0 G:0 B:0");
        assert!(lines[11].starts_with("lux :   2   "));
        assert!(lines[12].starts_with("lux : 350   "));
        ctx.print_aid_log();
    }
}
