//! Backlight level to candela mapping.
//!
//! The board description lists `<idx from till candela>` quadruples: every
//! backlight level in `from..=till` shows `candela`, and `idx` selects the
//! AID/ELVSS command set for that step. Entry order becomes the brightness
//! level list handed to smart dimming, so the brightest step comes last.

use smartdim::MAX_LUX_ENTRIES;

use crate::error::MapError;

/// Number of backlight levels (`0..=255`).
pub const BACKLIGHT_LEVELS: usize = 256;

/// Bytes per quadruple in the big-endian board blob.
const QUAD_BYTES: usize = 16;

/// One mapped brightness step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LuxStep {
    /// Brightness level (candela) for the step.
    pub candela: u16,
    /// AID/ELVSS command index.
    pub cmd_idx: u8,
}

/// Backlight level lookup built from the board's candela table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandelaLuxMap {
    bkl: [u8; BACKLIGHT_LEVELS],
    steps: heapless::Vec<LuxStep, MAX_LUX_ENTRIES>,
    lux_tab: heapless::Vec<u16, MAX_LUX_ENTRIES>,
}

impl CandelaLuxMap {
    /// Build from `[idx, from, till, candela]` quadruples.
    ///
    /// Backlight levels no entry covers map to the first step. Overlapping
    /// ranges resolve to the later entry.
    pub fn from_quadruples(quads: &[[u32; 4]]) -> Result<Self, MapError> {
        if quads.is_empty() {
            return Err(MapError::Empty);
        }
        if quads.len() > MAX_LUX_ENTRIES {
            return Err(MapError::TooManyEntries {
                capacity: MAX_LUX_ENTRIES,
            });
        }

        let mut map = Self {
            bkl: [0; BACKLIGHT_LEVELS],
            steps: heapless::Vec::new(),
            lux_tab: heapless::Vec::new(),
        };
        for (entry, &[idx, from, till, candela]) in quads.iter().enumerate() {
            let range = backlight_range(from, till)
                .ok_or(MapError::InvalidRange { entry, from, till })?;
            let candela = u16::try_from(candela)
                .map_err(|_| MapError::CandelaOutOfRange { entry, candela })?;
            // Command tables are short; wider indices wrap like the u8 register slot.
            #[allow(clippy::cast_possible_truncation)]
            let cmd_idx = idx as u8;
            let step = LuxStep { candela, cmd_idx };
            // Capacity checked above; entry < MAX_LUX_ENTRIES fits u8.
            #[allow(clippy::cast_possible_truncation)]
            let slot = entry as u8;
            for level in map.bkl.get_mut(range).into_iter().flatten() {
                *level = slot;
            }
            map.steps.push(step).map_err(|_| MapError::TooManyEntries {
                capacity: MAX_LUX_ENTRIES,
            })?;
            map.lux_tab.push(candela).map_err(|_| MapError::TooManyEntries {
                capacity: MAX_LUX_ENTRIES,
            })?;
        }
        debug!("candela map: {} steps", map.steps.len());
        Ok(map)
    }

    /// Build from the raw big-endian property blob.
    pub fn from_be_bytes(blob: &[u8]) -> Result<Self, MapError> {
        let chunks = blob.chunks_exact(QUAD_BYTES);
        if !chunks.remainder().is_empty() {
            return Err(MapError::Malformed { len: blob.len() });
        }
        let mut quads: heapless::Vec<[u32; 4], MAX_LUX_ENTRIES> = heapless::Vec::new();
        for chunk in chunks {
            let mut quad = [0u32; 4];
            for (field, word) in quad.iter_mut().zip(chunk.chunks_exact(4)) {
                let bytes: [u8; 4] = word.try_into().map_err(|_| MapError::Malformed {
                    len: blob.len(),
                })?;
                *field = u32::from_be_bytes(bytes);
            }
            quads.push(quad).map_err(|_| MapError::TooManyEntries {
                capacity: MAX_LUX_ENTRIES,
            })?;
        }
        Self::from_quadruples(&quads)
    }

    /// Step a backlight level falls in.
    pub fn step(&self, bl_level: u8) -> LuxStep {
        let slot = self
            .bkl
            .get(usize::from(bl_level))
            .copied()
            .unwrap_or_default();
        self.steps
            .get(usize::from(slot))
            .or_else(|| self.steps.first())
            .copied()
            .unwrap_or(LuxStep {
                candela: 0,
                cmd_idx: 0,
            })
    }

    /// Candela shown at `bl_level`.
    pub fn candela(&self, bl_level: u8) -> u16 {
        self.step(bl_level).candela
    }

    /// AID/ELVSS command index for `bl_level`.
    pub fn cmd_idx(&self, bl_level: u8) -> u8 {
        self.step(bl_level).cmd_idx
    }

    /// Brightness levels in entry order, ready for smart-dimming init.
    pub fn lux_table(&self) -> &[u16] {
        &self.lux_tab
    }

    /// Mapped steps in entry order.
    pub fn steps(&self) -> &[LuxStep] {
        &self.steps
    }
}

fn backlight_range(from: u32, till: u32) -> Option<core::ops::RangeInclusive<usize>> {
    let from = usize::try_from(from).ok()?;
    let till = usize::try_from(till).ok()?;
    (from <= till && till < BACKLIGHT_LEVELS).then_some(from..=till)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    const QUADS: [[u32; 4]; 4] = [
        [0, 0, 9, 5],
        [1, 10, 99, 50],
        [2, 100, 254, 200],
        [3, 255, 255, 350],
    ];

    #[test]
    fn ranges_fill_backlight_levels() {
        let map = CandelaLuxMap::from_quadruples(&QUADS).unwrap();
        assert_eq!(map.candela(0), 5);
        assert_eq!(map.candela(9), 5);
        assert_eq!(map.candela(10), 50);
        assert_eq!(map.candela(180), 200);
        assert_eq!(map.candela(255), 350);
        assert_eq!(map.cmd_idx(99), 1);
        assert_eq!(map.lux_table(), &[5, 50, 200, 350]);
    }

    #[test]
    fn uncovered_levels_use_first_step() {
        let map = CandelaLuxMap::from_quadruples(&[[7, 100, 200, 120], [8, 255, 255, 350]]).unwrap();
        assert_eq!(map.step(3), LuxStep { candela: 120, cmd_idx: 7 });
        assert_eq!(map.candela(254), 120);
    }

    #[test]
    fn later_entry_wins_overlap() {
        let map = CandelaLuxMap::from_quadruples(&[[0, 0, 255, 10], [1, 128, 255, 300]]).unwrap();
        assert_eq!(map.candela(127), 10);
        assert_eq!(map.candela(128), 300);
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            CandelaLuxMap::from_quadruples(&[[0, 20, 10, 5]]),
            Err(MapError::InvalidRange { entry: 0, from: 20, till: 10 })
        );
        assert_eq!(
            CandelaLuxMap::from_quadruples(&[[0, 0, 5, 5], [1, 6, 256, 10]]),
            Err(MapError::InvalidRange { entry: 1, from: 6, till: 256 })
        );
        assert_eq!(
            CandelaLuxMap::from_quadruples(&[[0, 0, 255, 70_000]]),
            Err(MapError::CandelaOutOfRange { entry: 0, candela: 70_000 })
        );
        assert_eq!(CandelaLuxMap::from_quadruples(&[]), Err(MapError::Empty));
    }

    #[test]
    fn too_many_entries() {
        let quads = [[0u32, 0, 0, 10]; MAX_LUX_ENTRIES + 1];
        assert_eq!(
            CandelaLuxMap::from_quadruples(&quads),
            Err(MapError::TooManyEntries { capacity: MAX_LUX_ENTRIES })
        );
    }

    #[test]
    fn parses_big_endian_blob() {
        let mut blob = Vec::new();
        for quad in QUADS {
            for field in quad {
                blob.extend_from_slice(&field.to_be_bytes());
            }
        }
        let map = CandelaLuxMap::from_be_bytes(&blob).unwrap();
        assert_eq!(map, CandelaLuxMap::from_quadruples(&QUADS).unwrap());

        assert_eq!(
            CandelaLuxMap::from_be_bytes(&blob[..15]),
            Err(MapError::Malformed { len: 15 })
        );
    }
}
