//! Error type for the smart-dimming engine.

/// Errors produced while building or querying gamma tables.
///
/// `SearchNotFound` and `TableIndexMiss` are recovered inside the assembler
/// (logged, then clamped to the nearest valid value); they surface only from
/// the lower-level functions that detect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmartDimError {
    /// Target candela lies above every entry of the gamma reference curve.
    SearchNotFound {
        /// Scaled candela value that had no bracketing pair.
        candela: i64,
    },
    /// Brightness level has no entry in the revision's bracket table.
    TableIndexMiss {
        /// Requested brightness level.
        brightness: u16,
    },
    /// Reference gray levels are not strictly increasing.
    GrayScaleOrder {
        /// Position in the reference list where ordering broke.
        index: usize,
    },
    /// MTP dump has the wrong length for the panel family.
    MtpLength {
        /// Bytes required by the family layout.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// More supported brightness levels than the cache can hold.
    LuxTableFull {
        /// Cache capacity.
        capacity: usize,
    },
    /// No supported brightness levels were configured.
    LuxTableEmpty,
    /// `generate_gamma` or `get_min_lux_table` called before `init`.
    NotInitialized,
    /// Output buffer shorter than the family's gamma register block.
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for SmartDimError {}

impl core::fmt::Display for SmartDimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SearchNotFound { candela } => {
                write!(f, "candela {candela} outside gamma reference curve")
            }
            Self::TableIndexMiss { brightness } => {
                write!(f, "no candela bracket for brightness {brightness}")
            }
            Self::GrayScaleOrder { index } => {
                write!(f, "reference gray levels out of order at position {index}")
            }
            Self::MtpLength { expected, actual } => {
                write!(f, "MTP dump is {actual} bytes, family layout needs {expected}")
            }
            Self::LuxTableFull { capacity } => {
                write!(f, "lux table exceeds cache capacity of {capacity} levels")
            }
            Self::LuxTableEmpty => write!(f, "lux table is empty"),
            Self::NotInitialized => write!(f, "smart dimming not initialised"),
            Self::BufferTooSmall { needed } => {
                write!(f, "output buffer too small, need {needed} bytes")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_lengths() {
        let e = SmartDimError::MtpLength {
            expected: 33,
            actual: 12,
        };
        let s = e.to_string();
        assert!(s.contains("33"));
        assert!(s.contains("12"));
    }

    #[test]
    fn errors_are_copy_and_comparable() {
        let a = SmartDimError::NotInitialized;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, SmartDimError::LuxTableEmpty);
    }
}
