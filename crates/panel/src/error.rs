//! Panel glue errors.

use smartdim::SmartDimError;

/// Errors from building a [`CandelaLuxMap`](crate::CandelaLuxMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapError {
    /// No entries were supplied.
    Empty,
    /// More entries than the smart-dimming cache holds.
    TooManyEntries {
        /// Cache capacity.
        capacity: usize,
    },
    /// `from` is above `till`, or `till` is above 255.
    InvalidRange {
        /// Entry position.
        entry: usize,
        /// First backlight level.
        from: u32,
        /// Last backlight level.
        till: u32,
    },
    /// Property blob is not a whole number of quadruples.
    Malformed {
        /// Blob length in bytes.
        len: usize,
    },
    /// Candela value does not fit a brightness level.
    CandelaOutOfRange {
        /// Entry position.
        entry: usize,
        /// Offending value.
        candela: u32,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for MapError {}

impl core::fmt::Display for MapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "candela map is empty"),
            Self::TooManyEntries { capacity } => {
                write!(f, "candela map exceeds {capacity} entries")
            }
            Self::InvalidRange { entry, from, till } => {
                write!(f, "candela map entry {entry}: invalid backlight range {from}..={till}")
            }
            Self::Malformed { len } => {
                write!(f, "candela map blob of {len} bytes is not whole quadruples")
            }
            Self::CandelaOutOfRange { entry, candela } => {
                write!(f, "candela map entry {entry}: candela {candela} out of range")
            }
        }
    }
}

/// Errors from driving a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// DSI link failure.
    Dsi(E),
    /// Smart-dimming engine failure.
    SmartDim(SmartDimError),
    /// Register read returned fewer bytes than requested.
    ShortRead {
        /// Register read.
        register: u8,
        /// Bytes requested.
        expected: usize,
        /// Bytes returned.
        actual: usize,
    },
    /// Candela map rejected.
    Map(MapError),
}

impl<E> From<SmartDimError> for PanelError<E> {
    fn from(e: SmartDimError) -> Self {
        Self::SmartDim(e)
    }
}

impl<E> From<MapError> for PanelError<E> {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug + core::fmt::Display> std::error::Error for PanelError<E> {}

impl<E: core::fmt::Display> core::fmt::Display for PanelError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dsi(e) => write!(f, "DSI error: {e}"),
            Self::SmartDim(e) => write!(f, "smart dimming: {e}"),
            Self::ShortRead {
                register,
                expected,
                actual,
            } => write!(
                f,
                "register {register:#04x} read {actual} of {expected} bytes"
            ),
            Self::Map(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_read_display() {
        let e: PanelError<&str> = PanelError::ShortRead {
            register: 0xC8,
            expected: 33,
            actual: 20,
        };
        assert_eq!(e.to_string(), "register 0xc8 read 20 of 33 bytes");
    }

    #[test]
    fn smartdim_errors_convert() {
        let e: PanelError<()> = SmartDimError::NotInitialized.into();
        assert_eq!(e, PanelError::SmartDim(SmartDimError::NotInitialized));
    }
}
