//! Reference points and colour channels.

/// Colour channel of a gamma register triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red sub-pixel.
    Red,
    /// Green sub-pixel.
    Green,
    /// Blue sub-pixel.
    Blue,
}

impl Channel {
    /// All channels in register order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Register order position (R = 0, G = 1, B = 2).
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// One value per colour channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb<T> {
    /// Red.
    pub r: T,
    /// Green.
    pub g: T,
    /// Blue.
    pub b: T,
}

impl<T: Copy> Rgb<T> {
    /// Same value on every channel.
    pub const fn splat(v: T) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Build from a per-channel function.
    pub fn from_fn(mut f: impl FnMut(Channel) -> T) -> Self {
        Self {
            r: f(Channel::Red),
            g: f(Channel::Green),
            b: f(Channel::Blue),
        }
    }

    /// Value for `ch`.
    pub const fn get(&self, ch: Channel) -> T {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Mutable slot for `ch`.
    pub fn get_mut(&mut self, ch: Channel) -> &mut T {
        match ch {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    /// Apply `f` per channel.
    pub fn map<U>(self, mut f: impl FnMut(Channel, T) -> U) -> Rgb<U> {
        Rgb {
            r: f(Channel::Red, self.r),
            g: f(Channel::Green, self.g),
            b: f(Channel::Blue, self.b),
        }
    }
}

/// A reference gray level whose voltage is computed directly from MTP data.
///
/// Declaration order is ascending gray level, which is also descending
/// voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefPoint {
    /// Gray 0, pinned to `vreg`.
    V0,
    /// Gray 1, first interpolant between V0 and V3.
    V1,
    /// Gray 3.
    V3,
    /// Gray 11.
    V11,
    /// Gray 23.
    V23,
    /// Gray 35.
    V35,
    /// Gray 51.
    V51,
    /// Gray 87.
    V87,
    /// Gray 151.
    V151,
    /// Gray 203.
    V203,
    /// Gray 255.
    V255,
}

/// Gray levels of the reference points, ascending.
pub const REFERENCE_LEVELS: [u8; 11] = [0, 1, 3, 11, 23, 35, 51, 87, 151, 203, 255];

/// Points whose gray index is searched per brightness (everything but V0).
pub const SEARCHED: [RefPoint; 10] = [
    RefPoint::V1,
    RefPoint::V3,
    RefPoint::V11,
    RefPoint::V23,
    RefPoint::V35,
    RefPoint::V51,
    RefPoint::V87,
    RefPoint::V151,
    RefPoint::V203,
    RefPoint::V255,
];

/// Points stored as one register byte per channel, in register order.
pub const BYTE_POINTS: [RefPoint; 8] = [
    RefPoint::V203,
    RefPoint::V151,
    RefPoint::V87,
    RefPoint::V51,
    RefPoint::V35,
    RefPoint::V23,
    RefPoint::V11,
    RefPoint::V3,
];

impl RefPoint {
    /// All points, ascending gray level.
    pub const ALL: [Self; 11] = [
        Self::V0,
        Self::V1,
        Self::V3,
        Self::V11,
        Self::V23,
        Self::V35,
        Self::V51,
        Self::V87,
        Self::V151,
        Self::V203,
        Self::V255,
    ];

    /// Position in [`RefPoint::ALL`].
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Gray level this point pins.
    pub const fn gray_level(self) -> u8 {
        match self {
            Self::V0 => 0,
            Self::V1 => 1,
            Self::V3 => 3,
            Self::V11 => 11,
            Self::V23 => 23,
            Self::V35 => 35,
            Self::V51 => 51,
            Self::V87 => 87,
            Self::V151 => 151,
            Self::V203 => 203,
            Self::V255 => 255,
        }
    }

    /// Next brighter point, whose voltage anchors this one's ratio.
    ///
    /// `None` for V255 and the two points below V3 that are not derived
    /// from an upper neighbour.
    pub const fn upper(self) -> Option<Self> {
        match self {
            Self::V3 => Some(Self::V11),
            Self::V11 => Some(Self::V23),
            Self::V23 => Some(Self::V35),
            Self::V35 => Some(Self::V51),
            Self::V51 => Some(Self::V87),
            Self::V87 => Some(Self::V151),
            Self::V151 => Some(Self::V203),
            Self::V203 => Some(Self::V255),
            Self::V0 | Self::V1 | Self::V255 => None,
        }
    }

    /// Position in [`SEARCHED`], `None` for V0.
    pub const fn searched_slot(self) -> Option<usize> {
        (self as usize).checked_sub(1)
    }

    /// Register label, e.g. `"V203"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::V0 => "V0",
            Self::V1 => "V1",
            Self::V3 => "V3",
            Self::V11 => "V11",
            Self::V23 => "V23",
            Self::V35 => "V35",
            Self::V51 => "V51",
            Self::V87 => "V87",
            Self::V151 => "V151",
            Self::V203 => "V203",
            Self::V255 => "V255",
        }
    }
}

impl core::fmt::Display for RefPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)] // Test fixtures index known-length arrays
mod tests {
    use super::*;

    #[test]
    fn reference_levels_match_points() {
        for (p, level) in RefPoint::ALL.iter().zip(REFERENCE_LEVELS) {
            assert_eq!(p.gray_level(), level);
        }
    }

    #[test]
    fn reference_levels_strictly_ascending() {
        assert!(REFERENCE_LEVELS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn searched_slots_line_up() {
        for (i, p) in SEARCHED.iter().enumerate() {
            assert_eq!(p.searched_slot(), Some(i));
        }
        assert_eq!(RefPoint::V0.searched_slot(), None);
    }

    #[test]
    fn upper_chain_reaches_v255() {
        let mut p = RefPoint::V3;
        let mut hops = 0;
        while let Some(up) = p.upper() {
            assert!(up > p);
            p = up;
            hops += 1;
        }
        assert_eq!(p, RefPoint::V255);
        assert_eq!(hops, 8);
    }

    #[test]
    fn rgb_map_and_get() {
        let v = Rgb { r: 1, g: 2, b: 3 };
        let doubled = v.map(|_, x| x * 2);
        assert_eq!(doubled.get(Channel::Green), 4);
        let mut w = Rgb::splat(0u8);
        *w.get_mut(Channel::Blue) = 9;
        assert_eq!(w, Rgb { r: 0, g: 0, b: 9 });
    }
}
