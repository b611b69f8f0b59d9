//! MTP calibration bytes: sorting, decoding and center-cell defaults.
//!
//! Both the factory MTP dump and the center-cell defaults share the gamma
//! register layout:
//!
//! ```text
//! byte  0..6   V255 R MSB, R LSB, G MSB, G LSB, B MSB, B LSB
//! byte  6..30  V203 RGB, V151 RGB, V87 RGB, V51 RGB, V35 RGB, V23 RGB, V11 RGB, V3 RGB
//! S6E88A   30..33  VT R, G, B
//! S6E3HA2  30..33  V0 R, G, B
//!          33      VT packed: (G << 4) | R
//!          34      VT B
//! ```
//!
//! [`MtpLayout::sort`] permutes that read order into a per-channel view
//! ([`RegisterFields`]); [`MtpOffsets`] interprets the bytes as signed
//! offsets and [`CenterCell`] as unsigned defaults.

use crate::error::SmartDimError;
use crate::gamma::GammaSetting;
use crate::point::{Channel, RefPoint, Rgb, BYTE_POINTS};

/// Panel driver IC family. Selects the register layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PanelFamily {
    /// S6E88A0 / AMS452EF: 33-byte block, VT at 30..33.
    S6e88a,
    /// S6E3HA2: 35-byte block, V0 at 30..33, packed VT at 33..35.
    S6e3ha2,
}

impl PanelFamily {
    /// Length of the gamma register block (and of the MTP dump).
    pub const fn gamma_len(self) -> usize {
        match self {
            Self::S6e88a => 33,
            Self::S6e3ha2 => 35,
        }
    }

    /// Sorting permutation for this family.
    pub const fn layout(self) -> &'static MtpLayout {
        match self {
            Self::S6e88a => &S6E88A_LAYOUT,
            Self::S6e3ha2 => &S6E3HA2_LAYOUT,
        }
    }

    /// Human-readable part number.
    pub const fn name(self) -> &'static str {
        match self {
            Self::S6e88a => "S6E88A",
            Self::S6e3ha2 => "S6E3HA2",
        }
    }
}

impl core::fmt::Display for PanelFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One field of a channel's sorted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    V255Msb,
    V255Lsb,
    /// Index into [`BYTE_POINTS`].
    Point(usize),
    V0,
    Vt,
}

const COMMON_SLOTS: [Slot; 10] = [
    Slot::V255Msb,
    Slot::V255Lsb,
    Slot::Point(0),
    Slot::Point(1),
    Slot::Point(2),
    Slot::Point(3),
    Slot::Point(4),
    Slot::Point(5),
    Slot::Point(6),
    Slot::Point(7),
];

// Safety: const-evaluated only; an out-of-range tail fails the build
#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
const fn with_tail<const N: usize>(tail: &[Slot]) -> [Slot; N] {
    let mut out = [Slot::Vt; N];
    let mut i = 0;
    while i < N {
        out[i] = if i < COMMON_SLOTS.len() {
            COMMON_SLOTS[i]
        } else {
            tail[i - COMMON_SLOTS.len()]
        };
        i += 1;
    }
    out
}

/// Register-read order → per-channel record order.
#[derive(Debug)]
pub struct MtpLayout {
    /// Family this layout belongs to.
    pub family: PanelFamily,
    /// `sorted[i] = raw[sorting[i]]`.
    pub sorting: &'static [u8],
    slots: Rgb<&'static [Slot]>,
}

const S6E88A_CHANNEL: [Slot; 11] = with_tail(&[Slot::Vt]);
const S6E3HA2_RED: [Slot; 11] = with_tail(&[Slot::V0]);
const S6E3HA2_GB: [Slot; 12] = with_tail(&[Slot::V0, Slot::Vt]);

/// S6E88A: R, G, B records of 11 bytes each.
pub static S6E88A_LAYOUT: MtpLayout = MtpLayout {
    family: PanelFamily::S6e88a,
    sorting: &[
        0, 1, 6, 9, 12, 15, 18, 21, 24, 27, 30, // R
        2, 3, 7, 10, 13, 16, 19, 22, 25, 28, 31, // G
        4, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, // B
    ],
    slots: Rgb {
        r: &S6E88A_CHANNEL,
        g: &S6E88A_CHANNEL,
        b: &S6E88A_CHANNEL,
    },
};

/// S6E3HA2: R has no VT byte; its VT nibble is packed into G's.
pub static S6E3HA2_LAYOUT: MtpLayout = MtpLayout {
    family: PanelFamily::S6e3ha2,
    sorting: &[
        0, 1, 6, 9, 12, 15, 18, 21, 24, 27, 30, // R
        2, 3, 7, 10, 13, 16, 19, 22, 25, 28, 31, 33, // G
        4, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, 34, // B
    ],
    slots: Rgb {
        r: &S6E3HA2_RED,
        g: &S6E3HA2_GB,
        b: &S6E3HA2_GB,
    },
};

/// Raw register bytes of one colour channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelRegisters {
    /// V255 high byte.
    pub v255_msb: u8,
    /// V255 low byte.
    pub v255_lsb: u8,
    /// V203, V151, V87, V51, V35, V23, V11, V3.
    pub points: [u8; 8],
    /// V0 byte (S6E3HA2 only, zero otherwise).
    pub v0: u8,
    /// VT register byte as stored. On S6E3HA2 red has none and green holds
    /// the packed `(G << 4) | R` nibbles.
    pub vt: u8,
}

impl ChannelRegisters {
    fn slot_mut(&mut self, slot: Slot) -> Option<&mut u8> {
        match slot {
            Slot::V255Msb => Some(&mut self.v255_msb),
            Slot::V255Lsb => Some(&mut self.v255_lsb),
            Slot::Point(k) => self.points.get_mut(k),
            Slot::V0 => Some(&mut self.v0),
            Slot::Vt => Some(&mut self.vt),
        }
    }

    fn slot(&self, slot: Slot) -> u8 {
        match slot {
            Slot::V255Msb => self.v255_msb,
            Slot::V255Lsb => self.v255_lsb,
            Slot::Point(k) => self.points.get(k).copied().unwrap_or(0),
            Slot::V0 => self.v0,
            Slot::Vt => self.vt,
        }
    }
}

/// Per-channel view of a gamma register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFields {
    /// Layout the bytes were read with.
    pub family: PanelFamily,
    /// Registers per channel.
    pub channels: Rgb<ChannelRegisters>,
}

impl RegisterFields {
    /// Byte of a single-byte point (V203..V3), `None` for the others.
    pub fn point_byte(&self, point: RefPoint, ch: Channel) -> Option<u8> {
        let k = BYTE_POINTS.iter().position(|p| *p == point)?;
        self.channels.get(ch).points.get(k).copied()
    }

    /// VT code per channel, unpacking the S6E3HA2 nibble byte.
    pub fn vt_codes(&self) -> Rgb<u8> {
        let c = &self.channels;
        match self.family {
            PanelFamily::S6e88a => Rgb {
                r: c.r.vt,
                g: c.g.vt,
                b: c.b.vt,
            },
            PanelFamily::S6e3ha2 => Rgb {
                r: c.g.vt & 0x0F,
                g: c.g.vt >> 4,
                b: c.b.vt,
            },
        }
    }
}

impl MtpLayout {
    /// Permute a raw register dump into per-channel records.
    pub fn sort(&self, raw: &[u8]) -> Result<RegisterFields, SmartDimError> {
        let expected = self.family.gamma_len();
        if raw.len() != expected {
            return Err(SmartDimError::MtpLength {
                expected,
                actual: raw.len(),
            });
        }

        let mut sorted = self
            .sorting
            .iter()
            .map(|&from| raw.get(usize::from(from)).copied().unwrap_or(0));
        let mut channels = Rgb::<ChannelRegisters>::default();
        for ch in Channel::ALL {
            let record = channels.get_mut(ch);
            for &slot in self.slots.get(ch) {
                if let (Some(dst), Some(byte)) = (record.slot_mut(slot), sorted.next()) {
                    *dst = byte;
                }
            }
        }

        Ok(RegisterFields {
            family: self.family,
            channels,
        })
    }

    /// Inverse of [`sort`](Self::sort): write records back in register order.
    pub fn unsort(&self, fields: &RegisterFields) -> GammaSetting {
        let mut out = GammaSetting::zeroed(self.family);
        let bytes = out.as_mut_slice();
        let mut order = self.sorting.iter();
        for ch in Channel::ALL {
            let record = fields.channels.get(ch);
            for &slot in self.slots.get(ch) {
                if let Some(dst) = order.next().and_then(|&i| bytes.get_mut(usize::from(i))) {
                    *dst = record.slot(slot);
                }
            }
        }
        out
    }
}

/// Sign-magnitude byte: bit 7 sign, bits 0..=6 magnitude.
pub const fn sign_magnitude(byte: u8) -> i32 {
    let magnitude = (byte & 0x7F) as i32;
    if byte & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// V255 MTP offset: any non-zero MSB means the LSB is negative.
pub const fn v255_offset(msb: u8, lsb: u8) -> i32 {
    if msb != 0 {
        -(lsb as i32)
    } else {
        lsb as i32
    }
}

/// Decoded per-unit calibration offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MtpOffsets {
    /// V255 offsets.
    pub v255: Rgb<i32>,
    /// Offsets for V203, V151, V87, V51, V35, V23, V11, V3.
    pub points: [Rgb<i32>; 8],
    /// V0 offsets (read but never applied).
    pub v0: Rgb<i32>,
    /// VT offsets.
    pub vt: Rgb<i32>,
}

impl MtpOffsets {
    /// Sort and decode a raw MTP dump.
    pub fn from_raw(family: PanelFamily, raw: &[u8]) -> Result<Self, SmartDimError> {
        family.layout().sort(raw).map(|f| Self::decode(&f))
    }

    /// Interpret sorted registers as signed offsets.
    pub fn decode(fields: &RegisterFields) -> Self {
        let c = &fields.channels;
        let mut points = [Rgb::default(); 8];
        for (k, slot) in points.iter_mut().enumerate() {
            *slot = c.map(|_, reg| sign_magnitude(reg.points.get(k).copied().unwrap_or(0)));
        }
        Self {
            v255: c.map(|_, reg| v255_offset(reg.v255_msb, reg.v255_lsb)),
            points,
            v0: c.map(|_, reg| sign_magnitude(reg.v0)),
            vt: fields.vt_codes().map(|_, code| sign_magnitude(code)),
        }
    }

    /// Offset applied at `point`. V1 carries no MTP byte and reads as zero.
    pub fn point(&self, point: RefPoint) -> Rgb<i32> {
        match point {
            RefPoint::V255 => self.v255,
            RefPoint::V0 => self.v0,
            RefPoint::V1 => Rgb::default(),
            p => BYTE_POINTS
                .iter()
                .position(|b| *b == p)
                .and_then(|k| self.points.get(k).copied())
                .unwrap_or_default(),
        }
    }
}

/// The family's nominal ("center cell") register values.
///
/// Decoded unsigned, unlike [`MtpOffsets`]. Written back verbatim this is
/// the maximum-brightness gamma table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterCell {
    fields: RegisterFields,
}

impl CenterCell {
    /// Parse register-order default bytes.
    pub fn from_register_bytes(family: PanelFamily, bytes: &[u8]) -> Result<Self, SmartDimError> {
        family.layout().sort(bytes).map(|fields| Self { fields })
    }

    /// Family of the defaults.
    pub fn family(&self) -> PanelFamily {
        self.fields.family
    }

    /// Sorted registers.
    pub fn fields(&self) -> &RegisterFields {
        &self.fields
    }

    /// 16-bit V255 defaults.
    pub fn v255(&self) -> Rgb<i32> {
        self.fields
            .channels
            .map(|_, reg| i32::from(u16::from_be_bytes([reg.v255_msb, reg.v255_lsb])))
    }

    /// Default at a single-byte point; V0/V1/V255 read as zero.
    pub fn point(&self, point: RefPoint) -> Rgb<i32> {
        Rgb::from_fn(|ch| self.fields.point_byte(point, ch).map_or(0, i32::from))
    }

    /// VT defaults.
    pub fn vt(&self) -> Rgb<i32> {
        self.fields.vt_codes().map(|_, code| i32::from(code))
    }

    /// Defaults in register order.
    pub fn max_lux_table(&self) -> GammaSetting {
        self.fields.family.layout().unsort(&self.fields)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> heapless::Vec<u8, 35> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn sign_magnitude_decoding() {
        assert_eq!(sign_magnitude(0x00), 0);
        assert_eq!(sign_magnitude(0x05), 5);
        assert_eq!(sign_magnitude(0x85), -5);
        assert_eq!(sign_magnitude(0x80), 0);
        assert_eq!(sign_magnitude(0xFF), -127);
        assert_eq!(sign_magnitude(0x7F), 127);
    }

    #[test]
    fn v255_msb_flags_negative() {
        assert_eq!(v255_offset(0, 7), 7);
        assert_eq!(v255_offset(1, 7), -7);
        assert_eq!(v255_offset(0xFF, 0), 0);
    }

    #[test]
    fn s6e88a_sort_places_every_byte() {
        let raw = ramp(33);
        let f = S6E88A_LAYOUT.sort(&raw).unwrap();
        let r = f.channels.r;
        assert_eq!((r.v255_msb, r.v255_lsb), (0, 1));
        assert_eq!(r.points, [6, 9, 12, 15, 18, 21, 24, 27]);
        assert_eq!(r.vt, 30);
        assert_eq!(f.channels.g.points[0], 7);
        assert_eq!(f.channels.b.vt, 32);
        assert_eq!(f.vt_codes(), Rgb { r: 30, g: 31, b: 32 });
    }

    #[test]
    fn s6e3ha2_sort_splits_packed_vt() {
        let mut raw = ramp(35);
        raw[33] = 0x52; // G = 5, R = 2
        raw[34] = 0x07;
        let f = S6E3HA2_LAYOUT.sort(&raw).unwrap();
        assert_eq!(f.channels.r.v0, 30);
        assert_eq!(f.channels.g.v0, 31);
        assert_eq!(f.channels.b.v0, 32);
        assert_eq!(f.vt_codes(), Rgb { r: 2, g: 5, b: 7 });
    }

    #[test]
    fn sort_rejects_wrong_length() {
        let err = S6E88A_LAYOUT.sort(&[0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            SmartDimError::MtpLength {
                expected: 33,
                actual: 12
            }
        );
        assert!(S6E3HA2_LAYOUT.sort(&[0u8; 33]).is_err());
    }

    #[test]
    fn unsort_inverts_sort() {
        for layout in [&S6E88A_LAYOUT, &S6E3HA2_LAYOUT] {
            let raw = ramp(layout.family.gamma_len());
            let f = layout.sort(&raw).unwrap();
            assert_eq!(layout.unsort(&f).as_slice(), raw.as_slice());
        }
    }

    #[test]
    fn offsets_decode_signs() {
        let mut raw = [0u8; 33];
        raw[0] = 0x01; // R V255 MSB set → negative
        raw[1] = 0x03;
        raw[3] = 0x04; // G V255 +4
        raw[6] = 0x82; // R V203 -2
        raw[29] = 0x05; // B V3 +5
        raw[31] = 0x81; // G VT -1
        let m = MtpOffsets::from_raw(PanelFamily::S6e88a, &raw).unwrap();
        assert_eq!(m.v255, Rgb { r: -3, g: 4, b: 0 });
        assert_eq!(m.point(RefPoint::V203).r, -2);
        assert_eq!(m.point(RefPoint::V3).b, 5);
        assert_eq!(m.vt.g, -1);
        assert_eq!(m.point(RefPoint::V1), Rgb::default());
    }

    #[test]
    fn center_cell_reads_unsigned() {
        let mut bytes = [0x80u8; 33];
        for b in &mut bytes[0..6] {
            *b = 0;
        }
        bytes[0] = 0x01;
        bytes[30] = 0x00;
        bytes[31] = 0x03;
        bytes[32] = 0x00;
        let cell = CenterCell::from_register_bytes(PanelFamily::S6e88a, &bytes).unwrap();
        assert_eq!(cell.v255(), Rgb { r: 256, g: 0, b: 0 });
        assert_eq!(cell.point(RefPoint::V87), Rgb::splat(128));
        assert_eq!(cell.vt(), Rgb { r: 0, g: 3, b: 0 });
        assert_eq!(cell.max_lux_table().as_slice(), &bytes[..]);
    }
}
