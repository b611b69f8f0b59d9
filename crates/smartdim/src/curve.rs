//! Gamma curve tables.
//!
//! A coefficient table holds `(level / 255)^gamma` in Q22 for each of the
//! 256 gray levels; multiplying by a candela value gives the luminance a
//! level should produce. Reference curves used by the search are the
//! coefficient table scaled by the panel's maximum candela.

/// Gamma exponent of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum GammaCurve {
    /// Gamma 1.9.
    G1p9,
    /// Gamma 2.15, used for per-point targets below the top brightness.
    G2p15,
    /// Gamma 2.2, the reference curve.
    G2p2,
}

impl GammaCurve {
    /// Exponent value.
    pub const fn exponent(self) -> f64 {
        match self {
            Self::G1p9 => 1.9,
            Self::G2p15 => 2.15,
            Self::G2p2 => 2.2,
        }
    }
}

/// 256 gray levels × Q22 value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveTable {
    values: [i64; 256],
}

impl CurveTable {
    /// `round((i / 255)^gamma * 2^22)` for `i` in `0..=255`.
    #[allow(clippy::cast_possible_truncation)] // Safety: rounded value lies in 0.0..=2^22
    pub fn coefficients(curve: GammaCurve) -> Self {
        const Q22: f64 = 4_194_304.0;
        let exp = curve.exponent();
        let mut values = [0i64; 256];
        for (i, v) in (0u32..).zip(values.iter_mut()) {
            let x = f64::from(i) / 255.0;
            *v = libm::round(libm::pow(x, exp) * Q22) as i64;
        }
        Self { values }
    }

    /// Coefficient table for `curve` scaled by `max_candela`.
    pub fn reference(curve: GammaCurve, max_candela: u16) -> Self {
        Self::coefficients(curve).scaled(max_candela)
    }

    /// Externally supplied table.
    pub const fn from_values(values: [i64; 256]) -> Self {
        Self { values }
    }

    /// Every entry multiplied by `candela`.
    pub fn scaled(&self, candela: u16) -> Self {
        let cd = i64::from(candela);
        Self {
            values: self.values.map(|v| v.saturating_mul(cd)),
        }
    }

    /// Value at gray `level`.
    pub fn get(&self, level: u8) -> i64 {
        self.values.get(usize::from(level)).copied().unwrap_or(0)
    }

    /// All 256 values.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

/// Curve and peak candela the gray-index search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SearchCurve {
    /// Exponent.
    pub curve: GammaCurve,
    /// Candela at gray 255.
    pub max_candela: u16,
}

impl SearchCurve {
    /// Gamma 2.2 peaking at 350 cd.
    pub const G2P2_350: Self = Self {
        curve: GammaCurve::G2p2,
        max_candela: 350,
    };

    /// Gamma 2.2 peaking at 360 cd.
    pub const G2P2_360: Self = Self {
        curve: GammaCurve::G2p2,
        max_candela: 360,
    };

    /// Materialise the reference table.
    pub fn table(&self) -> CurveTable {
        CurveTable::reference(self.curve, self.max_candela)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for c in [GammaCurve::G1p9, GammaCurve::G2p15, GammaCurve::G2p2] {
            let t = CurveTable::coefficients(c);
            assert_eq!(t.get(0), 0);
            assert_eq!(t.get(255), 1 << 22);
        }
    }

    #[test]
    fn coefficients_are_monotonic() {
        let t = CurveTable::coefficients(GammaCurve::G2p2);
        assert!(t.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn steeper_curve_sits_below() {
        let a = CurveTable::coefficients(GammaCurve::G1p9);
        let b = CurveTable::coefficients(GammaCurve::G2p2);
        for level in 1..255u8 {
            assert!(a.get(level) > b.get(level));
        }
    }

    #[test]
    fn reference_peaks_at_max_candela() {
        let t = SearchCurve::G2P2_360.table();
        assert_eq!(t.get(255), 360 << 22);
        // (128/255)^2.2 * 350 ≈ 76.8 cd
        let mid = SearchCurve::G2P2_350.table().get(128) >> 22;
        assert!((75..=77).contains(&mid));
    }
}
