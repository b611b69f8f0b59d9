//! Candela → gray level search.

use crate::curve::CurveTable;
use crate::error::SmartDimError;

/// Gray level of `curve` closest to `candela`.
///
/// Walks adjacent pairs `(i, i + 1)`; at the first pair where the curve
/// passes `candela` the nearer side wins, ties going to the lower level.
/// An exact hit on either side of a pair returns that level.
pub fn search(candela: i64, curve: &CurveTable) -> Result<u8, SmartDimError> {
    let values = curve.as_slice();
    for (i, pair) in (0u8..=u8::MAX).zip(values.windows(2)) {
        let (Some(&lo), Some(&hi)) = (pair.first(), pair.get(1)) else {
            break;
        };
        let d1 = candela.saturating_sub(lo);
        let d2 = candela.saturating_sub(hi);
        let next = i.saturating_add(1);
        if d2 < 0 {
            return Ok(if d1.saturating_add(d2) <= 0 { i } else { next });
        }
        if d1 == 0 {
            return Ok(i);
        }
        if d2 == 0 {
            return Ok(next);
        }
    }
    Err(SmartDimError::SearchNotFound { candela })
}

/// [`search`], clamping a miss to gray 255.
///
/// Candela targets are never negative and every curve starts at 0, so the
/// only way to miss is to overshoot the curve's peak.
pub fn search_or_clamp(candela: i64, curve: &CurveTable) -> u8 {
    search(candela, curve).unwrap_or_else(|e| {
        warn!("gamma search miss ({}), clamping to 255", e);
        u8::MAX
    })
}
