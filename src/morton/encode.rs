/// Morton encoding for normalized 3D vectors
///
/// Each component in [-1.0, 1.0] is quantized to a 21-bit integer, split into
/// three chunks, and the nine chunk lookups are OR-ed into one 63-bit key.

use crate::constants::{layout, quantization};
use crate::error::{CodecError, Result};
use crate::morton::tables::{lookup_tables, Axis};

/// Quantizes a normalized coordinate to 21 bits
///
/// `floor(2^20 * coord + 2^20 + 0.5)` saturated into `0..=2^21 - 1`.
/// 1.0 lands on 2^21 and is clamped to 2^21 - 1. NaN quantizes to 0.
#[inline(always)]
pub fn quantize(coord: f64) -> u32 {
    let scaled = (quantization::SCALE * coord + quantization::SCALE + quantization::ROUNDING_BIAS).floor();
    // Float -> int casts saturate: negatives and NaN become 0
    (scaled as u32).min(layout::MAX_QUANTIZED)
}

/// Interleaves three quantized coordinates. Bits above 21 are ignored.
#[inline(always)]
pub fn encode_quantized(x: u32, y: u32, z: u32) -> u64 {
    let tables = lookup_tables();
    tables.x.spread(x) | tables.y.spread(y) | tables.z.spread(z)
}

/// Encodes a normalized vector into a 63-bit Morton key
///
/// Inputs are expected in [-1.0, 1.0] and are not checked; anything outside
/// is clamped to the nearest edge of the grid. Use [`try_encode`] to reject
/// them instead.
#[inline(always)]
pub fn encode(x: f64, y: f64, z: f64) -> u64 {
    encode_quantized(quantize(x), quantize(y), quantize(z))
}

/// Encodes a normalized vector, rejecting non-finite or out-of-range components
pub fn try_encode(x: f64, y: f64, z: f64) -> Result<u64> {
    check_coordinate(Axis::X, x)?;
    check_coordinate(Axis::Y, y)?;
    check_coordinate(Axis::Z, z)?;
    Ok(encode(x, y, z))
}

#[inline]
fn check_coordinate(axis: Axis, value: f64) -> Result<()> {
    // NaN fails the range test as well
    if (quantization::MIN_COORD..=quantization::MAX_COORD).contains(&value) {
        Ok(())
    } else {
        Err(CodecError::CoordinateOutOfRange { axis, value })
    }
}
