/// Morton decoding back to normalized 3D vectors
///
/// For each axis the key is masked once per chunk level, each fragment is
/// looked up in that level's inverse table, and the three chunks are OR-ed
/// back into the 21-bit quantized coordinate.

use crate::constants::{layout, quantization};
use crate::error::{CodecError, Result};
use crate::morton::tables::lookup_tables;

/// Maps a quantized coordinate back to [-1.0, 1.0)
#[inline(always)]
pub fn dequantize(quantized: u32) -> f64 {
    quantized as f64 * quantization::INV_SCALE - 1.0
}

/// Splits a key into its three 21-bit quantized coordinates.
/// Bit 63 is ignored.
#[inline(always)]
pub fn decode_quantized(key: u64) -> (u32, u32, u32) {
    let key = key & layout::KEY_MASK;
    let tables = lookup_tables();
    (tables.x.compact(key), tables.y.compact(key), tables.z.compact(key))
}

/// Decodes a 63-bit Morton key into a normalized vector
///
/// Total over every `u64`: bit 63 is ignored and every other bit pattern
/// maps to some grid point. Use [`try_decode`] to reject keys with bit 63 set.
#[inline(always)]
pub fn decode(key: u64) -> (f64, f64, f64) {
    let (x, y, z) = decode_quantized(key);
    (dequantize(x), dequantize(y), dequantize(z))
}

/// Decodes a key, rejecting any key that uses bit 63
pub fn try_decode(key: u64) -> Result<(f64, f64, f64)> {
    if key & !layout::KEY_MASK != 0 {
        return Err(CodecError::KeyOutOfRange { key });
    }
    Ok(decode(key))
}
