/// Morton encoding (Z-order curve) for normalized 3D vectors
///
/// Maps a vector with components in [-1.0, 1.0] to a single 63-bit key and
/// back. Each axis is quantized to 21 bits and the bits are interleaved as
/// (z, y, x) triples, so spatially close vectors tend to get numerically
/// close keys.

pub mod tables;
pub mod encode;
pub mod decode;
pub mod vector;
pub mod batch;

pub use tables::{lookup_tables, spread_chunk, Axis, AxisTables, LookupTables};
pub use encode::{encode, encode_quantized, quantize, try_encode};
pub use decode::{decode, decode_quantized, dequantize, try_decode};
pub use vector::{parse_key_literal, MortonKey, NormalizedVector3};
pub use batch::{decode_batch, encode_batch, try_encode_batch};

// Key layout, MSB first:
//
//   bit 62 .. 60 | 59 .. 57 | ... | 2 1 0
//      z  y  x   |  z  y  x |     | z y x
//
// Bit 3k holds bit k of the quantized x, 3k+1 of y, 3k+2 of z. Bit 63 is
// never set by encoding.
//
// Encoding splits each 21-bit coordinate into a low byte, a middle byte and
// the top 5 bits. Each chunk has its own pre-shifted forward table, so a key
// is nine lookups OR-ed together. Decoding masks the key with the matching
// nine masks and looks each fragment up in the inverse tables.
