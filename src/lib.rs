//! morton63 - 63-bit Morton keys for normalized 3D vectors
//!
//! Maps a vector with components in [-1.0, 1.0] to a single 63-bit Z-order
//! key and back. The keys sort spatially close vectors close together, which
//! makes them usable as index keys for octrees, BVH builders and spatial
//! databases.
//!
//! ```
//! let key = morton63::encode(0.25, -0.5, 0.75);
//! let (x, y, z) = morton63::decode(key);
//! assert!((x - 0.25).abs() < 1e-6 && (y + 0.5).abs() < 1e-6 && (z - 0.75).abs() < 1e-6);
//! ```

pub mod constants;
pub mod error;
pub mod config;
pub mod codec;
pub mod morton;

pub use codec::MortonCodec;
pub use config::{CodecConfig, ConfigError, ValidationPolicy};
pub use error::{CodecError, Result};
pub use morton::{
    decode, decode_batch, encode, encode_batch, try_decode, try_encode, try_encode_batch, Axis,
    LookupTables, MortonKey, NormalizedVector3,
};
