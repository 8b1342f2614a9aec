//! Error types for the codec

use crate::morton::Axis;

/// Codec errors
///
/// Only the checked entry points (`try_encode`, `try_decode`, key parsing)
/// produce these. The unchecked functions are total and never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("Coordinate out of range on {axis} axis: {value} (expected -1.0..=1.0)")]
    CoordinateOutOfRange { axis: Axis, value: f64 },

    #[error("Morton key out of range: {key:#x} has bit 63 set")]
    KeyOutOfRange { key: u64 },

    #[error("Invalid Morton key literal: {literal:?}")]
    InvalidKeyLiteral { literal: String },
}

pub type Result<T> = std::result::Result<T, CodecError>;
