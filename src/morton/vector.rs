/// Value types carried across the codec boundary

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{layout, quantization};
use crate::error::{CodecError, Result};
use crate::morton::decode::decode;
use crate::morton::encode::{encode, try_encode};

/// A 3D vector whose components are expected in [-1.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedVector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NormalizedVector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when every component lies in [-1.0, 1.0]
    pub fn is_normalized(&self) -> bool {
        let range = quantization::MIN_COORD..=quantization::MAX_COORD;
        range.contains(&self.x) && range.contains(&self.y) && range.contains(&self.z)
    }

    #[inline]
    pub fn encode(&self) -> MortonKey {
        MortonKey(encode(self.x, self.y, self.z))
    }

    pub fn try_encode(&self) -> Result<MortonKey> {
        try_encode(self.x, self.y, self.z).map(MortonKey)
    }

    /// Largest per-axis difference to `other`
    pub fn max_axis_distance(&self, other: &Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl From<(f64, f64, f64)> for NormalizedVector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<NormalizedVector3> for (f64, f64, f64) {
    fn from(v: NormalizedVector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<DVec3> for NormalizedVector3 {
    fn from(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<NormalizedVector3> for DVec3 {
    fn from(v: NormalizedVector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for NormalizedVector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A 63-bit Morton key. Bit 63 is always clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct MortonKey(u64);

impl MortonKey {
    pub const MIN: MortonKey = MortonKey(0);
    pub const MAX: MortonKey = MortonKey(layout::KEY_MASK);

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn decode(self) -> NormalizedVector3 {
        decode(self.0).into()
    }
}

impl TryFrom<u64> for MortonKey {
    type Error = CodecError;

    fn try_from(raw: u64) -> Result<Self> {
        if raw & !layout::KEY_MASK != 0 {
            return Err(CodecError::KeyOutOfRange { key: raw });
        }
        Ok(MortonKey(raw))
    }
}

impl From<MortonKey> for u64 {
    fn from(key: MortonKey) -> Self {
        key.0
    }
}

impl fmt::Display for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl FromStr for MortonKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        MortonKey::try_from(parse_key_literal(s)?)
    }
}

/// Parses a decimal or `0x`-prefixed hex key literal into a raw `u64`
///
/// Bit 63 is not checked here; pass the result to [`MortonKey::try_from`] or
/// [`try_decode`](crate::morton::try_decode) when it must be rejected.
pub fn parse_key_literal(literal: &str) -> Result<u64> {
    let trimmed = literal.trim();
    let digits = trimmed.replace('_', "");
    let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    };
    parsed.map_err(|_| CodecError::InvalidKeyLiteral {
        literal: literal.to_string(),
    })
}
