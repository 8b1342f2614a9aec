//! Configured codec front-end
//!
//! Wraps the free functions in [`crate::morton`] and picks the checked or
//! unchecked path according to [`ValidationPolicy`].

use crate::config::{CodecConfig, ValidationPolicy};
use crate::error::Result;
use crate::morton::{decode, try_decode, MortonKey, NormalizedVector3};

#[derive(Debug, Clone, Default)]
pub struct MortonCodec {
    config: CodecConfig,
}

impl MortonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.config.validation
    }

    pub fn encode_vector(&self, vector: NormalizedVector3) -> Result<MortonKey> {
        match self.config.validation {
            ValidationPolicy::Clamp => {
                if !vector.is_normalized() {
                    log::debug!("Clamping out-of-range vector {}", vector);
                }
                Ok(vector.encode())
            }
            ValidationPolicy::Reject => vector.try_encode().map_err(|e| {
                log::warn!("Rejected vector {}: {}", vector, e);
                e
            }),
        }
    }

    /// Decodes a raw key. Under `Clamp` bit 63 is dropped; under `Reject`
    /// it is an error.
    pub fn decode_key(&self, raw: u64) -> Result<NormalizedVector3> {
        match self.config.validation {
            ValidationPolicy::Clamp => Ok(decode(raw).into()),
            ValidationPolicy::Reject => try_decode(raw).map(Into::into).map_err(|e| {
                log::warn!("Rejected key {:#x}: {}", raw, e);
                e
            }),
        }
    }
}
