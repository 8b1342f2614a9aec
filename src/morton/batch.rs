/// Parallel batch encoding/decoding
///
/// Uses rayon's global pool. Output order always matches input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::morton::vector::{MortonKey, NormalizedVector3};

pub fn encode_batch(vectors: &[NormalizedVector3]) -> Vec<MortonKey> {
    log::trace!("Encoding batch of {} vectors", vectors.len());
    vectors.par_iter().map(NormalizedVector3::encode).collect()
}

/// Checked batch encode. On failure returns the error of the lowest-index
/// invalid vector.
pub fn try_encode_batch(vectors: &[NormalizedVector3]) -> Result<Vec<MortonKey>> {
    log::trace!("Encoding checked batch of {} vectors", vectors.len());
    let results: Vec<Result<MortonKey>> = vectors.par_iter().map(NormalizedVector3::try_encode).collect();
    results.into_iter().collect()
}

pub fn decode_batch(keys: &[MortonKey]) -> Vec<NormalizedVector3> {
    log::trace!("Decoding batch of {} keys", keys.len());
    keys.par_iter().map(|key| key.decode()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::morton::Axis;

    fn sample_vectors(n: usize) -> Vec<NormalizedVector3> {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                NormalizedVector3::new(2.0 * t - 1.0, 1.0 - 2.0 * t, (t * 7.0).fract() * 2.0 - 1.0)
            })
            .collect()
    }

    #[test]
    fn test_batch_matches_elementwise() {
        let vectors = sample_vectors(10_000);
        let keys = encode_batch(&vectors);
        assert_eq!(keys.len(), vectors.len());
        for (v, k) in vectors.iter().zip(&keys) {
            assert_eq!(v.encode(), *k);
        }

        let decoded = decode_batch(&keys);
        for (k, d) in keys.iter().zip(&decoded) {
            assert_eq!(k.decode(), *d);
        }
    }

    #[test]
    fn test_try_batch_reports_first_error() {
        let mut vectors = sample_vectors(1_000);
        vectors[700].x = 3.0;
        vectors[300].z = -2.0;
        assert_eq!(
            try_encode_batch(&vectors),
            Err(CodecError::CoordinateOutOfRange { axis: Axis::Z, value: -2.0 })
        );
    }

    #[test]
    fn test_empty_batch() {
        assert!(encode_batch(&[]).is_empty());
        assert!(decode_batch(&[]).is_empty());
        assert_eq!(try_encode_batch(&[]), Ok(Vec::new()));
    }
}
