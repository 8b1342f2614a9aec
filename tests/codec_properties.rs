// Property tests for the 63-bit Morton codec
//
// Round trips, bit layout, boundaries, table determinism, concurrent use and
// spatial locality.

use morton63::constants::layout::KEY_MASK;
use morton63::constants::quantization::STEP;
use morton63::morton::{decode, decode_quantized, encode, lookup_tables, LookupTables};
use morton63::{decode_batch, encode_batch, MortonKey, NormalizedVector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HALF_STEP: f64 = STEP / 2.0;

fn grid(n: usize) -> Vec<f64> {
    // [-1 + eps, 1 - eps]
    let eps = STEP;
    (0..n)
        .map(|i| -1.0 + eps + (2.0 - 2.0 * eps) * i as f64 / (n - 1) as f64)
        .collect()
}

#[test]
fn round_trip_on_grid() {
    let axis = grid(48);
    for &x in &axis {
        for &y in &axis {
            for &z in &axis {
                let (dx, dy, dz) = decode(encode(x, y, z));
                assert!((x - dx).abs() <= HALF_STEP + 1e-12, "x {} -> {}", x, dx);
                assert!((y - dy).abs() <= HALF_STEP + 1e-12, "y {} -> {}", y, dy);
                assert!((z - dz).abs() <= HALF_STEP + 1e-12, "z {} -> {}", z, dz);
            }
        }
    }
}

#[test]
fn round_trip_random_vectors() {
    let mut rng = StdRng::seed_from_u64(0x6d6f_7274_6f6e);
    for _ in 0..100_000 {
        let v = NormalizedVector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let back = v.encode().decode();
        assert!(v.max_axis_distance(&back) <= STEP, "{} -> {}", v, back);
    }
}

#[test]
fn grid_points_are_fixed_points() {
    // Every decoded key re-encodes to itself
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100_000 {
        let key = rng.gen::<u64>() & KEY_MASK;
        let (x, y, z) = decode(key);
        assert_eq!(encode(x, y, z), key, "key {:#x}", key);
    }
}

#[test]
fn minimal_steps_set_single_bits() {
    assert_eq!(encode(-1.0 + STEP, -1.0, -1.0), 1);
    assert_eq!(encode(-1.0, -1.0 + STEP, -1.0), 1 << 1);
    assert_eq!(encode(-1.0, -1.0, -1.0 + STEP), 1 << 2);
}

#[test]
fn boundary_values() {
    assert_eq!(encode(-1.0, -1.0, -1.0), 0);
    let top = 1.0 - STEP;
    assert_eq!(encode(top, top, top), (1u64 << 63) - 1);
    assert_eq!(decode(0), (-1.0, -1.0, -1.0));
}

#[test]
fn exact_one_is_clamped_to_last_grid_point() {
    let top = 1.0 - STEP;
    assert_eq!(encode(1.0, 0.0, -1.0), encode(top, 0.0, -1.0));
    assert_eq!(decode(encode(1.0, 1.0, 1.0)), (top, top, top));
}

#[test]
fn keys_never_use_bit_63() {
    let mut rng = StdRng::seed_from_u64(63);
    for _ in 0..10_000 {
        let key = encode(rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0));
        assert_eq!(key & !KEY_MASK, 0);
    }
}

#[test]
fn decode_is_total() {
    for key in [0u64, 1, KEY_MASK, 1 << 63, u64::MAX, 0x5555_5555_5555_5555, 0xAAAA_AAAA_AAAA_AAAA] {
        let (x, y, z) = decode(key);
        for c in [x, y, z] {
            assert!((-1.0..1.0).contains(&c), "key {:#x} decoded to {}", key, c);
        }
    }
}

#[test]
fn independent_table_builds_are_identical() {
    let first = LookupTables::build();
    let second = LookupTables::build();
    assert_eq!(first, second);
    assert_eq!(&first, lookup_tables());
}

#[test]
fn concurrent_use_matches_sequential() {
    let vectors: Vec<NormalizedVector3> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..20_000)
            .map(|_| NormalizedVector3::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)))
            .collect()
    };
    let expected: Vec<MortonKey> = vectors.iter().map(NormalizedVector3::encode).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| vectors.iter().map(NormalizedVector3::encode).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    assert_eq!(encode_batch(&vectors), expected);
    let decoded = decode_batch(&expected);
    for (key, v) in expected.iter().zip(&decoded) {
        assert_eq!(key.decode(), *v);
    }
}

#[test]
fn nearby_vectors_get_closer_keys_on_average() {
    let mut rng = StdRng::seed_from_u64(1234);
    let samples = 5_000;
    let mut near_total = 0.0f64;
    let mut far_total = 0.0f64;

    for _ in 0..samples {
        let a = NormalizedVector3::new(rng.gen_range(-0.99..0.99), rng.gen_range(-0.99..0.99), rng.gen_range(-0.99..0.99));
        let near = NormalizedVector3::new(
            a.x + rng.gen_range(-1e-3..1e-3),
            a.y + rng.gen_range(-1e-3..1e-3),
            a.z + rng.gen_range(-1e-3..1e-3),
        );
        let far = NormalizedVector3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));

        let key = a.encode().raw() as f64;
        near_total += (key - near.encode().raw() as f64).abs();
        far_total += (key - far.encode().raw() as f64).abs();
    }

    let near_mean = near_total / samples as f64;
    let far_mean = far_total / samples as f64;
    assert!(near_mean * 4.0 < far_mean, "near {:e} far {:e}", near_mean, far_mean);
}

#[test]
fn quantized_coordinates_follow_bit_layout() {
    let (x, y, z) = decode_quantized(0b111_000_010_001);
    // group 0 = x, group 1 = y, group 3 = x|y|z
    assert_eq!(x, 0b1001);
    assert_eq!(y, 0b1010);
    assert_eq!(z, 0b1000);
}
