/// Sanity check for the Morton lookup tables and codec throughput

use std::time::Instant;

use anyhow::{ensure, Result};
use morton63::constants::quantization::STEP;
use morton63::morton::{decode, encode, LookupTables};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Morton Codec Check");
    println!("==================\n");

    check_tables()?;
    check_round_trip()?;
    measure_throughput();

    Ok(())
}

fn check_tables() -> Result<()> {
    println!("Building lookup tables twice...");
    let start = Instant::now();
    let first = LookupTables::build();
    let second = LookupTables::build();
    let elapsed = start.elapsed();

    ensure!(first == second, "independent table builds differ");
    println!(
        "{} tables, {} forward / {} inverse entries, built twice in {:?}\n",
        LookupTables::table_count(),
        first.forward_entries(),
        first.inverse_entries(),
        elapsed
    );
    Ok(())
}

fn check_round_trip() -> Result<()> {
    println!("Checking round trips on a 101^3 grid...");

    const N: usize = 101;
    let mut worst = 0.0f64;
    for i in 0..N {
        for j in 0..N {
            for k in 0..N {
                let coord = |n: usize| -1.0 + 2.0 * n as f64 / (N - 1) as f64 * (1.0 - STEP);
                let (x, y, z) = (coord(i), coord(j), coord(k));
                let (dx, dy, dz) = decode(encode(x, y, z));
                worst = worst.max((x - dx).abs()).max((y - dy).abs()).max((z - dz).abs());
            }
        }
    }

    ensure!(worst <= STEP, "round trip error {} exceeds one step", worst);
    println!("Worst axis error: {:e} (step {:e})\n", worst, STEP);
    Ok(())
}

fn measure_throughput() {
    const ITERATIONS: u32 = 10_000_000;

    println!("Measuring throughput...");

    let start = Instant::now();
    let mut sum = 0u64;
    for i in 0..ITERATIONS {
        let t = i as f64 / ITERATIONS as f64;
        sum = sum.wrapping_add(encode(2.0 * t - 1.0, 1.0 - 2.0 * t, t));
    }
    let encode_time = start.elapsed();

    let start = Instant::now();
    let mut acc = 0.0f64;
    for i in 0..ITERATIONS {
        let (x, y, z) = decode((i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 1);
        acc += x + y + z;
    }
    let decode_time = start.elapsed();

    println!("Encoding {} vectors: {:?}", ITERATIONS, encode_time);
    println!("  Rate: {:.2} million/sec", ITERATIONS as f64 / encode_time.as_secs_f64() / 1_000_000.0);
    println!("Decoding {} keys: {:?}", ITERATIONS, decode_time);
    println!("  Rate: {:.2} million/sec", ITERATIONS as f64 / decode_time.as_secs_f64() / 1_000_000.0);

    // Keep the loops from being optimized away
    println!("\n(Checksums: {} {})", sum, acc);
}
