//! Simple benchmark example showing the performance benefits of parallel processing.
//!
//! This example times the two-pass mean/std reduction against a sequential
//! reference implementation on arrays of increasing size.

use axistats::prelude::*;
use ndarray::ArrayD;
use std::time::Instant;

fn sequential_std_mean(data: &ArrayD<f64>) -> (f64, f64) {
    let n = data.len() as f64;
    let mean: f64 = data.iter().sum::<f64>() / n;
    let sum_sq: f64 = data.iter().map(|v| (v - mean) * (v - mean)).sum();
    ((sum_sq / (n - 1.0)).sqrt(), mean)
}

fn main() {
    println!("🔬 axistats Parallel Reduction Benchmark");
    println!("==========================================\n");

    let available_threads = rayon::current_num_threads();
    println!(
        "System has {} logical CPU cores available\n",
        available_threads
    );

    let row_counts = vec![1_000, 10_000, 100_000];
    let row_len = 256;
    let options = StdMeanOptions::new_default();

    for rows in row_counts {
        println!("📊 Testing with {} rows of {} elements:", rows, row_len);
        println!("-------------------------------------------");

        let values: Vec<f64> = (0..rows * row_len).map(|i| (i as f64).sin()).collect();
        let data = ArrayD::from_shape_vec(vec![rows, row_len], values)
            .expect("shape matches generated data");

        println!("🐌 Sequential processing (full flatten):");
        let start = Instant::now();
        let (seq_std, seq_mean) = sequential_std_mean(&data);
        let seq_time = start.elapsed().as_secs_f64();
        println!("   Mean: {:.6}, Std: {:.6}", seq_mean, seq_std);
        println!("   ⏱️  Duration: {:.3} seconds\n", seq_time);

        println!("⚡ Parallel processing ({} threads):", available_threads);
        let start = Instant::now();
        let result = data
            .std_mean_over_axes(&[1], &options)
            .expect("valid axes for generated data");
        let par_time = start.elapsed().as_secs_f64();
        println!(
            "   Per-row results: {} means, {} stds",
            result.mean.len(),
            result.std.len()
        );
        println!("   ⏱️  Duration: {:.3} seconds", par_time);

        let speedup = seq_time / par_time.max(f64::EPSILON);
        println!("   🚀 Relative rate: {:.2}x\n", speedup);
    }

    println!("✅ Benchmark complete");
}
