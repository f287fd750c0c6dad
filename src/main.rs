//! Benchmark runner for the convolution kernels.

use clap::{Parser, ValueEnum};
use fastconv::kernels::conv_block::conv_block_avx2;
use fastconv::kernels::depthwise::depthwise_block_avx2;
use fastconv::kernels::winograd::{
    winograd_accum_avx2, winograd_input_transform_avx2, winograd_output_transform_avx2,
};
use fastconv::matrix::naive_depthwise::depthwise_naive;
use fastconv::matrix::naive_gemm::matmul_naive_ikj;
use fastconv::packing::conv_panel::{pack_a_panel, pack_b_panel, panel_len_a, panel_len_b};
use fastconv::packing::winograd::{
    accum_len, accum_offset, input_band_offset, input_band_step, input_bands_len, pack_weights,
};
use fastconv::tiling::{CONV_MR, CONV_NR, WINO_ATOM, WINO_IBLOCK, WINO_KBLOCK, WINO_STEP};
use fastconv::{Clamp, DepthwiseGeometry, DepthwiseParams, DepthwisePath};
use log::{info, warn};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Family {
    Gemm,
    Depthwise,
    Winograd,
    All,
}

/// Time the AVX2 kernels against their scalar baselines.
#[derive(Debug, Parser)]
#[command(name = "fastconv", version)]
struct Args {
    /// Timed runs per method (after one warmup)
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Problem sizes: matrix edge for gemm, image edge otherwise
    #[arg(long, value_delimiter = ',', default_values_t = vec![56, 112, 224])]
    sizes: Vec<usize>,

    /// Channels for depthwise and winograd
    #[arg(long, default_value_t = 32)]
    channels: usize,

    /// Kernel family to run
    #[arg(long, value_enum, default_value_t = Family::All)]
    kernel: Family,
}

type Row = (&'static str, (f64, f64));

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("=== Convolution Kernel Benchmark ===\n");

    let has_avx2 = is_x86_feature_detected!("avx2");
    let has_fma = is_x86_feature_detected!("fma");
    info!("CPU features: AVX2={}, FMA={}", has_avx2, has_fma);
    info!(
        "iterations={}, sizes={:?}, channels={}, kernel={:?}",
        args.iterations, args.sizes, args.channels, args.kernel
    );

    if !(has_avx2 && has_fma) {
        warn!("AVX2/FMA not available, nothing to benchmark");
        return ExitCode::FAILURE;
    }
    if args.iterations == 0 || args.channels == 0 || args.sizes.iter().any(|&s| s < 8) {
        warn!("iterations and channels must be positive and sizes at least 8");
        return ExitCode::FAILURE;
    }

    let run = |f: Family| args.kernel == Family::All || args.kernel == f;

    if run(Family::Gemm) {
        let all: Vec<_> = args
            .sizes
            .iter()
            .map(|&s| (s, bench_gemm(s, args.iterations)))
            .collect();
        print_summary_table("GEMM", &all);
    }
    if run(Family::Depthwise) {
        let all: Vec<_> = args
            .sizes
            .iter()
            .map(|&s| (s, bench_depthwise(s, args.channels, args.iterations)))
            .collect();
        print_summary_table("DEPTHWISE 3x3", &all);
    }
    if run(Family::Winograd) {
        let all: Vec<_> = args
            .sizes
            .iter()
            .map(|&s| (s, bench_winograd(s, args.channels, args.iterations)))
            .collect();
        print_summary_table("WINOGRAD 3x3", &all);
    }

    ExitCode::SUCCESS
}

/// Warm up once, then average `iterations` timed runs.
fn bench<F: FnMut()>(iterations: usize, flops: f64, mut f: F) -> (f64, f64) {
    f();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    (avg * 1000.0, flops / avg / 1e9)
}

fn print_rows(title: &str, results: &[Row]) {
    println!("{}", title);
    println!("{}", "-".repeat(50));
    let baseline_time = results[0].1.0;
    for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
        println!(
            "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
            i + 1,
            name,
            time_ms,
            gflops,
            baseline_time / time_ms
        );
    }
    println!();
}

fn bench_gemm(size: usize, iterations: usize) -> Vec<Row> {
    let m = size.div_ceil(CONV_MR) * CONV_MR;
    let n = size.div_ceil(CONV_NR) * CONV_NR;
    let k = size;
    let flops = 2.0 * (m * n * k) as f64;

    let a: Vec<f32> = (0..m * k).map(|i| (i % 100) as f32 * 0.01).collect();
    let b: Vec<f32> = (0..k * n).map(|i| (i % 100) as f32 * 0.01).collect();

    // Packing is part of layer setup, not of the timed loop.
    let mut a_pack = vec![0.0f32; (m / CONV_MR) * panel_len_a(k)];
    for (bi, dst) in a_pack.chunks_mut(panel_len_a(k)).enumerate() {
        pack_a_panel(&a[bi * CONV_MR * k..], k, CONV_MR, k, dst);
    }
    let mut b_pack = vec![0.0f32; (n / CONV_NR) * panel_len_b(k)];
    for (bj, dst) in b_pack.chunks_mut(panel_len_b(k)).enumerate() {
        pack_b_panel(&b[bj * CONV_NR..], n, CONV_NR, k, dst);
    }

    let mut c = vec![0.0f32; m * n];
    let results = vec![
        (
            "Scalar (i-k-j)",
            bench(iterations, flops, || {
                c.fill(0.0);
                matmul_naive_ikj(&a, &b, &mut c, m, n, k);
            }),
        ),
        (
            "4×24 AVX2",
            bench(iterations, flops, || {
                for (bi, ap) in a_pack.chunks(panel_len_a(k)).enumerate() {
                    for (bj, bp) in b_pack.chunks(panel_len_b(k)).enumerate() {
                        let cp = c[bi * CONV_MR * n + bj * CONV_NR..].as_mut_ptr();
                        unsafe { conv_block_avx2(k, ap.as_ptr(), bp.as_ptr(), cp, n, true) };
                    }
                }
            }),
        ),
    ];
    print_rows(&format!("GEMM {}×{}×{}", m, n, k), &results);
    results
}

fn bench_depthwise(size: usize, channels: usize, iterations: usize) -> Vec<Row> {
    let params = DepthwiseParams::new(size, size, 3, 3).same_padding();
    let Ok(geom) = DepthwiseGeometry::new(params) else {
        return Vec::new();
    };
    let plane_in = geom.input_len();
    let plane_out = geom.output_len();
    let flops = 2.0 * (plane_out * geom.ksize() * channels) as f64;

    let input: Vec<f32> = (0..plane_in * channels).map(|i| (i % 17) as f32 * 0.1).collect();
    let weights: Vec<f32> = (0..9 * channels).map(|i| (i % 5) as f32 * 0.2 - 0.4).collect();
    let act = Some(Clamp::relu6());
    let mut output = vec![0.0f32; plane_out * channels];

    let mut timed = |path: DepthwisePath| {
        let g = match geom.clone().with_path(path) {
            Ok(g) => g,
            Err(e) => {
                warn!("{}", e);
                return (f64::NAN, f64::NAN);
            }
        };
        bench(iterations, flops, || {
            for c in 0..channels {
                unsafe {
                    depthwise_block_avx2(
                        &g,
                        &input[c * plane_in..(c + 1) * plane_in],
                        &mut output[c * plane_out..(c + 1) * plane_out],
                        &weights[c * 9..(c + 1) * 9],
                        0.1,
                        act,
                    );
                }
            }
        })
    };
    let scalar = timed(DepthwisePath::Scalar);
    let generic = timed(DepthwisePath::Generic);
    let conv3x3 = timed(DepthwisePath::Conv3x3);
    let unit = timed(geom.path());

    let naive = bench(iterations, flops, || {
        for c in 0..channels {
            let out = depthwise_naive(
                &params,
                &input[c * plane_in..(c + 1) * plane_in],
                &weights[c * 9..(c + 1) * 9],
                0.1,
                act,
            );
            std::hint::black_box(out);
        }
    });

    let results = vec![
        ("Naive", naive),
        ("Scalar path", scalar),
        ("Generic AVX2", generic),
        ("3×3 AVX2", conv3x3),
        ("3×3 unit AVX2", unit),
    ];
    print_rows(&format!("Depthwise {}×{}×{}", size, size, channels), &results);
    results
}

fn bench_winograd(size: usize, channels: usize, iterations: usize) -> Vec<Row> {
    let tiles = (size - 2) / WINO_STEP;
    let out_edge = tiles * WINO_STEP;
    let cg = channels;
    let flops = 2.0 * (out_edge * out_edge * 9 * cg * WINO_KBLOCK) as f64;

    let input: Vec<f32> = (0..size * size * cg).map(|i| (i % 13) as f32 * 0.1).collect();
    let kernels: Vec<f32> = (0..WINO_KBLOCK * cg * 9).map(|i| (i % 7) as f32 * 0.1 - 0.3).collect();
    let wbands = pack_weights(&kernels, WINO_KBLOCK, cg);
    let mut output = vec![0.0f32; WINO_KBLOCK * out_edge * out_edge];

    let direct = bench(iterations, flops, || {
        for k in 0..WINO_KBLOCK {
            for y in 0..out_edge {
                for x in 0..out_edge {
                    let mut s = 0.0f32;
                    for c in 0..cg {
                        let plane = &input[c * size * size..];
                        let g = &kernels[(k * cg + c) * 9..];
                        for dy in 0..3 {
                            for dx in 0..3 {
                                s += plane[(y + dy) * size + x + dx] * g[dy * 3 + dx];
                            }
                        }
                    }
                    output[(k * out_edge + y) * out_edge + x] = s;
                }
            }
        }
    });

    let mut inbands = vec![0.0f32; input_bands_len(cg)];
    let mut accum = vec![0.0f32; accum_len()];
    let positions: Vec<(usize, usize)> = (0..tiles)
        .flat_map(|ty| (0..tiles).map(move |tx| (ty, tx)))
        .collect();

    let wino = bench(iterations, flops, || {
        for block in positions.chunks(WINO_IBLOCK) {
            for c in 0..cg {
                for (i, &(ty, tx)) in block.iter().enumerate() {
                    let src = &input[c * size * size + ty * WINO_STEP * size + tx * WINO_STEP..];
                    let dst = &mut inbands[input_band_offset(c, i)..];
                    unsafe {
                        winograd_input_transform_avx2(
                            src.as_ptr(),
                            size,
                            dst.as_mut_ptr(),
                            input_band_step(cg),
                        );
                    }
                }
            }
            unsafe {
                winograd_accum_avx2(inbands.as_ptr(), wbands.as_ptr(), accum.as_mut_ptr(), cg, block.len());
            }
            for k in 0..WINO_KBLOCK {
                for (i, &(ty, tx)) in block.iter().enumerate() {
                    let dst = &mut output[(k * out_edge + ty * WINO_STEP) * out_edge + tx * WINO_STEP..];
                    unsafe {
                        winograd_output_transform_avx2(
                            accum[accum_offset(k, i)..].as_ptr(),
                            WINO_ATOM,
                            None,
                            dst.as_mut_ptr(),
                            out_edge,
                            0.0,
                            None,
                        );
                    }
                }
            }
        }
    });

    let results = vec![("Direct", direct), ("Winograd AVX2", wino)];
    print_rows(&format!("Winograd {}×{}×{} -> 4", size, size, cg), &results);
    results
}

fn print_summary_table(family: &str, all_results: &[(usize, Vec<Row>)]) {
    if all_results.is_empty() || all_results[0].1.is_empty() {
        return;
    }
    println!("\n{}", "=".repeat(90));
    println!("SUMMARY: {}", family);
    println!("{}", "=".repeat(90));

    print!("\n{:<18}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", size);
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    let num_methods = all_results[0].1.len();
    for method_idx in 0..num_methods {
        let method_name = all_results[0].1[method_idx].0;
        print!("{:<18}", method_name);

        let mut speedups = Vec::new();
        for (_, results) in all_results {
            let (time_ms, gflops) = results[method_idx].1;
            print!(" {:>11.2} GF", gflops);
            speedups.push(results[0].1.0 / time_ms);
        }
        let avg_speedup: f64 = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!("Speedup relative to the first row. Higher is better.\n");
}
