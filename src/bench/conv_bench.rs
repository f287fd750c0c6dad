//! Criterion benchmarks for the convolution kernels.
//!
//! Throughput is reported in FLOPs (2 per multiply-add).

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;

use fastconv::kernels::conv_block::conv_block_avx2;
use fastconv::kernels::depthwise::depthwise_block_avx2;
use fastconv::kernels::winograd::{
    winograd_accum_avx2, winograd_input_transform_avx2, winograd_output_transform_avx2,
};
use fastconv::packing::conv_panel::{pack_a_panel, pack_b_panel, panel_len_a, panel_len_b};
use fastconv::packing::winograd::{accum_len, input_bands_len, pack_weights};
use fastconv::tiling::{CONV_MR, CONV_NR, WINO_ATOM, WINO_KBLOCK};
use fastconv::{Clamp, DepthwiseGeometry, DepthwiseParams, DepthwisePath, avx2_fma_available};

const DEPTH: &[usize] = &[64, 256, 1024];
const IMAGES: &[usize] = &[28, 56, 112];

fn bench_conv_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("conv_block");
    group.warm_up_time(Duration::from_millis(500));

    for &np in DEPTH {
        let a: Vec<f32> = (0..CONV_MR * np).map(|i| (i % 11) as f32 * 0.1).collect();
        let b: Vec<f32> = (0..np * CONV_NR).map(|i| (i % 7) as f32 * 0.1).collect();
        let mut a_pack = vec![0.0f32; panel_len_a(np)];
        let mut b_pack = vec![0.0f32; panel_len_b(np)];
        pack_a_panel(&a, np, CONV_MR, np, &mut a_pack);
        pack_b_panel(&b, CONV_NR, CONV_NR, np, &mut b_pack);
        let mut out = vec![0.0f32; CONV_MR * CONV_NR];

        group.throughput(Throughput::Elements((2 * CONV_MR * CONV_NR * np) as u64));
        group.bench_with_input(BenchmarkId::new("4x24", np), &np, |bench, &np| {
            bench.iter(|| unsafe {
                conv_block_avx2(
                    black_box(np),
                    a_pack.as_ptr(),
                    b_pack.as_ptr(),
                    out.as_mut_ptr(),
                    CONV_NR,
                    false,
                );
            });
        });
    }
    group.finish();
}

fn bench_depthwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("depthwise_3x3");
    group.warm_up_time(Duration::from_millis(500));

    for &edge in IMAGES {
        for stride in [1, 2] {
            let params = DepthwiseParams::new(edge, edge, 3, 3)
                .stride(stride, stride)
                .padding(1, 1, 1, 1);
            let Ok(geom) = DepthwiseGeometry::new(params) else {
                continue;
            };
            let input: Vec<f32> = (0..geom.input_len()).map(|i| (i % 13) as f32 * 0.1).collect();
            let weights = [0.1f32, 0.2, 0.1, 0.2, 0.4, 0.2, 0.1, 0.2, 0.1];
            let mut output = vec![0.0f32; geom.output_len()];

            group.throughput(Throughput::Elements((2 * 9 * geom.output_len()) as u64));
            let mut paths = vec![DepthwisePath::Scalar];
            if geom.path() != DepthwisePath::Scalar {
                paths.push(geom.path());
            }
            for path in paths {
                let Ok(g) = geom.clone().with_path(path) else {
                    continue;
                };
                let id = BenchmarkId::new(format!("{:?}/s{}", path, stride), edge);
                group.bench_function(id, |bench| {
                    bench.iter(|| unsafe {
                        depthwise_block_avx2(
                            &g,
                            black_box(&input),
                            &mut output,
                            &weights,
                            0.0,
                            Some(Clamp::relu6()),
                        );
                    });
                });
            }
        }
    }
    group.finish();
}

fn bench_winograd(c: &mut Criterion) {
    let mut group = c.benchmark_group("winograd");
    group.warm_up_time(Duration::from_millis(500));

    let tile: Vec<f32> = (0..64).map(|i| (i % 9) as f32 * 0.25).collect();
    let mut coeffs = vec![0.0f32; 64];
    group.bench_function("input_transform", |bench| {
        bench.iter(|| unsafe {
            winograd_input_transform_avx2(black_box(tile.as_ptr()), 8, coeffs.as_mut_ptr(), 8);
        });
    });

    let residual = vec![0.5f32; 6 * 6];
    let mut spatial = vec![0.0f32; 6 * 6];
    group.bench_function("output_transform", |bench| {
        bench.iter(|| unsafe {
            winograd_output_transform_avx2(
                black_box(tile.as_ptr()),
                WINO_ATOM,
                Some((residual.as_ptr(), 6)),
                spatial.as_mut_ptr(),
                6,
                0.1,
                Some(Clamp::relu()),
            );
        });
    });

    for cg in [16, 64, 256] {
        let inbands: Vec<f32> = (0..input_bands_len(cg)).map(|i| (i % 5) as f32 * 0.1).collect();
        let kernels: Vec<f32> = (0..WINO_KBLOCK * cg * 9).map(|i| (i % 3) as f32 * 0.1).collect();
        let wbands = pack_weights(&kernels, WINO_KBLOCK, cg);
        let mut accum = vec![0.0f32; accum_len()];

        for iblock in [6, 3] {
            group.throughput(Throughput::Elements((2 * 64 * WINO_KBLOCK * iblock * cg) as u64));
            let id = BenchmarkId::new(format!("accum/iblock{}", iblock), cg);
            group.bench_function(id, |bench| {
                bench.iter(|| unsafe {
                    winograd_accum_avx2(
                        inbands.as_ptr(),
                        wbands.as_ptr(),
                        accum.as_mut_ptr(),
                        black_box(cg),
                        iblock,
                    );
                });
            });
        }
    }
    group.finish();
}

fn benches(c: &mut Criterion) {
    if !avx2_fma_available() {
        eprintln!("Skipping - AVX2/FMA not available");
        return;
    }
    bench_conv_block(c);
    bench_depthwise(c);
    bench_winograd(c);
}

criterion_group!(conv, benches);
criterion_main!(conv);
