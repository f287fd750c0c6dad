use fastconv::activation::apply_opt;
use fastconv::kernels::conv_block::conv_block_avx2;
use fastconv::kernels::depthwise::depthwise_block_avx2;
use fastconv::kernels::winograd::{
    winograd_accum_avx2, winograd_input_transform_avx2, winograd_output_transform_avx2,
};
use fastconv::matrix::naive_depthwise::depthwise_naive;
use fastconv::packing::conv_panel::{pack_a_panel, pack_b_panel, panel_len_a, panel_len_b};
use fastconv::packing::winograd::{
    accum_len, accum_offset, input_band_offset, input_band_step, input_bands_len, pack_weights,
};
use fastconv::tiling::{CONV_MR, CONV_NR, WINO_ATOM, WINO_IBLOCK, WINO_KBLOCK, WINO_STEP};
use fastconv::{
    Clamp, DepthwiseGeometry, DepthwiseParams, DepthwisePath, Error, avx2_fma_available,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

macro_rules! require_avx2 {
    () => {
        if !avx2_fma_available() {
            println!("Skipping - AVX2/FMA not available");
            return;
        }
    };
}

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

fn assert_close(expected: &[f32], actual: &[f32], tol: f32, name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() <= tol * (1.0 + expected[i].abs()),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

// ============================================================
// 4×24 GEMM block
// ============================================================

/// Run the kernel on the `rows × cols` block at (i0, j0) of A(m×k)·B(k×n),
/// the way a driver handles edge tiles: pack with zero fill, compute a full
/// tile into scratch, copy the valid part out.
#[allow(clippy::too_many_arguments)]
fn gemm_tile(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    n: usize,
    k: usize,
    i0: usize,
    j0: usize,
    rows: usize,
    cols: usize,
    init_c: bool,
) {
    let mut a_pack = vec![0.0f32; panel_len_a(k)];
    let mut b_pack = vec![0.0f32; panel_len_b(k)];
    pack_a_panel(&a[i0 * k..], k, rows, k, &mut a_pack);
    pack_b_panel(&b[j0..], n, cols, k, &mut b_pack);

    let mut tile = vec![0.0f32; CONV_MR * CONV_NR];
    for i in 0..rows {
        tile[i * CONV_NR..i * CONV_NR + cols].copy_from_slice(&c[(i0 + i) * n + j0..(i0 + i) * n + j0 + cols]);
    }
    unsafe {
        conv_block_avx2(k, a_pack.as_ptr(), b_pack.as_ptr(), tile.as_mut_ptr(), CONV_NR, init_c);
    }
    for i in 0..rows {
        c[(i0 + i) * n + j0..(i0 + i) * n + j0 + cols].copy_from_slice(&tile[i * CONV_NR..i * CONV_NR + cols]);
    }
}

fn check_gemm(m: usize, n: usize, k: usize, init_c: bool, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_vec(&mut rng, m * k);
    let b = random_vec(&mut rng, k * n);
    let c0 = random_vec(&mut rng, m * n);

    let mut c = c0.clone();
    for i0 in (0..m).step_by(CONV_MR) {
        for j0 in (0..n).step_by(CONV_NR) {
            let rows = CONV_MR.min(m - i0);
            let cols = CONV_NR.min(n - j0);
            gemm_tile(&a, &b, &mut c, n, k, i0, j0, rows, cols, init_c);
        }
    }

    // f64 reference, error measured against the magnitude of the terms
    for i in 0..m {
        for j in 0..n {
            let mut want = if init_c { 0.0 } else { c0[i * n + j] as f64 };
            let mut scale = want.abs();
            for p in 0..k {
                let t = a[i * k + p] as f64 * b[p * n + j] as f64;
                want += t;
                scale += t.abs();
            }
            let err = (c[i * n + j] as f64 - want).abs() / scale.max(1e-30);
            assert!(
                err < 1e-5,
                "{}x{}x{} init={}: ({}, {}) got {}, expected {}",
                m,
                n,
                k,
                init_c,
                i,
                j,
                c[i * n + j],
                want
            );
        }
    }
}

#[test]
fn test_conv_block_overwrite() {
    require_avx2!();
    check_gemm(4, 24, 1, true, 1);
    check_gemm(4, 24, 64, true, 2);
    check_gemm(12, 48, 33, true, 3);
}

#[test]
fn test_conv_block_accumulate() {
    require_avx2!();
    check_gemm(4, 24, 17, false, 4);
    check_gemm(8, 72, 100, false, 5);
}

#[test]
fn test_conv_block_edge_tiles() {
    require_avx2!();
    // partial row and column panels on every edge
    check_gemm(7, 29, 13, false, 6);
    check_gemm(3, 5, 9, true, 7);
}

// ============================================================
// Depthwise block
// ============================================================

const ALL_PATHS: [DepthwisePath; 4] = [
    DepthwisePath::Scalar,
    DepthwisePath::Generic,
    DepthwisePath::Conv3x3,
    DepthwisePath::Conv3x3Unit,
];

fn run_depthwise(
    geom: &DepthwiseGeometry,
    input: &[f32],
    weights: &[f32],
    bias: f32,
    act: Option<Clamp>,
) -> Vec<f32> {
    let mut out = vec![f32::NAN; geom.output_len()];
    unsafe { depthwise_block_avx2(geom, input, &mut out, weights, bias, act) };
    out
}

#[test]
fn test_depthwise_paths_agree() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(42);

    for stride_y in [1, 2] {
        for stride_x in [1, 2] {
            for dilation_y in [1, 2] {
                for dilation_x in [1, 2] {
                    for act in [None, Some(Clamp::new(-0.5, 0.75).unwrap())] {
                        let params = DepthwiseParams::new(19, 37, 3, 3)
                            .stride(stride_y, stride_x)
                            .dilation(dilation_y, dilation_x)
                            .padding(dilation_y, dilation_x, dilation_y, dilation_x);
                        let geom = DepthwiseGeometry::new(params).unwrap();
                        let input = random_vec(&mut rng, geom.input_len());
                        let weights = random_vec(&mut rng, 9);
                        let bias = rng.gen_range(-0.5f32..0.5);

                        let expected = depthwise_naive(&params, &input, &weights, bias, act);
                        let mut tried = 0;
                        for path in ALL_PATHS.into_iter().filter(|&p| geom.supports(p)) {
                            let g = geom.clone().with_path(path).unwrap();
                            let got = run_depthwise(&g, &input, &weights, bias, act);
                            let name = format!(
                                "s{}x{} d{}x{} act={} {:?}",
                                stride_y,
                                stride_x,
                                dilation_y,
                                dilation_x,
                                act.is_some(),
                                path
                            );
                            assert_close(&expected, &got, 1e-4, &name);
                            tried += 1;
                        }
                        // a vector path exists whenever rows are contiguous
                        assert_eq!(tried > 1, stride_x == 1);
                    }
                }
            }
        }
    }
}

#[test]
fn test_depthwise_generic_matches_3x3_as_nine_taps() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(11);

    // both 3×3 loops against the generic tap loop on one geometry
    let params = DepthwiseParams::new(24, 40, 3, 3).same_padding();
    let geom = DepthwiseGeometry::new(params).unwrap();
    assert_eq!(geom.path(), DepthwisePath::Conv3x3Unit);
    let input = random_vec(&mut rng, geom.input_len());
    let weights = random_vec(&mut rng, 9);

    let generic = run_depthwise(&geom.clone().with_path(DepthwisePath::Generic).unwrap(), &input, &weights, 0.25, None);
    let unit = run_depthwise(&geom, &input, &weights, 0.25, None);
    let conv3x3 = run_depthwise(&geom.clone().with_path(DepthwisePath::Conv3x3).unwrap(), &input, &weights, 0.25, None);
    assert_close(&generic, &unit, 1e-4, "3x3 unit vs generic");
    assert_close(&generic, &conv3x3, 1e-4, "3x3 vs generic");

    // 9 taps in a row never hit the 3×3 loops
    let row = DepthwiseParams::new(24, 40, 1, 9).same_padding();
    let row_geom = DepthwiseGeometry::new(row).unwrap();
    assert_eq!(row_geom.path(), DepthwisePath::Generic);
    let got = run_depthwise(&row_geom, &input, &weights, 0.25, None);
    let expected = depthwise_naive(&row, &input, &weights, 0.25, None);
    assert_close(&expected, &got, 1e-4, "1x9 generic");
}

#[test]
fn test_depthwise_padding_contributes_zero() {
    require_avx2!();
    let v = 2.5f32;

    for (ksize, dilation) in [(3, 1), (3, 2), (5, 1)] {
        let params = DepthwiseParams::new(13, 27, ksize, ksize)
            .dilation(dilation, dilation)
            .same_padding();
        let geom = DepthwiseGeometry::new(params).unwrap();
        let input = vec![v; geom.input_len()];
        let (out_h, out_w) = (geom.out_h(), geom.out_w());
        let pad = params.pad_top;

        // center tap only: every output sees an in-bounds pixel
        let mut center = vec![0.0f32; ksize * ksize];
        center[ksize * ksize / 2] = 1.0;
        // top-left tap only: falls into the padding on the first `pad`
        // rows and columns
        let mut corner = vec![0.0f32; ksize * ksize];
        corner[0] = 1.0;

        for path in ALL_PATHS.into_iter().filter(|&p| geom.supports(p)) {
            let g = geom.clone().with_path(path).unwrap();

            let out = run_depthwise(&g, &input, &center, 0.0, None);
            assert!(out.iter().all(|&o| o == v), "center tap {:?} k{} d{}", path, ksize, dilation);

            let out = run_depthwise(&g, &input, &corner, 0.0, None);
            for y in 0..out_h {
                for x in 0..out_w {
                    let want = if y >= pad && x >= pad { v } else { 0.0 };
                    assert_eq!(
                        out[y * out_w + x],
                        want,
                        "corner tap {:?} k{} d{} at ({}, {})",
                        path,
                        ksize,
                        dilation,
                        y,
                        x
                    );
                }
            }
        }
    }
}

#[test]
fn test_depthwise_box_filter_counts_inbound_taps() {
    require_avx2!();
    let params = DepthwiseParams::new(9, 20, 3, 3).same_padding();
    let geom = DepthwiseGeometry::new(params).unwrap();
    let input = vec![1.0f32; geom.input_len()];
    let weights = vec![1.0f32; 9];

    let out = run_depthwise(&geom, &input, &weights, 0.0, None);
    let (h, w) = (geom.out_h(), geom.out_w());
    for y in 0..h {
        for x in 0..w {
            let rows = 3 - (y == 0) as usize - (y == h - 1) as usize;
            let cols = 3 - (x == 0) as usize - (x == w - 1) as usize;
            assert_eq!(out[y * w + x], (rows * cols) as f32, "({}, {})", y, x);
        }
    }
}

#[test]
fn test_depthwise_clamp_only_touches_out_of_range() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(7);
    let params = DepthwiseParams::new(16, 33, 3, 3).padding(1, 1, 1, 1);
    let geom = DepthwiseGeometry::new(params).unwrap();
    let input: Vec<f32> = (0..geom.input_len()).map(|_| rng.gen_range(-3.0f32..3.0)).collect();
    let weights = random_vec(&mut rng, 9);

    let (lo, hi) = (-1.0f32, 1.5f32);
    let clamp = Clamp::new(lo, hi).unwrap();
    for path in ALL_PATHS.into_iter().filter(|&p| geom.supports(p)) {
        let g = geom.clone().with_path(path).unwrap();
        let raw = run_depthwise(&g, &input, &weights, 0.1, None);
        let clamped = run_depthwise(&g, &input, &weights, 0.1, Some(clamp));

        assert!(raw.iter().any(|&v| v < lo) && raw.iter().any(|&v| v > hi));
        for (r, c) in raw.iter().zip(&clamped) {
            if (lo..=hi).contains(r) {
                assert_eq!(r, c, "{:?}: in-range value changed", path);
            } else if *r < lo {
                assert_eq!(*c, lo, "{:?}", path);
            } else {
                assert_eq!(*c, hi, "{:?}", path);
            }
        }
    }
}

// ============================================================
// Winograd F(6x6, 3x3)
// ============================================================

/// Valid 3×3 convolution of a `cg × h × w` input into `k_out ≤ 4` planes by
/// tiling into 6×6 output blocks, the way a layer driver calls the kernels.
#[allow(clippy::too_many_arguments)]
fn winograd_conv(
    input: &[f32],
    h: usize,
    w: usize,
    cg: usize,
    kernels: &[f32],
    k_out: usize,
    bias: &[f32],
    act: Option<Clamp>,
) -> (Vec<f32>, usize, usize) {
    let (tiles_y, tiles_x) = ((h - 2) / WINO_STEP, (w - 2) / WINO_STEP);
    let (oh, ow) = (tiles_y * WINO_STEP, tiles_x * WINO_STEP);
    let wbands = pack_weights(kernels, k_out, cg);
    let mut inbands = vec![0.0f32; input_bands_len(cg)];
    let mut accum = vec![0.0f32; accum_len()];
    let mut out = vec![f32::NAN; k_out * oh * ow];

    let positions: Vec<(usize, usize)> = (0..tiles_y)
        .flat_map(|ty| (0..tiles_x).map(move |tx| (ty, tx)))
        .collect();
    for block in positions.chunks(WINO_IBLOCK) {
        for c in 0..cg {
            for (i, &(ty, tx)) in block.iter().enumerate() {
                let src = &input[(c * h + ty * WINO_STEP) * w + tx * WINO_STEP..];
                let dst = &mut inbands[input_band_offset(c, i)..];
                unsafe {
                    winograd_input_transform_avx2(src.as_ptr(), w, dst.as_mut_ptr(), input_band_step(cg));
                }
            }
        }
        unsafe {
            winograd_accum_avx2(inbands.as_ptr(), wbands.as_ptr(), accum.as_mut_ptr(), cg, block.len());
        }
        for k in 0..k_out {
            for (i, &(ty, tx)) in block.iter().enumerate() {
                let dst = &mut out[(k * oh + ty * WINO_STEP) * ow + tx * WINO_STEP..];
                unsafe {
                    winograd_output_transform_avx2(
                        accum[accum_offset(k, i)..].as_ptr(),
                        WINO_ATOM,
                        None,
                        dst.as_mut_ptr(),
                        ow,
                        bias[k],
                        act,
                    );
                }
            }
        }
    }
    (out, oh, ow)
}

#[allow(clippy::too_many_arguments)]
fn direct_conv(
    input: &[f32],
    h: usize,
    w: usize,
    cg: usize,
    kernels: &[f32],
    k_out: usize,
    bias: &[f32],
    oh: usize,
    ow: usize,
    act: Option<Clamp>,
) -> Vec<f32> {
    let mut out = vec![0.0f32; k_out * oh * ow];
    for k in 0..k_out {
        for y in 0..oh {
            for x in 0..ow {
                let mut s = bias[k] as f64;
                for c in 0..cg {
                    for dy in 0..3 {
                        for dx in 0..3 {
                            let inp = input[(c * h + y + dy) * w + x + dx] as f64;
                            s += inp * kernels[(k * cg + c) * 9 + dy * 3 + dx] as f64;
                        }
                    }
                }
                out[(k * oh + y) * ow + x] = apply_opt(act, s as f32);
            }
        }
    }
    out
}

#[test]
fn test_winograd_matches_direct_convolution() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(2024);

    // 12 tiles (two full blocks), 4 tiles (6-wide path, partial block),
    // 3 and 2 tiles (3-wide path)
    for (h, w, cg, k_out) in [(20, 26, 3, 4), (14, 14, 5, 4), (8, 20, 2, 3), (8, 14, 1, 1)] {
        let input = random_vec(&mut rng, cg * h * w);
        let kernels = random_vec(&mut rng, k_out * cg * 9);
        let bias = random_vec(&mut rng, k_out);

        let (got, oh, ow) = winograd_conv(&input, h, w, cg, &kernels, k_out, &bias, None);
        let want = direct_conv(&input, h, w, cg, &kernels, k_out, &bias, oh, ow, None);
        assert_close(&want, &got, 1e-3, &format!("{}x{} cg={} k={}", h, w, cg, k_out));
    }
}

#[test]
fn test_winograd_single_tap_reproduces_input() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(3);

    // one channel, each tap position in turn: output is the shifted input
    let (h, w) = (14, 20);
    let input = random_vec(&mut rng, h * w);
    for tap in 0..9 {
        let mut kernel = [0.0f32; 9];
        kernel[tap] = 1.0;
        let (got, oh, ow) = winograd_conv(&input, h, w, 1, &kernel, 1, &[0.0], None);
        let (ty, tx) = (tap / 3, tap % 3);
        for y in 0..oh {
            for x in 0..ow {
                let want = input[(y + ty) * w + x + tx];
                let v = got[y * ow + x];
                assert!((v - want).abs() < 1e-3, "tap {} at ({}, {}): got {}, expected {}", tap, y, x, v, want);
            }
        }
    }
}

#[test]
fn test_winograd_clamp_fusion() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(9);
    let (h, w, cg) = (14, 14, 4);
    let input = random_vec(&mut rng, cg * h * w);
    let kernels = random_vec(&mut rng, WINO_KBLOCK * cg * 9);
    let bias = [0.0, 0.5, -0.5, 1.0];

    let clamp = Clamp::relu6();
    let (raw, _, _) = winograd_conv(&input, h, w, cg, &kernels, WINO_KBLOCK, &bias, None);
    let (clamped, _, _) = winograd_conv(&input, h, w, cg, &kernels, WINO_KBLOCK, &bias, Some(clamp));

    assert!(raw.iter().any(|&v| v < 0.0));
    for (r, c) in raw.iter().zip(&clamped) {
        if (0.0..=6.0).contains(r) {
            assert_eq!(r, c);
        } else {
            assert_eq!(*c, r.clamp(0.0, 6.0));
        }
    }
}

#[test]
fn test_winograd_bias_and_residual_fusion() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(17);
    let y = random_vec(&mut rng, 64);
    let beta = 0.375f32;
    let act = Some(Clamp::new(-2.0, 2.0).unwrap());

    let transform = |bypass: Option<(&[f32], usize)>, act: Option<Clamp>| {
        let outstep = 9;
        let mut out = vec![f32::NAN; 6 * outstep];
        unsafe {
            winograd_output_transform_avx2(
                y.as_ptr(),
                WINO_ATOM,
                bypass.map(|(r, step)| (r.as_ptr(), step)),
                out.as_mut_ptr(),
                outstep,
                beta,
                act,
            );
        }
        for r in 0..6 {
            assert!(out[r * outstep + 6..(r + 1) * outstep].iter().all(|v| v.is_nan()));
        }
        (0..6)
            .flat_map(|r| out[r * outstep..r * outstep + 6].to_vec())
            .collect::<Vec<f32>>()
    };

    let plain = transform(None, None);

    // R = 0 reduces to the plain output
    let zeros = vec![0.0f32; 6 * 7];
    assert_eq!(transform(Some((zeros.as_slice(), 7)), None), plain);
    assert_eq!(
        transform(Some((zeros.as_slice(), 7)), act),
        plain.iter().map(|&v| apply_opt(act, v)).collect::<Vec<_>>()
    );

    // nonzero R, row step 7 with a poisoned seventh column that must not
    // be read into the result
    let mut residual = vec![f32::NAN; 6 * 7];
    for r in 0..6 {
        for c in 0..6 {
            residual[r * 7 + c] = (r as f32 - 2.5) * 0.5 + c as f32 * 0.25;
        }
    }
    let fused = transform(Some((residual.as_slice(), 7)), act);
    for r in 0..6 {
        for c in 0..6 {
            let want = apply_opt(act, plain[r * 6 + c] + residual[r * 7 + c]);
            assert_eq!(fused[r * 6 + c], want, "({}, {})", r, c);
        }
    }
}

// ============================================================
// Concurrency and setup
// ============================================================

#[test]
fn test_concurrent_calls_on_disjoint_outputs() {
    require_avx2!();
    let mut rng = StdRng::seed_from_u64(99);
    let channels = 8;
    let params = DepthwiseParams::new(21, 35, 3, 3).same_padding();
    let geom = DepthwiseGeometry::new(params).unwrap();
    let (plane_in, plane_out) = (geom.input_len(), geom.output_len());
    let input = random_vec(&mut rng, plane_in * channels);
    let weights = random_vec(&mut rng, 9 * channels);

    let mut sequential = vec![0.0f32; plane_out * channels];
    for (c, out) in sequential.chunks_mut(plane_out).enumerate() {
        unsafe {
            depthwise_block_avx2(&geom, &input[c * plane_in..], out, &weights[c * 9..], 0.0, None);
        }
    }

    // shared geometry and inputs, one channel per thread
    let mut parallel = vec![0.0f32; plane_out * channels];
    std::thread::scope(|s| {
        for (c, out) in parallel.chunks_mut(plane_out).enumerate() {
            let (geom, input, weights) = (&geom, &input, &weights);
            s.spawn(move || unsafe {
                depthwise_block_avx2(geom, &input[c * plane_in..], out, &weights[c * 9..], 0.0, None);
            });
        }
    });
    assert_eq!(sequential, parallel);

    // GEMM row panels, one per thread, sharing one packed B panel
    let k = 40;
    let a = random_vec(&mut rng, 4 * CONV_MR * k);
    let b = random_vec(&mut rng, k * CONV_NR);
    let mut b_pack = vec![0.0f32; panel_len_b(k)];
    pack_b_panel(&b, CONV_NR, CONV_NR, k, &mut b_pack);
    let a_packs: Vec<Vec<f32>> = a
        .chunks(CONV_MR * k)
        .map(|rows| {
            let mut p = vec![0.0f32; panel_len_a(k)];
            pack_a_panel(rows, k, CONV_MR, k, &mut p);
            p
        })
        .collect();

    let mut c_seq = vec![0.0f32; 4 * CONV_MR * CONV_NR];
    for (ap, tile) in a_packs.iter().zip(c_seq.chunks_mut(CONV_MR * CONV_NR)) {
        unsafe { conv_block_avx2(k, ap.as_ptr(), b_pack.as_ptr(), tile.as_mut_ptr(), CONV_NR, true) };
    }
    let mut c_par = vec![0.0f32; 4 * CONV_MR * CONV_NR];
    std::thread::scope(|s| {
        for (ap, tile) in a_packs.iter().zip(c_par.chunks_mut(CONV_MR * CONV_NR)) {
            let bp = &b_pack;
            s.spawn(move || unsafe {
                conv_block_avx2(k, ap.as_ptr(), bp.as_ptr(), tile.as_mut_ptr(), CONV_NR, true);
            });
        }
    });
    assert_eq!(c_seq, c_par);
}

#[test]
fn test_invalid_layers_are_rejected_at_setup() {
    let base = DepthwiseParams::new(8, 8, 3, 3);
    assert!(matches!(
        DepthwiseGeometry::new(base.stride(0, 1)),
        Err(Error::ZeroStride { .. })
    ));
    assert!(matches!(
        DepthwiseGeometry::new(base.dilation(1, 0)),
        Err(Error::ZeroDilation { .. })
    ));
    assert!(matches!(
        DepthwiseGeometry::new(DepthwiseParams::new(8, 8, 0, 3)),
        Err(Error::EmptyKernel { .. })
    ));
    assert!(matches!(
        DepthwiseGeometry::new(DepthwiseParams::new(2, 8, 3, 3)),
        Err(Error::EmptyOutput { .. })
    ));

    // stride 2 across columns leaves only the scalar path
    let strided = DepthwiseGeometry::new(base.stride(1, 2)).unwrap();
    assert_eq!(strided.path(), DepthwisePath::Scalar);
    assert!(matches!(
        strided.with_path(DepthwisePath::Conv3x3),
        Err(Error::UnsupportedPath { .. })
    ));

    assert!(matches!(Clamp::new(1.0, 0.0), Err(Error::InvalidClamp { .. })));
}
