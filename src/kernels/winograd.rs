//! AVX2 kernels for Winograd F(6x6, 3x3) convolution on 8×8 tiles.
//!
//! A tile block goes through three steps:
//! 1. [`winograd_input_transform_avx2`] once per (input channel, tile)
//! 2. [`winograd_accum_avx2`] once per block of `KBLOCK` output channels
//! 3. [`winograd_output_transform_avx2`] once per (output channel, tile)
//!
//! The transforms compute each output row as a short FMA chain built from
//! the constant entries of Bᵀ / Aᵀ (see `matrix::winograd` for the full
//! matrices). Each transform combines rows, transposes, and combines rows
//! again, so the transform domain is stored transposed; the weight packing
//! in `packing::winograd` matches that.

use std::arch::x86_64::*;

use crate::activation::Clamp;
use crate::tiling::{WINO_AREA, WINO_ATOM, WINO_IBLOCK, WINO_KBLOCK, WINO_NATOMS};

/// Forward transform of one 8×8 input patch: `(Bᵀ X B)ᵀ`.
///
/// Row `r` of the result (atom `r`) goes to `outptr + r * outstep`. With
/// `outstep = packing::winograd::input_band_step(cg)` and `outptr` at
/// `input_band_offset(c, i)` this fills the bands read by
/// [`winograd_accum_avx2`].
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `inptr.add(r * inpstep)` is valid for reading 8 f32s, r in 0..8
/// - `outptr.add(r * outstep)` is valid for writing 8 f32s, r in 0..8
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn winograd_input_transform_avx2(
    inptr: *const f32,
    inpstep: usize,
    outptr: *mut f32,
    outstep: usize,
) {
    let x00 = _mm256_loadu_ps(inptr);
    let x10 = _mm256_loadu_ps(inptr.add(inpstep));
    let x20 = _mm256_loadu_ps(inptr.add(inpstep * 2));
    let x30 = _mm256_loadu_ps(inptr.add(inpstep * 3));
    let x40 = _mm256_loadu_ps(inptr.add(inpstep * 4));
    let x50 = _mm256_loadu_ps(inptr.add(inpstep * 5));
    let x60 = _mm256_loadu_ps(inptr.add(inpstep * 6));
    let x70 = _mm256_loadu_ps(inptr.add(inpstep * 7));

    let [y00, y10, y20, y30, y40, y50, y60, y70] =
        bt_rows([x00, x10, x20, x30, x40, x50, x60, x70]);
    let y = transpose8_ps([y00, y10, y20, y30, y40, y50, y60, y70]);
    let [z00, z10, z20, z30, z40, z50, z60, z70] = bt_rows(y);

    _mm256_storeu_ps(outptr, z00);
    _mm256_storeu_ps(outptr.add(outstep), z10);
    _mm256_storeu_ps(outptr.add(outstep * 2), z20);
    _mm256_storeu_ps(outptr.add(outstep * 3), z30);
    _mm256_storeu_ps(outptr.add(outstep * 4), z40);
    _mm256_storeu_ps(outptr.add(outstep * 5), z50);
    _mm256_storeu_ps(outptr.add(outstep * 6), z60);
    _mm256_storeu_ps(outptr.add(outstep * 7), z70);
}

/// `Bᵀ · X` for eight row vectors. Rows come in symmetric pairs sharing
/// their even/odd partial sums.
#[target_feature(enable = "avx2,fma")]
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn bt_rows(x: [__m256; 8]) -> [__m256; 8] {
    let [x0, x1, x2, x3, x4, x5, x6, x7] = x;

    // Y0 = [1, 0, -5.25, 0, 5.25, 0, -1, 0] · X
    // Y7 = [0, -1, 0, 5.25, 0, -5.25, 0, 1] · X
    let q5_25 = _mm256_set1_ps(5.25);
    let t0 = _mm256_sub_ps(x4, x2);
    let t1 = _mm256_sub_ps(x3, x5);
    let y0 = _mm256_fmadd_ps(t0, q5_25, _mm256_sub_ps(x0, x6));
    let y7 = _mm256_fmadd_ps(t1, q5_25, _mm256_sub_ps(x7, x1));

    // Y1 = [0, 1, 1, -4.25, -4.25, 1, 1, 0] · X
    // Y2 = [0, -1, 1, 4.25, -4.25, -1, 1, 0] · X
    let qm4_25 = _mm256_set1_ps(-4.25);
    let t0 = _mm256_fmadd_ps(x3, qm4_25, _mm256_add_ps(x1, x5));
    let t1 = _mm256_fmadd_ps(x4, qm4_25, _mm256_add_ps(x2, x6));
    let y1 = _mm256_add_ps(t0, t1);
    let y2 = _mm256_sub_ps(t1, t0);

    // Y3 = [0, 0.5, 0.25, -2.5, -1.25, 2, 1, 0] · X
    // Y4 = [0, -0.5, 0.25, 2.5, -1.25, -2, 1, 0] · X
    let q0_5 = _mm256_set1_ps(0.5);
    let q0_25 = _mm256_set1_ps(0.25);
    let qm2_5 = _mm256_set1_ps(-2.5);
    let qm1_25 = _mm256_set1_ps(-1.25);
    let t0 = _mm256_fmadd_ps(x1, q0_5, _mm256_add_ps(x5, x5));
    let t1 = _mm256_fmadd_ps(x2, q0_25, x6);
    let t0 = _mm256_fmadd_ps(x3, qm2_5, t0);
    let t1 = _mm256_fmadd_ps(x4, qm1_25, t1);
    let y3 = _mm256_add_ps(t0, t1);
    let y4 = _mm256_sub_ps(t1, t0);

    // Y5 = [0, 2, 4, -2.5, -5, 0.5, 1, 0] · X
    // Y6 = [0, -2, 4, 2.5, -5, -0.5, 1, 0] · X
    let q4 = _mm256_set1_ps(4.0);
    let qm5 = _mm256_set1_ps(-5.0);
    let t0 = _mm256_fmadd_ps(x5, q0_5, _mm256_add_ps(x1, x1));
    let t1 = _mm256_fmadd_ps(x2, q4, x6);
    let t0 = _mm256_fmadd_ps(x3, qm2_5, t0);
    let t1 = _mm256_fmadd_ps(x4, qm5, t1);
    let y5 = _mm256_add_ps(t0, t1);
    let y6 = _mm256_sub_ps(t1, t0);

    [y0, y1, y2, y3, y4, y5, y6, y7]
}

/// Transform-domain matrix multiply for one tile block.
///
/// For every atom, sums over `cg` input channels the product of 4 weight
/// vectors (output channels) and `iblock` input vectors (tile positions).
/// All accumulators stay in registers for the whole channel reduction; each
/// atom's results are stored once.
///
/// `iblock > 3` runs the 6-position path (24 accumulators); otherwise the
/// 3-position path runs and only positions 0..3 of `outbuf` are written.
///
/// Layouts (see `packing::winograd`):
/// - `inwptr`: `[atom][c][IBLOCK][ATOM]`, `input_bands_len(cg)` floats
/// - `wptr`: `[atom][c][KBLOCK][ATOM]`, `weight_bands_len(cg)` floats
/// - `outbuf`: tile of (k, i) at `accum_offset(k, i)`, atom at `atom * ATOM`
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - the three buffers have the lengths above (`accum_len()` for `outbuf`)
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
#[allow(clippy::identity_op)]
#[allow(clippy::too_many_lines)]
pub unsafe fn winograd_accum_avx2(
    inwptr: *const f32,
    wptr: *const f32,
    outbuf: *mut f32,
    cg: usize,
    iblock: usize,
) {
    const INW_STEP: usize = WINO_IBLOCK * WINO_ATOM;
    const W_STEP: usize = WINO_KBLOCK * WINO_ATOM;
    const TILE: usize = WINO_AREA;

    if iblock > 3 {
        for atom in 0..WINO_NATOMS {
            let mut s00 = _mm256_setzero_ps();
            let (mut s01, mut s02, mut s03, mut s04, mut s05) = (s00, s00, s00, s00, s00);
            let (mut s10, mut s11, mut s12, mut s13, mut s14, mut s15) =
                (s00, s00, s00, s00, s00, s00);
            let (mut s20, mut s21, mut s22, mut s23, mut s24, mut s25) =
                (s00, s00, s00, s00, s00, s00);
            let (mut s30, mut s31, mut s32, mut s33, mut s34, mut s35) =
                (s00, s00, s00, s00, s00, s00);

            for c in 0..cg {
                let inw = inwptr.add((atom * cg + c) * INW_STEP);
                let w = wptr.add((atom * cg + c) * W_STEP);

                let w0 = _mm256_loadu_ps(w);
                let w1 = _mm256_loadu_ps(w.add(8));
                let w2 = _mm256_loadu_ps(w.add(16));
                let w3 = _mm256_loadu_ps(w.add(24));

                let x0 = _mm256_loadu_ps(inw);
                let x1 = _mm256_loadu_ps(inw.add(8));
                s00 = _mm256_fmadd_ps(w0, x0, s00);
                s01 = _mm256_fmadd_ps(w0, x1, s01);
                s10 = _mm256_fmadd_ps(w1, x0, s10);
                s11 = _mm256_fmadd_ps(w1, x1, s11);
                s20 = _mm256_fmadd_ps(w2, x0, s20);
                s21 = _mm256_fmadd_ps(w2, x1, s21);
                s30 = _mm256_fmadd_ps(w3, x0, s30);
                s31 = _mm256_fmadd_ps(w3, x1, s31);

                let x0 = _mm256_loadu_ps(inw.add(16));
                let x1 = _mm256_loadu_ps(inw.add(24));
                s02 = _mm256_fmadd_ps(w0, x0, s02);
                s03 = _mm256_fmadd_ps(w0, x1, s03);
                s12 = _mm256_fmadd_ps(w1, x0, s12);
                s13 = _mm256_fmadd_ps(w1, x1, s13);
                s22 = _mm256_fmadd_ps(w2, x0, s22);
                s23 = _mm256_fmadd_ps(w2, x1, s23);
                s32 = _mm256_fmadd_ps(w3, x0, s32);
                s33 = _mm256_fmadd_ps(w3, x1, s33);

                let x0 = _mm256_loadu_ps(inw.add(32));
                let x1 = _mm256_loadu_ps(inw.add(40));
                s04 = _mm256_fmadd_ps(w0, x0, s04);
                s05 = _mm256_fmadd_ps(w0, x1, s05);
                s14 = _mm256_fmadd_ps(w1, x0, s14);
                s15 = _mm256_fmadd_ps(w1, x1, s15);
                s24 = _mm256_fmadd_ps(w2, x0, s24);
                s25 = _mm256_fmadd_ps(w2, x1, s25);
                s34 = _mm256_fmadd_ps(w3, x0, s34);
                s35 = _mm256_fmadd_ps(w3, x1, s35);
            }

            let out = outbuf.add(atom * WINO_ATOM);
            _mm256_storeu_ps(out, s00);
            _mm256_storeu_ps(out.add(1 * TILE), s01);
            _mm256_storeu_ps(out.add(2 * TILE), s02);
            _mm256_storeu_ps(out.add(3 * TILE), s03);
            _mm256_storeu_ps(out.add(4 * TILE), s04);
            _mm256_storeu_ps(out.add(5 * TILE), s05);

            _mm256_storeu_ps(out.add(6 * TILE), s10);
            _mm256_storeu_ps(out.add(7 * TILE), s11);
            _mm256_storeu_ps(out.add(8 * TILE), s12);
            _mm256_storeu_ps(out.add(9 * TILE), s13);
            _mm256_storeu_ps(out.add(10 * TILE), s14);
            _mm256_storeu_ps(out.add(11 * TILE), s15);

            _mm256_storeu_ps(out.add(12 * TILE), s20);
            _mm256_storeu_ps(out.add(13 * TILE), s21);
            _mm256_storeu_ps(out.add(14 * TILE), s22);
            _mm256_storeu_ps(out.add(15 * TILE), s23);
            _mm256_storeu_ps(out.add(16 * TILE), s24);
            _mm256_storeu_ps(out.add(17 * TILE), s25);

            _mm256_storeu_ps(out.add(18 * TILE), s30);
            _mm256_storeu_ps(out.add(19 * TILE), s31);
            _mm256_storeu_ps(out.add(20 * TILE), s32);
            _mm256_storeu_ps(out.add(21 * TILE), s33);
            _mm256_storeu_ps(out.add(22 * TILE), s34);
            _mm256_storeu_ps(out.add(23 * TILE), s35);
        }
    } else {
        for atom in 0..WINO_NATOMS {
            let mut s00 = _mm256_setzero_ps();
            let (mut s01, mut s02) = (s00, s00);
            let (mut s10, mut s11, mut s12) = (s00, s00, s00);
            let (mut s20, mut s21, mut s22) = (s00, s00, s00);
            let (mut s30, mut s31, mut s32) = (s00, s00, s00);

            for c in 0..cg {
                let inw = inwptr.add((atom * cg + c) * INW_STEP);
                let w = wptr.add((atom * cg + c) * W_STEP);

                let w0 = _mm256_loadu_ps(w);
                let w1 = _mm256_loadu_ps(w.add(8));
                let w2 = _mm256_loadu_ps(w.add(16));
                let w3 = _mm256_loadu_ps(w.add(24));

                let x0 = _mm256_loadu_ps(inw);
                let x1 = _mm256_loadu_ps(inw.add(8));
                let x2 = _mm256_loadu_ps(inw.add(16));
                s00 = _mm256_fmadd_ps(w0, x0, s00);
                s01 = _mm256_fmadd_ps(w0, x1, s01);
                s02 = _mm256_fmadd_ps(w0, x2, s02);
                s10 = _mm256_fmadd_ps(w1, x0, s10);
                s11 = _mm256_fmadd_ps(w1, x1, s11);
                s12 = _mm256_fmadd_ps(w1, x2, s12);
                s20 = _mm256_fmadd_ps(w2, x0, s20);
                s21 = _mm256_fmadd_ps(w2, x1, s21);
                s22 = _mm256_fmadd_ps(w2, x2, s22);
                s30 = _mm256_fmadd_ps(w3, x0, s30);
                s31 = _mm256_fmadd_ps(w3, x1, s31);
                s32 = _mm256_fmadd_ps(w3, x2, s32);
            }

            let out = outbuf.add(atom * WINO_ATOM);
            _mm256_storeu_ps(out, s00);
            _mm256_storeu_ps(out.add(1 * TILE), s01);
            _mm256_storeu_ps(out.add(2 * TILE), s02);
            _mm256_storeu_ps(out.add(6 * TILE), s10);
            _mm256_storeu_ps(out.add(7 * TILE), s11);
            _mm256_storeu_ps(out.add(8 * TILE), s12);
            _mm256_storeu_ps(out.add(12 * TILE), s20);
            _mm256_storeu_ps(out.add(13 * TILE), s21);
            _mm256_storeu_ps(out.add(14 * TILE), s22);
            _mm256_storeu_ps(out.add(18 * TILE), s30);
            _mm256_storeu_ps(out.add(19 * TILE), s31);
            _mm256_storeu_ps(out.add(20 * TILE), s32);
        }
    }
}

/// Inverse transform of one accumulated tile: `(Aᵀ Y A)ᵀ`, 6×6 valid.
///
/// Aᵀ is
/// ```text
/// [1, 1,  1,  1,   1,    1,     1,   0]
/// [0, 1, -1,  2,  -2,  1/2,  -1/2,   0]
/// [0, 1,  1,  4,   4,  1/4,   1/4,   0]
/// [0, 1, -1,  8,  -8,  1/8,  -1/8,   0]
/// [0, 1,  1, 16,  16, 1/16,  1/16,   0]
/// [0, 1, -1, 32, -32, 1/32, -1/32,   1]
/// ```
///
/// The result gets `bias`, then the optional bypass rows (`(ptr, step)`,
/// e.g. a residual branch), then the optional clamp, and is stored 6 floats
/// per row. Bypass rows are read 6 floats wide as well.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `inptr.add(r * inpstep)` is valid for reading 8 f32s, r in 0..8
/// - bypass `ptr.add(r * step)` is valid for reading 6 f32s, r in 0..6
/// - `outptr.add(r * outstep)` is valid for writing 6 f32s, r in 0..6
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
#[allow(clippy::too_many_arguments)]
pub unsafe fn winograd_output_transform_avx2(
    inptr: *const f32,
    inpstep: usize,
    bypass: Option<(*const f32, usize)>,
    outptr: *mut f32,
    outstep: usize,
    bias: f32,
    act: Option<Clamp>,
) {
    let x00 = _mm256_loadu_ps(inptr);
    let x10 = _mm256_loadu_ps(inptr.add(inpstep));
    let x20 = _mm256_loadu_ps(inptr.add(inpstep * 2));
    let x30 = _mm256_loadu_ps(inptr.add(inpstep * 3));
    let x40 = _mm256_loadu_ps(inptr.add(inpstep * 4));
    let x50 = _mm256_loadu_ps(inptr.add(inpstep * 5));
    let x60 = _mm256_loadu_ps(inptr.add(inpstep * 6));
    let x70 = _mm256_loadu_ps(inptr.add(inpstep * 7));

    let [y00, y10, y20, y30, y40, y50] = at_rows([x00, x10, x20, x30, x40, x50, x60, x70]);
    // rows 6 and 7 of Aᵀ·X do not exist; zero them so the transpose leaves
    // zeros in the two padding lanes
    let zero = _mm256_setzero_ps();
    let y = transpose8_ps([y00, y10, y20, y30, y40, y50, zero, zero]);
    let [mut z00, mut z10, mut z20, mut z30, mut z40, mut z50] = at_rows(y);

    let vbias = _mm256_set1_ps(bias);
    z00 = _mm256_add_ps(vbias, z00);
    z10 = _mm256_add_ps(vbias, z10);
    z20 = _mm256_add_ps(vbias, z20);
    z30 = _mm256_add_ps(vbias, z30);
    z40 = _mm256_add_ps(vbias, z40);
    z50 = _mm256_add_ps(vbias, z50);

    let mask = _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0);

    if let Some((bpptr, bpstep)) = bypass {
        z00 = _mm256_add_ps(z00, _mm256_maskload_ps(bpptr, mask));
        z10 = _mm256_add_ps(z10, _mm256_maskload_ps(bpptr.add(bpstep), mask));
        z20 = _mm256_add_ps(z20, _mm256_maskload_ps(bpptr.add(bpstep * 2), mask));
        z30 = _mm256_add_ps(z30, _mm256_maskload_ps(bpptr.add(bpstep * 3), mask));
        z40 = _mm256_add_ps(z40, _mm256_maskload_ps(bpptr.add(bpstep * 4), mask));
        z50 = _mm256_add_ps(z50, _mm256_maskload_ps(bpptr.add(bpstep * 5), mask));
    }

    if let Some(clamp) = act {
        let vmax = _mm256_set1_ps(clamp.max());
        let vmin = _mm256_set1_ps(clamp.min());

        z00 = _mm256_min_ps(_mm256_max_ps(z00, vmin), vmax);
        z10 = _mm256_min_ps(_mm256_max_ps(z10, vmin), vmax);
        z20 = _mm256_min_ps(_mm256_max_ps(z20, vmin), vmax);
        z30 = _mm256_min_ps(_mm256_max_ps(z30, vmin), vmax);
        z40 = _mm256_min_ps(_mm256_max_ps(z40, vmin), vmax);
        z50 = _mm256_min_ps(_mm256_max_ps(z50, vmin), vmax);
    }

    _mm256_maskstore_ps(outptr, mask, z00);
    _mm256_maskstore_ps(outptr.add(outstep), mask, z10);
    _mm256_maskstore_ps(outptr.add(outstep * 2), mask, z20);
    _mm256_maskstore_ps(outptr.add(outstep * 3), mask, z30);
    _mm256_maskstore_ps(outptr.add(outstep * 4), mask, z40);
    _mm256_maskstore_ps(outptr.add(outstep * 5), mask, z50);
}

/// `Aᵀ · X` for eight row vectors, from pairwise sums and differences of
/// rows 1..7. Row 7 only reaches the last output row.
#[target_feature(enable = "avx2,fma")]
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn at_rows(x: [__m256; 8]) -> [__m256; 6] {
    let [x0, x1, x2, x3, x4, x5, x6, x7] = x;

    let s12 = _mm256_add_ps(x1, x2);
    let s34 = _mm256_add_ps(x3, x4);
    let s56 = _mm256_add_ps(x5, x6);
    let y0 = _mm256_add_ps(x0, _mm256_add_ps(s12, _mm256_add_ps(s34, s56)));
    let y2 = _mm256_fmadd_ps(
        s56,
        _mm256_set1_ps(0.25),
        _mm256_fmadd_ps(s34, _mm256_set1_ps(4.0), s12),
    );
    let y4 = _mm256_fmadd_ps(
        s56,
        _mm256_set1_ps(1.0 / 16.0),
        _mm256_fmadd_ps(s34, _mm256_set1_ps(16.0), s12),
    );

    let d12 = _mm256_sub_ps(x1, x2);
    let d34 = _mm256_sub_ps(x3, x4);
    let d56 = _mm256_sub_ps(x5, x6);
    let y5 = _mm256_fmadd_ps(
        d56,
        _mm256_set1_ps(1.0 / 32.0),
        _mm256_fmadd_ps(d34, _mm256_set1_ps(32.0), _mm256_add_ps(x7, d12)),
    );
    let y1 = _mm256_fmadd_ps(
        d56,
        _mm256_set1_ps(0.5),
        _mm256_fmadd_ps(d34, _mm256_set1_ps(2.0), d12),
    );
    let y3 = _mm256_fmadd_ps(
        d56,
        _mm256_set1_ps(0.125),
        _mm256_fmadd_ps(d34, _mm256_set1_ps(8.0), d12),
    );

    [y0, y1, y2, y3, y4, y5]
}

/// 8×8 transpose of eight YMM rows.
#[target_feature(enable = "avx2,fma")]
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn transpose8_ps(r: [__m256; 8]) -> [__m256; 8] {
    let t0 = _mm256_unpacklo_ps(r[0], r[1]);
    let t1 = _mm256_unpackhi_ps(r[0], r[1]);
    let t2 = _mm256_unpacklo_ps(r[2], r[3]);
    let t3 = _mm256_unpackhi_ps(r[2], r[3]);
    let t4 = _mm256_unpacklo_ps(r[4], r[5]);
    let t5 = _mm256_unpackhi_ps(r[4], r[5]);
    let t6 = _mm256_unpacklo_ps(r[6], r[7]);
    let t7 = _mm256_unpackhi_ps(r[6], r[7]);

    // _MM_SHUFFLE(1, 0, 1, 0) and _MM_SHUFFLE(3, 2, 3, 2)
    let tt0 = _mm256_shuffle_ps::<0x44>(t0, t2);
    let tt1 = _mm256_shuffle_ps::<0xEE>(t0, t2);
    let tt2 = _mm256_shuffle_ps::<0x44>(t1, t3);
    let tt3 = _mm256_shuffle_ps::<0xEE>(t1, t3);
    let tt4 = _mm256_shuffle_ps::<0x44>(t4, t6);
    let tt5 = _mm256_shuffle_ps::<0xEE>(t4, t6);
    let tt6 = _mm256_shuffle_ps::<0x44>(t5, t7);
    let tt7 = _mm256_shuffle_ps::<0xEE>(t5, t7);

    [
        _mm256_permute2f128_ps::<0x20>(tt0, tt4),
        _mm256_permute2f128_ps::<0x20>(tt1, tt5),
        _mm256_permute2f128_ps::<0x20>(tt2, tt6),
        _mm256_permute2f128_ps::<0x20>(tt3, tt7),
        _mm256_permute2f128_ps::<0x31>(tt0, tt4),
        _mm256_permute2f128_ps::<0x31>(tt1, tt5),
        _mm256_permute2f128_ps::<0x31>(tt2, tt6),
        _mm256_permute2f128_ps::<0x31>(tt3, tt7),
    ]
}
