//! AVX2 depthwise convolution over one channel.

use std::arch::x86_64::*;

use crate::activation::{Clamp, apply_opt};
use crate::geometry::{DepthwiseGeometry, DepthwisePath};
use crate::tiling::VEC_NLANES;

/// Computes one full output plane of a depthwise convolution.
///
/// Rows are walked top to bottom. Inside a row the columns split into up to
/// three runs: left border, inner region, right border. Border outputs check
/// every tap against the image and treat taps outside it as zero. Inner
/// outputs read through the precomputed offset table without checks; on
/// vector paths they are produced 8 at a time, with a scalar tail.
///
/// The geometry's [`DepthwisePath`] picks the inner loop:
/// - `Conv3x3Unit`: inner rows are done three at a time when three remain,
///   loading five input rows once for all three outputs
/// - `Conv3x3` (and `Conv3x3Unit` on single rows): nine broadcast weights
/// - `Generic`: taps four at a time plus remainder
/// - `Scalar`: no vector loop
///
/// Every output starts from `bias`; `act` is applied just before the store.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `input` holds `in_h * in_w` floats, `output` holds `out_h * out_w`,
///   `weights` holds `kernel_h * kernel_w` (row-major taps)
///
/// Lengths are only checked in debug builds.
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
#[allow(clippy::too_many_lines)]
pub unsafe fn depthwise_block_avx2(
    geom: &DepthwiseGeometry,
    input: &[f32],
    output: &mut [f32],
    weights: &[f32],
    bias: f32,
    act: Option<Clamp>,
) {
    debug_assert!(input.len() >= geom.input_len());
    debug_assert!(output.len() >= geom.output_len());
    debug_assert!(weights.len() >= geom.ksize());

    let p = geom.params();
    let (in_h, in_w) = (p.in_h, p.in_w);
    let (out_h, out_w) = (geom.out_h(), geom.out_w());
    let (stride_y, stride_x) = (p.stride_y, p.stride_x);
    let (pad_top, pad_left) = (p.pad_top as isize, p.pad_left as isize);
    let ksize = geom.ksize();
    let ofstab = geom.ofstab().as_ptr();
    let yxtab = geom.yxtab();
    let inner_rows = geom.inner_rows();
    let inner_cols = geom.inner_cols();

    let path = geom.path();
    let use_simd = path != DepthwisePath::Scalar;
    let is3x3 = matches!(path, DepthwisePath::Conv3x3 | DepthwisePath::Conv3x3Unit);
    let batch_rows = path == DepthwisePath::Conv3x3Unit;

    let inp = input.as_ptr();
    let out = output.as_mut_ptr();
    let wptr = weights.as_ptr();

    let vclamp = match act {
        Some(c) => Some((_mm256_set1_ps(c.min()), _mm256_set1_ps(c.max()))),
        None => None,
    };
    let vbias = _mm256_set1_ps(bias);

    let zero = _mm256_setzero_ps();
    let (mut w0, mut w1, mut w2, mut w3, mut w4, mut w5, mut w6, mut w7, mut w8) =
        (zero, zero, zero, zero, zero, zero, zero, zero, zero);
    if is3x3 {
        w0 = _mm256_set1_ps(weights[0]);
        w1 = _mm256_set1_ps(weights[1]);
        w2 = _mm256_set1_ps(weights[2]);
        w3 = _mm256_set1_ps(weights[3]);
        w4 = _mm256_set1_ps(weights[4]);
        w5 = _mm256_set1_ps(weights[5]);
        w6 = _mm256_set1_ps(weights[6]);
        w7 = _mm256_set1_ps(weights[7]);
        w8 = _mm256_set1_ps(weights[8]);
    }

    let mut y0 = 0;
    while y0 < out_h {
        let dy0 = if batch_rows && inner_rows.start <= y0 && y0 + 3 <= inner_rows.end {
            3
        } else {
            1
        };
        let outptr = out.add(y0 * out_w);
        let yi_ = (y0 * stride_y) as isize - pad_top;

        let mut x0 = 0;
        let mut x1 = if inner_rows.contains(&y0) {
            inner_cols.start
        } else {
            out_w
        };

        loop {
            // border run: check each tap
            if dy0 == 3 {
                // all three rows are inner, only columns can fall outside
                while x0 < x1 {
                    let xi_ = (x0 * stride_x) as isize - pad_left;
                    let (mut s0, mut s1, mut s2) = (bias, bias, bias);
                    for (k, &(dy, dx)) in yxtab.iter().enumerate() {
                        let xi = xi_ + dx as isize;
                        if (xi as usize) < in_w {
                            let src = inp.add((yi_ as usize + dy) * in_w + xi as usize);
                            let w = *wptr.add(k);
                            s0 += *src * w;
                            s1 += *src.add(in_w) * w;
                            s2 += *src.add(in_w * 2) * w;
                        }
                    }
                    *outptr.add(x0) = apply_opt(act, s0);
                    *outptr.add(x0 + out_w) = apply_opt(act, s1);
                    *outptr.add(x0 + out_w * 2) = apply_opt(act, s2);
                    x0 += 1;
                }
            } else {
                while x0 < x1 {
                    let xi_ = (x0 * stride_x) as isize - pad_left;
                    let mut s0 = bias;
                    for (k, &(dy, dx)) in yxtab.iter().enumerate() {
                        let yi = yi_ + dy as isize;
                        let xi = xi_ + dx as isize;
                        if ((yi as usize) < in_h) & ((xi as usize) < in_w) {
                            s0 += *inp.add(yi as usize * in_w + xi as usize) * *wptr.add(k);
                        }
                    }
                    *outptr.add(x0) = apply_opt(act, s0);
                    x0 += 1;
                }
            }
            if x0 == out_w {
                break;
            }
            x1 = inner_cols.end;

            // inner run: every tap is inside the image, so the receptive
            // field origin is non-negative
            let row_base = inp.add(yi_ as usize * in_w);

            if use_simd {
                if is3x3 && dy0 == 3 {
                    while x0 + VEC_NLANES <= x1 {
                        let src = row_base.add(x0 - pad_left as usize);

                        let x00 = _mm256_loadu_ps(src);
                        let x01 = _mm256_loadu_ps(src.add(1));
                        let x02 = _mm256_loadu_ps(src.add(2));

                        let x10 = _mm256_loadu_ps(src.add(in_w));
                        let x11 = _mm256_loadu_ps(src.add(in_w + 1));
                        let x12 = _mm256_loadu_ps(src.add(in_w + 2));

                        let x20 = _mm256_loadu_ps(src.add(in_w * 2));
                        let x21 = _mm256_loadu_ps(src.add(in_w * 2 + 1));
                        let x22 = _mm256_loadu_ps(src.add(in_w * 2 + 2));

                        let x30 = _mm256_loadu_ps(src.add(in_w * 3));
                        let x31 = _mm256_loadu_ps(src.add(in_w * 3 + 1));
                        let x32 = _mm256_loadu_ps(src.add(in_w * 3 + 2));

                        let x40 = _mm256_loadu_ps(src.add(in_w * 4));
                        let x41 = _mm256_loadu_ps(src.add(in_w * 4 + 1));
                        let x42 = _mm256_loadu_ps(src.add(in_w * 4 + 2));

                        let mut s0 = _mm256_fmadd_ps(x00, w0, vbias);
                        let mut s1 = _mm256_fmadd_ps(x10, w0, vbias);
                        let mut s2 = _mm256_fmadd_ps(x20, w0, vbias);

                        s0 = _mm256_fmadd_ps(x01, w1, s0);
                        s1 = _mm256_fmadd_ps(x11, w1, s1);
                        s2 = _mm256_fmadd_ps(x21, w1, s2);

                        s0 = _mm256_fmadd_ps(x02, w2, s0);
                        s1 = _mm256_fmadd_ps(x12, w2, s1);
                        s2 = _mm256_fmadd_ps(x22, w2, s2);

                        s0 = _mm256_fmadd_ps(x10, w3, s0);
                        s1 = _mm256_fmadd_ps(x20, w3, s1);
                        s2 = _mm256_fmadd_ps(x30, w3, s2);

                        s0 = _mm256_fmadd_ps(x11, w4, s0);
                        s1 = _mm256_fmadd_ps(x21, w4, s1);
                        s2 = _mm256_fmadd_ps(x31, w4, s2);

                        s0 = _mm256_fmadd_ps(x12, w5, s0);
                        s1 = _mm256_fmadd_ps(x22, w5, s1);
                        s2 = _mm256_fmadd_ps(x32, w5, s2);

                        s0 = _mm256_fmadd_ps(x20, w6, s0);
                        s1 = _mm256_fmadd_ps(x30, w6, s1);
                        s2 = _mm256_fmadd_ps(x40, w6, s2);

                        s0 = _mm256_fmadd_ps(x21, w7, s0);
                        s1 = _mm256_fmadd_ps(x31, w7, s1);
                        s2 = _mm256_fmadd_ps(x41, w7, s2);

                        s0 = _mm256_fmadd_ps(x22, w8, s0);
                        s1 = _mm256_fmadd_ps(x32, w8, s1);
                        s2 = _mm256_fmadd_ps(x42, w8, s2);

                        _mm256_storeu_ps(outptr.add(x0), clamp_ps(s0, vclamp));
                        _mm256_storeu_ps(outptr.add(out_w + x0), clamp_ps(s1, vclamp));
                        _mm256_storeu_ps(outptr.add(out_w * 2 + x0), clamp_ps(s2, vclamp));
                        x0 += VEC_NLANES;
                    }
                } else if is3x3 {
                    while x0 + VEC_NLANES <= x1 {
                        let src = row_base.add(x0 * stride_x - pad_left as usize);

                        let mut s0 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(0))), w0, vbias);
                        let mut s1 = _mm256_mul_ps(_mm256_loadu_ps(src.add(*ofstab.add(1))), w1);
                        let mut s2 = _mm256_mul_ps(_mm256_loadu_ps(src.add(*ofstab.add(2))), w2);

                        s0 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(3))), w3, s0);
                        s1 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(4))), w4, s1);
                        s2 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(5))), w5, s2);

                        s0 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(6))), w6, s0);
                        s1 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(7))), w7, s1);
                        s2 = _mm256_fmadd_ps(_mm256_loadu_ps(src.add(*ofstab.add(8))), w8, s2);

                        s0 = _mm256_add_ps(_mm256_add_ps(s0, s1), s2);

                        _mm256_storeu_ps(outptr.add(x0), clamp_ps(s0, vclamp));
                        x0 += VEC_NLANES;
                    }
                } else {
                    while x0 + VEC_NLANES <= x1 {
                        let src = row_base.add(x0 * stride_x - pad_left as usize);
                        let mut s0 = vbias;
                        let mut k = 0;
                        while k + 4 <= ksize {
                            let v0 = _mm256_loadu_ps(src.add(*ofstab.add(k)));
                            let v1 = _mm256_loadu_ps(src.add(*ofstab.add(k + 1)));
                            let v2 = _mm256_loadu_ps(src.add(*ofstab.add(k + 2)));
                            let v3 = _mm256_loadu_ps(src.add(*ofstab.add(k + 3)));

                            let ww0 = _mm256_set1_ps(*wptr.add(k));
                            let ww1 = _mm256_set1_ps(*wptr.add(k + 1));
                            let ww2 = _mm256_set1_ps(*wptr.add(k + 2));
                            let ww3 = _mm256_set1_ps(*wptr.add(k + 3));

                            s0 = _mm256_fmadd_ps(v0, ww0, s0);
                            s0 = _mm256_fmadd_ps(v1, ww1, s0);
                            s0 = _mm256_fmadd_ps(v2, ww2, s0);
                            s0 = _mm256_fmadd_ps(v3, ww3, s0);
                            k += 4;
                        }
                        while k < ksize {
                            s0 = _mm256_fmadd_ps(
                                _mm256_loadu_ps(src.add(*ofstab.add(k))),
                                _mm256_set1_ps(*wptr.add(k)),
                                s0,
                            );
                            k += 1;
                        }

                        _mm256_storeu_ps(outptr.add(x0), clamp_ps(s0, vclamp));
                        x0 += VEC_NLANES;
                    }
                }
            }

            // inner tail (or the whole inner run on the scalar path)
            if dy0 == 3 {
                while x0 < x1 {
                    let src = row_base.add(x0 * stride_x - pad_left as usize);
                    let (mut s0, mut s1, mut s2) = (bias, bias, bias);
                    for k in 0..ksize {
                        let ofs = *ofstab.add(k);
                        let w = *wptr.add(k);
                        s0 += *src.add(ofs) * w;
                        s1 += *src.add(ofs + in_w) * w;
                        s2 += *src.add(ofs + in_w * 2) * w;
                    }
                    *outptr.add(x0) = apply_opt(act, s0);
                    *outptr.add(x0 + out_w) = apply_opt(act, s1);
                    *outptr.add(x0 + out_w * 2) = apply_opt(act, s2);
                    x0 += 1;
                }
            } else {
                while x0 < x1 {
                    let src = row_base.add(x0 * stride_x - pad_left as usize);
                    let mut s0 = bias;
                    for k in 0..ksize {
                        s0 += *src.add(*ofstab.add(k)) * *wptr.add(k);
                    }
                    *outptr.add(x0) = apply_opt(act, s0);
                    x0 += 1;
                }
            }
            x1 = out_w;
        }

        y0 += dy0;
    }
}

#[target_feature(enable = "avx2,fma")]
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn clamp_ps(v: __m256, bounds: Option<(__m256, __m256)>) -> __m256 {
    match bounds {
        Some((lo, hi)) => _mm256_min_ps(_mm256_max_ps(v, lo), hi),
        None => v,
    }
}
