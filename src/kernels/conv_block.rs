//! 4×24 AVX2 microkernel for the GEMM stage of convolution.

use crate::tiling::{CONV_MR, CONV_NR};

/// Computes a 4×24 tile: `C[0:4, 0:24] (+)= A_packed × B_packed`
///
/// Holds the whole tile in 12 YMM accumulators (4 rows × 3 registers of 8
/// floats) for the full reduction, starting from zero. C is touched once at
/// the end: read and added when `init_c` is false, then stored. With
/// `init_c` set the previous contents of C are ignored.
///
/// Per reduction step two A values are broadcast at a time, leaving room for
/// the three B loads in the 16 available registers.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA (checked via `#[target_feature]`)
/// - `a` points to `np * 4` contiguous f32 values (packed A panel)
/// - `b` points to `np * 24` contiguous f32 values (packed B panel)
/// - `c.add(row * ldc)` is valid for row in 0..4, each allowing read/write of 24 f32s
#[target_feature(enable = "avx2,fma")]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn conv_block_avx2(
    np: usize,
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    ldc: usize,
    init_c: bool,
) {
    use std::arch::x86_64::*;

    let mut c00 = _mm256_setzero_ps();
    let mut c01 = c00;
    let mut c02 = c00;
    let mut c10 = c00;
    let mut c11 = c00;
    let mut c12 = c00;
    let mut c20 = c00;
    let mut c21 = c00;
    let mut c22 = c00;
    let mut c30 = c00;
    let mut c31 = c00;
    let mut c32 = c00;

    for p in 0..np {
        let ap = a.add(p * CONV_MR);
        let bp = b.add(p * CONV_NR);

        let b0 = _mm256_loadu_ps(bp);
        let b1 = _mm256_loadu_ps(bp.add(8));
        let b2 = _mm256_loadu_ps(bp.add(16));

        let a0 = _mm256_set1_ps(*ap.add(0));
        let a1 = _mm256_set1_ps(*ap.add(1));

        c00 = _mm256_fmadd_ps(b0, a0, c00);
        c01 = _mm256_fmadd_ps(b1, a0, c01);
        c02 = _mm256_fmadd_ps(b2, a0, c02);

        c10 = _mm256_fmadd_ps(b0, a1, c10);
        c11 = _mm256_fmadd_ps(b1, a1, c11);
        c12 = _mm256_fmadd_ps(b2, a1, c12);

        let a0 = _mm256_set1_ps(*ap.add(2));
        let a1 = _mm256_set1_ps(*ap.add(3));

        c20 = _mm256_fmadd_ps(b0, a0, c20);
        c21 = _mm256_fmadd_ps(b1, a0, c21);
        c22 = _mm256_fmadd_ps(b2, a0, c22);

        c30 = _mm256_fmadd_ps(b0, a1, c30);
        c31 = _mm256_fmadd_ps(b1, a1, c31);
        c32 = _mm256_fmadd_ps(b2, a1, c32);
    }

    let r0 = c.add(0 * ldc);
    let r1 = c.add(1 * ldc);
    let r2 = c.add(2 * ldc);
    let r3 = c.add(3 * ldc);

    if !init_c {
        c00 = _mm256_add_ps(c00, _mm256_loadu_ps(r0));
        c01 = _mm256_add_ps(c01, _mm256_loadu_ps(r0.add(8)));
        c02 = _mm256_add_ps(c02, _mm256_loadu_ps(r0.add(16)));

        c10 = _mm256_add_ps(c10, _mm256_loadu_ps(r1));
        c11 = _mm256_add_ps(c11, _mm256_loadu_ps(r1.add(8)));
        c12 = _mm256_add_ps(c12, _mm256_loadu_ps(r1.add(16)));

        c20 = _mm256_add_ps(c20, _mm256_loadu_ps(r2));
        c21 = _mm256_add_ps(c21, _mm256_loadu_ps(r2.add(8)));
        c22 = _mm256_add_ps(c22, _mm256_loadu_ps(r2.add(16)));

        c30 = _mm256_add_ps(c30, _mm256_loadu_ps(r3));
        c31 = _mm256_add_ps(c31, _mm256_loadu_ps(r3.add(8)));
        c32 = _mm256_add_ps(c32, _mm256_loadu_ps(r3.add(16)));
    }

    _mm256_storeu_ps(r0, c00);
    _mm256_storeu_ps(r0.add(8), c01);
    _mm256_storeu_ps(r0.add(16), c02);
    _mm256_storeu_ps(r1, c10);
    _mm256_storeu_ps(r1.add(8), c11);
    _mm256_storeu_ps(r1.add(16), c12);
    _mm256_storeu_ps(r2, c20);
    _mm256_storeu_ps(r2.add(8), c21);
    _mm256_storeu_ps(r2.add(16), c22);
    _mm256_storeu_ps(r3, c30);
    _mm256_storeu_ps(r3.add(8), c31);
    _mm256_storeu_ps(r3.add(16), c32);
}
