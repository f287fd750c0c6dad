//! Micro-panel packing for the 4×24 GEMM block.

use log::trace;

use crate::tiling::{CONV_MR, CONV_NR};

/// Floats in a packed A panel covering `np` reduction steps.
pub const fn panel_len_a(np: usize) -> usize {
    np * CONV_MR
}

/// Floats in a packed B panel covering `np` reduction steps.
pub const fn panel_len_b(np: usize) -> usize {
    np * CONV_NR
}

/// Pack up to `CONV_MR` rows of a row-major A into `dst[p * 4 + i]`.
///
/// Rows `rows..4` are zero-filled so the kernel can always run a full
/// panel; the caller discards the matching output rows.
///
/// # Arguments
///
/// * `a` - First row of the block, row stride `lda`
/// * `rows` - Valid rows (at most `CONV_MR`)
/// * `np` - Reduction length
/// * `dst` - At least `panel_len_a(np)` floats
pub fn pack_a_panel(a: &[f32], lda: usize, rows: usize, np: usize, dst: &mut [f32]) {
    assert!(rows <= CONV_MR, "A panel holds at most {} rows", CONV_MR);
    assert!(dst.len() >= panel_len_a(np));
    trace!("pack A panel: {} rows x {}", rows, np);

    for p in 0..np {
        let out = &mut dst[p * CONV_MR..(p + 1) * CONV_MR];
        for (i, v) in out.iter_mut().enumerate() {
            *v = if i < rows { a[i * lda + p] } else { 0.0 };
        }
    }
}

/// Pack up to `CONV_NR` columns of a row-major B into `dst[p * 24 + j]`.
///
/// Columns `cols..24` are zero-filled.
///
/// # Arguments
///
/// * `b` - First column of the block, row stride `ldb`
/// * `cols` - Valid columns (at most `CONV_NR`)
/// * `np` - Reduction length
/// * `dst` - At least `panel_len_b(np)` floats
pub fn pack_b_panel(b: &[f32], ldb: usize, cols: usize, np: usize, dst: &mut [f32]) {
    assert!(cols <= CONV_NR, "B panel holds at most {} columns", CONV_NR);
    assert!(dst.len() >= panel_len_b(np));
    trace!("pack B panel: {} x {} cols", np, cols);

    for p in 0..np {
        let out = &mut dst[p * CONV_NR..(p + 1) * CONV_NR];
        out[..cols].copy_from_slice(&b[p * ldb..p * ldb + cols]);
        out[cols..].fill(0.0);
    }
}
