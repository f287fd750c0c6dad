//! Band layouts for the Winograd F(6x6, 3x3) kernels.
//!
//! Three buffers flow through a tile block:
//!
//! - input bands, `[atom][c][IBLOCK][ATOM]`, written by the input transform
//!   (one call per channel and tile position) and read by the accumulation;
//! - weight bands, `[atom][c][KBLOCK][ATOM]`, produced once per layer by
//!   [`pack_weights`];
//! - the accumulation buffer, one 64-float tile per (output channel, tile
//!   position) pair at [`accum_offset`], read by the output transform with
//!   `inpstep = WINO_ATOM`.

use log::trace;

use crate::matrix::winograd::G;
use crate::tiling::{WINO_AREA, WINO_ATOM, WINO_IBLOCK, WINO_KBLOCK, WINO_KSIZE, WINO_NATOMS, WINO_SIZE};

/// Distance between consecutive atoms of the input bands: the `outstep`
/// argument of the input transform.
pub const fn input_band_step(cg: usize) -> usize {
    WINO_IBLOCK * WINO_ATOM * cg
}

/// Floats in the input bands of one tile block.
pub const fn input_bands_len(cg: usize) -> usize {
    WINO_NATOMS * input_band_step(cg)
}

/// Where the input transform of channel `c`, tile position `i` starts.
pub const fn input_band_offset(c: usize, i: usize) -> usize {
    (c * WINO_IBLOCK + i) * WINO_ATOM
}

/// Floats in the weight bands for one block of `KBLOCK` output channels.
pub const fn weight_bands_len(cg: usize) -> usize {
    WINO_NATOMS * WINO_KBLOCK * WINO_ATOM * cg
}

/// Floats in the accumulation buffer of one tile block.
pub const fn accum_len() -> usize {
    WINO_KBLOCK * WINO_IBLOCK * WINO_AREA
}

/// Where the accumulated tile of output channel `k`, tile position `i` starts.
pub const fn accum_offset(k: usize, i: usize) -> usize {
    (k * WINO_IBLOCK + i) * WINO_AREA
}

/// Transform a 3×3 kernel (row-major) into the Winograd domain.
///
/// Returns `(G g Gᵀ)ᵀ` row-major, row `r` being atom `r`. The transpose
/// matches what the input transform produces, so their pointwise product
/// maps back to a plain correlation.
pub fn transform_kernel_3x3(g: &[f32; 9]) -> [f32; WINO_AREA] {
    // G · g
    let mut gg = [[0.0f32; WINO_KSIZE]; WINO_SIZE];
    for (i, row) in gg.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = G[i][0] * g[j] + G[i][1] * g[3 + j] + G[i][2] * g[6 + j];
        }
    }
    // (G · g) · Gᵀ, stored transposed
    let mut out = [0.0f32; WINO_AREA];
    for (i, row) in gg.iter().enumerate() {
        for j in 0..WINO_SIZE {
            out[j * WINO_SIZE + i] = row[0] * G[j][0] + row[1] * G[j][1] + row[2] * G[j][2];
        }
    }
    out
}

/// Transform and pack the 3×3 kernels of up to `KBLOCK` output channels.
///
/// `kernels` holds `k_out × cg` row-major 3×3 kernels (output channel
/// major). Output channels `k_out..KBLOCK` are zero so the accumulation can
/// always run a full block.
///
/// # Panics
///
/// Panics if `k_out > WINO_KBLOCK` or `kernels` is not `k_out * cg * 9` long.
pub fn pack_weights(kernels: &[f32], k_out: usize, cg: usize) -> Vec<f32> {
    assert!(k_out <= WINO_KBLOCK, "at most {} output channels per block", WINO_KBLOCK);
    assert_eq!(kernels.len(), k_out * cg * 9, "expected {}x{} 3x3 kernels", k_out, cg);
    trace!("pack winograd weights: {} out x {} in", k_out, cg);

    let mut bands = vec![0.0f32; weight_bands_len(cg)];
    for k in 0..k_out {
        for c in 0..cg {
            let base = (k * cg + c) * 9;
            let mut g = [0.0f32; 9];
            g.copy_from_slice(&kernels[base..base + 9]);
            let tile = transform_kernel_3x3(&g);
            for atom in 0..WINO_NATOMS {
                let dst = ((atom * cg + c) * WINO_KBLOCK + k) * WINO_ATOM;
                bands[dst..dst + WINO_ATOM]
                    .copy_from_slice(&tile[atom * WINO_ATOM..(atom + 1) * WINO_ATOM]);
            }
        }
    }
    bands
}
