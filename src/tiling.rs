//! Fixed tiling constants shared by the kernels and their callers.
//!
//! These are part of the contract with the layer driver: operand panels and
//! Winograd bands must be packed in exactly these shapes. The Winograd values
//! are baked into the transform derivation, so the asserts at the bottom stop
//! the build if someone edits a constant without re-deriving the kernels.

/// Rows of the GEMM micro-panel (A side).
pub const CONV_MR: usize = 4;

/// Columns of the GEMM micro-panel (B side). Three 8-lane registers per row.
pub const CONV_NR: usize = 24;

/// f32 lanes in one 256-bit register.
pub const VEC_NLANES: usize = 8;

/// Tile positions processed together by the Winograd accumulation.
pub const WINO_IBLOCK: usize = 6;

/// Output channels processed together by the Winograd accumulation.
pub const WINO_KBLOCK: usize = 4;

/// Transform coefficients held in one register.
pub const WINO_ATOM: usize = 8;

/// Edge of the transform-domain tile.
pub const WINO_SIZE: usize = 8;

/// Edge of the valid spatial output of one tile.
pub const WINO_STEP: usize = 6;

/// Kernel edge the F(6x6, 3x3) transform is derived for.
pub const WINO_KSIZE: usize = 3;

/// Coefficients in one transform-domain tile.
pub const WINO_AREA: usize = WINO_SIZE * WINO_SIZE;

/// Atoms per transform-domain tile.
pub const WINO_NATOMS: usize = WINO_AREA / WINO_ATOM;

const _: () = assert!(
    CONV_MR == 4 && CONV_NR == 24,
    "conv_block_avx2 is written for a 4x24 micro-panel"
);
const _: () = assert!(CONV_NR == 3 * VEC_NLANES);
const _: () = assert!(
    WINO_IBLOCK == 6 && WINO_KBLOCK == 4 && WINO_ATOM == 8,
    "Winograd kernels are derived for IBLOCK=6, KBLOCK=4, ATOM=8"
);
const _: () = assert!(WINO_SIZE == WINO_STEP + WINO_KSIZE - 1);
const _: () = assert!(WINO_ATOM == VEC_NLANES && WINO_NATOMS == WINO_SIZE);
