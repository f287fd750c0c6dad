//! Operand packing for the kernels.
//!
//! The kernels read operands in fixed panel/band layouts and do no bounds
//! checking. These helpers produce those layouts from plain row-major data
//! and give the address arithmetic a name. Layer drivers may pack directly
//! into the same layouts; the helpers define what "correctly packed" means.
//!
//! - `conv_panel`: 4-row A panels and 24-column B panels for `conv_block_avx2`
//! - `winograd`: transformed weight bands and band/tile offsets for the
//!   Winograd kernels

pub mod conv_panel;
pub mod winograd;
