//! Scalar baselines.
//!
//! Straightforward loops the SIMD kernels are checked against. They follow
//! the textbook definitions, not the kernels' data layouts, so a layout bug
//! in a kernel cannot hide in its own reference.

pub mod naive_depthwise;
pub mod naive_gemm;
pub mod winograd;
