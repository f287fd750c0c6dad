//! AVX2/FMA kernels for the innermost loops of convolution.
//!
//! Every kernel here is an `unsafe fn` compiled with
//! `#[target_feature(enable = "avx2,fma")]`. The caller checks the CPU once
//! (see [`crate::avx2_fma_available`]) and owns all packing, tiling and
//! threading. Kernels never allocate and never write their inputs, so
//! concurrent calls on disjoint outputs are fine.
//!
//! Available kernels:
//! - `conv_block`: 4×24 GEMM tile over packed panels (12 accumulators)
//! - `depthwise`: one channel of depthwise convolution, with 3×3 and
//!   generic vector paths for the padding-free inner region
//! - `winograd`: F(6x6, 3x3) input transform, transform-domain
//!   accumulation and output transform with bias/residual/clamp fusion

pub mod conv_block;
pub mod depthwise;
pub mod winograd;
