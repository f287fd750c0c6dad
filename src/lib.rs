//! Convolution micro-kernels in Rust, built on AVX2 and FMA.
//!
//! These are the inner loops of a CNN inference engine: the parts where
//! both speed and correctness are hardest. Everything around them (tensor
//! allocation, tiling, thread pools, picking a kernel for the CPU) belongs
//! to the layer above.
//!
//! ## Usage
//!
//! Depthwise convolution of one channel:
//!
//! ```
//! use fastconv::{DepthwiseGeometry, DepthwiseParams, Clamp};
//!
//! let params = DepthwiseParams::new(32, 32, 3, 3).same_padding();
//! let geom = DepthwiseGeometry::new(params).unwrap();
//!
//! let input = vec![1.0f32; geom.input_len()];
//! let weights = vec![1.0f32 / 9.0; geom.ksize()];
//! let mut output = vec![0.0f32; geom.output_len()];
//!
//! # #[cfg(target_arch = "x86_64")]
//! if fastconv::avx2_fma_available() {
//!     unsafe {
//!         fastconv::kernels::depthwise::depthwise_block_avx2(
//!             &geom, &input, &mut output, &weights, 0.0, Some(Clamp::relu6()),
//!         );
//!     }
//! }
//! ```
//!
//! ## What's inside
//!
//! - 4×24 GEMM tile kernel over packed panels
//! - Depthwise kernel with 3×3 (row-batched), strided 3×3 and generic paths
//! - Winograd F(6x6, 3x3) transforms and transform-domain accumulation
//! - Scalar baselines and packing helpers for all of the above

pub mod activation;
pub mod error;
pub mod geometry;
#[cfg(target_arch = "x86_64")]
pub mod kernels;
pub mod matrix;
pub mod packing;
pub mod tiling;

pub use activation::Clamp;
pub use error::{Error, Result};
pub use geometry::{DepthwiseGeometry, DepthwiseParams, DepthwisePath};

#[cfg(target_arch = "x86_64")]
pub use kernels::conv_block::conv_block_avx2;
#[cfg(target_arch = "x86_64")]
pub use kernels::depthwise::depthwise_block_avx2;
#[cfg(target_arch = "x86_64")]
pub use kernels::winograd::{
    winograd_accum_avx2, winograd_input_transform_avx2, winograd_output_transform_avx2,
};

/// Whether the CPU can run the kernels in [`kernels`].
///
/// Always false off x86_64.
pub fn avx2_fma_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}
