//! Layer geometry resolved once at setup time.
//!
//! - `depthwise`: output shape, tap tables, inner region and kernel path
//!   for a depthwise convolution.

pub mod depthwise;

pub use depthwise::{DepthwiseGeometry, DepthwiseParams, DepthwisePath};
