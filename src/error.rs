//! Errors reported while setting up a layer for the kernels.
//!
//! The kernels themselves have no error paths. Everything that can be wrong
//! about a geometry is caught here, once, before any kernel runs.

use thiserror::Error;

use crate::geometry::DepthwisePath;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("stride must be at least 1 (got {stride_y}x{stride_x})")]
    ZeroStride { stride_y: usize, stride_x: usize },

    #[error("dilation must be at least 1 (got {dilation_y}x{dilation_x})")]
    ZeroDilation { dilation_y: usize, dilation_x: usize },

    #[error("kernel must have at least one tap (got {kernel_h}x{kernel_w})")]
    EmptyKernel { kernel_h: usize, kernel_w: usize },

    #[error(
        "dilated kernel extent {extent_h}x{extent_w} does not fit the padded {padded_h}x{padded_w} input"
    )]
    EmptyOutput {
        extent_h: usize,
        extent_w: usize,
        padded_h: usize,
        padded_w: usize,
    },

    #[error("path {requested:?} cannot be used here (best available is {available:?})")]
    UnsupportedPath {
        requested: DepthwisePath,
        available: DepthwisePath,
    },

    #[error("clamp bounds are inverted or NaN: min={min}, max={max}")]
    InvalidClamp { min: f32, max: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
