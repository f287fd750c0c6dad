//! Depthwise convolution geometry.
//!
//! `DepthwiseParams` is what a layer knows about itself. `DepthwiseGeometry`
//! is derived from it once at layer setup: output shape, the tap offset
//! tables, the padding-free inner region and the kernel path. The kernel only
//! ever sees a `DepthwiseGeometry`, so the tables cannot disagree with the
//! stride/dilation/padding they were built from.

use std::ops::Range;

use log::debug;

use crate::error::{Error, Result};
use crate::tiling::VEC_NLANES;

/// Shape and sampling parameters of one depthwise layer (per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthwiseParams {
    pub in_h: usize,
    pub in_w: usize,
    pub kernel_h: usize,
    pub kernel_w: usize,
    pub stride_y: usize,
    pub stride_x: usize,
    pub dilation_y: usize,
    pub dilation_x: usize,
    pub pad_top: usize,
    pub pad_left: usize,
    pub pad_bottom: usize,
    pub pad_right: usize,
}

impl DepthwiseParams {
    /// Unit stride, unit dilation, no padding.
    pub fn new(in_h: usize, in_w: usize, kernel_h: usize, kernel_w: usize) -> Self {
        Self {
            in_h,
            in_w,
            kernel_h,
            kernel_w,
            stride_y: 1,
            stride_x: 1,
            dilation_y: 1,
            dilation_x: 1,
            pad_top: 0,
            pad_left: 0,
            pad_bottom: 0,
            pad_right: 0,
        }
    }

    pub fn stride(mut self, stride_y: usize, stride_x: usize) -> Self {
        self.stride_y = stride_y;
        self.stride_x = stride_x;
        self
    }

    pub fn dilation(mut self, dilation_y: usize, dilation_x: usize) -> Self {
        self.dilation_y = dilation_y;
        self.dilation_x = dilation_x;
        self
    }

    pub fn padding(mut self, top: usize, left: usize, bottom: usize, right: usize) -> Self {
        self.pad_top = top;
        self.pad_left = left;
        self.pad_bottom = bottom;
        self.pad_right = right;
        self
    }

    /// Pad so that a unit-stride convolution keeps the input size. Odd
    /// totals put the extra row/column at the bottom/right.
    pub fn same_padding(self) -> Self {
        let total_h = self.extent_h().saturating_sub(1);
        let total_w = self.extent_w().saturating_sub(1);
        self.padding(
            total_h / 2,
            total_w / 2,
            total_h - total_h / 2,
            total_w - total_w / 2,
        )
    }

    /// Vertical span of the dilated kernel.
    pub fn extent_h(&self) -> usize {
        self.dilation_y * self.kernel_h.saturating_sub(1) + 1
    }

    /// Horizontal span of the dilated kernel.
    pub fn extent_w(&self) -> usize {
        self.dilation_x * self.kernel_w.saturating_sub(1) + 1
    }
}

/// Which kernel loop handles the padding-free inner region.
///
/// Resolved once per layer so the hot loop never re-tests kernel shape.
/// Ordered from least to most specialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepthwisePath {
    /// Every output goes through the scalar tap loop.
    Scalar,
    /// 8 outputs per step, taps 4 at a time plus a scalar remainder.
    Generic,
    /// 3×3 kernel with all 9 weights held in registers.
    Conv3x3,
    /// 3×3, unit stride and dilation: three output rows per pass, sharing
    /// the loaded input rows.
    Conv3x3Unit,
}

/// Everything the depthwise kernel needs to know about the layer shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthwiseGeometry {
    params: DepthwiseParams,
    out_h: usize,
    out_w: usize,
    /// Flat input offset of each tap relative to the receptive field origin.
    ofstab: Vec<usize>,
    /// (dy, dx) of each tap relative to the receptive field origin.
    yxtab: Vec<(usize, usize)>,
    inner_ytop: usize,
    inner_ybottom: usize,
    inner_xleft: usize,
    inner_xright: usize,
    path: DepthwisePath,
    best_path: DepthwisePath,
}

impl DepthwiseGeometry {
    /// Derive the geometry and pick the most specialized path it allows.
    pub fn new(params: DepthwiseParams) -> Result<Self> {
        let p = &params;
        if p.stride_y == 0 || p.stride_x == 0 {
            return Err(Error::ZeroStride {
                stride_y: p.stride_y,
                stride_x: p.stride_x,
            });
        }
        if p.dilation_y == 0 || p.dilation_x == 0 {
            return Err(Error::ZeroDilation {
                dilation_y: p.dilation_y,
                dilation_x: p.dilation_x,
            });
        }
        if p.kernel_h == 0 || p.kernel_w == 0 {
            return Err(Error::EmptyKernel {
                kernel_h: p.kernel_h,
                kernel_w: p.kernel_w,
            });
        }

        let extent_h = p.extent_h();
        let extent_w = p.extent_w();
        let padded_h = p.in_h + p.pad_top + p.pad_bottom;
        let padded_w = p.in_w + p.pad_left + p.pad_right;
        if extent_h > padded_h || extent_w > padded_w {
            return Err(Error::EmptyOutput {
                extent_h,
                extent_w,
                padded_h,
                padded_w,
            });
        }
        let out_h = (padded_h - extent_h) / p.stride_y + 1;
        let out_w = (padded_w - extent_w) / p.stride_x + 1;

        let ksize = p.kernel_h * p.kernel_w;
        let mut ofstab = Vec::with_capacity(ksize);
        let mut yxtab = Vec::with_capacity(ksize);
        for ky in 0..p.kernel_h {
            for kx in 0..p.kernel_w {
                let dy = ky * p.dilation_y;
                let dx = kx * p.dilation_x;
                ofstab.push(dy * p.in_w + dx);
                yxtab.push((dy, dx));
            }
        }

        let (mut inner_ytop, mut inner_ybottom) =
            inner_span(p.in_h, p.pad_top, extent_h, p.stride_y, out_h);
        let (mut inner_xleft, mut inner_xright) =
            inner_span(p.in_w, p.pad_left, extent_w, p.stride_x, out_w);
        if inner_ytop >= inner_ybottom || inner_xleft >= inner_xright {
            inner_ytop = out_h;
            inner_ybottom = out_h;
            inner_xleft = out_w;
            inner_xright = out_w;
        }

        let best_path = if p.stride_x != 1 || inner_xleft >= out_w {
            DepthwisePath::Scalar
        } else if p.kernel_h == 3 && p.kernel_w == 3 {
            if p.stride_y == 1 && p.dilation_y == 1 && p.dilation_x == 1 {
                DepthwisePath::Conv3x3Unit
            } else {
                DepthwisePath::Conv3x3
            }
        } else {
            DepthwisePath::Generic
        };

        debug!(
            "depthwise {}x{} k{}x{} s{}x{} d{}x{} -> {}x{}, inner rows {}..{} cols {}..{}, path {:?}",
            p.in_h,
            p.in_w,
            p.kernel_h,
            p.kernel_w,
            p.stride_y,
            p.stride_x,
            p.dilation_y,
            p.dilation_x,
            out_h,
            out_w,
            inner_ytop,
            inner_ybottom,
            inner_xleft,
            inner_xright,
            best_path
        );

        Ok(Self {
            params,
            out_h,
            out_w,
            ofstab,
            yxtab,
            inner_ytop,
            inner_ybottom,
            inner_xleft,
            inner_xright,
            path: best_path,
            best_path,
        })
    }

    /// Use a less specialized path than the one picked by [`new`](Self::new).
    ///
    /// Every path produces the same values up to rounding; this exists so
    /// callers (and tests) can pin a path.
    pub fn with_path(mut self, path: DepthwisePath) -> Result<Self> {
        if !self.supports(path) {
            return Err(Error::UnsupportedPath {
                requested: path,
                available: self.best_path,
            });
        }
        debug!("depthwise path pinned to {:?}", path);
        self.path = path;
        Ok(self)
    }

    pub fn supports(&self, path: DepthwisePath) -> bool {
        match path {
            DepthwisePath::Scalar => true,
            DepthwisePath::Generic => self.best_path != DepthwisePath::Scalar,
            DepthwisePath::Conv3x3 | DepthwisePath::Conv3x3Unit => path <= self.best_path,
        }
    }

    pub fn params(&self) -> &DepthwiseParams {
        &self.params
    }

    pub fn path(&self) -> DepthwisePath {
        self.path
    }

    pub fn out_h(&self) -> usize {
        self.out_h
    }

    pub fn out_w(&self) -> usize {
        self.out_w
    }

    pub fn ksize(&self) -> usize {
        self.ofstab.len()
    }

    pub fn ofstab(&self) -> &[usize] {
        &self.ofstab
    }

    pub fn yxtab(&self) -> &[(usize, usize)] {
        &self.yxtab
    }

    /// Output rows whose receptive field lies entirely inside the input.
    pub fn inner_rows(&self) -> Range<usize> {
        self.inner_ytop..self.inner_ybottom
    }

    /// Output columns whose receptive field lies entirely inside the input.
    pub fn inner_cols(&self) -> Range<usize> {
        self.inner_xleft..self.inner_xright
    }

    /// True if at least one full vector of inner outputs fits in a row.
    pub fn has_vector_run(&self) -> bool {
        self.inner_xright - self.inner_xleft >= VEC_NLANES
    }

    pub fn input_len(&self) -> usize {
        self.params.in_h * self.params.in_w
    }

    pub fn output_len(&self) -> usize {
        self.out_h * self.out_w
    }
}

/// First and one-past-last output index whose taps `[o*stride - pad,
/// o*stride - pad + extent)` all fall inside `[0, len)`, clamped to `out`.
fn inner_span(len: usize, pad: usize, extent: usize, stride: usize, out: usize) -> (usize, usize) {
    let first = pad.div_ceil(stride).min(out);
    let last = if len + pad >= extent {
        ((len + pad - extent) / stride + 1).min(out)
    } else {
        0
    };
    (first, last)
}
