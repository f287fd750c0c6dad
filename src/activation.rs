//! Min/max clamp activation fused into the kernel stores.

use crate::error::{Error, Result};

/// Clamp bounds applied to every output element before it is stored.
///
/// Passing `None` where a kernel takes `Option<Clamp>` disables the clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    min: f32,
    max: f32,
}

impl Clamp {
    /// Clamp to `[min, max]`. Infinite bounds are allowed.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidClamp { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn relu() -> Self {
        Self {
            min: 0.0,
            max: f32::INFINITY,
        }
    }

    pub fn relu6() -> Self {
        Self { min: 0.0, max: 6.0 }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Scalar form of the clamp, same operand order as the vector kernels
    /// (`min(max(v, lo), hi)`).
    #[inline(always)]
    pub fn apply(&self, v: f32) -> f32 {
        v.max(self.min).min(self.max)
    }
}

/// Apply an optional clamp to a scalar.
#[inline(always)]
pub fn apply_opt(act: Option<Clamp>, v: f32) -> f32 {
    match act {
        Some(c) => c.apply(v),
        None => v,
    }
}
