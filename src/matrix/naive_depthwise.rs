use crate::activation::{Clamp, apply_opt};
use crate::geometry::DepthwiseParams;

/// Direct single-channel depthwise convolution.
///
/// Every output starts at `bias`, then adds `input[yi][xi] * weight` for each
/// tap in row-major tap order, skipping taps outside the image (zero
/// padding). Output shape follows the usual
/// `(in + pad_before + pad_after - extent) / stride + 1` rule.
///
/// Works from `DepthwiseParams` directly so it shares no tables with the
/// kernel.
///
/// # Panics
///
/// Panics if the parameters describe an empty output or a zero stride.
pub fn depthwise_naive(
    p: &DepthwiseParams,
    input: &[f32],
    weights: &[f32],
    bias: f32,
    act: Option<Clamp>,
) -> Vec<f32> {
    assert_eq!(input.len(), p.in_h * p.in_w, "input: expected {}x{}", p.in_h, p.in_w);
    assert_eq!(weights.len(), p.kernel_h * p.kernel_w);

    let out_h = (p.in_h + p.pad_top + p.pad_bottom - p.extent_h()) / p.stride_y + 1;
    let out_w = (p.in_w + p.pad_left + p.pad_right - p.extent_w()) / p.stride_x + 1;
    let mut out = vec![0.0; out_h * out_w];

    for y in 0..out_h {
        for x in 0..out_w {
            let mut s = bias;
            for ky in 0..p.kernel_h {
                let yi = (y * p.stride_y + ky * p.dilation_y) as isize - p.pad_top as isize;
                if yi < 0 || yi >= p.in_h as isize {
                    continue;
                }
                for kx in 0..p.kernel_w {
                    let xi = (x * p.stride_x + kx * p.dilation_x) as isize - p.pad_left as isize;
                    if xi < 0 || xi >= p.in_w as isize {
                        continue;
                    }
                    s += input[yi as usize * p.in_w + xi as usize] * weights[ky * p.kernel_w + kx];
                }
            }
            out[y * out_w + x] = apply_opt(act, s);
        }
    }
    out
}
