//! Full-matrix form of the Winograd F(6x6, 3x3) transforms.
//!
//! The kernels never multiply by these matrices; they expand each row into
//! a short add/FMA chain. These are the matrices those chains were derived
//! from, used here for brute-force checks. Products are computed in f64.
//!
//! Both kernel transforms work as "combine rows, transpose, combine rows",
//! so they produce the transpose of the textbook result:
//! input `(Bᵀ X B)ᵀ`, output `(Aᵀ Y A)ᵀ`. The functions below return the
//! same transposed quantities.

/// Input transform matrix Bᵀ (interpolation points 0, ±1, ±2, ±1/2, ∞).
pub const BT: [[f32; 8]; 8] = [
    [1.0, 0.0, -5.25, 0.0, 5.25, 0.0, -1.0, 0.0],
    [0.0, 1.0, 1.0, -4.25, -4.25, 1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0, 4.25, -4.25, -1.0, 1.0, 0.0],
    [0.0, 0.5, 0.25, -2.5, -1.25, 2.0, 1.0, 0.0],
    [0.0, -0.5, 0.25, 2.5, -1.25, -2.0, 1.0, 0.0],
    [0.0, 2.0, 4.0, -2.5, -5.0, 0.5, 1.0, 0.0],
    [0.0, -2.0, 4.0, 2.5, -5.0, -0.5, 1.0, 0.0],
    [0.0, -1.0, 0.0, 5.25, 0.0, -5.25, 0.0, 1.0],
];

/// Output transform matrix Aᵀ. Columns 6 and 7 of the transform domain
/// only feed the last row through the ∞ point.
pub const AT: [[f32; 8]; 6] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0],
    [0.0, 1.0, -1.0, 2.0, -2.0, 0.5, -0.5, 0.0],
    [0.0, 1.0, 1.0, 4.0, 4.0, 0.25, 0.25, 0.0],
    [0.0, 1.0, -1.0, 8.0, -8.0, 0.125, -0.125, 0.0],
    [0.0, 1.0, 1.0, 16.0, 16.0, 1.0 / 16.0, 1.0 / 16.0, 0.0],
    [0.0, 1.0, -1.0, 32.0, -32.0, 1.0 / 32.0, -1.0 / 32.0, 1.0],
];

/// Kernel transform matrix G, scaled to match `BT` and `AT`.
pub const G: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0],
    [-2.0 / 9.0, -2.0 / 9.0, -2.0 / 9.0],
    [-2.0 / 9.0, 2.0 / 9.0, -2.0 / 9.0],
    [1.0 / 90.0, 1.0 / 45.0, 2.0 / 45.0],
    [1.0 / 90.0, -1.0 / 45.0, 2.0 / 45.0],
    [32.0 / 45.0, 16.0 / 45.0, 8.0 / 45.0],
    [32.0 / 45.0, -16.0 / 45.0, 8.0 / 45.0],
    [0.0, 0.0, 1.0],
];

/// `M · X · Mᵀ` for an R×C matrix `M` and C×C matrix `X`, in f64.
fn sandwich<const R: usize, const C: usize>(m: &[[f32; C]; R], x: &[[f64; C]; C]) -> [[f64; R]; R] {
    let mut mx = [[0.0f64; C]; R];
    for i in 0..R {
        for j in 0..C {
            mx[i][j] = (0..C).map(|k| m[i][k] as f64 * x[k][j]).sum();
        }
    }
    let mut out = [[0.0f64; R]; R];
    for i in 0..R {
        for j in 0..R {
            out[i][j] = (0..C).map(|k| mx[i][k] * m[j][k] as f64).sum();
        }
    }
    out
}

fn to_f64<const N: usize>(x: &[[f32; N]; N]) -> [[f64; N]; N] {
    x.map(|row| row.map(f64::from))
}

fn transposed_f32<const N: usize>(x: &[[f64; N]; N]) -> [[f32; N]; N] {
    let mut out = [[0.0f32; N]; N];
    for i in 0..N {
        for j in 0..N {
            out[j][i] = x[i][j] as f32;
        }
    }
    out
}

/// `(Bᵀ X B)ᵀ`: what `winograd_input_transform_avx2` writes, row `r` being
/// atom `r`.
pub fn input_transform_ref(x: &[[f32; 8]; 8]) -> [[f32; 8]; 8] {
    transposed_f32(&sandwich(&BT, &to_f64(x)))
}

/// `(Aᵀ Y A)ᵀ`: the 6×6 block `winograd_output_transform_avx2` stores,
/// before bias, bypass and clamp.
pub fn output_transform_ref(y: &[[f32; 8]; 8]) -> [[f32; 6]; 6] {
    transposed_f32(&sandwich(&AT, &to_f64(y)))
}

/// `(G g Gᵀ)ᵀ`: a 3×3 kernel in the same transposed transform domain as
/// [`input_transform_ref`], so the pointwise product of the two maps back
/// to a plain correlation.
pub fn kernel_transform_ref(g: &[[f32; 3]; 3]) -> [[f32; 8]; 8] {
    transposed_f32(&sandwich(&G, &to_f64(g)))
}

/// Direct valid 3×3 correlation of an 8×8 patch (no flip, no padding).
pub fn conv3x3_valid_ref(x: &[[f32; 8]; 8], g: &[[f32; 3]; 3]) -> [[f32; 6]; 6] {
    let mut out = [[0.0f32; 6]; 6];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, o) in row.iter_mut().enumerate() {
            let mut s = 0.0f64;
            for a in 0..3 {
                for b in 0..3 {
                    s += x[i + a][j + b] as f64 * g[a][b] as f64;
                }
            }
            *o = s as f32;
        }
    }
    out
}
