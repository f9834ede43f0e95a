//! Orthonormal 8x8 DCT-II and its inverse.
//!
//! Blocks are 64 `f64` in row-major order, `index = row * 8 + column`.
//! No level shift is applied, the DC term carries the plain block sum.

use std::f64::consts::PI;
use std::sync::OnceLock;

pub type Block = [f64; 64];

/// `COSINE[u][x] = cos((2x + 1) * u * PI / 16)`
static COSINE: OnceLock<[[f64; 8]; 8]> = OnceLock::new();

fn cosine_table() -> &'static [[f64; 8]; 8] {
    COSINE.get_or_init(|| {
        let mut table = [[0.0f64; 8]; 8];
        for (u, row) in table.iter_mut().enumerate() {
            for (x, c) in row.iter_mut().enumerate() {
                *c = ((2 * x + 1) as f64 * u as f64 * PI / 16.0).cos();
            }
        }
        table
    })
}

/// C(0) = 1/sqrt(8), C(u>0) = 1/2
#[inline]
fn norm(u: usize) -> f64 {
    if u == 0 {
        (0.125f64).sqrt()
    } else {
        0.5
    }
}

/// separable forward transform, rows first, then columns
pub fn forward(pixels: &Block) -> Block {
    let cos = cosine_table();

    let mut temp = [0.0f64; 64];
    for row in 0..8 {
        for u in 0..8 {
            let sum: f64 = (0..8).map(|x| pixels[row * 8 + x] * cos[u][x]).sum();
            temp[row * 8 + u] = norm(u) * sum;
        }
    }

    let mut coeffs = [0.0f64; 64];
    for col in 0..8 {
        for v in 0..8 {
            let sum: f64 = (0..8).map(|y| temp[y * 8 + col] * cos[v][y]).sum();
            coeffs[v * 8 + col] = norm(v) * sum;
        }
    }

    coeffs
}

/// separable inverse transform, columns first, then rows
pub fn inverse(coeffs: &Block) -> Block {
    let cos = cosine_table();

    let mut temp = [0.0f64; 64];
    for col in 0..8 {
        for y in 0..8 {
            let sum: f64 = (0..8).map(|v| norm(v) * coeffs[v * 8 + col] * cos[v][y]).sum();
            temp[y * 8 + col] = sum;
        }
    }

    let mut pixels = [0.0f64; 64];
    for row in 0..8 {
        for x in 0..8 {
            let sum: f64 = (0..8).map(|u| norm(u) * temp[row * 8 + u] * cos[u][x]).sum();
            pixels[row * 8 + x] = sum;
        }
    }

    pixels
}
