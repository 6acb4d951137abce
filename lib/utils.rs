//! Miscellaneous tools.

use std::f64::consts::PI;
use ndarray::{ self as nd, Ix1 };
use rustfft as fft;
use num_complex::Complex64 as C64;

/// Perform the unnormalized type-II discrete cosine transform,
/// ```text
/// X[k] = Σ_j x[j] cos(π k (2 j + 1) / 2 n)
/// ```
///
/// The transform is computed from a complex FFT of length `2 n` of the
/// even extension `[x, reverse(x)]`.
pub fn dct2<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let n: usize = x.len();
    let mut buf: Vec<C64>
        = x.iter().chain(x.iter().rev())
        .map(|xk| C64::from(*xk))
        .collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(2 * n);
    fft_plan.process(&mut buf);
    buf.iter().take(n).enumerate()
        .map(|(k, yk)| {
            let shift = C64::from_polar(0.5, -PI * k as f64 / (2 * n) as f64);
            (shift * yk).re
        })
        .collect()
}

/// Perform the unnormalized type-III discrete cosine transform,
/// ```text
/// x[j] = Σ_k X[k] cos(π k (2 j + 1) / 2 n)
/// ```
///
/// This is the transpose of [`dct2`], computed from a zero-padded inverse FFT
/// of length `2 n`.
pub fn dct3<S>(X: &nd::ArrayBase<S, Ix1>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let n: usize = X.len();
    let mut buf: Vec<C64>
        = X.iter().enumerate()
        .map(|(k, Xk)| C64::from_polar(*Xk, PI * k as f64 / (2 * n) as f64))
        .chain(std::iter::repeat(C64::from(0.0)).take(n))
        .collect();
    let mut plan = fft::FftPlanner::new();
    let ifft_plan = plan.plan_fft_inverse(2 * n);
    ifft_plan.process(&mut buf);
    buf.iter().take(n).map(|xj| xj.re).collect()
}

/// Return the largest absolute elementwise difference between two arrays.
///
/// *Panics if the arrays have different lengths*.
pub fn max_abs_diff<S, T>(a: &nd::ArrayBase<S, Ix1>, b: &nd::ArrayBase<T, Ix1>)
    -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(a.len(), b.len(), "max_abs_diff: arrays differ in length");
    nd::Zip::from(a).and(b)
        .fold(0.0_f64, |acc, ak, bk| acc.max((ak - bk).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cos_sum(x: &nd::Array1<f64>, k: usize, j: usize) -> f64 {
        let n = x.len();
        (PI * k as f64 * (2 * j + 1) as f64 / (2 * n) as f64).cos()
    }

    #[test]
    fn dct2_matches_direct_sum() {
        let x = nd::array![0.3, -1.2, 2.5, 0.0, 0.7, -0.4, 1.1];
        let X = dct2(&x);
        for k in 0..x.len() {
            let direct: f64
                = x.iter().enumerate()
                .map(|(j, xj)| xj * cos_sum(&x, k, j))
                .sum();
            assert_abs_diff_eq!(X[k], direct, epsilon = 1e-12);
        }
    }

    #[test]
    fn dct3_matches_direct_sum() {
        let X = nd::array![1.0, 0.5, -0.25, 2.0, 0.0, -1.5];
        let x = dct3(&X);
        for j in 0..X.len() {
            let direct: f64
                = X.iter().enumerate()
                .map(|(k, Xk)| Xk * cos_sum(&X, k, j))
                .sum();
            assert_abs_diff_eq!(x[j], direct, epsilon = 1e-12);
        }
    }

    #[test]
    fn max_abs_diff_picks_largest() {
        let a = nd::array![1.0, 2.0, 3.0];
        let b = nd::array![1.5, 2.0, 1.0];
        assert_eq!(max_abs_diff(&a, &b), 2.0);
    }
}
