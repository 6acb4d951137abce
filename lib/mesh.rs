//! Gauss quadrature meshes on the reference interval [-1, 1].
//!
//! ```
//! use shenpoisson::{ family::Family, mesh };
//!
//! // ∫ x² dx over [-1, 1]
//! let m = mesh::generate(Family::Legendre, 8).unwrap();
//! let integral: f64 = m.integrate(|x| x * x);
//! assert!((integral - 2.0 / 3.0).abs() < 1e-14);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::{
    error::{ GResult, SizeError },
    family::Family,
    poly,
    DEF_NEWTON_ITERS,
};

/// Quadrature points and weights for a given family and size.
///
/// Points are strictly increasing and all weights are strictly positive. Both
/// arrays have length `n`, and the rule integrates polynomials of degree up to
/// `2 n - 1` exactly against the family's weight function.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    family: Family,
    x: nd::Array1<f64>,
    w: nd::Array1<f64>,
}

impl Mesh {
    /// Get the family the mesh was generated for.
    pub fn family(&self) -> Family { self.family }

    /// Get a reference to the quadrature points.
    pub fn points(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the quadrature weights.
    pub fn weights(&self) -> &nd::Array1<f64> { &self.w }

    /// Get the number of points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Evaluate a function at every quadrature point.
    pub fn sample<F>(&self, f: F) -> nd::Array1<f64>
    where F: FnMut(f64) -> f64
    {
        self.x.mapv(f)
    }

    /// Approximate the weighted integral of `f` over [-1, 1].
    pub fn integrate<F>(&self, f: F) -> f64
    where F: FnMut(f64) -> f64
    {
        self.sample(f).dot(&self.w)
    }
}

/// Generate the quadrature mesh of size `n` for `family`.
///
/// Fails with [`GalerkinError::InvalidSize`][crate::error::GalerkinError] if
/// `n < 3`.
pub fn generate(family: Family, n: usize) -> GResult<Mesh> {
    SizeError::check(n)?;
    let (x, w)
        = match family {
            Family::Chebyshev => chebyshev_gauss(n),
            Family::Legendre => legendre_gauss(n)?,
        };
    log::debug!("mesh::generate: {} points for {} quadrature", n, family);
    Ok(Mesh { family, x, w })
}

/// Gauss-Chebyshev points `x[j] = -cos(π (2 j + 1) / 2 n)` with uniform weights
/// `π / n`.
pub fn chebyshev_gauss(n: usize) -> (nd::Array1<f64>, nd::Array1<f64>) {
    let x: nd::Array1<f64>
        = (0..n)
        .map(|j| -(PI * (2 * j + 1) as f64 / (2 * n) as f64).cos())
        .collect();
    let w: nd::Array1<f64> = nd::Array1::from_elem(n, PI / n as f64);
    (x, w)
}

/// Gauss-Legendre points and weights via the Golub-Welsch algorithm.
///
/// The points are the eigenvalues of the symmetric Jacobi matrix of the
/// Legendre recurrence,
/// ```text
/// J[k, k + 1] = J[k + 1, k] = k / √(4 k² - 1),  k = 1, ..., n - 1
/// ```
/// and are subsequently polished with a few Newton steps on `L[n]`. Weights are
/// then evaluated from `w[j] = 2 / ((1 - x[j]²) L'[n](x[j])²)`.
pub fn legendre_gauss(n: usize)
    -> GResult<(nd::Array1<f64>, nd::Array1<f64>)>
{
    let mut J: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for k in 1..n {
        let kf = k as f64;
        let beta = kf / (4.0 * kf * kf - 1.0).sqrt();
        J[[k - 1, k]] = beta;
        J[[k, k - 1]] = beta;
    }
    let (mut x, _): (nd::Array1<f64>, nd::Array2<f64>)
        = J.eigh_into(la::UPLO::Lower)?;
    let mut w: nd::Array1<f64> = nd::Array1::zeros(n);
    for (xj, wj) in x.iter_mut().zip(w.iter_mut()) {
        let mut converged = false;
        for _ in 0..DEF_NEWTON_ITERS {
            let (p, dp) = poly::legendre_and_derivative(n, *xj);
            let dx = p / dp;
            *xj -= dx;
            if dx.abs() <= f64::EPSILON * xj.abs().max(1.0) {
                converged = true;
                break;
            }
        }
        if !converged {
            log::trace!(
                "mesh::legendre_gauss: Newton polish of node {:.3e} reached \
                maxiters",
                xj,
            );
        }
        let (_, dp) = poly::legendre_and_derivative(n, *xj);
        *wj = 2.0 / ((1.0 - *xj * *xj) * dp * dp);
    }
    Ok((x, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::error::GalerkinError;

    fn check_ordering(m: &Mesh) {
        assert!(m.weights().iter().all(|wj| *wj > 0.0));
        assert!(m.points().iter().zip(m.points().iter().skip(1)).all(|(a, b)| a < b));
        assert!(m.points().iter().all(|xj| xj.abs() < 1.0));
    }

    #[test]
    fn too_small_is_invalid() {
        for family in Family::ALL {
            for n in 0..3 {
                assert!(matches!(generate(family, n), Err(GalerkinError::InvalidSize(_))));
            }
        }
    }

    #[test]
    fn points_increasing_weights_positive() {
        for family in Family::ALL {
            for n in [3, 4, 7, 16, 33] {
                let m = generate(family, n).unwrap();
                assert_eq!(m.len(), n);
                assert_eq!(m.family(), family);
                check_ordering(&m);
            }
        }
    }

    // ∫ x^p dx = 2 / (p + 1) for even p, 0 for odd p
    #[test]
    fn legendre_moments_exact() {
        for n in [3, 5, 12, 32] {
            let m = generate(Family::Legendre, n).unwrap();
            for p in 0..2 * n {
                let exact = if p % 2 == 0 { 2.0 / (p + 1) as f64 } else { 0.0 };
                assert_abs_diff_eq!(m.integrate(|x| x.powi(p as i32)), exact, epsilon = 1e-13);
            }
        }
    }

    // ∫ x^p / √(1 - x²) dx = π (p - 1)!! / p!! for even p, 0 for odd p
    #[test]
    fn chebyshev_moments_exact() {
        for n in [3, 6, 11, 32] {
            let m = generate(Family::Chebyshev, n).unwrap();
            let mut exact_even = PI;
            for p in 0..2 * n {
                let exact
                    = if p % 2 == 0 {
                        if p > 0 { exact_even *= (p - 1) as f64 / p as f64; }
                        exact_even
                    } else {
                        0.0
                    };
                assert_abs_diff_eq!(m.integrate(|x| x.powi(p as i32)), exact, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn legendre_known_nodes() {
        let (x, w) = legendre_gauss(3).unwrap();
        let r = (3.0_f64 / 5.0).sqrt();
        assert_abs_diff_eq!(x[0], -r, epsilon = 1e-15);
        assert_abs_diff_eq!(x[1], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(x[2], r, epsilon = 1e-15);
        assert_abs_diff_eq!(w[0], 5.0 / 9.0, epsilon = 1e-14);
        assert_abs_diff_eq!(w[1], 8.0 / 9.0, epsilon = 1e-14);
        assert_abs_diff_eq!(w[2], 5.0 / 9.0, epsilon = 1e-14);
    }

    #[test]
    fn regenerate_is_identical() {
        for family in Family::ALL {
            assert_eq!(generate(family, 20).unwrap(), generate(family, 20).unwrap());
        }
    }
}
