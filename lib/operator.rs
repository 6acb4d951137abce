//! Assembly of the discrete Laplacian as an inner-product matrix between test
//! and trial basis functions.
//!
//! All entries are taken from closed forms:
//! ```text
//! Legendre:  A[k, j] = (φ[j]', φ[k]')    = (4 k + 6) δ[j, k]
//!
//! Chebyshev: A[k, j] = (φ[j]'', φ[k])_w  = -2 π (k + 1) (k + 2)  j = k
//!                                           -4 π (k + 1)          j = k + 2, k + 4, ...
//!                                           0                     otherwise
//! ```
//! See [`docs`][crate::docs#operators] for derivations.

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    error::{ GResult, SizeError },
    family::Family,
};

/// Sparsity pattern of an assembled operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Structure {
    /// Symmetric positive definite (gradient-gradient form); for the Legendre
    /// Shen basis the matrix is in fact diagonal.
    SymmetricPositiveDefinite,
    /// Upper triangular, with non-zero entries only on the main diagonal and on
    /// every second superdiagonal (direct second-derivative form).
    UpperEvenBands,
}

impl Structure {
    /// Return `true` if the entry at `(k, j)` may be non-zero.
    pub fn in_pattern(&self, k: usize, j: usize) -> bool {
        match self {
            Self::SymmetricPositiveDefinite => k == j,
            Self::UpperEvenBands => j >= k && (j - k) % 2 == 0,
        }
    }
}

/// The assembled weak-form Laplacian for a Shen-Dirichlet basis.
///
/// The matrix is `n × n`, with the rows and columns of the two eliminated modes
/// set to zero. Only [`assemble`] constructs values of this type, so the
/// matrix always matches its [`Structure`].
#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    family: Family,
    n: usize,
    structure: Structure,
    A: nd::Array2<f64>,
}

impl Operator {
    /// Get the parent polynomial family.
    pub fn family(&self) -> Family { self.family }

    /// Get the size of the basis the operator was assembled for.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the sparsity pattern of the matrix.
    pub fn structure(&self) -> Structure { self.structure }

    /// Get a reference to the full `n × n` matrix.
    pub fn matrix(&self) -> &nd::Array2<f64> { &self.A }

    /// Get a view of the `(n - 2) × (n - 2)` block acting on retained modes.
    pub fn retained(&self) -> nd::ArrayView2<'_, f64> {
        let m = self.n - 2;
        self.A.slice(nd::s![..m, ..m])
    }

    /// Return the number of structurally non-zero entries.
    pub fn nnz(&self) -> usize {
        let m = self.n - 2;
        (0..m)
            .map(|k| (0..m).filter(|j| self.structure.in_pattern(k, *j)).count())
            .sum()
    }
}

/// Assemble the weak-form Laplacian for a basis of size `n`.
///
/// Fails with [`GalerkinError::InvalidSize`][crate::error::GalerkinError] if
/// `n < 3`.
///
/// ```
/// use shenpoisson::{ family::Family, operator };
///
/// let A = operator::assemble(Family::Legendre, 5).unwrap();
/// assert_eq!(A.matrix()[[0, 0]], 6.0);
/// assert_eq!(A.matrix()[[2, 2]], 14.0);
/// assert_eq!(A.matrix()[[3, 3]], 0.0);
/// ```
pub fn assemble(family: Family, n: usize) -> GResult<Operator> {
    SizeError::check(n)?;
    let (structure, A)
        = match family {
            Family::Chebyshev => (Structure::UpperEvenBands, chebyshev_stiffness(n)),
            Family::Legendre => (Structure::SymmetricPositiveDefinite, legendre_stiffness(n)),
        };
    log::debug!(
        "operator::assemble: {} operator of size {} ({:?})", family, n, structure);
    Ok(Operator { family, n, structure, A })
}

// φ[k]' = -(2 k + 3) L[k + 1] and ‖L[k + 1]‖² = 2 / (2 k + 3)
fn legendre_stiffness(n: usize) -> nd::Array2<f64> {
    let mut A: nd::Array2<f64> = nd::Array2::zeros((n, n));
    A.slice_mut(nd::s![..n - 2, ..n - 2]).diag_mut()
        .indexed_iter_mut()
        .for_each(|(k, akk)| { *akk = (4 * k + 6) as f64; });
    A
}

fn chebyshev_stiffness(n: usize) -> nd::Array2<f64> {
    let m = n - 2;
    let mut A: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for k in 0..m {
        let kf = k as f64;
        A[[k, k]] = -2.0 * PI * (kf + 1.0) * (kf + 2.0);
        for j in (k + 2..m).step_by(2) {
            A[[k, j]] = -4.0 * PI * (kf + 1.0);
        }
    }
    A
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::{ basis::Basis, error::GalerkinError, poly };

    #[test]
    fn legendre_is_symmetric() {
        for n in [3, 8, 32] {
            let A = assemble(Family::Legendre, n).unwrap();
            assert_eq!(A.matrix(), &A.matrix().t());
        }
    }

    #[test]
    fn zero_outside_pattern() {
        for family in Family::ALL {
            let n = 21;
            let A = assemble(family, n).unwrap();
            for ((k, j), akj) in A.matrix().indexed_iter() {
                if k >= n - 2 || j >= n - 2 || !A.structure().in_pattern(k, j) {
                    assert_eq!(*akj, 0.0, "{} ({}, {})", family, k, j);
                }
            }
        }
    }

    #[test]
    fn chebyshev_is_not_symmetric() {
        let A = assemble(Family::Chebyshev, 8).unwrap();
        assert_ne!(A.matrix()[[0, 2]], A.matrix()[[2, 0]]);
        assert_eq!(A.nnz(), 6 + 4 + 2);
    }

    #[test]
    fn assemble_is_idempotent() {
        for family in Family::ALL {
            let a = assemble(family, 32).unwrap();
            let b = assemble(family, 32).unwrap();
            assert_eq!(a, b);
            assert!(a.matrix().iter().zip(b.matrix()).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
    }

    #[test]
    fn too_small_is_invalid() {
        for family in Family::ALL {
            assert!(matches!(assemble(family, 2), Err(GalerkinError::InvalidSize(SizeError(2)))));
        }
    }

    // compare the closed forms against quadrature of the parent-space
    // derivatives, which is exact for these polynomial degrees
    fn brute_force(family: Family, n: usize) -> nd::Array2<f64> {
        let basis = Basis::new(family, n).unwrap();
        let x = basis.mesh();
        let w = basis.quadrature().weights();
        let m = n - 2;
        let phi = |k: usize| {
            let mut e: nd::Array1<f64> = nd::Array1::zeros(n);
            e[k] = 1.0;
            basis.to_parent(&e).unwrap()
        };
        let mut A: nd::Array2<f64> = nd::Array2::zeros((n, n));
        for k in 0..m {
            for j in 0..m {
                let (test, trial)
                    = match family {
                        Family::Legendre => (
                            poly::derivative(family, &phi(k)),
                            poly::derivative(family, &phi(j)),
                        ),
                        Family::Chebyshev => (
                            phi(k),
                            poly::derivative(family, &poly::derivative(family, &phi(j))),
                        ),
                    };
                let v: nd::Array1<f64> = x.mapv(|xi| poly::series(family, &test, xi));
                let u: nd::Array1<f64> = x.mapv(|xi| poly::series(family, &trial, xi));
                A[[k, j]] = (&v * &u).dot(w);
            }
        }
        A
    }

    #[test]
    fn closed_forms_match_quadrature() {
        for family in Family::ALL {
            for n in [3, 6, 13] {
                let A = assemble(family, n).unwrap();
                let B = brute_force(family, n);
                let scale = A.matrix().iter().fold(1.0_f64, |acc, a| acc.max(a.abs()));
                for (a, b) in A.matrix().iter().zip(&B) {
                    assert_abs_diff_eq!(*a, *b, epsilon = 1e-11 * scale);
                }
            }
        }
    }
}
