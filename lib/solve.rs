//! Direct solution of the Galerkin system and the full Poisson pipeline.
//!
//! ```
//! use std::f64::consts::PI;
//! use shenpoisson::{ family::Family, solve::Poisson };
//!
//! // u = sin(π x), u'' = -π² sin(π x)
//! let poisson = Poisson::new(Family::Chebyshev, 24).unwrap();
//! let sol = poisson.solve(|x| -PI * PI * (PI * x).sin()).unwrap();
//! assert!(sol.max_error(|x| (PI * x).sin()) < 1e-8);
//! ```

use ndarray as nd;
use ndarray_linalg::{ self as la, FactorizeC, SolveC };
use crate::{
    Arr1,
    basis::Basis,
    error::{ DimensionError, GalerkinError, GResult },
    family::Family,
    operator::{ self, Operator, Structure },
    utils::max_abs_diff,
    DEF_PIVOT_TOL,
};

// fail if any pivot is small relative to the largest one
fn check_pivots<'a, I>(pivots: I) -> GResult<()>
where I: Iterator<Item = &'a f64> + Clone
{
    let scale = pivots.clone().fold(0.0_f64, |acc, p| acc.max(p.abs()));
    pivots.enumerate()
        .find(|(_, p)| !(p.abs() > DEF_PIVOT_TOL * scale))
        .map_or(Ok(()), |(index, p)| {
            Err(GalerkinError::SingularOperator { index, value: p.abs() })
        })
}

// Cholesky factorization of the retained block; LAPACK reports a non-positive
// leading minor as a failed factorization, which we take as singularity
fn solve_cholesky(A: nd::ArrayView2<f64>, f: nd::ArrayView1<f64>)
    -> GResult<nd::Array1<f64>>
{
    let factorized
        = A.factorizec(la::UPLO::Lower)
        .map_err(|err| {
            log::debug!("solve::solve_cholesky: factorization failed: {}", err);
            GalerkinError::SingularOperator { index: 0, value: 0.0 }
        })?;
    check_pivots(factorized.factor.diag().iter())?;
    Ok(factorized.solvec(&f)?)
}

// back-substitution for the upper triangular, even-banded pattern
//
// every row of the pattern holds a single constant value a[k] = A[k, k + 2]
// right of the diagonal, so
//   u[k] = (f[k] - a[k] Σ_i u[k + 2 i]) / A[k, k]
// with the sums carried separately for even and odd k
fn solve_upper_even(A: nd::ArrayView2<f64>, f: nd::ArrayView1<f64>)
    -> GResult<nd::Array1<f64>>
{
    let m = f.len();
    check_pivots(A.diag().iter())?;
    let mut u: nd::Array1<f64> = nd::Array1::zeros(m);
    let mut sums = [0.0_f64; 2];
    for k in (0..m).rev() {
        let off = if k + 2 < m { A[[k, k + 2]] } else { 0.0 };
        u[k] = (f[k] - off * sums[k % 2]) / A[[k, k]];
        sums[k % 2] += u[k];
    }
    Ok(u)
}

/// Solve `A u_hat = f_hat` for the spectral coefficients `u_hat`.
///
/// Only the retained `(n - 2) × (n - 2)` block is solved; the two eliminated
/// entries of the returned array are zero. The method follows the operator's
/// [`Structure`]: Cholesky factorization for symmetric positive definite
/// operators and O(n) back-substitution for upper even-banded ones.
///
/// Fails with [`GalerkinError::DimensionMismatch`] if `f_hat` does not have the
/// operator's length, and with [`GalerkinError::SingularOperator`] if a pivot
/// vanishes within [`DEF_PIVOT_TOL`] of the largest.
pub fn solve<S>(A: &Operator, f_hat: &Arr1<S>) -> GResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    DimensionError::check(A.len(), f_hat)?;
    let m = A.len() - 2;
    let f = f_hat.slice(nd::s![..m]);
    let u
        = match A.structure() {
            Structure::SymmetricPositiveDefinite
                => solve_cholesky(A.retained(), f)?,
            Structure::UpperEvenBands
                => solve_upper_even(A.retained(), f)?,
        };
    log::trace!("solve::solve: solved {} system of size {}", A.family(), m);
    let mut u_hat: nd::Array1<f64> = nd::Array1::zeros(A.len());
    u_hat.slice_mut(nd::s![..m]).assign(&u);
    Ok(u_hat)
}

/// A single solution of the Poisson problem.
///
/// This struct is usually only returned by [`Poisson::solve`]; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Quadrature points
    pub x: nd::Array1<f64>,
    /// Spectral coefficients
    pub u_hat: nd::Array1<f64>,
    /// Solution values at `x`
    pub u: nd::Array1<f64>,
}

impl Solution {
    /// Return the maximum absolute deviation from a reference solution at the
    /// quadrature points.
    pub fn max_error<F>(&self, u: F) -> f64
    where F: FnMut(f64) -> f64
    {
        max_abs_diff(&self.u, &self.x.mapv(u))
    }
}

/// Basis and operator for `u'' = f` on [-1, 1] with `u(±1) = 0`.
///
/// Values of this type are guaranteed to hold a basis and operator planned for
/// the same family and size.
#[derive(Clone, Debug)]
pub struct Poisson {
    basis: Basis,
    A: Operator,
}

impl Poisson {
    /// Plan the basis and assemble the operator for a given family and size.
    pub fn new(family: Family, n: usize) -> GResult<Self> {
        let basis = Basis::new(family, n)?;
        let A = operator::assemble(family, n)?;
        Ok(Self { basis, A })
    }

    /// Combine an existing basis and operator.
    ///
    /// Fails with [`GalerkinError::FamilyMismatch`] or
    /// [`GalerkinError::DimensionMismatch`] if they disagree.
    pub fn from_parts(basis: Basis, A: Operator) -> GResult<Self> {
        GalerkinError::check_family(basis.family(), A.family())?;
        DimensionError::check_sizes(basis.len(), A.len())?;
        Ok(Self { basis, A })
    }

    /// Get a reference to the basis.
    pub fn basis(&self) -> &Basis { &self.basis }

    /// Get a reference to the operator.
    pub fn operator(&self) -> &Operator { &self.A }

    /// Get the parent polynomial family.
    pub fn family(&self) -> Family { self.basis.family() }

    /// Form the right-hand side from forcing samples at the quadrature points,
    /// applying the family's [sign convention][Family::rhs_sign].
    pub fn rhs<S>(&self, f: &Arr1<S>) -> GResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        let mut f_hat = self.basis.scalar_product(f)?;
        f_hat *= self.family().rhs_sign();
        Ok(f_hat)
    }

    /// Solve for forcing samples given at the quadrature points.
    pub fn solve_samples<S>(&self, f: &Arr1<S>) -> GResult<Solution>
    where S: nd::Data<Elem = f64>
    {
        let f_hat = self.rhs(f)?;
        let u_hat = solve(&self.A, &f_hat)?;
        let u = self.basis.backward(&u_hat)?;
        Ok(Solution { x: self.basis.mesh().clone(), u_hat, u })
    }

    /// Solve for a forcing function, evaluated once at every quadrature point.
    pub fn solve<F>(&self, f: F) -> GResult<Solution>
    where F: FnMut(f64) -> f64
    {
        let fj = self.basis.mesh().mapv(f);
        self.solve_samples(&fj)
    }
}
