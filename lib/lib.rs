#![allow(non_snake_case)]

//! Provides a spectral-Galerkin solver for the one-dimensional Poisson
//! equation with homogeneous Dirichlet boundary conditions,
//! ```text
//! u''(x) = f(x),  x ∊ [-1, 1],  u(±1) = 0
//! ```
//! using Shen's boundary-satisfying bases[^1] built from either Chebyshev or
//! Legendre polynomials.
//!
//! The solution pipeline is split into the following components:
//! - [`mesh`]: Gauss quadrature points and weights for each family
//! - [`basis`]: Shen-Dirichlet bases with forward/backward transforms
//! - [`operator`]: closed-form assembly of the weak-form Laplacian
//! - [`solve`]: structured direct solvers, plus the [`Poisson`][solve::Poisson]
//!   driver tying everything together
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: J. Shen, "Efficient spectral-Galerkin method I. Direct solvers of
//! second- and fourth-order equations using Legendre polynomials." SIAM J.
//! Sci. Comput. **15**, 1489 (1994); J. Shen, "Efficient spectral-Galerkin
//! method II. Direct solvers of second- and fourth-order equations using
//! Chebyshev polynomials." SIAM J. Sci. Comput. **16**, 74 (1995).

pub mod error;
pub mod family;
pub mod poly;
pub mod mesh;
pub mod basis;
pub mod operator;
pub mod solve;
pub mod utils;

pub mod docs;

/// Relative magnitude below which a solver pivot is taken to be zero.
pub const DEF_PIVOT_TOL: f64 = 1e-13;
pub(crate) const DEF_NEWTON_ITERS: usize = 10;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use error::{ GalerkinError, GResult };
pub use family::Family;
