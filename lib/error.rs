//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;
use crate::family::Family;

/// Returned when a discretization has too few points to eliminate both
/// boundary modes and keep at least one interior mode.
#[derive(Debug, Error)]
#[error("discretization size must be at least 3; got {0}")]
pub struct SizeError(pub usize);

impl SizeError {
    pub(crate) fn check(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self(n))
    }
}

/// Returned when a physical or spectral array does not have the length of the
/// basis (or operator) it is used with.
#[derive(Debug, Error)]
#[error("encountered array with incompatible length; expected {expected}, got {got}")]
pub struct DimensionError {
    pub expected: usize,
    pub got: usize,
}

impl DimensionError {
    pub(crate) fn check<S, A>(expected: usize, a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let got = a.len();
        (got == expected).then_some(()).ok_or(Self { expected, got })
    }

    pub(crate) fn check_sizes(expected: usize, got: usize)
        -> Result<(), Self>
    {
        (got == expected).then_some(()).ok_or(Self { expected, got })
    }
}

/// Returned when a polynomial family name is not recognized.
#[derive(Debug, Error)]
#[error("unsupported polynomial family '{0}'; expected 'chebyshev' or 'legendre'")]
pub struct FamilyError(pub String);

/// Returned from all mesh, basis, operator, and solver functions.
#[derive(Debug, Error)]
pub enum GalerkinError {
    /// [`SizeError`]
    #[error("invalid size: {0}")]
    InvalidSize(#[from] SizeError),

    /// [`FamilyError`]
    #[error("{0}")]
    UnsupportedFamily(#[from] FamilyError),

    /// Returned when a pivot of the operator's factorization is zero within
    /// tolerance.
    #[error("operator is numerically singular: pivot {index} has magnitude {value:.3e}")]
    SingularOperator { index: usize, value: f64 },

    /// [`DimensionError`]
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] DimensionError),

    /// Returned when components planned for different polynomial families
    /// are combined.
    #[error("cannot combine a {0} basis with a {1} operator")]
    FamilyMismatch(Family, Family),

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl GalerkinError {
    pub(crate) fn check_family(basis: Family, operator: Family)
        -> Result<(), Self>
    {
        (basis == operator).then_some(())
            .ok_or(Self::FamilyMismatch(basis, operator))
    }
}

pub type GResult<T> = Result<T, GalerkinError>;
