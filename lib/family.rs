//! Selection of the parent polynomial family.

use std::{ fmt, str::FromStr };
use crate::error::FamilyError;

/// Parent orthogonal polynomials of a Shen-Dirichlet basis.
///
/// The family fixes the quadrature rule, the basis polynomials, and the weak
/// form of the Laplacian:
///
/// | family    | weight        | weak form             | rhs sign |
/// |-----------|---------------|-----------------------|----------|
/// | Chebyshev | 1 / √(1 - x²) | (u'', v)_w = (f, v)_w | +        |
/// | Legendre  | 1             | (u', v') = -(f, v)    | -        |
///
/// Names parse case-insensitively:
/// ```
/// use shenpoisson::family::Family;
///
/// let family: Family = "Legendre".parse().unwrap();
/// assert_eq!(family, Family::Legendre);
/// assert!("hermite".parse::<Family>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Chebyshev polynomials of the first kind, *T*<sub>*k*</sub>.
    Chebyshev,
    /// Legendre polynomials, *L*<sub>*k*</sub>.
    Legendre,
}

impl Family {
    /// All supported families.
    pub const ALL: [Self; 2] = [Self::Chebyshev, Self::Legendre];

    /// Return `true` if `self` is `Chebyshev`.
    pub fn is_chebyshev(&self) -> bool { matches!(self, Self::Chebyshev) }

    /// Return `true` if `self` is `Legendre`.
    pub fn is_legendre(&self) -> bool { matches!(self, Self::Legendre) }

    /// Sign applied to the scalar product of the forcing function to form the
    /// right-hand side of the weak form.
    ///
    /// The Legendre form is obtained by integrating the Laplacian by parts, so
    /// it represents `-u''` and the right-hand side must be negated.
    pub fn rhs_sign(&self) -> f64 {
        match self {
            Self::Chebyshev => 1.0,
            Self::Legendre => -1.0,
        }
    }

    /// Lower-case name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chebyshev => "chebyshev",
            Self::Legendre => "legendre",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chebyshev" => Ok(Self::Chebyshev),
            "legendre" => Ok(Self::Legendre),
            _ => Err(FamilyError(s.to_string())),
        }
    }
}
