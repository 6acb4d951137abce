//! Parent orthogonal polynomials: point evaluation, Vandermonde matrices, and
//! differentiation of expansions in coefficient space.
//!
//! Both families obey a three-term recurrence,
//! ```text
//! Chebyshev: T[k + 1](x) = 2 x T[k](x) - T[k - 1](x)
//! Legendre:  (k + 1) L[k + 1](x) = (2 k + 1) x L[k](x) - k L[k - 1](x)
//! ```
//! with `P[0] = 1` and `P[1] = x`.

use ndarray as nd;
use num_traits::Float;
use crate::{ Arr1, family::Family };

// one step of the family's recurrence, producing P[k + 1] from P[k], P[k - 1]
fn step<A: Float>(family: Family, k: usize, x: A, pk: A, pkm1: A) -> A {
    let two = A::one() + A::one();
    match family {
        Family::Chebyshev => two * x * pk - pkm1,
        Family::Legendre => {
            let kf = A::from(k).unwrap();
            ((two * kf + A::one()) * x * pk - kf * pkm1) / (kf + A::one())
        },
    }
}

/// Evaluate the `n`-th parent polynomial of `family` at `x`.
///
/// ```
/// use shenpoisson::{ family::Family, poly };
///
/// let x = 0.3_f64;
/// assert!((poly::eval(Family::Chebyshev, 2, x) - (2.0 * x * x - 1.0)).abs() < 1e-15);
/// assert!((poly::eval(Family::Legendre, 2, x) - (1.5 * x * x - 0.5)).abs() < 1e-15);
/// ```
pub fn eval<A: Float>(family: Family, n: usize, x: A) -> A {
    if n == 0 { return A::one(); }
    let mut pkm1 = A::one();
    let mut pk = x;
    for k in 1..n {
        let pkp1 = step(family, k, x, pk, pkm1);
        pkm1 = pk;
        pk = pkp1;
    }
    pk
}

/// Evaluate the Legendre polynomial `L[n]` together with its derivative.
///
/// The derivative is taken from `(x² - 1) L'[n] = n (x L[n] - L[n - 1])`,
/// falling back to the closed endpoint values `L'[n](±1) = (±1)^(n + 1) n (n +
/// 1) / 2`.
pub fn legendre_and_derivative<A: Float>(n: usize, x: A) -> (A, A) {
    if n == 0 { return (A::one(), A::zero()); }
    let mut pkm1 = A::one();
    let mut pk = x;
    for k in 1..n {
        let pkp1 = step(Family::Legendre, k, x, pk, pkm1);
        pkm1 = pk;
        pk = pkp1;
    }
    let nf = A::from(n).unwrap();
    let two = A::one() + A::one();
    let denom = x * x - A::one();
    let dpk
        = if denom.abs() < A::epsilon() {
            let end = nf * (nf + A::one()) / two;
            if x > A::zero() || n % 2 == 1 { end } else { -end }
        } else {
            nf * (x * pk - pkm1) / denom
        };
    (pk, dpk)
}

/// Return the Vandermonde matrix `V[j, k] = P[k](x[j])` for `k` in `0..m`.
pub fn vandermonde<S>(family: Family, x: &Arr1<S>, m: usize)
    -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let mut V: nd::Array2<f64> = nd::Array2::zeros((x.len(), m));
    for (mut row, &xj) in V.rows_mut().into_iter().zip(x) {
        let mut pkm1 = 1.0;
        let mut pk = xj;
        for (k, vjk) in row.iter_mut().enumerate() {
            match k {
                0 => { *vjk = 1.0; },
                1 => { *vjk = xj; },
                _ => {
                    let pkp1 = step(family, k - 1, xj, pk, pkm1);
                    pkm1 = pk;
                    pk = pkp1;
                    *vjk = pk;
                },
            }
        }
    }
    V
}

/// Evaluate the parent-polynomial series `Σ c[k] P[k](x)` at `x`.
pub fn series<S>(family: Family, c: &Arr1<S>, x: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let mut acc = 0.0;
    let mut pkm1 = 1.0;
    let mut pk = x;
    for (k, &ck) in c.iter().enumerate() {
        match k {
            0 => { acc += ck; },
            1 => { acc += ck * x; },
            _ => {
                let pkp1 = step(family, k - 1, x, pk, pkm1);
                pkm1 = pk;
                pk = pkp1;
                acc += ck * pk;
            },
        }
    }
    acc
}

/// Differentiate a parent-polynomial series in coefficient space.
///
/// The returned coefficients have the same length as `c`; the last entry is
/// always zero, since differentiation lowers the degree by one.
///
/// ```
/// use ndarray as nd;
/// use shenpoisson::{ family::Family, poly };
///
/// // d/dx T[3] = 3 U[2] = 3 T[0] + 6 T[2]
/// let dc = poly::derivative(Family::Chebyshev, &nd::array![0.0, 0.0, 0.0, 1.0]);
/// assert_eq!(dc, nd::array![3.0, 0.0, 6.0, 0.0]);
/// ```
pub fn derivative<S>(family: Family, c: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let n = c.len();
    let mut b: nd::Array1<f64> = nd::Array1::zeros(n);
    if n < 2 { return b; }
    match family {
        // b[k] = b[k + 2] + 2 (k + 1) c[k + 1], then halve b[0]
        Family::Chebyshev => {
            for k in (0..n - 1).rev() {
                let bkp2 = if k + 2 < n { b[k + 2] } else { 0.0 };
                b[k] = bkp2 + 2.0 * (k + 1) as f64 * c[k + 1];
            }
            b[0] *= 0.5;
        },
        // b[k] = (2 k + 1) Σ c[k + 1 + 2 i]
        Family::Legendre => {
            let mut sums = [0.0_f64; 2];
            for k in (0..n - 1).rev() {
                sums[k % 2] += c[k + 1];
                b[k] = (2 * k + 1) as f64 * sums[k % 2];
            }
        },
    }
    b
}

/// Weighted squared norm `(P[k], P[k])_w` of the `k`-th parent polynomial on
/// [-1, 1].
pub fn norm_sq(family: Family, k: usize) -> f64 {
    use std::f64::consts::PI;
    match family {
        Family::Chebyshev => if k == 0 { PI } else { PI / 2.0 },
        Family::Legendre => 2.0 / (2 * k + 1) as f64,
    }
}
