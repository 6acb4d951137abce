//! Shen-Dirichlet bases and their transforms between physical and spectral
//! space.
//!
//! Each basis function is a combination of two parent polynomials,
//! ```text
//! φ[k](x) = P[k](x) - P[k + 2](x),  k = 0, ..., n - 3
//! ```
//! which vanishes at both endpoints since `P[k](±1) = (±1)^k`. A basis of size
//! `n` therefore carries `n - 2` retained modes; spectral arrays still have
//! length `n`, with the two trailing (eliminated) entries held at zero.
//!
//! ```
//! use shenpoisson::{ basis::Basis, family::Family };
//!
//! let basis = Basis::new(Family::Chebyshev, 16).unwrap();
//! let u = basis.mesh().mapv(|x| (1.0 - x * x) * x);
//! let u_hat = basis.forward(&u).unwrap();
//! let u_back = basis.backward(&u_hat).unwrap();
//! assert!(u.iter().zip(&u_back).all(|(a, b)| (a - b).abs() < 1e-12));
//! ```

use ndarray as nd;
use ndarray_linalg::SolveC;
use crate::{
    Arr1,
    error::{ DimensionError, GResult },
    family::Family,
    mesh::{ self, Mesh },
    poly,
    utils::{ dct2, dct3 },
};

// precomputed data for evaluating parent polynomials on the mesh
#[derive(Clone, Debug)]
enum Plan {
    // T[k](x[j]) = (-1)^k cos(k θ[j]) on the Gauss-Chebyshev mesh, so both
    // transforms reduce to DCTs
    Dct,
    // V[j, k] = P[k](x[j])
    Vandermonde(nd::Array2<f64>),
}

/// A Shen-Dirichlet basis of size `n`, planned against its quadrature mesh.
#[derive(Clone, Debug)]
pub struct Basis {
    family: Family,
    n: usize,
    mesh: Mesh,
    plan: Plan,
    // weighted Gram matrix of the basis; zero outside the retained block
    mass: nd::Array2<f64>,
}

impl Basis {
    /// Plan a new basis of size `n`.
    ///
    /// Fails with [`GalerkinError::InvalidSize`][crate::error::GalerkinError]
    /// if `n < 3`.
    pub fn new(family: Family, n: usize) -> GResult<Self> {
        let mesh = mesh::generate(family, n)?;
        let plan
            = match family {
                Family::Chebyshev => Plan::Dct,
                Family::Legendre
                    => Plan::Vandermonde(poly::vandermonde(family, mesh.points(), n)),
            };
        let mass = mass_matrix(family, n);
        log::debug!("basis::Basis::new: planned {} basis of size {}", family, n);
        Ok(Self { family, n, mesh, plan, mass })
    }

    /// Get the parent polynomial family.
    pub fn family(&self) -> Family { self.family }

    /// Get the size of the basis, i.e. the length of all physical and spectral
    /// arrays it operates on.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the number of retained (non-boundary) modes, `n - 2`.
    pub fn num_retained(&self) -> usize { self.n - 2 }

    /// Get a reference to the quadrature points.
    pub fn mesh(&self) -> &nd::Array1<f64> { self.mesh.points() }

    /// Get a reference to the full quadrature mesh.
    pub fn quadrature(&self) -> &Mesh { &self.mesh }

    /// Get a reference to the weighted Gram matrix `M[k, j] = (φ[j], φ[k])_w`.
    ///
    /// The matrix is `n × n`, with the rows and columns of the two eliminated
    /// modes set to zero. Only the main diagonal and the diagonals at ±2 are
    /// non-zero.
    pub fn mass(&self) -> &nd::Array2<f64> { &self.mass }

    /// Convert Shen coefficients to coefficients of the parent polynomials.
    pub fn to_parent<S>(&self, u_hat: &Arr1<S>) -> GResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        DimensionError::check(self.n, u_hat)?;
        let mut c: nd::Array1<f64> = nd::Array1::zeros(self.n);
        for (k, &uk) in u_hat.iter().take(self.n - 2).enumerate() {
            c[k] += uk;
            c[k + 2] -= uk;
        }
        Ok(c)
    }

    // (f, P[k])_w for all k < n
    fn parent_scalar_product<S>(&self, f: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        match &self.plan {
            Plan::Dct => {
                let w = self.mesh.weights()[0];
                let mut t = dct2(f);
                t.iter_mut().enumerate()
                    .for_each(|(k, tk)| {
                        *tk *= if k % 2 == 0 { w } else { -w };
                    });
                t
            },
            Plan::Vandermonde(V) => {
                let wf: nd::Array1<f64> = f * self.mesh.weights();
                V.t().dot(&wf)
            },
        }
    }

    /// Compute the weighted scalar products `(f, φ[k])_w` of physical samples
    /// `f` against every retained basis function.
    ///
    /// This is the raw right-hand side of a Galerkin system; entries `n - 2`
    /// and `n - 1` are zero.
    pub fn scalar_product<S>(&self, f: &Arr1<S>) -> GResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        DimensionError::check(self.n, f)?;
        let t = self.parent_scalar_product(f);
        let mut s: nd::Array1<f64> = nd::Array1::zeros(self.n);
        s.iter_mut().take(self.n - 2).enumerate()
            .for_each(|(k, sk)| { *sk = t[k] - t[k + 2]; });
        Ok(s)
    }

    /// Transform physical samples to spectral coefficients by Galerkin
    /// projection.
    ///
    /// The scalar products are normalized by the basis' weighted Gram matrix,
    /// so that `backward(forward(f)) == f` whenever `f` lies in the span of the
    /// retained basis functions. Otherwise, the result is the weighted
    /// least-squares approximation of `f`.
    pub fn forward<S>(&self, f: &Arr1<S>) -> GResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        let s = self.scalar_product(f)?;
        let m = self.n - 2;
        let u: nd::Array1<f64>
            = self.mass.slice(nd::s![..m, ..m])
            .solvec(&s.slice(nd::s![..m]))?;
        let mut u_hat: nd::Array1<f64> = nd::Array1::zeros(self.n);
        u_hat.slice_mut(nd::s![..m]).assign(&u);
        Ok(u_hat)
    }

    /// Evaluate the expansion `Σ u_hat[k] φ[k]` at every mesh point.
    pub fn backward<S>(&self, u_hat: &Arr1<S>) -> GResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        let mut c = self.to_parent(u_hat)?;
        let u: nd::Array1<f64>
            = match &self.plan {
                Plan::Dct => {
                    c.iter_mut().skip(1).step_by(2).for_each(|ck| { *ck = -*ck; });
                    dct3(&c)
                },
                Plan::Vandermonde(V) => V.dot(&c),
            };
        Ok(u)
    }

    /// Evaluate the expansion `Σ u_hat[k] φ[k]` at arbitrary points.
    pub fn eval<S, T>(&self, u_hat: &Arr1<S>, x: &Arr1<T>)
        -> GResult<nd::Array1<f64>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        let c = self.to_parent(u_hat)?;
        Ok(x.mapv(|xk| poly::series(self.family, &c, xk)))
    }
}

// (φ[j], φ[k])_w = ‖P[k]‖² δ[j, k] + ‖P[k + 2]‖² δ[j, k] - ‖P[j + 2]‖² δ[j + 2, k]
//                  - ‖P[k + 2]‖² δ[j, k + 2]
fn mass_matrix(family: Family, n: usize) -> nd::Array2<f64> {
    let m = n - 2;
    let mut M: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for k in 0..m {
        let hkp2 = poly::norm_sq(family, k + 2);
        M[[k, k]] = poly::norm_sq(family, k) + hkp2;
        if k + 2 < m {
            M[[k, k + 2]] = -hkp2;
            M[[k + 2, k]] = -hkp2;
        }
    }
    M
}
