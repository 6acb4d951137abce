//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Bases](#bases)
//! - [Quadrature](#quadrature)
//! - [Transforms](#transforms)
//! - [Operators](#operators)
//! - [Sign convention](#sign-convention)
//!
//! # Background
//! We want to solve the Poisson equation on the reference interval,
//! ```text
//! ∂²u
//! --- = f(x),  x ∊ [-1, 1],  u(-1) = u(1) = 0
//! ∂x²
//! ```
//! The spectral-Galerkin method[^1][^2] approximates *u* by a finite expansion
//! in global polynomials,
//! ```text
//!          n - 3
//! u(x) ≈    Σ    û[k] φ[k](x)
//!          k = 0
//! ```
//! where every φ\[*k*\] already satisfies the boundary conditions. The
//! differential equation is then required to hold only in a weak sense: its
//! residual must be orthogonal to every φ\[*k*\] under some weighted inner
//! product
//! ```text
//!            1
//! (u, v)_w = ∫ u(x) v(x) w(x) dx
//!           -1
//! ```
//! This produces a square linear system for the coefficients û, which can be
//! solved directly in spectral space.
//!
//! # Bases
//! Let *P*\[*k*\] be either the Chebyshev polynomials of the first kind
//! *T*\[*k*\] (orthogonal under *w*(*x*) = (1 - *x*²)<sup>-1/2</sup>) or the
//! Legendre polynomials *L*\[*k*\] (orthogonal under *w*(*x*) = 1). Both
//! satisfy *P*\[*k*\](±1) = (±1)<sup>*k*</sup>, so the combinations
//! ```text
//! φ[k](x) = P[k](x) - P[k + 2](x),  k = 0, ..., n - 3
//! ```
//! vanish at both endpoints. A basis of size *n* keeps the parent space's *n*
//! slots but only *n* - 2 independent functions; the last two spectral
//! coefficients are always zero.
//!
//! The weighted Gram ("mass") matrix follows from orthogonality of the parent
//! polynomials, with ‖*P*\[*k*\]‖² = (*P*\[*k*\], *P*\[*k*\])<sub>*w*</sub>:
//! ```text
//! (φ[k], φ[k])_w     = ‖P[k]‖² + ‖P[k + 2]‖²
//! (φ[k], φ[k + 2])_w = -‖P[k + 2]‖²
//!
//! Chebyshev: ‖T[0]‖² = π, ‖T[k]‖² = π/2 (k > 0)
//! Legendre:  ‖L[k]‖² = 2 / (2 k + 1)
//! ```
//! It is symmetric, positive definite, and pentadiagonal with empty odd
//! diagonals.
//!
//! # Quadrature
//! All inner products are evaluated with *n*-point Gauss quadrature for the
//! parent family's weight, which is exact for polynomials of degree up to
//! 2 *n* - 1.
//!
//! For Chebyshev, the Gauss points and weights are known in closed form:
//! ```text
//! x[j] = -cos(θ[j]),  θ[j] = π (2 j + 1) / 2 n,  w[j] = π / n
//! ```
//! For Legendre, they are computed with the Golub-Welsch algorithm: the points
//! are the eigenvalues of the symmetric tridiagonal Jacobi matrix associated
//! with the three-term recurrence,
//! ```text
//! J[k - 1, k] = J[k, k - 1] = k / √(4 k² - 1),  k = 1, ..., n - 1
//! ```
//! followed by a few Newton steps on *L*\[*n*\] to polish them to full machine
//! precision. The weights are then
//! ```text
//!                 2
//! w[j] = ---------------------
//!        (1 - x[j]²) L'[n](x[j])²
//! ```
//!
//! # Transforms
//! The *scalar product* maps physical samples *f*\[*j*\] = *f*(*x*\[*j*\]) to
//! ```text
//! s[k] = Σ_j w[j] f[j] φ[k](x[j]) ≈ (f, φ[k])_w
//! ```
//! which is the raw right-hand side of the Galerkin system. The *forward*
//! transform additionally solves the mass system *M* û = *s*, giving the
//! weighted least-squares projection of *f* onto the basis; this recovers û
//! exactly when *f* is itself a combination of the φ\[*k*\]. The *backward*
//! transform evaluates the expansion at the quadrature points.
//!
//! On the Gauss-Chebyshev mesh,
//! *T*\[*k*\](*x*\[*j*\]) = (-1)<sup>*k*</sup> cos(*k* *θ*\[*j*\]), so
//! ```text
//! (f, T[k])_w ≈ (-1)^k (π / n) Σ_j f[j] cos(π k (2 j + 1) / 2 n)   (DCT-II)
//! u[j] = Σ_k (-1)^k c[k] cos(π k (2 j + 1) / 2 n)                   (DCT-III)
//! ```
//! where *c* are the parent coefficients of the expansion. Both transforms are
//! evaluated with a complex FFT of length 2 *n*, for O(*n* log *n*) cost. The
//! Legendre transforms use a precomputed Vandermonde matrix.
//!
//! # Operators
//! For Legendre, integrating the Laplacian by parts (valid because the test
//! functions vanish at the boundary) gives the symmetric form
//! (*u*', *v*'). Using
//! ```text
//! L'[k + 2] - L'[k] = (2 k + 3) L[k + 1]  ⇒  φ[k]' = -(2 k + 3) L[k + 1]
//! ```
//! the operator is diagonal:
//! ```text
//! A[k, j] = (φ[j]', φ[k]') = (2 k + 3)² ‖L[k + 1]‖² δ[j, k] = (4 k + 6) δ[j, k]
//! ```
//! For Chebyshev, the weight's derivative makes integration by parts
//! inconvenient, so the Laplacian is applied directly to the trial function,
//! *A*\[*k*, *j*\] = (φ\[*j*\]'', φ\[*k*\])<sub>*w*</sub>. Expanding
//! ```text
//!             n - 2
//! T''[n] =      Σ       n (n² - m²) T[m] / c[m],   c[0] = 2, c[m > 0] = 1
//!          m ≡ n (mod 2)
//! ```
//! and projecting onto φ\[*k*\] gives
//! ```text
//!           | -2 π (k + 1) (k + 2)   j = k
//! A[k, j] = | -4 π (k + 1)           j = k + 2, k + 4, ...
//!           | 0                      otherwise
//! ```
//! which is upper triangular and non-zero only on even diagonals. Every row
//! has a single constant value right of the diagonal, so back-substitution
//! runs in O(*n*) by carrying running sums of the even- and odd-indexed
//! coefficients.
//!
//! # Sign convention
//! The two weak forms differ in sign:
//! ```text
//! Chebyshev: (u'', v)_w = (f, v)_w
//! Legendre:  (u', v')   = -(f, v)
//! ```
//! since (*u*', *v*') = -(*u*'', *v*) after integration by parts. The scalar
//! product of the forcing must therefore be negated before solving the
//! Legendre system; see [`Family::rhs_sign`][crate::family::Family::rhs_sign].
//!
//! [^1]: J. Shen, "Efficient spectral-Galerkin method I. Direct solvers of
//! second- and fourth-order equations using Legendre polynomials." SIAM J.
//! Sci. Comput. **15**, 1489 (1994).
//!
//! [^2]: J. Shen, "Efficient spectral-Galerkin method II. Direct solvers of
//! second- and fourth-order equations using Chebyshev polynomials." SIAM J.
//! Sci. Comput. **16**, 74 (1995).
