use std::f64::consts::PI;
use ndarray as nd;
use shenpoisson::{
    basis::Basis,
    family::Family,
    mesh,
    operator,
    solve::{ self, Poisson },
    utils::max_abs_diff,
    GalerkinError,
};

fn u_exact(x: f64) -> f64 { (PI * x).sin() * (1.0 - x * x) }

// d²/dx² [sin(π x) (1 - x²)]
fn f_exact(x: f64) -> f64 {
    -(PI * PI * (1.0 - x * x) + 2.0) * (PI * x).sin()
        - 4.0 * PI * x * (PI * x).cos()
}

// run every stage by hand, as an external driver would
fn pipeline(family: Family, n: usize) -> Result<(nd::Array1<f64>, nd::Array1<f64>), GalerkinError> {
    let basis = Basis::new(family, n)?;
    let x = basis.mesh().clone();
    let fj = x.mapv(f_exact);
    let mut f_hat = basis.scalar_product(&fj)?;
    if family == Family::Legendre { f_hat *= -1.0; }
    let op = operator::assemble(family, n)?;
    let u_hat = solve::solve(&op, &f_hat)?;
    let u = basis.backward(&u_hat)?;
    Ok((x, u))
}

#[test]
fn chebyshev_end_to_end() {
    let (x, u) = pipeline(Family::Chebyshev, 32).unwrap();
    assert_eq!(u.len(), 32);
    assert!(max_abs_diff(&u, &x.mapv(u_exact)) < 1e-6);
}

#[test]
fn legendre_end_to_end() {
    let (x, u) = pipeline(Family::Legendre, 32).unwrap();
    assert_eq!(u.len(), 32);
    assert!(max_abs_diff(&u, &x.mapv(u_exact)) < 1e-6);
}

#[test]
fn pipeline_matches_poisson_driver() {
    for family in Family::ALL {
        let (_, u) = pipeline(family, 20).unwrap();
        let sol = Poisson::new(family, 20).unwrap().solve(f_exact).unwrap();
        assert!(max_abs_diff(&u, &sol.u) < 1e-14);
    }
}

#[test]
fn size_two_is_invalid_everywhere() {
    for family in Family::ALL {
        assert!(matches!(mesh::generate(family, 2), Err(GalerkinError::InvalidSize(_))));
        assert!(matches!(Basis::new(family, 2), Err(GalerkinError::InvalidSize(_))));
        assert!(matches!(operator::assemble(family, 2), Err(GalerkinError::InvalidSize(_))));
        assert!(matches!(Poisson::new(family, 2), Err(GalerkinError::InvalidSize(_))));
    }
}

#[test]
fn smallest_size_solves() {
    // n = 3 keeps a single mode φ[0]; u = 1 - x² is exactly representable for
    // both families, up to normalization
    for family in Family::ALL {
        let sol = Poisson::new(family, 3).unwrap().solve(|_| -2.0).unwrap();
        assert!(sol.max_error(|x| 1.0 - x * x) < 1e-12, "{}", family);
    }
}

#[test]
fn error_decays_spectrally() {
    for family in Family::ALL {
        let err = |n: usize| {
            Poisson::new(family, n).unwrap().solve(f_exact).unwrap().max_error(u_exact)
        };
        let (e8, e16, e24) = (err(8), err(16), err(24));
        assert!(e16 < 1e-2 * e8, "{}: {:e} {:e}", family, e8, e16);
        assert!(e24 < 1e-10, "{}: {:e}", family, e24);
    }
}

#[test]
fn repeated_solves_are_identical() {
    for family in Family::ALL {
        let poisson = Poisson::new(family, 32).unwrap();
        let a = poisson.solve(f_exact).unwrap();
        let b = poisson.solve(f_exact).unwrap();
        assert_eq!(a.u_hat, b.u_hat);
        assert_eq!(a.u, b.u);
    }
}
