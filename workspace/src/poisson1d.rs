use std::f64::consts::PI;
use anyhow::{ bail, Context };
use shenpoisson::{ family::Family, solve::Poisson };

// solve u'' = f with u(±1) = 0 for the manufactured solution
//   u(x) = sin(π x) (1 - x²)
// usage: poisson1d [chebyshev|legendre]

const N: usize = 32;
const TOL: f64 = 1e-6;

fn u(x: f64) -> f64 { (PI * x).sin() * (1.0 - x * x) }

fn f(x: f64) -> f64 {
    -(PI * PI * (1.0 - x * x) + 2.0) * (PI * x).sin()
        - 4.0 * PI * x * (PI * x).cos()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let family: Family
        = match std::env::args().nth(1) {
            Some(name) => name.parse()?,
            None => Family::Chebyshev,
        };

    let poisson = Poisson::new(family, N)
        .with_context(|| format!("failed to set up {} problem", family))?;
    let sol = poisson.solve(f)
        .with_context(|| format!("failed to solve {} problem", family))?;

    let err = sol.max_error(u);
    log::info!("{} basis, n = {}", family, N);
    println!("{:e}", err);
    if err > TOL {
        bail!("max error {:e} exceeds tolerance {:e}", err, TOL);
    }
    Ok(())
}
