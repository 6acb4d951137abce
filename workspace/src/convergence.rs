use std::f64::consts::PI;
use ndarray as nd;
use shenpoisson::{ family::Family, solve::Poisson };

// spectral convergence of the manufactured solution for both families

fn u(x: f64) -> f64 { (PI * x).sin() * (1.0 - x * x) }

fn f(x: f64) -> f64 {
    -(PI * PI * (1.0 - x * x) + 2.0) * (PI * x).sin()
        - 4.0 * PI * x * (PI * x).cos()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let sizes: nd::Array1<usize> = (2..=10).map(|k| 4 * k).collect();
    println!("{:>4} {:>12} {:>12}", "n", "chebyshev", "legendre");
    for &n in sizes.iter() {
        let errs: Vec<f64>
            = Family::ALL.iter()
            .map(|family| {
                Poisson::new(*family, n)
                    .and_then(|poisson| poisson.solve(f))
                    .map(|sol| sol.max_error(u))
            })
            .collect::<Result<_, _>>()?;
        println!("{:>4} {:>12.3e} {:>12.3e}", n, errs[0], errs[1]);
    }
    Ok(())
}
