use crate::Utils::interp_task::InterpTask;
use crate::Utils::logger::{LogSettings, init_logger};
use crate::numerical::piecewise_render::{OutputFormat, RenderSettings};
use crate::numerical::spline_api::Spline;
use crate::numerical::spline_solver::{solve_hermite, solve_natural_cubic};
use std::error::Error;
use strum::IntoEnumIterator;

pub fn spline_examples(example: usize) -> Result<(), Box<dyn Error>> {
    match example {
        0 => {
            // natural cubic spline through 4 points, every output format
            init_logger(&LogSettings::default())?;
            let points = [(0.0, 0.0), (5.0, 2.0), (7.0, 1.0), (10.0, 0.0)];
            let coefficients = solve_natural_cubic(&points)?;
            println!("coefficients (a0, a1, a2, a3) per segment: {:?}", coefficients);
            let spline = Spline::natural_cubic(&points)?;
            let settings = RenderSettings {
                precision: Some(4),
                ..RenderSettings::default()
            };
            for format in OutputFormat::iter() {
                println!("\n{}:\n{}", format, spline.render(format, &settings)?);
            }
        }
        1 => {
            // Hermite spline, evaluated through its term tree
            let points = [(0.0, 0.0, 1.0), (5.0, 0.0, 0.0), (7.0, 1.0, 1.0)];
            println!("Hermite coefficients: {:?}", solve_hermite(&points)?);
            let spline = Spline::hermite(&points)?;
            let term = spline.to_term("x")?;
            println!("tree: {}", term.simplify());
            let f = term.lambdify1D()?;
            for x in [0.0, 2.5, 5.0, 6.0, 7.0] {
                println!("f({}) = {}", x, f(x)?);
            }
            // outside of [0, 7]
            if let Err(e) = f(7.5) {
                println!("f(7.5): {}", e);
            }
        }
        2 => {
            // the same job described by a task document
            let task: InterpTask = "\
interpolation
method: cubic
x: -2, 0, 1.5, 4
y: 1, 3, 0, 2
output
format: pgf
samples: 60
precision: 3
logging
level: debug
"
            .parse()?;
            init_logger(&task.logging)?;
            println!("{}", task.run()?);
        }
        3 => {
            // dense samples for an external plotting tool
            let spline = Spline::natural_cubic(&[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (3.0, 0.0)])?;
            let (x, y) = spline.sample_grid(13)?;
            for (xi, yi) in x.iter().zip(y.iter()) {
                println!("{:>6.3} {:>8.4}", xi, yi);
            }
        }
        _ => println!("no example with number {}", example),
    }
    Ok(())
}
