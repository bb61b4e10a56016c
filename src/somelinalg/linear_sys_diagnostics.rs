#![allow(non_snake_case)]
use log::warn;
use nalgebra::{DMatrix, DVector};

/// A system of linear equations is said to be poorly conditioned if the solution is sensitive to small
/// changes in the input data. The condition number is the ratio of the largest singular value of the
/// matrix to the smallest one.
pub fn condition_number(A: &DMatrix<f64>) -> f64 {
    let singular_values = A.singular_values();
    if singular_values.is_empty() {
        return 1.0;
    }
    let max_sigma = singular_values.max();
    let min_sigma = singular_values.min();
    max_sigma / min_sigma
}

pub fn poorly_conditioned(A: &DMatrix<f64>, threshold: f64) -> bool {
    let condition_number = condition_number(A);
    let poorly_conditioned = !(condition_number <= threshold);
    if poorly_conditioned {
        warn!(
            "The system of linear equations is poorly conditioned. Condition number = {:.2}",
            condition_number
        );
    }
    poorly_conditioned
}

/// ||A·x - b||₂
pub fn residual_norm(A: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    (A * x - b).norm()
}

/// checks that a computed solution actually satisfies the system and that the matrix is not
/// ill-conditioned; returns false (and warns) otherwise
pub fn linear_system_diagnostics(
    A: &DMatrix<f64>,
    x: &DVector<f64>,
    b: &DVector<f64>,
    threshold: f64,
    tolerance: f64,
) -> bool {
    let residual = residual_norm(A, x, b);
    let scale = b.norm().max(1.0);
    let solved = residual <= tolerance * scale;
    if !solved {
        warn!(
            "Solution does not satisfy the system: residual norm = {:e} (tolerance {:e})",
            residual,
            tolerance * scale
        );
    }
    solved && !poorly_conditioned(A, threshold)
}
