#![allow(non_snake_case)]
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use std::fmt;

///////////////////////////////////////////////
///  TRIDIAGONAL LINEAR SYSTEMS
////////////////////////////////////////////////
/// Banded system with one sub- and one super-diagonal stored as three vectors of length n.
///
/// Row i reads `sub[i]*x[i-1] + main[i]*x[i] + sup[i]*x[i+1] = rhs[i]`,
/// so `sub[0]` and `sup[n-1]` lie outside the matrix and are ignored.
///```text
///  │ m0 s0  0  0 │   │x0│   │r0│
///  │ b1 m1 s1  0 │ × │x1│ = │r1│
///  │  0 b2 m2 s2 │   │x2│   │r2│
///  │  0  0 b3 m3 │   │x3│   │r3│
///```
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    pub sub: DVector<f64>,
    pub main: DVector<f64>,
    pub sup: DVector<f64>,
    pub rhs: DVector<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TridiagonalError {
    DimensionMismatch { expected: usize, got: usize },
    ZeroPivot { row: usize },
}

impl fmt::Display for TridiagonalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TridiagonalError::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected vectors of length {}, got {}",
                expected, got
            ),
            TridiagonalError::ZeroPivot { row } => {
                write!(f, "Zero pivot encountered at row {} during elimination", row)
            }
        }
    }
}

impl std::error::Error for TridiagonalError {}

impl TridiagonalSystem {
    /// n×n system with every entry and the right-hand side set to zero
    pub fn zeros(n: usize) -> Self {
        TridiagonalSystem {
            sub: DVector::zeros(n),
            main: DVector::zeros(n),
            sup: DVector::zeros(n),
            rhs: DVector::zeros(n),
        }
    }

    pub fn new(
        sub: DVector<f64>,
        main: DVector<f64>,
        sup: DVector<f64>,
        rhs: DVector<f64>,
    ) -> Result<Self, TridiagonalError> {
        let n = main.len();
        for len in [sub.len(), sup.len(), rhs.len()] {
            if len != n {
                return Err(TridiagonalError::DimensionMismatch {
                    expected: n,
                    got: len,
                });
            }
        }
        Ok(TridiagonalSystem { sub, main, sup, rhs })
    }

    pub fn size(&self) -> usize {
        self.main.len()
    }

    /// sets the three band entries of row i and its right-hand side
    pub fn set_row(&mut self, i: usize, sub: f64, main: f64, sup: f64, rhs: f64) {
        self.sub[i] = sub;
        self.main[i] = main;
        self.sup[i] = sup;
        self.rhs[i] = rhs;
    }

    /// expands the band storage into a full matrix (diagnostics and tests)
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.size();
        let mut A = DMatrix::zeros(n, n);
        for i in 0..n {
            A[(i, i)] = self.main[i];
            if i > 0 {
                A[(i, i - 1)] = self.sub[i];
            }
            if i + 1 < n {
                A[(i, i + 1)] = self.sup[i];
            }
        }
        A
    }

    /// |main[i]| >= |sub[i]| + |sup[i]| on every row
    pub fn is_diagonally_dominant(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            let off_sub = if i > 0 { self.sub[i].abs() } else { 0.0 };
            let off_sup = if i + 1 < n { self.sup[i].abs() } else { 0.0 };
            self.main[i].abs() >= off_sub + off_sup
        })
    }

    /// A·x - rhs
    pub fn residual(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.size();
        DVector::from_fn(n, |i, _| {
            let mut acc = self.main[i] * x[i];
            if i > 0 {
                acc += self.sub[i] * x[i - 1];
            }
            if i + 1 < n {
                acc += self.sup[i] * x[i + 1];
            }
            acc - self.rhs[i]
        })
    }

    /// Thomas algorithm: forward elimination without pivoting followed by back substitution.
    /// Adequate whenever the matrix is diagonally dominant.
    pub fn solve(&self) -> Result<DVector<f64>, TridiagonalError> {
        let n = self.size();
        if n == 0 {
            return Ok(DVector::zeros(0));
        }
        if !self.is_diagonally_dominant() {
            warn!("tridiagonal system of size {} is not diagonally dominant, elimination without pivoting may be inaccurate", n);
        }
        let mut c_prime = DVector::zeros(n);
        let mut d_prime = DVector::zeros(n);

        if self.main[0] == 0.0 {
            return Err(TridiagonalError::ZeroPivot { row: 0 });
        }
        c_prime[0] = self.sup[0] / self.main[0];
        d_prime[0] = self.rhs[0] / self.main[0];
        for i in 1..n {
            let pivot = self.main[i] - self.sub[i] * c_prime[i - 1];
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(TridiagonalError::ZeroPivot { row: i });
            }
            c_prime[i] = if i + 1 < n { self.sup[i] / pivot } else { 0.0 };
            d_prime[i] = (self.rhs[i] - self.sub[i] * d_prime[i - 1]) / pivot;
        }

        let mut x = DVector::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }
        debug!("tridiagonal solve of size {} done, residual norm = {:e}", n, self.residual(&x).norm());
        Ok(x)
    }
}
