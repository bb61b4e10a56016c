//! Polynomial coefficient formatting.
//!
//! Coefficients always come in ascending powers: `coefs[k]` multiplies `indeterminate^k`.
//! The same routine serves every text notation; only the template differs.

use crate::symbolic::term_engine::Term;
use crate::symbolic::term_render::format_number;

/// How a single monomial `coef·indeterminate^power` is written.
/// The constant term (power 0) is written as the bare signed coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialTemplate {
    pub indeterminate: String,
    /// between coefficient and indeterminate: "" (juxtaposition) or "*"
    pub times: String,
    pub power_open: String,
    pub power_close: String,
    /// decimals of every number, shortest representation when None
    pub precision: Option<usize>,
}

impl PolynomialTemplate {
    /// `1+2x^1+3x^2`
    pub fn plain(indeterminate: &str) -> Self {
        PolynomialTemplate {
            indeterminate: indeterminate.to_string(),
            times: String::new(),
            power_open: "^".to_string(),
            power_close: String::new(),
            precision: None,
        }
    }

    /// `1+2x^{1}+3x^{2}`
    pub fn latex(indeterminate: &str) -> Self {
        PolynomialTemplate {
            power_open: "^{".to_string(),
            power_close: "}".to_string(),
            ..Self::plain(indeterminate)
        }
    }

    /// `1+2*x^1+3*x^2`
    pub fn geogebra(indeterminate: &str) -> Self {
        PolynomialTemplate {
            times: "*".to_string(),
            ..Self::plain(indeterminate)
        }
    }

    /// pgfmath needs explicit products as well: `1+2*\x^1`
    pub fn pgf(indeterminate: &str) -> Self {
        Self::geogebra(indeterminate)
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    fn coefficient(&self, value: f64, leading: bool) -> String {
        let text = format_number(value, self.precision);
        if leading || value < 0.0 {
            text
        } else {
            format!("+{}", text)
        }
    }
}

/// Textual polynomial: zero coefficients are skipped, every term after the first carries an
/// explicit sign, and the power of each term is its index in `coefs`.
/// An all-zero polynomial is written `0`.
///
/// ```rust, ignore
/// let t = PolynomialTemplate::plain("x");
/// assert_eq!(polynomial_text(&[1.0, 2.0, 3.0], &t), "1+2x^1+3x^2");
/// assert_eq!(polynomial_text(&[0.0, -2.0], &t), "-2x^1");
/// ```
pub fn polynomial_text(coefs: &[f64], template: &PolynomialTemplate) -> String {
    let mut out = String::new();
    for (power, &coef) in coefs.iter().enumerate() {
        if coef == 0.0 {
            continue;
        }
        let coef_text = template.coefficient(coef, out.is_empty());
        if power == 0 {
            out.push_str(&coef_text);
        } else {
            out.push_str(&format!(
                "{}{}{}{}{}{}",
                coef_text,
                template.times,
                template.indeterminate,
                template.power_open,
                power,
                template.power_close
            ));
        }
    }
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// `x` for a zero shift, `(x-5)` or `(x+2)` otherwise
pub fn shifted_indeterminate(variable: &str, shift: f64, precision: Option<usize>) -> String {
    if shift == 0.0 {
        variable.to_string()
    } else if shift > 0.0 {
        format!("({}-{})", variable, format_number(shift, precision))
    } else {
        format!("({}+{})", variable, format_number(-shift, precision))
    }
}

/// Tree shape of the polynomial: `Sum(Scale(Scalar(c_k), Power(indeterminate, Scalar(k))))`.
/// Zero coefficients are kept; `simplify` removes them.
pub fn polynomial_term(coefs: &[f64], indeterminate: &Term) -> Term {
    Term::sum(
        coefs
            .iter()
            .enumerate()
            .map(|(power, &coef)| {
                Term::scale(
                    Term::scalar(coef),
                    Term::power(indeterminate.clone(), Term::scalar(power as f64)),
                )
            })
            .collect(),
    )
}
