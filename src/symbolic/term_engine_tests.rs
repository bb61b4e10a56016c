//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::term_engine::Term;
    use crate::symbolic::term_lambdify::TermError;
    use crate::symbolic::term_render::{Notation, format_number};
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn x() -> Term {
        Term::variable("x")
    }

    fn bind(name: &str, value: f64) -> HashMap<String, f64> {
        let mut bindings = HashMap::new();
        bindings.insert(name.to_string(), value);
        bindings
    }

    #[test]
    fn test_builders() {
        assert_eq!(
            Term::add(x(), Term::scalar(1.0)),
            Term::Sum(vec![Term::Variable("x".to_string()), Term::Scalar(1.0)])
        );
        assert_eq!(
            Term::subtract(x(), Term::scalar(2.0)),
            Term::Sum(vec![
                Term::Variable("x".to_string()),
                Term::Negate(Box::new(Term::Scalar(2.0)))
            ])
        );
        assert!(matches!(
            Term::indicator(Term::scalar(0.0), Term::scalar(1.0), x()),
            Term::Indicator { closed: false, .. }
        ));
        assert!(matches!(
            Term::closed_indicator(Term::scalar(0.0), Term::scalar(1.0), x()),
            Term::Indicator { closed: true, .. }
        ));
    }

    #[test]
    fn test_builders_do_not_touch_operands() {
        let a = Term::scale(Term::scalar(2.0), x());
        let b = Term::negate(a.clone());
        let sum = Term::add(a.clone(), b.clone());
        assert_eq!(a, Term::scale(Term::scalar(2.0), x()));
        assert_eq!(sum, Term::Sum(vec![a, b]));
    }

    #[test]
    fn test_simplify_sums() {
        assert_eq!(Term::add(Term::scalar(0.0), x()).simplify(), x());
        assert_eq!(Term::add(x(), Term::scalar(0.0)).simplify(), x());
        assert_eq!(Term::sum(vec![]).simplify(), Term::scalar(0.0));
        assert_eq!(
            Term::sum(vec![Term::scalar(0.0), Term::scalar(-0.0)]).simplify(),
            Term::scalar(0.0)
        );
        assert_eq!(
            Term::sum(vec![x(), Term::scalar(0.0), Term::variable("y")]).simplify(),
            Term::sum(vec![x(), Term::variable("y")])
        );
    }

    #[test]
    fn test_simplify_products() {
        assert_eq!(Term::scale(Term::scalar(0.0), x()).simplify(), Term::scalar(0.0));
        assert_eq!(Term::scale(x(), Term::scalar(0.0)).simplify(), Term::scalar(0.0));
        assert_eq!(Term::scale(Term::scalar(1.0), x()).simplify(), x());
        assert_eq!(Term::scale(x(), Term::scalar(1.0)).simplify(), x());
        assert_eq!(
            Term::scale(Term::scalar(3.0), x()).simplify(),
            Term::scale(Term::scalar(3.0), x())
        );
    }

    #[test]
    fn test_simplify_powers() {
        assert_eq!(Term::power(x(), Term::scalar(0.0)).simplify(), Term::scalar(1.0));
        assert_eq!(Term::power(x(), Term::scalar(1.0)).simplify(), x());
        assert_eq!(Term::power(Term::scalar(0.0), x()).simplify(), Term::scalar(0.0));
        // the exponent rule wins
        assert_eq!(
            Term::power(Term::scalar(0.0), Term::scalar(0.0)).simplify(),
            Term::scalar(1.0)
        );
    }

    #[test]
    fn test_simplify_negations() {
        assert_eq!(Term::negate(Term::negate(x())).simplify(), x());
        assert_eq!(Term::negate(Term::scalar(0.0)).simplify(), Term::scalar(0.0));
        assert_eq!(Term::negate(Term::scalar(-2.5)).simplify(), Term::scalar(2.5));
        assert_eq!(
            Term::negate(Term::scalar(2.5)).simplify(),
            Term::negate(Term::scalar(2.5))
        );
        // X = x - 0 collapses to x
        assert_eq!(Term::subtract(x(), Term::scalar(0.0)).simplify(), x());
    }

    #[test]
    fn test_simplify_is_bottom_up_and_idempotent() {
        // 1·(x + 0)^(0 + 1) + 0·y
        let t = Term::add(
            Term::scale(
                Term::scalar(1.0),
                Term::power(
                    Term::add(x(), Term::scalar(0.0)),
                    Term::add(Term::scalar(0.0), Term::scalar(1.0)),
                ),
            ),
            Term::scale(Term::scalar(0.0), Term::variable("y")),
        );
        let once = t.simplify();
        assert_eq!(once, x());
        let gated = Term::piecewise_function(
            Term::scalar(-1.0),
            Term::scalar(1.0),
            Term::scale(
                Term::indicator(Term::scalar(-1.0), Term::scalar(1.0), x()),
                Term::sum(vec![Term::scalar(0.0), Term::power(x(), Term::scalar(2.0))]),
            ),
            x(),
        );
        let once = gated.simplify();
        let twice = once.simplify();
        assert_eq!(once, twice);
        for notation in [
            Notation::Plain,
            Notation::Latex,
            Notation::Geogebra,
            Notation::Pgf,
        ] {
            assert_eq!(once.render(notation), twice.render(notation));
        }
    }

    #[test]
    fn test_plain_rendering() {
        let t = Term::add(
            Term::scale(Term::scalar(2.0), Term::power(x(), Term::scalar(3.0))),
            Term::negate(Term::scalar(-1.5)),
        );
        assert_eq!(t.to_string(), "((2 * (x ^ 3)) + (-(-1.5)))");
        assert_eq!(
            Term::indicator(Term::scalar(0.0), Term::scalar(1.0), x()).to_string(),
            "1[0, 1)(x)"
        );
        assert_eq!(
            Term::closed_indicator(Term::scalar(0.0), Term::scalar(1.0), x()).to_string(),
            "1[0, 1](x)"
        );
    }

    #[test]
    fn test_latex_rendering() {
        let t = Term::scale(
            Term::scalar(2.0),
            Term::power(Term::subtract(x(), Term::scalar(5.0)), Term::scalar(3.0)),
        );
        assert_eq!(t.latex(), "(2\\cdot ((x+(-(5)))^{3}))");
        let gate = Term::indicator(Term::scalar(0.0), Term::scalar(5.0), x());
        assert_eq!(gate.latex(), "\\mathbb{1}_{\\left[0, 5\\right[}(x)");
        let last = Term::closed_indicator(Term::scalar(5.0), Term::scalar(7.0), x());
        assert_eq!(last.latex(), "\\mathbb{1}_{\\left[5, 7\\right]}(x)");
        let f = Term::piecewise_function(Term::scalar(0.0), Term::scalar(7.0), x(), x());
        assert_eq!(f.latex(), "x \\in \\left[0, 7\\right] \\longmapsto x");
    }

    #[test]
    fn test_geogebra_rendering() {
        let t = Term::scale(
            Term::indicator(Term::scalar(-2.0), Term::scalar(3.0), x()),
            Term::power(x(), Term::scalar(2.0)),
        );
        assert_eq!(t.geogebra(), "(If[x>=(-2) && x<3,1,0]*(x^2))");
        let f = Term::piecewise_function(Term::scalar(-2.0), Term::scalar(3.0), t, x());
        assert_eq!(
            f.geogebra(),
            "Function[(If[x>=(-2) && x<3,1,0]*(x^2)),(-2),3]"
        );
        assert_eq!(Term::negate(x()).geogebra(), "(-(x))");
    }

    #[test]
    fn test_pgf_rendering() {
        let body = Term::scale(
            Term::closed_indicator(Term::scalar(-1.0), Term::scalar(1.0), x()),
            Term::add(Term::scalar(1.0), x()),
        );
        assert_eq!(body.pgf(), "(and(\\x>=(-1),\\x<=1)*(1+\\x))");
        let f = Term::piecewise_function(Term::scalar(-1.0), Term::scalar(1.0), body, x());
        assert_eq!(
            f.pgf_with_samples(20),
            "\\draw[smooth,samples=20,domain=-1:1] plot(\\x,{(and(\\x>=(-1),\\x<=1)*(1+\\x))});"
        );
        assert_eq!(Term::sum(vec![]).pgf(), "0");
    }

    #[test]
    fn test_notation_from_str() {
        assert_eq!(Notation::from_str("LaTeX"), Ok(Notation::Latex));
        assert_eq!(Notation::from_str("ggb"), Ok(Notation::Geogebra));
        assert_eq!(Notation::from_str("tikz"), Ok(Notation::Pgf));
        assert_eq!(Notation::from_str("text"), Ok(Notation::Plain));
        assert!(Notation::from_str("mathml").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0, None), "2");
        assert_eq!(format_number(0.5, None), "0.5");
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(1.0 / 3.0, Some(3)), "0.333");
    }

    #[test]
    fn test_evaluate() {
        // (x - 1)^3 + 0.5 at x = 3
        let t = Term::add(
            Term::power(Term::subtract(x(), Term::scalar(1.0)), Term::scalar(3.0)),
            Term::scalar(0.5),
        );
        assert_relative_eq!(t.evaluate(&bind("x", 3.0)).unwrap(), 8.5);
        // integral exponent of a negative base
        assert_relative_eq!(t.evaluate(&bind("x", -1.0)).unwrap(), -7.5);
        let root = Term::power(x(), Term::scalar(0.5));
        assert_relative_eq!(root.evaluate(&bind("x", 4.0)).unwrap(), 2.0);
        assert_eq!(
            t.evaluate(&bind("y", 1.0)),
            Err(TermError::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn test_indicator_evaluation() {
        let open = Term::indicator(Term::scalar(0.0), Term::scalar(1.0), x());
        let closed = Term::closed_indicator(Term::scalar(0.0), Term::scalar(1.0), x());
        assert_eq!(open.evaluate(&bind("x", 0.0)), Ok(1.0));
        assert_eq!(open.evaluate(&bind("x", 1.0)), Ok(0.0));
        assert_eq!(closed.evaluate(&bind("x", 1.0)), Ok(1.0));
        assert_eq!(closed.evaluate(&bind("x", -0.1)), Ok(0.0));
    }

    #[test]
    fn test_piecewise_function_domain() {
        let f = Term::piecewise_function(Term::scalar(0.0), Term::scalar(2.0), x(), x());
        assert_eq!(f.evaluate(&bind("x", 2.0)), Ok(2.0));
        assert_eq!(
            f.evaluate(&bind("x", 2.5)),
            Err(TermError::Domain {
                value: 2.5,
                lower: 0.0,
                upper: 2.0
            })
        );
        let msg = f.evaluate(&bind("x", -1.0)).unwrap_err().to_string();
        assert!(msg.contains("[0, 2]"));
    }

    #[test]
    fn test_lambdify() {
        let t = Term::add(
            Term::scale(Term::variable("a"), x()),
            Term::variable("b"),
        );
        let f = t.lambdify(&["x", "a", "b"]);
        assert_relative_eq!(f(&[2.0, 3.0, 1.0]).unwrap(), 7.0);
        assert_eq!(
            f(&[1.0]),
            Err(TermError::ArityMismatch {
                expected: 3,
                got: 1
            })
        );
        let g = t.lambdify(&["x", "a"]);
        assert_eq!(
            g(&[1.0, 1.0]),
            Err(TermError::UnboundVariable("b".to_string()))
        );
    }

    #[test]
    fn test_lambdify1D() {
        let t = Term::power(x(), Term::scalar(2.0));
        let f = t.lambdify1D().unwrap();
        assert_relative_eq!(f(3.0).unwrap(), 9.0);
        let constant = Term::scalar(4.0).lambdify1D().unwrap();
        assert_eq!(constant(100.0), Ok(4.0));
        match Term::add(x(), Term::variable("y")).lambdify1D() {
            Err(TermError::TooManyVariables(vars)) => assert_eq!(vars, vec!["x", "y"]),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("two variables accepted"),
        }
    }

    #[test]
    fn test_variables() {
        let t = Term::add(
            Term::scale(Term::variable("b"), x()),
            Term::power(Term::variable("a"), x()),
        );
        assert_eq!(t.extract_variables(), vec!["a", "b", "x"]);
        assert!(t.contains_variable("a"));
        assert!(!t.contains_variable("z"));
        let substituted = t.set_variable("x", 2.0);
        assert!(!substituted.contains_variable("x"));
        assert_eq!(substituted.extract_variables(), vec!["a", "b"]);
        // the input tree is untouched
        assert!(t.contains_variable("x"));
    }

    #[test]
    fn test_inspection() {
        assert!(Term::scalar(0.0).is_zero());
        assert!(Term::scalar(-0.0).is_zero());
        assert!(Term::scalar(1.0).is_one());
        assert!(!x().is_zero());
        assert_eq!(Term::scalar(3.0).as_scalar(), Some(3.0));
        assert_eq!(x().as_scalar(), None);
    }
}
