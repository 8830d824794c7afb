use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::newton::{divided_differences, interpolate, NewtonCfg};
use polyinterp::{
    DensePolynomial,
    InterpolationAlgorithm,
    NewtonInterpolation,
    Polynomial,
    PolynomialInterpolation,
    RealValuedFunction,
};

type InterpResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

fn newton() -> &'static NewtonInterpolation {
    NewtonInterpolation::instance()
}

#[test]
fn quadratic_through_three_points() {
    let x  = [0.0, 1.0, 2.0];
    let fx = [1.0, 3.0, 7.0];

    let p = newton().interpolate_polynomial(&x, &fx);
    for (xi, yi) in x.iter().zip(fx.iter()) {
        assert!(approx_eq(p.f(*xi), *yi));
    }
    assert_eq!(p.degree(), 2);
    assert_vec_close(p.coefficients(), &[1.0, 1.0, 1.0]);
}

#[test]
fn exact_hits_unsorted_samples() {
    let x  = [3.0, -1.0, 0.5, 2.0, -2.5];
    let fx = [4.0, 0.0, -2.0, 1.5, 8.0];

    let p = newton().interpolate_polynomial(&x, &fx);
    assert!(p.degree() <= x.len() - 1);
    assert_vec_close(&p.eval_many(&x), &fx);
}

#[test]
fn recovers_cubic() {
    // x^3 - 4.5x^2 + 1
    let cubic = DensePolynomial::from_coefficients(&[1.0, 0.0, -4.5, 1.0]);
    let x     = [-1.0, 0.0, 1.0, 2.0, 3.0];
    let fx    = cubic.eval_many(&x);

    let p = newton().interpolate_polynomial(&x, &fx);
    assert_eq!(p.degree(), 3);
    for d in 0..=3 {
        assert!(approx_eq(p.coefficient(d), cubic.coefficient(d)));
    }
}

#[test]
fn collinear_points_give_a_line() {
    let x  = [0.0, 1.0, 2.0, 3.0];
    let fx = [1.0, 3.0, 5.0, 7.0];

    let p = newton().interpolate_polynomial(&x, &fx);
    assert_eq!(p, DensePolynomial::from_coefficients(&[1.0, 2.0]));
}

#[test]
fn single_point_is_constant() {
    let p = newton().interpolate_polynomial(&[4.0], &[2.5]);
    assert_eq!(p, DensePolynomial::constant(2.5));
}

#[test]
fn empty_input_is_zero_polynomial() {
    assert!(newton().interpolate_polynomial(&[], &[]).is_zero());
    assert!(newton().interpolate_polynomial(&[1.0], &[]).is_zero());
}

#[test]
fn extra_samples_are_ignored() {
    let x  = [0.0, 1.0, 2.0, 3.0];
    let fx = [1.0, 3.0];

    let p = newton().interpolate_polynomial(&x, &fx);
    assert_eq!(p, DensePolynomial::from_coefficients(&[1.0, 2.0]));
}

#[test]
fn duplicate_x_degenerates_to_non_finite() {
    let p = newton().interpolate_polynomial(&[1.0, 1.0], &[2.0, 5.0]);
    assert!(!p.is_finite());

    let q = newton().interpolate_polynomial(&[1.0, 1.0], &[2.0, 2.0]);
    assert!(q.coefficients().iter().any(|c| c.is_nan()));
}

#[test]
fn divided_difference_coefficients() {
    let x  = [0.0, 1.0, 2.0];
    let fx = [1.0, 3.0, 7.0];
    assert_eq!(divided_differences(&x, &fx), vec![1.0, 2.0, 1.0]);
}

#[test]
fn general_and_polynomial_entry_points_agree() {
    let x  = [0.0, 2.0, 5.0];
    let fx = [1.0, -1.0, 4.0];

    let general = newton().interpolate(&x, &fx);
    let special = newton().interpolate_polynomial(&x, &fx);
    assert_eq!(general, special);

    // any algorithm producing a function works through the trait
    fn run<A: InterpolationAlgorithm>(alg: &A, x: &[f64], fx: &[f64]) -> Vec<f64> {
        alg.interpolate(x, fx).eval_many(x)
    }
    assert_vec_close(&run(&NewtonInterpolation, &x, &fx), &fx);
}

#[test]
fn derivative_of_interpolant() {
    // samples of x^2 + x + 1; derivative is 2x + 1
    let p = newton().interpolate_polynomial(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0]);
    let d = p.differentiate();
    assert_vec_close(d.coefficients(), &[1.0, 2.0]);
}

#[test]
fn quadratic_global_match() -> InterpResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    assert_vec_close(rep.polynomial.coefficients(), &[0.0, 0.0, 1.0]);
    Ok(())
}

#[test]
fn exact_hits() -> InterpResult {
    let x_for_cfg  = [0.0, 1.0, 2.0, 3.0];
    let y_for_cfg  = [0.0, 1.0, 4.0, 9.0];
    let x_eval     = [0.0, 1.0, 2.0, 3.0];
    let y_expected = [0.0, 1.0, 4.0, 9.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_y(&y_for_cfg)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn unsorted_samples_hit_extremes() -> InterpResult {
    let x      = [2.0, -1.0, 0.0];
    let y      = [40.0, 10.0, 5.0];
    let x_eval = [-1.0, 2.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[10.0, 40.0]);
    Ok(())
}

#[test]
fn extrapolates_outside_samples() -> InterpResult {
    // samples of x^2 + x + 1
    let x      = [0.0, 1.0, 2.0];
    let y      = [1.0, 3.0, 7.0];
    let x_eval = [-1.0, 3.0, 10.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[1.0, 13.0, 111.0]);

    let raw = newton().interpolate_polynomial(&x, &y);
    assert_eq!(rep.evaluated, raw.eval_many(&x_eval));
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> InterpResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn two_points() -> InterpResult {
    let x      = [2.0, 4.0];
    let y      = [5.0, 9.0];
    let x_eval = [3.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 7.0));
    assert_eq!(rep.polynomial.degree(), 1);
    Ok(())
}

#[test]
fn missing_samples_rejected_at_run() {
    let err = interpolate(NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}
