use super::*;

fn deg(v: f64) -> Number {
    Number::unitless(v)
}

fn pct(v: f64) -> Number {
    Number::percent(v)
}

#[test]
fn hsl_builds_primary_colors() {
    assert_eq!(hsl(&deg(0.0), &pct(100.0), &pct(50.0)), Color::new(255, 0, 0));
    assert_eq!(hsl(&deg(120.0), &pct(100.0), &pct(50.0)), Color::new(0, 255, 0));
    assert_eq!(hsl(&deg(240.0), &pct(100.0), &pct(50.0)), Color::new(0, 0, 255));
}

#[test]
fn hsl_ignores_units() {
    let with_units = hsl(&Number::with_unit(193.0, "deg"), &Number::with_unit(67.0, "foo"), &pct(99.0));
    let unitless = hsl(&deg(193.0), &Number::unitless(67.0), &Number::unitless(99.0));
    assert_eq!(with_units, unitless);
    assert_eq!(with_units, Color::new(251, 253, 254));
}

#[test]
fn hsl_black_and_white() {
    assert_eq!(hsl(&deg(0.0), &pct(0.0), &pct(0.0)), Color::new(0, 0, 0));
    assert_eq!(hsl(&deg(0.0), &pct(0.0), &pct(100.0)), Color::new(255, 255, 255));
}

#[test]
fn hsl_with_uses_the_given_rounding() {
    // 50% lightness scales to exactly 127.5, which both rules send up
    let grey = hsl_with(&deg(0.0), &pct(0.0), &pct(50.0), Rounding::HalfEven);
    assert_eq!(grey, Color::new(128, 128, 128));
}

#[test]
fn percentage_scales_unitless_numbers() {
    assert_eq!(percentage(&Number::unitless(0.5)), Ok(Number::percent(50.0)));
    assert_eq!(percentage(&Number::unitless(0.0)), Ok(Number::percent(0.0)));
    assert_eq!(percentage(&Number::unitless(-2.0)), Ok(Number::percent(-200.0)));
}

#[test]
fn percentage_rejects_numbers_with_units() {
    let err = percentage(&pct(50.0)).expect_err("percent is not unitless");
    assert_eq!(err, Error::InvalidArgument("Value is not a unitless number".to_owned()));
    assert!(percentage(&Number::with_unit(3.0, "px")).is_err());
}

#[test]
fn percentage_twice_fails() {
    let once = percentage(&Number::unitless(0.25)).expect("first application");
    assert_eq!(once.to_string(), "25%");
    let err = percentage(&once).expect_err("second application");
    assert_eq!(err.to_string(), "Value is not a unitless number");
}

#[test]
fn handlers_follow_registry_convention() {
    let config = Config::default();
    let args = [deg(60.0).into(), pct(100.0).into(), pct(50.0).into()];
    assert_eq!(hsl_handler(&config, &args), Ok(Value::Color(Color::new(255, 255, 0))));

    let color = Value::Color(Color::new(1, 2, 3));
    assert_eq!(
        percentage_handler(&config, &[color]),
        Err(Error::InvalidArgument("Value is not a unitless number".to_owned()))
    );
    assert_eq!(
        percentage_handler(&config, &[Number::unitless(0.5).into()]),
        Ok(Value::Number(Number::percent(50.0)))
    );
}

#[test]
fn hsl_handler_reports_signature_errors_when_called_directly() {
    let config = Config::default();
    let args = [deg(0.0).into(), Value::Color(Color::new(0, 0, 0)), pct(50.0).into()];
    assert!(matches!(
        hsl_handler(&config, &args),
        Err(Error::WrongType { param: "saturation", found: "color", .. })
    ));
    assert!(matches!(
        hsl_handler(&config, &[deg(0.0).into()]),
        Err(Error::WrongArity { expected: 3, given: 1, .. })
    ));
}
