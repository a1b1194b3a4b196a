//! Tests for the built-in validators through their public calling convention.

use optival::error::Error;
use optival::options::{Environment, Options};
use optival::validate::Outcome;
use optival::validate::Validator;
use optival::validate::builtin::{
    Email, Equals, Integer, Length, Negative, NoneOf, OneOf, Pattern, Positive, Range, Required,
};
use optival::value::Value;
use rstest::rstest;

fn run(
    validator: &dyn Validator,
    value: impl Into<Value>,
    options: Options,
) -> Result<Outcome, Error> {
    validator.validate(Some(&value.into()), &options, &Environment::new())
}

fn message(outcome: Result<Outcome, Error>) -> Option<String> {
    match outcome {
        Ok(Outcome::Left(error) | Outcome::Error(error)) => {
            error.into_messages().into_iter().next()
        }
        Ok(_) => None,
        Err(error) => panic!("unexpected error: {error}"),
    }
}

// =============================================================================
// Required
// =============================================================================

#[rstest]
#[case::null(Value::Null, Some("is required"))]
#[case::empty_string(Value::from(""), Some("is required"))]
#[case::empty_list(Value::List(vec![]), Some("is required"))]
#[case::empty_map(Value::empty_map(), Some("is required"))]
#[case::zero(Value::from(0), None)]
#[case::false_flag(Value::from(false), None)]
#[case::whitespace(Value::from(" "), None)]
fn test_required(#[case] value: Value, #[case] expected: Option<&str>) {
    assert_eq!(message(run(&Required, value, Options::new())).as_deref(), expected);
}

#[rstest]
fn test_required_on_absent_focus() {
    let outcome = Required.validate(None, &Options::new(), &Environment::new()).unwrap();
    assert_eq!(outcome, Outcome::fail("is required"));
}

// =============================================================================
// Strings
// =============================================================================

#[rstest]
#[case("ada@example.com", None)]
#[case("a.b+c@mail.example.org", None)]
#[case("bad", Some("must be a valid email"))]
#[case("two@@example.com", Some("must be a valid email"))]
#[case("spaces in@example.com", Some("must be a valid email"))]
#[case("", Some("must be a valid email"))]
fn test_email(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(message(run(&Email, text, Options::new())).as_deref(), expected);
}

#[rstest]
fn test_email_rejects_non_strings() {
    assert_eq!(message(run(&Email, 42, Options::new())).as_deref(), Some("must be a valid email"));
}

#[rstest]
#[case("12345", None)]
#[case("1234", Some("has invalid format"))]
#[case("abcde", Some("has invalid format"))]
fn test_pattern(#[case] text: &str, #[case] expected: Option<&str>) {
    let options = Options::new().with("regex", r"^\d{5}$");
    assert_eq!(message(run(&Pattern, text, options)).as_deref(), expected);
}

#[rstest]
#[case::missing(Options::new())]
#[case::not_a_string(Options::new().with("regex", 5))]
#[case::invalid(Options::new().with("regex", "(unclosed"))]
fn test_pattern_misconfigured(#[case] options: Options) {
    assert!(matches!(run(&Pattern, "x", options), Err(Error::Misconfigured { .. })));
}

#[rstest]
#[case(Options::new().with("is", 3), "abc", None)]
#[case(Options::new().with("is", 3), "ab", Some("length must be exactly 3"))]
#[case(Options::new().with("min", 2), "a", Some("length must be at least 2"))]
#[case(Options::new().with("max", 2), "abc", Some("length must be at most 2"))]
#[case(Options::new().with("min", 1).with("max", 3), "日本語", None)]
fn test_length_of_strings(
    #[case] options: Options,
    #[case] text: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(message(run(&Length, text, options)).as_deref(), expected);
}

#[rstest]
fn test_length_of_collections() {
    let list = Value::List(vec![Value::from(1), Value::from(2)]);
    assert_eq!(
        message(run(&Length, list, Options::new().with("max", 1))).as_deref(),
        Some("length must be at most 1")
    );
    assert_eq!(message(run(&Length, Value::map([("a", 1)]), Options::new().with("is", 1))), None);
    assert_eq!(
        message(run(&Length, 7, Options::new().with("is", 1))).as_deref(),
        Some("has no length")
    );
}

#[rstest]
#[case::no_bounds(Options::new())]
#[case::negative(Options::new().with("min", -1))]
#[case::float(Options::new().with("max", 1.5))]
fn test_length_misconfigured(#[case] options: Options) {
    assert!(matches!(run(&Length, "abc", options), Err(Error::Misconfigured { .. })));
}

// =============================================================================
// Numbers
// =============================================================================

#[rstest]
#[case(5, None)]
#[case(1, None)]
#[case(10, None)]
#[case(0, Some("must be greater than or equal to 1"))]
#[case(11, Some("must be less than or equal to 10"))]
fn test_range_integers(#[case] number: i64, #[case] expected: Option<&str>) {
    let options = Options::new().with("min", 1).with("max", 10);
    assert_eq!(message(run(&Range, number, options)).as_deref(), expected);
}

#[rstest]
fn test_range_floats_and_non_numbers() {
    let options = Options::new().with("min", 0.5);
    assert_eq!(
        message(run(&Range, 0.25, options.clone())).as_deref(),
        Some("must be greater than or equal to 0.5")
    );
    assert_eq!(message(run(&Range, "1", options)).as_deref(), Some("must be a number"));
}

#[rstest]
#[case::no_bounds(Options::new())]
#[case::non_numeric(Options::new().with("min", "low"))]
fn test_range_misconfigured(#[case] options: Options) {
    assert!(matches!(run(&Range, 1, options), Err(Error::Misconfigured { .. })));
}

#[rstest]
#[case(Value::from(1), None, Some("must be negative"))]
#[case(Value::from(0), Some("must be positive"), Some("must be negative"))]
#[case(Value::from(-2.5), Some("must be positive"), None)]
#[case(Value::from("1"), Some("must be a number"), Some("must be a number"))]
fn test_sign(
    #[case] value: Value,
    #[case] positive: Option<&str>,
    #[case] negative: Option<&str>,
) {
    assert_eq!(message(run(&Positive, value.clone(), Options::new())).as_deref(), positive);
    assert_eq!(message(run(&Negative, value, Options::new())).as_deref(), negative);
}

#[rstest]
#[case(Value::from(3), None)]
#[case(Value::from(3.0), Some("must be an integer"))]
#[case(Value::from("3"), Some("must be an integer"))]
fn test_integer(#[case] value: Value, #[case] expected: Option<&str>) {
    assert_eq!(message(run(&Integer, value, Options::new())).as_deref(), expected);
}

// =============================================================================
// Membership and equality
// =============================================================================

#[rstest]
fn test_one_of_and_none_of() {
    let options = Options::new().with("values", vec!["red", "green"]);
    assert_eq!(message(run(&OneOf, "red", options.clone())), None);
    assert_eq!(
        message(run(&OneOf, "blue", options.clone())).as_deref(),
        Some(r#"must be one of ["red", "green"]"#)
    );
    assert_eq!(
        message(run(&NoneOf, "green", options.clone())).as_deref(),
        Some(r#"must not be one of ["red", "green"]"#)
    );
    assert_eq!(message(run(&NoneOf, "blue", options)), None);
}

#[rstest]
#[case::one_of(&OneOf as &dyn Validator)]
#[case::none_of(&NoneOf as &dyn Validator)]
fn test_membership_needs_values(#[case] validator: &dyn Validator) {
    assert!(matches!(run(validator, "x", Options::new()), Err(Error::Misconfigured { .. })));
}

#[rstest]
fn test_equals_value_option() {
    let options = Options::new().with("value", 42);
    assert_eq!(message(run(&Equals, 42, options.clone())), None);
    assert_eq!(message(run(&Equals, 42.0, options)).as_deref(), Some("must equal 42"));
}

#[rstest]
fn test_equals_env_key() {
    let env = Environment::new().with("password", "secret");
    let options = Options::new().with("env_key", "password");
    let check = |value: &str| Equals.validate(Some(&Value::from(value)), &options, &env);

    assert_eq!(check("secret"), Ok(Outcome::Ok));
    assert_eq!(check("guess"), Ok(Outcome::fail(r#"must equal "secret""#)));

    let missing = Equals.validate(Some(&Value::from("x")), &options, &Environment::new());
    assert!(matches!(missing, Err(Error::Misconfigured { .. })));
}

// =============================================================================
// Shared conventions
// =============================================================================

#[rstest]
#[case::required(&Required as &dyn Validator, Value::Null)]
#[case::email(&Email as &dyn Validator, Value::from("bad"))]
#[case::positive(&Positive as &dyn Validator, Value::from(-1))]
#[case::integer(&Integer as &dyn Validator, Value::from(0.5))]
fn test_message_option_overrides_default(#[case] validator: &dyn Validator, #[case] value: Value) {
    let options = Options::new().with("message", "custom message");
    assert_eq!(message(run(validator, value, options)).as_deref(), Some("custom message"));
}

#[rstest]
#[case(&Required as &dyn Validator, "required")]
#[case(&Email as &dyn Validator, "email")]
#[case(&Pattern as &dyn Validator, "pattern")]
#[case(&Range as &dyn Validator, "range")]
#[case(&Length as &dyn Validator, "length")]
#[case(&Positive as &dyn Validator, "positive")]
#[case(&Negative as &dyn Validator, "negative")]
#[case(&Integer as &dyn Validator, "integer")]
#[case(&OneOf as &dyn Validator, "one_of")]
#[case(&NoneOf as &dyn Validator, "none_of")]
#[case(&Equals as &dyn Validator, "equals")]
fn test_validator_names(#[case] validator: &dyn Validator, #[case] name: &str) {
    assert_eq!(validator.name(), name);
}
