use credential_validator::{
    credential::{parse_pattern, EMAIL_PATTERN, PASSWORD_PATTERN, USERNAME_PATTERN},
    Field, FieldStatus, Validator, ValidatorError,
};
use regex::Regex;
use rstest::{fixture, rstest};
use test_case::test_case;

#[fixture]
fn validator() -> Validator {
    Validator::new("jdoe", "jdoe@example.com", "P@ssw0rd!")
}

#[rstest]
fn test_credential_matches_constructor_input(validator: Validator) {
    let credential = validator.credential();
    assert_eq!(credential.username(), "jdoe");
    assert_eq!(credential.email(), "jdoe@example.com");
    assert_eq!(credential.password(), "P@ssw0rd!");
}

#[rstest]
fn test_email_scenario(mut validator: Validator) {
    // Arrange / Act / Assert across the replace-then-restore cycle
    assert_eq!(validator.validate_email(), Some(true));

    validator.set_email_regex(Some(Regex::new("^x$").unwrap()));
    assert_eq!(validator.validate_email(), Some(false));

    validator.set_email_regex(None);
    assert_eq!(validator.validate_email(), Some(true));
}

#[rstest]
fn test_invalid_username_pattern_leaves_pattern_unchanged(mut validator: Validator) {
    validator.set_username_pattern(Some("/^jd/")).unwrap();

    let result = validator.set_username_pattern(Some("not-a-regex"));

    assert_eq!(
        result.unwrap_err().to_string(),
        "Input must be a valid regexp"
    );
    assert_eq!(validator.username_regex().as_str(), "^jd");
    assert_eq!(validator.validate_username(), Some(true));
}

#[rstest]
#[case(Field::Username, USERNAME_PATTERN)]
#[case(Field::Email, EMAIL_PATTERN)]
#[case(Field::Password, PASSWORD_PATTERN)]
fn test_none_resets_to_default(mut validator: Validator, #[case] field: Field, #[case] default: &str) {
    validator.set_pattern(field, Some("/^nothing-matches-this$/")).unwrap();
    assert_eq!(validator.validate(field), Some(false));

    validator.set_pattern(field, None).unwrap();
    assert_eq!(validator.regex(field).as_str(), default);
    assert_eq!(validator.validate(field), Some(true));
}

#[rstest]
#[case(Field::Username)]
#[case(Field::Email)]
#[case(Field::Password)]
fn test_rejected_input_for_every_field(mut validator: Validator, #[case] field: Field) {
    let before = validator.regex(field).as_str().to_string();

    let result = validator.set_pattern(field, Some("42"));

    assert!(matches!(result, Err(ValidatorError::InvalidArgument(_))));
    assert_eq!(validator.regex(field).as_str(), before);
}

#[test_case("jdoe", "^j", true ; "prefix match")]
#[test_case("jdoe", "doe", true ; "unanchored substring")]
#[test_case("jdoe", "^doe", false ; "anchored miss")]
#[test_case("JDOE", "(?i)^jdoe$", true ; "inline case flag")]
fn test_validate_equals_is_match(username: &str, pattern: &str, expected: bool) {
    let regex = Regex::new(pattern).unwrap();
    let mut validator = Validator::new(username, "jdoe@example.com", "P@ssw0rd!");

    validator.set_username_regex(Some(regex.clone()));

    assert_eq!(validator.validate_username(), Some(regex.is_match(username)));
    assert_eq!(validator.validate_username(), Some(expected));
}

#[test_case("", "jdoe@example.com", "P@ssw0rd!", FieldStatus::Missing, FieldStatus::Valid, FieldStatus::Valid ; "missing username")]
#[test_case("jdoe", "not-an-email", "P@ssw0rd!", FieldStatus::Valid, FieldStatus::Invalid, FieldStatus::Valid ; "bad email")]
#[test_case("jdoe", "jdoe@example.com", "short", FieldStatus::Valid, FieldStatus::Valid, FieldStatus::Invalid ; "short password")]
fn test_report(
    username: &str,
    email: &str,
    password: &str,
    expected_username: FieldStatus,
    expected_email: FieldStatus,
    expected_password: FieldStatus,
) {
    let report = Validator::new(username, email, password).report();

    assert_eq!(report.username, expected_username);
    assert_eq!(report.email, expected_email);
    assert_eq!(report.password, expected_password);
    assert!(!report.is_valid());
    assert_eq!(report.failed_fields().len(), 1);
}

#[test]
fn test_parsed_literal_flags_apply_to_validation() {
    let mut validator = Validator::new("JDoe", "jdoe@example.com", "P@ssw0rd!");

    validator.set_username_regex(Some(parse_pattern("/^jdoe$/").unwrap()));
    assert_eq!(validator.validate_username(), Some(false));

    validator.set_username_regex(Some(parse_pattern("/^jdoe$/i").unwrap()));
    assert_eq!(validator.validate_username(), Some(true));
}
