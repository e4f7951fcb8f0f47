use cpf_toolkit::core::validator::validate;
use cpf_toolkit::{CpfError, VerifierPair};

#[test]
fn rejects_too_few_digits() {
    // "123.456.789-0" strips to 10 digits.
    let err = validate("123.456.789-0").unwrap_err();
    assert!(matches!(err, CpfError::WrongLength { found: 10 }));
}

#[test]
fn rejects_too_many_digits() {
    let err = validate("123.456.789-099").unwrap_err();
    assert!(matches!(err, CpfError::WrongLength { found: 12 }));
}

#[test]
fn rejects_input_with_no_digits_at_all() {
    let err = validate("not a cpf").unwrap_err();
    assert!(matches!(err, CpfError::WrongLength { found: 0 }));
}

#[test]
fn rejects_every_repeated_digit_run() {
    for digit in b'0'..=b'9' {
        let input: String = std::iter::repeat(char::from(digit)).take(11).collect();
        let err = validate(&input).unwrap_err();
        assert!(
            matches!(err, CpfError::RepeatedDigits),
            "repeated {} accepted",
            char::from(digit)
        );
    }
}

#[test]
fn rejects_formatted_repeated_run_despite_matching_arithmetic() {
    // 111.111.111-11 would pass the weighted checksum; the repeated-digit
    // rule still throws it out.
    let err = validate("111.111.111-11").unwrap_err();
    assert!(matches!(err, CpfError::RepeatedDigits));
}

#[test]
fn mismatch_reports_supplied_and_expected_pairs() {
    let err = validate("111.444.777-48").unwrap_err();
    match err {
        CpfError::ChecksumMismatch { supplied, expected } => {
            assert_eq!(supplied, VerifierPair { first: 4, second: 8 });
            assert_eq!(expected, VerifierPair { first: 4, second: 7 });
        }
        other => panic!("expected a checksum mismatch, got {:?}", other),
    }
}

#[test]
fn mismatch_on_first_verifier_digit() {
    let err = validate("111.444.777-57").unwrap_err();
    match err {
        CpfError::ChecksumMismatch { supplied, expected } => {
            assert_eq!(supplied.first, 5);
            assert_eq!(expected, VerifierPair { first: 4, second: 7 });
        }
        other => panic!("expected a checksum mismatch, got {:?}", other),
    }
}

#[test]
fn error_messages_are_actionable() {
    let err = validate("123").unwrap_err();
    assert!(err.user_friendly_message().contains("11 digits"));
    assert!(!err.recovery_suggestion().is_empty());

    let err = validate("111.444.777-48").unwrap_err();
    let message = err.user_friendly_message();
    assert!(message.contains("48"));
    assert!(message.contains("47"));
}
