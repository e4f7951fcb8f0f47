use crate::core::checksum;
use crate::domain::model::{Cpf, CpfReport, VerifierPair};
use crate::utils::error::{CpfError, Result};
use regex::Regex;

/// Strip everything that is not a digit, so `123.456.789-09`,
/// `12345678909` and `123 456 789 09` are all the same input.
pub fn sanitize(raw: &str) -> String {
    // ASCII digits only; Unicode digit classes would let foreign numerals
    // through to the parser.
    let re = Regex::new(r"[^0-9]").unwrap();
    re.replace_all(raw, "").into_owned()
}

/// Check a CPF in any punctuation. On success the report carries the
/// canonical formatted string, the base digits, the verifier pair and the
/// fiscal region of the 9th digit.
pub fn validate(raw: &str) -> Result<CpfReport> {
    let cleaned = sanitize(raw);
    tracing::debug!("sanitized {:?} to {} digits", raw, cleaned.len());

    if cleaned.len() != 11 {
        return Err(CpfError::WrongLength {
            found: cleaned.len(),
        });
    }

    let mut digits = [0u8; 11];
    for (slot, byte) in digits.iter_mut().zip(cleaned.bytes()) {
        *slot = byte - b'0';
    }

    // Sequences like 000.000.000-00 are rejected outright, even when the
    // arithmetic happens to come out right. The check is the literal
    // all-same-digit rule and nothing broader.
    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let first = checksum::first_verifier(&base);
    let expected = VerifierPair {
        first,
        second: checksum::second_verifier(&base, first),
    };
    let supplied = VerifierPair {
        first: digits[9],
        second: digits[10],
    };

    if supplied != expected {
        return Err(CpfError::ChecksumMismatch { supplied, expected });
    }

    Ok(CpfReport::from_cpf(&Cpf::from_digits(digits)))
}
