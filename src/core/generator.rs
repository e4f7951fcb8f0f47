use crate::core::checksum;
use crate::domain::model::{Cpf, FiscalRegion, VerifierPair};
use crate::domain::ports::DigitSource;

/// Builds valid CPFs from a digit source. Generation cannot fail: any
/// 9-digit base yields a well-formed CPF once the verifiers are computed.
pub struct CpfGenerator<S: DigitSource> {
    source: S,
}

impl<S: DigitSource> CpfGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Nine fully random base digits.
    pub fn generate(&mut self) -> Cpf {
        let mut base = [0u8; 9];
        for digit in &mut base {
            *digit = self.source.next_digit();
        }
        self.seal(base)
    }

    /// Eight random digits with the region digit pinned at index 8.
    pub fn generate_in_region(&mut self, region: &FiscalRegion) -> Cpf {
        let mut base = [0u8; 9];
        for digit in &mut base[..8] {
            *digit = self.source.next_digit();
        }
        base[8] = region.digit;
        self.seal(base)
    }

    fn seal(&self, base: [u8; 9]) -> Cpf {
        let first = checksum::first_verifier(&base);
        let second = checksum::second_verifier(&base, first);
        tracing::debug!(
            "sealed base {:?} with verifiers {}",
            base,
            VerifierPair { first, second }
        );

        let mut digits = [0u8; 11];
        digits[..9].copy_from_slice(&base);
        digits[9] = first;
        digits[10] = second;
        Cpf::from_digits(digits)
    }
}
