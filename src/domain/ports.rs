use crate::domain::model::{CpfReport, GenerationOutcome};
use crate::utils::error::{CpfError, Result};

/// Source of single digits in 0..=9. The generator pulls every random
/// digit through this seam so tests can substitute a seeded or scripted
/// implementation.
pub trait DigitSource {
    fn next_digit(&mut self) -> u8;
}

/// Presentation seam: every surface (pretty terminal, JSON) renders the
/// same reports. The core never formats output itself.
pub trait ReportRenderer {
    fn generated(&self, outcome: &GenerationOutcome) -> Result<String>;
    fn valid(&self, report: &CpfReport) -> Result<String>;
    fn invalid(&self, input: &str, error: &CpfError) -> Result<String>;
}
