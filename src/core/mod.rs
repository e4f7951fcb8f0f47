pub mod checksum;
pub mod generator;
pub mod validator;

pub use crate::domain::model::{Cpf, CpfReport, FiscalRegion, GenerationOutcome, VerifierPair};
pub use crate::domain::ports::{DigitSource, ReportRenderer};
pub use crate::utils::error::Result;
