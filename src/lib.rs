pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{GeneratorConfig, ValidatorConfig};

pub use crate::adapters::{JsonRenderer, PrettyRenderer, PromptSession, RngDigitSource};
pub use crate::config::Profile;
pub use crate::core::{generator::CpfGenerator, validator::validate};
pub use crate::domain::model::{Cpf, CpfReport, FiscalRegion, GenerationOutcome, VerifierPair};
pub use crate::domain::ports::{DigitSource, ReportRenderer};
pub use crate::utils::error::{CpfError, Result};
