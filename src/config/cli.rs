use crate::config::file::Profile;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-gen")]
#[command(about = "Generates valid CPF numbers with correct verifier digits")]
pub struct GeneratorConfig {
    /// Fiscal region digit (0-9) to pin as the 9th digit
    #[arg(short, long)]
    pub region: Option<u8>,

    /// How many CPFs to generate [default: 1]
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Emit one JSON report per CPF instead of the decorated output
    #[arg(long)]
    pub json: bool,

    /// Menu-driven loop: pick a region, generate, repeat
    #[arg(short, long)]
    pub interactive: bool,

    /// TOML profile supplying defaults for the flags above
    #[arg(long)]
    pub profile: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl GeneratorConfig {
    /// Profile values fill in whatever the command line left unset.
    pub fn apply_profile(&mut self, profile: &Profile) {
        if let Some(generator) = &profile.generator {
            if self.region.is_none() {
                self.region = generator.region;
            }
            if self.count.is_none() {
                self.count = generator.count;
            }
            if !self.json {
                self.json = generator.json.unwrap_or(false);
            }
        }
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(1)
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if let Some(region) = self.region {
            validate_range("region", region, 0, 9)?;
        }
        if let Some(count) = self.count {
            validate_positive_number("count", count, 1)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-validate")]
#[command(about = "Checks CPF numbers against the verifier-digit algorithm")]
pub struct ValidatorConfig {
    /// CPF numbers in any punctuation; with none, prompts interactively
    pub cpfs: Vec<String>,

    /// Emit one JSON verdict per CPF instead of the decorated output
    #[arg(long)]
    pub json: bool,

    /// TOML profile supplying defaults for the flags above
    #[arg(long)]
    pub profile: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ValidatorConfig {
    pub fn apply_profile(&mut self, profile: &Profile) {
        if let Some(validator) = &profile.validator {
            if !self.json {
                self.json = validator.json.unwrap_or(false);
            }
        }
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        for cpf in &self.cpfs {
            validate_non_empty_string("cpf", cpf)?;
        }
        Ok(())
    }
}
