use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML profile with per-binary defaults. Command-line flags
/// always win over profile values.
///
/// ```toml
/// [generator]
/// region = 8
/// count = 3
///
/// [validator]
/// json = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub generator: Option<GeneratorDefaults>,
    pub validator: Option<ValidatorDefaults>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorDefaults {
    pub region: Option<u8>,
    pub count: Option<usize>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorDefaults {
    pub json: Option<bool>,
}

impl Profile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CpfError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CpfError::InvalidConfigValue {
            field: "profile".to_string(),
            value: "toml".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        if let Some(generator) = &self.generator {
            if let Some(region) = generator.region {
                validate_range("generator.region", region, 0, 9)?;
            }
            if let Some(count) = generator.count {
                validate_positive_number("generator.count", count, 1)?;
            }
        }
        Ok(())
    }
}
