#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
pub use cli::{GeneratorConfig, ValidatorConfig};
pub use file::Profile;
