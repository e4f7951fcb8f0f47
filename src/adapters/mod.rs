// Adapters layer: concrete implementations behind the domain ports
// (randomness, terminal presentation, JSON output).

pub mod json;
pub mod random;
pub mod terminal;

pub use json::JsonRenderer;
pub use random::RngDigitSource;
pub use terminal::{PrettyRenderer, PromptSession};
