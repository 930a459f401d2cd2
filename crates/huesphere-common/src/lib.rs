pub mod errors;
pub mod types;

pub use errors::{ConfigError, GenerateError, PlatformError};
pub use types::Color;
