pub mod constants;
pub mod settings;

pub use settings::{Config, ConfigError, LogFormat};
