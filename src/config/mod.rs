mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use types::Config;
