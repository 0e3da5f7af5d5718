use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags applied to every launch (e.g. `--no-color`, `--zoom=2`).
    /// Command-line flags override these.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Directory file arguments are resolved against when `--cwd` is not given.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}
