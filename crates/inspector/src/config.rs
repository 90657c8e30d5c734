use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::Format;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Format,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Optional log file, relative paths resolve against the executable.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[output]
format = "summary"
pretty = true

[logging]
filter = "info"
# file = "target/logs/ncpf-inspect.log"
"#;

/// Load configuration.
///
/// Search order:
/// 1. `explicit` path from the command line (must exist)
/// 2. `config.toml` next to the executable
/// 3. Embedded default config
///
/// Runs before the subscriber is installed, so it reports where the config
/// came from instead of logging it.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, String)> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, format!("Loaded config from: {}", path.display())));
    }

    if let Some(path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if path.exists() {
            let config = read_config(&path)?;
            return Ok((config, format!("Loaded config from: {}", path.display())));
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok((config, "Using default embedded configuration".to_string()))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolves the log file path; relative paths are taken from the executable directory.
pub fn get_log_file_path(config: &Config) -> Option<PathBuf> {
    let raw = config.logging.file.as_deref()?;
    let path = Path::new(raw);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    Some(match exe_dir() {
        Some(dir) => dir.join(path),
        None => PathBuf::from(raw),
    })
}
