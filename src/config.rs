#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::OnceLock;

use tracing::Level;

use crate::uf::Algorithm;

/// Environment variable selecting the log level.
pub const LOG_VAR: &str = "ALG_LOG";

/// Environment variable selecting the default algorithm.
pub const ALGORITHM_VAR: &str = "ALG_ALGORITHM";

/// Process wide configuration, resolved once.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Settings sourced from the environment (and `.env`, when loaded).
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum level of emitted log events.
    log_level: Level,
    /// Algorithm used when the command line does not pick one.
    algorithm: Algorithm,
    /// Values that were rejected and replaced by defaults.
    warnings:  Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            algorithm: Algorithm::Weighted,
            warnings:  Vec::new(),
        }
    }
}

impl Config {
    /// Reads `ALG_LOG` and `ALG_ALGORITHM`.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var(LOG_VAR).ok(), std::env::var(ALGORITHM_VAR).ok())
    }

    /// Resolves raw values, falling back to defaults for blank or
    /// unrecognised ones.
    pub fn from_values(log_level: Option<String>, algorithm: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = log_level.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => config
                    .warnings
                    .push(format!("{LOG_VAR}={raw} is not a log level, using info")),
            }
        }

        if let Some(raw) = algorithm.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<Algorithm>() {
                Ok(algorithm) => config.algorithm = algorithm,
                Err(e) => config
                    .warnings
                    .push(format!("{ALGORITHM_VAR}: {e}, using {}", config.algorithm)),
            }
        }

        config
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the default algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns messages about values that were ignored. They are collected
    /// rather than logged since configuration is read before logging is set
    /// up.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Returns the process wide configuration, reading the environment on first
/// use.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
