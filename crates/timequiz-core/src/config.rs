//! Configuration file loading and flag precedence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::SessionConfig;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "timequiz.toml";

/// Settings read from `timequiz.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question file used when `--file-path` is not given.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
    /// Session timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Shuffle questions by default.
    #[serde(default)]
    pub shuffle: bool,
    /// Fixed shuffle seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_file_path() -> PathBuf {
    PathBuf::from("./problems.csv")
}

fn default_timeout() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            timeout_secs: default_timeout(),
            shuffle: false,
            seed: None,
        }
    }
}

/// Values given on the command line. `None` / `false` defer to the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub file_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl QuizConfig {
    /// Apply command-line overrides and validate the result.
    pub fn resolve(self, overrides: ConfigOverrides) -> Result<SessionConfig, QuizError> {
        let file_path = overrides.file_path.unwrap_or(self.file_path);
        let timeout_secs = overrides.timeout_secs.unwrap_or(self.timeout_secs);
        let shuffle = overrides.shuffle || self.shuffle;
        let seed = overrides.seed.or(self.seed);

        Ok(SessionConfig::new(file_path, timeout_secs, shuffle)?.with_seed(seed))
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            tracing::debug!("reading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.file_path, PathBuf::from("./problems.csv"));
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.shuffle);
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizConfig = toml::from_str("timeout_secs = 90\nshuffle = true\n").unwrap();
        assert_eq!(config.timeout_secs, 90);
        assert!(config.shuffle);
        assert_eq!(config.file_path, PathBuf::from("./problems.csv"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_file() {
        let config = QuizConfig {
            file_path: PathBuf::from("file.csv"),
            timeout_secs: 90,
            shuffle: false,
            seed: Some(1),
        };
        let session = config
            .resolve(ConfigOverrides {
                file_path: Some(PathBuf::from("flag.csv")),
                timeout_secs: Some(5),
                shuffle: true,
                seed: None,
            })
            .unwrap();
        assert_eq!(session.file_path, PathBuf::from("flag.csv"));
        assert_eq!(session.timeout_secs(), 5);
        assert!(session.shuffle);
        assert_eq!(session.seed, Some(1));
    }

    #[test]
    fn zero_timeout_from_file_is_rejected() {
        let config = QuizConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.resolve(ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, QuizError::InvalidTimeout(0)));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("no/such/timequiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "file_path = \"math.csv\"\ntimeout_secs = 12\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.file_path, PathBuf::from("math.csv"));
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn malformed_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
