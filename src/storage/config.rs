//! Data file configuration
//!
//! The data file path comes from, in order: the `--data` flag, the
//! `SHOPS_DATA` environment variable, or `SHOPS_DATA` in a `.env` file.
//! The `.env` file is parsed for that one key; it is never loaded into
//! the process environment.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable (and `.env` key) holding the default data file
pub const DATA_ENV_VAR: &str = "SHOPS_DATA";

/// Default `.env` file name, looked up in the current directory
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The data file name is absent: pass --data or set SHOPS_DATA")]
    MissingDataFile,

    #[error("Failed to read env file {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Where the data file path was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFileSource {
    Flag,
    Environment,
    EnvFile,
}

impl fmt::Display for DataFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DataFileSource::Flag => "--data flag",
            DataFileSource::Environment => "environment",
            DataFileSource::EnvFile => ".env file",
        };
        f.write_str(label)
    }
}

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub source: DataFileSource,
}

impl Config {
    /// Resolves the data file from the flag, the process environment and
    /// the given `.env` file
    pub fn resolve(flag: Option<PathBuf>, env_file: &Path) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(DATA_ENV_VAR);
        let from_env_file = if from_env.is_some() {
            None
        } else {
            Self::read_env_file(env_file)?
        };

        Self::from_sources(flag, from_env, from_env_file)
    }

    /// Picks the first non-empty source in resolution order
    pub fn from_sources(
        flag: Option<PathBuf>,
        env: Option<OsString>,
        env_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self {
                data_file: path,
                source: DataFileSource::Flag,
            });
        }

        if let Some(value) = env.filter(|v| !v.is_empty()) {
            return Ok(Self {
                data_file: PathBuf::from(value),
                source: DataFileSource::Environment,
            });
        }

        if let Some(value) = env_file.filter(|v| !v.is_empty()) {
            return Ok(Self {
                data_file: PathBuf::from(value),
                source: DataFileSource::EnvFile,
            });
        }

        Err(ConfigError::MissingDataFile)
    }

    /// Reads `SHOPS_DATA` from a `.env` file; a missing file yields `None`
    fn read_env_file(path: &Path) -> Result<Option<String>, ConfigError> {
        if !path.is_file() {
            return Ok(None);
        }

        let env_err = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut value = None;
        for item in dotenvy::from_path_iter(path).map_err(env_err)? {
            let (key, val) = item.map_err(env_err)?;
            if key == DATA_ENV_VAR {
                value = Some(val);
            }
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn flag_wins_over_everything() {
        let config = Config::from_sources(
            Some(PathBuf::from("flag.json")),
            Some("env.json".into()),
            Some("file.json".to_string()),
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("flag.json"));
        assert_eq!(config.source, DataFileSource::Flag);
    }

    #[test]
    fn environment_wins_over_env_file() {
        let config = Config::from_sources(
            None,
            Some("env.json".into()),
            Some("file.json".to_string()),
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("env.json"));
        assert_eq!(config.source, DataFileSource::Environment);
    }

    #[test]
    fn env_file_is_last_resort() {
        let config = Config::from_sources(None, None, Some("file.json".to_string())).unwrap();
        assert_eq!(config.source, DataFileSource::EnvFile);
    }

    #[test]
    fn empty_values_are_skipped() {
        let config =
            Config::from_sources(Some(PathBuf::new()), Some(OsString::new()), Some("f.json".into()))
                .unwrap();
        assert_eq!(config.data_file, PathBuf::from("f.json"));
    }

    #[test]
    fn nothing_configured_is_an_error() {
        let err = Config::from_sources(None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDataFile));
    }

    #[test]
    fn reads_data_key_from_env_file() {
        let dir = TempDir::new().unwrap();
        let env_path = dir.path().join(".env");
        fs::write(&env_path, "OTHER=1\nSHOPS_DATA=stock.json\n").unwrap();

        let value = Config::read_env_file(&env_path).unwrap();
        assert_eq!(value.as_deref(), Some("stock.json"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_environment_value_is_used_as_is() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"shops-\xff.json".to_vec());
        let config =
            Config::from_sources(None, Some(raw.clone()), Some("file.json".to_string())).unwrap();

        assert_eq!(config.data_file, PathBuf::from(raw));
        assert_eq!(config.source, DataFileSource::Environment);
    }

    #[test]
    fn unparsable_env_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let env_path = dir.path().join(".env");
        fs::write(&env_path, "SHOPS_DATA=ok.json\nnot a valid line\n").unwrap();

        let err = Config::read_env_file(&env_path).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }

    #[test]
    fn missing_env_file_is_none() {
        let dir = TempDir::new().unwrap();
        let value = Config::read_env_file(&dir.path().join(".env")).unwrap();
        assert_eq!(value, None);
    }
}
