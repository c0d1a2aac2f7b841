use page_extractor_engine::ExtractOptions;
use serde::Deserialize;
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to expand docs_path {value:?}: {source}")]
    Expand {
        value: String,
        source: shellexpand::LookupError<VarError>,
    },
}

/// Settings read from `config.toml`.
///
/// ```toml
/// docs_path = "~/src/docs/pages"
///
/// [extract]
/// body_format = "html"
/// ```
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Docs folder extracted when the CLI is run without arguments.
    pub docs_path: Option<PathBuf>,
    #[serde(default)]
    pub extract: ExtractOptions,
}

impl Config {
    /// Picks the config a run should use.
    ///
    /// A path given explicitly has to exist. Without one, the file at
    /// [`Config::default_path`] is read when present and defaults are used
    /// otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.is_file() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::read(path),
            None => {
                let path = Self::default_path();
                if path.is_file() {
                    Self::read(&path)
                } else {
                    log::debug!("no config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// `~/.config/page-extractor/config.toml`
    pub fn default_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/page-extractor");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        config.with_expanded_docs_path()
    }

    /// Expands `~` and `$VARS` in `docs_path`. An unset variable is an error
    /// rather than a path with a literal `$` in it.
    fn with_expanded_docs_path(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = &self.docs_path {
            let value = path.to_string_lossy().into_owned();
            let expanded = shellexpand::full(&value)
                .map_err(|source| ConfigError::Expand {
                    value: value.clone(),
                    source,
                })?
                .into_owned();
            self.docs_path = Some(PathBuf::from(expanded));
        }
        Ok(self)
    }
}
