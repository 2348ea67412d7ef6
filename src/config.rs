use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Config {
    /// Load from `path` if given, otherwise from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match get_config_path() {
                Some(default_path) if default_path.exists() => Self::from_file(&default_path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve the input path: explicit argument first, then config.
    pub fn resolve_input(&self, arg: Option<PathBuf>) -> Option<PathBuf> {
        arg.or_else(|| self.paths.input.clone())
    }

    /// Resolve the output path: explicit argument, config, then `input` with an `.ics` extension.
    pub fn resolve_output(&self, arg: Option<PathBuf>, input: &Path) -> PathBuf {
        arg.or_else(|| self.paths.output.clone())
            .unwrap_or_else(|| input.with_extension("ics"))
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "domainics", "domainics")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.paths.input.is_none());
        assert!(config.paths.output.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_config_from_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[paths]\ninput = \"Domain_List.csv\"\noutput = \"out.ics\"\n\n[logging]\nlevel = \"warn\"\n",
        )?;

        let config = Config::load(Some(&config_path))?;
        assert_eq!(config.paths.input, Some(PathBuf::from("Domain_List.csv")));
        assert_eq!(config.paths.output, Some(PathBuf::from("out.ics")));
        assert_eq!(config.logging.level.as_deref(), Some("warn"));

        Ok(())
    }

    #[test]
    fn test_partial_config() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[logging]\nlevel = \"debug\"\n")?;

        let config = Config::load(Some(&config_path))?;
        assert!(config.paths.input.is_none());
        assert_eq!(config.logging.level.as_deref(), Some("debug"));

        Ok(())
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp_dir = tempdir().unwrap();
        assert!(Config::load(Some(&temp_dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_path_resolution() {
        let config = Config {
            paths: PathsConfig { input: Some("cfg.csv".into()), output: None },
            ..Config::default()
        };

        assert_eq!(config.resolve_input(Some("arg.csv".into())), Some(PathBuf::from("arg.csv")));
        assert_eq!(config.resolve_input(None), Some(PathBuf::from("cfg.csv")));
        assert_eq!(
            config.resolve_output(None, Path::new("dir/Domain_List.csv")),
            PathBuf::from("dir/Domain_List.ics")
        );
        assert_eq!(
            config.resolve_output(Some("x.ics".into()), Path::new("a.csv")),
            PathBuf::from("x.ics")
        );
    }
}
