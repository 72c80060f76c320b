//! Layered settings: defaults, then `tfpkg.toml`, then environment and flags.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::language::Language;

/// Config file read from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "tfpkg.toml";
/// Directory receiving generated packages by default.
pub const DEFAULT_GEN_DIR: &str = "generated";

/// Contents of a `tfpkg.toml` file. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub gen_dir: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
    pub language: Option<Language>,
    pub version: Option<String>,
}

impl ConfigFile {
    /// Read a config file. A missing file is only an error when `explicit`.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .wrap_err_with(|| format!("invalid config file '{}'", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read '{}'", path.display())),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values from flags or the environment, which take precedence over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub gen_dir: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
    pub language: Option<Language>,
    pub version: Option<String>,
}

/// Resolved settings for one run.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub gen_dir: PathBuf,
    pub tmp_dir: PathBuf,
    pub language: Language,
    /// Module version constraint; `None` downloads the latest.
    pub version: Option<String>,
}

impl Settings {
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Self {
        Self {
            gen_dir: overrides
                .gen_dir
                .or(file.gen_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GEN_DIR)),
            tmp_dir: overrides
                .tmp_dir
                .or(file.tmp_dir)
                .unwrap_or_else(default_tmp_dir),
            language: overrides.language.or(file.language).unwrap_or_default(),
            version: overrides
                .version
                .or(file.version)
                .filter(|v| !v.is_empty()),
        }
    }
}

fn default_tmp_dir() -> PathBuf {
    std::env::temp_dir().join("tfpkg")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse() {
        let config = ConfigFile::parse(
            r#"
gen_dir = "pkg"
language = "rust"
version = "~> 9.0"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            ConfigFile {
                gen_dir: Some(PathBuf::from("pkg")),
                tmp_dir: None,
                language: Some(Language::Rust),
                version: Some("~> 9.0".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(ConfigFile::parse("gendir = \"x\"").is_err());
        assert!(ConfigFile::parse("language = \"python\"").is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(ConfigFile::default(), Overrides::default());

        assert_eq!(settings.gen_dir, PathBuf::from(DEFAULT_GEN_DIR));
        assert_eq!(settings.tmp_dir, std::env::temp_dir().join("tfpkg"));
        assert_eq!(settings.language, Language::Go);
        assert_eq!(settings.version, None);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = ConfigFile {
            gen_dir: Some(PathBuf::from("from-file")),
            tmp_dir: Some(PathBuf::from("tmp-from-file")),
            language: Some(Language::Rust),
            version: Some("1.0.0".to_string()),
        };
        let overrides = Overrides {
            gen_dir: Some(PathBuf::from("from-flag")),
            language: Some(Language::Go),
            ..Default::default()
        };

        let settings = Settings::resolve(file, overrides);

        assert_eq!(settings.gen_dir, PathBuf::from("from-flag"));
        assert_eq!(settings.tmp_dir, PathBuf::from("tmp-from-file"));
        assert_eq!(settings.language, Language::Go);
        assert_eq!(settings.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_empty_version_means_latest() {
        let overrides = Overrides {
            version: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(ConfigFile::default(), overrides).version,
            None
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        assert_eq!(ConfigFile::load(&path, false).unwrap(), ConfigFile::default());
        assert!(ConfigFile::load(&path, true).is_err());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "tmp_dir = \"/var/tmp/tfpkg\"\n").unwrap();

        let config = ConfigFile::load(&path, false).unwrap();
        assert_eq!(config.tmp_dir, Some(PathBuf::from("/var/tmp/tfpkg")));
    }
}
