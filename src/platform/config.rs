// email-icons - platform/config.rs
//
// Optional `email-icons.toml` loading with startup validation.
// Both tools run with no config file at all; this only lets a developer
// relocate the asset root and choose a log level.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::{Path, PathBuf};

/// Raw deserialisable shape of email-icons.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Asset root containing `hero/` and `fallback/`.
    pub root: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Asset root containing `hero/` and `fallback/`.
    pub asset_root: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(constants::DEFAULT_ASSET_ROOT),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Directory the generator writes SVG hero icons into.
    pub fn hero_dir(&self) -> PathBuf {
        self.asset_root.join(constants::HERO_DIR_NAME)
    }

    /// Directory holding the `light/` and `dark/` fallback PNG folders.
    pub fn fallback_dir(&self) -> PathBuf {
        self.asset_root.join(constants::FALLBACK_DIR_NAME)
    }

    /// Apply a `--root` override. The CLI value wins over the config file,
    /// which in turn wins over the built-in default.
    pub fn with_root_override(mut self, cli_root: Option<PathBuf>) -> Self {
        if let Some(root) = cli_root {
            tracing::debug!(root = %root.display(), "Asset root overridden from CLI");
            self.asset_root = root;
        }
        self
    }
}

/// Load and validate the config file, looking for the default file in the
/// working directory. See [`load_config_in`].
pub fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, Vec<String>), ConfigError> {
    load_config_in(Path::new("."), explicit)
}

/// Load and validate the config file.
///
/// With `explicit = Some(path)` the file must exist and parse; failures are
/// returned as `ConfigError`. With `None`, `email-icons.toml` in `base_dir` is
/// used if present: a missing file yields defaults silently and an unreadable
/// or unparseable one yields defaults plus a warning.
///
/// Out-of-range values never fail the load; they are reported in the returned
/// warnings and the default is kept.
pub fn load_config_in(
    base_dir: &Path,
    explicit: Option<&Path>,
) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let mut warnings: Vec<String> = Vec::new();

    let raw = match explicit {
        Some(path) => read_raw(path)?,
        None => {
            let path = base_dir.join(constants::CONFIG_FILE_NAME);
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No config file found; using defaults");
                return Ok((AppConfig::default(), warnings));
            }
            match read_raw(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    warnings.push(format!("{e}. Using defaults."));
                    return Ok((AppConfig::default(), warnings));
                }
            }
        }
    };

    let config = validate(raw, &mut warnings);
    Ok((config, warnings))
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply each raw field over the defaults, accumulating warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(root) = raw.paths.root {
        if root.trim().is_empty() {
            warnings.push(format!(
                "[paths] root is empty. Using default ({}).",
                constants::DEFAULT_ASSET_ROOT
            ));
        } else {
            config.asset_root = PathBuf::from(root);
        }
    }

    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        fs::write(&path, content).expect("write config");
        (dir, path)
    }

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let (_dir, path) = write_config(
            "[paths]\nroot = \"site/public/email-icons\"\n\n[logging]\nlevel = \"debug\"\n",
        );
        let (config, warnings) = load_config(Some(&path)).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.asset_root, PathBuf::from("site/public/email-icons"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.hero_dir(),
            PathBuf::from("site/public/email-icons").join("hero")
        );
    }

    #[test]
    fn test_invalid_values_warn_and_keep_defaults() {
        let (_dir, path) = write_config("[paths]\nroot = \"  \"\n[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(Some(&path)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(warnings[1].contains("loud"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_dir, path) = write_config("[paths]\nroot = \"x\"\nextra = 1\n[future]\nkey = true\n");
        let (config, warnings) = load_config(Some(&path)).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.asset_root, PathBuf::from("x"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_config(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_explicit_unparseable_file_is_error() {
        let (_dir, path) = write_config("[paths\nroot = ");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_absent_default_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, warnings) = load_config_in(dir.path(), None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_default_file_in_base_dir_is_used() {
        let (dir, _path) = write_config("[paths]\nroot = \"assets/icons\"\n");
        let (config, warnings) = load_config_in(dir.path(), None).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.asset_root, PathBuf::from("assets/icons"));
    }

    #[test]
    fn test_unparseable_default_file_warns_and_gives_defaults() {
        let (dir, _path) = write_config("[paths\nroot = ");
        let (config, warnings) = load_config_in(dir.path(), None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("Using defaults"), "{warnings:?}");
    }

    #[test]
    fn test_explicit_path_ignores_base_dir_default() {
        let (dir, _default) = write_config("[paths]\nroot = \"from-default\"\n");
        let (_other, explicit) = write_config("[paths]\nroot = \"from-explicit\"\n");
        let (config, _) = load_config_in(dir.path(), Some(&explicit)).unwrap();
        assert_eq!(config.asset_root, PathBuf::from("from-explicit"));
    }

    #[test]
    fn test_root_precedence() {
        // No flag, no config file: the fixed default layout.
        let config = AppConfig::default().with_root_override(None);
        assert_eq!(
            config.hero_dir(),
            PathBuf::from("public/email-icons").join("hero")
        );

        // Config file beats the default.
        let (_dir, path) = write_config("[paths]\nroot = \"from-config\"\n");
        let (loaded, _) = load_config(Some(&path)).unwrap();
        let config = loaded.clone().with_root_override(None);
        assert_eq!(config.asset_root, PathBuf::from("from-config"));

        // --root beats the config file.
        let config = loaded.with_root_override(Some(PathBuf::from("from-cli")));
        assert_eq!(config.asset_root, PathBuf::from("from-cli"));
        assert_eq!(config.fallback_dir(), PathBuf::from("from-cli").join("fallback"));
    }

    #[test]
    fn test_default_layout() {
        let config = AppConfig::default();
        assert_eq!(
            config.fallback_dir(),
            PathBuf::from("public/email-icons").join("fallback")
        );
    }
}
