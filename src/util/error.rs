// email-icons - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every filesystem failure carries the path (and operation) it happened on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all email-icons operations.
/// Errors are categorised by the job that produced them.
#[derive(Debug)]
pub enum EmailIconsError {
    /// Hero SVG generation failed.
    Generate(GenerateError),

    /// Fallback PNG normalisation failed.
    Normalize(NormalizeError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for EmailIconsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(e) => write!(f, "Generate error: {e}"),
            Self::Normalize(e) => write!(f, "Normalize error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for EmailIconsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(e) => Some(e),
            Self::Normalize(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Generate errors
// ---------------------------------------------------------------------------

/// Errors raised while writing hero SVG icons.
#[derive(Debug)]
pub enum GenerateError {
    /// A category directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// An SVG file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "Cannot create directory '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<GenerateError> for EmailIconsError {
    fn from(e: GenerateError) -> Self {
        Self::Generate(e)
    }
}

// ---------------------------------------------------------------------------
// Normalize errors
// ---------------------------------------------------------------------------

/// Errors raised while renaming or back-filling fallback PNG icons.
#[derive(Debug)]
pub enum NormalizeError {
    /// A theme path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// A type directory could not be listed.
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A legacy file could not be renamed to its canonical name.
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// The dark placeholder could not be copied from the light icon.
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory { path } => {
                write!(f, "'{}' exists but is not a directory", path.display())
            }
            Self::ReadDir { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
            Self::Rename { from, to, source } => write!(
                f,
                "Cannot rename '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
            Self::Copy { from, to, source } => write!(
                f,
                "Cannot copy '{}' to '{}': {source}",
                from.display(),
                to.display()
            ),
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotADirectory { .. } => None,
            Self::ReadDir { source, .. } => Some(source),
            Self::Rename { source, .. } => Some(source),
            Self::Copy { source, .. } => Some(source),
        }
    }
}

impl From<NormalizeError> for EmailIconsError {
    fn from(e: NormalizeError) -> Self {
        Self::Normalize(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to an explicitly requested config file.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for EmailIconsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for email-icons results.
pub type Result<T> = std::result::Result<T, EmailIconsError>;
