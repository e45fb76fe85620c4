// email-icons - app/normalize.rs
//
// Fallback icon normalisation job. For each theme directory under
// `fallback/`, renames legacy `<stem>_<type>_<timestamp>.png` exports to
// `<stem>.png`, then back-fills the dark `hero_order_confirm.png` from the
// light one when only the light export exists.
//
// Rename targets are not checked for collisions; `std::fs::rename` decides
// what happens to an existing file of the same name.

use crate::core::model::Theme;
use crate::core::naming::canonicalize;
use crate::platform::fs::list_files;
use crate::util::constants;
use crate::util::error::NormalizeError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Progress and diagnostic events emitted while normalising.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeEvent {
    /// A theme directory does not exist and was not scanned.
    DirectoryMissing { theme: Theme, path: PathBuf },

    /// A legacy file was renamed to its canonical name.
    Renamed {
        theme: Theme,
        from: String,
        to: String,
    },

    /// A `.png` with an underscore lacked the theme marker token; left as is.
    Skipped { theme: Theme, file_name: String },

    /// The dark placeholder was copied from the light icon.
    PlaceholderCopied { from: PathBuf, to: PathBuf },

    /// The dark placeholder already exists; nothing copied.
    PlaceholderPresent { path: PathBuf },
}

impl fmt::Display for NormalizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryMissing { theme, path } => {
                write!(f, "[{theme}] {} not found, skipping", path.display())
            }
            Self::Renamed { theme, from, to } => write!(f, "[{theme}] {from} -> {to}"),
            Self::Skipped { theme, file_name } => write!(
                f,
                "[{theme}] Skipped {file_name}: no '{}' token in name",
                theme.label()
            ),
            Self::PlaceholderCopied { from, to } => write!(
                f,
                "Created dark placeholder {} from {}",
                to.display(),
                from.display()
            ),
            Self::PlaceholderPresent { path } => {
                write!(f, "Dark placeholder {} already present", path.display())
            }
        }
    }
}

/// Totals for a completed normalisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub placeholder_copied: bool,
}

/// Normalise every theme directory under `fallback_dir`, then back-fill the
/// dark placeholder icon.
///
/// Missing theme directories are skipped; a theme path that exists but is not
/// a directory is an error. The first filesystem error aborts the run; files
/// processed before it stay renamed.
pub fn normalize_fallback_icons<F>(
    fallback_dir: &Path,
    mut on_event: F,
) -> Result<NormalizeSummary, NormalizeError>
where
    F: FnMut(&NormalizeEvent),
{
    let mut summary = NormalizeSummary::default();

    for theme in Theme::ALL {
        normalize_theme_dir(fallback_dir, theme, &mut summary, &mut on_event)?;
    }

    summary.placeholder_copied = ensure_dark_placeholder(fallback_dir, &mut on_event)?;

    tracing::info!(
        renamed = summary.renamed,
        skipped = summary.skipped,
        placeholder_copied = summary.placeholder_copied,
        "Fallback icon normalisation complete"
    );
    Ok(summary)
}

fn normalize_theme_dir<F>(
    fallback_dir: &Path,
    theme: Theme,
    summary: &mut NormalizeSummary,
    on_event: &mut F,
) -> Result<(), NormalizeError>
where
    F: FnMut(&NormalizeEvent),
{
    let dir = fallback_dir.join(theme.label());
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), %theme, "Theme directory missing");
        on_event(&NormalizeEvent::DirectoryMissing { theme, path: dir });
        return Ok(());
    }
    if !dir.is_dir() {
        return Err(NormalizeError::NotADirectory { path: dir });
    }

    let files = list_files(&dir, &[constants::FALLBACK_INCLUDE_PATTERN]).map_err(|source| {
        NormalizeError::ReadDir {
            path: dir.clone(),
            source,
        }
    })?;

    for file in files {
        if !file.file_name.contains(constants::TOKEN_SEPARATOR) {
            continue;
        }

        let Some(canonical) = canonicalize(&file.file_name, theme.label()) else {
            tracing::debug!(file = %file.file_name, %theme, "No theme marker token");
            summary.skipped += 1;
            on_event(&NormalizeEvent::Skipped {
                theme,
                file_name: file.file_name,
            });
            continue;
        };

        if canonical == constants::PNG_SUFFIX {
            tracing::warn!(
                file = %file.file_name,
                %theme,
                "Theme marker is the first token; canonical name has an empty stem"
            );
        }

        let target = dir.join(&canonical);
        std::fs::rename(&file.path, &target).map_err(|source| NormalizeError::Rename {
            from: file.path.clone(),
            to: target.clone(),
            source,
        })?;

        tracing::debug!(from = %file.path.display(), to = %target.display(), "Renamed");
        summary.renamed += 1;
        on_event(&NormalizeEvent::Renamed {
            theme,
            from: file.file_name,
            to: canonical,
        });
    }

    Ok(())
}

/// Copy `light/hero_order_confirm.png` to `dark/` when the dark one is absent.
/// Returns whether a copy was made.
fn ensure_dark_placeholder<F>(fallback_dir: &Path, on_event: &mut F) -> Result<bool, NormalizeError>
where
    F: FnMut(&NormalizeEvent),
{
    let file_name = format!("{}{}", constants::PLACEHOLDER_ICON, constants::PNG_SUFFIX);
    let light = fallback_dir.join(Theme::Light.label()).join(&file_name);
    let dark = fallback_dir.join(Theme::Dark.label()).join(&file_name);

    if dark.exists() {
        on_event(&NormalizeEvent::PlaceholderPresent { path: dark });
        return Ok(false);
    }
    if !light.exists() {
        tracing::debug!(path = %light.display(), "No light icon to copy as dark placeholder");
        return Ok(false);
    }

    std::fs::copy(&light, &dark).map_err(|source| NormalizeError::Copy {
        from: light.clone(),
        to: dark.clone(),
        source,
    })?;

    tracing::info!(from = %light.display(), to = %dark.display(), "Dark placeholder created");
    on_event(&NormalizeEvent::PlaceholderCopied {
        from: light,
        to: dark,
    });
    Ok(true)
}
