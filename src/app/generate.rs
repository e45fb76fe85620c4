// email-icons - app/generate.rs
//
// Hero icon generation job: writes a light and a dark placeholder SVG for
// every catalog entry under `<hero_dir>/<category>/`.

use crate::core::catalog::HERO_ICONS;
use crate::core::model::{IconDescriptor, Theme};
use crate::core::svg::render_hero_svg;
use crate::util::error::GenerateError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One SVG file written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub icon: IconDescriptor,
    pub theme: Theme,
    pub path: PathBuf,
}

/// Totals for a completed generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub files_written: usize,
    pub categories: usize,
}

/// Generate every catalog icon into `hero_dir`.
pub fn generate_hero_icons<F>(
    hero_dir: &Path,
    on_written: F,
) -> Result<GenerateSummary, GenerateError>
where
    F: FnMut(&GeneratedAsset),
{
    generate_icons(hero_dir, HERO_ICONS, on_written)
}

/// Generate light and dark SVGs for `icons` into `hero_dir`.
///
/// Category directories are created as needed; existing files are
/// overwritten. `on_written` is called after each file lands on disk. The
/// first filesystem error aborts the run.
pub fn generate_icons<F>(
    hero_dir: &Path,
    icons: &[IconDescriptor],
    mut on_written: F,
) -> Result<GenerateSummary, GenerateError>
where
    F: FnMut(&GeneratedAsset),
{
    tracing::debug!(
        hero_dir = %hero_dir.display(),
        icons = icons.len(),
        "Generation starting"
    );

    let mut summary = GenerateSummary::default();
    let mut categories = BTreeSet::new();

    for icon in icons {
        let category_dir = hero_dir.join(icon.category);
        if categories.insert(icon.category) {
            std::fs::create_dir_all(&category_dir).map_err(|source| {
                GenerateError::CreateDir {
                    path: category_dir.clone(),
                    source,
                }
            })?;
        }

        for theme in Theme::ALL {
            let path = hero_dir.join(icon.relative_path(theme));
            let svg = render_hero_svg(icon.name, theme);
            std::fs::write(&path, svg).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;

            tracing::debug!(path = %path.display(), %theme, "Wrote hero icon");
            summary.files_written += 1;
            on_written(&GeneratedAsset {
                icon: *icon,
                theme,
                path,
            });
        }
    }

    summary.categories = categories.len();
    tracing::info!(
        files = summary.files_written,
        categories = summary.categories,
        "Hero icon generation complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_both_variants_under_category() {
        let dir = tempfile::tempdir().expect("tempdir");
        let icons = [IconDescriptor {
            name: "hero_lock",
            category: "auth",
        }];

        let mut seen = Vec::new();
        let summary = generate_icons(dir.path(), &icons, |a| seen.push(a.clone())).unwrap();

        assert_eq!(
            summary,
            GenerateSummary {
                files_written: 2,
                categories: 1
            }
        );
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].theme, Theme::Light);
        assert_eq!(seen[1].path, dir.path().join("auth").join("hero_lock_dark.svg"));
        assert!(dir.path().join("auth").join("hero_lock.svg").is_file());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("team");
        fs::create_dir_all(&target).expect("mkdir");
        fs::write(target.join("hero_invite.svg"), "stale").expect("write");

        let icons = [IconDescriptor {
            name: "hero_invite",
            category: "team",
        }];
        generate_icons(dir.path(), &icons, |_| {}).unwrap();

        let content = fs::read_to_string(target.join("hero_invite.svg")).expect("read");
        assert_eq!(content, render_hero_svg("hero_invite", Theme::Light));
    }

    #[test]
    fn test_category_blocked_by_file_is_create_dir_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("auth"), "not a directory").expect("write");

        let icons = [IconDescriptor {
            name: "hero_lock",
            category: "auth",
        }];
        let result = generate_icons(dir.path(), &icons, |_| {});
        assert!(
            matches!(result, Err(GenerateError::CreateDir { .. })),
            "got {result:?}"
        );
    }
}
