// email-icons - core/model.rs
//
// Core data types shared by both jobs: icon descriptors and colour-scheme
// variants.

use crate::util::constants;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Theme
// =============================================================================

/// Colour-scheme variant of an icon, selected by the email client's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Both variants, in processing order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Directory name and legacy filename marker token for this variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Suffix appended to the icon name for generated SVG files.
    /// The light variant carries no suffix.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "_dark",
        }
    }

    /// Colours used to paint the hero SVG for this variant.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: constants::LIGHT_BACKGROUND,
                accent: constants::LIGHT_ACCENT,
            },
            Self::Dark => Palette {
                background: constants::DARK_BACKGROUND,
                accent: constants::DARK_ACCENT,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Background and accent colours as SVG colour strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub accent: &'static str,
}

// =============================================================================
// Icon descriptor
// =============================================================================

/// A named hero icon and the category directory it is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    pub name: &'static str,
    pub category: &'static str,
}

impl IconDescriptor {
    /// File name of this icon's SVG for `theme`, e.g. `hero_lock_dark.svg`.
    pub fn file_name(&self, theme: Theme) -> String {
        format!(
            "{}{}{}",
            self.name,
            theme.file_suffix(),
            constants::SVG_SUFFIX
        )
    }

    /// Path of the SVG relative to the hero directory:
    /// `<category>/<name>[_dark].svg`.
    pub fn relative_path(&self, theme: Theme) -> PathBuf {
        PathBuf::from(self.category).join(self.file_name(theme))
    }
}
