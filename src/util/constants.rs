// email-icons - util/constants.rs
//
// Single source of truth for named constants, fixed paths, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "email-icons";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Asset layout
// =============================================================================

/// Asset root, relative to the working directory the tools are run from.
pub const DEFAULT_ASSET_ROOT: &str = "public/email-icons";

/// Subdirectory of the asset root holding generated SVG hero icons.
pub const HERO_DIR_NAME: &str = "hero";

/// Subdirectory of the asset root holding exported PNG fallback icons.
pub const FALLBACK_DIR_NAME: &str = "fallback";

/// Extension of fallback icon files, including the dot.
pub const PNG_SUFFIX: &str = ".png";

/// Extension of generated hero icon files, including the dot.
pub const SVG_SUFFIX: &str = ".svg";

/// Filename glob a fallback entry must match to be considered for renaming.
pub const FALLBACK_INCLUDE_PATTERN: &str = "*.png";

/// Separator between tokens of a legacy export filename.
pub const TOKEN_SEPARATOR: char = '_';

/// The one icon whose dark fallback is back-filled from the light one.
pub const PLACEHOLDER_ICON: &str = "hero_order_confirm";

/// Category used by email templates for icon names outside the catalog.
pub const DEFAULT_CATEGORY: &str = "system";

/// Path segment between the application base URL and the hero tree.
pub const HERO_URL_PREFIX: &str = "email-icons/hero";

// =============================================================================
// SVG template
// =============================================================================

/// Width and height of every generated hero icon, in user units.
pub const ICON_SIZE: u32 = 120;

/// Light variant background (white).
pub const LIGHT_BACKGROUND: &str = "#FFFFFF";

/// Light variant accent (emerald 500).
pub const LIGHT_ACCENT: &str = "#10B981";

/// Dark variant background (near-black).
pub const DARK_BACKGROUND: &str = "#111827";

/// Dark variant accent (emerald 400).
pub const DARK_ACCENT: &str = "#34D399";

// =============================================================================
// Configuration / logging
// =============================================================================

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "email-icons.toml";

/// Default tracing filter when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
