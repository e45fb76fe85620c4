// email-icons - core/svg.rs
//
// Placeholder hero icon synthesis. A single fixed template; the only inputs
// are the label text and the theme palette.

use crate::core::model::Theme;
use crate::util::constants::ICON_SIZE;

/// Render the placeholder SVG for `name` in the given theme.
///
/// The document is `ICON_SIZE` square and contains, back to front: a rounded
/// background, a translucent rounded accent square, a circular glyph, and the
/// icon name as a label. Output is deterministic, so regenerating produces
/// byte-identical files.
pub fn render_hero_svg(name: &str, theme: Theme) -> String {
    let palette = theme.palette();
    let size = ICON_SIZE;
    let label = escape_text(name);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" fill="none">
  <rect width="{size}" height="{size}" rx="24" fill="{bg}"/>
  <rect x="30" y="22" width="60" height="60" rx="16" fill="{accent}" fill-opacity="0.15"/>
  <circle cx="60" cy="52" r="16" fill="{accent}"/>
  <text x="60" y="104" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="9" fill="{accent}">{label}</text>
</svg>
"##,
        bg = palette.background,
        accent = palette.accent,
    )
}

/// Escape the characters that are significant in XML character data.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants;

    #[test]
    fn test_light_uses_light_palette() {
        let svg = render_hero_svg("hero_lock", Theme::Light);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="120" height="120""#));
        assert!(svg.contains(constants::LIGHT_BACKGROUND));
        assert!(svg.contains(constants::LIGHT_ACCENT));
        assert!(!svg.contains(constants::DARK_BACKGROUND));
        assert!(svg.contains(">hero_lock</text>"));
    }

    #[test]
    fn test_variants_differ_only_in_colours() {
        let light = render_hero_svg("hero_alert", Theme::Light);
        let dark = render_hero_svg("hero_alert", Theme::Dark);
        assert_ne!(light, dark);

        let recoloured = light
            .replace(constants::LIGHT_BACKGROUND, constants::DARK_BACKGROUND)
            .replace(constants::LIGHT_ACCENT, constants::DARK_ACCENT);
        assert_eq!(recoloured, dark);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(
            render_hero_svg("hero_invite", Theme::Dark),
            render_hero_svg("hero_invite", Theme::Dark)
        );
    }

    #[test]
    fn test_label_is_escaped() {
        let svg = render_hero_svg("a<b&c", Theme::Light);
        assert!(svg.contains(">a&lt;b&amp;c</text>"));
    }
}
