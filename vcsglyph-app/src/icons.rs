//! Provider glyph views

use floem::{
    AnyView, IntoView, View,
    views::{Decorators, empty, svg},
};
use vcsglyph_core::{IconGlyph, render};

/// Glyph for a raw provider tag, or an empty view when the tag is unknown.
///
/// The style hint only travels as the `class` attribute of the SVG markup.
/// floem's svg renderer does not read it and nothing applies it to the view's
/// style, so it has no visual effect here.
pub fn provider_icon(tag: &str, style_hint: Option<&str>, default_size: f64) -> AnyView {
    match icon_markup(tag, style_hint, default_size) {
        Some((markup, size)) => svg_view(markup, size).into_any(),
        None => empty().into_any(),
    }
}

/// SVG markup and rendered size for a tag.
fn icon_markup(tag: &str, style_hint: Option<&str>, default_size: f64) -> Option<(String, f64)> {
    render(tag, style_hint).map(|glyph| (glyph.to_svg(), glyph_size(&glyph, default_size)))
}

fn glyph_size(glyph: &IconGlyph, default_size: f64) -> f64 {
    glyph.size().unwrap_or(default_size)
}

fn svg_view(markup: String, size: f64) -> impl View {
    svg(move || markup.clone()).style(move |s| s.width(size).height(size).min_width(size))
}

#[cfg(test)]
mod tests {
    use vcsglyph_core::GITHUB_ICON_SIZE;

    use super::*;

    #[test]
    fn test_unknown_tag_has_no_markup() {
        assert_eq!(icon_markup("unknown-provider", Some("x"), 16.0), None);
        assert_eq!(icon_markup("", None, 16.0), None);
    }

    #[test]
    fn test_size_falls_back_to_default() {
        for tag in ["gitlab", "bitbucket", "codecommit"] {
            let (markup, size) = icon_markup(tag, None, 18.0).unwrap();
            assert_eq!(size, 18.0, "{tag}");
            assert!(!markup.contains("width="), "{tag}");
        }
    }

    #[test]
    fn test_github_keeps_its_override() {
        let (markup, size) = icon_markup("github", Some("icon-lg"), 18.0).unwrap();
        assert_eq!(size, GITHUB_ICON_SIZE);
        assert!(markup.contains(r#"class="icon-lg""#));
    }
}
