//! Provider to glyph mapping

use crate::glyph::{GlyphKind, IconGlyph};
use crate::provider::ProviderType;

/// Size override applied to the GitHub glyph only.
pub const GITHUB_ICON_SIZE: f64 = 14.0;

/// Select the glyph for a provider, forwarding `style_hint` as its class.
///
/// CodeCommit has no dedicated glyph and gets the generic cloud one. Only the
/// GitHub glyph carries a size override; the rest use the renderer default.
pub fn provider_glyph(provider: ProviderType, style_hint: Option<&str>) -> IconGlyph {
    let class = style_hint.map(str::to_string);
    match provider {
        ProviderType::GitHub => {
            IconGlyph::new(GlyphKind::GitHub, class).with_size(GITHUB_ICON_SIZE)
        }
        ProviderType::GitLab => IconGlyph::new(GlyphKind::GitLab, class),
        ProviderType::Bitbucket => IconGlyph::new(GlyphKind::Bitbucket, class),
        ProviderType::CodeCommit => IconGlyph::new(GlyphKind::Cloud, class),
    }
}

/// Untyped entry point: an unrecognized tag renders nothing.
pub fn render(tag: &str, style_hint: Option<&str>) -> Option<IconGlyph> {
    ProviderType::from_tag(tag).map(|provider| provider_glyph(provider, style_hint))
}
