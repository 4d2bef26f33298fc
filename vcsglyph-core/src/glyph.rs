//! Glyph assets and the attributes applied to them

use crate::provider::ProviderType;

pub const GITHUB_SVG: &str = include_str!("icons/github.svg");
pub const GITLAB_SVG: &str = include_str!("icons/gitlab.svg");
pub const BITBUCKET_SVG: &str = include_str!("icons/bitbucket.svg");
/// Generic cloud glyph, used for providers without a dedicated one
pub const CLOUD_SVG: &str = include_str!("icons/cloud.svg");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    GitHub,
    GitLab,
    Bitbucket,
    Cloud,
}

impl GlyphKind {
    pub fn for_provider(provider: ProviderType) -> GlyphKind {
        crate::selector::provider_glyph(provider, None).kind()
    }

    pub fn name(&self) -> &'static str {
        match self {
            GlyphKind::GitHub => "github",
            GlyphKind::GitLab => "gitlab",
            GlyphKind::Bitbucket => "bitbucket",
            GlyphKind::Cloud => "cloud",
        }
    }

    pub fn svg(&self) -> &'static str {
        match self {
            GlyphKind::GitHub => GITHUB_SVG,
            GlyphKind::GitLab => GITLAB_SVG,
            GlyphKind::Bitbucket => BITBUCKET_SVG,
            GlyphKind::Cloud => CLOUD_SVG,
        }
    }
}

/// A selected glyph together with its size override and style class.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGlyph {
    kind: GlyphKind,
    size: Option<f64>,
    class: Option<String>,
}

impl IconGlyph {
    pub fn new(kind: GlyphKind, class: Option<String>) -> Self {
        Self {
            kind,
            size: None,
            class,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn kind(&self) -> GlyphKind {
        self.kind
    }

    /// Size override; `None` means the renderer's default glyph size.
    pub fn size(&self) -> Option<f64> {
        self.size
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Attributes injected on the root `<svg>` element, in emission order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(size) = self.size {
            attrs.push(("width", size.to_string()));
            attrs.push(("height", size.to_string()));
        }
        if let Some(class) = &self.class {
            attrs.push(("class", class.clone()));
        }
        attrs
    }

    /// SVG markup for this glyph.
    pub fn to_svg(&self) -> String {
        let svg = self.kind.svg();
        let Some(rest) = svg.strip_prefix("<svg") else {
            return svg.to_string();
        };

        let mut out = String::with_capacity(svg.len() + 64);
        out.push_str("<svg");
        for (name, value) in self.attributes() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr(&value, &mut out);
            out.push('"');
        }
        out.push_str(rest);
        out
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}
