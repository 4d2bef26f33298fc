//! Provider glyph selection for connected source-control accounts.
//!
//! The crate is UI independent: it decides which glyph a provider gets and
//! emits it as SVG markup. Turning that markup into a view is left to the
//! embedding toolkit.

pub mod directory;
pub mod error;
pub mod glyph;
pub mod provider;
pub mod selector;

pub use error::{GlyphError, Result};
pub use glyph::{GlyphKind, IconGlyph};
pub use provider::ProviderType;
pub use selector::{GITHUB_ICON_SIZE, provider_glyph, render};
