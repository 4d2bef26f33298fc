use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
