//! Hosting provider identifiers

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::error::GlyphError;

/// The source-control hosting service behind a connected account
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum ProviderType {
    #[serde(rename = "github")]
    #[strum(serialize = "github")]
    GitHub,
    #[serde(rename = "gitlab")]
    #[strum(serialize = "gitlab")]
    GitLab,
    #[serde(rename = "bitbucket")]
    #[strum(serialize = "bitbucket")]
    Bitbucket,
    #[serde(rename = "codecommit")]
    #[strum(serialize = "codecommit")]
    CodeCommit,
}

impl ProviderType {
    pub fn all() -> &'static [ProviderType] {
        &[
            ProviderType::GitHub,
            ProviderType::GitLab,
            ProviderType::Bitbucket,
            ProviderType::CodeCommit,
        ]
    }

    /// Canonical lowercase tag, as reported by the provider service
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::GitHub => "GitHub",
            ProviderType::GitLab => "GitLab",
            ProviderType::Bitbucket => "Bitbucket",
            ProviderType::CodeCommit => "AWS CodeCommit",
        }
    }

    /// Exact, case-sensitive lookup of a canonical tag.
    pub fn from_tag(tag: &str) -> Option<ProviderType> {
        ProviderType::iter().find(|provider| provider.as_str() == tag)
    }
}

impl FromStr for ProviderType {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderType::from_tag(s)
            .ok_or_else(|| GlyphError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(ProviderType::GitHub.as_str(), "github");
        assert_eq!(ProviderType::GitLab.as_str(), "gitlab");
        assert_eq!(ProviderType::Bitbucket.as_str(), "bitbucket");
        assert_eq!(ProviderType::CodeCommit.as_str(), "codecommit");
        assert_eq!(ProviderType::CodeCommit.to_string(), "codecommit");
    }

    #[test]
    fn test_all_matches_iter() {
        let iterated: Vec<_> = ProviderType::iter().collect();
        assert_eq!(ProviderType::all(), iterated.as_slice());
    }

    #[test]
    fn test_from_tag() {
        for provider in ProviderType::all() {
            assert_eq!(ProviderType::from_tag(provider.as_str()), Some(*provider));
        }
        assert_eq!(ProviderType::from_tag("GitHub"), None);
        assert_eq!(ProviderType::from_tag("unknown-provider"), None);
        assert_eq!(ProviderType::from_tag(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("gitlab".parse::<ProviderType>(), Ok(ProviderType::GitLab));
        assert_eq!(
            "azure".parse::<ProviderType>(),
            Err(GlyphError::UnknownProvider("azure".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&ProviderType::CodeCommit).unwrap();
        assert_eq!(json, "\"codecommit\"");
        let provider: ProviderType = serde_json::from_str("\"bitbucket\"").unwrap();
        assert_eq!(provider, ProviderType::Bitbucket);
        assert!(serde_json::from_str::<ProviderType>("\"svn\"").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ProviderType::GitHub.display_name(), "GitHub");
        assert_eq!(ProviderType::CodeCommit.display_name(), "AWS CodeCommit");
    }
}
