use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Deserializer, Serialize};
use vcsglyph_core::{ProviderType, directory::Directory};

pub const CONFIG_FILE_NAME: &str = "vcsglyph.toml";
pub const ENV_PREFIX: &str = "VCSGLYPH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Style class forwarded to every glyph
    pub style_hint: Option<String>,
    /// Provider tags to show, unknown ones render as a gap
    #[serde(deserialize_with = "deserialize_tags")]
    pub providers: Vec<String>,
    /// Glyph size used when a glyph carries no size override
    pub icon_size: f64,
    pub font_size: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style_hint: None,
            providers: ProviderType::all()
                .iter()
                .map(|provider| provider.as_str().to_string())
                .collect(),
            icon_size: 16.0,
            font_size: 13.0,
        }
    }
}

/// A TOML array, or a comma separated string as set through the environment.
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Tags::deserialize(deserializer)? {
        Tags::List(tags) => tags,
        Tags::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

impl AppConfig {
    /// Defaults, then the user config file, then `explicit`, then
    /// `VCSGLYPH_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user_file = Directory::config_directory().map(|dir| dir.join(CONFIG_FILE_NAME));
        Self::load_from(user_file.as_deref(), explicit, None)
    }

    /// `env` replaces the process environment when given.
    fn load_from(
        user_file: Option<&Path>,
        explicit: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = user_file {
            tracing::debug!("Reading user config from {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        if let Some(path) = explicit {
            tracing::debug!("Reading config from {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        // Values stay strings: the style hint must reach the glyph untouched.
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(env));

        let config = builder.build().context("failed to load configuration")?;
        config
            .try_deserialize::<AppConfig>()
            .context("invalid configuration")
    }

    /// Command line values take precedence over every config source.
    pub fn apply_overrides(&mut self, style_hint: Option<String>, providers: Vec<String>) {
        if style_hint.is_some() {
            self.style_hint = style_hint;
        }
        if !providers.is_empty() {
            self.providers = providers;
        }
    }
}
