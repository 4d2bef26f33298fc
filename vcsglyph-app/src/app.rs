use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use floem::{
    View,
    style::AlignItems,
    views::{Decorators, dyn_stack, h_stack, label},
};
use vcsglyph_core::{ProviderType, directory::Directory, render};

use crate::{config::AppConfig, icons::provider_icon, logging::init_logging};

#[derive(Parser, Debug)]
#[command(name = "vcsglyph", version, about = "Show provider glyphs for connected accounts")]
pub struct Cli {
    /// Extra config file, applied after the user config
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Style class forwarded to every glyph
    #[arg(long)]
    pub style_hint: Option<String>,
    /// Print SVG markup to stdout instead of opening a window
    #[arg(long)]
    pub print: bool,
    /// Provider tags to show, e.g. github gitlab
    pub providers: Vec<String>,
}

pub fn launch() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(Directory::logs_directory().as_deref())?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.style_hint, cli.providers);
    tracing::debug!("Resolved config: {:?}", config);

    for tag in &config.providers {
        if ProviderType::from_tag(tag).is_none() {
            tracing::info!("No glyph for provider {:?}, it will render empty", tag);
        }
    }

    if cli.print {
        let stdout = io::stdout();
        write_glyphs(&config, &mut stdout.lock()).context("failed to write glyphs")?;
        return Ok(());
    }

    tracing::info!("Opening window with {} providers", config.providers.len());
    floem::launch(move || app_view(config));
    Ok(())
}

/// One line per tag: the glyph markup, or a comment for unknown tags.
pub fn write_glyphs(config: &AppConfig, out: &mut impl Write) -> io::Result<()> {
    for tag in &config.providers {
        match render(tag, config.style_hint.as_deref()) {
            Some(glyph) => writeln!(out, "{}", glyph.to_svg().trim_end())?,
            None => writeln!(out, "<!-- no glyph for {tag} -->")?,
        }
    }
    Ok(())
}

fn row_label(tag: &str) -> String {
    ProviderType::from_tag(tag)
        .map(|provider| provider.display_name().to_string())
        .unwrap_or_else(|| tag.to_string())
}

fn app_view(config: AppConfig) -> impl View {
    let rows: Vec<(usize, String)> = config.providers.iter().cloned().enumerate().collect();
    let style_hint = config.style_hint.clone();
    let icon_size = config.icon_size;
    let font_size = config.font_size;

    dyn_stack(
        move || rows.clone(),
        |(index, _)| *index,
        move |(_, tag)| {
            let text = row_label(&tag);
            h_stack((
                provider_icon(&tag, style_hint.as_deref(), icon_size),
                label(move || text.clone()).style(move |s| s.font_size(font_size)),
            ))
            .style(|s| s.align_items(AlignItems::Center).gap(8.0).padding_vert(4.0))
        },
    )
    .style(|s| s.flex_col().size_full().padding(12.0))
}
