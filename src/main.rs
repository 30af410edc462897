//! Inkpad - A terminal markdown editor with live preview.
//!
//! # Usage
//!
//! ```bash
//! inkpad NOTES.md
//! inkpad --no-preview NOTES.md
//! inkpad --split 60
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inkpad::app::App;
use inkpad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use inkpad::host::TerminalHost;

/// A terminal markdown editor with live preview
#[derive(Parser, Debug)]
#[command(name = "inkpad", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (omit to start with an empty document)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start with the preview pane visible (the default)
    #[arg(long)]
    preview: bool,

    /// Start with the preview pane hidden
    #[arg(long)]
    no_preview: bool,

    /// Hide the title bar
    #[arg(long)]
    no_chrome: bool,

    /// Initial splitter position as the editor pane's percentage
    #[arg(long, value_name = "PERCENT")]
    split: Option<u16>,

    /// Save current command-line flags as defaults in .inkpadrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .inkpadrc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    if let Some(file) = &cli.file
        && !file.exists()
    {
        anyhow::bail!("File not found: {}", file.display());
    }

    let host = TerminalHost::detect();
    let mut app = App::new(Box::new(host))
        .with_file(cli.file)
        .with_preview_visible(effective.preview_visible())
        .with_chrome(!effective.no_chrome)
        .with_split_percent(
            effective
                .split
                .unwrap_or(inkpad::ui::DEFAULT_SPLIT_PERCENT),
        );

    app.run().context("Application error")
}
