use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tinter_config::FieldPath;
use tinter_preview::EditorTab;

/// Tinter: a color-theme editor for ComfyUI.
#[derive(Parser, Debug)]
#[command(name = "tinter", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. `tinter=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in presets.
    Presets,
    /// Print a theme as one editor tab shows it.
    Show {
        #[command(flatten)]
        source: Source,
        /// slots, graph, ui or json.
        #[arg(long, default_value = "slots", value_parser = parse_tab)]
        tab: EditorTab,
    },
    /// Apply field edits and write the theme to a file.
    Export {
        #[command(flatten)]
        source: Source,
        /// `category.key=value`, repeatable.
        #[arg(long = "set", value_parser = parse_edit)]
        edits: Vec<FieldEdit>,
        /// Directory to write into. Defaults to the current directory.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Restyle a theme with the AI model and write the result.
    Remix {
        #[command(flatten)]
        source: Source,
        /// Built-in style name. Defaults to `[ai] style` from the config.
        #[arg(long)]
        style: Option<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the preview regions and the styles they resolve to.
    Regions {
        #[command(flatten)]
        source: Source,
    },
    /// Click a preview region and report where the editor lands.
    Pick {
        /// Region id, e.g. `link.standard.0`.
        region: String,
        #[command(flatten)]
        source: Source,
    },
}

/// Where the starting document comes from.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct Source {
    /// Start from a built-in preset.
    #[arg(long, conflicts_with = "file")]
    pub preset: Option<String>,
    /// Start from a theme file (.json, .yaml).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub path: FieldPath,
    pub value: String,
}

fn parse_tab(s: &str) -> Result<EditorTab, String> {
    s.parse()
}

fn parse_edit(s: &str) -> Result<FieldEdit, String> {
    let (path, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected category.key=value, got '{s}'"))?;
    let path = path.parse::<FieldPath>().map_err(|e| e.to_string())?;
    Ok(FieldEdit {
        path,
        value: value.to_string(),
    })
}

pub fn parse() -> Args {
    Args::parse()
}
