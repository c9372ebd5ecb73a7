//! Subcommand handlers. Each one drives an [`EditorSession`] the way the
//! editor UI would and prints what the UI would show.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tinter_ai::{RemixTransformer, StyleDirective};
use tinter_common::{Notification, NotificationLevel, TinterError};
use tinter_config::{files, presets, TinterConfig};
use tinter_editor::{EditorRow, EditorSession, ScrollTarget, SessionConfig};
use tinter_preview::EditorTab;
use tracing::{debug, info};

use crate::cli::{Command, FieldEdit, Source};

/// Stands in for the editor pane: rows are always "rendered".
struct TerminalScroll;

impl ScrollTarget for TerminalScroll {
    fn scroll_into_view(&self, row_id: &str) -> bool {
        println!("scrolled to #{row_id}");
        true
    }
}

pub async fn run(command: Command, config: &TinterConfig) -> Result<(), TinterError> {
    match command {
        Command::Presets => {
            for preset in presets::list() {
                println!("{:<12} {}", preset.id, preset.name);
            }
            Ok(())
        }
        Command::Show { source, tab } => show(&open(&source, config)?, tab),
        Command::Export { source, edits, out } => {
            let session = open(&source, config)?;
            apply_edits(&session, &edits);
            export(&session, out.as_deref())
        }
        Command::Remix { source, style, out } => {
            let session = open(&source, config)?;
            remix(&session, config, style.as_deref()).await?;
            export(&session, out.as_deref())
        }
        Command::Regions { source } => {
            let session = open(&source, config)?;
            for region in session.render() {
                let styles: Vec<String> = region
                    .styles
                    .iter()
                    .map(|s| format!("{}={}", s.prop, s.value))
                    .collect();
                println!("{:<32} {:<40} {}", region.id, region.target, styles.join(" "));
            }
            Ok(())
        }
        Command::Pick { region, source } => pick(&open(&source, config)?, &region).await,
    }
}

/// Start a session on the requested document.
fn open(source: &Source, config: &TinterConfig) -> Result<EditorSession, TinterError> {
    let session = EditorSession::new(SessionConfig::from(&config.editor), Arc::new(TerminalScroll))?;
    if let Some(preset) = &source.preset {
        session.load_preset(preset)?;
    } else if let Some(path) = &source.file {
        session.open_document(files::load_document(path)?);
    }
    debug!(provenance = %session.provenance(), "session opened");
    Ok(session)
}

fn apply_edits(session: &EditorSession, edits: &[FieldEdit]) {
    for edit in edits {
        if !tinter_config::colors::validate_color(&edit.value) {
            info!(field = %edit.path, value = %edit.value, "value is not a plain color, stored as-is");
        }
        session.edit_field(edit.path.category, &edit.path.key, edit.value.as_str());
    }
}

fn show(session: &EditorSession, tab: EditorTab) -> Result<(), TinterError> {
    if tab == EditorTab::Json {
        println!("{}", session.json()?);
        return Ok(());
    }
    println!("{} ({})", session.document().name, session.provenance());
    for row in session.rows(tab) {
        println!("{}", format_row(&row));
    }
    Ok(())
}

fn format_row(row: &EditorRow) -> String {
    let marker = if row.highlighted { '>' } else { ' ' };
    format!("{marker} {:<28} {:<44} {}", row.label, row.value, row.picker_hex)
}

fn export(session: &EditorSession, out: Option<&Path>) -> Result<(), TinterError> {
    let dir = match out {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let path: PathBuf = files::export_to_dir(&session.document(), &dir)?;
    println!("{}", path.display());
    Ok(())
}

async fn remix(
    session: &EditorSession,
    config: &TinterConfig,
    style: Option<&str>,
) -> Result<(), TinterError> {
    let mut transformer = RemixTransformer::from_config(&config.ai)?;
    if let Some(name) = style {
        let directive = StyleDirective::builtin(name).ok_or_else(|| {
            TinterError::Ai(format!(
                "unknown style '{name}' (available: {})",
                StyleDirective::builtin_names().join(", ")
            ))
        })?;
        transformer = transformer.with_directive(directive);
    }

    let timeout = Duration::from_secs(config.ai.timeout_secs);
    let result = session.transform_with_timeout(&transformer, timeout).await;
    print_notifications(&session.notifications());
    let outcome = result?;
    info!(?outcome, name = %session.document().name, "remix finished");
    Ok(())
}

fn print_notifications(notifications: &[Notification]) {
    for note in notifications {
        match note.level {
            NotificationLevel::Info => eprintln!("info: {}", note.message),
            NotificationLevel::Error => eprintln!("error: {}", note.message),
        }
    }
}

async fn pick(session: &EditorSession, region: &str) -> Result<(), TinterError> {
    let field = session.select_region(region)?;
    let tab = session.active_tab();
    println!("{region} -> {field} [{tab}]");

    // Let the deferred scroll land before printing the tab.
    tokio::time::sleep(session.config().scroll_delay + Duration::from_millis(10)).await;
    for row in session.rows(tab) {
        if row.highlighted {
            println!("{}", format_row(&row));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinter_config::{Category, FieldPath};

    fn dark() -> Source {
        Source {
            preset: Some("dark".into()),
            file: None,
        }
    }

    #[test]
    fn open_from_preset_and_file() {
        let config = TinterConfig::default();
        let session = open(&dark(), &config).unwrap();
        assert_eq!(session.document().id, "dark");

        let dir = tempfile::tempdir().unwrap();
        let path = files::export_to_dir(&presets::load("nord").unwrap(), dir.path()).unwrap();
        let source = Source {
            preset: None,
            file: Some(path),
        };
        let session = open(&source, &config).unwrap();
        assert_eq!(session.provenance().preset_id(), Some("nord"));

        let missing = Source {
            preset: Some("neon".into()),
            file: None,
        };
        assert!(open(&missing, &config).is_err());
    }

    #[test]
    fn edits_then_export() {
        let config = TinterConfig::default();
        let session = open(&dark(), &config).unwrap();
        apply_edits(
            &session,
            &[FieldEdit {
                path: FieldPath::new(Category::NodeSlot, "MODEL"),
                value: "#123456".into(),
            }],
        );
        assert!(session.provenance().is_custom());

        let dir = tempfile::tempdir().unwrap();
        export(&session, Some(dir.path())).unwrap();
        let written = files::load_document(&dir.path().join(files::export_file_name(&session.document()))).unwrap();
        assert_eq!(written.color(Category::NodeSlot, "MODEL"), Some("#123456"));
    }

    #[test]
    fn highlighted_rows_are_marked() {
        let row = EditorRow {
            id: "input-MODEL".into(),
            key: "MODEL".into(),
            label: "MODEL".into(),
            value: "#B39DDB".into(),
            picker_hex: "#b39ddb".into(),
            highlighted: true,
        };
        assert!(format_row(&row).starts_with("> MODEL"));
    }
}
