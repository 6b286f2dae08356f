//! Session management CLI commands: list, show, delete, export.
//!
//! Provides history browsing with rich tables, JSON export, and deletion
//! with a confirmation prompt.

use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, Local, Utc};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;
use uuid::Uuid;

use mediq_core::history;
use mediq_infra::snapshot::HistorySnapshot;
use mediq_types::consult::ChatSession;
use mediq_types::diagnosis::Severity;

use crate::cli::chat::renderer;
use crate::state::AppState;

/// Resolve a user-supplied session id or unique id prefix against history.
pub(crate) fn resolve_session(history: &[ChatSession], needle: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(needle) {
        if history.iter().any(|s| s.id == id) {
            return Ok(id);
        }
        bail!("session '{needle}' not found");
    }

    let prefix = needle.to_lowercase();
    let matches: Vec<Uuid> = history
        .iter()
        .map(|s| s.id)
        .filter(|id| id.to_string().starts_with(&prefix))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(anyhow!("session '{needle}' not found")),
        _ => Err(anyhow!(
            "session prefix '{needle}' is ambiguous ({} matches)",
            matches.len()
        )),
    }
}

fn severity_cell(severity: Option<Severity>) -> Cell {
    match severity {
        Some(Severity::Low) => Cell::new("low").fg(Color::Green),
        Some(Severity::Medium) => Cell::new("medium").fg(Color::Yellow),
        Some(Severity::High) => Cell::new("high").fg(Color::Red),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

/// List past consultations, optionally filtered by a search term.
pub fn list_sessions(state: &AppState, search: Option<&str>, json: bool) -> Result<()> {
    let results = history::search(state.service.store().history(), search.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!();
        match search {
            Some(term) => println!(
                "  {} No consultations match '{}'.",
                style("i").blue().bold(),
                style(term).cyan()
            ),
            None => println!(
                "  {} No consultations yet. Start one with: {}",
                style("i").blue().bold(),
                style("mediq chat").yellow()
            ),
        }
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("Updated").fg(Color::White),
        Cell::new("Msgs").fg(Color::White),
        Cell::new("Severity").fg(Color::White),
    ]);

    for session in &results {
        let summary = history::summarize(session);
        table.add_row(vec![
            Cell::new(short_id(session.id)).fg(Color::DarkGrey),
            Cell::new(&session.title),
            Cell::new(local_stamp(session.created_at)),
            Cell::new(local_stamp(session.last_updated)),
            Cell::new(summary.total_messages.to_string()),
            severity_cell(summary.last_diagnosis.map(|d| d.severity)),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Print the full transcript of one consultation.
pub fn show_session(state: &AppState, id: &str, json: bool) -> Result<()> {
    let sessions = state.service.store().history();
    let id = resolve_session(sessions, id)?;
    let session = sessions
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| anyhow!("session '{id}' not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(&session.title).bold(),
        style(format!("({})", short_id(session.id))).dim()
    );
    println!(
        "  {}",
        style(format!(
            "created {}, {} messages",
            local_stamp(session.created_at),
            session.messages.len()
        ))
        .dim()
    );
    println!();
    renderer::print_transcript(session);
    Ok(())
}

/// Delete a consultation, prompting for confirmation unless forced.
pub async fn delete_session(state: &mut AppState, id: &str, force: bool) -> Result<()> {
    let sessions = state.service.store().history();
    let id = resolve_session(sessions, id)?;
    let title = sessions
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.title.clone())
        .ok_or_else(|| anyhow!("session '{id}' not found"))?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{title}'? This cannot be undone"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  {} Aborted.", style("i").blue().bold());
            return Ok(());
        }
    }

    state.service.delete(id).await?;
    println!(
        "  {} Deleted '{}'.",
        style("ok").green().bold(),
        style(&title).cyan()
    );
    Ok(())
}

/// Export one session, or the whole history, as pretty-printed JSON.
pub fn export(state: &AppState, id: Option<&str>) -> Result<()> {
    let sessions = state.service.store().history();
    match id {
        Some(needle) => {
            let id = resolve_session(sessions, needle)?;
            let session = sessions
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| anyhow!("session '{id}' not found"))?;
            println!("{}", serde_json::to_string_pretty(session)?);
        }
        None => {
            let snapshot = HistorySnapshot {
                history: sessions.to_vec(),
            };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn local_stamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
