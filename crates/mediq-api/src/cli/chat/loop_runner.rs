//! Main chat loop orchestration.
//!
//! Coordinates the consultation lifecycle: the auth gate, welcome banner,
//! input loop with slash commands, the spinner while a diagnosis is in
//! flight, and rendering of replies and failures.

use std::time::Duration;

use console::style;
use indicatif::ProgressBar;
use tracing::info;

use mediq_core::history;
use mediq_types::error::SubmitError;

use crate::cli::session::resolve_session;
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;

/// Run the interactive consultation loop.
pub async fn run_chat_loop(state: &mut AppState) -> anyhow::Result<()> {
    let Some(user) = state.auth.user.clone().filter(|_| state.auth.is_authenticated) else {
        println!();
        println!(
            "  {} You are not signed in. Add a [user] section with your name and \
             email to {} and try again.",
            style("!").red().bold(),
            style(state.data_dir.join("config.toml").display()).cyan()
        );
        println!();
        return Ok(());
    };

    print_welcome_banner(&user);
    info!(user = %user.email, "chat loop started");

    if state.service.store().current().is_none() {
        state.service.start_new()?;
    }

    let (mut input, _writer) = ChatInput::new("you> ")?;

    loop {
        match input.read_line().await {
            InputEvent::Message(line) if line.is_empty() => continue,
            InputEvent::Message(line) => {
                if let Some(command) = commands::parse(&line) {
                    if handle_command(state, command).await? {
                        break;
                    }
                    continue;
                }
                submit_turn(state, &line).await;
            }
            InputEvent::Eof | InputEvent::Interrupted => break,
        }
    }

    println!();
    println!("  {}", style("Take care!").dim());
    Ok(())
}

/// Handle one slash command. Returns true when the loop should exit.
async fn handle_command(state: &mut AppState, command: ChatCommand) -> anyhow::Result<bool> {
    match command {
        ChatCommand::Quit => return Ok(true),
        ChatCommand::Help => print_help(),
        ChatCommand::New => {
            state.service.start_new()?;
            println!(
                "  {} Started a new consultation.",
                style("ok").green().bold()
            );
            println!();
        }
        ChatCommand::Sessions => print_history(state),
        ChatCommand::Load(needle) => {
            let resolved = resolve_session(state.service.store().history(), &needle);
            match resolved {
                Ok(id) => {
                    state.service.open_session(id)?;
                    if let Some(session) = state.service.store().current() {
                        println!();
                        println!("  {}", style(&session.title).bold());
                        println!();
                        renderer::print_transcript(session);
                    }
                }
                Err(err) => {
                    println!("  {} {err}", style("!").red().bold());
                    println!();
                }
            }
        }
        ChatCommand::Unknown(cmd) => {
            println!(
                "  {} Unknown command '{}'. Type /help for the list.",
                style("!").red().bold(),
                cmd
            );
            println!();
        }
    }
    Ok(false)
}

/// Submit one symptom description and render the outcome.
async fn submit_turn(state: &mut AppState, line: &str) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("AI is analyzing your symptoms...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = state.service.submit(line).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(reply) => renderer::print_message(&reply),
        Err(SubmitError::Provider(err)) => renderer::print_provider_failure(&err),
        Err(SubmitError::Busy) => {
            println!(
                "  {} Still analyzing your previous message; please wait.",
                style("!").yellow().bold()
            );
            println!();
        }
        Err(err) => {
            println!("  {} {err}", style("!").red().bold());
            println!();
        }
    }
}

fn print_history(state: &AppState) {
    let sessions = history::search(state.service.store().history(), "");
    if sessions.is_empty() {
        println!("  {} No past consultations.", style("i").blue().bold());
        println!();
        return;
    }
    println!();
    for session in sessions {
        let short: String = session.id.to_string().chars().take(8).collect();
        println!(
            "  {}  {}  {}",
            style(short).dim(),
            session.title,
            style(
                session
                    .last_updated
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            )
            .dim()
        );
    }
    println!();
}

fn print_help() {
    println!();
    println!("  {}", style("Commands").bold());
    println!("    /new            start a fresh consultation");
    println!("    /sessions       list past consultations");
    println!("    /load <id>      re-open a past consultation");
    println!("    /help           show this help");
    println!("    /quit           leave the chat");
    println!();
}
