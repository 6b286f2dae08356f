//! CLI command definitions and dispatch for the `mediq` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `mediq sessions`, `mediq show <id>`).

pub mod chat;
pub mod session;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// AI health consultation assistant.
#[derive(Parser)]
#[command(name = "mediq", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive consultation.
    Chat,

    /// List past consultations.
    #[command(alias = "ls")]
    Sessions {
        /// Filter by title or message content (case-insensitive).
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the full transcript of a consultation.
    Show {
        /// Session id (or unique prefix).
        id: String,
    },

    /// Delete a consultation from history.
    #[command(alias = "rm")]
    Delete {
        /// Session id (or unique prefix).
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// Export history (or one session) as JSON.
    Export {
        /// Session id (or unique prefix). Omit for the whole history.
        id: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sessions_alias() {
        let cli = Cli::try_parse_from(["mediq", "ls", "--search", "fever"]).unwrap();
        match cli.command {
            Commands::Sessions { search } => assert_eq!(search.as_deref(), Some("fever")),
            _ => panic!("expected sessions command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["mediq", "--json", "-vv", "sessions"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
