//! Slash commands available inside the chat loop.

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/new` -- start a fresh consultation.
    New,
    /// `/sessions` -- list past consultations.
    Sessions,
    /// `/load <id>` -- re-open a past consultation.
    Load(String),
    /// `/help` -- show available commands.
    Help,
    /// `/quit` or `/exit` -- leave the chat.
    Quit,
    /// Anything else starting with a slash.
    Unknown(String),
}

/// Parse a line as a slash command. Returns `None` for ordinary input.
pub fn parse(line: &str) -> Option<ChatCommand> {
    let line = line.trim();
    if !line.starts_with('/') {
        return None;
    }
    let mut parts = line.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    let command = match head {
        "/new" => ChatCommand::New,
        "/sessions" => ChatCommand::Sessions,
        "/load" if !rest.is_empty() => ChatCommand::Load(rest.to_string()),
        "/help" => ChatCommand::Help,
        "/quit" | "/exit" => ChatCommand::Quit,
        other => ChatCommand::Unknown(other.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_input_is_not_a_command() {
        assert_eq!(parse("I have a headache"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("/new"), Some(ChatCommand::New));
        assert_eq!(parse("/sessions"), Some(ChatCommand::Sessions));
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse("/exit"), Some(ChatCommand::Quit));
    }

    #[test]
    fn test_load_takes_an_argument() {
        assert_eq!(
            parse("/load 01916ed3"),
            Some(ChatCommand::Load("01916ed3".to_string()))
        );
        // `/load` without an id is not a valid load.
        assert_eq!(
            parse("/load"),
            Some(ChatCommand::Unknown("/load".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("/frobnicate"),
            Some(ChatCommand::Unknown("/frobnicate".to_string()))
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse("  /new  "), Some(ChatCommand::New));
    }
}
