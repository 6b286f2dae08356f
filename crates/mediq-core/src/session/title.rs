//! Session title derivation.
//!
//! Titles come from the first user message of a session: the first five
//! whitespace-separated words, joined by single spaces, with a trailing
//! ellipsis when the message had more to say.

/// Number of leading words kept for the title.
const TITLE_WORD_LIMIT: usize = 5;

/// Derive a session title from the first user message.
///
/// Splitting is on any whitespace, so runs of spaces or newlines collapse
/// to single spaces in the title.
pub fn derive_title(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(TITLE_WORD_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > TITLE_WORD_LIMIT {
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_message_truncates_with_ellipsis() {
        let title = derive_title("I have a headache and feel dizzy today");
        assert_eq!(title, "I have a headache and...");
    }

    #[test]
    fn test_single_word_has_no_ellipsis() {
        assert_eq!(derive_title("Fever"), "Fever");
    }

    #[test]
    fn test_exactly_five_words_has_no_ellipsis() {
        assert_eq!(derive_title("My throat hurts when swallowing"), "My throat hurts when swallowing");
    }

    #[test]
    fn test_six_words_truncates() {
        assert_eq!(
            derive_title("My throat hurts when swallowing food"),
            "My throat hurts when swallowing..."
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(derive_title("chest   pain\nafter running"), "chest pain after running");
    }
}
