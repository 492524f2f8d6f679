use std::path::Path;

use log::{info, warn};
use slides_core::model::{Deck, DeckDraft};

use crate::error::LoadError;

const SAMPLE_DECK: &str = include_str!("../assets/sample_deck.json");

/// Parse and validate a deck from JSON text.
///
/// A quiz whose declared `total` disagrees with its question count is kept;
/// the question count wins and the mismatch is logged.
///
/// # Errors
///
/// Returns `LoadError::Json` for malformed JSON and `LoadError::Deck` for
/// structural problems.
pub fn load_deck_from_str(json: &str) -> Result<Deck, LoadError> {
    let draft: DeckDraft = serde_json::from_str(json)?;
    let deck = draft.validate()?;

    for (index, quiz) in deck.quizzes().iter().enumerate() {
        if let Some((declared, actual)) = quiz.total_mismatch() {
            warn!(
                "quiz {index} on page {} declares total {declared} but has {actual} questions; using {actual}",
                quiz.page + 1
            );
        }
    }

    info!(
        "loaded deck {:?}: {} pages, {} quizzes, {} tab groups",
        deck.title(),
        deck.page_count(),
        deck.quizzes().len(),
        deck.groups().len()
    );
    Ok(deck)
}

/// Read a deck file from disk.
///
/// # Errors
///
/// Returns `LoadError::Io` when the file cannot be read, otherwise the same
/// errors as [`load_deck_from_str`].
pub fn load_deck_from_path(path: impl AsRef<Path>) -> Result<Deck, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_deck_from_str(&json)
}

/// The deck bundled with the binary.
///
/// # Errors
///
/// Only fails if the bundled asset itself is broken.
pub fn sample_deck() -> Result<Deck, LoadError> {
    load_deck_from_str(SAMPLE_DECK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_is_valid() {
        let deck = sample_deck().unwrap();
        assert_eq!(deck.title(), "Ownership in Rust");
        assert_eq!(deck.page_count().get(), 4);
        assert_eq!(deck.groups().len(), 1);
        assert_eq!(deck.quizzes().len(), 3);
        assert_eq!(deck.reveals().len(), 2);
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = load_deck_from_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn structural_problems_are_deck_errors() {
        let err = load_deck_from_str(r#"{ "title": "Empty", "pages": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Deck(_)));
        assert_eq!(err.to_string(), "deck must contain at least one page");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_deck_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
