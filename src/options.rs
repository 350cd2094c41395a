//! Tunable settings for [`SpellChecker`](crate::SpellChecker).

use serde::{Deserialize, Serialize};

/// Configuration for the spell checker.
///
/// Missing fields fall back to [`Options::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Characters tried for substitutions and insertions when correcting.
    pub alphabet: String,
    /// Maximum number of words returned by `complete`, for any prefix.
    pub max_completions: usize,
    /// Maximum number of words returned by `guess`.
    pub max_guesses: usize,
    /// Largest edit distance at which `guess` still suggests a word.
    pub max_guess_distance: usize,
    /// Whether `correct` falls back to two-edit candidates.
    pub two_edit_corrections: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            max_completions: 20,
            max_guesses: 10,
            max_guess_distance: 2,
            two_edit_corrections: true,
        }
    }
}

impl Options {
    /// `validate` checks the settings before they are used.
    ///
    /// # Errors
    ///
    /// Returns error if the alphabet is empty or `max_guess_distance` is zero.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        anyhow::ensure!(!self.alphabet.is_empty(), "alphabet must not be empty");
        anyhow::ensure!(
            self.max_guess_distance > 0,
            "max_guess_distance must be at least 1"
        );
        Ok(())
    }
}
