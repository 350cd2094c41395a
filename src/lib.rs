//! Spell checking in Rust: prefix completion, correction and fuzzy guesses.
//! Correction follows [Peter Norvig's essay](http://norvig.com/spell-correct.html).

#![warn(clippy::all, clippy::pedantic, missing_docs)]

use std::path::Path;

use anyhow::Context;

pub mod corpus;
pub mod edits;
pub mod options;

pub use corpus::{Corpus, Entry};
pub use options::Options;

/// Training text used when no corpus is supplied.
const DEFAULT_CORPUS: &str = include_str!("../data/corpus.txt");

/// `SpellChecker` answers completion, correction and guess queries over a [`Corpus`].
///
/// Once built it is read-only, so a shared reference can be queried from many threads.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    corpus: Corpus,
    options: Options,
    alphabet: Vec<char>,
}

impl SpellChecker {
    /// `new` creates a new `SpellChecker` trained on the built-in corpus.
    ///
    /// # Errors
    ///
    /// Returns error if the built-in corpus cannot be tokenized.
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::SpellChecker;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let sc = SpellChecker::new()?;
    ///     assert_eq!(sc.correct("wrrong"), "wrong");
    ///     Ok(())
    /// }
    /// ```
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_text(DEFAULT_CORPUS)
    }

    /// `from_text` creates a new `SpellChecker` trained on `text`.
    ///
    /// # Errors
    ///
    /// Returns error if `text` contains no words.
    pub fn from_text(text: &str) -> Result<Self, anyhow::Error> {
        Self::with_options(Corpus::from_text(text)?, Options::default())
    }

    /// `from_words` creates a new `SpellChecker` from already tokenized words.
    ///
    /// # Errors
    ///
    /// Returns error if `words` is empty.
    pub fn from_words<I, S>(words: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_options(Corpus::from_words(words)?, Options::default())
    }

    /// `from_path` creates a new `SpellChecker` trained on the text file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if `std::fs::read_to_string` fails or if the file contains no words.
    ///
    /// # Arguments
    ///
    /// * `path` - A path to text data.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus from {}", path.display()))?;
        tracing::debug!("loaded corpus text from {}", path.display());
        Self::from_text(&text)
    }

    /// `with_options` creates a new `SpellChecker` over `corpus` with user-specified settings.
    ///
    /// # Errors
    ///
    /// Returns error if `options` fail [`Options::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::{Corpus, Options, SpellChecker};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let corpus = Corpus::from_text("über uber über")?;
    ///     let options = Options {
    ///         alphabet: "abcdefghijklmnopqrstuvwxyzü".to_string(),
    ///         ..Options::default()
    ///     };
    ///     let sc = SpellChecker::with_options(corpus, options)?;
    ///     assert_eq!(sc.correct("übr"), "über");
    ///     Ok(())
    /// }
    /// ```
    pub fn with_options(corpus: Corpus, options: Options) -> Result<Self, anyhow::Error> {
        options.validate()?;
        let alphabet = options.alphabet.chars().collect();
        Ok(Self {
            corpus,
            options,
            alphabet,
        })
    }

    /// `complete` lists corpus words that start with `prefix`, most frequent first.
    ///
    /// Equal frequencies keep the order in which the words first appeared. The
    /// `max_completions` cap applies to every prefix, not only the empty one, so a
    /// common prefix can match more words than are returned. An empty prefix yields
    /// the top words.
    ///
    /// # Arguments
    ///
    /// * `prefix` - A case-sensitive prefix, possibly empty.
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::SpellChecker;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let sc = SpellChecker::new()?;
    ///     assert_eq!(sc.complete("Wh"), ["What", "Why"]);
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.corpus
            .starting_with(prefix)
            .take(self.options.max_completions)
            .map(String::from)
            .collect()
    }

    /// `correct` computes the most probable spelling correction for `word`.
    ///
    /// Known words are returned as is. Otherwise the most frequent known word one
    /// edit away wins, then two edits away. With no candidate `word` itself is returned.
    ///
    /// One-edit candidates are generated, which grows linearly with the length of
    /// `word`. Two-edit candidates are not generated: corpus words within two
    /// characters of the length of `word` are each tested against the one-edit set.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    #[must_use]
    pub fn correct(&self, word: &str) -> String {
        if self.corpus.contains(word) {
            return word.to_string();
        }

        let first = edits::edits1(word, &self.alphabet);
        if let Some(best) = self.best(&first) {
            tracing::trace!(word, %best, "corrected with one edit");
            return best;
        }

        if self.options.two_edit_corrections {
            if let Some(best) = self.best_two_edits(word, &first) {
                tracing::trace!(word, %best, "corrected with two edits");
                return best;
            }
        }

        word.to_string()
    }

    /// `guess` suggests corpus words close to `word`, nearest first.
    ///
    /// A word is suggested when its edit distance is at most `max_guess_distance` and
    /// smaller than the longer of the two words. Equal distances are ordered by
    /// frequency. `word` itself is never suggested.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::SpellChecker;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let sc = SpellChecker::new()?;
    ///     assert_eq!(sc.guess("aa"), ["as", "era"]);
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn guess(&self, word: &str) -> Vec<String> {
        let len = word.chars().count();
        let mut found: Vec<(usize, &str)> = self
            .corpus
            .iter()
            .filter(|entry| entry.word != word)
            .filter_map(|entry| {
                let d = edits::distance_within(word, &entry.word, self.options.max_guess_distance)?;
                (d < len.max(entry.word.chars().count())).then_some((d, entry.word.as_str()))
            })
            .collect();

        // Stable, so words at the same distance stay in rank order.
        found.sort_by_key(|&(d, _)| d);

        found
            .into_iter()
            .take(self.options.max_guesses)
            .map(|(_, w)| w.to_string())
            .collect()
    }

    /// `known` reports whether `word` is in the corpus.
    #[must_use]
    pub fn known(&self, word: &str) -> bool {
        self.corpus.contains(word)
    }

    /// `frequency` returns how often `word` occurred in the training data.
    #[must_use]
    pub fn frequency(&self, word: &str) -> u64 {
        self.corpus.count(word)
    }

    /// `probability` computes a probability of `word`.
    #[must_use]
    pub fn probability(&self, word: &str) -> f64 {
        self.corpus.probability(word)
    }

    /// The underlying frequency table.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The settings this checker was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Lowest-ranked known word among `candidates`.
    fn best(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .filter_map(|c| self.corpus.rank(c).map(|rank| (rank, c)))
            .min_by_key(|&(rank, _)| rank)
            .map(|(_, c)| c.clone())
    }

    /// Lowest-ranked corpus word one edit away from some word in `first`.
    ///
    /// Only corpus words within two characters of the length of `word` and within
    /// three alignment steps of it are tested.
    fn best_two_edits(&self, word: &str, first: &[String]) -> Option<String> {
        let len = word.chars().count();
        let first: Vec<Vec<char>> = first.iter().map(|e| e.chars().collect()).collect();

        self.corpus
            .iter()
            .filter(|entry| entry.word.chars().count().abs_diff(len) <= 2)
            .filter(|entry| edits::distance_within(word, &entry.word, 3).is_some())
            .find(|entry| {
                let target: Vec<char> = entry.word.chars().collect();
                first
                    .iter()
                    .any(|e1| edits::one_edit(e1, &target, &self.alphabet))
            })
            .map(|entry| entry.word.clone())
    }
}
