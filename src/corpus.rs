//! Word frequency table built once from training data.

use std::collections::HashMap;

use regex::Regex;

/// Pattern for a single token: word characters, optionally joined by inner apostrophes.
const TOKEN_PATTERN: &str = r"\w+(?:'\w+)*";

/// A single corpus word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The word, with the casing it had in the training data.
    pub word: String,
    /// How many times the word occurred.
    pub count: u64,
}

/// `Corpus` is an immutable, case-sensitive word frequency table.
///
/// Every word carries a rank: its position when words are ordered by count
/// descending, with equal counts kept in first-seen order.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<Entry>,
    ranks: HashMap<String, usize>,
    total: u64,
}

impl Corpus {
    /// `from_text` tokenizes `text` and counts every token.
    ///
    /// # Errors
    ///
    /// Returns error if the text contains no words.
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::Corpus;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let corpus = Corpus::from_text("I'm here. I am.")?;
    ///     assert_eq!(corpus.count("I'm"), 1);
    ///     assert_eq!(corpus.count("I"), 1);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_text(text: &str) -> Result<Self, anyhow::Error> {
        let re = Regex::new(TOKEN_PATTERN)?;
        Self::from_words(re.find_iter(text).map(|m| m.as_str()))
    }

    /// `from_words` counts a pre-tokenized sequence of words.
    ///
    /// # Errors
    ///
    /// Returns error if `words` yields nothing but empty strings.
    pub fn from_words<I, S>(words: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_counts(words.into_iter().map(|word| (word, 1)))
    }

    /// `from_counts` builds a corpus from a frequency table.
    ///
    /// Zero counts and empty words are skipped and repeated words have their
    /// counts summed, saturating at `u64::MAX`. Iteration order of `counts`
    /// decides first-seen order.
    ///
    /// # Errors
    ///
    /// Returns error if no word with a positive count remains.
    ///
    /// # Example
    ///
    /// ```
    /// use spellcheck::Corpus;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let corpus = Corpus::from_counts([("beta", 2), ("alpha", 2), ("gamma", 5)])?;
    ///     let words: Vec<&str> = corpus.iter().map(|e| e.word.as_str()).collect();
    ///     assert_eq!(words, ["gamma", "beta", "alpha"]);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_counts<I, S>(counts: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<Entry> = Vec::new();

        for (word, count) in counts {
            let word = word.as_ref();
            if word.is_empty() || count == 0 {
                continue;
            }
            if let Some(&i) = seen.get(word) {
                entries[i].count = entries[i].count.saturating_add(count);
            } else {
                seen.insert(word.to_string(), entries.len());
                entries.push(Entry {
                    word: word.to_string(),
                    count,
                });
            }
        }

        anyhow::ensure!(!entries.is_empty(), "corpus contains no words");

        // Stable sort keeps first-seen order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.word.clone(), rank))
            .collect();
        let total = entries
            .iter()
            .fold(0u64, |total, e| total.saturating_add(e.count));

        tracing::debug!(words = entries.len(), total, "built corpus");

        Ok(Self {
            entries,
            ranks,
            total,
        })
    }

    /// `count` returns how often `word` occurred, zero if it is absent.
    #[must_use]
    pub fn count(&self, word: &str) -> u64 {
        self.rank(word).map_or(0, |rank| self.entries[rank].count)
    }

    /// `contains` reports whether `word` is in the corpus, matching case exactly.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// `rank` returns the position of `word` in frequency order, `0` being the most frequent.
    #[must_use]
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// `probability` computes the share of all occurrences that belong to `word`.
    #[must_use]
    pub fn probability(&self, word: &str) -> f64 {
        // Precision loss only matters past 2^52 occurrences.
        #[allow(clippy::cast_precision_loss)]
        let (count, total) = (self.count(word) as f64, self.total as f64);
        count / total
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects an empty corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `iter` walks the entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// `starting_with` walks, in rank order, the words that begin with `prefix`.
    pub fn starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .map(|e| e.word.as_str())
            .filter(move |word| word.starts_with(prefix))
    }
}
