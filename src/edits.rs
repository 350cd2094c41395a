//! Edit neighbourhoods and edit distance.
//!
//! All functions work on `char`s, so multi-byte input is edited and measured
//! per character rather than per byte.

use std::cmp::min;

/// `edits1` computes all strings that are one edit away from `word`.
///
/// Candidates are produced in a fixed order: deletions, transpositions,
/// substitutions, insertions, each scanning left to right. The result may hold
/// duplicates and may contain `word` itself.
///
/// # Arguments
///
/// * `word` - A word.
/// * `alphabet` - Characters used for substitutions and insertions.
#[must_use]
pub fn edits1(word: &str, alphabet: &[char]) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let splits = (0..=chars.len())
        .map(|i| (&chars[..i], &chars[i..]))
        .collect::<Vec<(&[char], &[char])>>();

    let deletes = splits
        .iter()
        .filter(|(_, r)| !r.is_empty())
        .map(|(l, r)| join(&[*l, &r[1..]]));

    let transposes = splits
        .iter()
        .filter(|(_, r)| r.len() > 1)
        .map(|(l, r)| join(&[*l, &[r[1], r[0]][..], &r[2..]]));

    let replaces = splits
        .iter()
        .filter(|(_, r)| !r.is_empty())
        .flat_map(|(l, r)| alphabet.iter().map(move |&c| join(&[*l, &[c][..], &r[1..]])));

    let inserts = splits
        .iter()
        .flat_map(|(l, r)| alphabet.iter().map(move |&c| join(&[*l, &[c][..], *r])));

    deletes
        .chain(transposes)
        .chain(replaces)
        .chain(inserts)
        .collect()
}

/// `one_edit` reports whether `to` is among the strings [`edits1`] produces for `from`,
/// other than `from` itself.
///
/// # Arguments
///
/// * `from` - The characters of the edited word.
/// * `to` - The characters of the candidate.
/// * `alphabet` - Characters allowed for substitutions and insertions.
#[must_use]
pub fn one_edit(from: &[char], to: &[char], alphabet: &[char]) -> bool {
    let i = from.iter().zip(to).take_while(|(a, b)| a == b).count();

    if to.len() == from.len() + 1 {
        alphabet.contains(&to[i]) && from[i..] == to[i + 1..]
    } else if from.len() == to.len() + 1 {
        from[i + 1..] == to[i..]
    } else if from.len() == to.len() {
        if i == from.len() {
            return false;
        }
        if from[i + 1..] == to[i + 1..] {
            return alphabet.contains(&to[i]);
        }
        i + 1 < from.len()
            && from[i] == to[i + 1]
            && from[i + 1] == to[i]
            && from[i + 2..] == to[i + 2..]
    } else {
        false
    }
}

fn join(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|part| part.iter()).collect()
}

/// `distance` computes the optimal string alignment distance between `a` and `b`:
/// insertions, deletions, substitutions and transpositions of adjacent characters,
/// with no substring edited more than once.
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    osa(&a, &b, usize::MAX)
}

/// `distance_within` computes the same distance as [`distance`] but gives up once it
/// is certain to exceed `max`, returning `None`.
#[must_use]
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    let d = osa(&a, &b, max);
    (d <= max).then_some(d)
}

/// Three-row dynamic program. Stops early, returning something above `max`, once a
/// whole row exceeds `max`; with a transposition the answer can only come from the
/// two previous rows, so the earlier of them is checked as well.
fn osa(a: &[char], b: &[char], max: usize) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut before: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = min(
                min(
                    prev[j] + 1,     // deletion
                    curr[j - 1] + 1, // insertion
                ),
                prev[j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr[j] = min(curr[j], before[j - 2] + 1); // transposition
            }

            row_min = min(row_min, curr[j]);
        }

        let prev_min = prev.iter().copied().min().unwrap_or(0);
        if row_min > max && prev_min > max {
            return row_min;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
