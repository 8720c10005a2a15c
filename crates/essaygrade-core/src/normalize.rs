//! Text normalization into token sets.
//!
//! Raw answers are lowercased, stripped of everything that is not a word
//! character or whitespace, stripped of digits, then split on whitespace.
//! The resulting words are collected into a [`TokenSet`], so order and
//! repetition do not matter to the scorer.

use std::collections::{btree_set, BTreeSet};

/// The unique normalized words of a text.
///
/// Backed by a `BTreeSet` so iteration (and [`TokenSet::to_text`]) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Iterate tokens in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Size of the intersection with `other`.
    pub fn intersection_len(&self, other: &TokenSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Size of the union with `other`.
    pub fn union_len(&self, other: &TokenSet) -> usize {
        self.0.union(&other.0).count()
    }

    /// Join the tokens back into text, separated by single spaces.
    ///
    /// Normalizing the returned text yields the same set again.
    pub fn to_text(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lowercase `text` and drop punctuation, symbols and digits.
///
/// Whitespace is kept as-is so the result can still be split into words.
/// Any character with a numeric property counts as a digit, not only
/// ASCII `0-9`.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_whitespace() || is_word_char(c))
        .collect()
}

/// Convert raw text into its canonical token set.
///
/// Total over all inputs: empty or symbol-only text yields an empty set.
pub fn normalize(text: &str) -> TokenSet {
    clean_text(text).split_whitespace().collect()
}

fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_') && !c.is_numeric()
}
