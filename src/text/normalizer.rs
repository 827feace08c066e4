// Normalizer — lowercase, URL-stripped, stopword-filtered, lemmatized tokens.
//
// The stopword set and the URL pattern load once per process and are
// shared read-only after that, so the corpus pass parallelizes per
// document without locking. Normalization itself is a pure function of
// its input and those static resources.

use std::collections::HashSet;
use std::sync::OnceLock;

use rayon::prelude::*;
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use crate::ingest::RawDocument;

use super::lemma::lemmatize;

static SHARED: OnceLock<Normalizer> = OnceLock::new();

pub struct Normalizer {
    stopwords: HashSet<String>,
    url_pattern: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        let stopwords: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        // Anything starting with http or www, up to the next whitespace,
        // goes away before character filtering.
        let url_pattern = Regex::new(r"(?:http|www)\S+").expect("static URL pattern");

        Self {
            stopwords,
            url_pattern,
        }
    }

    /// Process-wide shared instance. Built on first use, never mutated.
    pub fn shared() -> &'static Normalizer {
        SHARED.get_or_init(Normalizer::new)
    }

    /// Normalize one title into clean tokens.
    ///
    /// Lowercases, strips URL-like substrings, removes every character
    /// outside a-z and whitespace (punctuation and digits collapse to
    /// nothing: "don't" stays one token, "dont"), tokenizes on
    /// whitespace, drops stopwords and tokens of length <= 2, and
    /// reduces the survivors to a noun base form.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.url_pattern.replace_all(&lowered, "");

        let filtered: String = stripped
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();

        filtered
            .split_whitespace()
            .filter(|token| token.len() > 2 && !self.stopwords.contains(*token))
            .map(lemmatize)
            .collect()
    }

    /// A missing text field is an empty document, never an error.
    pub fn normalize_opt(&self, text: Option<&str>) -> Vec<String> {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }

    /// Normalize a whole corpus in parallel, preserving document order.
    pub fn normalize_corpus(&self, docs: &[RawDocument]) -> Vec<Vec<String>> {
        docs.par_iter()
            .map(|doc| self.normalize_opt(doc.text.as_deref()))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
