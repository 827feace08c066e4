// Corpus vocabulary — document-frequency-filtered term index.
//
// A term is retained only if it appears in at least min_doc_freq
// documents and in at most max_doc_freq_ratio of the corpus. The upper
// bound is corpus-wide stopword suppression: a term in nearly every
// post carries no trend signal. Indices are assigned in term
// lexicographic order so vectors are reproducible across runs over the
// same corpus, and they stay fixed between vectorizing and reporting.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::info;

use crate::error::PipelineError;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build the vocabulary from a normalized corpus.
    pub fn build(
        corpus: &[Vec<String>],
        min_doc_freq: usize,
        max_doc_freq_ratio: f64,
    ) -> Result<Self, PipelineError> {
        let n_docs = corpus.len();

        // BTreeMap keeps terms sorted, which fixes the index order.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in corpus {
            let distinct: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in distinct {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_doc_freq = max_doc_freq_ratio * n_docs as f64;
        let mut terms = Vec::new();
        for (term, &freq) in &doc_freq {
            if freq >= min_doc_freq && freq as f64 <= max_doc_freq {
                terms.push((*term).to_string());
            }
        }

        if terms.is_empty() {
            return Err(PipelineError::EmptyVocabulary {
                n_docs,
                min_doc_freq,
                max_doc_freq_ratio,
            });
        }

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        info!(terms = terms.len(), n_docs, "Built vocabulary");

        Ok(Self { index, terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
