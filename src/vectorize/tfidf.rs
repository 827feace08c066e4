// TF-IDF weighting — sparse document vectors over the vocabulary.
//
// TF is the in-document count divided by the document's token count, so
// a long title cannot outweigh a short one. IDF uses the smoothed form
// ln((1 + N) / (1 + df)) + 1, which never divides by zero and keeps
// every retained term's weight positive. Vectors are not normalized to
// unit length; the topic model consumes the raw weights.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::vocabulary::Vocabulary;

/// Sparse TF-IDF vector for one document: (feature index, weight) pairs
/// sorted by index. Absent entries are zero.
pub type DocVector = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Compute IDF weights for every vocabulary term over the corpus.
    pub fn fit(corpus: &[Vec<String>], vocab: &Vocabulary) -> Self {
        let n_docs = corpus.len() as f64;

        let mut doc_freq = vec![0usize; vocab.len()];
        for doc in corpus {
            let distinct: HashSet<usize> =
                doc.iter().filter_map(|token| vocab.index_of(token)).collect();
            for index in distinct {
                doc_freq[index] += 1;
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { idf }
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Transform one normalized document into its sparse vector.
    ///
    /// Zero-token documents produce an empty (all-zero) vector, not an
    /// error. Terms outside the vocabulary are omitted.
    pub fn transform(&self, doc: &[String], vocab: &Vocabulary) -> DocVector {
        if doc.is_empty() {
            return Vec::new();
        }

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in doc {
            if let Some(index) = vocab.index_of(token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let doc_len = doc.len() as f64;
        let mut vector: DocVector = counts
            .into_iter()
            .map(|(index, count)| (index, count as f64 / doc_len * self.idf[index]))
            .collect();
        vector.sort_unstable_by_key(|&(index, _)| index);
        vector
    }

    /// Transform the whole corpus in parallel, preserving document order.
    pub fn transform_corpus(&self, corpus: &[Vec<String>], vocab: &Vocabulary) -> Vec<DocVector> {
        corpus
            .par_iter()
            .map(|doc| self.transform(doc, vocab))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&[&str]]) -> Vec<Vec<String>> {
        docs.iter()
            .map(|doc| doc.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn weights_are_tf_times_idf() {
        let docs = corpus(&[&["apple", "apple", "pear", "plum"], &["pear"], &["pear"]]);
        let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
        let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);

        let vector = vectorizer.transform(&docs[0], &vocab);
        let apple = vocab.index_of("apple").unwrap();
        let weight = vector
            .iter()
            .find(|&&(i, _)| i == apple)
            .map(|&(_, w)| w)
            .unwrap();

        // tf = 2/4, idf = ln(4/2) + 1
        let expected = 0.5 * ((4.0f64 / 2.0).ln() + 1.0);
        assert!((weight - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_token_document_is_all_zero() {
        let docs = corpus(&[&["apple"], &["apple"]]);
        let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
        let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);
        assert!(vectorizer.transform(&[], &vocab).is_empty());
    }
}
