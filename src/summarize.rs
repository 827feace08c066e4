// Topic summarization — ranked top terms per discovered trend.
//
// The report is the pipeline's only output. It is also the payload
// cached in the store, stored as JSON so the structure can evolve
// without migrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lda::TopicModel;
use crate::vectorize::Vocabulary;

/// One (term, weight) pair in a topic summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// One discovered trend: its rank, the topic row it came from, and the
/// top terms in descending weight order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendTopic {
    pub rank: usize,
    pub topic_index: usize,
    pub terms: Vec<TermWeight>,
}

/// The full report produced by one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub topics: Vec<TrendTopic>,
    /// Number of documents the model was fitted on.
    pub doc_count: usize,
    pub built_at: DateTime<Utc>,
}

/// Extract the top `top_n` terms per topic.
///
/// Terms are ordered by descending weight; equal weights resolve to the
/// lower vocabulary index, so the output is deterministic. A `top_n`
/// beyond the vocabulary size returns every term. Pure — the model is
/// not mutated.
pub fn summarize(model: &TopicModel, vocab: &Vocabulary, top_n: usize) -> TrendReport {
    let mut topics = Vec::with_capacity(model.n_topics());

    for (topic_index, row) in model.topic_term.rows().into_iter().enumerate() {
        let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(top_n.min(vocab.len()));

        let terms = ranked
            .into_iter()
            .filter_map(|(index, weight)| {
                vocab.term(index).map(|term| TermWeight {
                    term: term.to_string(),
                    weight,
                })
            })
            .collect();

        topics.push(TrendTopic {
            rank: topic_index + 1,
            topic_index,
            terms,
        });
    }

    TrendReport {
        topics,
        doc_count: model.n_docs(),
        built_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn model_with_row(weights: Vec<f64>) -> TopicModel {
        let vocab_size = weights.len();
        TopicModel {
            topic_term: Array2::from_shape_vec((1, vocab_size), weights).unwrap(),
            doc_topic: Array2::from_elem((1, 1), 1.0),
            converged: true,
            iterations: 1,
        }
    }

    fn vocab_of(terms: &[&str]) -> Vocabulary {
        let corpus = vec![terms.iter().map(|s| s.to_string()).collect()];
        Vocabulary::build(&corpus, 1, 1.0).unwrap()
    }

    #[test]
    fn top_terms_descend_by_weight() {
        let model = model_with_row(vec![0.1, 0.9, 0.05, 0.95]);
        let vocab = vocab_of(&["a", "b", "c", "d"]);

        let report = summarize(&model, &vocab, 3);
        let terms: Vec<(&str, f64)> = report.topics[0]
            .terms
            .iter()
            .map(|t| (t.term.as_str(), t.weight))
            .collect();

        assert_eq!(terms, vec![("d", 0.95), ("b", 0.9), ("a", 0.1)]);
    }

    #[test]
    fn ties_break_toward_lower_index() {
        let model = model_with_row(vec![0.5, 0.5, 0.2]);
        let vocab = vocab_of(&["a", "b", "c"]);

        let report = summarize(&model, &vocab, 2);
        let terms: Vec<&str> = report.topics[0]
            .terms
            .iter()
            .map(|t| t.term.as_str())
            .collect();

        assert_eq!(terms, vec!["a", "b"]);
    }

    #[test]
    fn top_n_beyond_vocabulary_returns_everything() {
        let model = model_with_row(vec![0.3, 0.1]);
        let vocab = vocab_of(&["a", "b"]);

        let report = summarize(&model, &vocab, 50);
        assert_eq!(report.topics[0].terms.len(), 2);
    }
}
