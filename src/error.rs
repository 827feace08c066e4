// Typed pipeline errors.
//
// Corpus-level structural problems (empty vocabulary, too few documents)
// are surfaced to the caller before any model fitting is attempted —
// fitting on degenerate input would silently produce meaningless topics.
// Normalization-level issues (missing or non-text fields) never raise;
// they degrade to empty output inside the normalizer.
//
// Hitting the iteration cap before the convergence tolerance is a soft
// signal, not an error: the model still returns its best estimate and
// carries `converged = false`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// No term survived document-frequency filtering. The corpus is too
    /// small or the thresholds are too strict — this means "not enough
    /// data", not a bug.
    #[error(
        "no term survived document-frequency filtering \
         ({n_docs} documents, min_doc_freq={min_doc_freq}, max_doc_freq_ratio={max_doc_freq_ratio})"
    )]
    EmptyVocabulary {
        n_docs: usize,
        min_doc_freq: usize,
        max_doc_freq_ratio: f64,
    },

    /// Fewer valid documents than requested topics.
    #[error("not enough data: {valid} valid documents for {requested} topics")]
    InsufficientData { valid: usize, requested: usize },

    /// Non-positive topic count or an inconsistent model configuration.
    #[error("invalid topic model configuration: {0}")]
    InvalidTopicModelConfig(String),
}
