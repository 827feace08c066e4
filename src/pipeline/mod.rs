// Pipeline orchestration — raw documents in, trend report out.
//
// Stages run to completion in order: normalize, vocabulary, TF-IDF,
// topic model, summary. Corpus-level structural problems surface as
// typed errors before any fitting, so a failed run never produces a
// partial report.

use tracing::info;

use crate::config::TrendParams;
use crate::error::PipelineError;
use crate::ingest::RawDocument;
use crate::lda::{LdaConfig, OnlineLda};
use crate::summarize::{summarize, TrendReport};
use crate::text::Normalizer;
use crate::vectorize::{TfIdfVectorizer, Vocabulary};

/// Run the full trend-discovery pipeline over a raw corpus.
pub fn run(docs: &[RawDocument], params: &TrendParams) -> Result<TrendReport, PipelineError> {
    let normalizer = Normalizer::shared();
    let corpus = normalizer.normalize_corpus(docs);

    // Documents that normalize to nothing carry no signal; drop them
    // before any frequency statistics are computed.
    let corpus: Vec<Vec<String>> = corpus.into_iter().filter(|doc| !doc.is_empty()).collect();
    info!(raw = docs.len(), valid = corpus.len(), "Normalized corpus");

    if corpus.len() < params.n_topics {
        return Err(PipelineError::InsufficientData {
            valid: corpus.len(),
            requested: params.n_topics,
        });
    }

    let vocab = Vocabulary::build(&corpus, params.min_doc_freq, params.max_doc_freq_ratio)?;
    let vectorizer = TfIdfVectorizer::fit(&corpus, &vocab);
    let vectors = vectorizer.transform_corpus(&corpus, &vocab);

    let lda = OnlineLda::new(
        LdaConfig::new(params.n_topics)
            .batch_size(params.batch_size)
            .max_iters(params.max_iters)
            .tol(params.tol)
            .seed(params.seed),
    )?;
    let model = lda.fit(&vectors, vocab.len())?;

    Ok(summarize(&model, &vocab, params.top_words))
}
