use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only
/// the database path lives here; per-run tuning belongs to TrendParams
/// and is set on the command line.
pub struct Config {
    pub db_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("BONFIRE_DB_PATH").unwrap_or_else(|_| "./bonfire.db".to_string()),
        })
    }
}

/// Tunable parameters for one trend-discovery run.
///
/// The defaults match the reference analysis setup: 5 topics with 10
/// words each, terms kept when they appear in at least 2 documents and
/// at most 95% of the corpus, and a fixed seed so repeated runs over
/// the same posts produce the same topics.
#[derive(Debug, Clone)]
pub struct TrendParams {
    /// Number of topics to fit.
    pub n_topics: usize,
    /// Top words reported per topic.
    pub top_words: usize,
    /// Minimum number of documents a term must appear in.
    pub min_doc_freq: usize,
    /// Maximum fraction of documents a term may appear in.
    pub max_doc_freq_ratio: f64,
    /// Mini-batch size for the online topic model fit.
    pub batch_size: usize,
    /// Hard cap on full fitting passes over the corpus.
    pub max_iters: usize,
    /// Convergence tolerance on the change in topic-term distributions.
    pub tol: f64,
    /// Seed for the model's pseudo-random initialization.
    pub seed: u64,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            n_topics: 5,
            top_words: 10,
            min_doc_freq: 2,
            max_doc_freq_ratio: 0.95,
            batch_size: 256,
            max_iters: 100,
            tol: 1e-4,
            seed: 42,
        }
    }
}
