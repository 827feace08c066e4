// Latent topic inference — online variational LDA.
//
// Each document is assumed to be a mixture over a fixed number of
// latent topics; each topic is a distribution over vocabulary terms.
// Fitting alternates a per-document responsibility step with a
// mini-batch topic-term update, so memory stays bounded by the batch
// size regardless of corpus size.

mod online;

pub use online::OnlineLda;

use ndarray::Array2;

/// Configuration for one LDA fit.
///
/// `new(n_topics)` picks symmetric 1/K Dirichlet priors; the builder
/// methods override the knobs callers actually tune.
#[derive(Debug, Clone)]
pub struct LdaConfig {
    /// Number of topics. Fixed at construction, immutable thereafter.
    pub n_topics: usize,
    /// Document-topic prior (symmetric Dirichlet alpha).
    pub alpha: f64,
    /// Topic-term prior (symmetric Dirichlet eta).
    pub eta: f64,
    /// Mini-batch size for the online update.
    pub batch_size: usize,
    /// Hard cap on full passes over the corpus.
    pub max_iters: usize,
    /// Convergence tolerance on the mean absolute change of the
    /// row-normalized topic-term matrix between passes.
    pub tol: f64,
    /// Learning-rate offset tau0 in rho_t = (tau0 + t)^(-kappa).
    pub learning_offset: f64,
    /// Learning-rate decay kappa.
    pub decay: f64,
    /// Seed for the pseudo-random initialization.
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            n_topics: 5,
            alpha: 0.2,
            eta: 0.2,
            batch_size: 256,
            max_iters: 100,
            tol: 1e-4,
            learning_offset: 10.0,
            decay: 0.7,
            seed: 42,
        }
    }
}

impl LdaConfig {
    /// Create a configuration for the given topic count with symmetric
    /// 1/K priors.
    pub fn new(n_topics: usize) -> Self {
        let prior = 1.0 / n_topics.max(1) as f64;
        Self {
            n_topics,
            alpha: prior,
            eta: prior,
            ..Default::default()
        }
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A fitted topic model.
#[derive(Debug, Clone)]
pub struct TopicModel {
    /// Topic x Term weights. Non-negative; each row is monotonic with
    /// term salience but not normalized to sum to 1.
    pub topic_term: Array2<f64>,
    /// Document x Topic mixtures. Non-negative; each row sums to 1.
    pub doc_topic: Array2<f64>,
    /// False when the iteration cap was reached before the tolerance.
    /// The matrices still hold the best estimate at the cap.
    pub converged: bool,
    /// Number of full passes actually run.
    pub iterations: usize,
}

impl TopicModel {
    pub fn n_topics(&self) -> usize {
        self.topic_term.nrows()
    }

    pub fn vocab_size(&self) -> usize {
        self.topic_term.ncols()
    }

    pub fn n_docs(&self) -> usize {
        self.doc_topic.nrows()
    }
}
