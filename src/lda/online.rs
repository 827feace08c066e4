// Online variational fitting for the LDA model.
//
// The E-step re-estimates each document's topic responsibilities from
// its term weights; the M-step folds the mini-batch's sufficient
// statistics into the topic-term matrix with a decaying learning rate.
// Documents inside a batch run in parallel, and their partial
// statistics are merged in document order at a single reduction point
// per batch — the result is identical for any worker count, and for a
// fixed seed, across runs.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::vectorize::DocVector;

use super::{LdaConfig, TopicModel};

/// Inner responsibility iterations per document.
const DOC_ITERS: usize = 32;
/// Early-exit threshold for the per-document loop.
const DOC_TOL: f64 = 1e-3;

#[derive(Debug)]
pub struct OnlineLda {
    config: LdaConfig,
}

impl OnlineLda {
    pub fn new(config: LdaConfig) -> Result<Self, PipelineError> {
        if config.n_topics == 0 {
            return Err(PipelineError::InvalidTopicModelConfig(
                "topic count must be positive".to_string(),
            ));
        }
        if config.alpha <= 0.0 || config.eta <= 0.0 {
            return Err(PipelineError::InvalidTopicModelConfig(
                "Dirichlet priors must be positive".to_string(),
            ));
        }
        if config.batch_size == 0 {
            return Err(PipelineError::InvalidTopicModelConfig(
                "batch size must be positive".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Fit the model on a weighted corpus.
    ///
    /// Identical seed and identical input produce identical output.
    pub fn fit(
        &self,
        vectors: &[DocVector],
        vocab_size: usize,
    ) -> Result<TopicModel, PipelineError> {
        let n_docs = vectors.len();
        let k = self.config.n_topics;

        if vocab_size == 0 {
            return Err(PipelineError::InvalidTopicModelConfig(
                "vocabulary is empty".to_string(),
            ));
        }
        if k > n_docs {
            return Err(PipelineError::InvalidTopicModelConfig(format!(
                "{k} topics requested for {n_docs} documents"
            )));
        }

        // Seeded initialization keeps the fit reproducible. Row-major
        // fill order is fixed, so the seed fully determines the matrix.
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut lambda = Array2::from_shape_fn((k, vocab_size), |_| 0.5 + rng.random::<f64>());

        let mut prev_rows = normalize_rows(&lambda);
        let mut converged = false;
        let mut iterations = 0;
        let mut updates = 0usize;

        for pass in 0..self.config.max_iters {
            iterations = pass + 1;

            for batch in vectors.chunks(self.config.batch_size) {
                let beta = normalize_rows(&lambda);

                // E-step: per-document responsibilities, in parallel.
                let partials: Vec<DocStats> = batch
                    .par_iter()
                    .map(|doc| e_step(doc, &beta, self.config.alpha, k))
                    .collect();

                // Single reduction point per mini-batch: fold the
                // partial statistics in document order.
                let mut stats = Array2::<f64>::zeros((k, vocab_size));
                for partial in &partials {
                    for (term, contribution) in &partial.contributions {
                        for topic in 0..k {
                            stats[[topic, *term]] += contribution[topic];
                        }
                    }
                }

                // M-step: blend the batch estimate into the topic-term
                // matrix with a decaying learning rate.
                let rho = (self.config.learning_offset + updates as f64).powf(-self.config.decay);
                updates += 1;
                let scale = n_docs as f64 / batch.len() as f64;
                let eta = self.config.eta;
                lambda.zip_mut_with(&stats, |l, &s| {
                    *l = (1.0 - rho) * *l + rho * (eta + scale * s);
                });
            }

            let rows = normalize_rows(&lambda);
            let delta = mean_abs_diff(&rows, &prev_rows);
            debug!(pass, delta, "Completed fitting pass");
            if delta < self.config.tol {
                converged = true;
                break;
            }
            prev_rows = rows;
        }

        if !converged {
            warn!(
                max_iters = self.config.max_iters,
                tol = self.config.tol,
                "Iteration cap reached before convergence; returning current estimate"
            );
        }

        // Final responsibilities for every document under the fitted topics.
        let beta = normalize_rows(&lambda);
        let gammas: Vec<Array1<f64>> = vectors
            .par_iter()
            .map(|doc| e_step(doc, &beta, self.config.alpha, k).gamma)
            .collect();

        let mut doc_topic = Array2::<f64>::zeros((n_docs, k));
        for (d, gamma) in gammas.iter().enumerate() {
            let total = gamma.sum();
            for topic in 0..k {
                doc_topic[[d, topic]] = gamma[topic] / total;
            }
        }

        info!(
            n_docs,
            n_topics = k,
            vocab = vocab_size,
            iterations,
            converged,
            "Fitted topic model"
        );

        Ok(TopicModel {
            topic_term: lambda,
            doc_topic,
            converged,
            iterations,
        })
    }
}

/// Per-document E-step output: the (unnormalized) topic mixture and the
/// weighted responsibility each observed term contributes to each topic.
struct DocStats {
    gamma: Array1<f64>,
    contributions: Vec<(usize, Array1<f64>)>,
}

fn e_step(doc: &DocVector, beta: &Array2<f64>, alpha: f64, k: usize) -> DocStats {
    let total_weight: f64 = doc.iter().map(|&(_, weight)| weight).sum();
    let mut gamma = Array1::from_elem(k, alpha + total_weight / k as f64);

    if doc.is_empty() {
        return DocStats {
            gamma,
            contributions: Vec::new(),
        };
    }

    let mut phi: Vec<Array1<f64>> = vec![Array1::zeros(k); doc.len()];

    for _ in 0..DOC_ITERS {
        let gamma_sum = gamma.sum();
        let theta = gamma.mapv(|g| g / gamma_sum);

        for (slot, &(term, _)) in phi.iter_mut().zip(doc.iter()) {
            let mut p = Array1::from_shape_fn(k, |topic| theta[topic] * beta[[topic, term]]);
            let z = p.sum();
            if z > 0.0 {
                p /= z;
            } else {
                p.fill(1.0 / k as f64);
            }
            *slot = p;
        }

        let mut next = Array1::from_elem(k, alpha);
        for (p, &(_, weight)) in phi.iter().zip(doc.iter()) {
            next.scaled_add(weight, p);
        }

        let change = (&next - &gamma).mapv(f64::abs).sum() / k as f64;
        gamma = next;
        if change < DOC_TOL {
            break;
        }
    }

    let contributions = doc
        .iter()
        .zip(phi)
        .map(|(&(term, weight), p)| (term, p * weight))
        .collect();

    DocStats {
        gamma,
        contributions,
    }
}

/// Copy of `m` with each row scaled to sum to 1.
fn normalize_rows(m: &Array2<f64>) -> Array2<f64> {
    let mut out = m.clone();
    for mut row in out.rows_mut() {
        let sum = row.sum();
        if sum > 0.0 {
            row /= sum;
        }
    }
    out
}

fn mean_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    (a - b).mapv(f64::abs).sum() / a.len() as f64
}
