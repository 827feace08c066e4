// Bonfire: latent trend discovery for social media posts
//
// This is the library root. Each module corresponds to a stage of the
// trend-discovery pipeline or a supporting subsystem: stored posts are
// normalized into tokens, weighted with TF-IDF, fed to an online LDA
// topic model, and summarized into a ranked trend report.

pub mod config;
pub mod error;
pub mod ingest;
pub mod lda;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod store;
pub mod summarize;
pub mod text;
pub mod vectorize;
