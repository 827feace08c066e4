// Term weighting — vocabulary construction and TF-IDF vectors.

pub mod tfidf;
pub mod vocabulary;

pub use tfidf::{DocVector, TfIdfVectorizer};
pub use vocabulary::Vocabulary;
