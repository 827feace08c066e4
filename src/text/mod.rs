// Text normalization — raw post titles into clean token sequences.

pub mod lemma;
pub mod normalizer;

pub use normalizer::Normalizer;
