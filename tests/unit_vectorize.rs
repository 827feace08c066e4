// Unit tests for vocabulary filtering and TF-IDF weighting.

use bonfire::error::PipelineError;
use bonfire::vectorize::{TfIdfVectorizer, Vocabulary};

fn corpus(docs: &[&[&str]]) -> Vec<Vec<String>> {
    docs.iter()
        .map(|doc| doc.iter().map(|s| s.to_string()).collect())
        .collect()
}

// ============================================================
// Vocabulary — document-frequency filtering
// ============================================================

#[test]
fn document_frequency_filtering() {
    // 10 documents: "planet" in all of them, "star" in 9, "comet" in 1.
    let mut docs = Vec::new();
    for i in 0..10 {
        let mut doc = vec!["planet".to_string()];
        if i < 9 {
            doc.push("star".to_string());
        }
        if i == 0 {
            doc.push("comet".to_string());
        }
        docs.push(doc);
    }

    let vocab = Vocabulary::build(&docs, 2, 0.95).unwrap();
    assert!(vocab.index_of("star").is_some());
    assert!(
        vocab.index_of("comet").is_none(),
        "a df=1 term must fall below min_doc_freq=2"
    );
    assert!(
        vocab.index_of("planet").is_none(),
        "a term in every document must be suppressed by the ratio cap"
    );
}

#[test]
fn repeated_occurrences_count_one_document() {
    // "star" 5 times in one document is still df=1.
    let docs = corpus(&[&["star", "star", "star", "star", "star"], &["moon"]]);
    let err = Vocabulary::build(&docs, 2, 1.0).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyVocabulary { .. }));
}

#[test]
fn indices_are_lexicographic() {
    let docs = corpus(&[
        &["banana", "apple"],
        &["apple", "banana", "cherry"],
        &["cherry", "apple"],
    ]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    assert_eq!(vocab.index_of("apple"), Some(0));
    assert_eq!(vocab.index_of("banana"), Some(1));
    assert_eq!(vocab.index_of("cherry"), Some(2));
    assert_eq!(vocab.term(2), Some("cherry"));
    assert_eq!(vocab.len(), 3);
}

#[test]
fn empty_vocabulary_is_a_typed_error() {
    let docs = corpus(&[&["one"], &["two"]]);
    let err = Vocabulary::build(&docs, 2, 1.0).unwrap_err();
    match err {
        PipelineError::EmptyVocabulary { n_docs, .. } => assert_eq!(n_docs, 2),
        other => panic!("expected EmptyVocabulary, got {other:?}"),
    }
}

// ============================================================
// TF-IDF — smoothed IDF and sparse transform
// ============================================================

#[test]
fn idf_favors_rare_terms() {
    // "common" in all 4 documents, "rare" in one.
    let docs = corpus(&[&["common", "rare"], &["common"], &["common"], &["common"]]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);

    let common = vocab.index_of("common").unwrap();
    let rare = vocab.index_of("rare").unwrap();
    assert!(vectorizer.idf()[common] < vectorizer.idf()[rare]);
}

#[test]
fn every_retained_term_has_positive_idf() {
    let docs = corpus(&[&["alpha", "beta"], &["alpha", "beta"], &["alpha"]]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);
    assert!(vectorizer.idf().iter().all(|&idf| idf > 0.0));
}

#[test]
fn transform_is_sparse_and_sorted() {
    let docs = corpus(&[&["delta", "alpha", "delta"], &["beta"], &["gamma"]]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);

    let vector = vectorizer.transform(&docs[0], &vocab);
    // Only the two terms present in the document appear
    assert_eq!(vector.len(), 2);
    // Entries sorted by feature index
    assert!(vector[0].0 < vector[1].0);
    assert!(vector.iter().all(|&(_, w)| w > 0.0));
}

#[test]
fn out_of_vocabulary_terms_are_omitted() {
    let docs = corpus(&[&["alpha"], &["alpha"]]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);

    let unseen = vec!["omega".to_string(), "alpha".to_string()];
    let vector = vectorizer.transform(&unseen, &vocab);
    assert_eq!(vector.len(), 1);
    assert_eq!(vector[0].0, vocab.index_of("alpha").unwrap());
}

#[test]
fn transform_corpus_preserves_document_order() {
    let docs = corpus(&[&["alpha"], &["beta"], &["alpha", "beta"]]);
    let vocab = Vocabulary::build(&docs, 1, 1.0).unwrap();
    let vectorizer = TfIdfVectorizer::fit(&docs, &vocab);

    let vectors = vectorizer.transform_corpus(&docs, &vocab);
    assert_eq!(vectors.len(), 3);
    assert_eq!(vectors[0][0].0, vocab.index_of("alpha").unwrap());
    assert_eq!(vectors[1][0].0, vocab.index_of("beta").unwrap());
    assert_eq!(vectors[2].len(), 2);
}
