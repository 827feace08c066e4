// Unit tests for text normalization.
//
// The normalizer must never fail: missing or junk input degrades to an
// empty token sequence. Everything the pipeline hashes downstream
// depends on these tokens being clean and deterministic.

use bonfire::text::Normalizer;

#[test]
fn missing_text_is_empty() {
    let normalizer = Normalizer::shared();
    assert!(normalizer.normalize_opt(None).is_empty());
    assert!(normalizer.normalize("").is_empty());
}

#[test]
fn non_text_junk_is_empty() {
    let normalizer = Normalizer::shared();
    assert!(normalizer.normalize("123 456 !!! ??? 789").is_empty());
    assert!(normalizer.normalize("   \t\n  ").is_empty());
}

#[test]
fn urls_are_stripped_before_filtering() {
    let normalizer = Normalizer::shared();
    let tokens = normalizer.normalize("Giraffe devours Spaghetti!! http://recipes.example/x?id=1");
    assert_eq!(tokens, vec!["giraffe", "devour", "spaghetti"]);

    let tokens = normalizer.normalize("spaghetti www.example.com giraffe");
    assert_eq!(tokens, vec!["spaghetti", "giraffe"]);
}

#[test]
fn stopwords_and_short_tokens_are_dropped() {
    let normalizer = Normalizer::shared();
    let tokens = normalizer.normalize("the spaghetti is on an ox");
    // "the"/"is"/"on"/"an" are stopwords, "ox" is too short
    assert_eq!(tokens, vec!["spaghetti"]);
}

#[test]
fn punctuation_collapses_to_nothing() {
    let normalizer = Normalizer::shared();
    // Apostrophes vanish without splitting the token
    let tokens = normalizer.normalize("spag'hetti gir-affe");
    assert_eq!(tokens, vec!["spaghetti", "giraffe"]);
}

#[test]
fn tokens_are_lowercased_and_lemmatized() {
    let normalizer = Normalizer::shared();
    let tokens = normalizer.normalize("GIRAFFES Devour Spaghetti");
    assert_eq!(tokens, vec!["giraffe", "devour", "spaghetti"]);
}

#[test]
fn source_order_is_preserved() {
    let normalizer = Normalizer::shared();
    let tokens = normalizer.normalize("zebra giraffe antelope zebra");
    assert_eq!(tokens, vec!["zebra", "giraffe", "antelope", "zebra"]);
}
