use crate::models::Vocabulary;
use crate::types::{SimilarityScore, TokenRef};
use crate::utils::cosine_similarity;

/// Scores two bags of words against each other.
///
/// A vocabulary is built from exactly the two sequences, both are turned into term-frequency
/// vectors over it and the cosine of the two vectors is returned. Either sequence being empty
/// short-circuits to `0.0`, as does any non-finite result.
///
/// ```rust
/// use spartrack_recommender::token_cosine_similarity;
///
/// let score = token_cosine_similarity(&["python", "flask"], &["python", "flask"]);
/// assert!((score - 1.0).abs() < 1e-9);
/// assert_eq!(token_cosine_similarity(&["python"], &["java"]), 0.0);
/// ```
pub fn token_cosine_similarity<A, B>(tokens_a: &[A], tokens_b: &[B]) -> SimilarityScore
where
    A: AsRef<TokenRef>,
    B: AsRef<TokenRef>,
{
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let mut vocabulary = Vocabulary::new();
    vocabulary.upsert_tokens(tokens_a);
    vocabulary.upsert_tokens(tokens_b);

    let vector_a = vocabulary.to_term_frequency_vector(tokens_a);
    let vector_b = vocabulary.to_term_frequency_vector(tokens_b);

    let score = cosine_similarity(&vector_a, &vector_b);

    if score.is_finite() {
        score
    } else {
        0.0
    }
}
