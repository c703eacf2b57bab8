use crate::models::RankedPosting;

/// Sorts ranked postings by score, highest first.
///
/// The sort is stable: postings with equal scores keep their catalog order. NaN scores are
/// treated as equal to everything (they cannot occur once scores pass through `round_score`).
///
/// ### Example:
/// ```rust
/// use spartrack_recommender::{sort_results, Posting, RankedPosting};
///
/// let postings = vec![Posting::new("a", "A"), Posting::new("b", "B"), Posting::new("c", "C")];
/// let mut results: Vec<RankedPosting> = postings
///     .iter()
///     .zip([0.1, 0.5, 0.1])
///     .map(|(posting, score)| RankedPosting {
///         posting,
///         score,
///         matched_skills: vec![],
///         is_recommended: false,
///     })
///     .collect();
///
/// sort_results(&mut results);
///
/// let ids: Vec<&str> = results.iter().map(|result| result.id().as_str()).collect();
/// assert_eq!(ids, vec!["b", "a", "c"]);
/// ```
pub fn sort_results(results: &mut [RankedPosting]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score) // Sort by score (descending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
    });
}
