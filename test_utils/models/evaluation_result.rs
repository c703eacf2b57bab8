use spartrack_recommender::PostingId;
use std::collections::HashSet;

/// Compares the postings a scenario expects to be recommended against what was recommended.
///
/// `EXPECTED` lines are listed best match first, so ordering is checked along with membership.
#[derive(Debug)]
pub struct EvaluationResult {
    pub expected: Vec<PostingId>,
    pub recommended: Vec<PostingId>,
    pub false_positives: Vec<PostingId>,
    pub false_negatives: Vec<PostingId>,
}

impl EvaluationResult {
    pub fn new(expected: &[PostingId], results: &[PostingId]) -> Self {
        let expected_set: HashSet<_> = expected.iter().cloned().collect();
        let results_set: HashSet<_> = results.iter().cloned().collect();

        let mut false_positives: Vec<PostingId> =
            results_set.difference(&expected_set).cloned().collect();
        let mut false_negatives: Vec<PostingId> =
            expected_set.difference(&results_set).cloned().collect();

        false_positives.sort();
        false_negatives.sort();

        Self {
            expected: expected.to_vec(),
            recommended: results.to_vec(),
            false_positives,
            false_negatives,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.false_positives.is_empty() && self.false_negatives.is_empty()
    }

    /// True when the recommendations came back in exactly the expected order.
    pub fn is_in_expected_order(&self) -> bool {
        self.recommended == self.expected
    }

    pub fn summary(&self) -> String {
        format!(
            "Expected: {:?}, Recommended: {:?}, False Positives: {:?}, False Negatives: {:?}",
            self.expected,
            self.recommended,
            self.false_positives,
            self.false_negatives
        )
    }
}
