use crate::models::Posting;
use crate::types::{PostingId, SimilarityScore, SkillName};

/// A posting decorated with its recommendation result. Lives for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPosting<'a> {
    pub posting: &'a Posting,
    /// Rounded to the configured precision.
    pub score: SimilarityScore,
    pub matched_skills: Vec<SkillName>,
    pub is_recommended: bool,
}

impl<'a> RankedPosting<'a> {
    pub fn id(&self) -> &PostingId {
        &self.posting.id
    }
}
