#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_RECOMMENDER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    ApprovalStatus, CatalogReader, Error, Posting, PostingStatus, RankedPosting, Recommender,
    RecommenderConfig, StudentProfile, Vocabulary,
};
pub mod types;
mod utils;
pub use types::{
    PostingId, SimilarityScore, SkillName, TermFrequencyVector, Token, TokenId, TokenRef,
};
pub use utils::{
    cosine_similarity, match_skills, normalize_text, normalize_value, round_score, sort_results,
    token_cosine_similarity, tokenize, tokenize_value,
};

/// Ranks the open, approved, hiring postings of `postings` for `student`, using the default
/// threshold and precision.
pub fn recommend_postings<'p>(
    student: &StudentProfile,
    postings: &'p [Posting],
    search: Option<&str>,
) -> Result<Vec<RankedPosting<'p>>, Error> {
    recommend_postings_with_custom_config(DEFAULT_RECOMMENDER_CONFIG, student, postings, search)
}

pub fn recommend_postings_with_custom_config<'p>(
    recommender_config: &RecommenderConfig,
    student: &StudentProfile,
    postings: &'p [Posting],
    search: Option<&str>,
) -> Result<Vec<RankedPosting<'p>>, Error> {
    let recommender = Recommender::new(recommender_config)?;

    Ok(recommender.recommend(student, postings, search))
}
