use crate::constants::{DEFAULT_RECOMMENDATION_THRESHOLD, DEFAULT_SCORE_PRECISION};
use crate::models::RecommenderConfig;

pub const DEFAULT_RECOMMENDER_CONFIG: &RecommenderConfig = &RecommenderConfig {
    recommendation_threshold: DEFAULT_RECOMMENDATION_THRESHOLD,
    score_precision: DEFAULT_SCORE_PRECISION,
};
