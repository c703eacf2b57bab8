pub mod normalize_text;
pub use normalize_text::{normalize_text, normalize_value};

pub mod tokenize;
pub use tokenize::{tokenize, tokenize_value};

pub mod cosine_similarity;
pub use cosine_similarity::cosine_similarity;

pub mod token_cosine_similarity;
pub use token_cosine_similarity::token_cosine_similarity;

pub mod round_score;
pub use round_score::round_score;

pub mod match_skills;
pub use match_skills::match_skills;

pub mod sort_results;
pub use sort_results::sort_results;

pub mod split_skill_list;
pub use split_skill_list::split_skill_list;
