pub mod error;
pub use error::Error;

pub mod vocabulary;
pub use vocabulary::Vocabulary;

pub mod posting;
pub use posting::{ApprovalStatus, Posting, PostingStatus};

pub mod student_profile;
pub use student_profile::StudentProfile;

pub mod ranked_posting;
pub use ranked_posting::RankedPosting;

pub mod recommender_config;
pub use recommender_config::RecommenderConfig;

pub mod recommender;
pub use recommender::Recommender;

pub mod catalog_reader;
pub use catalog_reader::CatalogReader;
