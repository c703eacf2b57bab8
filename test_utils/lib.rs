pub mod constants;
pub mod models {
    pub mod evaluation_result;
    pub use evaluation_result::EvaluationResult;
}

pub use models::EvaluationResult;

use constants::TEST_POSTINGS_CSV_PATH;
use log::info;
use spartrack_recommender::{
    CatalogReader, Posting, PostingId, Recommender, RecommenderConfig, StudentProfile,
};
use std::{fs, path::Path};

/// A student profile, optional search and expected recommendations parsed from a scenario file.
pub struct Scenario {
    pub student: StudentProfile,
    pub search: Option<String>,
    pub expected: Vec<PostingId>,
}

/// Loads the shared posting catalog used by scenario files.
pub fn load_test_postings() -> Vec<Posting> {
    CatalogReader::read_postings_from_path(&*TEST_POSTINGS_CSV_PATH)
        .expect("Failed to load test postings")
}

// Helper function to read the value of every line starting with `prefix`
fn get_prefixed_values(content: &str, prefix: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

fn get_prefixed_value(content: &str, prefix: &str) -> Option<String> {
    get_prefixed_values(content, prefix)
        .into_iter()
        .next()
        .filter(|value| !value.is_empty())
}

/// Parses a scenario file made of `ABOUT:`, `SKILLS:`, `DEPARTMENT:`, `PROGRAM:`, `MAJOR:`,
/// `SEARCH:`, `EXPECTED:` and `COMMENT:` lines.
pub fn read_scenario(file_path: &Path) -> Scenario {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let skills = get_prefixed_value(&content, "SKILLS:")
        .map(|skills| {
            skills
                .split(';')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Scenario {
        student: StudentProfile {
            about: get_prefixed_value(&content, "ABOUT:"),
            skills,
            department: get_prefixed_value(&content, "DEPARTMENT:"),
            program: get_prefixed_value(&content, "PROGRAM:"),
            major: get_prefixed_value(&content, "MAJOR:"),
        },
        search: get_prefixed_value(&content, "SEARCH:"),
        expected: get_prefixed_values(&content, "EXPECTED:"),
    }
}

/// Runs a scenario file against the shared catalog and evaluates the recommended postings.
pub fn run_test_for_file(test_file_path: &Path, config: &RecommenderConfig) -> EvaluationResult {
    let postings = load_test_postings();
    let scenario = read_scenario(test_file_path);

    info!("Testing file: {:?}", test_file_path);

    let recommender = Recommender::new(config).expect("Invalid recommender config");
    let results = recommender.recommend(&scenario.student, &postings, scenario.search.as_deref());

    let recommended: Vec<PostingId> = results
        .iter()
        .filter(|result| result.is_recommended)
        .map(|result| result.id().clone())
        .collect();

    EvaluationResult::new(&scenario.expected, &recommended)
}
