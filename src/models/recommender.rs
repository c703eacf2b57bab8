use crate::models::{Posting, RankedPosting, RecommenderConfig, StudentProfile};
use crate::utils::{match_skills, round_score, sort_results, token_cosine_similarity};
use crate::Error;

use log::{debug, info};

/// Ranks postings against a single student profile.
pub struct Recommender<'a> {
    config: &'a RecommenderConfig,
}

impl<'a> Recommender<'a> {
    pub fn new(config: &'a RecommenderConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Recommender { config })
    }

    pub fn config(&self) -> &RecommenderConfig {
        self.config
    }

    /// Keeps only open, approved, hiring postings (optionally narrowed by `search`) and ranks them.
    pub fn recommend<'p>(
        &self,
        student: &StudentProfile,
        postings: &'p [Posting],
        search: Option<&str>,
    ) -> Vec<RankedPosting<'p>> {
        info!("Filtering candidate postings...");
        let candidates: Vec<&'p Posting> = postings
            .iter()
            .filter(|posting| posting.is_candidate())
            .filter(|posting| search.map_or(true, |search| posting.matches_search(search)))
            .collect();

        debug!(
            "{} of {} postings are candidates",
            candidates.len(),
            postings.len()
        );

        self.rank_candidates(student, candidates)
    }

    /// Scores every posting against the student, without any filtering, highest score first.
    pub fn rank<'p>(
        &self,
        student: &StudentProfile,
        postings: &'p [Posting],
    ) -> Vec<RankedPosting<'p>> {
        self.rank_candidates(student, postings.iter().collect())
    }

    fn rank_candidates<'p>(
        &self,
        student: &StudentProfile,
        candidates: Vec<&'p Posting>,
    ) -> Vec<RankedPosting<'p>> {
        info!("Tokenizing student profile...");
        let student_tokens = student.to_tokens();
        let student_skill_set = student.skill_set();

        info!("Scoring {} postings...", candidates.len());
        let mut results: Vec<RankedPosting<'p>> = candidates
            .into_iter()
            .map(|posting| {
                let posting_tokens = posting.to_tokens();
                let score = token_cosine_similarity(&student_tokens, &posting_tokens);

                debug!("Posting {:?} scored {}", posting.id, score);

                RankedPosting {
                    posting,
                    score: round_score(score, self.config.score_precision),
                    matched_skills: match_skills(&posting.skills, &student_skill_set),
                    is_recommended: score >= self.config.recommendation_threshold,
                }
            })
            .collect();

        info!("Sorting results...");
        sort_results(&mut results);

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApprovalStatus, PostingStatus};
    use crate::DEFAULT_RECOMMENDER_CONFIG;

    fn open_posting(id: &str, title: &str, skills: &[&str]) -> Posting {
        Posting {
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            status: PostingStatus::Enabled,
            approval_status: ApprovalStatus::Approved,
            is_hiring: true,
            ..Posting::new(id, title)
        }
    }

    fn student(skills: &[&str]) -> StudentProfile {
        StudentProfile {
            about: Some("Computer science student".to_string()),
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            ..StudentProfile::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RecommenderConfig {
            recommendation_threshold: 2.0,
            score_precision: 4,
        };
        assert!(Recommender::new(&config).is_err());
    }

    #[test]
    fn test_rank_orders_by_score() {
        let recommender = Recommender::new(DEFAULT_RECOMMENDER_CONFIG).unwrap();
        let postings = vec![
            open_posting("1", "Accounting Clerk", &["Excel"]),
            open_posting("2", "React Developer", &["React", "Node"]),
        ];

        let results = recommender.rank(&student(&["react", "node"]), &postings);

        assert_eq!(results[0].id(), "2");
        assert_eq!(results[0].matched_skills, vec!["React", "Node"]);
        assert!(results[0].is_recommended);
        assert_eq!(results[1].id(), "1");
        assert_eq!(results[1].score, 0.0);
        assert!(!results[1].is_recommended);
    }

    #[test]
    fn test_recommend_filters_non_candidates() {
        let recommender = Recommender::new(DEFAULT_RECOMMENDER_CONFIG).unwrap();
        let postings = vec![
            Posting {
                is_hiring: false,
                ..open_posting("1", "React Developer", &["React"])
            },
            open_posting("2", "React Intern", &["React"]),
            open_posting("3", "Node Intern", &["Node"]),
        ];

        let results = recommender.recommend(&student(&["React"]), &postings, Some("react"));

        let ids: Vec<&str> = results.iter().map(|result| result.id().as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    fn posting_with_distinct_tokens(id: &str, token_count: usize) -> Posting {
        let title = std::iter::once("alpha".to_string())
            .chain((1..token_count).map(|i| format!("t{}", i)))
            .collect::<Vec<_>>()
            .join(" ");

        open_posting(id, &title, &[])
    }

    #[test]
    fn test_threshold_uses_unrounded_score() {
        let config = RecommenderConfig {
            recommendation_threshold: 0.2,
            score_precision: 1,
        };
        let recommender = Recommender::new(&config).unwrap();
        let student = StudentProfile {
            about: Some("alpha".to_string()),
            ..StudentProfile::default()
        };
        // 1 / sqrt(25) = 0.2 exactly; 1 / sqrt(36) rounds up to 0.2 but falls short of it
        let postings = vec![
            posting_with_distinct_tokens("short", 25),
            posting_with_distinct_tokens("long", 36),
        ];

        let results = recommender.rank(&student, &postings);

        assert_eq!(results[0].id(), "short");
        assert_eq!(results[0].score, 0.2);
        assert!(results[0].is_recommended);
        assert_eq!(results[1].id(), "long");
        assert_eq!(results[1].score, 0.2);
        assert!(!results[1].is_recommended);
    }
}
