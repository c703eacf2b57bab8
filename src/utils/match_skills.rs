use crate::types::SkillName;
use std::collections::HashSet;

/// Picks the posting skills whose lower-cased name is in `student_skill_set`.
///
/// Matching is exact on the whole name (no tokenization); the posting's spelling and order
/// are kept in the result.
pub fn match_skills(
    posting_skills: &[SkillName],
    student_skill_set: &HashSet<String>,
) -> Vec<SkillName> {
    posting_skills
        .iter()
        .filter(|skill| student_skill_set.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}
