use crate::types::{SkillName, Token};
use crate::utils::tokenize;
use std::collections::HashSet;

/// The parts of a student trainee's record that recommendations are built from.
///
/// `department`, `program` and `major` come from the student's latest internship section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentProfile {
    pub about: Option<String>,
    pub skills: Vec<SkillName>,
    pub department: Option<String>,
    pub program: Option<String>,
    pub major: Option<String>,
}

impl StudentProfile {
    /// Declared skill names, blank entries dropped.
    pub fn skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|skill| skill.as_str())
            .filter(|skill| !skill.trim().is_empty())
            .collect()
    }

    /// Lower-cased skill names, for exact matching against posting skills.
    pub fn skill_set(&self) -> HashSet<String> {
        self.skill_names()
            .into_iter()
            .map(|skill| skill.to_lowercase())
            .collect()
    }

    /// Gathers about, department, program, major and skills into one bag of words.
    pub fn to_tokens(&self) -> Vec<Token> {
        let skills = self.skill_names().join(" ");

        let parts: Vec<&str> = [
            self.about.as_deref(),
            self.department.as_deref(),
            self.program.as_deref(),
            self.major.as_deref(),
            Some(skills.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

        tokenize(&parts.join(" "))
    }
}
