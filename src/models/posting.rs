use crate::types::{PostingId, SkillName, Token};
use crate::utils::tokenize;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Whether the employer has the posting switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostingStatus {
    #[default]
    Enabled,
    Disabled,
}

impl FromStr for PostingStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "enabled" => Ok(PostingStatus::Enabled),
            "disabled" => Ok(PostingStatus::Disabled),
            other => Err(Error::ParserError(format!(
                "Unknown posting status: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostingStatus::Enabled => write!(f, "enabled"),
            PostingStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Review state of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl FromStr for ApprovalStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(Error::ParserError(format!(
                "Unknown approval status: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An internship or job posting as supplied by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub id: PostingId,
    pub title: String,
    pub description: Option<String>,
    pub skills: Vec<SkillName>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub status: PostingStatus,
    pub approval_status: ApprovalStatus,
    pub is_hiring: bool,
}

impl Posting {
    /// Creates a posting with the catalog defaults: enabled, pending approval, not hiring.
    pub fn new(id: impl Into<PostingId>, title: impl Into<String>) -> Self {
        Posting {
            id: id.into(),
            title: title.into(),
            description: None,
            skills: Vec::new(),
            company: None,
            industry: None,
            status: PostingStatus::default(),
            approval_status: ApprovalStatus::default(),
            is_hiring: false,
        }
    }

    /// Only postings that are enabled, approved and hiring may be recommended.
    pub fn is_candidate(&self) -> bool {
        self.status == PostingStatus::Enabled
            && self.approval_status == ApprovalStatus::Approved
            && self.is_hiring
    }

    /// Case-insensitive literal substring match on title or description.
    ///
    /// The search text is used as given, surrounding whitespace included. Only an empty search
    /// matches every posting.
    pub fn matches_search(&self, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }

        let needle = search.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .map_or(false, |description| description.to_lowercase().contains(&needle))
    }

    /// Gathers title, description, company, industry and skills into one bag of words.
    pub fn to_tokens(&self) -> Vec<Token> {
        let skills = self.skills.join(" ");

        let parts: Vec<&str> = [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.company.as_deref(),
            self.industry.as_deref(),
            Some(skills.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

        tokenize(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_posting() -> Posting {
        Posting {
            status: PostingStatus::Enabled,
            approval_status: ApprovalStatus::Approved,
            is_hiring: true,
            ..Posting::new("1", "Junior React Developer")
        }
    }

    #[test]
    fn test_defaults_are_not_candidates() {
        let posting = Posting::new("1", "Intern");

        assert_eq!(posting.status, PostingStatus::Enabled);
        assert_eq!(posting.approval_status, ApprovalStatus::Pending);
        assert!(!posting.is_hiring);
        assert!(!posting.is_candidate());
    }

    #[test]
    fn test_candidate_requires_all_three_flags() {
        assert!(open_posting().is_candidate());

        let disabled = Posting {
            status: PostingStatus::Disabled,
            ..open_posting()
        };
        let rejected = Posting {
            approval_status: ApprovalStatus::Rejected,
            ..open_posting()
        };
        let closed = Posting {
            is_hiring: false,
            ..open_posting()
        };

        assert!(!disabled.is_candidate());
        assert!(!rejected.is_candidate());
        assert!(!closed.is_candidate());
    }

    #[test]
    fn test_matches_search() {
        let posting = Posting {
            description: Some("Build dashboards with TypeScript".to_string()),
            ..open_posting()
        };

        assert!(posting.matches_search("react"));
        assert!(posting.matches_search("TYPESCRIPT"));
        assert!(posting.matches_search(""));
        assert!(!posting.matches_search("accounting"));
        assert!(!posting.matches_search("react%"));
    }

    #[test]
    fn test_search_whitespace_is_matched_literally() {
        let posting = Posting::new("1", "Python");

        assert!(!posting.matches_search(" python"));
        assert!(!posting.matches_search("python "));
        assert!(!posting.matches_search("   "));

        let spaced = Posting::new("2", "Data   Analyst");
        assert!(spaced.matches_search("   "));
        assert!(spaced.matches_search("a   A"));
        assert!(Posting::new("3", "Junior Python Dev").matches_search(" python "));
    }

    #[test]
    fn test_to_tokens_skips_missing_parts() {
        let posting = Posting {
            description: Some(String::new()),
            skills: vec!["Node.js".to_string(), "SQL".to_string()],
            company: Some("Acme Corp.".to_string()),
            ..open_posting()
        };

        assert_eq!(
            posting.to_tokens(),
            vec!["junior", "react", "developer", "acme", "corp", "node", "js", "sql"]
        );
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(" Enabled ".parse::<PostingStatus>().unwrap(), PostingStatus::Enabled);
        assert_eq!("APPROVED".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Approved);
        assert!("archived".parse::<PostingStatus>().is_err());
        assert!("".parse::<ApprovalStatus>().is_err());
    }
}
