use spartrack_recommender::{
    recommend_postings, ApprovalStatus, Posting, PostingStatus, StudentProfile,
};

fn main() {
    env_logger::init();

    let student = StudentProfile {
        about: Some("I enjoy building REST APIs and dashboards".to_string()),
        skills: vec!["Python".to_string(), "Django".to_string(), "SQL".to_string()],
        department: Some("College of Informatics".to_string()),
        program: Some("Information Technology".to_string()),
        major: None,
    };

    let postings: Vec<Posting> = [
        ("101", "Backend Developer Intern", "Build REST APIs in Python", "Python;Django"),
        ("102", "Marketing Assistant", "Plan social media campaigns", "Copywriting"),
        ("103", "Data Analyst Trainee", "Write SQL reports and dashboards", "SQL;Excel"),
    ]
    .into_iter()
    .map(|(id, title, description, skills)| Posting {
        description: Some(description.to_string()),
        skills: skills.split(';').map(|skill| skill.to_string()).collect(),
        status: PostingStatus::Enabled,
        approval_status: ApprovalStatus::Approved,
        is_hiring: true,
        ..Posting::new(id, title)
    })
    .collect();

    let results = recommend_postings(&student, &postings, None).unwrap();

    println!("Recommendations for the sample student:");
    for result in results {
        println!(
            "{} {:<28} {:.4} recommended={} matched={:?}",
            result.id(),
            result.posting.title,
            result.score,
            result.is_recommended,
            result.matched_skills
        );
    }
}
