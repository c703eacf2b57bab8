use log::{error, info};
use serde::Serialize;
use spartrack_recommender::{
    CatalogReader, Error, Recommender, RecommenderConfig, DEFAULT_RECOMMENDER_CONFIG,
};
use std::io;

const USAGE: &str = "Usage: spartrack-recommender-cli <postings.csv[.gz]> <student.csv[.gz]> \
                     [--search TEXT] [--threshold F] [--precision N] [--all]";

struct CliArgs {
    postings_path: String,
    student_path: String,
    search: Option<String>,
    config: RecommenderConfig,
    rank_all: bool,
}

#[derive(Serialize)]
struct OutputRecord<'a> {
    id: &'a str,
    title: &'a str,
    score: f64,
    is_recommended: bool,
    matched_skills: String,
}

fn parse_args(args: &[String]) -> Result<CliArgs, Error> {
    let mut positional = Vec::new();
    let mut search = None;
    let mut config = *DEFAULT_RECOMMENDER_CONFIG;
    let mut rank_all = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => search = Some(next_value(&mut iter, arg)?.to_string()),
            "--threshold" => {
                let value = next_value(&mut iter, arg)?;
                config.recommendation_threshold = value
                    .parse()
                    .map_err(|_| Error::ConfigError(format!("Invalid threshold: {}", value)))?;
            }
            "--precision" => {
                let value = next_value(&mut iter, arg)?;
                config.score_precision = value
                    .parse()
                    .map_err(|_| Error::ConfigError(format!("Invalid precision: {}", value)))?;
            }
            "--all" => rank_all = true,
            flag if flag.starts_with("--") => {
                return Err(Error::ConfigError(format!("Unknown flag: {}", flag)))
            }
            _ => positional.push(arg.clone()),
        }
    }

    if positional.len() != 2 {
        return Err(Error::ConfigError(USAGE.to_string()));
    }

    let student_path = positional.pop().unwrap_or_default();
    let postings_path = positional.pop().unwrap_or_default();

    Ok(CliArgs {
        postings_path,
        student_path,
        search,
        config,
        rank_all,
    })
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a String, Error> {
    iter.next()
        .ok_or_else(|| Error::ConfigError(format!("Missing value for {}", flag)))
}

fn run(args: CliArgs) -> Result<(), Error> {
    let recommender = Recommender::new(&args.config)?;
    info!("{}", recommender.config());

    let postings = CatalogReader::read_postings_from_path(&args.postings_path)?;
    let student = CatalogReader::read_student_profile_from_path(&args.student_path)?;

    let results = if args.rank_all {
        recommender.rank(&student, &postings)
    } else {
        recommender.recommend(&student, &postings, args.search.as_deref())
    };

    let mut writer = csv::Writer::from_writer(io::stdout());
    for result in &results {
        writer.serialize(OutputRecord {
            id: &result.posting.id,
            title: &result.posting.title,
            score: result.score,
            is_recommended: result.is_recommended,
            matched_skills: result.matched_skills.join(";"),
        })?;
    }
    writer.flush()?;

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli_args = match parse_args(&args) {
        Ok(cli_args) => cli_args,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli_args) {
        error!("Error generating recommendations: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_parse_args_with_flags() {
        let cli_args = parse_args(&args(&[
            "postings.csv",
            "--search",
            "react",
            "student.csv",
            "--threshold",
            "0.35",
            "--all",
        ]))
        .unwrap();

        assert_eq!(cli_args.postings_path, "postings.csv");
        assert_eq!(cli_args.student_path, "student.csv");
        assert_eq!(cli_args.search.as_deref(), Some("react"));
        assert_eq!(cli_args.config.recommendation_threshold, 0.35);
        assert_eq!(cli_args.config.score_precision, 4);
        assert!(cli_args.rank_all);
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(&args(&["postings.csv"])).is_err());
        assert!(parse_args(&args(&["a.csv", "b.csv", "--precision"])).is_err());
        assert!(parse_args(&args(&["a.csv", "b.csv", "--threshold", "high"])).is_err());
        assert!(parse_args(&args(&["a.csv", "b.csv", "--verbose"])).is_err());
    }
}
