use crate::models::{Posting, StudentProfile};
use crate::utils::split_skill_list;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PostingRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    skills: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    approval_status: Option<String>,
    #[serde(default)]
    is_hiring: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StudentProfileRecord {
    #[serde(default)]
    about: Option<String>,
    #[serde(default)]
    skills: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    program: Option<String>,
    #[serde(default)]
    major: Option<String>,
}

/// Loads posting catalogs and student profiles from CSV.
///
/// Postings use the headers `id,title,description,skills,company,industry,status,
/// approval_status,is_hiring`; students use `about,skills,department,program,major`.
/// `skills` cells are `;`-separated. Any source may be gzip-compressed.
pub struct CatalogReader {}

impl CatalogReader {
    pub fn read_postings_from_string(csv: &str) -> Result<Vec<Posting>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv));

        let mut postings = Vec::new();

        for (row_idx, record) in reader.deserialize::<PostingRecord>().enumerate() {
            let record = record.map_err(|e| {
                Error::ParserError(format!("Failed to read posting row {}: {}", row_idx + 1, e))
            })?;

            postings.push(Self::posting_from_record(record)?);
        }

        info!("Read {} postings", postings.len());

        Ok(postings)
    }

    pub fn read_student_profile_from_string(csv: &str) -> Result<StudentProfile, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv));

        let mut records = reader.deserialize::<StudentProfileRecord>();

        let record = records
            .next()
            .ok_or_else(|| Error::NotFound("Student profile not found".to_string()))?
            .map_err(|e| Error::ParserError(format!("Failed to read student profile: {}", e)))?;

        if records.next().is_some() {
            warn!("Student profile source has more than one row; using the first");
        }

        Ok(StudentProfile {
            about: non_empty(record.about),
            skills: record
                .skills
                .as_deref()
                .map(split_skill_list)
                .unwrap_or_default(),
            department: non_empty(record.department),
            program: non_empty(record.program),
            major: non_empty(record.major),
        })
    }

    /// Decompress and parse a gzip-compressed posting catalog
    pub fn read_postings_from_gzip_bytes(bytes: &[u8]) -> Result<Vec<Posting>, Error> {
        Self::read_postings_from_string(&Self::decompress(bytes)?)
    }

    pub fn read_student_profile_from_gzip_bytes(bytes: &[u8]) -> Result<StudentProfile, Error> {
        Self::read_student_profile_from_string(&Self::decompress(bytes)?)
    }

    /// Reads a posting catalog from disk; paths ending in `.gz` are decompressed.
    pub fn read_postings_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Posting>, Error> {
        Self::read_postings_from_string(&Self::read_to_string(path.as_ref())?)
    }

    /// Reads a student profile from disk; paths ending in `.gz` are decompressed.
    pub fn read_student_profile_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<StudentProfile, Error> {
        Self::read_student_profile_from_string(&Self::read_to_string(path.as_ref())?)
    }

    fn read_to_string(path: &Path) -> Result<String, Error> {
        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;

        let is_gzip = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        if is_gzip {
            Self::decompress(&bytes)
        } else {
            String::from_utf8(bytes).map_err(|e| {
                Error::ParserError(format!("{} is not valid UTF-8: {}", path.display(), e))
            })
        }
    }

    fn decompress(bytes: &[u8]) -> Result<String, Error> {
        let mut decoder = GzDecoder::new(bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Ok(decompressed_data)
    }

    fn posting_from_record(record: PostingRecord) -> Result<Posting, Error> {
        if record.id.is_empty() {
            return Err(Error::ParserError("Missing 'id' field".to_string()));
        }

        let mut posting = Posting::new(record.id, record.title);
        posting.description = non_empty(record.description);
        posting.skills = record
            .skills
            .as_deref()
            .map(split_skill_list)
            .unwrap_or_default();
        posting.company = non_empty(record.company);
        posting.industry = non_empty(record.industry);

        if let Some(status) = non_empty(record.status) {
            posting.status = status.parse()?;
        }

        if let Some(approval_status) = non_empty(record.approval_status) {
            posting.approval_status = approval_status.parse()?;
        }

        if let Some(is_hiring) = non_empty(record.is_hiring) {
            posting.is_hiring = parse_flag(&is_hiring)?;
        }

        Ok(posting)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_flag(value: &str) -> Result<bool, Error> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(Error::ParserError(format!(
            "Unknown is_hiring value: {:?}",
            other
        ))),
    }
}
