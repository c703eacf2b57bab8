/// Postings scoring at or above this value are flagged as recommended.
pub const DEFAULT_RECOMMENDATION_THRESHOLD: f64 = 0.2;

/// Number of decimal places scores are rounded to for display and ordering.
pub const DEFAULT_SCORE_PRECISION: u32 = 4;

/// Upper bound on `score_precision`; beyond this `f64` rounding stops being meaningful.
pub const MAX_SCORE_PRECISION: u32 = 10;

/// Separates skill names inside a single CSV cell.
pub const SKILL_LIST_DELIMITER: char = ';';
