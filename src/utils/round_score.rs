use crate::types::SimilarityScore;

/// Rounds a score to `precision` decimal places, halves away from zero.
pub fn round_score(score: SimilarityScore, precision: u32) -> SimilarityScore {
    let factor = 10f64.powi(precision as i32);
    let rounded = (score * factor).round() / factor;

    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(round_score(0.123456, 4), 0.1235);
        assert_eq!(round_score(0.996, 2), 1.0);
        assert_eq!(round_score(0.5, 0), 1.0);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(round_score(f64::NAN, 4), 0.0);
        assert_eq!(round_score(f64::INFINITY, 4), 0.0);
    }
}
