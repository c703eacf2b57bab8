use crate::constants::MAX_SCORE_PRECISION;
use crate::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderConfig {
    /// Unrounded scores at or above this are flagged as recommended.
    pub recommendation_threshold: f64,
    /// Decimal places kept on the reported score.
    pub score_precision: u32,
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.recommendation_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.recommendation_threshold)
        {
            return Err(Error::ConfigError(format!(
                "recommendation_threshold must be within [0, 1], got {}",
                self.recommendation_threshold
            )));
        }

        if self.score_precision > MAX_SCORE_PRECISION {
            return Err(Error::ConfigError(format!(
                "score_precision must be at most {}, got {}",
                MAX_SCORE_PRECISION, self.score_precision
            )));
        }

        Ok(())
    }
}

impl fmt::Display for RecommenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecommenderConfig (\n\trecommendation_threshold: {},\n\tscore_precision: {}\n)",
            self.recommendation_threshold, self.score_precision
        )
    }
}
