use tracing::{debug, info};

use super::domain::{Customer, ValidationOutcome};
use crate::matching::is_match;

/// Compares customer pairs by name and email and thresholds the combined score.
#[derive(Debug, Clone)]
pub struct CustomerValidationService {
    default_threshold: f64,
}

impl CustomerValidationService {
    pub fn new(default_threshold: f64) -> Result<Self, ValidationError> {
        let default_threshold = check_threshold(default_threshold)?;
        Ok(Self { default_threshold })
    }

    pub fn default_threshold(&self) -> f64 {
        self.default_threshold
    }

    /// Validate a pair against an explicit threshold.
    pub fn validate(
        &self,
        lhs: &Customer,
        rhs: &Customer,
        threshold: f64,
    ) -> Result<ValidationOutcome, ValidationError> {
        let threshold = check_threshold(threshold)?;
        Ok(self.score(lhs, rhs, threshold))
    }

    /// Validate a pair against the threshold configured at construction.
    pub fn validate_with_default(&self, lhs: &Customer, rhs: &Customer) -> ValidationOutcome {
        self.score(lhs, rhs, self.default_threshold)
    }

    fn score(&self, lhs: &Customer, rhs: &Customer, threshold: f64) -> ValidationOutcome {
        let name_score = lhs.match_name(&rhs.name);
        let email_score = lhs.match_email(&rhs.email);
        let score = (name_score + email_score) / 2.0;
        let matched = is_match(score, threshold);

        debug!(name_score, email_score, score, threshold, "customer pair scored");
        if matched {
            info!(lhs = %lhs.name, rhs = %rhs.name, score, "customer pair matched");
        }

        ValidationOutcome {
            name_score,
            email_score,
            score,
            threshold,
            matched,
        }
    }
}

/// Accepts any finite threshold, including negative ones.
pub fn check_threshold(threshold: f64) -> Result<f64, ValidationError> {
    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(ValidationError::InvalidThreshold(threshold))
    }
}

/// Error raised by the validation service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("match threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
}
