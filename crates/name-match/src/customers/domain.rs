use serde::{Deserialize, Serialize};

use crate::matching::{match_emails, match_names};

/// A customer identity as submitted for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Raw name score against another name; see [`crate::matching::compare_names`].
    pub fn match_name(&self, other_name: &str) -> f64 {
        match_names(&self.name, other_name)
    }

    pub fn match_email(&self, other_email: &str) -> f64 {
        match_emails(&self.email, other_email)
    }
}

/// Scores and decision for one customer pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub name_score: f64,
    pub email_score: f64,
    /// Mean of the name and email scores.
    pub score: f64,
    pub threshold: f64,
    pub matched: bool,
}
