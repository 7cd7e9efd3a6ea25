//! Required-field checks run before a form is submitted.
//!
//! A field counts as empty when it is blank after trimming whitespace.

use thiserror::Error;

use crate::records::{
    ClauseCompareRequest, ClauseExplainRequest, LegalQaRequest, NdaGenerateRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Forms that must have their required fields filled before submission.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

impl Validate for NdaGenerateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("party_1", &self.party_1)?;
        require("party_2", &self.party_2)?;
        require("purpose", &self.purpose)?;
        require("jurisdiction", &self.jurisdiction)
    }
}

impl Validate for ClauseExplainRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("clause", &self.clause)
    }
}

impl Validate for ClauseCompareRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("clause_type", &self.clause_type)?;
        require("country_1", &self.country_1)?;
        require("country_2", &self.country_2)
    }
}

impl Validate for LegalQaRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("question", &self.question)
    }
}
