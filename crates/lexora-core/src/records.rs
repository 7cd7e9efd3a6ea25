//! Wire records exchanged with the Lexora API.
//!
//! Every endpoint gets its own fixed-field type. Optional flags default to
//! `false` when the server omits them.

use serde::{Deserialize, Serialize};

/// Characters of clause text quoted in a clause-analysis export title.
const EXPORT_CLAUSE_PREVIEW: usize = 100;

/// Filename used when an NDA download URL has no usable last segment.
const DEFAULT_NDA_FILENAME: &str = "nda.docx";

// ── Requests ──

/// Form input for `POST /nda/generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdaGenerateRequest {
    pub party_1: String,
    pub party_2: String,
    pub jurisdiction: String,
    pub purpose: String,
}

/// Form input for `POST /explainer/explain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseExplainRequest {
    pub clause: String,
}

/// Form input for `POST /comparator/compare`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseCompareRequest {
    pub clause_type: String,
    pub country_1: String,
    pub country_2: String,
}

/// Form input for `POST /legal-qa/ask`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalQaRequest {
    pub question: String,
}

/// Body for `POST /download/download`, which renders a question/answer pair as a PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfExportRequest {
    pub question: String,
    pub answer: String,
}

impl PdfExportRequest {
    /// Export payload for a generated NDA draft.
    pub fn for_nda(form: &NdaGenerateRequest, draft: &str) -> Self {
        Self {
            question: format!("NDA Generation for {} and {}", form.party_1, form.party_2),
            answer: draft.to_string(),
        }
    }

    /// Export payload for a clause explanation.
    ///
    /// The title quotes at most the first 100 characters of the clause.
    pub fn for_explanation(form: &ClauseExplainRequest, result: &ExplainResponse) -> Self {
        let preview: String = form.clause.chars().take(EXPORT_CLAUSE_PREVIEW).collect();
        Self {
            question: format!("Clause Analysis: {preview}..."),
            answer: format!(
                "Explanation: {}\n\nLegal Domain: {}",
                result.explanation, result.legal_domain
            ),
        }
    }

    /// Export payload for a cross-border clause comparison.
    pub fn for_comparison(form: &ClauseCompareRequest, result: &CompareResponse) -> Self {
        Self {
            question: format!(
                "Cross-border comparison of {} between {} and {}",
                form.clause_type, form.country_1, form.country_2
            ),
            answer: format!(
                "{}: {}\n\n{}: {}\n\nKey Differences: {}",
                form.country_1,
                result.country_1_analysis,
                form.country_2,
                result.country_2_analysis,
                result.key_differences
            ),
        }
    }

    /// Export payload for a legal Q&A answer.
    pub fn for_answer(form: &LegalQaRequest, result: &LegalQaResponse) -> Self {
        Self {
            question: form.question.clone(),
            answer: result.answer.clone(),
        }
    }
}

// ── Responses ──

/// Result of NDA generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdaResponse {
    pub success: bool,
    pub nda_draft: String,
    /// Server path of the rendered `.docx`, e.g. `/api/nda/download/NDA_Acme_Globex.docx`.
    pub download_url: String,
    #[serde(default)]
    pub rag_enhanced: bool,
}

impl NdaResponse {
    /// Last path segment of `download_url`, or `nda.docx` when there is none.
    pub fn download_filename(&self) -> &str {
        self.download_url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NDA_FILENAME)
    }
}

/// Result of a clause explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub success: bool,
    pub explanation: String,
    pub legal_domain: String,
    #[serde(default)]
    pub rag_enhanced: bool,
}

/// Result of a cross-border clause comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub success: bool,
    pub country_1_analysis: String,
    pub country_2_analysis: String,
    pub key_differences: String,
    #[serde(default)]
    pub rag_enhanced: bool,
}

/// Answer to a free-text legal question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalQaResponse {
    pub success: bool,
    pub answer: String,
    pub sources_used: bool,
    /// Display label such as `"High"`.
    pub confidence: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub rag_enabled: bool,
    #[serde(default)]
    pub services: Vec<String>,
}
