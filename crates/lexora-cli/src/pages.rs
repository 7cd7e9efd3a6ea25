//! Page controllers: one per feature.
//!
//! A page owns its form, the last successful result, and the last error as
//! display text. Actions never fail outward; the caller learns what happened
//! from the returned [`Submission`] and may simply retry.

use std::path::Path;

use chrono::Utc;
use lexora_client::{ApiError, LegalAssistant};
use lexora_core::{
    ClauseCompareRequest, ClauseExplainRequest, CompareResponse, ExplainResponse, LegalQaRequest,
    LegalQaResponse, NdaGenerateRequest, NdaResponse, PdfExportRequest, Validate, ValidationError,
};
use tracing::{error, warn};

use crate::download::save_download;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A required field is empty; nothing was sent.
    Blocked(ValidationError),
    /// Nothing to act on yet (e.g. export before any result).
    Skipped,
    Completed,
    /// The call failed; the page holds the message.
    Failed,
}

#[derive(Debug)]
struct PageState<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> PageState<T> {
    fn new() -> Self {
        Self {
            result: None,
            error: None,
        }
    }

    fn settle(&mut self, action: &str, outcome: Result<T, ApiError>) -> Submission {
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
                Submission::Completed
            }
            Err(e) => self.fail(action, e),
        }
    }

    fn save(
        &mut self,
        action: &str,
        outcome: Result<Vec<u8>, ApiError>,
        filename: &str,
        dir: Option<&Path>,
    ) -> Submission {
        match outcome {
            Ok(bytes) => {
                save_download(&bytes, filename, dir);
                self.error = None;
                Submission::Completed
            }
            Err(e) => self.fail(action, e),
        }
    }

    fn fail(&mut self, action: &str, e: ApiError) -> Submission {
        if e.is_unreachable() {
            warn!(action, error = %e, "lexora api not reachable");
        } else {
            error!(action, error = %e, "page action failed");
        }
        self.error = Some(e.to_string());
        Submission::Failed
    }
}

fn pdf_filename(prefix: &str) -> String {
    format!("{prefix}_{}.pdf", Utc::now().timestamp_millis())
}

// ── NDA generator ──

#[derive(Debug)]
pub struct NdaPage {
    pub form: NdaGenerateRequest,
    state: PageState<NdaResponse>,
}

impl NdaPage {
    pub fn new(form: NdaGenerateRequest) -> Self {
        Self {
            form,
            state: PageState::new(),
        }
    }

    pub fn result(&self) -> Option<&NdaResponse> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub async fn submit<A: LegalAssistant + ?Sized>(&mut self, api: &A) -> Submission {
        if let Err(e) = self.form.validate() {
            return Submission::Blocked(e);
        }
        let outcome = api.generate_nda(&self.form).await;
        self.state.settle("generate NDA", outcome)
    }

    /// Fetch the rendered `.docx` named by the result's download URL.
    pub async fn download_document<A: LegalAssistant + ?Sized>(
        &mut self,
        api: &A,
        dir: Option<&Path>,
    ) -> Submission {
        let Some(filename) = self.result().map(|r| r.download_filename().to_string()) else {
            return Submission::Skipped;
        };
        let outcome = api.download_nda(&filename).await;
        self.state.save("download NDA", outcome, &filename, dir)
    }

    pub async fn export_pdf<A: LegalAssistant + ?Sized>(
        &mut self,
        api: &A,
        dir: Option<&Path>,
    ) -> Submission {
        let Some(export) = self
            .result()
            .map(|r| PdfExportRequest::for_nda(&self.form, &r.nda_draft))
        else {
            return Submission::Skipped;
        };
        let outcome = api.export_pdf(&export).await;
        self.state.save("export NDA PDF", outcome, &pdf_filename("NDA"), dir)
    }
}

// ── Clause explainer ──

#[derive(Debug)]
pub struct ExplainPage {
    pub form: ClauseExplainRequest,
    state: PageState<ExplainResponse>,
}

impl ExplainPage {
    pub fn new(form: ClauseExplainRequest) -> Self {
        Self {
            form,
            state: PageState::new(),
        }
    }

    pub fn result(&self) -> Option<&ExplainResponse> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub async fn submit<A: LegalAssistant + ?Sized>(&mut self, api: &A) -> Submission {
        if let Err(e) = self.form.validate() {
            return Submission::Blocked(e);
        }
        let outcome = api.explain_clause(&self.form).await;
        self.state.settle("explain clause", outcome)
    }

    pub async fn export_pdf<A: LegalAssistant + ?Sized>(
        &mut self,
        api: &A,
        dir: Option<&Path>,
    ) -> Submission {
        let Some(export) = self
            .result()
            .map(|r| PdfExportRequest::for_explanation(&self.form, r))
        else {
            return Submission::Skipped;
        };
        let outcome = api.export_pdf(&export).await;
        self.state.save(
            "export clause analysis PDF",
            outcome,
            &pdf_filename("Clause_Analysis"),
            dir,
        )
    }
}

// ── Clause comparator ──

#[derive(Debug)]
pub struct ComparePage {
    pub form: ClauseCompareRequest,
    state: PageState<CompareResponse>,
}

impl ComparePage {
    pub fn new(form: ClauseCompareRequest) -> Self {
        Self {
            form,
            state: PageState::new(),
        }
    }

    pub fn result(&self) -> Option<&CompareResponse> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub async fn submit<A: LegalAssistant + ?Sized>(&mut self, api: &A) -> Submission {
        if let Err(e) = self.form.validate() {
            return Submission::Blocked(e);
        }
        let outcome = api.compare_clauses(&self.form).await;
        self.state.settle("compare clauses", outcome)
    }

    pub async fn export_pdf<A: LegalAssistant + ?Sized>(
        &mut self,
        api: &A,
        dir: Option<&Path>,
    ) -> Submission {
        let Some(export) = self
            .result()
            .map(|r| PdfExportRequest::for_comparison(&self.form, r))
        else {
            return Submission::Skipped;
        };
        let outcome = api.export_pdf(&export).await;
        self.state.save(
            "export comparison PDF",
            outcome,
            &pdf_filename("Clause_Comparison"),
            dir,
        )
    }
}

// ── Legal Q&A ──

#[derive(Debug)]
pub struct QaPage {
    pub form: LegalQaRequest,
    state: PageState<LegalQaResponse>,
}

impl QaPage {
    pub fn new(form: LegalQaRequest) -> Self {
        Self {
            form,
            state: PageState::new(),
        }
    }

    pub fn result(&self) -> Option<&LegalQaResponse> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub async fn submit<A: LegalAssistant + ?Sized>(&mut self, api: &A) -> Submission {
        if let Err(e) = self.form.validate() {
            return Submission::Blocked(e);
        }
        let outcome = api.ask_question(&self.form).await;
        self.state.settle("ask question", outcome)
    }

    pub async fn export_pdf<A: LegalAssistant + ?Sized>(
        &mut self,
        api: &A,
        dir: Option<&Path>,
    ) -> Submission {
        let Some(export) = self
            .result()
            .map(|r| PdfExportRequest::for_answer(&self.form, r))
        else {
            return Submission::Skipped;
        };
        let outcome = api.export_pdf(&export).await;
        self.state.save("export answer PDF", outcome, &pdf_filename("Legal_QA"), dir)
    }
}
