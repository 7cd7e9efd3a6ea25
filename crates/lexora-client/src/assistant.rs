use async_trait::async_trait;
use lexora_core::{
    ClauseCompareRequest, ClauseExplainRequest, CompareResponse, ExplainResponse, LegalQaRequest,
    LegalQaResponse, NdaGenerateRequest, NdaResponse, PdfExportRequest,
};

use crate::error::ApiError;

/// The operations the Lexora front end needs from the API.
///
/// [`ApiClient`](crate::ApiClient) is the production implementation; page
/// controllers only depend on this trait.
#[async_trait]
pub trait LegalAssistant: Send + Sync {
    /// Draft an NDA. Falls back to a local template when the API is unreachable.
    async fn generate_nda(&self, req: &NdaGenerateRequest) -> Result<NdaResponse, ApiError>;

    /// Explain a clause. Falls back to keyword classification when the API is unreachable.
    async fn explain_clause(&self, req: &ClauseExplainRequest)
    -> Result<ExplainResponse, ApiError>;

    /// Compare a clause type across two countries. Falls back to a generic
    /// comparison when the API is unreachable.
    async fn compare_clauses(
        &self,
        req: &ClauseCompareRequest,
    ) -> Result<CompareResponse, ApiError>;

    async fn ask_question(&self, req: &LegalQaRequest) -> Result<LegalQaResponse, ApiError>;

    /// Render a question/answer pair as PDF bytes. Requires the API.
    async fn export_pdf(&self, req: &PdfExportRequest) -> Result<Vec<u8>, ApiError>;

    /// Fetch a generated NDA document by filename. Requires the API.
    async fn download_nda(&self, filename: &str) -> Result<Vec<u8>, ApiError>;
}
