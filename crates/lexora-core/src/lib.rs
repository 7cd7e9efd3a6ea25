pub mod config;
pub mod records;
pub mod validate;

pub use config::ClientConfig;
pub use records::{
    ClauseCompareRequest, ClauseExplainRequest, CompareResponse, ExplainResponse, HealthReport,
    LegalQaRequest, LegalQaResponse, NdaGenerateRequest, NdaResponse, PdfExportRequest,
};
pub use validate::{Validate, ValidationError};
