//! Lexora API access: health gating, offline fallbacks, and the HTTP client.

mod assistant;
pub mod error;
pub mod fallback;
pub mod health;

#[cfg(feature = "http")]
pub mod http;

pub use assistant::LegalAssistant;
pub use error::ApiError;
pub use health::{HealthGate, Reachability};

#[cfg(feature = "http")]
pub use http::{ApiClient, RequestOptions};
