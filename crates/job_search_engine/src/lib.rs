//! Job search engine: catalog transport and effect execution.
mod auth;
mod catalog;
mod orchestrator;
mod types;

pub use auth::{AuthProvider, Credential, StaticTokenProvider};
pub use catalog::{
    catalog_url, CatalogClient, CatalogSettings, ReqwestCatalogClient, DEFAULT_BASE_URL,
};
pub use orchestrator::{RequestOrchestrator, ResponseDisposition};
pub use types::{CatalogBody, EngineEvent, FailureKind, FetchError, FetchMetadata};
