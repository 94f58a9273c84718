//! Compendium Port - object-safe boundary to the monster reference API.
//!
//! The composition root stores the adapter behind `Arc<dyn CompendiumPort>`,
//! so the trait stays object-safe: plain async methods, no generics.

use thiserror::Error;

use bestiary_domain::{MonsterDetail, MonsterSummary};

/// Errors produced at the API boundary.
///
/// The UI never branches on the variant; every failure collapses into one
/// generic user-visible message while the cause is logged.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the transport failed mid-flight.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompendiumPort: Send + Sync {
    /// Fetch the full monster collection. The API returns it as a single
    /// unpaginated page.
    async fn list_monsters(&self) -> Result<Vec<MonsterSummary>, ApiError>;

    /// Fetch a full detail record by its relative path.
    async fn monster_detail(&self, path: &str) -> Result<MonsterDetail, ApiError>;
}
