//! Application-level error type shared by services.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors surfaced by application services.
///
/// The UI does not distinguish variants: any failure during a search shows
/// the generic "Error fetching monster details." message, and an index-load
/// failure is logged without any user-visible error.
#[derive(Clone, Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
