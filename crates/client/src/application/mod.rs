//! Application layer - use cases over the outbound ports.

pub mod error;
pub mod services;

pub use error::ServiceError;
pub use services::{LookupService, SearchOutcome};
