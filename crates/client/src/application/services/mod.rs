//! Application services
//!
//! Services implement the client's use cases and depend on port traits,
//! not concrete infrastructure implementations.

pub mod lookup_service;

pub use lookup_service::{LookupService, SearchOutcome};
