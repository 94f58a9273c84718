//! Unified Bestiary client crate.
//!
//! This crate contains UI, application logic, and infrastructure adapters
//! for the monster lookup client. Application services depend on the port
//! traits in `ports`, never on the concrete adapters in `infrastructure`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
