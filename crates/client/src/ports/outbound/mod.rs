//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to talk to the monster
//! reference API without depending on concrete implementations.

pub mod compendium_port;

pub use compendium_port::{ApiError, CompendiumPort};
