//! Infrastructure adapters for the client.

pub mod http_client;

pub use http_client::Dnd5eApiClient;
