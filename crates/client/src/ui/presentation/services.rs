//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components use
//! `use_context` to access services without depending on infrastructure
//! implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::LookupService;
use crate::ports::outbound::CompendiumPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub lookup: Arc<LookupService>,
    /// Base origin used to resolve relative image paths in detail records.
    pub api_base_url: String,
}

impl Services {
    /// Create all services with the given API port
    pub fn new(api: Arc<dyn CompendiumPort>, api_base_url: impl Into<String>) -> Self {
        Self {
            lookup: Arc::new(LookupService::new(api)),
            api_base_url: api_base_url.into(),
        }
    }
}

/// Hook to access the LookupService from context
pub fn use_lookup_service() -> Arc<LookupService> {
    let services = use_context::<Services>();
    services.lookup.clone()
}

/// Hook to access the API base origin from context
pub fn use_api_base_url() -> String {
    use_context::<Services>().api_base_url
}
