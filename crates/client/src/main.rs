//! Bestiary - unified composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bestiary_client::infrastructure::http_client::Dnd5eApiClient;
use bestiary_client::ports::outbound::CompendiumPort;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestiary_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bestiary");

    // HTTP
    let api_client = Dnd5eApiClient::from_env();
    let api_base_url = api_client.base_url().to_string();
    let api: Arc<dyn CompendiumPort> = Arc::new(api_client);

    let services = bestiary_client::presentation::Services::new(api, api_base_url);

    let css = load_client_css();
    let head = format!("<style>{}</style>", css);
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(services)
        .launch(bestiary_client::app);
}

fn load_client_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/client.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
