use dioxus::prelude::*;

pub mod presentation;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Session-owned state must be created inside an active Dioxus runtime.
    // Services are provided by the composition root (see `src/main.rs`).
    use_context_provider(presentation::state::CompendiumState::new);

    rsx! {
        presentation::views::LookupView {}
    }
}
