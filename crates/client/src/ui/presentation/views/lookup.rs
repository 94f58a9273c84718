//! Lookup view - the single page of the client.
//!
//! Wires the search field, autocomplete dropdown, and results container to
//! the lookup service. Handlers stay thin: matching lives in the domain
//! crate and rendering in `presentation::render`.

use dioxus::prelude::*;

use bestiary_domain::MonsterSummary;

use crate::application::services::SearchOutcome;
use crate::presentation::components::{ResultPanel, ResultView, SearchBar};
use crate::presentation::render::monster_markup;
use crate::presentation::services::{use_api_base_url, use_lookup_service};
use crate::presentation::state::CompendiumState;

#[component]
pub fn LookupView() -> Element {
    let lookup = use_lookup_service();
    let api_base = use_api_base_url();
    let mut compendium = use_context::<CompendiumState>();

    let mut query = use_signal(String::new);
    let mut suggestions: Signal<Vec<MonsterSummary>> = use_signal(Vec::new);
    let mut result = use_signal(ResultView::default);

    // Load the index once at startup. A failure here only degrades the
    // autocomplete to always-empty; no user-visible error.
    let load_service = lookup.clone();
    use_future(move || {
        let service = load_service.clone();
        async move {
            match service.load_index().await {
                Ok(monsters) => {
                    tracing::debug!(count = monsters.len(), "monster index loaded");
                    compendium.set_index(monsters);
                }
                Err(e) => {
                    tracing::error!("error fetching monsters: {e}");
                }
            }
        }
    });

    // Filter the cached index synchronously on every keystroke.
    let on_input = move |text: String| {
        suggestions.set(compendium.suggestions(&text));
        query.set(text);
    };

    // Picking a suggestion fills the field and closes the dropdown. It
    // does not trigger a search.
    let on_pick = move |name: String| {
        query.set(name);
        suggestions.set(Vec::new());
    };

    // Each click runs a fully independent search; a second click while one
    // is in flight races it, and the last completion wins.
    let on_search = {
        let search_service = lookup.clone();
        let api_base = api_base.clone();
        move |_: ()| {
            let service = search_service.clone();
            let api_base = api_base.clone();
            let text = query.read().to_lowercase();

            if text.is_empty() {
                result.set(ResultView::Prompt);
                return;
            }
            result.set(ResultView::Searching);

            spawn(async move {
                match service.search(&text).await {
                    Ok(SearchOutcome::Found(detail)) => {
                        result.set(ResultView::Monster(monster_markup(&detail, &api_base)));
                    }
                    Ok(SearchOutcome::NotFound) => {
                        result.set(ResultView::NotFound);
                    }
                    Ok(SearchOutcome::EmptyQuery) => {
                        result.set(ResultView::Prompt);
                    }
                    Err(e) => {
                        tracing::error!("error fetching monster details: {e}");
                        result.set(ResultView::Error);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "lookup",
            h1 { "Monster Lookup" }
            SearchBar {
                query: query.read().clone(),
                suggestions: suggestions.read().clone(),
                on_input,
                on_pick,
                on_search,
            }
            ResultPanel { view: result.read().clone() }
        }
    }
}
