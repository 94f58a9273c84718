//! Search bar with autocomplete dropdown
//!
//! The input filters the cached index on every keystroke. Picking a
//! suggestion only copies the exact name into the field; the search itself
//! runs from the button.

use dioxus::prelude::*;

use bestiary_domain::MonsterSummary;

/// Props for SearchBar
#[derive(Props, Clone, PartialEq)]
pub struct SearchBarProps {
    /// Current field text.
    pub query: String,
    /// Prefix matches for the current text, in index order.
    pub suggestions: Vec<MonsterSummary>,
    /// Handler for each input-change event (receives the new field text).
    pub on_input: EventHandler<String>,
    /// Handler when a suggestion row is clicked (receives the exact name).
    pub on_pick: EventHandler<String>,
    /// Handler for the search button.
    pub on_search: EventHandler<()>,
}

/// Search input, trigger button, and the suggestion list below them.
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let on_input = props.on_input;
    let on_pick = props.on_pick;
    let on_search = props.on_search;

    rsx! {
        div { class: "search-bar",
            input {
                class: "monster-input",
                placeholder: "Enter a monster name",
                value: "{props.query}",
                oninput: move |e| on_input.call(e.value()),
            }
            button {
                class: "search-button",
                onclick: move |_| on_search.call(()),
                "Search"
            }
        }

        div { class: "autocomplete-list",
            for (idx, monster) in props.suggestions.iter().enumerate() {
                {
                    let name = monster.name.clone();
                    rsx! {
                        div {
                            key: "{idx}",
                            class: "autocomplete-item",
                            onclick: move |_| on_pick.call(name.clone()),
                            "{monster.name}"
                        }
                    }
                }
            }
        }
    }
}
