//! Result panel - the results container under the search bar.

use dioxus::prelude::*;

/// What the results container currently shows.
///
/// Message variants map to their literal display text; `Monster` carries
/// the rendered stat block fragment.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultView {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// Empty query at search time.
    Prompt,
    /// A search is in flight.
    Searching,
    /// No exact name match.
    NotFound,
    /// A fetch or decode failed; the cause is logged, not shown.
    Error,
    /// Rendered stat block markup.
    Monster(String),
}

impl ResultView {
    /// Literal message for the non-markup variants.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResultView::Idle | ResultView::Monster(_) => None,
            ResultView::Prompt => Some("Please enter a monster name."),
            ResultView::Searching => Some("Searching..."),
            ResultView::NotFound => Some("Monster not found."),
            ResultView::Error => Some("Error fetching monster details."),
        }
    }
}

/// Props for ResultPanel
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub view: ResultView,
}

/// The results container. The stat block fragment is injected as raw
/// markup so each write fully replaces the prior content.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    match &props.view {
        ResultView::Monster(markup) => rsx! {
            div { class: "monster-result", dangerous_inner_html: "{markup}" }
        },
        other => {
            let text = other.message().unwrap_or("");
            rsx! {
                div { class: "monster-result", "{text}" }
            }
        }
    }
}
