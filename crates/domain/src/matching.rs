//! Name-matching rules for the autocomplete and search paths.
//!
//! Both comparisons are case-insensitive. Autocomplete uses a prefix match;
//! search resolution requires full-string equality.

use crate::monster::MonsterSummary;

/// Filter `index` to the summaries whose name starts with `query`,
/// ignoring case and preserving index order.
///
/// An empty query matches nothing.
pub fn prefix_filter(index: &[MonsterSummary], query: &str) -> Vec<MonsterSummary> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    index
        .iter()
        .filter(|monster| monster.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect()
}

/// Resolve `query` to the first summary whose name equals it, ignoring case.
///
/// First match in `index` order wins if duplicates exist.
pub fn find_exact<'a>(index: &'a [MonsterSummary], query: &str) -> Option<&'a MonsterSummary> {
    let query = query.to_lowercase();
    index
        .iter()
        .find(|monster| monster.name.to_lowercase() == query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> MonsterSummary {
        MonsterSummary {
            name: name.to_string(),
            url: format!("/api/monsters/{}", name.to_lowercase().replace(' ', "-")),
        }
    }

    fn index() -> Vec<MonsterSummary> {
        vec![
            summary("Goblin"),
            summary("Gnoll"),
            summary("Giant Rat"),
            summary("Orc"),
        ]
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        assert!(prefix_filter(&index(), "").is_empty());
    }

    #[test]
    fn prefix_filter_is_case_insensitive_and_preserves_index_order() {
        let matches = prefix_filter(&index(), "g");
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Goblin", "Gnoll", "Giant Rat"]);

        let matches = prefix_filter(&index(), "GOB");
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Goblin"]);
    }

    #[test]
    fn prefix_filter_does_not_match_inner_substrings() {
        assert!(prefix_filter(&index(), "oblin").is_empty());
    }

    #[test]
    fn find_exact_requires_full_string_equality() {
        // A prefix is not enough for resolution.
        assert!(find_exact(&index(), "gobl").is_none());
        assert_eq!(
            find_exact(&index(), "goblin").map(|m| m.name.as_str()),
            Some("Goblin")
        );
        assert_eq!(
            find_exact(&index(), "GOBLIN").map(|m| m.name.as_str()),
            Some("Goblin")
        );
    }

    #[test]
    fn find_exact_first_match_wins_on_duplicates() {
        let dupes = vec![
            MonsterSummary {
                name: "Goblin".to_string(),
                url: "/api/monsters/goblin-a".to_string(),
            },
            MonsterSummary {
                name: "goblin".to_string(),
                url: "/api/monsters/goblin-b".to_string(),
            },
        ];
        assert_eq!(
            find_exact(&dupes, "goblin").map(|m| m.url.as_str()),
            Some("/api/monsters/goblin-a")
        );
    }
}
