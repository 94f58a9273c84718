//! Lookup service - index loading and search resolution.
//!
//! `search` re-fetches the monster collection instead of reusing the index
//! loaded at startup; the two reads are independent and may observe
//! different remote data.

use std::sync::Arc;

use bestiary_domain::{find_exact, MonsterDetail, MonsterSummary};

use crate::application::error::ServiceError;
use crate::ports::outbound::CompendiumPort;

/// Result of resolving a search query.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty; nothing was fetched.
    EmptyQuery,
    /// No summary matched the query exactly.
    NotFound,
    /// The matched monster's full stat block.
    Found(MonsterDetail),
}

/// Service for loading the monster index and resolving searches.
pub struct LookupService {
    api: Arc<dyn CompendiumPort>,
}

impl LookupService {
    /// Create a new LookupService with the given API port
    pub fn new(api: Arc<dyn CompendiumPort>) -> Self {
        Self { api }
    }

    /// Fetch the monster collection that backs the autocomplete index.
    pub async fn load_index(&self) -> Result<Vec<MonsterSummary>, ServiceError> {
        Ok(self.api.list_monsters().await?)
    }

    /// Resolve `query` to an exact case-insensitive name match and fetch
    /// its stat block.
    ///
    /// The first exact match in API response order wins. A prefix match is
    /// not enough here; that path goes through the autocomplete dropdown.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, ServiceError> {
        if query.is_empty() {
            return Ok(SearchOutcome::EmptyQuery);
        }

        tracing::debug!(query, "resolving monster");

        let monsters = self.api.list_monsters().await?;
        let Some(matched) = find_exact(&monsters, query) else {
            return Ok(SearchOutcome::NotFound);
        };

        let detail = self.api.monster_detail(&matched.url).await?;
        Ok(SearchOutcome::Found(detail))
    }
}

impl Clone for LookupService {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::compendium_port::MockCompendiumPort;
    use crate::ports::outbound::ApiError;
    use bestiary_domain::{ArmorClassEntry, SpeedProfile};

    fn summary(name: &str, url: &str) -> MonsterSummary {
        MonsterSummary {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn goblin_detail() -> MonsterDetail {
        MonsterDetail {
            name: "Goblin".to_string(),
            size: "Small".to_string(),
            kind: "humanoid".to_string(),
            alignment: "neutral evil".to_string(),
            armor_class: vec![ArmorClassEntry {
                value: 15,
                kind: "natural armor".to_string(),
            }],
            hit_points: 7,
            hit_points_roll: "2d6".to_string(),
            speed: SpeedProfile {
                walk: Some("30 ft.".to_string()),
                ..SpeedProfile::default()
            },
            image: None,
        }
    }

    #[tokio::test]
    async fn empty_query_never_touches_the_api() {
        // No expectations are set: any port call would panic.
        let mock = MockCompendiumPort::new();
        let service = LookupService::new(Arc::new(mock));

        let outcome = service.search("").await.unwrap();
        assert_eq!(outcome, SearchOutcome::EmptyQuery);
    }

    #[tokio::test]
    async fn miss_takes_one_list_fetch_and_no_detail_fetch() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters()
            .times(1)
            .returning(|| Ok(vec![summary("Goblin", "/api/monsters/goblin")]));
        // expect_monster_detail is deliberately absent: a call would panic.
        let service = LookupService::new(Arc::new(mock));

        let outcome = service.search("orc").await.unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn prefix_query_does_not_resolve() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters()
            .times(1)
            .returning(|| Ok(vec![summary("Goblin", "/api/monsters/goblin")]));
        let service = LookupService::new(Arc::new(mock));

        let outcome = service.search("gobl").await.unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn exact_match_fetches_detail_via_matched_url() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters().times(1).returning(|| {
            Ok(vec![
                summary("Orc", "/api/monsters/orc"),
                summary("Goblin", "/api/monsters/goblin"),
            ])
        });
        mock.expect_monster_detail()
            .withf(|path| path == "/api/monsters/goblin")
            .times(1)
            .returning(|_| Ok(goblin_detail()));
        let service = LookupService::new(Arc::new(mock));

        let outcome = service.search("GOBLIN").await.unwrap();
        assert_eq!(outcome, SearchOutcome::Found(goblin_detail()));
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters()
            .times(1)
            .returning(|| Err(ApiError::RequestFailed("connection refused".to_string())));
        let service = LookupService::new(Arc::new(mock));

        assert!(service.search("goblin").await.is_err());
    }

    #[tokio::test]
    async fn detail_failure_propagates() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters()
            .times(1)
            .returning(|| Ok(vec![summary("Goblin", "/api/monsters/goblin")]));
        mock.expect_monster_detail().times(1).returning(|_| {
            Err(ApiError::Status {
                status: 500,
                message: "internal error".to_string(),
            })
        });
        let service = LookupService::new(Arc::new(mock));

        assert!(service.search("goblin").await.is_err());
    }

    #[tokio::test]
    async fn load_index_returns_summaries_in_api_order() {
        let mut mock = MockCompendiumPort::new();
        mock.expect_list_monsters().times(1).returning(|| {
            Ok(vec![
                summary("Orc", "/api/monsters/orc"),
                summary("Goblin", "/api/monsters/goblin"),
            ])
        });
        let service = LookupService::new(Arc::new(mock));

        let index = service.load_index().await.unwrap();
        let names: Vec<&str> = index.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Orc", "Goblin"]);
    }
}
