use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PlayerResult;
use crate::models::{Page, PageRequest, Player};

/// Repository trait for Player persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Every player, in identifier order
    async fn find_all(&self) -> PlayerResult<Vec<Player>>;

    /// One page of all players
    async fn find_all_paged(&self, request: &PageRequest) -> PlayerResult<Page<Player>>;

    /// Get a player by ID
    async fn find_by_id(&self, player_id: &str) -> PlayerResult<Option<Player>>;

    /// Players whose last name contains `fragment`, ignoring case
    async fn find_by_last_name_containing(
        &self,
        fragment: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>>;

    /// Players born in exactly `year`
    async fn find_by_birth_year(
        &self,
        year: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>>;

    /// Exact, case-insensitive last name match
    async fn find_by_last_name(&self, last_name: &str) -> PlayerResult<Vec<Player>>;

    /// Exact, case-insensitive first name match
    async fn find_by_first_name(&self, first_name: &str) -> PlayerResult<Vec<Player>>;

    /// First player matching both names, ignoring case
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> PlayerResult<Option<Player>>;

    /// Exact, case-insensitive birth country match
    async fn find_by_birth_country(&self, country: &str) -> PlayerResult<Vec<Player>>;

    async fn find_by_bats(&self, bats: &str) -> PlayerResult<Vec<Player>>;

    async fn find_by_throw_stats(&self, throw_stats: &str) -> PlayerResult<Vec<Player>>;

    async fn find_by_retro_id(&self, retro_id: &str) -> PlayerResult<Option<Player>>;

    async fn find_by_bbref_id(&self, bbref_id: &str) -> PlayerResult<Option<Player>>;

    /// Insert the player, or overwrite every column if the ID already exists
    async fn save(&self, player: Player) -> PlayerResult<Player>;

    /// Delete a player by ID; `false` when no row matched
    async fn delete_by_id(&self, player_id: &str) -> PlayerResult<bool>;

    async fn exists_by_id(&self, player_id: &str) -> PlayerResult<bool>;
}

/// In-memory implementation of PlayerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<BTreeMap<String, Player>>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `players`
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        let map = players
            .into_iter()
            .map(|p| (p.player_id.clone(), p))
            .collect();
        Self {
            players: Arc::new(RwLock::new(map)),
        }
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Player>
    where
        F: Fn(&Player) -> bool,
    {
        let players = self.players.read().await;
        players.values().filter(|p| predicate(p)).cloned().collect()
    }
}

fn eq_ignore_case(value: &Option<String>, expected: &str) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.to_lowercase() == expected.to_lowercase())
}

/// Sort (identifier order is the fallback) and slice one page
fn paginate(mut players: Vec<Player>, request: &PageRequest) -> Page<Player> {
    if let Some(sort) = request.sort {
        players.sort_by(|a, b| {
            sort.compare(a, b)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
    }

    let total = players.len() as u64;
    let content = players
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.size as usize)
        .collect();

    Page::new(content, total, request)
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_all(&self) -> PlayerResult<Vec<Player>> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }

    async fn find_all_paged(&self, request: &PageRequest) -> PlayerResult<Page<Player>> {
        let players = self.find_all().await?;
        Ok(paginate(players, request))
    }

    async fn find_by_id(&self, player_id: &str) -> PlayerResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.get(player_id).cloned())
    }

    async fn find_by_last_name_containing(
        &self,
        fragment: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        let needle = fragment.to_lowercase();
        let players = self
            .filtered(|p| {
                p.last_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .await;
        Ok(paginate(players, request))
    }

    async fn find_by_birth_year(
        &self,
        year: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        let players = self
            .filtered(|p| p.birth_year.as_deref() == Some(year))
            .await;
        Ok(paginate(players, request))
    }

    async fn find_by_last_name(&self, last_name: &str) -> PlayerResult<Vec<Player>> {
        Ok(self
            .filtered(|p| eq_ignore_case(&p.last_name, last_name))
            .await)
    }

    async fn find_by_first_name(&self, first_name: &str) -> PlayerResult<Vec<Player>> {
        Ok(self
            .filtered(|p| eq_ignore_case(&p.first_name, first_name))
            .await)
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> PlayerResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .find(|p| {
                eq_ignore_case(&p.first_name, first_name) && eq_ignore_case(&p.last_name, last_name)
            })
            .cloned())
    }

    async fn find_by_birth_country(&self, country: &str) -> PlayerResult<Vec<Player>> {
        Ok(self
            .filtered(|p| eq_ignore_case(&p.birth_country, country))
            .await)
    }

    async fn find_by_bats(&self, bats: &str) -> PlayerResult<Vec<Player>> {
        Ok(self.filtered(|p| p.bats.as_deref() == Some(bats)).await)
    }

    async fn find_by_throw_stats(&self, throw_stats: &str) -> PlayerResult<Vec<Player>> {
        Ok(self
            .filtered(|p| p.throw_stats.as_deref() == Some(throw_stats))
            .await)
    }

    async fn find_by_retro_id(&self, retro_id: &str) -> PlayerResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .find(|p| p.retro_id.as_deref() == Some(retro_id))
            .cloned())
    }

    async fn find_by_bbref_id(&self, bbref_id: &str) -> PlayerResult<Option<Player>> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .find(|p| p.bbref_id.as_deref() == Some(bbref_id))
            .cloned())
    }

    async fn save(&self, player: Player) -> PlayerResult<Player> {
        let mut players = self.players.write().await;
        players.insert(player.player_id.clone(), player.clone());

        tracing::info!(player_id = %player.player_id, "Saved player");
        Ok(player)
    }

    async fn delete_by_id(&self, player_id: &str) -> PlayerResult<bool> {
        let mut players = self.players.write().await;

        if players.remove(player_id).is_some() {
            tracing::info!(player_id = %player_id, "Deleted player");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_id(&self, player_id: &str) -> PlayerResult<bool> {
        let players = self.players.read().await;
        Ok(players.contains_key(player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerSortField, SortSpec};

    fn player(id: &str, first: &str, last: &str, year: &str) -> Player {
        Player {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            birth_year: Some(year.into()),
            ..Player::new(id)
        }
    }

    fn repo() -> InMemoryPlayerRepository {
        InMemoryPlayerRepository::with_players([
            player("doejo01", "John", "Doe", "1980"),
            player("donalja01", "Jason", "Donaldson", "1985"),
            player("smithjo01", "John", "Smith", "1980"),
            player("aaronha01", "Hank", "Aaron", "1934"),
        ])
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let ids: Vec<_> = repo()
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.player_id)
            .collect();
        assert_eq!(ids, ["aaronha01", "doejo01", "donalja01", "smithjo01"]);
    }

    #[tokio::test]
    async fn test_last_name_fragment_is_case_insensitive() {
        let page = repo()
            .find_by_last_name_containing("DO", &PageRequest::default())
            .await
            .unwrap();

        let names: Vec<_> = page
            .content
            .iter()
            .filter_map(|p| p.last_name.as_deref())
            .collect();
        assert_eq!(names, ["Doe", "Donaldson"]);
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_birth_year_is_exact() {
        let page = repo()
            .find_by_birth_year("1980", &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 2);

        let page = repo()
            .find_by_birth_year("198", &PageRequest::default())
            .await
            .unwrap();
        assert!(page.content.is_empty());
    }

    #[tokio::test]
    async fn test_pages_are_disjoint_and_cover_collection() {
        let repo = repo();
        let first = repo.find_all_paged(&PageRequest::new(0, 3)).await.unwrap();
        let second = repo.find_all_paged(&PageRequest::new(1, 3)).await.unwrap();

        assert_eq!(first.content.len(), 3);
        assert_eq!(second.content.len(), 1);
        assert_eq!(first.total_pages, 2);
        assert!(
            second
                .content
                .iter()
                .all(|p| !first.content.contains(p))
        );
    }

    #[tokio::test]
    async fn test_paged_sort_descending() {
        let request = PageRequest::new(0, 10).with_sort(SortSpec::desc(PlayerSortField::LastName));
        let page = repo().find_all_paged(&request).await.unwrap();

        let names: Vec<_> = page
            .content
            .iter()
            .filter_map(|p| p.last_name.as_deref())
            .collect();
        assert_eq!(names, ["Smith", "Donaldson", "Doe", "Aaron"]);
    }

    #[tokio::test]
    async fn test_exact_lookups() {
        let repo = repo();

        assert_eq!(repo.find_by_last_name("doe").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_first_name("JOHN").await.unwrap().len(), 2);
        assert_eq!(
            repo.find_by_full_name("john", "smith")
                .await
                .unwrap()
                .map(|p| p.player_id),
            Some("smithjo01".to_string())
        );
        assert!(repo.find_by_full_name("john", "aaron").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cross_reference_lookups() {
        let repo = InMemoryPlayerRepository::new();
        repo.save(Player {
            retro_id: Some("aaroh101".into()),
            bbref_id: Some("aaronha01".into()),
            bats: Some("R".into()),
            throw_stats: Some("R".into()),
            birth_country: Some("USA".into()),
            ..Player::new("aaronha01")
        })
        .await
        .unwrap();

        assert!(repo.find_by_retro_id("aaroh101").await.unwrap().is_some());
        assert!(repo.find_by_bbref_id("aaronha01").await.unwrap().is_some());
        assert_eq!(repo.find_by_bats("R").await.unwrap().len(), 1);
        assert!(repo.find_by_bats("r").await.unwrap().is_empty());
        assert_eq!(repo.find_by_throw_stats("R").await.unwrap().len(), 1);
        assert_eq!(repo.find_by_birth_country("usa").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = repo();
        repo.save(Player::new("doejo01")).await.unwrap();

        let stored = repo.find_by_id("doejo01").await.unwrap().unwrap();
        assert_eq!(stored.last_name, None);
        assert_eq!(repo.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = repo();
        assert!(repo.delete_by_id("doejo01").await.unwrap());
        assert!(!repo.delete_by_id("doejo01").await.unwrap());
        assert!(!repo.exists_by_id("doejo01").await.unwrap());
    }
}
