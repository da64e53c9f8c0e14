use std::sync::Arc;
use validator::Validate;

use crate::error::{PlayerError, PlayerResult};
use crate::latency::{LatencySimulator, RandomLatency};
use crate::models::{CreatePlayer, Page, PageRequest, Player, Players, UpdatePlayer};
use crate::repository::PlayerRepository;

/// Service layer for Player business logic
pub struct PlayerService<R: PlayerRepository> {
    repository: Arc<R>,
    latency: Arc<dyn LatencySimulator>,
}

impl<R: PlayerRepository> Clone for PlayerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            latency: Arc::clone(&self.latency),
        }
    }
}

impl<R: PlayerRepository> PlayerService<R> {
    /// Service with the default random lookup delay (up to 2 seconds)
    pub fn new(repository: R) -> Self {
        Self::with_latency(repository, RandomLatency::default())
    }

    pub fn with_latency(repository: R, latency: impl LatencySimulator + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
            latency: Arc::new(latency),
        }
    }

    /// Every player, unpaged
    pub async fn list_all(&self) -> PlayerResult<Players> {
        let players = self.repository.find_all().await?;
        Ok(Players { players })
    }

    pub async fn list_paged(&self, request: &PageRequest) -> PlayerResult<Page<Player>> {
        self.repository.find_all_paged(request).await
    }

    /// Case-insensitive substring search on the last name
    pub async fn search_by_last_name(
        &self,
        fragment: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        self.repository
            .find_by_last_name_containing(fragment, request)
            .await
    }

    pub async fn filter_by_birth_year(
        &self,
        year: &str,
        request: &PageRequest,
    ) -> PlayerResult<Page<Player>> {
        self.repository.find_by_birth_year(year, request).await
    }

    /// Look up a player, then wait out the simulated latency.
    ///
    /// Only a missing row yields `None`; repository failures propagate.
    pub async fn get_by_id(&self, player_id: &str) -> PlayerResult<Option<Player>> {
        let player = self.repository.find_by_id(player_id).await?;

        let delay = self.latency.next_delay();
        if !delay.is_zero() {
            tracing::debug!(
                player_id = %player_id,
                delay_ms = delay.as_millis() as u64,
                "Simulating lookup latency"
            );
            tokio::time::sleep(delay).await;
        }

        Ok(player)
    }

    /// Insert a player, overwriting any existing one with the same ID
    pub async fn create(&self, input: CreatePlayer) -> PlayerResult<Player> {
        input
            .validate()
            .map_err(|e| PlayerError::Validation(e.to_string()))?;

        self.repository.save(input.into()).await
    }

    /// Replace every attribute of an existing player. The path ID wins over
    /// any ID in the body. `None` when the player does not exist.
    pub async fn replace(
        &self,
        player_id: &str,
        replacement: UpdatePlayer,
    ) -> PlayerResult<Option<Player>> {
        if !self.repository.exists_by_id(player_id).await? {
            return Ok(None);
        }

        let player = Player::replaced(player_id.to_string(), replacement);
        self.repository.save(player).await.map(Some)
    }

    /// Overwrite only the attributes present in `patch`.
    /// `None` when the player does not exist.
    pub async fn patch(&self, player_id: &str, patch: UpdatePlayer) -> PlayerResult<Option<Player>> {
        let Some(mut player) = self.repository.find_by_id(player_id).await? else {
            return Ok(None);
        };

        player.apply_patch(patch);
        self.repository.save(player).await.map(Some)
    }

    /// `true` if a player was deleted, `false` if none existed
    pub async fn delete(&self, player_id: &str) -> PlayerResult<bool> {
        self.repository.delete_by_id(player_id).await
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> PlayerResult<Vec<Player>> {
        self.repository.find_by_last_name(last_name).await
    }

    pub async fn find_by_first_name(&self, first_name: &str) -> PlayerResult<Vec<Player>> {
        self.repository.find_by_first_name(first_name).await
    }

    pub async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> PlayerResult<Option<Player>> {
        self.repository
            .find_by_full_name(first_name, last_name)
            .await
    }

    pub async fn find_by_birth_country(&self, country: &str) -> PlayerResult<Vec<Player>> {
        self.repository.find_by_birth_country(country).await
    }

    pub async fn find_by_bats(&self, bats: &str) -> PlayerResult<Vec<Player>> {
        self.repository.find_by_bats(bats).await
    }

    pub async fn find_by_throw_stats(&self, throw_stats: &str) -> PlayerResult<Vec<Player>> {
        self.repository.find_by_throw_stats(throw_stats).await
    }

    pub async fn find_by_retro_id(&self, retro_id: &str) -> PlayerResult<Option<Player>> {
        self.repository.find_by_retro_id(retro_id).await
    }

    pub async fn find_by_bbref_id(&self, bbref_id: &str) -> PlayerResult<Option<Player>> {
        self.repository.find_by_bbref_id(bbref_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoLatency;
    use crate::repository::{InMemoryPlayerRepository, MockPlayerRepository};
    use mockall::predicate::eq;
    use sea_orm::DbErr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    fn service() -> PlayerService<InMemoryPlayerRepository> {
        PlayerService::with_latency(InMemoryPlayerRepository::new(), NoLatency)
    }

    fn create_input(id: &str) -> CreatePlayer {
        CreatePlayer {
            player_id: id.into(),
            first_name: Some("Hank".into()),
            last_name: Some("Aaron".into()),
            birth_year: Some("1934".into()),
            ..Default::default()
        }
    }

    struct CountingLatency {
        calls: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl LatencySimulator for CountingLatency {
        fn next_delay(&self) -> Duration {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.delay
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_player() {
        let service = service();
        let created = service.create(create_input("aaronha01")).await.unwrap();

        let fetched = service.get_by_id("aaronha01").await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let result = service().create(create_input("ab")).await;
        assert!(matches!(result, Err(PlayerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_overwrites_existing() {
        let service = service();
        service.create(create_input("aaronha01")).await.unwrap();
        service
            .create(CreatePlayer {
                player_id: "aaronha01".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let stored = service.get_by_id("aaronha01").await.unwrap().unwrap();
        assert_eq!(stored.last_name, None);
        assert_eq!(service.list_all().await.unwrap().players.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_stores_replacement_under_path_id() {
        let service = service();
        service.create(create_input("aaronha01")).await.unwrap();

        let replaced = service
            .replace(
                "aaronha01",
                UpdatePlayer {
                    player_id: Some("someoneelse".into()),
                    first_name: Some("Henry".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replaced.player_id, "aaronha01");
        assert_eq!(replaced.first_name.as_deref(), Some("Henry"));
        assert_eq!(replaced.last_name, None);
        assert!(service.get_by_id("someoneelse").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_missing_returns_none() {
        let result = service()
            .replace("nobody01", UpdatePlayer::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_player_unchanged() {
        let service = service();
        let created = service.create(create_input("aaronha01")).await.unwrap();

        let patched = service
            .patch("aaronha01", UpdatePlayer::default())
            .await
            .unwrap();
        assert_eq!(patched, Some(created));
    }

    #[tokio::test]
    async fn test_patch_changes_only_given_field() {
        let service = service();
        service.create(create_input("aaronha01")).await.unwrap();

        let patched = service
            .patch(
                "aaronha01",
                UpdatePlayer {
                    bats: Some("R".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.bats.as_deref(), Some("R"));
        assert_eq!(patched.last_name.as_deref(), Some("Aaron"));
        assert_eq!(patched.first_name.as_deref(), Some("Hank"));
    }

    #[tokio::test]
    async fn test_patch_missing_returns_none() {
        let result = service()
            .patch("nobody01", UpdatePlayer::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let service = service();
        service.create(create_input("aaronha01")).await.unwrap();

        assert!(service.delete("aaronha01").await.unwrap());
        assert!(service.get_by_id("aaronha01").await.unwrap().is_none());
        assert!(!service.delete("aaronha01").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id_applies_latency() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = PlayerService::with_latency(
            InMemoryPlayerRepository::new(),
            CountingLatency {
                calls: Arc::clone(&calls),
                delay: Duration::from_millis(30),
            },
        );

        let started = Instant::now();
        let result = service.get_by_id("nobody01").await.unwrap();

        assert!(result.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_get_by_id_propagates_repository_error() {
        let mut mock_repo = MockPlayerRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq("aaronha01"))
            .returning(|_| {
                Err(PlayerError::Database(DbErr::Custom(
                    "connection lost".into(),
                )))
            });

        let service = PlayerService::with_latency(mock_repo, NoLatency);
        let result = service.get_by_id("aaronha01").await;

        assert!(matches!(result, Err(PlayerError::Database(_))));
    }

    #[tokio::test]
    async fn test_replace_does_not_save_when_missing() {
        let mut mock_repo = MockPlayerRepository::new();
        mock_repo
            .expect_exists_by_id()
            .with(eq("nobody01"))
            .returning(|_| Ok(false));
        mock_repo.expect_save().never();

        let service = PlayerService::with_latency(mock_repo, NoLatency);
        let result = service
            .replace("nobody01", UpdatePlayer::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_delegates_with_page_request() {
        let request = PageRequest::new(2, 5);
        let mut mock_repo = MockPlayerRepository::new();
        mock_repo
            .expect_find_by_last_name_containing()
            .withf(move |fragment, req| fragment == "do" && *req == request)
            .times(1)
            .returning(|_, req| Ok(Page::new(vec![], 0, req)));

        let service = PlayerService::with_latency(mock_repo, NoLatency);
        let page = service.search_by_last_name("do", &request).await.unwrap();

        assert_eq!(page.number, 2);
        assert_eq!(page.size, 5);
    }

    #[tokio::test]
    async fn test_search_by_last_name_matches_fragment() {
        let service = service();
        for (id, last) in [("doejo01", "Doe"), ("donalja01", "Donaldson"), ("smithjo01", "Smith")] {
            service
                .create(CreatePlayer {
                    player_id: id.into(),
                    last_name: Some(last.into()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let page = service
            .search_by_last_name("do", &PageRequest::default())
            .await
            .unwrap();
        let names: Vec<_> = page
            .content
            .iter()
            .filter_map(|p| p.last_name.as_deref())
            .collect();
        assert_eq!(names, ["Doe", "Donaldson"]);
    }

    #[tokio::test]
    async fn test_supplemental_lookups_delegate() {
        let service = service();
        service
            .create(CreatePlayer {
                player_id: "aaronha01".into(),
                first_name: Some("Hank".into()),
                last_name: Some("Aaron".into()),
                birth_country: Some("USA".into()),
                retro_id: Some("aaroh101".into()),
                bbref_id: Some("aaronha01".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(service.find_by_last_name("aaron").await.unwrap().len(), 1);
        assert_eq!(service.find_by_first_name("hank").await.unwrap().len(), 1);
        assert!(service.find_by_full_name("Hank", "Aaron").await.unwrap().is_some());
        assert_eq!(service.find_by_birth_country("USA").await.unwrap().len(), 1);
        assert!(service.find_by_bats("R").await.unwrap().is_empty());
        assert!(service.find_by_throw_stats("L").await.unwrap().is_empty());
        assert!(service.find_by_retro_id("aaroh101").await.unwrap().is_some());
        assert!(service.find_by_bbref_id("aaronha01").await.unwrap().is_some());
    }
}
