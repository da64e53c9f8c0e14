use axum::Router;
use domain_players::{PgPlayerRepository, PlayerService, RandomLatency, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgPlayerRepository::new(state.db.clone());
    let latency = RandomLatency::new(state.config.player_lookup_max_delay);
    handlers::router(PlayerService::with_latency(repository, latency))
}
