use axum::Router;

pub mod health;
pub mod players;

/// Versioned API routes.
///
/// Returns a stateless Router (sub-routers have their state applied),
/// ready to be wrapped by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/v1/players", players::router(state))
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
