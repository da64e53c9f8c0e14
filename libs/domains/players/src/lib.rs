//! Players Domain
//!
//! CRUD, search and paging over baseball player records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /v1/players
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Replace/patch semantics, lookup latency
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Player, DTOs, paging
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_players::{
//!     handlers,
//!     latency::NoLatency,
//!     repository::InMemoryPlayerRepository,
//!     service::PlayerService,
//! };
//!
//! let repository = InMemoryPlayerRepository::new();
//! let service = PlayerService::with_latency(repository, NoLatency);
//!
//! let router = axum::Router::new().nest("/v1/players", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod latency;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{PlayerError, PlayerResult};
pub use latency::{LatencySimulator, NoLatency, RandomLatency};
pub use models::{
    CreatePlayer, Page, PageRequest, Player, PlayerSortField, Players, SearchParams,
    SortDirection, SortSpec, UpdatePlayer,
};
pub use postgres::{PgPlayerRepository, bootstrap_schema};
pub use repository::{InMemoryPlayerRepository, PlayerRepository};
pub use service::PlayerService;
