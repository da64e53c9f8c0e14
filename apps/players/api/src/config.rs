use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Upper bound of the simulated delay on single-player lookups
    pub player_lookup_max_delay: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let max_delay_ms = env_parse_or(
            "PLAYER_LOOKUP_MAX_DELAY_MS",
            domain_players::latency::DEFAULT_MAX_DELAY.as_millis() as u64,
        )?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            player_lookup_max_delay: Duration::from_millis(max_delay_ms),
        })
    }
}
