mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IAssignmentRepo, ICompletionEventRepo, IUserRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct ParloContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ParloContext {
    async fn create_postgres(connection_string: &str) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> ParloContext {
    const DATABASE_URL: &str = "DATABASE_URL";

    match std::env::var(DATABASE_URL) {
        Ok(connection_string) => {
            info!("{} env var was provided. Going to use postgres.", DATABASE_URL);
            ParloContext::create_postgres(&connection_string).await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                DATABASE_URL
            );
            ParloContext::create_inmemory()
        }
    }
}
