mod config;
mod repos;
mod system;

pub use config::Config;
use repos::Repos;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct MementoContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl MementoContext {
    /// Context backed by the JSON document stores under `config.data_dir`
    fn create(config: Config) -> Self {
        let repos = Repos::create_file(&config.data_dir);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context backed by plain in-memory collections, used in tests
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> MementoContext {
    MementoContext::create(Config::new())
}
