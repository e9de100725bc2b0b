use memento_utils::create_random_secret;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign and verify login tokens
    pub token_secret: String,
    /// Port for the application to run on
    pub port: usize,
    /// Directory holding the durable JSON document stores
    pub data_dir: PathBuf,
    /// Seconds between two runs of the reminder sweep
    pub reminder_sweep_interval_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let token_secret = match std::env::var("TOKEN_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find TOKEN_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(32);
                info!("Token secret was generated and set to: {}", secret);
                secret
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into());

        let default_sweep_interval = "60";
        let sweep_interval = std::env::var("REMINDER_SWEEP_INTERVAL_SECS")
            .unwrap_or(default_sweep_interval.into());
        let reminder_sweep_interval_secs = match sweep_interval.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given REMINDER_SWEEP_INTERVAL_SECS: {} is not valid, falling back to the default interval: {}.",
                    sweep_interval, default_sweep_interval
                );
                default_sweep_interval.parse::<u64>().unwrap()
            }
        };

        Self {
            token_secret,
            port,
            data_dir: PathBuf::from(data_dir),
            reminder_sweep_interval_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
