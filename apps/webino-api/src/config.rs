use core_config::{AppInfo, FromEnv, app_info, env_is_set, server::ServerConfig};
use database::mongodb::{DATABASE_NAME_VAR, DATABASE_URL_VAR, MongoConfig};

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when storage was not enabled for this deployment
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mongodb = if env_is_set(DATABASE_URL_VAR) && env_is_set(DATABASE_NAME_VAR) {
            Some(MongoConfig::from_env()?)
        } else {
            None
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}
