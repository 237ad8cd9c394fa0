use std::{env, sync::Arc};

use async_trait::async_trait;
use service::{
    config::{Config, ConfigService},
    incentive::DEFAULT_LEVEL_TIER,
    ServiceError,
};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./lembur.sqlite3?mode=rwc";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

pub struct ConfigServiceImpl;

#[async_trait]
impl ConfigService for ConfigServiceImpl {
    async fn get_config(&self) -> Result<Config, ServiceError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let server_address =
            env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());
        let default_level_tier =
            env::var("DEFAULT_LEVEL_TIER").unwrap_or_else(|_| DEFAULT_LEVEL_TIER.to_string());

        Ok(Config {
            database_url: Arc::from(database_url),
            server_address: Arc::from(server_address),
            default_level_tier: Arc::from(default_level_tier),
        })
    }
}
