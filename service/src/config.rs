use std::sync::Arc;

use crate::ServiceError;
use async_trait::async_trait;
use mockall::automock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: Arc<str>,
    pub server_address: Arc<str>,
    /// Level tier given to employees created without one.
    pub default_level_tier: Arc<str>,
}

#[automock]
#[async_trait]
pub trait ConfigService {
    async fn get_config(&self) -> Result<Config, ServiceError>;
}
