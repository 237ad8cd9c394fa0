use std::sync::Arc;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::RestStateImpl;

mod import_report;
mod incentive_properties;
mod rest_api;

pub struct TestSetup {
    pub pool: Arc<SqlitePool>,
    pub rest_state: RestStateImpl,
}

impl TestSetup {
    pub async fn new() -> Self {
        let pool = Arc::new(
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect("sqlite::memory:")
                .await
                .expect("Could not open in memory database"),
        );
        sqlx::migrate!("../migrations/sqlite")
            .run(pool.as_ref())
            .await
            .expect("Could not run migrations");
        let rest_state = RestStateImpl::new(pool.clone());
        Self { pool, rest_state }
    }
}
