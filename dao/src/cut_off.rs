use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

use crate::DaoError;

/// Status value of a cut-off period which is currently active.
pub const ACTIVE_STATUS: &str = "Aktif";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutOffEntity {
    pub id: Uuid,
    pub label: Arc<str>,
    pub start_date: Date,
    pub end_date: Date,
    pub status: Arc<str>,

    pub created: PrimitiveDateTime,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

impl CutOffEntity {
    pub fn is_active(&self) -> bool {
        self.status.as_ref() == ACTIVE_STATUS
    }
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait CutOffDao {
    type Transaction: crate::Transaction;

    /// Returns everything in insertion order, including deleted items.
    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[CutOffEntity]>, DaoError>;

    async fn create(
        &self,
        entity: &CutOffEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn update(
        &self,
        entity: &CutOffEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn find_all(&self, tx: Self::Transaction) -> Result<Arc<[CutOffEntity]>, DaoError> {
        Ok(self
            .dump(tx)
            .await?
            .iter()
            .filter(|entity| entity.deleted.is_none())
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        tx: Self::Transaction,
    ) -> Result<Option<CutOffEntity>, DaoError> {
        Ok(self
            .dump(tx)
            .await?
            .iter()
            .find(|entity| entity.id == id)
            .cloned())
    }
}
