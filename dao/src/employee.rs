use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeEntity {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub department: Arc<str>,
    pub title: Arc<str>,
    pub level_tier: Arc<str>,

    pub created: PrimitiveDateTime,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait EmployeeDao {
    type Transaction: crate::Transaction;

    /// Returns everything, including deleted items.
    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[EmployeeEntity]>, DaoError>;

    async fn create(
        &self,
        entity: &EmployeeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn update(
        &self,
        entity: &EmployeeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn find_all(&self, tx: Self::Transaction) -> Result<Arc<[EmployeeEntity]>, DaoError> {
        Ok(self
            .dump(tx)
            .await?
            .iter()
            .filter(|entity| entity.deleted.is_none())
            .cloned()
            .collect())
    }

    /// Looks up an employee by its employee number, deleted ones included.
    async fn find_by_id(
        &self,
        id: &str,
        tx: Self::Transaction,
    ) -> Result<Option<EmployeeEntity>, DaoError> {
        Ok(self
            .dump(tx)
            .await?
            .iter()
            .find(|entity| entity.id.as_ref() == id)
            .cloned())
    }
}
