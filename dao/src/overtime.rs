use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

use crate::DaoError;

/// One row of the overtime sheet.
///
/// Everything but the date is stored as it was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OvertimeEntity {
    pub id: Uuid,
    pub sequence_no: Arc<str>,
    pub employee_id: Arc<str>,
    pub date: Date,
    pub employee_name: Arc<str>,
    pub department: Arc<str>,
    pub title: Arc<str>,
    pub category: Arc<str>,
    pub hours: Arc<str>,
    pub coffee_incentive: Arc<str>,
    pub note: Arc<str>,
    pub check: Arc<str>,

    pub created: PrimitiveDateTime,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

#[automock(type Transaction = crate::MockTransaction;)]
#[async_trait]
pub trait OvertimeDao {
    type Transaction: crate::Transaction;

    /// Returns everything in insertion order, including deleted items.
    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[OvertimeEntity]>, DaoError>;

    async fn create(
        &self,
        entity: &OvertimeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn update(
        &self,
        entity: &OvertimeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError>;

    async fn find_all(&self, tx: Self::Transaction) -> Result<Arc<[OvertimeEntity]>, DaoError> {
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
    ) -> Result<Option<OvertimeEntity>, DaoError> {
        Ok(self
            .dump(tx)
            .await?
            .iter()
            .find(|entity| entity.id == id)
            .cloned())
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
        tx: Self::Transaction,
    ) -> Result<Arc<[OvertimeEntity]>, DaoError> {
        Ok(self
            .find_all(tx)
            .await?
            .iter()
            .filter(|entity| entity.employee_id.as_ref() == employee_id)
            .cloned()
            .collect())
    }
}
