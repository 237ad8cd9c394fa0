use std::sync::Arc;

use crate::{ResultDbErrorExt, TransactionImpl};
use async_trait::async_trait;
use dao::{
    employee::{EmployeeDao, EmployeeEntity},
    DaoError,
};
use sqlx::{query, query_as};
use time::{format_description::well_known::Iso8601, PrimitiveDateTime};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct EmployeeDb {
    id: String,
    name: String,
    department: String,
    title: String,
    level_tier: String,

    created: String,
    deleted: Option<String>,
    update_version: Vec<u8>,
}

impl TryFrom<&EmployeeDb> for EmployeeEntity {
    type Error = DaoError;

    fn try_from(db: &EmployeeDb) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id.as_str().into(),
            name: db.name.as_str().into(),
            department: db.department.as_str().into(),
            title: db.title.as_str().into(),
            level_tier: db.level_tier.as_str().into(),
            created: PrimitiveDateTime::parse(&db.created, &Iso8601::DATE_TIME)?,
            deleted: db
                .deleted
                .as_ref()
                .map(|deleted| PrimitiveDateTime::parse(deleted, &Iso8601::DATE_TIME))
                .transpose()?,
            version: Uuid::from_slice(&db.update_version)?,
        })
    }
}

pub struct EmployeeDaoImpl {
    pub _pool: Arc<sqlx::SqlitePool>,
}

impl EmployeeDaoImpl {
    pub fn new(pool: Arc<sqlx::SqlitePool>) -> Self {
        Self { _pool: pool }
    }
}

#[async_trait]
impl EmployeeDao for EmployeeDaoImpl {
    type Transaction = TransactionImpl;

    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[EmployeeEntity]>, DaoError> {
        info!("Dump all data from employee");
        query_as::<_, EmployeeDb>(
            r"SELECT id, name, department, title, level_tier, created, deleted, update_version
            FROM employee ORDER BY rowid",
        )
        .fetch_all(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?
        .iter()
        .map(EmployeeEntity::try_from)
        .collect()
    }

    async fn create(
        &self,
        entity: &EmployeeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError> {
        let created = entity.created.format(&Iso8601::DATE_TIME).map_db_error()?;
        let deleted = entity
            .deleted
            .as_ref()
            .map(|deleted| deleted.format(&Iso8601::DATE_TIME))
            .transpose()
            .map_db_error()?;
        let version = entity.version.as_bytes().to_vec();

        query(
            r"INSERT INTO employee (id, name, department, title, level_tier, created, deleted, update_version, update_process)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entity.id.as_ref())
        .bind(entity.name.as_ref())
        .bind(entity.department.as_ref())
        .bind(entity.title.as_ref())
        .bind(entity.level_tier.as_ref())
        .bind(created)
        .bind(deleted)
        .bind(version)
        .bind(process)
        .execute(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?;
        Ok(())
    }

    async fn update(
        &self,
        entity: &EmployeeEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError> {
        let deleted = entity
            .deleted
            .as_ref()
            .map(|deleted| deleted.format(&Iso8601::DATE_TIME))
            .transpose()
            .map_db_error()?;
        let version = entity.version.as_bytes().to_vec();

        query(
            r"UPDATE employee
            SET name = ?, department = ?, title = ?, level_tier = ?, deleted = ?, update_version = ?, update_process = ?
            WHERE id = ?",
        )
        .bind(entity.name.as_ref())
        .bind(entity.department.as_ref())
        .bind(entity.title.as_ref())
        .bind(entity.level_tier.as_ref())
        .bind(deleted)
        .bind(version)
        .bind(process)
        .bind(entity.id.as_ref())
        .execute(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?;
        Ok(())
    }
}
