use std::sync::Arc;

use crate::{ResultDbErrorExt, TransactionImpl};
use async_trait::async_trait;
use dao::{
    cut_off::{CutOffDao, CutOffEntity},
    DaoError,
};
use lembur_utils::{format_calendar_date, parse_calendar_date};
use sqlx::{query, query_as};
use time::{format_description::well_known::Iso8601, PrimitiveDateTime};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct CutOffDb {
    id: Vec<u8>,
    label: String,
    start_date: String,
    end_date: String,
    status: String,

    created: String,
    deleted: Option<String>,
    update_version: Vec<u8>,
}

impl TryFrom<&CutOffDb> for CutOffEntity {
    type Error = DaoError;

    fn try_from(db: &CutOffDb) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::from_slice(&db.id)?,
            label: db.label.as_str().into(),
            start_date: parse_calendar_date(&db.start_date)?,
            end_date: parse_calendar_date(&db.end_date)?,
            status: db.status.as_str().into(),
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

pub struct CutOffDaoImpl {
    pub _pool: Arc<sqlx::SqlitePool>,
}

impl CutOffDaoImpl {
    pub fn new(pool: Arc<sqlx::SqlitePool>) -> Self {
        Self { _pool: pool }
    }
}

#[async_trait]
impl CutOffDao for CutOffDaoImpl {
    type Transaction = TransactionImpl;

    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[CutOffEntity]>, DaoError> {
        info!("Dump all data from cut_off");
        query_as::<_, CutOffDb>(
            r"SELECT id, label, start_date, end_date, status, created, deleted, update_version
            FROM cut_off ORDER BY rowid",
        )
        .fetch_all(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?
        .iter()
        .map(CutOffEntity::try_from)
        .collect()
    }

    async fn create(
        &self,
        entity: &CutOffEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError> {
        let id_vec = entity.id.as_bytes().to_vec();
        let created = entity.created.format(&Iso8601::DATE_TIME).map_db_error()?;
        let deleted = entity
            .deleted
            .as_ref()
            .map(|deleted| deleted.format(&Iso8601::DATE_TIME))
            .transpose()
            .map_db_error()?;
        let version_vec = entity.version.as_bytes().to_vec();

        query(
            r"INSERT INTO cut_off (id, label, start_date, end_date, status, created, deleted, update_version, update_process)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id_vec)
        .bind(entity.label.as_ref())
        .bind(format_calendar_date(entity.start_date))
        .bind(format_calendar_date(entity.end_date))
        .bind(entity.status.as_ref())
        .bind(created)
        .bind(deleted)
        .bind(version_vec)
        .bind(process)
        .execute(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?;
        Ok(())
    }

    async fn update(
        &self,
        entity: &CutOffEntity,
        process: &str,
        tx: Self::Transaction,
    ) -> Result<(), DaoError> {
        let id_vec = entity.id.as_bytes().to_vec();
        let deleted = entity
            .deleted
            .as_ref()
            .map(|deleted| deleted.format(&Iso8601::DATE_TIME))
            .transpose()
            .map_db_error()?;
        let version_vec = entity.version.as_bytes().to_vec();

        query(
            r"UPDATE cut_off
            SET label = ?, start_date = ?, end_date = ?, status = ?, deleted = ?, update_version = ?, update_process = ?
            WHERE id = ?",
        )
        .bind(entity.label.as_ref())
        .bind(format_calendar_date(entity.start_date))
        .bind(format_calendar_date(entity.end_date))
        .bind(entity.status.as_ref())
        .bind(deleted)
        .bind(version_vec)
        .bind(process)
        .bind(id_vec)
        .execute(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use dao::{cut_off::ACTIVE_STATUS, TransactionDao};
    use time::macros::{date, datetime};
    use uuid::uuid;

    use super::*;
    use crate::{test::setup_pool, TransactionDaoImpl};

    #[tokio::test]
    async fn test_update_keeps_insertion_order() {
        let pool = setup_pool().await;
        let transaction_dao = TransactionDaoImpl::new(pool.clone());
        let dao = CutOffDaoImpl::new(pool);
        let tx = transaction_dao.new_transaction().await.unwrap();

        let january = CutOffEntity {
            id: uuid!("c3a4e2d1-9b7f-4c6e-8a5d-2f1e0b9c8d01"),
            label: "Januari 2024".into(),
            start_date: date!(2024 - 01 - 01),
            end_date: date!(2024 - 01 - 31),
            status: "".into(),
            created: datetime!(2024-01-01 08:00:00),
            deleted: None,
            version: uuid!("c3a4e2d1-9b7f-4c6e-8a5d-2f1e0b9c8d10"),
        };
        let february = CutOffEntity {
            id: uuid!("c3a4e2d1-9b7f-4c6e-8a5d-2f1e0b9c8d02"),
            label: "Februari 2024".into(),
            start_date: date!(2024 - 02 - 01),
            end_date: date!(2024 - 02 - 29),
            ..january.clone()
        };
        dao.create(&january, "test", tx.clone()).await.unwrap();
        dao.create(&february, "test", tx.clone()).await.unwrap();

        let activated = CutOffEntity {
            status: ACTIVE_STATUS.into(),
            version: uuid!("c3a4e2d1-9b7f-4c6e-8a5d-2f1e0b9c8d11"),
            ..january.clone()
        };
        dao.update(&activated, "test", tx.clone()).await.unwrap();

        let all = dao.find_all(tx.clone()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], activated);
        assert!(all[0].is_active());
        assert_eq!(all[1], february);

        transaction_dao.commit(tx).await.unwrap();
    }
}
