use std::sync::Arc;

use crate::{ResultDbErrorExt, TransactionImpl};
use async_trait::async_trait;
use dao::{
    overtime::{OvertimeDao, OvertimeEntity},
    DaoError,
};
use lembur_utils::{format_calendar_date, parse_calendar_date};
use sqlx::{query, query_as};
use time::{format_description::well_known::Iso8601, PrimitiveDateTime};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct OvertimeDb {
    id: Vec<u8>,
    sequence_no: String,
    employee_id: String,
    date: String,
    employee_name: String,
    department: String,
    title: String,
    category: String,
    hours: String,
    coffee_incentive: String,
    note: String,
    check_status: String,

    created: String,
    deleted: Option<String>,
    update_version: Vec<u8>,
}

impl TryFrom<&OvertimeDb> for OvertimeEntity {
    type Error = DaoError;

    fn try_from(db: &OvertimeDb) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::from_slice(&db.id)?,
            sequence_no: db.sequence_no.as_str().into(),
            employee_id: db.employee_id.as_str().into(),
            date: parse_calendar_date(&db.date)?,
            employee_name: db.employee_name.as_str().into(),
            department: db.department.as_str().into(),
            title: db.title.as_str().into(),
            category: db.category.as_str().into(),
            hours: db.hours.as_str().into(),
            coffee_incentive: db.coffee_incentive.as_str().into(),
            note: db.note.as_str().into(),
            check: db.check_status.as_str().into(),
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

pub struct OvertimeDaoImpl {
    pub _pool: Arc<sqlx::SqlitePool>,
}

impl OvertimeDaoImpl {
    pub fn new(pool: Arc<sqlx::SqlitePool>) -> Self {
        Self { _pool: pool }
    }
}

#[async_trait]
impl OvertimeDao for OvertimeDaoImpl {
    type Transaction = TransactionImpl;

    async fn dump(&self, tx: Self::Transaction) -> Result<Arc<[OvertimeEntity]>, DaoError> {
        info!("Dump all data from overtime");
        query_as::<_, OvertimeDb>(
            r"SELECT id, sequence_no, employee_id, date, employee_name, department, title,
                category, hours, coffee_incentive, note, check_status, created, deleted, update_version
            FROM overtime ORDER BY rowid",
        )
        .fetch_all(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?
        .iter()
        .map(OvertimeEntity::try_from)
        .collect()
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
        tx: Self::Transaction,
    ) -> Result<Arc<[OvertimeEntity]>, DaoError> {
        query_as::<_, OvertimeDb>(
            r"SELECT id, sequence_no, employee_id, date, employee_name, department, title,
                category, hours, coffee_incentive, note, check_status, created, deleted, update_version
            FROM overtime WHERE employee_id = ? AND deleted IS NULL ORDER BY rowid",
        )
        .bind(employee_id)
        .fetch_all(tx.tx.lock().await.as_mut())
        .await
        .map_db_error()?
        .iter()
        .map(OvertimeEntity::try_from)
        .collect()
    }

    async fn create(
        &self,
        entity: &OvertimeEntity,
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
            r"INSERT INTO overtime (id, sequence_no, employee_id, date, employee_name, department, title,
                category, hours, coffee_incentive, note, check_status, created, deleted, update_version, update_process)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id_vec)
        .bind(entity.sequence_no.as_ref())
        .bind(entity.employee_id.as_ref())
        .bind(format_calendar_date(entity.date))
        .bind(entity.employee_name.as_ref())
        .bind(entity.department.as_ref())
        .bind(entity.title.as_ref())
        .bind(entity.category.as_ref())
        .bind(entity.hours.as_ref())
        .bind(entity.coffee_incentive.as_ref())
        .bind(entity.note.as_ref())
        .bind(entity.check.as_ref())
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
        entity: &OvertimeEntity,
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
            r"UPDATE overtime
            SET sequence_no = ?, employee_id = ?, date = ?, employee_name = ?, department = ?, title = ?,
                category = ?, hours = ?, coffee_incentive = ?, note = ?, check_status = ?,
                deleted = ?, update_version = ?, update_process = ?
            WHERE id = ?",
        )
        .bind(entity.sequence_no.as_ref())
        .bind(entity.employee_id.as_ref())
        .bind(format_calendar_date(entity.date))
        .bind(entity.employee_name.as_ref())
        .bind(entity.department.as_ref())
        .bind(entity.title.as_ref())
        .bind(entity.category.as_ref())
        .bind(entity.hours.as_ref())
        .bind(entity.coffee_incentive.as_ref())
        .bind(entity.note.as_ref())
        .bind(entity.check.as_ref())
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
