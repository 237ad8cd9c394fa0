use std::sync::Arc;

use crate::{
    cut_off::CutOffPeriod,
    incentive::{calculate_incentive, OvertimeCategory},
    ServiceError,
};
use async_trait::async_trait;
use dao::overtime::OvertimeEntity;
use lembur_utils::parse_hours;
use mockall::automock;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

pub const DEFAULT_HOURS: &str = "0 Jam";
pub const DEFAULT_DEPARTMENT: &str = "LABORATORIUM";
pub const DEFAULT_COFFEE_INCENTIVE: &str = "Tidak";
pub const IMPORT_CHECK: &str = "Import";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OvertimeRecord {
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
    pub created: Option<PrimitiveDateTime>,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

impl OvertimeRecord {
    pub fn hours_value(&self) -> i64 {
        parse_hours(&self.hours)
    }

    pub fn category_kind(&self) -> OvertimeCategory {
        OvertimeCategory::classify(&self.category)
    }

    pub fn incentive(&self, level_tier: &str) -> i64 {
        calculate_incentive(&self.hours, &self.category, level_tier)
    }
}

impl From<&OvertimeEntity> for OvertimeRecord {
    fn from(entity: &OvertimeEntity) -> Self {
        Self {
            id: entity.id,
            sequence_no: entity.sequence_no.clone(),
            employee_id: entity.employee_id.clone(),
            date: entity.date,
            employee_name: entity.employee_name.clone(),
            department: entity.department.clone(),
            title: entity.title.clone(),
            category: entity.category.clone(),
            hours: entity.hours.clone(),
            coffee_incentive: entity.coffee_incentive.clone(),
            note: entity.note.clone(),
            check: entity.check.clone(),
            created: Some(entity.created),
            deleted: entity.deleted,
            version: entity.version,
        }
    }
}
lembur_utils::derive_from_reference!(OvertimeEntity, OvertimeRecord);

impl TryFrom<&OvertimeRecord> for OvertimeEntity {
    type Error = ServiceError;

    fn try_from(record: &OvertimeRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            sequence_no: record.sequence_no.clone(),
            employee_id: record.employee_id.clone(),
            date: record.date,
            employee_name: record.employee_name.clone(),
            department: record.department.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            hours: record.hours.clone(),
            coffee_incentive: record.coffee_incentive.clone(),
            note: record.note.clone(),
            check: record.check.clone(),
            created: record.created.ok_or(ServiceError::InternalError)?,
            deleted: record.deleted,
            version: record.version,
        })
    }
}

/// Keeps the records dated within `period`, in their original order.
///
/// Without a period all records pass.
pub fn filter_by_period(
    records: &[OvertimeRecord],
    period: Option<&CutOffPeriod>,
) -> Arc<[OvertimeRecord]> {
    match period {
        None => records.into(),
        Some(period) => records
            .iter()
            .filter(|record| period.contains(record.date))
            .cloned()
            .collect(),
    }
}

/// One row of an overtime sheet upload, before any defaults are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportRow {
    pub employee_id: Option<Arc<str>>,
    /// `YYYY-MM-DD`, `D/M/YYYY` or a spreadsheet serial day number.
    pub date: Option<Arc<str>>,
    pub employee_name: Option<Arc<str>>,
    pub department: Option<Arc<str>>,
    pub title: Option<Arc<str>>,
    pub category: Option<Arc<str>>,
    pub hours: Option<Arc<str>>,
    pub coffee_incentive: Option<Arc<str>>,
    pub note: Option<Arc<str>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: Arc<[OvertimeRecord]>,
    /// Rows which match an already stored record and were left out.
    pub duplicates: Arc<[ImportRow]>,
    /// Rows without employee id or without a readable date.
    pub skipped: usize,
}

#[automock(type Transaction=dao::MockTransaction;)]
#[async_trait]
pub trait OvertimeService {
    type Transaction: dao::Transaction;

    async fn get_all(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError>;

    async fn get_by_employee(
        &self,
        employee_id: &str,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError>;

    /// Records of the given cut-off period or, without one, of the default
    /// selected period.
    async fn get_for_period(
        &self,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError>;

    async fn create(
        &self,
        record: &OvertimeRecord,
        tx: Option<Self::Transaction>,
    ) -> Result<OvertimeRecord, ServiceError>;

    async fn delete(&self, id: Uuid, tx: Option<Self::Transaction>) -> Result<(), ServiceError>;

    async fn import(
        &self,
        rows: Arc<[ImportRow]>,
        tx: Option<Self::Transaction>,
    ) -> Result<ImportResult, ServiceError>;
}
