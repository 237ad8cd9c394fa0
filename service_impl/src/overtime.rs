use std::sync::Arc;

use crate::gen_service_impl;
use async_trait::async_trait;
use dao::{
    overtime::{OvertimeDao, OvertimeEntity},
    TransactionDao,
};
use lembur_utils::normalize_import_date;
use service::{
    clock::ClockService,
    cut_off::CutOffService,
    incentive::DEFAULT_CATEGORY,
    overtime::{
        filter_by_period, ImportResult, ImportRow, OvertimeRecord, OvertimeService,
        DEFAULT_COFFEE_INCENTIVE, DEFAULT_DEPARTMENT, DEFAULT_HOURS, IMPORT_CHECK,
    },
    uuid_service::UuidService,
    ServiceError, ValidationFailureItem,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

const OVERTIME_SERVICE_PROCESS: &str = "overtime-service";

gen_service_impl! {
    struct OvertimeServiceImpl: OvertimeService = OvertimeServiceDeps {
        OvertimeDao: OvertimeDao<Transaction = Self::Transaction> = overtime_dao,
        CutOffService: CutOffService<Transaction = Self::Transaction> = cut_off_service,
        UuidService: UuidService = uuid_service,
        ClockService: ClockService = clock_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

/// Empty cells count as missing.
fn cell(value: &Option<Arc<str>>) -> Option<Arc<str>> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}

fn or_default(value: &Arc<str>, default: &str) -> Arc<str> {
    if value.trim().is_empty() {
        default.into()
    } else {
        value.clone()
    }
}

#[async_trait]
impl<Deps: OvertimeServiceDeps> OvertimeService for OvertimeServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn get_all(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let records = self
            .overtime_dao
            .find_all(tx.clone())
            .await?
            .iter()
            .map(OvertimeRecord::from)
            .collect();
        self.transaction_dao.commit(tx).await?;
        Ok(records)
    }

    async fn get_by_employee(
        &self,
        employee_id: &str,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let records = self
            .overtime_dao
            .find_by_employee_id(employee_id.trim(), tx.clone())
            .await?
            .iter()
            .map(OvertimeRecord::from)
            .collect();
        self.transaction_dao.commit(tx).await?;
        Ok(records)
    }

    async fn get_for_period(
        &self,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[OvertimeRecord]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let period = match cut_off_id {
            Some(id) => Some(self.cut_off_service.get(id, Some(tx.clone())).await?),
            None => {
                self.cut_off_service
                    .get_selection(Some(tx.clone()))
                    .await?
                    .default_selected
            }
        };
        let records = self.get_all(Some(tx.clone())).await?;
        self.transaction_dao.commit(tx).await?;
        Ok(filter_by_period(&records, period.as_ref()))
    }

    async fn create(
        &self,
        record: &OvertimeRecord,
        tx: Option<Self::Transaction>,
    ) -> Result<OvertimeRecord, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        if record.id != Uuid::nil() {
            return Err(ServiceError::IdSetOnCreate);
        }
        if record.version != Uuid::nil() {
            return Err(ServiceError::VersionSetOnCreate);
        }
        let employee_id: Arc<str> = record.employee_id.trim().into();
        if employee_id.is_empty() {
            return Err(ServiceError::ValidationError(
                [ValidationFailureItem::InvalidValue("employee_id".into())].into(),
            ));
        }

        let sequence_no = if record.sequence_no.trim().is_empty() {
            let count = self.overtime_dao.find_all(tx.clone()).await?.len();
            (count + 1).to_string().into()
        } else {
            record.sequence_no.clone()
        };
        let record = OvertimeRecord {
            id: self.uuid_service.new_uuid("overtime-id"),
            sequence_no,
            employee_id,
            department: or_default(&record.department, DEFAULT_DEPARTMENT),
            category: or_default(&record.category, DEFAULT_CATEGORY),
            hours: or_default(&record.hours, DEFAULT_HOURS),
            coffee_incentive: or_default(&record.coffee_incentive, DEFAULT_COFFEE_INCENTIVE),
            created: Some(self.clock_service.date_time_now()),
            deleted: None,
            version: self.uuid_service.new_uuid("overtime-version"),
            ..record.clone()
        };
        info!(overtime_id = %record.id, employee_id = %record.employee_id, "Create overtime record");
        self.overtime_dao
            .create(
                &OvertimeEntity::try_from(&record)?,
                OVERTIME_SERVICE_PROCESS,
                tx.clone(),
            )
            .await?;

        self.transaction_dao.commit(tx).await?;
        Ok(record)
    }

    async fn delete(&self, id: Uuid, tx: Option<Self::Transaction>) -> Result<(), ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let mut entity = self
            .overtime_dao
            .find_by_id(id, tx.clone())
            .await?
            .filter(|entity| entity.deleted.is_none())
            .ok_or(ServiceError::EntityNotFound(id))?;
        entity.deleted = Some(self.clock_service.date_time_now());
        entity.version = self.uuid_service.new_uuid("overtime-version");
        info!(overtime_id = %id, "Delete overtime record");
        self.overtime_dao
            .update(&entity, OVERTIME_SERVICE_PROCESS, tx.clone())
            .await?;
        self.transaction_dao.commit(tx).await?;
        Ok(())
    }

    async fn import(
        &self,
        rows: Arc<[ImportRow]>,
        tx: Option<Self::Transaction>,
    ) -> Result<ImportResult, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let existing = self.overtime_dao.find_all(tx.clone()).await?;

        let mut imported: Vec<OvertimeRecord> = Vec::new();
        let mut duplicates: Vec<ImportRow> = Vec::new();
        let mut skipped = 0usize;

        for row in rows.iter() {
            let Some(employee_id) = cell(&row.employee_id)
                .map(|id| Arc::<str>::from(id.trim()))
                .filter(|id| !id.is_empty())
            else {
                skipped += 1;
                continue;
            };
            let Some(raw_date) = cell(&row.date) else {
                skipped += 1;
                continue;
            };
            let date = match normalize_import_date(&raw_date) {
                Ok(date) => date,
                Err(err) => {
                    warn!(employee_id = %employee_id, %err, "Skip import row with unreadable date");
                    skipped += 1;
                    continue;
                }
            };
            let hours = cell(&row.hours).unwrap_or_else(|| DEFAULT_HOURS.into());

            if existing.iter().any(|entity| {
                entity.employee_id == employee_id && entity.date == date && entity.hours == hours
            }) {
                debug!(employee_id = %employee_id, %date, "Duplicate import row");
                duplicates.push(row.clone());
                continue;
            }

            let record = OvertimeRecord {
                id: self.uuid_service.new_uuid("overtime-id"),
                sequence_no: (existing.len() + imported.len() + 1).to_string().into(),
                employee_id,
                date,
                employee_name: cell(&row.employee_name).unwrap_or_else(|| "".into()),
                department: cell(&row.department).unwrap_or_else(|| DEFAULT_DEPARTMENT.into()),
                title: cell(&row.title).unwrap_or_else(|| "".into()),
                category: cell(&row.category).unwrap_or_else(|| DEFAULT_CATEGORY.into()),
                hours,
                coffee_incentive: cell(&row.coffee_incentive)
                    .unwrap_or_else(|| DEFAULT_COFFEE_INCENTIVE.into()),
                note: cell(&row.note).unwrap_or_else(|| "".into()),
                check: IMPORT_CHECK.into(),
                created: Some(self.clock_service.date_time_now()),
                deleted: None,
                version: self.uuid_service.new_uuid("overtime-version"),
            };
            self.overtime_dao
                .create(
                    &OvertimeEntity::try_from(&record)?,
                    OVERTIME_SERVICE_PROCESS,
                    tx.clone(),
                )
                .await?;
            imported.push(record);
        }

        info!(
            imported = imported.len(),
            duplicates = duplicates.len(),
            skipped,
            "Imported overtime rows"
        );
        self.transaction_dao.commit(tx).await?;
        Ok(ImportResult {
            imported: imported.into(),
            duplicates: duplicates.into(),
            skipped,
        })
    }
}
