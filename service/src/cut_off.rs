use std::sync::Arc;

use crate::ServiceError;
use async_trait::async_trait;
use dao::cut_off::{CutOffEntity, ACTIVE_STATUS};
use mockall::automock;
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

/// Payroll window, both dates are inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutOffPeriod {
    pub id: Uuid,
    pub label: Arc<str>,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: bool,
    pub created: Option<PrimitiveDateTime>,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

impl CutOffPeriod {
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl From<&CutOffEntity> for CutOffPeriod {
    fn from(entity: &CutOffEntity) -> Self {
        Self {
            id: entity.id,
            label: entity.label.clone(),
            start_date: entity.start_date,
            end_date: entity.end_date,
            is_active: entity.is_active(),
            created: Some(entity.created),
            deleted: entity.deleted,
            version: entity.version,
        }
    }
}
lembur_utils::derive_from_reference!(CutOffEntity, CutOffPeriod);

impl TryFrom<&CutOffPeriod> for CutOffEntity {
    type Error = ServiceError;

    fn try_from(period: &CutOffPeriod) -> Result<Self, Self::Error> {
        Ok(Self {
            id: period.id,
            label: period.label.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
            status: if period.is_active { ACTIVE_STATUS } else { "" }.into(),
            created: period.created.ok_or(ServiceError::InternalError)?,
            deleted: period.deleted,
            version: period.version,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodSelection {
    /// Active periods in list order.
    pub active: Arc<[CutOffPeriod]>,
    /// The period views start with when nobody picked one.
    pub default_selected: Option<CutOffPeriod>,
}

/// Picks the active periods and the default selection.
///
/// The last active period wins. Without any active period the last period
/// of the list is selected.
pub fn resolve_periods(periods: &[CutOffPeriod]) -> PeriodSelection {
    let active: Arc<[CutOffPeriod]> = periods
        .iter()
        .filter(|period| period.is_active)
        .cloned()
        .collect();
    let default_selected = active.last().or_else(|| periods.last()).cloned();
    PeriodSelection {
        active,
        default_selected,
    }
}

#[automock(type Transaction=dao::MockTransaction;)]
#[async_trait]
pub trait CutOffService {
    type Transaction: dao::Transaction;

    async fn get_all(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[CutOffPeriod]>, ServiceError>;

    async fn get(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError>;

    async fn get_selection(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<PeriodSelection, ServiceError>;

    async fn create(
        &self,
        period: &CutOffPeriod,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError>;

    async fn update(
        &self,
        period: &CutOffPeriod,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError>;

    async fn delete(&self, id: Uuid, tx: Option<Self::Transaction>) -> Result<(), ServiceError>;

    /// Changes the active flag of one period, other periods stay untouched.
    async fn set_active(
        &self,
        id: Uuid,
        active: bool,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError>;

    async fn toggle_active(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError>;
}
