use std::sync::Arc;

use crate::{
    cut_off::CutOffPeriod,
    employee::Employee,
    incentive::{OvertimeCategory, DEFAULT_LEVEL_TIER},
    overtime::OvertimeRecord,
    ServiceError,
};
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub record: OvertimeRecord,
    pub hours: i64,
    pub incentive: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeRecap {
    pub employee_id: Arc<str>,
    pub employee_name: Arc<str>,
    pub record_count: usize,
    pub total_hours: i64,
    pub total_incentive: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodSummary {
    pub period: Option<CutOffPeriod>,
    /// Number of employees known to the system, not only the ones in the period.
    pub employee_count: usize,
    pub record_count: usize,
    pub total_hours: i64,
    pub total_incentive: i64,
    pub lines: Arc<[ReportLine]>,
    /// One entry per employee in order of their first record.
    pub recap: Arc<[EmployeeRecap]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeSummary {
    pub employee: Employee,
    pub period: Option<CutOffPeriod>,
    pub total_hours: i64,
    pub total_incentive: i64,
    pub workday_count: usize,
    pub holiday_count: usize,
    pub lines: Arc<[ReportLine]>,
}

/// Builds report lines, looking up the level tier of each record's employee.
///
/// Records of unknown employees are paid as staff.
pub fn build_lines(records: &[OvertimeRecord], employees: &[Employee]) -> Arc<[ReportLine]> {
    records
        .iter()
        .map(|record| {
            let level_tier = employees
                .iter()
                .find(|employee| employee.id == record.employee_id)
                .map(|employee| employee.level_tier.as_ref())
                .unwrap_or(DEFAULT_LEVEL_TIER);
            ReportLine {
                record: record.clone(),
                hours: record.hours_value(),
                incentive: record.incentive(level_tier),
            }
        })
        .collect()
}

pub fn total_hours(lines: &[ReportLine]) -> i64 {
    lines
        .iter()
        .fold(0i64, |sum, line| sum.saturating_add(line.hours))
}

pub fn total_incentive(lines: &[ReportLine]) -> i64 {
    lines
        .iter()
        .fold(0i64, |sum, line| sum.saturating_add(line.incentive))
}

pub fn recap_by_employee(lines: &[ReportLine]) -> Arc<[EmployeeRecap]> {
    let mut recap: Vec<EmployeeRecap> = Vec::new();
    for line in lines {
        match recap
            .iter_mut()
            .find(|entry| entry.employee_id == line.record.employee_id)
        {
            Some(entry) => {
                entry.record_count += 1;
                entry.total_hours = entry.total_hours.saturating_add(line.hours);
                entry.total_incentive = entry.total_incentive.saturating_add(line.incentive);
            }
            None => recap.push(EmployeeRecap {
                employee_id: line.record.employee_id.clone(),
                employee_name: line.record.employee_name.clone(),
                record_count: 1,
                total_hours: line.hours,
                total_incentive: line.incentive,
            }),
        }
    }
    recap.into()
}

pub fn count_category(lines: &[ReportLine], category: OvertimeCategory) -> usize {
    lines
        .iter()
        .filter(|line| line.record.category_kind() == category)
        .count()
}

#[automock(type Transaction=dao::MockTransaction;)]
#[async_trait]
pub trait ReportService {
    type Transaction: dao::Transaction;

    async fn period_summary(
        &self,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<PeriodSummary, ServiceError>;

    async fn employee_summary(
        &self,
        employee_id: &str,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<EmployeeSummary, ServiceError>;
}
