use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmployeeTO {
    pub id: Arc<str>,
    pub name: Arc<str>,
    #[serde(default)]
    pub department: Arc<str>,
    #[serde(default)]
    pub title: Arc<str>,
    #[serde(default)]
    pub level_tier: Arc<str>,
    #[serde(default)]
    pub created: Option<PrimitiveDateTime>,
    #[serde(default)]
    pub deleted: Option<PrimitiveDateTime>,
    #[serde(rename = "$version")]
    #[serde(default)]
    pub version: Uuid,
}
#[cfg(feature = "service-impl")]
impl From<&service::employee::Employee> for EmployeeTO {
    fn from(employee: &service::employee::Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            title: employee.title.clone(),
            level_tier: employee.level_tier.clone(),
            created: employee.created,
            deleted: employee.deleted,
            version: employee.version,
        }
    }
}
#[cfg(feature = "service-impl")]
impl From<&EmployeeTO> for service::employee::Employee {
    fn from(employee: &EmployeeTO) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            title: employee.title.clone(),
            level_tier: employee.level_tier.clone(),
            created: employee.created,
            deleted: employee.deleted,
            version: employee.version,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CutOffPeriodTO {
    #[serde(default)]
    pub id: Uuid,
    pub label: Arc<str>,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created: Option<PrimitiveDateTime>,
    #[serde(default)]
    pub deleted: Option<PrimitiveDateTime>,
    #[serde(rename = "$version")]
    #[serde(default)]
    pub version: Uuid,
}
#[cfg(feature = "service-impl")]
impl From<&service::cut_off::CutOffPeriod> for CutOffPeriodTO {
    fn from(period: &service::cut_off::CutOffPeriod) -> Self {
        Self {
            id: period.id,
            label: period.label.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
            is_active: period.is_active,
            created: period.created,
            deleted: period.deleted,
            version: period.version,
        }
    }
}
#[cfg(feature = "service-impl")]
impl From<&CutOffPeriodTO> for service::cut_off::CutOffPeriod {
    fn from(period: &CutOffPeriodTO) -> Self {
        Self {
            id: period.id,
            label: period.label.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
            is_active: period.is_active,
            created: period.created,
            deleted: period.deleted,
            version: period.version,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeriodSelectionTO {
    pub active: Arc<[CutOffPeriodTO]>,
    pub default_selected: Option<CutOffPeriodTO>,
}
#[cfg(feature = "service-impl")]
impl From<&service::cut_off::PeriodSelection> for PeriodSelectionTO {
    fn from(selection: &service::cut_off::PeriodSelection) -> Self {
        Self {
            active: selection.active.iter().map(CutOffPeriodTO::from).collect(),
            default_selected: selection.default_selected.as_ref().map(CutOffPeriodTO::from),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OvertimeRecordTO {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub sequence_no: Arc<str>,
    pub employee_id: Arc<str>,
    pub date: Date,
    #[serde(default)]
    pub employee_name: Arc<str>,
    #[serde(default)]
    pub department: Arc<str>,
    #[serde(default)]
    pub title: Arc<str>,
    #[serde(default)]
    pub category: Arc<str>,
    #[serde(default)]
    pub hours: Arc<str>,
    #[serde(default)]
    pub coffee_incentive: Arc<str>,
    #[serde(default)]
    pub note: Arc<str>,
    #[serde(default)]
    pub check: Arc<str>,
    #[serde(default)]
    pub created: Option<PrimitiveDateTime>,
    #[serde(default)]
    pub deleted: Option<PrimitiveDateTime>,
    #[serde(rename = "$version")]
    #[serde(default)]
    pub version: Uuid,
}
#[cfg(feature = "service-impl")]
impl From<&service::overtime::OvertimeRecord> for OvertimeRecordTO {
    fn from(record: &service::overtime::OvertimeRecord) -> Self {
        Self {
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
            created: record.created,
            deleted: record.deleted,
            version: record.version,
        }
    }
}
#[cfg(feature = "service-impl")]
impl From<&OvertimeRecordTO> for service::overtime::OvertimeRecord {
    fn from(record: &OvertimeRecordTO) -> Self {
        Self {
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
            created: record.created,
            deleted: record.deleted,
            version: record.version,
        }
    }
}

/// A spreadsheet cell, sheets deliver numbers for dates and employee numbers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellTO {
    Text(Arc<str>),
    Number(f64),
}
impl CellTO {
    pub fn as_text(&self) -> Arc<str> {
        match self {
            CellTO::Text(text) => text.clone(),
            CellTO::Number(number) => number.to_string().into(),
        }
    }
}

/// One uploaded overtime sheet row, column names of the sheet are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImportRowTO {
    #[serde(default, alias = "NIK", alias = "nik")]
    pub employee_id: Option<CellTO>,
    #[serde(default, alias = "TANGGAL", alias = "Tanggal")]
    pub date: Option<CellTO>,
    #[serde(default, alias = "NAMA LENGKAP", alias = "Nama Lengkap")]
    pub employee_name: Option<CellTO>,
    #[serde(default, alias = "DEPARTEMEN", alias = "Departemen")]
    pub department: Option<CellTO>,
    #[serde(default, alias = "JABATAN", alias = "Jabatan")]
    pub title: Option<CellTO>,
    #[serde(default, alias = "JENIS LEMBUR", alias = "Jenis Lembur")]
    pub category: Option<CellTO>,
    #[serde(
        default,
        alias = "JAM LEMBUR",
        alias = "JAM LEMBUR ",
        alias = "Jam Lembur"
    )]
    pub hours: Option<CellTO>,
    #[serde(default, alias = "INSENTIF KOPI", alias = "Insentif Kopi")]
    pub coffee_incentive: Option<CellTO>,
    #[serde(default, alias = "KETERANGAN", alias = "Keterangan")]
    pub note: Option<CellTO>,
}
#[cfg(feature = "service-impl")]
impl From<&ImportRowTO> for service::overtime::ImportRow {
    fn from(row: &ImportRowTO) -> Self {
        let text = |cell: &Option<CellTO>| cell.as_ref().map(CellTO::as_text);
        Self {
            employee_id: text(&row.employee_id),
            date: text(&row.date),
            employee_name: text(&row.employee_name),
            department: text(&row.department),
            title: text(&row.title),
            category: text(&row.category),
            hours: text(&row.hours),
            coffee_incentive: text(&row.coffee_incentive),
            note: text(&row.note),
        }
    }
}
#[cfg(feature = "service-impl")]
impl From<&service::overtime::ImportRow> for ImportRowTO {
    fn from(row: &service::overtime::ImportRow) -> Self {
        let cell = |value: &Option<Arc<str>>| value.clone().map(CellTO::Text);
        Self {
            employee_id: cell(&row.employee_id),
            date: cell(&row.date),
            employee_name: cell(&row.employee_name),
            department: cell(&row.department),
            title: cell(&row.title),
            category: cell(&row.category),
            hours: cell(&row.hours),
            coffee_incentive: cell(&row.coffee_incentive),
            note: cell(&row.note),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImportResultTO {
    pub imported: Arc<[OvertimeRecordTO]>,
    pub duplicates: Arc<[ImportRowTO]>,
    pub skipped: usize,
}
#[cfg(feature = "service-impl")]
impl From<&service::overtime::ImportResult> for ImportResultTO {
    fn from(result: &service::overtime::ImportResult) -> Self {
        Self {
            imported: result.imported.iter().map(OvertimeRecordTO::from).collect(),
            duplicates: result.duplicates.iter().map(ImportRowTO::from).collect(),
            skipped: result.skipped,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportLineTO {
    pub record: OvertimeRecordTO,
    pub hours: i64,
    pub incentive: i64,
}
#[cfg(feature = "service-impl")]
impl From<&service::report::ReportLine> for ReportLineTO {
    fn from(line: &service::report::ReportLine) -> Self {
        Self {
            record: (&line.record).into(),
            hours: line.hours,
            incentive: line.incentive,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmployeeRecapTO {
    pub employee_id: Arc<str>,
    pub employee_name: Arc<str>,
    pub record_count: usize,
    pub total_hours: i64,
    pub total_incentive: i64,
}
#[cfg(feature = "service-impl")]
impl From<&service::report::EmployeeRecap> for EmployeeRecapTO {
    fn from(recap: &service::report::EmployeeRecap) -> Self {
        Self {
            employee_id: recap.employee_id.clone(),
            employee_name: recap.employee_name.clone(),
            record_count: recap.record_count,
            total_hours: recap.total_hours,
            total_incentive: recap.total_incentive,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeriodSummaryTO {
    pub period: Option<CutOffPeriodTO>,
    pub employee_count: usize,
    pub record_count: usize,
    pub total_hours: i64,
    pub total_incentive: i64,
    pub lines: Arc<[ReportLineTO]>,
    pub recap: Arc<[EmployeeRecapTO]>,
}
#[cfg(feature = "service-impl")]
impl From<&service::report::PeriodSummary> for PeriodSummaryTO {
    fn from(summary: &service::report::PeriodSummary) -> Self {
        Self {
            period: summary.period.as_ref().map(CutOffPeriodTO::from),
            employee_count: summary.employee_count,
            record_count: summary.record_count,
            total_hours: summary.total_hours,
            total_incentive: summary.total_incentive,
            lines: summary.lines.iter().map(ReportLineTO::from).collect(),
            recap: summary.recap.iter().map(EmployeeRecapTO::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmployeeSummaryTO {
    pub employee: EmployeeTO,
    pub period: Option<CutOffPeriodTO>,
    pub total_hours: i64,
    pub total_incentive: i64,
    pub workday_count: usize,
    pub holiday_count: usize,
    pub lines: Arc<[ReportLineTO]>,
}
#[cfg(feature = "service-impl")]
impl From<&service::report::EmployeeSummary> for EmployeeSummaryTO {
    fn from(summary: &service::report::EmployeeSummary) -> Self {
        Self {
            employee: (&summary.employee).into(),
            period: summary.period.as_ref().map(CutOffPeriodTO::from),
            total_hours: summary.total_hours,
            total_incentive: summary.total_incentive,
            workday_count: summary.workday_count,
            holiday_count: summary.holiday_count,
            lines: summary.lines.iter().map(ReportLineTO::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IncentiveTO {
    pub hours: i64,
    pub holiday: bool,
    pub supervisor: bool,
    pub incentive: i64,
}

#[cfg(feature = "service-impl")]
lembur_utils::derive_from_reference!(service::employee::Employee, EmployeeTO);
#[cfg(feature = "service-impl")]
lembur_utils::derive_from_reference!(service::cut_off::CutOffPeriod, CutOffPeriodTO);
#[cfg(feature = "service-impl")]
lembur_utils::derive_from_reference!(service::overtime::OvertimeRecord, OvertimeRecordTO);
