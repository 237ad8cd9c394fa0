use std::sync::Arc;

use rest::RestStateDef;
use service::cut_off::{CutOffPeriod, CutOffService};
use service::employee::{Employee, EmployeeService};
use service::overtime::{ImportRow, OvertimeService};
use service::report::ReportService;
use service::ServiceError;
use time::macros::date;
use time::Date;
use uuid::Uuid;

use crate::integration_test::TestSetup;

fn employee(id: &str, name: &str, level_tier: &str) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        department: "LABORATORIUM".into(),
        title: "Analis".into(),
        level_tier: level_tier.into(),
        created: None,
        deleted: None,
        version: Uuid::nil(),
    }
}

fn period(label: &str, start_date: Date, end_date: Date, is_active: bool) -> CutOffPeriod {
    CutOffPeriod {
        id: Uuid::nil(),
        label: label.into(),
        start_date,
        end_date,
        is_active,
        created: None,
        deleted: None,
        version: Uuid::nil(),
    }
}

fn row(employee_id: Option<&str>, date: Option<&str>, category: &str, hours: &str) -> ImportRow {
    ImportRow {
        employee_id: employee_id.map(Arc::from),
        date: date.map(Arc::from),
        category: Some(category.into()),
        hours: Some(hours.into()),
        ..Default::default()
    }
}

async fn seed(test_setup: &TestSetup) -> (CutOffPeriod, CutOffPeriod) {
    let rest_state = &test_setup.rest_state;
    rest_state
        .employee_service()
        .create(&employee("1001", "Siti Rahma", "supervisor"), None)
        .await
        .unwrap();
    rest_state
        .employee_service()
        .create(&employee("1002", "Budi Santoso", "staff"), None)
        .await
        .unwrap();

    let january = rest_state
        .cut_off_service()
        .create(
            &period(
                "Januari 2024",
                date!(2024 - 01 - 01),
                date!(2024 - 01 - 31),
                true,
            ),
            None,
        )
        .await
        .unwrap();
    let february = rest_state
        .cut_off_service()
        .create(
            &period(
                "Februari 2024",
                date!(2024 - 02 - 01),
                date!(2024 - 02 - 29),
                true,
            ),
            None,
        )
        .await
        .unwrap();

    let result = rest_state
        .overtime_service()
        .import(
            [
                row(Some("1001"), Some("15/1/2024"), "Hari Kerja", "3 Jam"),
                row(Some("1002"), Some("2024-01-20"), "Hari Libur", "10 Jam"),
                row(Some("1002"), Some("45326"), "Hari Kerja", "2 Jam"),
                row(None, Some("2024-01-21"), "Hari Kerja", "4 Jam"),
            ]
            .into(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(result.imported.len(), 3);
    assert_eq!(result.skipped, 1);
    assert!(result.duplicates.is_empty());

    (january, february)
}

#[tokio::test]
async fn test_import_normalizes_dates_and_defaults() {
    let test_setup = TestSetup::new().await;
    seed(&test_setup).await;

    let records = test_setup
        .rest_state
        .overtime_service()
        .get_all(None)
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, date!(2024 - 01 - 15));
    assert_eq!(records[1].date, date!(2024 - 01 - 20));
    assert_eq!(records[2].date, date!(2024 - 02 - 04));
    assert_eq!(records[0].sequence_no.as_ref(), "1");
    assert_eq!(records[2].sequence_no.as_ref(), "3");
    assert_eq!(records[0].department.as_ref(), "LABORATORIUM");
    assert_eq!(records[0].coffee_incentive.as_ref(), "Tidak");
    assert_eq!(records[0].check.as_ref(), "Import");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM overtime")
        .fetch_one(test_setup.pool.as_ref())
        .await
        .unwrap();
    assert_eq!(stored, 3);
}

#[tokio::test]
async fn test_reimport_reports_duplicates() {
    let test_setup = TestSetup::new().await;
    seed(&test_setup).await;

    let result = test_setup
        .rest_state
        .overtime_service()
        .import(
            [
                row(Some("1001"), Some("2024-01-15"), "Hari Kerja", "3 Jam"),
                row(Some("1001"), Some("2024-01-15"), "Hari Kerja", "4 Jam"),
            ]
            .into(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(result.duplicates.len(), 1);
    assert_eq!(result.imported.len(), 1);
    assert_eq!(result.imported[0].sequence_no.as_ref(), "4");
}

#[tokio::test]
async fn test_period_summary_follows_selection() {
    let test_setup = TestSetup::new().await;
    let (january, february) = seed(&test_setup).await;
    let rest_state = &test_setup.rest_state;

    let summary = rest_state
        .report_service()
        .period_summary(Some(january.id), None)
        .await
        .unwrap();
    assert_eq!(summary.employee_count, 2);
    assert_eq!(summary.record_count, 2);
    assert_eq!(summary.total_hours, 13);
    // 45000 supervisor workday + 120000 holiday
    assert_eq!(summary.total_incentive, 165_000);

    // the last active period is the default
    let summary = rest_state
        .report_service()
        .period_summary(None, None)
        .await
        .unwrap();
    assert_eq!(summary.period.as_ref().map(|p| p.id), Some(february.id));
    assert_eq!(summary.record_count, 1);
    assert_eq!(summary.total_incentive, 40_000);

    rest_state
        .cut_off_service()
        .toggle_active(february.id, None)
        .await
        .unwrap();
    let selection = rest_state
        .cut_off_service()
        .get_selection(None)
        .await
        .unwrap();
    assert_eq!(selection.active.len(), 1);
    assert_eq!(
        selection.default_selected.map(|period| period.id),
        Some(january.id)
    );

    let records = rest_state
        .overtime_service()
        .get_for_period(None, None)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_employee_summary() {
    let test_setup = TestSetup::new().await;
    seed(&test_setup).await;

    let summary = test_setup
        .rest_state
        .report_service()
        .employee_summary("1002", None, None)
        .await
        .unwrap();
    assert_eq!(summary.employee.name.as_ref(), "Budi Santoso");
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.workday_count, 1);
    assert_eq!(summary.holiday_count, 0);
}

#[tokio::test]
async fn test_deleted_period_keeps_records() {
    let test_setup = TestSetup::new().await;
    let (january, _) = seed(&test_setup).await;
    let rest_state = &test_setup.rest_state;

    rest_state
        .cut_off_service()
        .delete(january.id, None)
        .await
        .unwrap();
    let result = rest_state.cut_off_service().get(january.id, None).await;
    assert!(matches!(result, Err(ServiceError::EntityNotFound(id)) if id == january.id));
    assert_eq!(
        rest_state
            .overtime_service()
            .get_all(None)
            .await
            .unwrap()
            .len(),
        3
    );
}

#[tokio::test]
async fn test_rejects_invalid_period() {
    let test_setup = TestSetup::new().await;

    let result = test_setup
        .rest_state
        .cut_off_service()
        .create(
            &period(
                "Rusak",
                date!(2024 - 02 - 01),
                date!(2024 - 02 - 01),
                true,
            ),
            None,
        )
        .await;
    assert!(matches!(result, Err(ServiceError::DateOrderWrong(_, _))));
}
