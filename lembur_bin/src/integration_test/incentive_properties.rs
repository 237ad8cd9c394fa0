use proptest::prelude::*;
use rest::RestStateDef;
use service::calculate_incentive;
use service::employee::{Employee, EmployeeService};
use service::overtime::{ImportRow, OvertimeService};
use service::report::ReportService;
use uuid::Uuid;

use crate::integration_test::TestSetup;

fn category() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Hari Kerja"),
        Just("Hari Libur"),
        Just("LIBUR NASIONAL"),
        Just(""),
    ]
}

fn entry() -> impl Strategy<Value = (u8, &'static str, u8)> {
    (0u8..=24, category(), 1u8..=28)
}

async fn stored_total(entries: &[(u8, &'static str, u8)]) -> (i64, i64) {
    let test_setup = TestSetup::new().await;
    let rest_state = &test_setup.rest_state;
    rest_state
        .employee_service()
        .create(
            &Employee {
                id: "1001".into(),
                name: "Siti Rahma".into(),
                department: "LABORATORIUM".into(),
                title: "Analis".into(),
                level_tier: "supervisor".into(),
                created: None,
                deleted: None,
                version: Uuid::nil(),
            },
            None,
        )
        .await
        .unwrap();

    let rows: Vec<ImportRow> = entries
        .iter()
        .map(|(hours, category, day)| ImportRow {
            employee_id: Some("1001".into()),
            date: Some(format!("{}/3/2024", day).into()),
            category: Some((*category).into()),
            hours: Some(format!("{} Jam", hours).into()),
            ..Default::default()
        })
        .collect();
    rest_state
        .overtime_service()
        .import(rows.into(), None)
        .await
        .unwrap();

    let summary = rest_state
        .report_service()
        .period_summary(None, None)
        .await
        .unwrap();
    (summary.total_hours, summary.total_incentive)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_report_total_matches_calculator(entries in prop::collection::vec(entry(), 0..8)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (total_hours, total_incentive) = runtime.block_on(stored_total(&entries));

        let expected_hours: i64 = entries.iter().map(|(hours, _, _)| i64::from(*hours)).sum();
        let expected_incentive: i64 = entries
            .iter()
            .map(|(hours, category, _)| {
                calculate_incentive(&format!("{} Jam", hours), category, "supervisor")
            })
            .sum();
        prop_assert_eq!(total_hours, expected_hours);
        prop_assert_eq!(total_incentive, expected_incentive);
    }
}
