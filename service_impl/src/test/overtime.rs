use std::sync::Arc;

use dao::overtime::{MockOvertimeDao, OvertimeEntity};
use dao::{MockTransaction, MockTransactionDao};
use mockall::predicate::{always, eq};
use service::clock::MockClockService;
use service::cut_off::{CutOffPeriod, MockCutOffService, PeriodSelection};
use service::overtime::{ImportRow, OvertimeRecord, OvertimeService};
use service::uuid_service::MockUuidService;
use service::ValidationFailureItem;
use time::macros::{date, datetime};
use time::Date;
use uuid::{uuid, Uuid};

use crate::overtime::{OvertimeServiceDeps, OvertimeServiceImpl};
use crate::test::error_test::{
    generate_default_datetime, test_not_found, test_validation_error, test_zero_id_error,
};

pub fn default_id() -> Uuid {
    uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50600")
}
pub fn default_version() -> Uuid {
    uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50610")
}
pub fn alternate_version() -> Uuid {
    uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50611")
}
pub fn cut_off_id() -> Uuid {
    uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50620")
}

pub fn overtime_entity(id: Uuid, employee_id: &str, date: Date, hours: &str) -> OvertimeEntity {
    OvertimeEntity {
        id,
        sequence_no: "1".into(),
        employee_id: employee_id.into(),
        date,
        employee_name: "Siti Rahma".into(),
        department: "LABORATORIUM".into(),
        title: "Analis".into(),
        category: "Hari Kerja".into(),
        hours: hours.into(),
        coffee_incentive: "Tidak".into(),
        note: "".into(),
        check: "Import".into(),
        created: datetime!(2024-01-16 08:00:00),
        deleted: None,
        version: default_version(),
    }
}

pub fn default_overtime_entity() -> OvertimeEntity {
    overtime_entity(default_id(), "1001", date!(2024 - 01 - 15), "3 Jam")
}

pub fn january_period() -> CutOffPeriod {
    CutOffPeriod {
        id: cut_off_id(),
        label: "Januari 2024".into(),
        start_date: date!(2024 - 01 - 01),
        end_date: date!(2024 - 01 - 31),
        is_active: true,
        created: Some(datetime!(2023-12-20 08:00:00)),
        deleted: None,
        version: default_version(),
    }
}

fn entities_around_january() -> Arc<[OvertimeEntity]> {
    [
        overtime_entity(
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50601"),
            "1001",
            date!(2023 - 12 - 31),
            "2 Jam",
        ),
        overtime_entity(
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50602"),
            "1002",
            date!(2024 - 01 - 31),
            "4 Jam",
        ),
        overtime_entity(
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50603"),
            "1001",
            date!(2024 - 02 - 01),
            "2 Jam",
        ),
        overtime_entity(
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50604"),
            "1001",
            date!(2024 - 01 - 01),
            "6 Jam",
        ),
    ]
    .into()
}

struct OvertimeServiceDependencies {
    overtime_dao: MockOvertimeDao,
    cut_off_service: MockCutOffService,
    uuid_service: MockUuidService,
    clock_service: MockClockService,
    transaction_dao: MockTransactionDao,
}

impl OvertimeServiceDeps for OvertimeServiceDependencies {
    type Transaction = MockTransaction;
    type OvertimeDao = MockOvertimeDao;
    type CutOffService = MockCutOffService;
    type UuidService = MockUuidService;
    type ClockService = MockClockService;
    type TransactionDao = MockTransactionDao;
}

impl OvertimeServiceDependencies {
    fn build_service(self) -> OvertimeServiceImpl<OvertimeServiceDependencies> {
        OvertimeServiceImpl {
            overtime_dao: self.overtime_dao.into(),
            cut_off_service: self.cut_off_service.into(),
            uuid_service: self.uuid_service.into(),
            clock_service: self.clock_service.into(),
            transaction_dao: self.transaction_dao.into(),
        }
    }
}

fn build_dependencies() -> OvertimeServiceDependencies {
    let overtime_dao = MockOvertimeDao::new();
    let cut_off_service = MockCutOffService::new();
    let mut uuid_service = MockUuidService::new();
    let mut clock_service = MockClockService::new();
    let mut transaction_dao = MockTransactionDao::new();

    uuid_service
        .expect_new_uuid()
        .with(eq("overtime-id"))
        .returning(|_| default_id());
    uuid_service
        .expect_new_uuid()
        .with(eq("overtime-version"))
        .returning(|_| alternate_version());
    clock_service
        .expect_date_time_now()
        .returning(generate_default_datetime);
    transaction_dao
        .expect_use_transaction()
        .returning(|_| Ok(MockTransaction));
    transaction_dao.expect_commit().returning(|_| Ok(()));

    OvertimeServiceDependencies {
        overtime_dao,
        cut_off_service,
        uuid_service,
        clock_service,
        transaction_dao,
    }
}

fn ids(records: &[OvertimeRecord]) -> Vec<Uuid> {
    records.iter().map(|record| record.id).collect()
}

#[tokio::test]
async fn test_get_all() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok(entities_around_january()));
    let service = deps.build_service();

    let result = service.get_all(None).await.unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result[0], OvertimeRecord::from(&entities_around_january()[0]));
}

#[tokio::test]
async fn test_get_by_employee() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_by_employee_id()
        .with(eq("1001"), always())
        .returning(|_, _| Ok([default_overtime_entity()].into()));
    let service = deps.build_service();

    let result = service.get_by_employee(" 1001", None).await.unwrap();
    assert_eq!(ids(&result), vec![default_id()]);
}

#[tokio::test]
async fn test_get_for_explicit_period() {
    let mut deps = build_dependencies();
    deps.cut_off_service
        .expect_get()
        .with(eq(cut_off_id()), always())
        .returning(|_, _| Ok(january_period()));
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok(entities_around_january()));
    let service = deps.build_service();

    let result = service
        .get_for_period(Some(cut_off_id()), None)
        .await
        .unwrap();
    assert_eq!(
        ids(&result),
        vec![
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50602"),
            uuid!("9B8A7C6D-5E4F-4321-A0B1-C2D3E4F50604"),
        ]
    );
}

#[tokio::test]
async fn test_get_for_default_period() {
    let mut deps = build_dependencies();
    deps.cut_off_service
        .expect_get_selection()
        .returning(|_| {
            Ok(PeriodSelection {
                active: [january_period()].into(),
                default_selected: Some(january_period()),
            })
        });
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok(entities_around_january()));
    let service = deps.build_service();

    let result = service.get_for_period(None, None).await.unwrap();
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_get_for_period_without_any_period() {
    let mut deps = build_dependencies();
    deps.cut_off_service
        .expect_get_selection()
        .returning(|_| Ok(PeriodSelection::default()));
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok(entities_around_january()));
    let service = deps.build_service();

    let result = service.get_for_period(None, None).await.unwrap();
    assert_eq!(result.len(), 4);
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok(entities_around_january()));
    deps.overtime_dao
        .expect_create()
        .with(
            eq(OvertimeEntity {
                sequence_no: "5".into(),
                employee_id: "1003".into(),
                date: date!(2024 - 01 - 20),
                category: "Hari Kerja".into(),
                hours: "0 Jam".into(),
                department: "LABORATORIUM".into(),
                coffee_incentive: "Tidak".into(),
                check: "Manual".into(),
                created: generate_default_datetime(),
                version: alternate_version(),
                ..default_overtime_entity()
            }),
            eq("overtime-service"),
            always(),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    let service = deps.build_service();

    let record = OvertimeRecord {
        id: Uuid::nil(),
        sequence_no: "".into(),
        employee_id: " 1003 ".into(),
        date: date!(2024 - 01 - 20),
        category: "".into(),
        hours: "".into(),
        department: "".into(),
        coffee_incentive: "".into(),
        check: "Manual".into(),
        created: None,
        version: Uuid::nil(),
        ..OvertimeRecord::from(default_overtime_entity())
    };
    let result = service.create(&record, None).await.unwrap();
    assert_eq!(result.id, default_id());
    assert_eq!(result.sequence_no.as_ref(), "5");
}

#[tokio::test]
async fn test_create_without_employee_id() {
    let service = build_dependencies().build_service();
    let record = OvertimeRecord {
        id: Uuid::nil(),
        employee_id: "  ".into(),
        version: Uuid::nil(),
        ..OvertimeRecord::from(default_overtime_entity())
    };
    let result = service.create(&record, None).await;
    test_validation_error(
        &result,
        &ValidationFailureItem::InvalidValue("employee_id".into()),
        1,
    );
}

#[tokio::test]
async fn test_create_with_id() {
    let service = build_dependencies().build_service();
    let result = service
        .create(&OvertimeRecord::from(default_overtime_entity()), None)
        .await;
    test_zero_id_error(&result);
}

#[tokio::test]
async fn test_delete() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_by_id()
        .with(eq(default_id()), always())
        .returning(|_, _| Ok(Some(default_overtime_entity())));
    deps.overtime_dao
        .expect_update()
        .with(
            eq(OvertimeEntity {
                deleted: Some(generate_default_datetime()),
                version: alternate_version(),
                ..default_overtime_entity()
            }),
            eq("overtime-service"),
            always(),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    let service = deps.build_service();

    service.delete(default_id(), None).await.unwrap();
}

#[tokio::test]
async fn test_delete_already_deleted() {
    let mut deps = build_dependencies();
    deps.overtime_dao.expect_find_by_id().returning(|_, _| {
        Ok(Some(OvertimeEntity {
            deleted: Some(datetime!(2024-01-17 08:00:00)),
            ..default_overtime_entity()
        }))
    });
    let service = deps.build_service();

    let result = service.delete(default_id(), None).await;
    test_not_found(&result, &default_id());
}

fn row(employee_id: Option<&str>, date: Option<&str>, hours: Option<&str>) -> ImportRow {
    ImportRow {
        employee_id: employee_id.map(Arc::from),
        date: date.map(Arc::from),
        hours: hours.map(Arc::from),
        employee_name: Some("Budi".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_import() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok([default_overtime_entity()].into()));
    deps.overtime_dao
        .expect_create()
        .with(
            eq(OvertimeEntity {
                sequence_no: "2".into(),
                employee_id: "1002".into(),
                date: date!(2024 - 01 - 15),
                employee_name: "Budi".into(),
                title: "".into(),
                hours: "0 Jam".into(),
                created: generate_default_datetime(),
                version: alternate_version(),
                ..default_overtime_entity()
            }),
            eq("overtime-service"),
            always(),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    deps.overtime_dao
        .expect_create()
        .with(
            eq(OvertimeEntity {
                sequence_no: "3".into(),
                employee_id: "1001".into(),
                date: date!(2024 - 01 - 15),
                employee_name: "Budi".into(),
                title: "".into(),
                category: "Hari Libur".into(),
                hours: "5 Jam".into(),
                created: generate_default_datetime(),
                version: alternate_version(),
                ..default_overtime_entity()
            }),
            eq("overtime-service"),
            always(),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    let service = deps.build_service();

    let holiday = ImportRow {
        category: Some("Hari Libur".into()),
        ..row(Some("1001"), Some("45306"), Some("5 Jam"))
    };
    let rows: Arc<[ImportRow]> = [
        row(Some("1001"), Some("2024-01-15"), Some("3 Jam")),
        row(Some(" 1002 "), Some("15/1/2024"), None),
        row(None, Some("2024-01-15"), Some("3 Jam")),
        row(Some("1003"), None, Some("3 Jam")),
        row(Some("1003"), Some("kemarin"), Some("3 Jam")),
        holiday,
        row(Some("1001"), Some("2024-01-15T00:00:00.000Z"), Some("3 Jam")),
        row(Some(""), Some("2024-01-15"), Some("3 Jam")),
    ]
    .into();

    let result = service.import(rows.clone(), None).await.unwrap();
    assert_eq!(result.imported.len(), 2);
    assert_eq!(result.imported[0].employee_id.as_ref(), "1002");
    assert_eq!(result.imported[0].check.as_ref(), "Import");
    assert_eq!(result.imported[1].sequence_no.as_ref(), "3");
    assert_eq!(
        result.duplicates.as_ref(),
        &[rows[0].clone(), rows[6].clone()]
    );
    assert_eq!(result.skipped, 4);
}

#[tokio::test]
async fn test_import_nothing() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok([].into()));
    let service = deps.build_service();

    let result = service.import([].into(), None).await.unwrap();
    assert!(result.imported.is_empty());
    assert!(result.duplicates.is_empty());
    assert_eq!(result.skipped, 0);
}

#[tokio::test]
async fn test_import_skips_out_of_range_serial_date() {
    let mut deps = build_dependencies();
    deps.overtime_dao
        .expect_find_all()
        .returning(|_| Ok([].into()));
    deps.overtime_dao.expect_create().never();
    let service = deps.build_service();

    let rows: Arc<[ImportRow]> = [
        row(Some("1001"), Some("200000000000000"), Some("3 Jam")),
        row(Some("1002"), Some("9223372036854775807"), Some("2 Jam")),
    ]
    .into();
    let result = service.import(rows, None).await.unwrap();
    assert!(result.imported.is_empty());
    assert!(result.duplicates.is_empty());
    assert_eq!(result.skipped, 2);
}
