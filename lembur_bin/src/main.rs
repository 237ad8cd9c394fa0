#[cfg(test)]
mod integration_test;

use std::sync::Arc;

use dao_impl_sqlite::{
    cut_off::CutOffDaoImpl, employee::EmployeeDaoImpl, overtime::OvertimeDaoImpl,
    TransactionDaoImpl, TransactionImpl,
};
use service::config::ConfigService as _;
use sqlx::SqlitePool;
#[cfg(feature = "json_logging")]
use tracing_subscriber::fmt::format::FmtSpan;

type Transaction = TransactionImpl;
type TransactionDao = TransactionDaoImpl;
type EmployeeDao = EmployeeDaoImpl;
type CutOffDao = CutOffDaoImpl;
type OvertimeDao = OvertimeDaoImpl;

type ConfigService = service_impl::config::ConfigServiceImpl;
type ClockService = service_impl::clock::ClockServiceImpl;
type UuidService = service_impl::uuid_service::UuidServiceImpl;

pub struct EmployeeServiceDependencies;
impl service_impl::employee::EmployeeServiceDeps for EmployeeServiceDependencies {
    type Transaction = Transaction;
    type EmployeeDao = EmployeeDao;
    type ConfigService = ConfigService;
    type UuidService = UuidService;
    type ClockService = ClockService;
    type TransactionDao = TransactionDao;
}
type EmployeeService =
    service_impl::employee::EmployeeServiceImpl<EmployeeServiceDependencies>;

pub struct CutOffServiceDependencies;
impl service_impl::cut_off::CutOffServiceDeps for CutOffServiceDependencies {
    type Transaction = Transaction;
    type CutOffDao = CutOffDao;
    type UuidService = UuidService;
    type ClockService = ClockService;
    type TransactionDao = TransactionDao;
}
type CutOffService = service_impl::cut_off::CutOffServiceImpl<CutOffServiceDependencies>;

pub struct OvertimeServiceDependencies;
impl service_impl::overtime::OvertimeServiceDeps for OvertimeServiceDependencies {
    type Transaction = Transaction;
    type OvertimeDao = OvertimeDao;
    type CutOffService = CutOffService;
    type UuidService = UuidService;
    type ClockService = ClockService;
    type TransactionDao = TransactionDao;
}
type OvertimeService = service_impl::overtime::OvertimeServiceImpl<OvertimeServiceDependencies>;

pub struct ReportServiceDependencies;
impl service_impl::report::ReportServiceDeps for ReportServiceDependencies {
    type Transaction = Transaction;
    type OvertimeService = OvertimeService;
    type EmployeeService = EmployeeService;
    type CutOffService = CutOffService;
    type TransactionDao = TransactionDao;
}
type ReportService = service_impl::report::ReportServiceImpl<ReportServiceDependencies>;

#[derive(Clone)]
pub struct RestStateImpl {
    employee_service: Arc<EmployeeService>,
    cut_off_service: Arc<CutOffService>,
    overtime_service: Arc<OvertimeService>,
    report_service: Arc<ReportService>,
}
impl rest::RestStateDef for RestStateImpl {
    type EmployeeService = EmployeeService;
    type CutOffService = CutOffService;
    type OvertimeService = OvertimeService;
    type ReportService = ReportService;

    fn employee_service(&self) -> Arc<Self::EmployeeService> {
        self.employee_service.clone()
    }
    fn cut_off_service(&self) -> Arc<Self::CutOffService> {
        self.cut_off_service.clone()
    }
    fn overtime_service(&self) -> Arc<Self::OvertimeService> {
        self.overtime_service.clone()
    }
    fn report_service(&self) -> Arc<Self::ReportService> {
        self.report_service.clone()
    }
}
impl RestStateImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let transaction_dao = Arc::new(TransactionDao::new(pool.clone()));
        let employee_dao = Arc::new(EmployeeDao::new(pool.clone()));
        let cut_off_dao = Arc::new(CutOffDao::new(pool.clone()));
        let overtime_dao = Arc::new(OvertimeDao::new(pool));

        let config_service = Arc::new(ConfigService {});
        let clock_service = Arc::new(ClockService {});
        let uuid_service = Arc::new(UuidService {});

        let employee_service = Arc::new(service_impl::employee::EmployeeServiceImpl {
            employee_dao,
            config_service,
            uuid_service: uuid_service.clone(),
            clock_service: clock_service.clone(),
            transaction_dao: transaction_dao.clone(),
        });
        let cut_off_service = Arc::new(service_impl::cut_off::CutOffServiceImpl {
            cut_off_dao,
            uuid_service: uuid_service.clone(),
            clock_service: clock_service.clone(),
            transaction_dao: transaction_dao.clone(),
        });
        let overtime_service = Arc::new(service_impl::overtime::OvertimeServiceImpl {
            overtime_dao,
            cut_off_service: cut_off_service.clone(),
            uuid_service,
            clock_service,
            transaction_dao: transaction_dao.clone(),
        });
        let report_service = Arc::new(service_impl::report::ReportServiceImpl {
            overtime_service: overtime_service.clone(),
            employee_service: employee_service.clone(),
            cut_off_service: cut_off_service.clone(),
            transaction_dao,
        });

        Self {
            employee_service,
            cut_off_service,
            overtime_service,
            report_service,
        }
    }
}

#[tokio::main]
async fn main() {
    let version = env!("CARGO_PKG_VERSION");

    #[cfg(feature = "json_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_span_list(true)
        .with_file(true)
        .finish();

    #[cfg(all(feature = "local_logging", not(feature = "json_logging")))]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .with_file(true)
        .finish();

    #[cfg(not(any(feature = "local_logging", feature = "json_logging")))]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("Lembur backend version: {}", version);
    dotenvy::dotenv().ok();
    let config = ConfigService {}
        .get_config()
        .await
        .expect("Could not read configuration");

    let pool = Arc::new(
        SqlitePool::connect(&config.database_url)
            .await
            .expect("Could not connect to database"),
    );

    sqlx::migrate!("../migrations/sqlite")
        .run(pool.as_ref())
        .await
        .expect("Failed to run migrations");

    let rest_state = RestStateImpl::new(pool);
    rest::start_server(rest_state, &config.server_address)
        .await
        .expect("Could not start server");
}
