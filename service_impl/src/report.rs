use crate::gen_service_impl;
use async_trait::async_trait;
use dao::TransactionDao;
use service::{
    cut_off::{CutOffPeriod, CutOffService},
    employee::EmployeeService,
    incentive::OvertimeCategory,
    overtime::{filter_by_period, OvertimeService},
    report::{
        build_lines, count_category, recap_by_employee, total_hours, total_incentive,
        EmployeeSummary, PeriodSummary, ReportService,
    },
    ServiceError,
};
use tracing::debug;
use uuid::Uuid;

gen_service_impl! {
    struct ReportServiceImpl: ReportService = ReportServiceDeps {
        OvertimeService: OvertimeService<Transaction = Self::Transaction> = overtime_service,
        EmployeeService: EmployeeService<Transaction = Self::Transaction> = employee_service,
        CutOffService: CutOffService<Transaction = Self::Transaction> = cut_off_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

impl<Deps: ReportServiceDeps> ReportServiceImpl<Deps> {
    /// The requested period or the default selection.
    async fn report_period(
        &self,
        cut_off_id: Option<Uuid>,
        tx: Deps::Transaction,
    ) -> Result<Option<CutOffPeriod>, ServiceError> {
        Ok(match cut_off_id {
            Some(id) => Some(self.cut_off_service.get(id, Some(tx)).await?),
            None => self.cut_off_service.get_selection(Some(tx)).await?.default_selected,
        })
    }
}

#[async_trait]
impl<Deps: ReportServiceDeps> ReportService for ReportServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn period_summary(
        &self,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<PeriodSummary, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let period = self.report_period(cut_off_id, tx.clone()).await?;
        let employees = self.employee_service.get_all(Some(tx.clone())).await?;
        let records = filter_by_period(
            &self.overtime_service.get_all(Some(tx.clone())).await?,
            period.as_ref(),
        );
        let lines = build_lines(&records, &employees);
        debug!(records = lines.len(), "Build period summary");

        let summary = PeriodSummary {
            period,
            employee_count: employees.len(),
            record_count: lines.len(),
            total_hours: total_hours(&lines),
            total_incentive: total_incentive(&lines),
            recap: recap_by_employee(&lines),
            lines,
        };
        self.transaction_dao.commit(tx).await?;
        Ok(summary)
    }

    async fn employee_summary(
        &self,
        employee_id: &str,
        cut_off_id: Option<Uuid>,
        tx: Option<Self::Transaction>,
    ) -> Result<EmployeeSummary, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let employee = self.employee_service.get(employee_id, Some(tx.clone())).await?;
        let period = self.report_period(cut_off_id, tx.clone()).await?;
        let records = filter_by_period(
            &self
                .overtime_service
                .get_by_employee(&employee.id, Some(tx.clone()))
                .await?,
            period.as_ref(),
        );
        let lines = build_lines(&records, std::slice::from_ref(&employee));

        let summary = EmployeeSummary {
            period,
            total_hours: total_hours(&lines),
            total_incentive: total_incentive(&lines),
            workday_count: count_category(&lines, OvertimeCategory::Workday),
            holiday_count: count_category(&lines, OvertimeCategory::Holiday),
            lines,
            employee,
        };
        self.transaction_dao.commit(tx).await?;
        Ok(summary)
    }
}
