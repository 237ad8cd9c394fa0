use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Router,
};
use rest_types::{EmployeeSummaryTO, PeriodSummaryTO};
use serde::Deserialize;
use service::report::ReportService;
use tracing::instrument;
use uuid::Uuid;

use crate::{error_handler, json_response, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new()
        .route("/summary", get(get_period_summary::<RestState>))
        .route("/employee/{id}", get(get_employee_summary::<RestState>))
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportRequest {
    cut_off_id: Option<Uuid>,
}

#[instrument(skip(rest_state))]
pub async fn get_period_summary<RestState: RestStateDef>(
    rest_state: State<RestState>,
    query: Query<ReportRequest>,
) -> Response {
    error_handler(
        (async {
            let summary: PeriodSummaryTO = (&rest_state
                .report_service()
                .period_summary(query.cut_off_id, None)
                .await?)
                .into();
            json_response(200, &summary)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_employee_summary<RestState: RestStateDef>(
    rest_state: State<RestState>,
    query: Query<ReportRequest>,
    Path(employee_id): Path<String>,
) -> Response {
    error_handler(
        (async {
            let summary: EmployeeSummaryTO = (&rest_state
                .report_service()
                .employee_summary(&employee_id, query.cut_off_id, None)
                .await?)
                .into();
            json_response(200, &summary)
        })
        .await,
    )
}
