use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{delete, get, post},
    Json, Router,
};
use rest_types::{ImportResultTO, ImportRowTO, OvertimeRecordTO};
use serde::Deserialize;
use service::overtime::{ImportRow, OvertimeService};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{empty_response, error_handler, json_response, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new()
        .route("/", get(get_all_overtime::<RestState>))
        .route("/", post(create_overtime::<RestState>))
        .route("/employee/{id}", get(get_overtime_by_employee::<RestState>))
        .route("/period", get(get_overtime_for_period::<RestState>))
        .route("/import", post(import_overtime::<RestState>))
        .route("/{id}", delete(delete_overtime::<RestState>))
}

#[derive(Clone, Debug, Deserialize)]
pub struct PeriodQuery {
    pub cut_off_id: Option<Uuid>,
}

fn to_transport(records: &[service::overtime::OvertimeRecord]) -> Arc<[OvertimeRecordTO]> {
    records.iter().map(OvertimeRecordTO::from).collect()
}

#[instrument(skip(rest_state))]
pub async fn get_all_overtime<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    error_handler(
        (async {
            let records = to_transport(&rest_state.overtime_service().get_all(None).await?);
            json_response(200, &records)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_overtime_by_employee<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(employee_id): Path<String>,
) -> Response {
    error_handler(
        (async {
            let records = to_transport(
                &rest_state
                    .overtime_service()
                    .get_by_employee(&employee_id, None)
                    .await?,
            );
            json_response(200, &records)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_overtime_for_period<RestState: RestStateDef>(
    rest_state: State<RestState>,
    query: Query<PeriodQuery>,
) -> Response {
    error_handler(
        (async {
            let records = to_transport(
                &rest_state
                    .overtime_service()
                    .get_for_period(query.cut_off_id, None)
                    .await?,
            );
            json_response(200, &records)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn create_overtime<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Json(record): Json<OvertimeRecordTO>,
) -> Response {
    error_handler(
        (async {
            let record = OvertimeRecordTO::from(
                &rest_state
                    .overtime_service()
                    .create(&(&record).into(), None)
                    .await?,
            );
            json_response(201, &record)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn delete_overtime<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(overtime_id): Path<Uuid>,
) -> Response {
    error_handler(
        (async {
            rest_state
                .overtime_service()
                .delete(overtime_id, None)
                .await?;
            empty_response(204)
        })
        .await,
    )
}

#[instrument(skip(rest_state, rows))]
pub async fn import_overtime<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Json(rows): Json<Vec<ImportRowTO>>,
) -> Response {
    error_handler(
        (async {
            info!("Received {} rows for import", rows.len());
            let rows: Arc<[ImportRow]> = rows.iter().map(ImportRow::from).collect();
            let result =
                ImportResultTO::from(&rest_state.overtime_service().import(rows, None).await?);
            json_response(200, &result)
        })
        .await,
    )
}
