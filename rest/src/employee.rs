use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use rest_types::EmployeeTO;
use service::employee::EmployeeService;
use tracing::instrument;

use crate::{empty_response, error_handler, json_response, RestError, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new()
        .route("/", get(get_all_employees::<RestState>))
        .route("/", post(create_employee::<RestState>))
        .route(
            "/{id}",
            get(get_employee::<RestState>)
                .put(update_employee::<RestState>)
                .delete(delete_employee::<RestState>),
        )
}

#[instrument(skip(rest_state))]
pub async fn get_all_employees<RestState: RestStateDef>(
    rest_state: State<RestState>,
) -> Response {
    error_handler(
        (async {
            let employees: Arc<[EmployeeTO]> = rest_state
                .employee_service()
                .get_all(None)
                .await?
                .iter()
                .map(EmployeeTO::from)
                .collect();
            json_response(200, &employees)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_employee<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(employee_id): Path<String>,
) -> Response {
    error_handler(
        (async {
            let employee =
                EmployeeTO::from(&rest_state.employee_service().get(&employee_id, None).await?);
            json_response(200, &employee)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn create_employee<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Json(employee): Json<EmployeeTO>,
) -> Response {
    error_handler(
        (async {
            let employee = EmployeeTO::from(
                &rest_state
                    .employee_service()
                    .create(&(&employee).into(), None)
                    .await?,
            );
            json_response(201, &employee)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn update_employee<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(employee_id): Path<String>,
    Json(employee): Json<EmployeeTO>,
) -> Response {
    error_handler(
        (async {
            if employee_id.as_str() != employee.id.as_ref() {
                return Err(RestError::InconsistentEmployeeId(
                    employee_id.as_str().into(),
                    employee.id.clone(),
                ));
            }
            let employee = EmployeeTO::from(
                &rest_state
                    .employee_service()
                    .update(&(&employee).into(), None)
                    .await?,
            );
            json_response(200, &employee)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn delete_employee<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(employee_id): Path<String>,
) -> Response {
    error_handler(
        (async {
            rest_state
                .employee_service()
                .delete(&employee_id, None)
                .await?;
            empty_response(204)
        })
        .await,
    )
}
