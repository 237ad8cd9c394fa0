use std::sync::Arc;

mod cut_off;
mod employee;
mod incentive;
mod overtime;
mod report;

use axum::{body::Body, response::Response, Router};
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Service error")]
    ServiceError(#[from] ServiceError),

    #[error("Inconsistent id. Got {0} in path but {1} in body")]
    InconsistentId(Uuid, Uuid),

    #[error("Inconsistent employee id. Got {0} in path but {1} in body")]
    InconsistentEmployeeId(Arc<str>, Arc<str>),

    #[error("Could not serialize response: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not build response: {0}")]
    ResponseError(#[from] http::Error),
}

fn status_response(status: u16, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = http::StatusCode::from_u16(status)
        .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
    response
}

fn error_handler(result: Result<Response, RestError>) -> Response {
    match result {
        Ok(response) => response,
        Err(err @ RestError::InconsistentId(_, _))
        | Err(err @ RestError::InconsistentEmployeeId(_, _)) => {
            status_response(400, Body::new(err.to_string()))
        }
        Err(err @ RestError::SerializationError(_)) | Err(err @ RestError::ResponseError(_)) => {
            error!("{}", err);
            status_response(500, Body::new(err.to_string()))
        }
        Err(RestError::ServiceError(ServiceError::DatabaseQueryError(e))) => {
            error!("Database error: {}", e);
            status_response(500, Body::new(e.to_string()))
        }
        Err(RestError::ServiceError(err @ ServiceError::InternalError)) => {
            status_response(500, Body::new(err.to_string()))
        }
        Err(RestError::ServiceError(ServiceError::EntityNotFound(id))) => {
            status_response(404, Body::new(id.to_string()))
        }
        Err(RestError::ServiceError(ServiceError::EmployeeNotFound(id))) => {
            status_response(404, Body::new(id.to_string()))
        }
        Err(RestError::ServiceError(ServiceError::EmployeeAlreadyExists(id))) => {
            status_response(409, Body::new(id.to_string()))
        }
        Err(RestError::ServiceError(err @ ServiceError::EntityConflicts(_, _, _)))
        | Err(RestError::ServiceError(err @ ServiceError::EmployeeConflicts(_, _, _))) => {
            status_response(409, Body::new(err.to_string()))
        }
        Err(RestError::ServiceError(err @ ServiceError::ValidationError(_)))
        | Err(RestError::ServiceError(err @ ServiceError::IdSetOnCreate))
        | Err(RestError::ServiceError(err @ ServiceError::VersionSetOnCreate))
        | Err(RestError::ServiceError(err @ ServiceError::DateOrderWrong(_, _))) => {
            status_response(422, Body::new(err.to_string()))
        }
    }
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response, RestError> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::new(serde_json::to_string(body)?))?)
}

fn empty_response(status: u16) -> Result<Response, RestError> {
    Ok(Response::builder().status(status).body(Body::empty())?)
}

pub trait RestStateDef: Clone + Send + Sync + 'static {
    type EmployeeService: service::employee::EmployeeService + Send + Sync + 'static;
    type CutOffService: service::cut_off::CutOffService + Send + Sync + 'static;
    type OvertimeService: service::overtime::OvertimeService + Send + Sync + 'static;
    type ReportService: service::report::ReportService + Send + Sync + 'static;

    fn employee_service(&self) -> Arc<Self::EmployeeService>;
    fn cut_off_service(&self) -> Arc<Self::CutOffService>;
    fn overtime_service(&self) -> Arc<Self::OvertimeService>;
    fn report_service(&self) -> Arc<Self::ReportService>;
}

pub fn generate_router<RestState: RestStateDef>(rest_state: RestState) -> Router {
    Router::new()
        .nest("/employee", employee::generate_route::<RestState>())
        .nest("/cut-off", cut_off::generate_route::<RestState>())
        .nest("/overtime", overtime::generate_route::<RestState>())
        .nest("/report", report::generate_route::<RestState>())
        .nest("/incentive", incentive::generate_route::<RestState>())
        .with_state(rest_state)
}

pub async fn start_server<RestState: RestStateDef>(
    rest_state: RestState,
    address: &str,
) -> Result<(), std::io::Error> {
    let app = generate_router(rest_state);
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Listening on {}", address);
    axum::serve(listener, app).await
}
