use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use rest_types::{CutOffPeriodTO, PeriodSelectionTO};
use service::cut_off::CutOffService;
use tracing::instrument;
use uuid::Uuid;

use crate::{empty_response, error_handler, json_response, RestError, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new()
        .route("/", get(get_all_cut_offs::<RestState>))
        .route("/", post(create_cut_off::<RestState>))
        .route("/selection", get(get_selection::<RestState>))
        .route(
            "/{id}",
            get(get_cut_off::<RestState>)
                .put(update_cut_off::<RestState>)
                .delete(delete_cut_off::<RestState>),
        )
        .route("/{id}/active/{active}", put(set_active::<RestState>))
        .route("/{id}/toggle-active", post(toggle_active::<RestState>))
}

#[instrument(skip(rest_state))]
pub async fn get_all_cut_offs<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    error_handler(
        (async {
            let periods: Arc<[CutOffPeriodTO]> = rest_state
                .cut_off_service()
                .get_all(None)
                .await?
                .iter()
                .map(CutOffPeriodTO::from)
                .collect();
            json_response(200, &periods)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_selection<RestState: RestStateDef>(rest_state: State<RestState>) -> Response {
    error_handler(
        (async {
            let selection =
                PeriodSelectionTO::from(&rest_state.cut_off_service().get_selection(None).await?);
            json_response(200, &selection)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn get_cut_off<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(cut_off_id): Path<Uuid>,
) -> Response {
    error_handler(
        (async {
            let period = CutOffPeriodTO::from(&rest_state.cut_off_service().get(cut_off_id, None).await?);
            json_response(200, &period)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn create_cut_off<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Json(period): Json<CutOffPeriodTO>,
) -> Response {
    error_handler(
        (async {
            let period = CutOffPeriodTO::from(
                &rest_state
                    .cut_off_service()
                    .create(&(&period).into(), None)
                    .await?,
            );
            json_response(201, &period)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn update_cut_off<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(cut_off_id): Path<Uuid>,
    Json(period): Json<CutOffPeriodTO>,
) -> Response {
    error_handler(
        (async {
            if cut_off_id != period.id {
                return Err(RestError::InconsistentId(cut_off_id, period.id));
            }
            let period = CutOffPeriodTO::from(
                &rest_state
                    .cut_off_service()
                    .update(&(&period).into(), None)
                    .await?,
            );
            json_response(200, &period)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn delete_cut_off<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(cut_off_id): Path<Uuid>,
) -> Response {
    error_handler(
        (async {
            rest_state.cut_off_service().delete(cut_off_id, None).await?;
            empty_response(204)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn set_active<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path((cut_off_id, active)): Path<(Uuid, bool)>,
) -> Response {
    error_handler(
        (async {
            let period = CutOffPeriodTO::from(
                &rest_state
                    .cut_off_service()
                    .set_active(cut_off_id, active, None)
                    .await?,
            );
            json_response(200, &period)
        })
        .await,
    )
}

#[instrument(skip(rest_state))]
pub async fn toggle_active<RestState: RestStateDef>(
    rest_state: State<RestState>,
    Path(cut_off_id): Path<Uuid>,
) -> Response {
    error_handler(
        (async {
            let period = CutOffPeriodTO::from(
                &rest_state
                    .cut_off_service()
                    .toggle_active(cut_off_id, None)
                    .await?,
            );
            json_response(200, &period)
        })
        .await,
    )
}
