use axum::{extract::Query, response::Response, routing::get, Router};
use rest_types::IncentiveTO;
use serde::Deserialize;
use service::incentive::{incentive_for_hours, LevelTier, OvertimeCategory};
use service::parse_hours;
use tracing::instrument;

use crate::{error_handler, json_response, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new().route("/", get(calculate::<RestState>))
}

/// Raw overtime sheet values, missing ones count as empty text.
#[derive(Clone, Debug, Deserialize)]
pub struct IncentiveQuery {
    #[serde(default)]
    hours: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    level: String,
}

#[instrument]
pub async fn calculate<RestState: RestStateDef>(query: Query<IncentiveQuery>) -> Response {
    let hours = parse_hours(&query.hours);
    let category = OvertimeCategory::classify(&query.category);
    let level_tier = LevelTier::classify(&query.level);
    error_handler(json_response(
        200,
        &IncentiveTO {
            hours,
            holiday: category == OvertimeCategory::Holiday,
            supervisor: level_tier == LevelTier::Supervisor,
            incentive: incentive_for_hours(hours, category, level_tier),
        },
    ))
}
