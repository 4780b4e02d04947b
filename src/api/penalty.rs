use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::{SharedState, read_state, required_text, write_state};
use crate::error::AppError;
use crate::model::penalty::{Penalty, PenaltyRow};
use crate::state::NewPenalty;
use crate::utils::form;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePenalty {
    #[schema(example = "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44")]
    pub employee_id: String,
    #[schema(example = "2023-07-20", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(example = "Warning")]
    pub penalty_type: String,
    /// Number or numeric string
    #[serde(deserialize_with = "form::months")]
    #[schema(example = 1, value_type = u32)]
    pub months_delayed: u32,
    #[serde(default)]
    #[schema(example = "Late project delivery")]
    pub reason: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PenaltyQuery {
    /// Only penalties for this employee
    pub employee_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/penalties",
    request_body = CreatePenalty,
    responses(
        (status = 201, description = "Penalty added", body = Penalty),
        (status = 400, description = "Invalid input, e.g. non-numeric monthsDelayed"),
        (status = 422, description = "Employee does not exist")
    ),
    tag = "Penalty"
)]
#[instrument(name = "penalty_create", skip(state, payload), fields(employee_id = %payload.employee_id))]
pub async fn create_penalty(
    state: SharedState,
    payload: web::Json<CreatePenalty>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let new = NewPenalty {
        employee_id: required_text("employeeId", payload.employee_id)?,
        date: payload.date,
        penalty_type: required_text("type", payload.penalty_type)?,
        months_delayed: payload.months_delayed,
        reason: payload.reason.trim().to_string(),
    };

    let penalty = write_state(&state)?.add_penalty(new)?;
    Ok(HttpResponse::Created().json(penalty))
}

#[utoipa::path(
    get,
    path = "/api/penalties",
    params(PenaltyQuery),
    responses(
        (status = 200, description = "Penalties of existing employees", body = Vec<PenaltyRow>)
    ),
    tag = "Penalty"
)]
pub async fn list_penalties(
    state: SharedState,
    query: web::Query<PenaltyQuery>,
) -> Result<HttpResponse, AppError> {
    let rows = read_state(&state)?.penalty_rows(query.employee_id.as_deref());
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    delete,
    path = "/api/penalties/{penalty_id}",
    params(
        ("penalty_id", Path, description = "Penalty ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Penalty not found")
    ),
    tag = "Penalty"
)]
pub async fn delete_penalty(
    state: SharedState,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let penalty_id = path.into_inner();
    write_state(&state)?.delete_penalty(&penalty_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
