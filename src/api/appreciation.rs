use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::{SharedState, read_state, required_text, write_state};
use crate::error::AppError;
use crate::model::appreciation_letter::{AppreciationLetter, LetterRow};
use crate::state::NewLetter;
use crate::utils::form;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLetter {
    #[schema(example = "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44")]
    pub employee_id: String,
    #[schema(example = "2023-08-15", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[serde(default)]
    #[schema(example = "Outstanding job performance")]
    pub reason: String,
    /// Number or numeric string
    #[serde(deserialize_with = "form::months")]
    #[schema(example = 2, value_type = u32)]
    pub months_advanced: u32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LetterQuery {
    /// Only letters for this employee
    pub employee_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/appreciation-letters",
    request_body = CreateLetter,
    responses(
        (status = 201, description = "Appreciation letter added", body = AppreciationLetter),
        (status = 400, description = "Invalid input, e.g. non-numeric monthsAdvanced"),
        (status = 422, description = "Employee does not exist", body = Object, example = json!({
            "message": "Employee 42 does not exist"
        }))
    ),
    tag = "Appreciation"
)]
#[instrument(name = "letter_create", skip(state, payload), fields(employee_id = %payload.employee_id))]
pub async fn create_letter(
    state: SharedState,
    payload: web::Json<CreateLetter>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let new = NewLetter {
        employee_id: required_text("employeeId", payload.employee_id)?,
        date: payload.date,
        reason: payload.reason.trim().to_string(),
        months_advanced: payload.months_advanced,
    };

    let letter = write_state(&state)?.add_letter(new)?;
    Ok(HttpResponse::Created().json(letter))
}

#[utoipa::path(
    get,
    path = "/api/appreciation-letters",
    params(LetterQuery),
    responses(
        (status = 200, description = "Letters of existing employees", body = Vec<LetterRow>)
    ),
    tag = "Appreciation"
)]
pub async fn list_letters(
    state: SharedState,
    query: web::Query<LetterQuery>,
) -> Result<HttpResponse, AppError> {
    let rows = read_state(&state)?.letter_rows(query.employee_id.as_deref());
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    delete,
    path = "/api/appreciation-letters/{letter_id}",
    params(
        ("letter_id", Path, description = "Appreciation letter ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Appreciation letter not found")
    ),
    tag = "Appreciation"
)]
pub async fn delete_letter(
    state: SharedState,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let letter_id = path.into_inner();
    write_state(&state)?.delete_letter(&letter_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
