use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::{SharedState, read_state, required_text, write_state};
use crate::error::AppError;
use crate::model::{
    due_status::DueSeverity,
    employee::{Employee, EmployeeFields, EmployeeRow},
};
use crate::state::EmployeeFilter;
use crate::utils::{form, today::Today};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[schema(example = "Ahmed Mohammed Ali")]
    pub name: String,
    #[schema(example = 8000.0)]
    pub basic_salary: f64,
    #[schema(example = "grade3")]
    pub job_grade: String,
    #[serde(default)]
    #[schema(example = "Bachelor")]
    pub education: String,
    #[serde(default, deserialize_with = "form::optional_date")]
    #[schema(example = "2023-01-15", value_type = Option<String>, format = "date", nullable = true)]
    pub last_bonus_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::optional_date")]
    #[schema(example = "2021-06-01", value_type = Option<String>, format = "date", nullable = true)]
    pub last_promotion_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(example = "Human Resources")]
    pub department: String,
}

impl EmployeeInput {
    fn validate(self) -> Result<EmployeeFields, AppError> {
        if !self.basic_salary.is_finite() || self.basic_salary < 0.0 {
            return Err(AppError::validation(
                "basicSalary must be a non-negative number",
            ));
        }

        Ok(EmployeeFields {
            name: required_text("name", self.name)?,
            basic_salary: self.basic_salary,
            job_grade: required_text("jobGrade", self.job_grade)?,
            education: self.education.trim().to_string(),
            last_bonus_date: self.last_bonus_date,
            last_promotion_date: self.last_promotion_date,
            department: self.department.trim().to_string(),
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Items per page (1-100)
    pub per_page: Option<u32>,
    /// Case-insensitive name search
    pub search: Option<String>,
    /// Bonus status: overdue, upcoming or future (future includes unset dates)
    #[param(value_type = Option<String>)]
    pub status: Option<DueSeverity>,
    pub department: Option<String>,
    pub job_grade: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeRow>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 3)]
    pub total: usize,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid input", body = Object, example = json!({
            "message": "name must not be empty"
        }))
    ),
    tag = "Employee"
)]
#[instrument(name = "employee_create", skip(state, payload), fields(name = %payload.name))]
pub async fn create_employee(
    state: SharedState,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let fields = payload.into_inner().validate()?;
    let employee = write_state(&state)?.add_employee(fields);

    debug!(employee_id = %employee.id, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(
        EmployeeQuery,
        ("today", Query, description = "Evaluate due dates as of this day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Paginated employee list with due dates", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    state: SharedState,
    query: web::Query<EmployeeQuery>,
    today: Today,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    // out-of-range pages saturate and come back empty
    let offset = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page as usize);

    let filter = EmployeeFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        status: query.status,
        department: query.department,
        job_grade: query.job_grade,
    };
    debug!(?filter, page, per_page, today = %today.0, "Listing employees");

    let rows = read_state(&state)?.employee_rows(&filter, today.0);
    let total = rows.len();
    let data = rows.into_iter().skip(offset).take(per_page as usize).collect();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        data,
        page,
        per_page,
        total,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("today", Query, description = "Evaluate due dates as of this day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeRow),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 42 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    state: SharedState,
    path: web::Path<String>,
    today: Today,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let row = read_state(&state)?.employee_row_by_id(&employee_id, today.0)?;
    Ok(HttpResponse::Ok().json(row))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 42 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    state: SharedState,
    path: web::Path<String>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let fields = payload.into_inner().validate()?;

    let employee = write_state(&state)?.update_employee(&employee_id, fields)?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee together with its appreciation letters and penalties
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted",
            "lettersRemoved": 1,
            "penaltiesRemoved": 0
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: SharedState,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let removed = write_state(&state)?.delete_employee(&employee_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted",
        "lettersRemoved": removed.letters_removed,
        "penaltiesRemoved": removed.penalties_removed
    })))
}
