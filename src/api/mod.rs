use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use actix_web::web;

use crate::error::AppError;
use crate::state::AppState;

pub mod appreciation;
pub mod dashboard;
pub mod employee;
pub mod penalty;

/// Application state as shared between actix workers.
pub type SharedState = web::Data<RwLock<AppState>>;

pub(crate) fn read_state(state: &SharedState) -> Result<RwLockReadGuard<'_, AppState>, AppError> {
    state
        .read()
        .map_err(|_| AppError::internal("application state lock poisoned"))
}

pub(crate) fn write_state(state: &SharedState) -> Result<RwLockWriteGuard<'_, AppState>, AppError> {
    state
        .write()
        .map_err(|_| AppError::internal("application state lock poisoned"))
}

/// Blank and whitespace-only text counts as missing.
pub(crate) fn required_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::RwLock;

    use actix_web::body::MessageBody;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::{App, web};
    use chrono::NaiveDate;

    use crate::model::employee::EmployeeFields;
    use crate::routes;
    use crate::state::AppState;
    use crate::store::MemoryStore;

    pub fn shared_state() -> web::Data<RwLock<AppState>> {
        let state = AppState::load(Box::new(MemoryStore::new())).unwrap();
        web::Data::new(RwLock::new(state))
    }

    /// Insert a grade3 employee directly and return its id.
    pub fn seed_employee(state: &web::Data<RwLock<AppState>>, name: &str, last_bonus: &str) -> String {
        let fields = EmployeeFields {
            name: name.to_string(),
            basic_salary: 8000.0,
            job_grade: "grade3".to_string(),
            education: "Bachelor".to_string(),
            last_bonus_date: NaiveDate::parse_from_str(last_bonus, "%Y-%m-%d").ok(),
            last_promotion_date: None,
            department: "Human Resources".to_string(),
        };
        state.write().unwrap().add_employee(fields).id
    }

    /// The API under `/api`, without rate limiting.
    pub fn app(
        state: web::Data<RwLock<AppState>>,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .service(web::scope("/api").configure(routes::api_services))
    }
}
