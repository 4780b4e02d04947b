use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};
use serde_json::json;

/// Failures surfaced by the state owner and the HTTP layer.
///
/// The calculator itself never fails; everything here is raised at the
/// boundary before data reaches it, or while talking to the store.
#[derive(Debug, Display, Error)]
pub enum AppError {
    /// Malformed input: non-numeric months, bad dates, empty names.
    #[display(fmt = "{}", message)]
    Validation { message: String },

    /// A letter or penalty points at an employee that does not exist.
    #[display(fmt = "Employee {} does not exist", employee_id)]
    Referential { employee_id: String },

    #[display(fmt = "{} {} not found", entity, id)]
    NotFound { entity: &'static str, id: String },

    #[display(fmt = "Storage error: {}", message)]
    Storage { message: String },

    #[display(fmt = "Internal error: {}", message)]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn referential(employee_id: impl Into<String>) -> Self {
        AppError::Referential {
            employee_id: employee_id.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AppError::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Referential { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the log, not the response body
        let message = match self {
            AppError::Storage { .. } | AppError::Internal { .. } => {
                "Something went wrong, Contact with system admin".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::referential("e1").status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::not_found("Employee", "e1").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::storage("disk").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_name_the_missing_record() {
        assert_eq!(AppError::not_found("Penalty", "p9").to_string(), "Penalty p9 not found");
        assert_eq!(AppError::referential("e1").to_string(), "Employee e1 does not exist");
    }
}
