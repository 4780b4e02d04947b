use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use chrono::{Local, NaiveDate};
use futures::future::{Ready, ready};
use serde::Deserialize;

use crate::error::AppError;

/// The date due statuses are measured against.
///
/// Taken from the `today=YYYY-MM-DD` query parameter when present, so
/// clients and tests can ask "as of" a given day; otherwise the local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today(pub NaiveDate);

#[derive(Deserialize)]
struct TodayQuery {
    today: Option<NaiveDate>,
}

impl FromRequest for Today {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let query = match web::Query::<TodayQuery>::from_query(req.query_string()) {
            Ok(q) => q.into_inner(),
            Err(_) => {
                return ready(Err(AppError::validation(
                    "today must be a date formatted YYYY-MM-DD",
                )
                .into()));
            }
        };

        let today = query.today.unwrap_or_else(|| Local::now().date_naive());
        ready(Ok(Today(today)))
    }
}
