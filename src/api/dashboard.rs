use actix_web::{HttpResponse, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::{SharedState, read_state};
use crate::error::AppError;
use crate::model::dashboard::{Activity, Alert, DashboardStats};
use crate::utils::today::Today;

const DEFAULT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityQuery {
    /// Maximum number of entries (default 5)
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    params(
        ("today", Query, description = "Evaluate due dates as of this day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Bonus and promotion counters", body = DashboardStats)
    ),
    tag = "Dashboard"
)]
pub async fn stats(state: SharedState, today: Today) -> Result<HttpResponse, AppError> {
    let stats = read_state(&state)?.stats(today.0);
    Ok(HttpResponse::Ok().json(stats))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/alerts",
    params(
        ("today", Query, description = "Evaluate due dates as of this day (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Overdue and upcoming bonuses, most urgent first", body = Vec<Alert>)
    ),
    tag = "Dashboard"
)]
pub async fn alerts(state: SharedState, today: Today) -> Result<HttpResponse, AppError> {
    let alerts = read_state(&state)?.alerts(today.0);
    Ok(HttpResponse::Ok().json(alerts))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    params(ActivityQuery),
    responses(
        (status = 200, description = "Latest appreciation letters and penalties", body = Vec<Activity>)
    ),
    tag = "Dashboard"
)]
pub async fn recent_activity(
    state: SharedState,
    query: web::Query<ActivityQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    let activity = read_state(&state)?.recent_activity(limit);
    Ok(HttpResponse::Ok().json(activity))
}
