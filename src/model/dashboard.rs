use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::due_status::DueSeverity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[schema(example = 1)]
    pub overdue_bonuses: usize,
    #[schema(example = 2)]
    pub upcoming_bonuses: usize,
    #[schema(example = 1)]
    pub due_promotions: usize,
    #[schema(example = 3)]
    pub total_employees: usize,
}

/// A bonus that is overdue or coming up soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub employee_id: String,
    #[schema(example = "overdue")]
    pub severity: DueSeverity,
    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub due_date: NaiveDate,
    #[schema(example = "علاوة Ahmed Mohammed Ali مستحقة منذ 2024-01-15")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Appreciation,
    Penalty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: ActivityKind,
    pub employee_id: String,
    #[schema(example = "تم إضافة خطاب شكر لـ Ahmed Mohammed Ali")]
    pub message: String,
    #[schema(example = "2023-08-15", value_type = String, format = "date")]
    pub date: NaiveDate,
}
