use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification of a due date against today.
///
/// Variant order is alert priority: an overdue item outranks an upcoming one,
/// which outranks a future one. Unset dates sort last.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DueSeverity {
    Overdue,
    Upcoming,
    Future,
    Unspecified,
}

impl DueSeverity {
    /// Display label shown next to a due date.
    pub fn label(self) -> &'static str {
        match self {
            DueSeverity::Overdue => "مستحق",
            DueSeverity::Upcoming => "قريباً",
            DueSeverity::Future => "غير مستحق",
            DueSeverity::Unspecified => "غير محدد",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DueStatus {
    #[schema(example = "قريباً", value_type = String)]
    pub label: &'static str,

    #[schema(example = "upcoming")]
    pub severity: DueSeverity,

    /// Signed whole days from today to the due date; absent when the date is unset
    #[schema(example = 12, nullable = true)]
    pub days_remaining: Option<i64>,
}

impl DueStatus {
    pub fn new(severity: DueSeverity, days_remaining: Option<i64>) -> Self {
        Self {
            label: severity.label(),
            severity,
            days_remaining,
        }
    }
}
