use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    #[schema(example = "c4d5e6f7-8a9b-4c0d-9e1f-2a3b4c5d6e7f")]
    pub id: String,

    #[schema(example = "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44")]
    pub employee_id: String,

    #[schema(example = "2023-07-20", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// Free-text penalty type, e.g. "Warning"
    #[serde(rename = "type")]
    #[schema(example = "Warning")]
    pub penalty_type: String,

    /// Months the next bonus/promotion is pushed back
    #[schema(example = 1)]
    pub months_delayed: u32,

    #[schema(example = "Late project delivery")]
    pub reason: String,
}

/// Penalty as listed, with the owning employee's name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyRow {
    #[serde(flatten)]
    pub penalty: Penalty,
    #[schema(example = "Mohammed Abdullah Al-Khalid")]
    pub employee_name: String,
}
