use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppreciationLetter {
    #[schema(example = "9b0e4f3a-1c22-4a7e-8f0d-5e6a7b8c9d01")]
    pub id: String,

    #[schema(example = "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44")]
    pub employee_id: String,

    #[schema(example = "2023-08-15", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Outstanding job performance")]
    pub reason: String,

    /// Months the next bonus/promotion is brought forward
    #[schema(example = 2)]
    pub months_advanced: u32,
}

/// Letter as listed, with the owning employee's name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LetterRow {
    #[serde(flatten)]
    pub letter: AppreciationLetter,
    #[schema(example = "Ahmed Mohammed Ali")]
    pub employee_name: String,
}
