use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Promotion period used when the grade is not recognised.
pub const DEFAULT_PROMOTION_MONTHS: u32 = 36;

#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum JobGrade {
    #[strum(to_string = "grade1", serialize = "الدرجة الأولى")]
    Grade1,
    #[strum(to_string = "grade2", serialize = "الدرجة الثانية")]
    Grade2,
    #[strum(to_string = "grade3", serialize = "الدرجة الثالثة")]
    Grade3,
    #[strum(to_string = "grade4", serialize = "الدرجة الرابعة")]
    Grade4,
}

impl JobGrade {
    /// Months between promotions for this grade.
    pub fn promotion_months(self) -> u32 {
        match self {
            JobGrade::Grade1 => 60,
            JobGrade::Grade2 => 48,
            JobGrade::Grade3 => 36,
            JobGrade::Grade4 => 24,
        }
    }

    /// Period for a raw grade string, falling back to the default.
    pub fn promotion_months_for(raw: &str) -> u32 {
        raw.parse::<JobGrade>()
            .map(JobGrade::promotion_months)
            .unwrap_or(DEFAULT_PROMOTION_MONTHS)
    }
}
