use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{due_status::DueStatus, job_grade::JobGrade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44",
        "name": "Ahmed Mohammed Ali",
        "basicSalary": 8000.0,
        "jobGrade": "grade3",
        "education": "Bachelor",
        "lastBonusDate": "2023-01-15",
        "lastPromotionDate": "2021-06-01",
        "department": "Human Resources"
    })
)]
pub struct Employee {
    #[schema(example = "3f1c9a8e-2b7d-4d8e-9a51-0c2f6b1e7a44")]
    pub id: String,

    #[schema(example = "Ahmed Mohammed Ali")]
    pub name: String,

    /// Monthly basic salary in SAR
    #[schema(example = 8000.0)]
    pub basic_salary: f64,

    #[schema(example = "grade3")]
    pub job_grade: String,

    #[schema(example = "Bachelor")]
    pub education: String,

    #[schema(example = "2023-01-15", value_type = Option<String>, format = "date", nullable = true)]
    pub last_bonus_date: Option<NaiveDate>,

    #[schema(example = "2021-06-01", value_type = Option<String>, format = "date", nullable = true)]
    pub last_promotion_date: Option<NaiveDate>,

    #[schema(example = "Human Resources")]
    pub department: String,
}

impl Employee {
    /// The recognised grade, if `job_grade` names one.
    pub fn grade(&self) -> Option<JobGrade> {
        self.job_grade.parse().ok()
    }
}

/// Editable fields of an employee, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub basic_salary: f64,
    pub job_grade: String,
    pub education: String,
    pub last_bonus_date: Option<NaiveDate>,
    pub last_promotion_date: Option<NaiveDate>,
    pub department: String,
}

impl EmployeeFields {
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            basic_salary: self.basic_salary,
            job_grade: self.job_grade,
            education: self.education,
            last_bonus_date: self.last_bonus_date,
            last_promotion_date: self.last_promotion_date,
            department: self.department,
        }
    }
}

/// An employee together with the due dates derived from its records.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    #[serde(flatten)]
    pub employee: Employee,

    #[schema(example = "2023-11-15", value_type = Option<String>, format = "date", nullable = true)]
    pub next_bonus_date: Option<NaiveDate>,
    pub bonus_status: DueStatus,

    #[schema(example = "2024-06-01", value_type = Option<String>, format = "date", nullable = true)]
    pub next_promotion_date: Option<NaiveDate>,
    pub promotion_status: DueStatus,

    #[schema(example = 2)]
    pub total_advanced_months: i64,
    #[schema(example = 0)]
    pub total_delayed_months: i64,
}
