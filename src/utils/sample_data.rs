use chrono::NaiveDate;

use crate::model::{
    appreciation_letter::AppreciationLetter, employee::Employee, job_grade::JobGrade,
    penalty::Penalty,
};
use crate::utils::id::new_id;

pub struct SampleData {
    pub employees: Vec<Employee>,
    pub letters: Vec<AppreciationLetter>,
    pub penalties: Vec<Penalty>,
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn employee(
    name: &str,
    basic_salary: f64,
    grade: JobGrade,
    education: &str,
    last_bonus_date: Option<NaiveDate>,
    last_promotion_date: Option<NaiveDate>,
    department: &str,
) -> Employee {
    Employee {
        id: new_id(),
        name: name.to_string(),
        basic_salary,
        job_grade: grade.to_string(),
        education: education.to_string(),
        last_bonus_date,
        last_promotion_date,
        department: department.to_string(),
    }
}

/// Three employees, one appreciation letter and one penalty.
pub fn sample_data() -> SampleData {
    let employees = vec![
        employee(
            "Ahmed Mohammed Ali",
            8000.0,
            JobGrade::Grade3,
            "Bachelor",
            date(2023, 1, 15),
            date(2021, 6, 1),
            "Human Resources",
        ),
        employee(
            "Fatima Ahmed Al-Salem",
            9500.0,
            JobGrade::Grade2,
            "Master",
            date(2023, 6, 10),
            date(2020, 3, 15),
            "Finance",
        ),
        employee(
            "Mohammed Abdullah Al-Khalid",
            7200.0,
            JobGrade::Grade4,
            "Bachelor",
            date(2022, 12, 1),
            date(2022, 1, 10),
            "Information Technology",
        ),
    ];

    let letters = date(2023, 8, 15)
        .map(|date| AppreciationLetter {
            id: new_id(),
            employee_id: employees[0].id.clone(),
            date,
            reason: "Outstanding job performance".to_string(),
            months_advanced: 2,
        })
        .into_iter()
        .collect();

    let penalties = date(2023, 7, 20)
        .map(|date| Penalty {
            id: new_id(),
            employee_id: employees[2].id.clone(),
            date,
            penalty_type: "Warning".to_string(),
            months_delayed: 1,
            reason: "Late project delivery".to_string(),
        })
        .into_iter()
        .collect();

    SampleData {
        employees,
        letters,
        penalties,
    }
}
