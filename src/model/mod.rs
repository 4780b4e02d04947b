pub mod appreciation_letter;
pub mod dashboard;
pub mod due_status;
pub mod employee;
pub mod job_grade;
pub mod penalty;
