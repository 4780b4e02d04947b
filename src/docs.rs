use crate::api::appreciation::CreateLetter;
use crate::api::employee::{EmployeeInput, EmployeeListResponse};
use crate::api::penalty::CreatePenalty;
use crate::model::appreciation_letter::{AppreciationLetter, LetterRow};
use crate::model::dashboard::{Activity, ActivityKind, Alert, DashboardStats};
use crate::model::due_status::{DueSeverity, DueStatus};
use crate::model::employee::{Employee, EmployeeRow};
use crate::model::job_grade::JobGrade;
use crate::model::penalty::{Penalty, PenaltyRow};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Tracker API",
        version = "0.1.0",
        description = r#"
## Employee bonus & promotion tracker

Keeps employee records with their appreciation letters and penalties and
derives when each employee's next bonus and promotion fall due.

### Due dates
- **Bonus**: last bonus + 12 months
- **Promotion**: last promotion + grade period (grade1 60, grade2 48, grade3 36, grade4 24 months; 36 otherwise)
- Each appreciation letter brings both dates forward by its `monthsAdvanced`;
  each penalty pushes them back by its `monthsDelayed`.

### Status
`overdue` (due today or earlier), `upcoming` (within 30 days), `future`,
or `unspecified` when the base date is unset. Pass `today=YYYY-MM-DD` to
evaluate as of another day.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::appreciation::create_letter,
        crate::api::appreciation::list_letters,
        crate::api::appreciation::delete_letter,

        crate::api::penalty::create_penalty,
        crate::api::penalty::list_penalties,
        crate::api::penalty::delete_penalty,

        crate::api::dashboard::stats,
        crate::api::dashboard::alerts,
        crate::api::dashboard::recent_activity
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            EmployeeRow,
            EmployeeListResponse,
            JobGrade,
            DueSeverity,
            DueStatus,
            AppreciationLetter,
            CreateLetter,
            LetterRow,
            Penalty,
            CreatePenalty,
            PenaltyRow,
            DashboardStats,
            Alert,
            Activity,
            ActivityKind
        )
    ),
    tags(
        (name = "Employee", description = "Employee records and their due dates"),
        (name = "Appreciation", description = "Appreciation letters"),
        (name = "Penalty", description = "Penalties"),
        (name = "Dashboard", description = "Counters, alerts and recent activity"),
    )
)]
pub struct ApiDoc;
