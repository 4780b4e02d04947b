//! The application state: the three collections, their persistence and
//! the change notifications the view layer listens to.

use chrono::NaiveDate;
use tracing::{error, info};

use crate::calculator::{
    due_status, next_bonus_date, next_promotion_date, total_advanced_months, total_delayed_months,
};
use crate::error::AppError;
use crate::model::{
    appreciation_letter::{AppreciationLetter, LetterRow},
    dashboard::{Activity, ActivityKind, Alert, DashboardStats},
    due_status::DueSeverity,
    employee::{Employee, EmployeeFields, EmployeeRow},
    job_grade::JobGrade,
    penalty::{Penalty, PenaltyRow},
};
use crate::store::{
    APPRECIATION_LETTERS_KEY, EMPLOYEES_KEY, PENALTIES_KEY, Store, load_collection,
    save_collection,
};
use crate::utils::id::unique_id;
use crate::utils::sample_data::SampleData;

/// How many records of each kind feed the recent-activity list.
const ACTIVITY_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    EmployeeCreated { id: String },
    EmployeeUpdated { id: String },
    EmployeeDeleted {
        id: String,
        letters_removed: usize,
        penalties_removed: usize,
    },
    LetterAdded { id: String, employee_id: String },
    LetterDeleted { id: String },
    PenaltyAdded { id: String, employee_id: String },
    PenaltyDeleted { id: String },
    SampleDataSeeded { employees: usize },
}

pub type Subscriber = Box<dyn Fn(&StateEvent) + Send + Sync>;

/// Records removed along with a deleted employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeCounts {
    pub letters_removed: usize,
    pub penalties_removed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLetter {
    pub employee_id: String,
    pub date: NaiveDate,
    pub reason: String,
    pub months_advanced: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPenalty {
    pub employee_id: String,
    pub date: NaiveDate,
    pub penalty_type: String,
    pub months_delayed: u32,
    pub reason: String,
}

/// Which employee rows to return.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Bonus status; `Future` also selects employees without a bonus date
    pub status: Option<DueSeverity>,
    pub department: Option<String>,
    pub job_grade: Option<String>,
}

impl EmployeeFilter {
    fn matches(&self, row: &EmployeeRow) -> bool {
        let employee = &row.employee;

        if let Some(search) = &self.search {
            if !employee.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            let severity = match row.bonus_status.severity {
                DueSeverity::Unspecified => DueSeverity::Future,
                other => other,
            };
            if severity != status {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if !employee.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }
        if let Some(grade) = &self.job_grade {
            // "grade1" and its legacy label select the same employees
            let same_grade = match (grade.parse::<JobGrade>().ok(), employee.grade()) {
                (Some(wanted), Some(actual)) => wanted == actual,
                _ => employee.job_grade == *grade,
            };
            if !same_grade {
                return false;
            }
        }
        true
    }
}

pub struct AppState {
    employees: Vec<Employee>,
    letters: Vec<AppreciationLetter>,
    penalties: Vec<Penalty>,
    store: Box<dyn Store>,
    subscribers: Vec<Subscriber>,
}

impl AppState {
    /// Read all three collections from `store`.
    pub fn load(store: Box<dyn Store>) -> Result<Self, AppError> {
        let employees = load_collection(store.as_ref(), EMPLOYEES_KEY)?;
        let letters = load_collection(store.as_ref(), APPRECIATION_LETTERS_KEY)?;
        let penalties = load_collection(store.as_ref(), PENALTIES_KEY)?;

        let state = Self {
            employees,
            letters,
            penalties,
            store,
            subscribers: Vec::new(),
        };

        info!(
            employees = state.employees.len(),
            letters = state.letters.len(),
            penalties = state.penalties.len(),
            "State loaded"
        );

        Ok(state)
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    fn notify(&self, event: StateEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    // Writes are fire-and-forget: a failed save is logged and the
    // in-memory change stands.
    fn persist_employees(&self) {
        if let Err(e) = save_collection(self.store.as_ref(), EMPLOYEES_KEY, &self.employees) {
            error!(error = %e, "Failed to save employees");
        }
    }

    fn persist_letters(&self) {
        if let Err(e) = save_collection(self.store.as_ref(), APPRECIATION_LETTERS_KEY, &self.letters)
        {
            error!(error = %e, "Failed to save appreciation letters");
        }
    }

    fn persist_penalties(&self) {
        if let Err(e) = save_collection(self.store.as_ref(), PENALTIES_KEY, &self.penalties) {
            error!(error = %e, "Failed to save penalties");
        }
    }

    /// Fill a state holding no records at all with `data`. Returns whether
    /// anything was seeded.
    pub fn seed_if_empty(&mut self, data: SampleData) -> bool {
        if !self.employees.is_empty() || !self.letters.is_empty() || !self.penalties.is_empty() {
            return false;
        }

        self.employees = data.employees;
        self.letters = data.letters;
        self.penalties = data.penalties;

        self.persist_employees();
        self.persist_letters();
        self.persist_penalties();

        self.notify(StateEvent::SampleDataSeeded {
            employees: self.employees.len(),
        });
        true
    }

    // ---------- employees ----------

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn require_employee(&self, id: &str) -> Result<&Employee, AppError> {
        self.employee(id)
            .ok_or_else(|| AppError::not_found("Employee", id))
    }

    pub fn add_employee(&mut self, fields: EmployeeFields) -> Employee {
        let id = unique_id(|candidate| self.employee(candidate).is_some());
        let employee = fields.into_employee(id);

        self.employees.push(employee.clone());
        self.persist_employees();

        self.notify(StateEvent::EmployeeCreated {
            id: employee.id.clone(),
        });
        employee
    }

    /// Replace the editable fields of an existing employee; the id is kept.
    pub fn update_employee(
        &mut self,
        id: &str,
        fields: EmployeeFields,
    ) -> Result<Employee, AppError> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("Employee", id))?;

        *slot = fields.into_employee(id.to_string());
        let updated = slot.clone();
        self.persist_employees();

        self.notify(StateEvent::EmployeeUpdated { id: id.to_string() });
        Ok(updated)
    }

    /// Delete an employee and every letter and penalty that references it.
    pub fn delete_employee(&mut self, id: &str) -> Result<CascadeCounts, AppError> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() == before {
            return Err(AppError::not_found("Employee", id));
        }

        let letters_before = self.letters.len();
        self.letters.retain(|l| l.employee_id != id);
        let penalties_before = self.penalties.len();
        self.penalties.retain(|p| p.employee_id != id);

        let counts = CascadeCounts {
            letters_removed: letters_before - self.letters.len(),
            penalties_removed: penalties_before - self.penalties.len(),
        };

        self.persist_employees();
        self.persist_letters();
        self.persist_penalties();

        self.notify(StateEvent::EmployeeDeleted {
            id: id.to_string(),
            letters_removed: counts.letters_removed,
            penalties_removed: counts.penalties_removed,
        });
        Ok(counts)
    }

    // ---------- appreciation letters ----------

    pub fn add_letter(&mut self, new: NewLetter) -> Result<AppreciationLetter, AppError> {
        if self.employee(&new.employee_id).is_none() {
            return Err(AppError::referential(new.employee_id));
        }

        let id = unique_id(|candidate| self.letters.iter().any(|l| l.id == candidate));
        let letter = AppreciationLetter {
            id,
            employee_id: new.employee_id,
            date: new.date,
            reason: new.reason,
            months_advanced: new.months_advanced,
        };

        self.letters.push(letter.clone());
        self.persist_letters();

        self.notify(StateEvent::LetterAdded {
            id: letter.id.clone(),
            employee_id: letter.employee_id.clone(),
        });
        Ok(letter)
    }

    pub fn delete_letter(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.letters.len();
        self.letters.retain(|l| l.id != id);
        if self.letters.len() == before {
            return Err(AppError::not_found("Appreciation letter", id));
        }

        self.persist_letters();
        self.notify(StateEvent::LetterDeleted { id: id.to_string() });
        Ok(())
    }

    /// Letters whose employee still exists, optionally for one employee.
    pub fn letter_rows(&self, employee_id: Option<&str>) -> Vec<LetterRow> {
        self.letters
            .iter()
            .filter(|l| employee_id.is_none_or(|wanted| l.employee_id == wanted))
            .filter_map(|l| {
                self.employee(&l.employee_id).map(|e| LetterRow {
                    letter: l.clone(),
                    employee_name: e.name.clone(),
                })
            })
            .collect()
    }

    // ---------- penalties ----------

    pub fn add_penalty(&mut self, new: NewPenalty) -> Result<Penalty, AppError> {
        if self.employee(&new.employee_id).is_none() {
            return Err(AppError::referential(new.employee_id));
        }

        let id = unique_id(|candidate| self.penalties.iter().any(|p| p.id == candidate));
        let penalty = Penalty {
            id,
            employee_id: new.employee_id,
            date: new.date,
            penalty_type: new.penalty_type,
            months_delayed: new.months_delayed,
            reason: new.reason,
        };

        self.penalties.push(penalty.clone());
        self.persist_penalties();

        self.notify(StateEvent::PenaltyAdded {
            id: penalty.id.clone(),
            employee_id: penalty.employee_id.clone(),
        });
        Ok(penalty)
    }

    pub fn delete_penalty(&mut self, id: &str) -> Result<(), AppError> {
        let before = self.penalties.len();
        self.penalties.retain(|p| p.id != id);
        if self.penalties.len() == before {
            return Err(AppError::not_found("Penalty", id));
        }

        self.persist_penalties();
        self.notify(StateEvent::PenaltyDeleted { id: id.to_string() });
        Ok(())
    }

    /// Penalties whose employee still exists, optionally for one employee.
    pub fn penalty_rows(&self, employee_id: Option<&str>) -> Vec<PenaltyRow> {
        self.penalties
            .iter()
            .filter(|p| employee_id.is_none_or(|wanted| p.employee_id == wanted))
            .filter_map(|p| {
                self.employee(&p.employee_id).map(|e| PenaltyRow {
                    penalty: p.clone(),
                    employee_name: e.name.clone(),
                })
            })
            .collect()
    }

    // ---------- derived views ----------

    pub fn employee_row(&self, employee: &Employee, today: NaiveDate) -> EmployeeRow {
        let next_bonus = next_bonus_date(employee, &self.letters, &self.penalties);
        let next_promotion = next_promotion_date(employee, &self.letters, &self.penalties);

        EmployeeRow {
            employee: employee.clone(),
            next_bonus_date: next_bonus,
            bonus_status: due_status(next_bonus, today),
            next_promotion_date: next_promotion,
            promotion_status: due_status(next_promotion, today),
            total_advanced_months: total_advanced_months(&employee.id, &self.letters),
            total_delayed_months: total_delayed_months(&employee.id, &self.penalties),
        }
    }

    pub fn employee_row_by_id(&self, id: &str, today: NaiveDate) -> Result<EmployeeRow, AppError> {
        let employee = self.require_employee(id)?;
        Ok(self.employee_row(employee, today))
    }

    pub fn employee_rows(&self, filter: &EmployeeFilter, today: NaiveDate) -> Vec<EmployeeRow> {
        self.employees
            .iter()
            .map(|e| self.employee_row(e, today))
            .filter(|row| filter.matches(row))
            .collect()
    }

    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        let mut stats = DashboardStats {
            overdue_bonuses: 0,
            upcoming_bonuses: 0,
            due_promotions: 0,
            total_employees: self.employees.len(),
        };

        for employee in &self.employees {
            let row = self.employee_row(employee, today);
            match row.bonus_status.severity {
                DueSeverity::Overdue => stats.overdue_bonuses += 1,
                DueSeverity::Upcoming => stats.upcoming_bonuses += 1,
                DueSeverity::Future | DueSeverity::Unspecified => {}
            }
            if row.promotion_status.severity == DueSeverity::Overdue {
                stats.due_promotions += 1;
            }
        }

        stats
    }

    /// Overdue and upcoming bonuses, most urgent first.
    pub fn alerts(&self, today: NaiveDate) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .employees
            .iter()
            .filter_map(|employee| {
                let due_date = next_bonus_date(employee, &self.letters, &self.penalties)?;
                let severity = due_status(Some(due_date), today).severity;
                let message = match severity {
                    DueSeverity::Overdue => {
                        format!("علاوة {} مستحقة منذ {}", employee.name, due_date)
                    }
                    DueSeverity::Upcoming => {
                        format!("علاوة {} مستحقة في {}", employee.name, due_date)
                    }
                    DueSeverity::Future | DueSeverity::Unspecified => return None,
                };
                Some(Alert {
                    employee_id: employee.id.clone(),
                    severity,
                    due_date,
                    message,
                })
            })
            .collect();

        alerts.sort_by_key(|a| (a.severity, a.due_date));
        alerts
    }

    /// Latest letters and penalties, newest record date first.
    pub fn recent_activity(&self, limit: usize) -> Vec<Activity> {
        let tail = |len: usize| len.saturating_sub(ACTIVITY_WINDOW);

        let letters = self.letters[tail(self.letters.len())..]
            .iter()
            .filter_map(|l| {
                self.employee(&l.employee_id).map(|e| Activity {
                    kind: ActivityKind::Appreciation,
                    employee_id: e.id.clone(),
                    message: format!("تم إضافة خطاب شكر لـ {}", e.name),
                    date: l.date,
                })
            });

        let penalties = self.penalties[tail(self.penalties.len())..]
            .iter()
            .filter_map(|p| {
                self.employee(&p.employee_id).map(|e| Activity {
                    kind: ActivityKind::Penalty,
                    employee_id: e.id.clone(),
                    message: format!("تم إضافة عقوبة لـ {}", e.name),
                    date: p.date,
                })
            });

        let mut activities: Vec<Activity> = letters.chain(penalties).collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        activities.truncate(limit);
        activities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::utils::sample_data::sample_data;
    use chrono::Datelike;
    use std::sync::{Arc, Mutex};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn empty_state() -> AppState {
        AppState::load(Box::new(MemoryStore::new())).unwrap()
    }

    fn fields(name: &str, grade: &str, bonus: Option<NaiveDate>, promotion: Option<NaiveDate>) -> EmployeeFields {
        EmployeeFields {
            name: name.to_string(),
            basic_salary: 8000.0,
            job_grade: grade.to_string(),
            education: "Bachelor".to_string(),
            last_bonus_date: bonus,
            last_promotion_date: promotion,
            department: "Finance".to_string(),
        }
    }

    fn letter_for(employee_id: &str, months: u32, date: NaiveDate) -> NewLetter {
        NewLetter {
            employee_id: employee_id.to_string(),
            date,
            reason: "excellent work".to_string(),
            months_advanced: months,
        }
    }

    fn penalty_for(employee_id: &str, months: u32, date: NaiveDate) -> NewPenalty {
        NewPenalty {
            employee_id: employee_id.to_string(),
            date,
            penalty_type: "Warning".to_string(),
            months_delayed: months,
            reason: "late".to_string(),
        }
    }

    #[test]
    fn delete_employee_cascades_to_letters_and_penalties() {
        let mut state = empty_state();
        let keep = state.add_employee(fields("Keep", "grade3", Some(d(2023, 1, 1)), None));
        let gone = state.add_employee(fields("Gone", "grade3", Some(d(2023, 1, 1)), None));

        state.add_letter(letter_for(&gone.id, 2, d(2023, 5, 1))).unwrap();
        state.add_letter(letter_for(&keep.id, 1, d(2023, 5, 1))).unwrap();
        state.add_penalty(penalty_for(&gone.id, 3, d(2023, 6, 1))).unwrap();

        let counts = state.delete_employee(&gone.id).unwrap();
        assert_eq!(
            counts,
            CascadeCounts {
                letters_removed: 1,
                penalties_removed: 1,
            }
        );

        assert_eq!(total_advanced_months(&gone.id, &state.letters), 0);
        assert_eq!(total_delayed_months(&gone.id, &state.penalties), 0);
        assert!(state.letter_rows(Some(&gone.id)).is_empty());
        assert!(state.penalty_rows(Some(&gone.id)).is_empty());
        assert_eq!(total_advanced_months(&keep.id, &state.letters), 1);
    }

    #[test]
    fn unknown_ids_report_not_found() {
        let mut state = empty_state();

        assert!(matches!(state.delete_employee("nope"), Err(AppError::NotFound { .. })));
        assert!(matches!(
            state.update_employee("nope", fields("X", "grade1", None, None)),
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(state.delete_letter("nope"), Err(AppError::NotFound { .. })));
        assert!(matches!(state.delete_penalty("nope"), Err(AppError::NotFound { .. })));
        assert!(matches!(state.employee_row_by_id("nope", d(2024, 1, 1)), Err(AppError::NotFound { .. })));
    }

    #[test]
    fn records_for_missing_employee_are_rejected() {
        let mut state = empty_state();

        let err = state.add_letter(letter_for("ghost", 1, d(2023, 1, 1))).unwrap_err();
        assert!(matches!(err, AppError::Referential { .. }));
        let err = state.add_penalty(penalty_for("ghost", 1, d(2023, 1, 1))).unwrap_err();
        assert!(matches!(err, AppError::Referential { .. }));
        assert!(state.letters.is_empty());
        assert!(state.penalties.is_empty());
    }

    #[test]
    fn orphaned_records_in_storage_are_hidden() {
        let store = MemoryStore::new();
        let orphan = AppreciationLetter {
            id: "l1".to_string(),
            employee_id: "ghost".to_string(),
            date: d(2023, 1, 1),
            reason: "old".to_string(),
            months_advanced: 4,
        };
        save_collection(&store, APPRECIATION_LETTERS_KEY, &[orphan]).unwrap();

        let state = AppState::load(Box::new(store)).unwrap();
        assert_eq!(state.letters.len(), 1);
        assert!(state.letter_rows(None).is_empty());
        assert!(state.recent_activity(5).is_empty());
    }

    #[test]
    fn update_keeps_id_and_replaces_fields() {
        let mut state = empty_state();
        let created = state.add_employee(fields("Before", "grade3", Some(d(2023, 1, 1)), None));

        let updated = state
            .update_employee(&created.id, fields("After", "grade1", None, Some(d(2020, 1, 1))))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "After");
        assert_eq!(updated.last_bonus_date, None);
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.employee(&created.id), Some(&updated));
    }

    #[test]
    fn mutations_are_persisted_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let employee_id;
        {
            let store = crate::store::FileStore::open(dir.path()).unwrap();
            let mut state = AppState::load(Box::new(store)).unwrap();
            employee_id = state
                .add_employee(fields("Saved", "grade2", Some(d(2023, 1, 15)), None))
                .id;
            state.add_letter(letter_for(&employee_id, 2, d(2023, 3, 1))).unwrap();
        }

        let store = crate::store::FileStore::open(dir.path()).unwrap();
        let state = AppState::load(Box::new(store)).unwrap();
        let row = state.employee_row_by_id(&employee_id, d(2023, 10, 15)).unwrap();
        assert_eq!(row.next_bonus_date, Some(d(2023, 11, 15)));
        assert_eq!(row.total_advanced_months, 2);
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let mut state = empty_state();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        state.subscribe(Box::new(move |event: &StateEvent| sink.lock().unwrap().push(event.clone())));

        let e = state.add_employee(fields("A", "grade3", None, None));
        let l = state.add_letter(letter_for(&e.id, 1, d(2023, 1, 1))).unwrap();
        let p = state.add_penalty(penalty_for(&e.id, 1, d(2023, 1, 1))).unwrap();
        state.delete_letter(&l.id).unwrap();
        state.delete_penalty(&p.id).unwrap();
        state.update_employee(&e.id, fields("B", "grade3", None, None)).unwrap();
        state.delete_employee(&e.id).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                StateEvent::EmployeeCreated { id: e.id.clone() },
                StateEvent::LetterAdded { id: l.id.clone(), employee_id: e.id.clone() },
                StateEvent::PenaltyAdded { id: p.id.clone(), employee_id: e.id.clone() },
                StateEvent::LetterDeleted { id: l.id.clone() },
                StateEvent::PenaltyDeleted { id: p.id.clone() },
                StateEvent::EmployeeUpdated { id: e.id.clone() },
                StateEvent::EmployeeDeleted {
                    id: e.id.clone(),
                    letters_removed: 0,
                    penalties_removed: 0,
                },
            ]
        );
    }

    #[test]
    fn failed_mutations_emit_nothing() {
        let mut state = empty_state();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&seen);
        state.subscribe(Box::new(move |_: &StateEvent| *sink.lock().unwrap() += 1));

        let _ = state.delete_employee("nope");
        let _ = state.add_letter(letter_for("nope", 1, d(2023, 1, 1)));
        assert_eq!(*seen.lock().unwrap(), 0);
    }

    #[test]
    fn stats_count_bonus_and_promotion_states() {
        let mut state = empty_state();
        let today = d(2024, 1, 15);

        // bonus overdue, promotion overdue (grade4: 2021-06-01 + 24 = 2023-06-01)
        state.add_employee(fields("Overdue", "grade4", Some(d(2023, 1, 15)), Some(d(2021, 6, 1))));
        // bonus upcoming on 2024-02-01
        state.add_employee(fields("Upcoming", "grade3", Some(d(2023, 2, 1)), Some(d(2023, 1, 1))));
        // bonus in the future, no promotion date
        state.add_employee(fields("Future", "grade3", Some(d(2023, 12, 1)), None));
        // nothing set
        state.add_employee(fields("Blank", "grade3", None, None));

        assert_eq!(
            state.stats(today),
            DashboardStats {
                overdue_bonuses: 1,
                upcoming_bonuses: 1,
                due_promotions: 1,
                total_employees: 4,
            }
        );
    }

    #[test]
    fn alerts_list_overdue_before_upcoming() {
        let mut state = empty_state();
        let today = d(2024, 1, 15);

        let upcoming = state.add_employee(fields("Soon", "grade3", Some(d(2023, 2, 1)), None));
        let overdue = state.add_employee(fields("Late", "grade3", Some(d(2022, 6, 1)), None));
        state.add_employee(fields("Later", "grade3", Some(d(2023, 12, 1)), None));

        let alerts = state.alerts(today);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].employee_id, overdue.id);
        assert_eq!(alerts[0].severity, DueSeverity::Overdue);
        assert_eq!(alerts[0].message, "علاوة Late مستحقة منذ 2023-06-01");
        assert_eq!(alerts[1].employee_id, upcoming.id);
        assert_eq!(alerts[1].severity, DueSeverity::Upcoming);
        assert_eq!(alerts[1].due_date, d(2024, 2, 1));
    }

    #[test]
    fn recent_activity_is_newest_first_and_limited() {
        let mut state = empty_state();
        let e = state.add_employee(fields("Active", "grade3", None, None));

        state.add_letter(letter_for(&e.id, 1, d(2023, 3, 1))).unwrap();
        state.add_penalty(penalty_for(&e.id, 1, d(2023, 5, 1))).unwrap();
        state.add_letter(letter_for(&e.id, 1, d(2023, 4, 1))).unwrap();

        let activity = state.recent_activity(2);
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].kind, ActivityKind::Penalty);
        assert_eq!(activity[0].date, d(2023, 5, 1));
        assert_eq!(activity[1].kind, ActivityKind::Appreciation);
        assert_eq!(activity[1].date, d(2023, 4, 1));
    }

    #[test]
    fn recent_activity_only_looks_at_latest_records() {
        let mut state = empty_state();
        let e = state.add_employee(fields("Busy", "grade3", None, None));

        // the oldest-inserted letter carries the newest date but falls outside the window
        state.add_letter(letter_for(&e.id, 1, d(2030, 1, 1))).unwrap();
        for month in 1..=5 {
            state.add_letter(letter_for(&e.id, 1, d(2023, month, 1))).unwrap();
        }

        let activity = state.recent_activity(10);
        assert_eq!(activity.len(), 5);
        assert!(activity.iter().all(|a| a.date.year() == 2023));
    }

    #[test]
    fn employee_filter_combines_criteria() {
        let mut state = empty_state();
        let today = d(2024, 1, 15);
        state.add_employee(fields("Sara Overdue", "grade1", Some(d(2023, 1, 1)), None));
        state.add_employee(fields("Omar Future", "grade3", Some(d(2023, 12, 1)), None));
        state.add_employee(fields("sara future", "الدرجة الأولى", Some(d(2023, 12, 1)), None));

        let by_name = EmployeeFilter {
            search: Some("SARA".to_string()),
            ..Default::default()
        };
        assert_eq!(state.employee_rows(&by_name, today).len(), 2);

        let by_status = EmployeeFilter {
            status: Some(DueSeverity::Future),
            ..Default::default()
        };
        assert_eq!(state.employee_rows(&by_status, today).len(), 2);

        let by_grade = EmployeeFilter {
            job_grade: Some("grade1".to_string()),
            status: Some(DueSeverity::Future),
            ..Default::default()
        };
        let rows = state.employee_rows(&by_grade, today);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee.name, "sara future");
    }

    #[test]
    fn seeding_only_fills_an_empty_state() {
        let mut state = empty_state();
        assert!(state.seed_if_empty(sample_data()));
        assert_eq!(state.employees.len(), 3);
        assert_eq!(state.letters.len(), 1);

        assert!(!state.seed_if_empty(sample_data()));
        assert_eq!(state.employees.len(), 3);
    }

    #[test]
    fn seeding_keeps_stored_letters_and_penalties() {
        let store = MemoryStore::new();
        let orphan = AppreciationLetter {
            id: "l-1".to_string(),
            employee_id: "gone".to_string(),
            date: d(2023, 1, 1),
            reason: "kept".to_string(),
            months_advanced: 1,
        };
        save_collection(&store, APPRECIATION_LETTERS_KEY, &[orphan.clone()]).unwrap();

        let mut state = AppState::load(Box::new(store)).unwrap();
        assert!(!state.seed_if_empty(sample_data()));
        assert!(state.employees.is_empty());
        assert_eq!(state.letters, vec![orphan]);
    }

    #[test]
    fn future_filter_includes_employees_without_bonus_date() {
        let mut state = empty_state();
        let today = d(2024, 1, 15);
        state.add_employee(fields("Planned", "grade3", Some(d(2023, 12, 1)), None));
        state.add_employee(fields("Unset", "grade3", None, None));
        state.add_employee(fields("Late", "grade3", Some(d(2022, 1, 1)), None));

        let future = EmployeeFilter {
            status: Some(DueSeverity::Future),
            ..Default::default()
        };
        let mut names: Vec<String> = state
            .employee_rows(&future, today)
            .into_iter()
            .map(|r| r.employee.name)
            .collect();
        names.sort();
        assert_eq!(names, ["Planned", "Unset"]);

        let overdue = EmployeeFilter {
            status: Some(DueSeverity::Overdue),
            ..Default::default()
        };
        assert_eq!(state.employee_rows(&overdue, today).len(), 1);
    }
}
