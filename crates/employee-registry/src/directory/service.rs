use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::domain::{Employee, EmployeeId, Position};
use super::store::{EmployeeStore, StoreError};
use super::validation::{validate, ValidationError};

/// Minimum age before an employee is eligible for promotion to supervisor.
const PROMOTION_MINIMUM_AGE: u8 = 30;

/// The directory service: owns admission (validator + uniqueness), the
/// filtered queries, and the two rule-driven state transitions. Generic over
/// the storage seam so tests can substitute failing stores.
pub struct EmployeeRegistry<S> {
    store: Arc<S>,
    /// Every mutating operation is a read-check-write sequence spanning
    /// several store calls; this gate is held for the whole sequence so the
    /// checks cannot be invalidated by a concurrent writer. The store's own
    /// lock only covers individual primitives.
    write_gate: Mutex<()>,
}

impl<S> EmployeeRegistry<S>
where
    S: EmployeeStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    fn write_gate(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().expect("write gate poisoned")
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Every record, in insertion order. An empty roster is an empty list,
    /// not a `NoMatches` outcome.
    pub fn list(&self) -> Result<Vec<Employee>, DirectoryError> {
        Ok(self.store.list()?)
    }

    pub fn find_by_id(&self, id: &EmployeeId) -> Result<Employee, DirectoryError> {
        self.store.find(id)?.ok_or(DirectoryError::NotFound)
    }

    /// Admit a candidate: full validation first, then the uniqueness check,
    /// then append.
    pub fn insert(&self, candidate: Employee) -> Result<Employee, DirectoryError> {
        let _gate = self.write_gate();
        validate(&candidate, self.today())?;
        if self.store.find(&candidate.id)?.is_some() {
            return Err(DirectoryError::DuplicateId);
        }

        debug!(id = %candidate.id, "admitting employee record");
        self.store.append(candidate.clone())?;
        Ok(candidate)
    }

    /// Overwrite the record located by `id` with the candidate in full. The
    /// candidate's own id is what gets stored, so an update may change the
    /// record's id; a collision with a different existing record is rejected
    /// to keep ids unique.
    pub fn replace(&self, id: &EmployeeId, candidate: Employee) -> Result<Employee, DirectoryError> {
        let _gate = self.write_gate();
        if self.store.find(id)?.is_none() {
            return Err(DirectoryError::NotFound);
        }
        validate(&candidate, self.today())?;
        if candidate.id != *id && self.store.find(&candidate.id)?.is_some() {
            return Err(DirectoryError::DuplicateId);
        }

        debug!(located = %id, stored = %candidate.id, "replacing employee record");
        self.store.replace(id, candidate.clone())?;
        Ok(candidate)
    }

    pub fn delete(&self, id: &EmployeeId) -> Result<(), DirectoryError> {
        let _gate = self.write_gate();
        debug!(%id, "removing employee record");
        self.store.remove(id)?;
        Ok(())
    }

    /// All records holding `position`, or `NoMatches`.
    pub fn filter_by_position(&self, position: Position) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|employee| employee.position == position)
    }

    /// All records with `min_age <= age <= max_age`, or `NoMatches`. Inverted
    /// bounds simply match nobody; they are not an error.
    pub fn filter_by_age_range(
        &self,
        min_age: u8,
        max_age: u8,
    ) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(|employee| employee.age >= min_age && employee.age <= max_age)
    }

    /// All records whose annual leave balance is spent, or `NoMatches`.
    pub fn exhausted_leave(&self) -> Result<Vec<Employee>, DirectoryError> {
        self.filter(Employee::leave_exhausted)
    }

    fn filter(
        &self,
        predicate: impl Fn(&Employee) -> bool,
    ) -> Result<Vec<Employee>, DirectoryError> {
        let matches: Vec<Employee> = self
            .store
            .list()?
            .into_iter()
            .filter(|employee| predicate(employee))
            .collect();

        if matches.is_empty() {
            Err(DirectoryError::NoMatches)
        } else {
            Ok(matches)
        }
    }

    /// Start a period of annual leave. Check order is fixed: existence, then
    /// already-on-leave, then balance; a record already on leave is reported
    /// as such even if its balance is also spent.
    pub fn apply_annual_leave(&self, id: &EmployeeId) -> Result<Employee, DirectoryError> {
        let _gate = self.write_gate();
        let mut employee = self.store.find(id)?.ok_or(DirectoryError::NotFound)?;
        if employee.on_leave {
            return Err(DirectoryError::AlreadyOnLeave);
        }
        if employee.annual_leave == 0 {
            return Err(DirectoryError::InsufficientLeave);
        }

        employee.on_leave = true;
        employee.annual_leave -= 1;
        debug!(%id, remaining = employee.annual_leave, "annual leave applied");
        self.store.replace(id, employee.clone())?;
        Ok(employee)
    }

    /// Promote `target_id` to supervisor on the authority of `supervisor_id`.
    /// Authorization is resolved first; the target is never inspected when
    /// the requester is missing or not a supervisor. The requester's own
    /// leave and age are irrelevant, only the target's are checked.
    pub fn promote(
        &self,
        supervisor_id: &EmployeeId,
        target_id: &EmployeeId,
    ) -> Result<Employee, DirectoryError> {
        let _gate = self.write_gate();
        let authorized = matches!(
            self.store.find(supervisor_id)?,
            Some(requester) if requester.position == Position::Supervisor
        );
        if !authorized {
            return Err(DirectoryError::Unauthorized);
        }

        let mut target = self.store.find(target_id)?.ok_or(DirectoryError::NotFound)?;
        if target.position == Position::Supervisor {
            return Err(DirectoryError::AlreadySupervisor);
        }
        if target.age < PROMOTION_MINIMUM_AGE || target.on_leave {
            return Err(DirectoryError::CriteriaNotMet);
        }

        target.position = Position::Supervisor;
        debug!(supervisor = %supervisor_id, target = %target_id, "employee promoted");
        self.store.replace(target_id, target.clone())?;
        Ok(target)
    }
}

/// The closed set of outcomes a directory operation can produce. Nothing in
/// the registry fails fatally; every rejection is one of these kinds and the
/// boundary maps each to a status code.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("an employee with the given id already exists")]
    DuplicateId,
    #[error("employee with the given id does not exist")]
    NotFound,
    #[error("no employees matched the query")]
    NoMatches,
    #[error("employee is already on leave")]
    AlreadyOnLeave,
    #[error("employee does not have enough annual leave")]
    InsufficientLeave,
    #[error("only a supervisor can promote an employee")]
    Unauthorized,
    #[error("employee is already a supervisor")]
    AlreadySupervisor,
    #[error("employee does not meet the promotion criteria")]
    CriteriaNotMet,
    #[error("employee store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for DirectoryError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => DirectoryError::NotFound,
            StoreError::Unavailable(reason) => DirectoryError::Unavailable(reason),
        }
    }
}
