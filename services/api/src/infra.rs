use chrono::NaiveDate;
use employee_registry::directory::{Employee, EmployeeId, EmployeeStore, Position, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Production store: the whole roster behind one mutex, in a Vec so listing
/// order is admission order. Lookups are linear scans; the roster stays small
/// enough that an id index would buy nothing.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEmployeeStore {
    records: Arc<Mutex<Vec<Employee>>>,
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn list(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.records.lock().expect("store mutex poisoned").clone())
    }

    fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.iter().find(|employee| employee.id == *id).cloned())
    }

    fn append(&self, employee: Employee) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(employee);
        Ok(())
    }

    fn replace(&self, id: &EmployeeId, replacement: Employee) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        match guard.iter_mut().find(|employee| employee.id == *id) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn remove(&self, id: &EmployeeId) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        match guard.iter().position(|employee| employee.id == *id) {
            Some(index) => {
                guard.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

/// Roster used by the demo subcommand and the `APP_SEED_DEMO` flag. Every
/// record passes the admission validator.
pub(crate) fn sample_roster() -> Vec<Employee> {
    fn record(
        id: &str,
        name: &str,
        phone: &str,
        age: u8,
        position: Position,
        hired: (i32, u32, u32),
        annual_leave: u32,
    ) -> Employee {
        Employee {
            id: EmployeeId(id.to_string()),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_ascii_lowercase()),
            phone_number: phone.to_string(),
            age,
            position,
            on_leave: false,
            hire_date: NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2).expect("valid date"),
            annual_leave,
        }
    }

    vec![
        record(
            "S100",
            "Haneen",
            "0501112233",
            48,
            Position::Supervisor,
            (2015, 3, 9),
            12,
        ),
        record(
            "E101",
            "Fatima",
            "0512345678",
            28,
            Position::Coordinator,
            (2020, 1, 1),
            5,
        ),
        record(
            "E102",
            "Ibrahim",
            "0523456789",
            34,
            Position::Coordinator,
            (2018, 7, 23),
            8,
        ),
        record(
            "E103",
            "Yousef",
            "0534567890",
            52,
            Position::Coordinator,
            (2011, 11, 2),
            1,
        ),
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
