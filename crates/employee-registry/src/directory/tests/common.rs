use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::directory::domain::{Employee, EmployeeId, Position};
use crate::directory::router::employee_router;
use crate::directory::service::EmployeeRegistry;
use crate::directory::store::{EmployeeStore, StoreError};

pub(super) fn hire_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
}

/// A candidate that passes every field check; tests mutate single fields from
/// here.
pub(super) fn employee(id: &str) -> Employee {
    Employee {
        id: EmployeeId(id.to_string()),
        name: "Fatima".to_string(),
        email: "fatima@example.com".to_string(),
        phone_number: "0512345678".to_string(),
        age: 28,
        position: Position::Coordinator,
        on_leave: false,
        hire_date: hire_date(),
        annual_leave: 5,
    }
}

pub(super) fn supervisor(id: &str) -> Employee {
    Employee {
        name: "Salwah".to_string(),
        email: "salwah@example.com".to_string(),
        phone_number: "0598765432".to_string(),
        age: 45,
        position: Position::Supervisor,
        ..employee(id)
    }
}

pub(super) fn build_registry() -> (EmployeeRegistry<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let registry = EmployeeRegistry::new(store.clone());
    (registry, store)
}

pub(super) fn build_router() -> axum::Router {
    let (registry, _) = build_registry();
    employee_router(Arc::new(registry))
}

/// Order-preserving store double; the same Vec-behind-a-Mutex discipline the
/// production store uses.
#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<Vec<Employee>>>,
}

impl EmployeeStore for MemoryStore {
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

/// Store double for the 500 path.
pub(super) struct UnavailableStore;

impl EmployeeStore for UnavailableStore {
    fn list(&self) -> Result<Vec<Employee>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn find(&self, _id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn append(&self, _employee: Employee) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn replace(&self, _id: &EmployeeId, _replacement: Employee) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &EmployeeId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
