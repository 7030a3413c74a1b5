//! The employee directory: record validation, the in-memory roster contract,
//! filtered queries, and the leave/promotion workflows, exposed through an
//! axum router.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Employee, EmployeeId, Position};
pub use router::employee_router;
pub use service::{DirectoryError, EmployeeRegistry};
pub use store::{EmployeeStore, StoreError};
pub use validation::{validate, ValidationError};
