use super::domain::{Employee, EmployeeId};

/// Storage seam for the registry so the service can be exercised against
/// substitute stores. Implementations must preserve append order (it is the
/// listing order) and serialize every call against the others; a single lock
/// over the whole collection is expected and sufficient at this scale.
pub trait EmployeeStore: Send + Sync {
    /// Every record in append order.
    fn list(&self) -> Result<Vec<Employee>, StoreError>;
    /// First record whose id matches, if any.
    fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError>;
    /// Append a record. Uniqueness is the caller's concern, not the store's.
    fn append(&self, employee: Employee) -> Result<(), StoreError>;
    /// Overwrite the record located by `id` in place, keeping its position.
    /// The replacement's own id is stored verbatim, even when it differs.
    fn replace(&self, id: &EmployeeId, replacement: Employee) -> Result<(), StoreError>;
    /// Remove the record located by `id`.
    fn remove(&self, id: &EmployeeId) -> Result<(), StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("employee record not found")]
    NotFound,
    #[error("employee store unavailable: {0}")]
    Unavailable(String),
}
