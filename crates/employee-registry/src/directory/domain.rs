use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper so employee ids never mix with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two positions the registry recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Supervisor,
    Coordinator,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::Supervisor => "supervisor",
            Position::Coordinator => "coordinator",
        }
    }

    /// Parse the wire label. Boundary layers reject anything else before the
    /// directory ever sees it.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "supervisor" => Some(Position::Supervisor),
            "coordinator" => Some(Position::Coordinator),
            _ => None,
        }
    }
}

/// A full employee record. The same shape serves as the candidate submitted
/// to `insert`/`replace` and as the stored record; admission is gated by the
/// validator, after which only the leave and promotion workflows touch
/// `on_leave`, `annual_leave`, and `position`.
///
/// Serialized with the registry's original camelCase wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub age: u8,
    pub position: Position,
    pub on_leave: bool,
    pub hire_date: NaiveDate,
    pub annual_leave: u32,
}

impl Employee {
    /// Whether the record has exhausted its annual leave allowance.
    pub fn leave_exhausted(&self) -> bool {
        self.annual_leave == 0
    }
}
