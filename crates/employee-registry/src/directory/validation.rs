use chrono::NaiveDate;

use super::domain::Employee;

/// A single field-level rejection. The validator surfaces exactly one of
/// these per candidate, tied to the first field (in declaration order) that
/// fails; it never aggregates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be at least 3 characters")]
    IdTooShort,
    #[error("name length must be between 5 and 15 characters")]
    NameLength,
    #[error("name must contain only letters")]
    NameNotAlphabetic,
    #[error("email must be a well-formed address")]
    EmailMalformed,
    #[error("phone number must start with 05 and consist of exactly 10 digits")]
    PhoneNumberFormat,
    #[error("age must be between 26 and 65")]
    AgeOutOfRange,
    #[error("a new employee cannot start on leave")]
    OnLeaveAtAdmission,
    #[error("hire date must be in the present or the past")]
    HireDateInFuture,
    #[error("annual leave must be a positive number")]
    AnnualLeaveNotPositive,
}

type FieldCheck = fn(&Employee, NaiveDate) -> Result<(), ValidationError>;

/// Per-field checks in record declaration order. The slice order is the
/// contract: the first failing entry decides the returned error. `position`
/// has no entry because it is a typed enum; boundary parsing rejects invalid
/// labels before a candidate exists.
const FIELD_CHECKS: &[FieldCheck] = &[
    check_id,
    check_name,
    check_email,
    check_phone_number,
    check_age,
    check_on_leave,
    check_hire_date,
    check_annual_leave,
];

/// Validate a candidate record against every field constraint, returning the
/// first violation in field declaration order. Stateless; `today` anchors the
/// hire-date check so callers (and tests) control the clock.
pub fn validate(candidate: &Employee, today: NaiveDate) -> Result<(), ValidationError> {
    for check in FIELD_CHECKS {
        check(candidate, today)?;
    }
    Ok(())
}

fn check_id(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    if candidate.id.0.chars().count() < 3 {
        return Err(ValidationError::IdTooShort);
    }
    Ok(())
}

fn check_name(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    let length = candidate.name.chars().count();
    if !(5..=15).contains(&length) {
        return Err(ValidationError::NameLength);
    }
    if !candidate.name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NameNotAlphabetic);
    }
    Ok(())
}

fn check_email(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    if is_well_formed_email(&candidate.email) {
        Ok(())
    } else {
        Err(ValidationError::EmailMalformed)
    }
}

// Structural check only: one '@', a non-empty local part, and a dotted domain
// with no whitespace. Deliverability is out of scope.
fn is_well_formed_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn check_phone_number(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    let phone = &candidate.phone_number;
    let well_formed =
        phone.len() == 10 && phone.starts_with("05") && phone.bytes().all(|b| b.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::PhoneNumberFormat)
    }
}

fn check_age(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    if (26..=65).contains(&candidate.age) {
        Ok(())
    } else {
        Err(ValidationError::AgeOutOfRange)
    }
}

fn check_on_leave(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    if candidate.on_leave {
        Err(ValidationError::OnLeaveAtAdmission)
    } else {
        Ok(())
    }
}

fn check_hire_date(candidate: &Employee, today: NaiveDate) -> Result<(), ValidationError> {
    if candidate.hire_date > today {
        Err(ValidationError::HireDateInFuture)
    } else {
        Ok(())
    }
}

fn check_annual_leave(candidate: &Employee, _today: NaiveDate) -> Result<(), ValidationError> {
    if candidate.annual_leave == 0 {
        Err(ValidationError::AnnualLeaveNotPositive)
    } else {
        Ok(())
    }
}
