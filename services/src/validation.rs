//! Format rules applied to ticket submissions before anything is persisted.

use regex::Regex;

use crate::error::{ServiceError, ServiceResult};

pub const INVALID_EMP_ID: &str = "Invalid Employee ID format";
pub const INVALID_EMAIL_DOMAIN: &str = "Invalid email domain";

/// Reserved placeholder that never identifies a real employee.
const RESERVED_EMP_ID: &str = "ATS0000";

lazy_static::lazy_static! {
    static ref EMP_ID_REGEX: Regex = Regex::new(r"^ATS0[0-9]{3}$").unwrap();
    static ref EMAIL_DOMAIN_REGEX: Regex = Regex::new(
        r"@(gmail\.com|outlook\.com|[A-Za-z0-9_-]+\.in|[A-Za-z0-9_-]+\.org\.co)$"
    )
    .unwrap();
}

/// `ATS0` followed by exactly three digits, excluding `ATS0000`.
pub fn validate_emp_id(emp_id: &str) -> ServiceResult<()> {
    if EMP_ID_REGEX.is_match(emp_id) && emp_id != RESERVED_EMP_ID {
        Ok(())
    } else {
        Err(ServiceError::invalid(INVALID_EMP_ID))
    }
}

/// Accepts `@gmail.com`, `@outlook.com`, `@<label>.in` and `@<label>.org.co` addresses.
pub fn validate_email_domain(email: &str) -> ServiceResult<()> {
    if EMAIL_DOMAIN_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ServiceError::invalid(INVALID_EMAIL_DOMAIN))
    }
}

/// Free-text fields must be present. An empty string counts as missing.
pub fn validate_required(field: &str, value: &str) -> ServiceResult<()> {
    if value.is_empty() {
        Err(ServiceError::invalid(format!("Missing required field: {field}")))
    } else {
        Ok(())
    }
}
