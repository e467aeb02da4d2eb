use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::ContactForm;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("regex compiles"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Child's age is the only optional field.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), ValidationError> {
    for (name, value) in [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::Missing(name));
        }
    }
    if !EMAIL.is_match(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
