use crate::errors::AppError;
use crate::models::application::{ApplicationUpdate, NewApplication};

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be blank")));
    }
    Ok(())
}

pub fn validate_new(new: &NewApplication) -> Result<(), AppError> {
    require_non_blank("company", &new.company)?;
    require_non_blank("role", &new.role)?;
    require_non_blank("status", &new.status)
}

/// Only fields present in the update are checked.
pub fn validate_update(update: &ApplicationUpdate) -> Result<(), AppError> {
    if let Some(company) = &update.company {
        require_non_blank("company", company)?;
    }
    if let Some(role) = &update.role {
        require_non_blank("role", role)?;
    }
    if let Some(status) = &update.status {
        require_non_blank("status", status)?;
    }
    Ok(())
}
