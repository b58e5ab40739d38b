use cd_defs::StepError;

/// Borrow a required step argument, rejecting `None` and empty strings.
pub fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, StepError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(StepError::InvalidArgument(field)),
    }
}
