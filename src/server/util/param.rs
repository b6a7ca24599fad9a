use crate::server::error::AppError;

/// Returns a required parameter, rejecting blank values.
///
/// # Arguments
/// - `name` - Parameter name reported in the error
/// - `value` - Raw parameter value
///
/// # Returns
/// - `Ok(&str)` - The value, unchanged
/// - `Err(AppError::MissingParameter(name))` - The value is empty or whitespace only
pub fn required_param<'a>(name: &'static str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingParameter(name));
    }

    Ok(value)
}
