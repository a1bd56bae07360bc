use crate::error::AppError;

/// Validates the run configuration
///
/// # Arguments
/// * `surname` - Surname used in the results file name
///
/// # Validation Rules
/// - Surname cannot contain path separators, the results file always lands
///   in the output directory
///
/// Empty answers are accepted. An empty names path ends up as a missing
/// names file, and an empty surname gives a results file starting with `_`.
pub fn validate_config(surname: &str) -> Result<(), AppError> {
    if surname.contains(['/', '\\']) {
        return Err(AppError::config_error(format!(
            "Surname '{surname}' cannot contain path separators"
        )));
    }

    Ok(())
}
