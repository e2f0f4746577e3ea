use crate::server::error::AppError;

/// Parses a record id taken from a request path.
///
/// Only the syntax is checked here; services reject non-positive ids with their own
/// message.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::BadRequest)` - The segment is not an integer in `i32` range
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|e| AppError::BadRequest(format!("Invalid ID '{}': {}", value, e)))
}
