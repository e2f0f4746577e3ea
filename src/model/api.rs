use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body returned for every non-field error.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    /// HTTP status code repeated in the body.
    pub status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthDto {
    pub status: String,
}
