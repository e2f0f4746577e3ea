use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

lazy_static! {
    pub static ref REGEX_USERNAME: Regex = Regex::new(r"^\w+$").unwrap();
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    #[schema(example = "john_doe")]
    pub username: String,
    pub favorite_car_ids: Vec<i32>,
    pub order_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(
        length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"),
        regex(
            path = *REGEX_USERNAME,
            message = "Username can only contain letters, numbers and underscores"
        )
    )]
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(
        length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"),
        regex(
            path = *REGEX_USERNAME,
            message = "Username can only contain letters, numbers and underscores"
        )
    )]
    pub username: Option<String>,
}
