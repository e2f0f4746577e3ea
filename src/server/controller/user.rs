use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - All users with favorites and orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|user| user.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - No user with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(Json(user.into_dto()))
}

/// Create a user.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid username
/// - `409 Conflict` - Username already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid username", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid username
/// - `404 Not Found` - User not found
/// - `409 Conflict` - Username used by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid username", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let user = UserService::new(&state.db)
        .update(UpdateUserParams::from_dto(id, payload))
        .await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user with their favorites and orders.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a car to a user's favorites.
///
/// # Returns
/// - `201 Created` - Favorite added
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - User or car not found
/// - `409 Conflict` - Car already in favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorite-cars/{car_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("car_id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 201, description = "Favorite added"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "User or car not found", body = ErrorDto),
        (status = 409, description = "Car already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_car(
    State(state): State<AppState>,
    Path((user_id, car_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&user_id)?;
    let car_id = parse_id(&car_id)?;

    UserService::new(&state.db)
        .add_favorite(user_id, car_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove a car from a user's favorites.
///
/// # Returns
/// - `204 No Content` - Favorite removed
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - User or car not found, or car not in favorites
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorite-cars/{car_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("car_id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_car(
    State(state): State<AppState>,
    Path((user_id, car_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&user_id)?;
    let car_id = parse_id(&car_id)?;

    UserService::new(&state.db)
        .remove_favorite(user_id, car_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
