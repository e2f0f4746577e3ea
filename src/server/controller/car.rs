use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CarFilterQuery, CreateCarDto, UpdateCarDto},
    },
    server::{
        error::AppError,
        model::car::{CreateCarParams, UpdateCarParams},
        service::car::CarService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// List every car.
///
/// # Returns
/// - `200 OK` - All cars ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "All cars", body = Vec<CarDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db).get_all().await?;

    Ok(Json(
        cars.into_iter().map(|car| car.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a car by id.
///
/// # Returns
/// - `200 OK` - The car
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - No car with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 400, description = "Invalid car ID", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let car = CarService::new(&state.db).get_by_id(id).await?;

    Ok(Json(car.into_dto()))
}

/// Filter cars by year range and maximum mileage.
///
/// Every bound is optional and inclusive.
///
/// # Returns
/// - `200 OK` - Matching cars
/// - `400 Bad Request` - Unparseable bound, `minYear` before 1886, or negative `maxMileage`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars/filter",
    tag = CAR_TAG,
    params(CarFilterQuery),
    responses(
        (status = 200, description = "Matching cars", body = Vec<CarDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_cars(
    State(state): State<AppState>,
    query: Result<Query<CarFilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let cars = CarService::new(&state.db).filter(query.into()).await?;

    Ok(Json(
        cars.into_iter().map(|car| car.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a car.
///
/// # Returns
/// - `201 Created` - The created car
/// - `400 Bad Request` - Invalid car data
/// - `404 Not Found` - Dealer not found
/// - `409 Conflict` - VIN already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Successfully created car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 409, description = "VIN already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db)
        .create(CreateCarParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Create several cars in one request.
///
/// The batch is stored only if every car is valid, every VIN is new and unique within the
/// batch, and every dealer exists.
///
/// # Returns
/// - `201 Created` - The created cars in request order
/// - `400 Bad Request` - Invalid car data, field keys prefixed with `[index].`
/// - `404 Not Found` - Dealer not found
/// - `409 Conflict` - VIN already in use or repeated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cars/bulk",
    tag = CAR_TAG,
    request_body = Vec<CreateCarDto>,
    responses(
        (status = 201, description = "Successfully created cars", body = Vec<CarDto>),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 409, description = "VIN already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cars_bulk(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateCarDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    for (index, dto) in payload.iter().enumerate() {
        dto.validate().map_err(|errors| AppError::IndexedFieldValidation { index, errors })?;
    }

    let params = payload.into_iter().map(CreateCarParams::from_dto).collect();
    let cars = CarService::new(&state.db).create_bulk(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            cars.into_iter().map(|car| car.into_dto()).collect::<Vec<_>>(),
        ),
    ))
}

/// Update a car.
///
/// Omitted fields keep their stored value. The VIN cannot be changed.
///
/// # Returns
/// - `200 OK` - The updated car
/// - `400 Bad Request` - Invalid car data or a different VIN
/// - `404 Not Found` - Car or dealer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 404, description = "Car or dealer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let car = CarService::new(&state.db)
        .update(UpdateCarParams::from_dto(id, payload))
        .await?;

    Ok(Json(car.into_dto()))
}

/// Delete a car.
///
/// Removes the car from every user's favorites. If the car was ordered, the whole order is
/// deleted and its other cars are released.
///
/// # Returns
/// - `204 No Content` - Car deleted
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - Car not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted car"),
        (status = 400, description = "Invalid car ID", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    CarService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
