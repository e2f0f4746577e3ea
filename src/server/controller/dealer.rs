use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        car::CarDto,
        dealer::{BrandQuery, CreateDealerDto, DealerDto, UpdateDealerDto},
    },
    server::{
        error::AppError,
        model::dealer::{CreateDealerParams, UpdateDealerParams},
        service::{car::CarService, dealer::DealerService},
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping dealer endpoints in OpenAPI documentation
pub static DEALER_TAG: &str = "dealer";

/// List every dealer with its cars.
///
/// # Returns
/// - `200 OK` - All dealers ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dealers",
    tag = DEALER_TAG,
    responses(
        (status = 200, description = "All dealers", body = Vec<DealerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_dealers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let dealers = DealerService::new(&state.db).get_all().await?;

    Ok(Json(
        dealers
            .into_iter()
            .map(|dealer| dealer.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a dealer by id.
///
/// # Returns
/// - `200 OK` - The dealer with its cars
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - No dealer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dealers/{id}",
    tag = DEALER_TAG,
    params(
        ("id" = i32, Path, description = "Dealer ID")
    ),
    responses(
        (status = 200, description = "The dealer", body = DealerDto),
        (status = 400, description = "Invalid dealer ID", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dealer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let dealer = DealerService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dealer.into_dto()))
}

/// List the cars owned by a dealer.
///
/// # Returns
/// - `200 OK` - The dealer's cars
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - No dealer with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dealers/{dealer_id}/cars",
    tag = DEALER_TAG,
    params(
        ("dealer_id" = i32, Path, description = "Dealer ID")
    ),
    responses(
        (status = 200, description = "The dealer's cars", body = Vec<CarDto>),
        (status = 400, description = "Invalid dealer ID", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dealer_cars(
    State(state): State<AppState>,
    Path(dealer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dealer_id = parse_id(&dealer_id)?;

    let cars = CarService::new(&state.db).get_by_dealer(dealer_id).await?;

    Ok(Json(
        cars.into_iter().map(|car| car.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Find the dealers stocking a brand.
///
/// The brand is matched case-insensitively.
///
/// # Returns
/// - `200 OK` - Matching dealers with their cars
/// - `400 Bad Request` - Brand missing or not 2 to 50 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dealers/by-brand",
    tag = DEALER_TAG,
    params(BrandQuery),
    responses(
        (status = 200, description = "Dealers stocking the brand", body = Vec<DealerDto>),
        (status = 400, description = "Invalid brand", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dealers_by_brand(
    State(state): State<AppState>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    dealers_by_brand(&state, query).await
}

/// Find the dealers stocking a brand.
///
/// Kept for clients of the former native-query route. Answers exactly like
/// `/api/dealers/by-brand`.
#[utoipa::path(
    get,
    path = "/api/dealers/by-brand-native",
    tag = DEALER_TAG,
    params(BrandQuery),
    responses(
        (status = 200, description = "Dealers stocking the brand", body = Vec<DealerDto>),
        (status = 400, description = "Invalid brand", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dealers_by_brand_native(
    State(state): State<AppState>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    dealers_by_brand(&state, query).await
}

async fn dealers_by_brand(
    state: &AppState,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> Result<Json<Vec<DealerDto>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let dealers = DealerService::new(&state.db)
        .get_by_brand(query.brand.as_deref())
        .await?;

    Ok(Json(
        dealers
            .into_iter()
            .map(|dealer| dealer.into_dto())
            .collect(),
    ))
}

/// Create a dealer.
///
/// # Returns
/// - `201 Created` - The created dealer
/// - `400 Bad Request` - Invalid dealer data
/// - `409 Conflict` - Name, phone number or address already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/dealers",
    tag = DEALER_TAG,
    request_body = CreateDealerDto,
    responses(
        (status = 201, description = "Successfully created dealer", body = DealerDto),
        (status = 400, description = "Invalid dealer data", body = ErrorDto),
        (status = 409, description = "Dealer already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dealer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDealerDto>,
) -> Result<impl IntoResponse, AppError> {
    let dealer = DealerService::new(&state.db)
        .create(CreateDealerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(dealer.into_dto())))
}

/// Update a dealer.
///
/// Omitted fields keep their stored value.
///
/// # Returns
/// - `200 OK` - The updated dealer
/// - `400 Bad Request` - Invalid dealer data
/// - `404 Not Found` - Dealer not found
/// - `409 Conflict` - Name, phone number or address used by another dealer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/dealers/{id}",
    tag = DEALER_TAG,
    params(
        ("id" = i32, Path, description = "Dealer ID")
    ),
    request_body = UpdateDealerDto,
    responses(
        (status = 200, description = "Successfully updated dealer", body = DealerDto),
        (status = 400, description = "Invalid dealer data", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 409, description = "Dealer already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dealer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateDealerDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let dealer = DealerService::new(&state.db)
        .update(UpdateDealerParams::from_dto(id, payload))
        .await?;

    Ok(Json(dealer.into_dto()))
}

/// Delete a dealer and all of its cars.
///
/// # Returns
/// - `204 No Content` - Dealer deleted
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - Dealer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/dealers/{id}",
    tag = DEALER_TAG,
    params(
        ("id" = i32, Path, description = "Dealer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted dealer"),
        (status = 400, description = "Invalid dealer ID", body = ErrorDto),
        (status = 404, description = "Dealer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dealer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    DealerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
