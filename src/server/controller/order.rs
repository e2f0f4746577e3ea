use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::order::{CreateOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List every order.
///
/// # Returns
/// - `200 OK` - All orders ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).get_all().await?;

    Ok(Json(
        orders
            .into_iter()
            .map(|order| order.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get an order by id.
///
/// # Returns
/// - `200 OK` - The order
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - No order with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 400, description = "Invalid order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let order = OrderService::new(&state.db).get_by_id(id).await?;

    Ok(Json(order.into_dto()))
}

/// Place an order.
///
/// The total price is computed from the cars and the order date is set to now.
///
/// # Returns
/// - `201 Created` - The created order
/// - `400 Bad Request` - Invalid order data
/// - `404 Not Found` - User or car not found
/// - `409 Conflict` - A car is already ordered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 404, description = "User or car not found", body = ErrorDto),
        (status = 409, description = "Car already ordered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .create(CreateOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Update an order.
///
/// Omitted fields keep their current value. The total is recomputed and the order date is
/// reset to now.
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Invalid order data
/// - `404 Not Found` - Order, user or car not found
/// - `409 Conflict` - A car belongs to another order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ErrorDto),
        (status = 404, description = "Order, user or car not found", body = ErrorDto),
        (status = 409, description = "Car already ordered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let order = OrderService::new(&state.db)
        .update(UpdateOrderParams::from_dto(id, payload))
        .await?;

    Ok(Json(order.into_dto()))
}

/// Delete an order and release its cars.
///
/// # Returns
/// - `204 No Content` - Order deleted
/// - `400 Bad Request` - Malformed or non-positive id
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted order"),
        (status = 400, description = "Invalid order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
