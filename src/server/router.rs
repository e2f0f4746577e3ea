use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        car::{CarDto, CreateCarDto, UpdateCarDto},
        dealer::{CreateDealerDto, DealerDto, UpdateDealerDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{car, dealer, health, order, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Dealer API", description = "Cars, dealers, orders and users"),
    tags(
        (name = "car", description = "Car inventory"),
        (name = "dealer", description = "Dealers and brand lookup"),
        (name = "order", description = "Orders of cars placed by users"),
        (name = "user", description = "Users and their favorite cars"),
        (name = "health", description = "Service health")
    ),
    paths(
        health::health,
        car::get_all_cars,
        car::get_car_by_id,
        car::filter_cars,
        car::create_car,
        car::create_cars_bulk,
        car::update_car,
        car::delete_car,
        dealer::get_all_dealers,
        dealer::get_dealer_by_id,
        dealer::get_dealer_cars,
        dealer::get_dealers_by_brand,
        dealer::get_dealers_by_brand_native,
        dealer::create_dealer,
        dealer::update_dealer,
        dealer::delete_dealer,
        order::get_all_orders,
        order::get_order_by_id,
        order::create_order,
        order::update_order,
        order::delete_order,
        user::get_all_users,
        user::get_user_by_id,
        user::create_user,
        user::update_user,
        user::delete_user,
        user::add_favorite_car,
        user::remove_favorite_car,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        CarDto,
        CreateCarDto,
        UpdateCarDto,
        DealerDto,
        CreateDealerDto,
        UpdateDealerDto,
        OrderDto,
        CreateOrderDto,
        UpdateOrderDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
    ))
)]
pub struct ApiDoc;

/// Builds every API route plus the OpenAPI document and Swagger UI.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/cars", get(car::get_all_cars).post(car::create_car))
        .route("/api/cars/bulk", post(car::create_cars_bulk))
        .route("/api/cars/filter", get(car::filter_cars))
        .route(
            "/api/cars/{id}",
            get(car::get_car_by_id)
                .put(car::update_car)
                .delete(car::delete_car),
        )
        .route(
            "/api/dealers",
            get(dealer::get_all_dealers).post(dealer::create_dealer),
        )
        .route("/api/dealers/by-brand", get(dealer::get_dealers_by_brand))
        .route(
            "/api/dealers/by-brand-native",
            get(dealer::get_dealers_by_brand_native),
        )
        .route(
            "/api/dealers/{id}",
            get(dealer::get_dealer_by_id)
                .put(dealer::update_dealer)
                .delete(dealer::delete_dealer),
        )
        .route("/api/dealers/{id}/cars", get(dealer::get_dealer_cars))
        .route(
            "/api/orders",
            get(order::get_all_orders).post(order::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(order::get_order_by_id)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route("/api/users", get(user::get_all_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{id}/favorite-cars/{car_id}",
            post(user::add_favorite_car).delete(user::remove_favorite_car),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
