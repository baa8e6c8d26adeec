use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{auth, car, customer, location, message, order},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Public
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/cars", get(car::list_cars))
        .route("/api/cars/{id}", get(car::get_car))
        .route("/api/locations", get(location::list_locations))
        .route("/api/locations/{id}", get(location::get_location))
        // Authenticated (any role)
        .route("/api/logout", post(auth::logout))
        .route("/api/user-profile", get(auth::user_profile))
        // Customer
        .route(
            "/api/customer/profile",
            get(customer::my_profile).put(customer::update_profile),
        )
        .route("/api/customer/identity", post(customer::upload_identity))
        .route(
            "/api/customer/orders",
            post(order::create_order).get(order::my_orders),
        )
        .route(
            "/api/customer/orders/{id}",
            get(order::get_order).put(order::update_order),
        )
        .route(
            "/api/customer/messages",
            post(message::send_message).get(message::my_messages),
        )
        // Admin
        .route("/api/admin/cars", post(car::create_car))
        .route(
            "/api/admin/cars/{id}",
            put(car::update_car).delete(car::delete_car),
        )
        .route("/api/admin/locations", post(location::create_location))
        .route(
            "/api/admin/locations/{id}",
            put(location::update_location).delete(location::delete_location),
        )
        .route("/api/admin/customers", get(customer::list_customers))
        .route("/api/admin/customers/{id}", get(customer::get_customer))
        .route(
            "/api/admin/customers/{user_id}/status",
            put(customer::update_account_status),
        )
        .route("/api/admin/orders", get(order::list_orders))
        .route(
            "/api/admin/orders/{id}/status",
            put(order::update_order_status),
        )
        .route(
            "/api/admin/messages",
            get(message::list_messages).post(message::send_message),
        )
}
