use crate::handlers::{listings, users};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{routing::{get, post}, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/listings", get(listings::get_listings).post(listings::create_listing))
        .route("/users", post(users::create_user));

    Router::new()
        .nest("/public-api", api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
