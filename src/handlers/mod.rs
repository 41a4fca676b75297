pub mod bookings;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::health))
        .route("/agendar", post(bookings::create_booking))
        .route("/agenda", get(bookings::list_bookings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
