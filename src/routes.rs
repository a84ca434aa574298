use axum::{routing::post, Router};

use crate::handlers;
use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/predict-yield", post(handlers::predict::predict_yield))
}
