//! AgriAdvisor backend
//!
//! A farm-advisory web application: one endpoint turns farm/soil inputs
//! into a heuristic crop-yield estimate plus categorized advisory text.
//! No persistence; every value lives for exactly one request/response
//! cycle.

pub mod config;
pub mod datasources;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use config::Config;
use datasources::WeatherSource;
use logic::YieldEstimator;

/// Application state shared across handlers. The weather source and the
/// estimator's confidence model are injected here so tests can pin them.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: Arc<dyn WeatherSource>,
    pub estimator: Arc<YieldEstimator>,
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // The prediction form is served by a separate frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "AgriAdvisor Farm Advisory API v1.0"
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::SimulatedWeather;
    use crate::logic::confidence::FieldCoverageConfidence;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState {
            config: Arc::new(Config::default()),
            weather: Arc::new(SimulatedWeather),
            estimator: Arc::new(YieldEstimator::new(Arc::new(FieldCoverageConfidence))),
        };
        create_app(state)
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn prediction_over_simulated_weather_honors_contract_bounds() {
        let body = json!({
            "cropType": "rice",
            "landSize": "4",
            "location": "Assam",
            "sowingDate": "2024-07-15"
        });
        let request = Request::post("/api/predict-yield")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(payload["success"], json!(true));
        let prediction = &payload["prediction"];
        assert!(prediction["predictedYield"].as_f64().unwrap() >= 0.0);
        let confidence = prediction["confidence"].as_u64().unwrap();
        assert!((70..=95).contains(&confidence));
        // Simulated weather never leaves its bands.
        let weather = &prediction["weather"];
        assert!((25.0..35.0).contains(&weather["temperature"].as_f64().unwrap()));
        assert!((50.0..150.0).contains(&weather["rainfall"].as_f64().unwrap()));
        assert!((60.0..90.0).contains(&weather["humidity"].as_f64().unwrap()));
        assert!(
            prediction["recommendations"]["general"]
                .as_array()
                .unwrap()
                .len()
                >= 2
        );
    }
}

