//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use rutdoc::api::AppState;
use rutdoc::api::app;
use rutdoc::core::AppConfig;

/// Creates a test application router pointed at a mock completion
/// provider instead of the real one.
pub fn test_app(provider_hostname: &str) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: provider_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o"),
        system_message: String::from("You are RutDoc, a test persona."),
        relay_api_url: String::from("http://localhost:2222/api/rutdoc"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
