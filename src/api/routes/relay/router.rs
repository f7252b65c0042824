//! Router for the completion relay API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, response::Json, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::openai::{Message, Role, reply};

type SharedState = Arc<RwLock<AppState>>;

/// Forward a transcript to the completion provider and relay back the
/// reply text. The fixed system instruction is prepended here and is
/// never part of the transcript the client holds.
async fn relay_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::RelayRequest>,
) -> Result<Json<public::RelayResponse>, crate::api::public::ApiError> {
    let (openai_api_hostname, openai_api_key, openai_model, system_message) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let AppConfig {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
            ..
        } = &shared_state.config;
        (
            openai_api_hostname.clone(),
            openai_api_key.clone(),
            openai_model.clone(),
            system_message.clone(),
        )
    };

    // The outbound order is [system turn, ...transcript in client
    // order], with the client's turns passed through unmodified
    let mut transcript = vec![Message::new(Role::System, &system_message)];
    transcript.extend(payload.messages);

    let text = reply(
        &transcript,
        &openai_api_hostname,
        &openai_api_key,
        &openai_model,
    )
    .await?;

    Ok(Json(public::RelayResponse { reply: text }))
}

/// Create the relay router. Only POST is routed; axum answers any
/// other method with 405 before the handler runs.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(relay_handler))
}
