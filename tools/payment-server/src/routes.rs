use std::sync::Arc;

use axum::{extract::State as AxumState, response::IntoResponse, Json};
use eleora_payments::CreateSessionRequest;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::gateway;
use crate::state::State;

/// Create a hosted checkout session for the given items.
pub async fn create_session_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.items.is_empty() {
        return Err(AppError::MalformedPayload("no items".to_string()));
    }
    for item in &payload.items {
        if item.amount <= 0 || item.quantity == 0 {
            return Err(AppError::MalformedPayload(format!(
                "item '{}' has a non-positive amount or quantity",
                item.name
            )));
        }
    }

    let session = gateway::create_session(&state, &payload).await?;
    info!(
        order = %payload.order_id,
        session = %session.session_id,
        "created checkout session"
    );
    Ok(Json(session))
}

/// Receive gateway events.
///
/// Signature verification belongs to the gateway SDK deployment in front
/// of this route; here events are acknowledged and logged so operators can
/// reconcile payment state.
pub async fn webhook_handler(Json(event): Json<Value>) -> impl IntoResponse {
    let event_type = event["type"].as_str().unwrap_or("unknown");
    let order_id = event["data"]["object"]["metadata"]["order_id"]
        .as_str()
        .unwrap_or("-");

    match event_type {
        "checkout.session.completed" => {
            info!(order = order_id, "payment successful");
        }
        "payment_intent.payment_failed" => {
            warn!(order = order_id, "payment failed");
        }
        other => {
            debug!(event = other, "unhandled event type");
        }
    }

    Json(json!({ "received": true }))
}
