//! The gateway's hosted checkout-session REST call.
//!
//! The gateway speaks form-encoded requests with indexed bracket keys;
//! this module flattens a [`CreateSessionRequest`] into that shape and
//! performs the authenticated POST.

use eleora_payments::{CreateSessionRequest, CreateSessionResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::state::State;

/// Session object as the gateway returns it.
#[derive(Debug, Deserialize)]
struct GatewaySession {
    id: String,
    url: String,
}

/// Flatten a session request into the gateway's form parameters.
pub fn session_form(request: &CreateSessionRequest, origin: &str) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        (
            "payment_method_types[0]".to_string(),
            "card".to_string(),
        ),
        (
            "customer_email".to_string(),
            request.customer_email.clone(),
        ),
        (
            "success_url".to_string(),
            format!(
                "{origin}/order-success?session_id={{CHECKOUT_SESSION_ID}}&order_id={}",
                request.order_id
            ),
        ),
        ("cancel_url".to_string(), format!("{origin}/checkout")),
        (
            "metadata[order_id]".to_string(),
            request.order_id.clone(),
        ),
    ];

    for (i, item) in request.items.iter().enumerate() {
        form.push((
            format!("line_items[{i}][price_data][currency]"),
            "inr".to_string(),
        ));
        form.push((
            format!("line_items[{i}][price_data][product_data][name]"),
            item.name.clone(),
        ));
        if !item.description.is_empty() {
            form.push((
                format!("line_items[{i}][price_data][product_data][description]"),
                item.description.clone(),
            ));
        }
        form.push((
            format!("line_items[{i}][price_data][unit_amount]"),
            item.amount.to_string(),
        ));
        form.push((
            format!("line_items[{i}][quantity]"),
            item.quantity.to_string(),
        ));
    }

    form
}

/// Create a hosted checkout session at the gateway.
pub async fn create_session(
    state: &Arc<State>,
    request: &CreateSessionRequest,
) -> Result<CreateSessionResponse, AppError> {
    if state.config.gateway_secret_key.is_empty() {
        return Err(AppError::MissingCredentials);
    }

    let form = session_form(request, &state.config.checkout_origin);
    let response = state
        .http
        .post(format!("{}/v1/checkout/sessions", state.config.gateway_url))
        .bearer_auth(&state.config.gateway_secret_key)
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Gateway {
            status: status.as_u16(),
            body,
        });
    }

    let session: GatewaySession = response.json().await?;
    Ok(CreateSessionResponse {
        session_id: session.id,
        url: session.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eleora_payments::SessionLineItem;

    fn request() -> CreateSessionRequest {
        CreateSessionRequest {
            items: vec![
                SessionLineItem {
                    name: "Honey (100g)".to_string(),
                    description: "Raw honey".to_string(),
                    amount: 15000,
                    quantity: 2,
                },
                SessionLineItem {
                    name: "Ghee (500g)".to_string(),
                    description: String::new(),
                    amount: 64999,
                    quantity: 1,
                },
            ],
            customer_email: "asha@example.com".to_string(),
            order_id: "a3f9".to_string(),
        }
    }

    fn value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_form_carries_session_fields() {
        let form = session_form(&request(), "http://localhost:3000");

        assert_eq!(value(&form, "mode"), Some("payment"));
        assert_eq!(value(&form, "customer_email"), Some("asha@example.com"));
        assert_eq!(value(&form, "metadata[order_id]"), Some("a3f9"));
        assert_eq!(
            value(&form, "success_url"),
            Some("http://localhost:3000/order-success?session_id={CHECKOUT_SESSION_ID}&order_id=a3f9")
        );
        assert_eq!(
            value(&form, "cancel_url"),
            Some("http://localhost:3000/checkout")
        );
    }

    #[test]
    fn test_form_indexes_line_items() {
        let form = session_form(&request(), "http://localhost:3000");

        assert_eq!(
            value(&form, "line_items[0][price_data][product_data][name]"),
            Some("Honey (100g)")
        );
        assert_eq!(
            value(&form, "line_items[0][price_data][unit_amount]"),
            Some("15000")
        );
        assert_eq!(value(&form, "line_items[0][quantity]"), Some("2"));
        assert_eq!(
            value(&form, "line_items[1][price_data][unit_amount]"),
            Some("64999")
        );
        // Empty descriptions are omitted rather than sent blank.
        assert_eq!(
            value(&form, "line_items[1][price_data][product_data][description]"),
            None
        );
    }
}
