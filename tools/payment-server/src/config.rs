//! Server configuration from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the payment gateway's REST API.
    pub gateway_url: String,
    /// Secret API key for the gateway.
    pub gateway_secret_key: String,
    /// Origin of the storefront, used for success/cancel redirects.
    pub checkout_origin: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("ELEORA_PAYMENTS_PORT", "3001"),
            gateway_url: try_load("GATEWAY_URL", "https://api.stripe.com"),
            gateway_secret_key: load_secret("GATEWAY_SECRET_KEY"),
            checkout_origin: try_load("CHECKOUT_ORIGIN", "http://localhost:3000"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_secret(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set; gateway calls will be refused");
        String::new()
    })
}
