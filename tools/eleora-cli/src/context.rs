//! CLI execution context.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eleora_payments::HttpSessionClient;
use eleora_store::{CartSlot, JsonCatalog, JsonContactStore, JsonOrderStore, Store};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Shared file store under the configured data directory.
    store: Arc<Store>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        let data_dir = {
            let dir = PathBuf::from(&config.store.data_dir);
            if dir.is_absolute() {
                dir
            } else {
                cwd.join(dir)
            }
        };
        let store = Store::file(&data_dir)
            .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;
        output.debug(&format!("Using data directory {}", data_dir.display()));

        Ok(Self {
            config,
            output,
            store: Arc::new(store),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["eleora.toml", ".eleora.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The session cart slot.
    pub fn cart_slot(&self) -> CartSlot {
        CartSlot::new(self.store.clone())
    }

    /// The product catalog.
    pub fn catalog(&self) -> JsonCatalog {
        JsonCatalog::new(self.store.clone())
    }

    /// The order store.
    pub fn orders(&self) -> JsonOrderStore {
        JsonOrderStore::new(self.store.clone())
    }

    /// The contact-message store.
    pub fn contacts(&self) -> JsonContactStore {
        JsonContactStore::new(self.store.clone())
    }

    /// Client for the payment-session server.
    pub fn session_client(&self) -> HttpSessionClient {
        HttpSessionClient::new(self.config.payments.server_url.clone())
    }

    /// User ID of the signed-in customer, if any.
    pub fn user_id(&self) -> Option<String> {
        self.config.session.user_id.clone()
    }
}
