//! Server configuration and the user-facing message catalog.

use serde::{Deserialize, Serialize};

/// Default host the HTTP server binds to.
pub const DEFAULT_HOST: &str = "localhost";

/// Default port the HTTP server binds to.
pub const DEFAULT_PORT: u16 = 3000;

/// Messages returned in response payloads.
///
/// Kept in one place so handlers and tests agree on the exact wording.
pub mod messages {
    pub const WORD_AND_SYNONYM_CANT_BE_SAME: &str = "Word and synonym cannot be same.";
    pub const SYNONYM_SUCCESSFULLY_ADDED: &str = "Synonym successfully added.";
    pub const SYNONYM_ALREADY_ADDED: &str = "Synonym already added.";
    pub const SYNONYMS_SUCCESSFULLY_RETURNED: &str = "Synonyms successfully returned.";
    pub const SYNONYM_SUCCESSFULLY_DELETED: &str = "Synonym successfully deleted.";
    pub const SYNONYMS_LIST_EMPTY: &str = "This word does not have synonyms, please add one.";
    pub const UNPROCESSABLE_DATA: &str = "Data cannot be processed.";

    /// Message for a delete request naming a relation that does not exist.
    pub fn synonym_doesnt_exist(synonym: &str) -> String {
        format!("Synonym {synonym} does not exist.")
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Hostname or address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given host and port.
    pub fn new<S: Into<String>>(host: S, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
        }
    }

    /// The `host:port` string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
