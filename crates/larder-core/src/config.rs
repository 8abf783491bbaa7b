// ── Runtime connection configuration ──
//
// These types describe *how* to reach the document store. They carry
// credential data and connection tuning, but never touch disk. The TUI
// constructs a `StoreConfig` (from flags or larder-config) and hands it in.

use secrecy::SecretString;
use url::Url;

/// How to authenticate with the document store.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// API key, sent as `X-API-KEY` on every request.
    ApiKey(SecretString),
    /// No authentication (stores with auth disabled, local dev).
    Anonymous,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// System CA store (strict). Default — the store is a managed service.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-hosted stores with self-signed certs).
    DangerAcceptInvalid,
}

impl PartialEq for TlsVerification {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SystemDefaults, Self::SystemDefaults)
            | (Self::DangerAcceptInvalid, Self::DangerAcceptInvalid) => true,
            (Self::CustomCa(a), Self::CustomCa(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TlsVerification {}

/// Configuration for connecting to a single document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store base URL (e.g., `https://store.example.com`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// Collection holding the inventory documents.
    pub collection: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}

impl StoreConfig {
    pub const DEFAULT_COLLECTION: &'static str = "inventory";
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:7171"
                .parse()
                .expect("default store URL is valid"),
            auth: AuthCredentials::Anonymous,
            collection: Self::DEFAULT_COLLECTION.into(),
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}
