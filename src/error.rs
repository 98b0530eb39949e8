use crate::provider::ProviderError;
use thiserror::Error;

/// Registry error taxonomy.
///
/// Handlers map these to per-endpoint status codes; the wire format is a
/// plain `{"error": message}` body with no structured code.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An external provider call failed (network, throttling, or the
    /// provider rejected the request). Never retried.
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// The referenced title, attendee, or capture pipeline is not present
    /// in the local registry.
    #[error("{0}")]
    NotFound(String),

    /// Required external configuration is absent.
    #[error("{0}")]
    Config(String),
}
