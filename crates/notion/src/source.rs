//! The inventory lookup port.

use async_trait::async_trait;
use thiserror::Error;

use stockbot_core::InventoryRecord;

/// Failure while querying the external inventory database.
///
/// Carried as display strings rather than the underlying client errors so
/// implementations stay swappable and tests can construct every variant.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The service could not be reached at all.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("database API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The service answered, but the body did not match the expected shape.
    #[error("malformed database response: {0}")]
    Parse(String),
}

/// Read-only lookup against the external inventory database.
///
/// One call per inbound command. Implementations own their credentials and
/// database identifier; callers only supply the search term. No retry
/// semantics are implied: a failure surfaces to the caller as-is.
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Return every record whose item name or part number contains `term`,
    /// in the order the service yields them.
    async fn search(&self, term: &str) -> Result<Vec<InventoryRecord>, SourceError>;
}
