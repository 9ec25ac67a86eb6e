// Data-Source Driver Traits
// Defines the core abstraction for supporting multiple data-source backends

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw query result as decoded from the remote service.
///
/// The shape is owned by the remote API; drivers pass it through untouched.
pub type QueryResult = Value;

/// Common driver error type
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Network or HTTP-client-level failure, underlying error kept verbatim
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote service reported a failure (HTTP status >= 400); payload is
    /// whatever the service put in the body's `error` field
    #[error("remote error: {0}")]
    Remote(Value),

    #[error("driver not found: {0}")]
    DriverNotFound(String),
}

/// Form widget used to render a connection field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormType {
    Text,
}

/// Describes one input of a driver's connection form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub form_type: FormType,
    pub label: &'static str,
}

/// Connection configuration supplied by the caller
///
/// Immutable for the duration of a call. Fields are not validated here;
/// an empty host or key surfaces as a transport or remote error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub id: String,
    pub name: String,

    /// Base URL of the remote service
    pub host: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl ConnectionConfig {
    pub fn new(name: String, host: String, api_key: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            host,
            api_key,
        }
    }
}

/// Data-source driver trait - all drivers must implement this
///
/// A driver is stateless: every operation is a single request/response
/// round trip against the supplied connection, and concurrent calls are
/// fully independent.
#[async_trait::async_trait]
pub trait DatabaseDriver: Send + Sync {
    // --- Metadata ---
    /// Unique registry key for this driver
    fn id(&self) -> &'static str;

    /// Display name for UI
    fn name(&self) -> &'static str;

    /// Ordered connection-form fields this driver needs
    fn fields(&self) -> &'static [FieldDescriptor];

    // --- Operations ---
    /// Execute a SQL query and return the raw decoded response body
    async fn run_query(
        &self,
        query: &str,
        connection: &ConnectionConfig,
    ) -> Result<QueryResult, DriverError>;

    /// Test that the connection is reachable and authenticated
    async fn test_connection(
        &self,
        connection: &ConnectionConfig,
    ) -> Result<QueryResult, DriverError>;

    /// Fetch schema metadata, normalized into a schema/table/column tree
    async fn get_schema(
        &self,
        connection: &ConnectionConfig,
    ) -> Result<crate::db::schema::FormattedSchema, DriverError>;
}
