// Carto Driver
// Implements DatabaseDriver against the Carto SQL API (HTTP POST + JSON)

use crate::db::schema::{format_schema_query_results, FormattedSchema};
use crate::db::traits::{
    ConnectionConfig, DatabaseDriver, DriverError, FieldDescriptor, FormType, QueryResult,
};
use serde_json::Value;

const ID: &str = "carto";
const NAME: &str = "carto";

const TEST_QUERY: &str = "SELECT 'success' AS TestQuery;";

// Column catalog query, same shape as the postgres drivers use. Carto sits
// on a postgres catalog, but array columns come back through typelem, so
// data_type is the element type name with the leading underscore trimmed.
const SCHEMA_SQL: &str = r#"
  select
    ns.nspname as table_schema,
    cls.relname as table_name,
    attr.attname as column_name,
    trim(leading '_' from tp.typname) as data_type
  from
    pg_catalog.pg_attribute as attr
    join pg_catalog.pg_class as cls on cls.oid = attr.attrelid
    join pg_catalog.pg_namespace as ns on ns.oid = cls.relnamespace
    join pg_catalog.pg_type as tp on tp.typelem = attr.atttypid
  where
    cls.relkind in ('r', 'v', 'm')
    and ns.nspname not in ('pg_catalog', 'pg_toast', 'information_schema')
    and not attr.attisdropped
    and attr.attnum > 0
  order by
    ns.nspname,
    cls.relname,
    attr.attnum
"#;

static FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor {
        key: "host",
        form_type: FormType::Text,
        label: "Host/Server",
    },
    FieldDescriptor {
        key: "apiKey",
        form_type: FormType::Text,
        label: "API Key",
    },
];

/// Driver for the Carto SQL API
///
/// Stateless: each call is one independent HTTP round trip. The inner
/// client only pools connections; it carries no per-call state.
pub struct CartoDriver {
    client: reqwest::Client,
}

impl CartoDriver {
    /// Create a new Carto driver with a default HTTP client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a driver sharing an existing HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn sql_endpoint(connection: &ConnectionConfig) -> String {
        format!("{}/api/v2/sql", connection.host.trim_end_matches('/'))
    }
}

impl Default for CartoDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DatabaseDriver for CartoDriver {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn fields(&self) -> &'static [FieldDescriptor] {
        &FIELDS
    }

    async fn run_query(
        &self,
        query: &str,
        connection: &ConnectionConfig,
    ) -> Result<QueryResult, DriverError> {
        let url = Self::sql_endpoint(connection);
        tracing::debug!(driver = ID, connection = %connection.id, "running query");

        let response = self
            .client
            .post(&url)
            .query(&[("api_key", connection.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if status.as_u16() >= 400 {
            // The API puts its message in the body's `error` field; fall
            // back to the status line when the field is absent
            let error = body
                .get("error")
                .cloned()
                .unwrap_or_else(|| Value::String(format!("HTTP {}", status.as_u16())));
            return Err(DriverError::Remote(error));
        }

        Ok(body)
    }

    async fn test_connection(
        &self,
        connection: &ConnectionConfig,
    ) -> Result<QueryResult, DriverError> {
        self.run_query(TEST_QUERY, connection).await
    }

    async fn get_schema(&self, connection: &ConnectionConfig) -> Result<FormattedSchema, DriverError> {
        let query_result = self.run_query(SCHEMA_SQL, connection).await?;
        Ok(format_schema_query_results(&query_result))
    }
}
