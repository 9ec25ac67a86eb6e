// Database Module
// Driver abstraction, registry, and schema metadata formatting

pub mod drivers;
pub mod registry;
pub mod schema;
pub mod traits;

pub use drivers::CartoDriver;
pub use registry::DriverRegistry;
pub use schema::{format_schema_query_results, FormattedSchema, SchemaColumn};
pub use traits::{
    ConnectionConfig, DatabaseDriver, DriverError, FieldDescriptor, FormType, QueryResult,
};
