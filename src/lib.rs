// Data-source driver layer for a SQL workbench.
//
// Drivers implement [`db::DatabaseDriver`] and register with a
// [`db::DriverRegistry`]; callers look them up by id and run queries,
// connection tests, and schema introspection against caller-owned
// connection configurations.

pub mod db;

pub use db::{
    CartoDriver, ConnectionConfig, DatabaseDriver, DriverError, DriverRegistry, FieldDescriptor,
    FormType, FormattedSchema, QueryResult, SchemaColumn,
};
