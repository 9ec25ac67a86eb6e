// Data-Source Drivers
// Contains implementations for each supported backend

pub mod carto;

// Re-export drivers
pub use carto::CartoDriver;
