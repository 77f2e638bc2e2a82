pub mod catalog;
pub mod config;
pub mod estimate;
pub mod price;

pub use catalog::{CatalogError, MaterialCatalog};
pub use config::{EstimatorConfig, PricingConfig};
pub use estimate::{estimate, GeometryError, ShapeSignal};
pub use price::{compute_price, PricingError};
