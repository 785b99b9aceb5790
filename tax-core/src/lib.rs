pub mod calculations;
pub mod models;

pub use calculations::{TaxEstimator, estimate_tax};
pub use models::*;
