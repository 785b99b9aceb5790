//! Federal income tax calculations.
//!
//! [`brackets`] applies a marginal-rate schedule to taxable income;
//! [`estimator`] turns W-2 figures into a complete [`crate::TaxEstimateResult`].

pub mod brackets;
pub mod common;
pub mod estimator;

pub use brackets::{BracketContribution, BracketTaxEngine};
pub use estimator::{TaxEstimator, estimate_tax};
