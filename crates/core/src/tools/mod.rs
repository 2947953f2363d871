//! Tools module - tool types, billing policies and the tool catalog.

mod tools_catalog;
mod tools_constants;
mod tools_errors;
mod tools_model;

#[cfg(test)]
mod tools_model_tests;

pub use tools_catalog::ToolCatalog;
pub use tools_constants::*;
pub use tools_errors::CatalogError;
pub use tools_model::{BillingPolicy, Tool, ToolType};
