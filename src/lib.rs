pub mod category;
pub mod city;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod fact;
pub mod logging;
pub mod payment;
pub mod pipeline;
pub mod product;
pub mod report;
pub mod revenue;
pub mod table;
pub mod trend;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use error::{DashboardError, Result};
pub use pipeline::{RunSummary, run};
