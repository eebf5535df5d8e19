use polars::error::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("chart: {0}")]
    Chart(String),

    /// A `transaction_date` value none of the day-first formats accept.
    #[error("unrecognised transaction date {value:?}")]
    Date { value: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
