use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the extracts live, where the dashboard goes, and how much of each
/// report to show.
///
/// Every field has a default, so an empty file (or no file at all) reads
/// `data/{customer,product,transaction}.csv` and writes
/// `outputs/sales_analysis_dashboard.png`.
///
/// ```toml
/// data_dir = "dataset"
/// transactions_file = "transactions.csv"
/// top_n = 20
/// dashboard_file = "dashboard.svg"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub customers_file: String,
    pub products_file: String,
    pub transactions_file: String,
    pub output_dir: PathBuf,
    pub dashboard_file: String,
    pub completed_status: String,
    pub top_n: usize,
    pub chart_top_products: usize,
    pub trend_rows: usize,
    pub chart_width: u32,
    pub chart_height: u32,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            customers_file: "customer.csv".to_string(),
            products_file: "product.csv".to_string(),
            transactions_file: "transaction.csv".to_string(),
            output_dir: PathBuf::from("outputs"),
            dashboard_file: "sales_analysis_dashboard.png".to_string(),
            completed_status: "Completed".to_string(),
            top_n: 10,
            chart_top_products: 5,
            trend_rows: 10,
            chart_width: 1500,
            chart_height: 1000,
            currency: "Rp".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(&self.transactions_file)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join(&self.dashboard_file)
    }
}
