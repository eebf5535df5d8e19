use crate::config::Config;
use crate::error::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

// customer.csv
//     customer_id, name, city, ...
//
// product.csv
//     product_id, product_name, category, price, ...
//
// transaction.csv
//     transaction_id, customer_id, product_id, quantity,
//     transaction_date (DD/MM/YYYY), status, payment_method, ...
pub struct SalesTables {
    pub customers: DataFrame,
    pub products: DataFrame,
    pub transactions: DataFrame,
}

impl SalesTables {
    pub fn load(config: &Config) -> Result<Self> {
        let customers = read_csv(&config.customers_path())?;
        let products = read_csv(&config.products_path())?;
        let transactions = read_csv(&config.transactions_path())?;
        Ok(SalesTables {
            customers,
            products,
            transactions,
        })
    }

    pub fn from_frames(customers: DataFrame, products: DataFrame, transactions: DataFrame) -> Self {
        SalesTables {
            customers,
            products,
            transactions,
        }
    }
}

/// Reads a headed CSV extract, inferring column types from every row so a
/// late float in an otherwise integral `price` column still parses.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(file)
        .finish()?;
    info!(path = %path.display(), rows = df.height(), "loaded extract");
    Ok(df)
}
