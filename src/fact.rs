use crate::data::SalesTables;
use crate::error::Result;
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Row-level sales: completed transactions joined with their product and
/// customer, plus `total_sales = price * quantity`.
pub struct SalesFact {
    pub df: DataFrame,
    /// Completed transactions before the joins dropped unmatched keys.
    pub completed_transactions: usize,
}

impl SalesFact {
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }
}

// Keys are compared as strings so an integer-inferred `product_id` in one
// extract still meets a string-inferred one in another.
fn with_string_keys(df: &DataFrame, keys: &[&str]) -> LazyFrame {
    df.clone()
        .lazy()
        .with_columns(keys.iter().map(|k| col(*k).cast(DataType::String)).collect::<Vec<_>>())
}

// transaction(status = completed_status)
// |product(product_id)
// |customer(customer_id)
pub fn build_sales_fact(tables: &SalesTables, completed_status: &str) -> Result<SalesFact> {
    let start = Instant::now();

    let completed = with_string_keys(&tables.transactions, &["product_id", "customer_id"])
        .filter(col("status").eq(lit(completed_status)))
        .collect()?;
    let completed_transactions = completed.height();
    info!(completed_transactions, status = completed_status, "filtered transactions");

    let products = with_string_keys(&tables.products, &["product_id"]);
    let customers = with_string_keys(&tables.customers, &["customer_id"]);

    let df = completed
        .lazy()
        .join(
            products,
            [col("product_id")],
            [col("product_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            customers,
            [col("customer_id")],
            [col("customer_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .with_column(
            (col("price").cast(DataType::Float64) * col("quantity").cast(DataType::Float64))
                .alias("total_sales"),
        )
        .collect()?;

    debug!(elapsed = ?start.elapsed(), rows = df.height(), "built sales fact");

    Ok(SalesFact {
        df,
        completed_transactions,
    })
}
