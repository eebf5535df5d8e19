use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::{count_rows, key, metric_desc_then_keys, round_money, sum_count, sum_money};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySales {
    pub category: String,
    pub total_sales: f64,
    pub transactions: i64,
    pub quantity_sold: i64,
}

// SELECT category, SUM(total_sales), COUNT(transaction_id), SUM(quantity)
// FROM sales GROUP BY category ORDER BY 2 DESC
pub fn sales_by_category(fact: &SalesFact) -> Result<Vec<CategorySales>> {
    let (by, options) = metric_desc_then_keys("total_sales", &["category"]);
    let df = fact
        .df
        .clone()
        .lazy()
        .group_by([key("category")])
        .agg([
            sum_money("total_sales", "total_sales"),
            count_rows("transaction_id", "transactions"),
            sum_count("quantity", "quantity_sold"),
        ])
        .sort(by, options)
        .collect()?;

    let mut rows = Vec::with_capacity(df.height());
    for (((category, total_sales), transactions), quantity_sold) in df
        .column("category")?
        .str()?
        .into_iter()
        .zip(df.column("total_sales")?.f64()?)
        .zip(df.column("transactions")?.i64()?)
        .zip(df.column("quantity_sold")?.i64()?)
    {
        if let Some(category) = category {
            rows.push(CategorySales {
                category: category.to_string(),
                total_sales: round_money(total_sales.unwrap_or(0.0)),
                transactions: transactions.unwrap_or(0),
                quantity_sold: quantity_sold.unwrap_or(0),
            });
        }
    }
    Ok(rows)
}
