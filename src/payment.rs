use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::{average_money, count_rows, key, metric_desc_then_keys, round_money, sum_money};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSales {
    pub payment_method: String,
    pub total_sales: f64,
    pub transactions: i64,
    pub avg_transaction: f64,
}

// SELECT payment_method, SUM(total_sales), COUNT(transaction_id),
//        ROUND(SUM(total_sales) / COUNT(transaction_id))
// FROM sales GROUP BY payment_method ORDER BY 2 DESC
pub fn sales_by_payment(fact: &SalesFact) -> Result<Vec<PaymentSales>> {
    let (by, options) = metric_desc_then_keys("total_sales", &["payment_method"]);
    let df = fact
        .df
        .clone()
        .lazy()
        .group_by([key("payment_method")])
        .agg([
            sum_money("total_sales", "total_sales"),
            count_rows("transaction_id", "transactions"),
        ])
        .sort(by, options)
        .collect()?;

    let mut rows = Vec::with_capacity(df.height());
    for ((payment_method, total_sales), transactions) in df
        .column("payment_method")?
        .str()?
        .into_iter()
        .zip(df.column("total_sales")?.f64()?)
        .zip(df.column("transactions")?.i64()?)
    {
        if let Some(payment_method) = payment_method {
            let total_sales = round_money(total_sales.unwrap_or(0.0));
            let transactions = transactions.unwrap_or(0);
            rows.push(PaymentSales {
                payment_method: payment_method.to_string(),
                total_sales,
                transactions,
                avg_transaction: average_money(total_sales, transactions),
            });
        }
    }
    Ok(rows)
}
