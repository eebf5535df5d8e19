use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::{average_money, count_rows, key, metric_desc_then_keys, round_money, row_limit, sum_money};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSpending {
    pub customer_id: String,
    pub name: String,
    pub total_spending: f64,
    pub transactions: i64,
    pub avg_per_transaction: f64,
}

// SELECT customer_id, name, SUM(total_sales), COUNT(transaction_id),
//        ROUND(SUM(total_sales) / COUNT(transaction_id))
// FROM sales GROUP BY customer_id, name ORDER BY 3 DESC LIMIT top_n
pub fn top_customers(fact: &SalesFact, top_n: usize) -> Result<Vec<CustomerSpending>> {
    let (by, options) = metric_desc_then_keys("total_spending", &["customer_id", "name"]);
    let df = fact
        .df
        .clone()
        .lazy()
        .group_by([key("customer_id"), key("name")])
        .agg([
            sum_money("total_sales", "total_spending"),
            count_rows("transaction_id", "transactions"),
        ])
        .sort(by, options)
        .limit(row_limit(top_n))
        .collect()?;

    let mut rows = Vec::with_capacity(df.height());
    for (((customer_id, name), total_spending), transactions) in df
        .column("customer_id")?
        .str()?
        .into_iter()
        .zip(df.column("name")?.str()?)
        .zip(df.column("total_spending")?.f64()?)
        .zip(df.column("transactions")?.i64()?)
    {
        if let (Some(customer_id), Some(name)) = (customer_id, name) {
            let total_spending = round_money(total_spending.unwrap_or(0.0));
            let transactions = transactions.unwrap_or(0);
            rows.push(CustomerSpending {
                customer_id: customer_id.to_string(),
                name: name.to_string(),
                total_spending,
                transactions,
                avg_per_transaction: average_money(total_spending, transactions),
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod test_customer {
    use super::*;
    use crate::fact::build_sales_fact;
    use crate::fixtures::sample_tables;

    #[test]
    fn test_top_customers() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        let rows = top_customers(&fact, 10)?;
        let summary: Vec<(&str, f64, i64, f64)> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.total_spending, r.transactions, r.avg_per_transaction))
            .collect();
        assert_eq!(
            summary,
            [
                ("Budi", 490_000.0, 2, 245_000.0),
                ("Citra", 55_000.0, 2, 27_500.0),
                ("Ani", 54_000.0, 2, 27_000.0),
            ]
        );
        assert_eq!(rows[0].customer_id, "2");
        Ok(())
    }

    #[test]
    fn test_top_customers_limit() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        assert_eq!(top_customers(&fact, 1)?.len(), 1);
        assert!(top_customers(&fact, 0)?.is_empty());
        assert_eq!(top_customers(&fact, usize::MAX)?.len(), 3);
        Ok(())
    }
}
