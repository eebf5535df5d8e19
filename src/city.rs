use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::{count_rows, key, metric_desc_then_keys, round_money, sum_money};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CitySales {
    pub city: String,
    pub total_sales: f64,
    pub unique_customers: i64,
    pub transactions: i64,
}

// SELECT city, SUM(total_sales), COUNT(DISTINCT customer_id), COUNT(transaction_id)
// FROM sales GROUP BY city ORDER BY 2 DESC
pub fn sales_by_city(fact: &SalesFact) -> Result<Vec<CitySales>> {
    let (by, options) = metric_desc_then_keys("total_sales", &["city"]);
    let df = fact
        .df
        .clone()
        .lazy()
        .group_by([key("city")])
        .agg([
            sum_money("total_sales", "total_sales"),
            col("customer_id")
                .n_unique()
                .cast(DataType::Int64)
                .alias("unique_customers"),
            count_rows("transaction_id", "transactions"),
        ])
        .sort(by, options)
        .collect()?;

    let mut rows = Vec::with_capacity(df.height());
    for (((city, total_sales), unique_customers), transactions) in df
        .column("city")?
        .str()?
        .into_iter()
        .zip(df.column("total_sales")?.f64()?)
        .zip(df.column("unique_customers")?.i64()?)
        .zip(df.column("transactions")?.i64()?)
    {
        if let Some(city) = city {
            rows.push(CitySales {
                city: city.to_string(),
                total_sales: round_money(total_sales.unwrap_or(0.0)),
                unique_customers: unique_customers.unwrap_or(0),
                transactions: transactions.unwrap_or(0),
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod test_city {
    use super::*;
    use crate::fact::build_sales_fact;
    use crate::fixtures::sample_tables;

    #[test]
    fn test_sales_by_city() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        let rows = sales_by_city(&fact)?;
        assert_eq!(
            rows,
            vec![
                CitySales {
                    city: "Jakarta".to_string(),
                    total_sales: 490_000.0,
                    unique_customers: 1,
                    transactions: 2,
                },
                CitySales {
                    city: "Bandung".to_string(),
                    total_sales: 109_000.0,
                    unique_customers: 2,
                    transactions: 4,
                },
            ]
        );
        Ok(())
    }
}
