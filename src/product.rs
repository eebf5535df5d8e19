use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::{key, metric_desc_then_keys, round_money, row_limit, sum_count, sum_money};
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub total_sales: f64,
    pub quantity_sold: i64,
}

// SELECT product_id, product_name, SUM(total_sales), SUM(quantity)
// FROM sales GROUP BY product_id, product_name ORDER BY 3 DESC LIMIT top_n
pub fn top_products(fact: &SalesFact, top_n: usize) -> Result<Vec<ProductSales>> {
    let (by, options) = metric_desc_then_keys("total_sales", &["product_id", "product_name"]);
    let df = fact
        .df
        .clone()
        .lazy()
        .group_by([key("product_id"), key("product_name")])
        .agg([
            sum_money("total_sales", "total_sales"),
            sum_count("quantity", "quantity_sold"),
        ])
        .sort(by, options)
        .limit(row_limit(top_n))
        .collect()?;

    let mut rows = Vec::with_capacity(df.height());
    for (((product_id, product_name), total_sales), quantity_sold) in df
        .column("product_id")?
        .str()?
        .into_iter()
        .zip(df.column("product_name")?.str()?)
        .zip(df.column("total_sales")?.f64()?)
        .zip(df.column("quantity_sold")?.i64()?)
    {
        if let (Some(product_id), Some(product_name)) = (product_id, product_name) {
            rows.push(ProductSales {
                product_id: product_id.to_string(),
                product_name: product_name.to_string(),
                total_sales: round_money(total_sales.unwrap_or(0.0)),
                quantity_sold: quantity_sold.unwrap_or(0),
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod test_product {
    use super::*;
    use crate::fact::build_sales_fact;
    use crate::fixtures::sample_tables;

    #[test]
    fn test_top_products() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        let rows = top_products(&fact, 10)?;
        let names: Vec<&str> = rows.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, ["Headphone", "Sepatu", "Roti", "Kopi Susu"]);
        assert_eq!(rows[2].product_id, "3");
        assert_eq!(rows[2].total_sales, 64_000.0);
        assert_eq!(rows[2].quantity_sold, 8);
        Ok(())
    }

    #[test]
    fn test_top_n_truncates() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        let rows = top_products(&fact, 2)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].product_name, "Sepatu");
        assert_eq!(top_products(&fact, usize::MAX)?.len(), 4);
        Ok(())
    }
}
