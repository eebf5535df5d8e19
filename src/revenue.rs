use crate::error::Result;
use crate::fact::SalesFact;
use crate::report::round_money;
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub total_transactions: usize,
    /// `None` when no sale survived the filter and joins.
    pub avg_transaction_value: Option<f64>,
}

pub fn revenue_summary(fact: &SalesFact) -> Result<RevenueSummary> {
    let total_sales = fact.df.column("total_sales")?.f64()?;

    let total_revenue = total_sales.sum().unwrap_or(0.0);
    let total_transactions = fact.height();
    let avg_transaction_value = total_sales.mean();

    Ok(RevenueSummary {
        total_revenue: round_money(total_revenue),
        total_transactions,
        avg_transaction_value,
    })
}
