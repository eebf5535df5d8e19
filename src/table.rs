use crate::category::CategorySales;
use crate::city::CitySales;
use crate::customer::CustomerSpending;
use crate::payment::PaymentSales;
use crate::product::ProductSales;
use crate::report::round_money;
use crate::revenue::RevenueSummary;
use crate::trend::DailySales;
use std::fmt::{self, Display, Formatter};

pub const RULE_WIDTH: usize = 50;

pub fn section(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// Whole units with comma thousands separators: `-1234567.6` -> `-1,234,568`.
/// Halves go to the even unit, so `100000.5` prints as `100,000`.
pub fn thousands(value: f64) -> String {
    let rounded = round_money(value);
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn money(currency: &str, value: f64) -> String {
    format!("{currency} {}", thousands(value))
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Plain text table; key columns left-aligned, figures right-aligned.
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(keys: &[&str], figures: &[&str]) -> Self {
        let headers = keys
            .iter()
            .map(|h| (h.to_string(), Align::Left))
            .chain(figures.iter().map(|h| (h.to_string(), Align::Right)))
            .collect();
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn write_row<'a>(
        &self,
        f: &mut Formatter<'_>,
        widths: &[usize],
        cells: impl Iterator<Item = &'a str>,
    ) -> fmt::Result {
        let mut line = String::new();
        for (i, cell) in cells.enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            let width = widths[i];
            match self.headers[i].1 {
                Align::Left => line.push_str(&format!("{cell:<width$}")),
                Align::Right => line.push_str(&format!("{cell:>width$}")),
            }
        }
        writeln!(f, "{}", line.trim_end())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (h, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        self.write_row(f, &widths, self.headers.iter().map(|(h, _)| h.as_str()))?;
        if self.rows.is_empty() {
            return writeln!(f, "(no rows)");
        }
        for row in &self.rows {
            self.write_row(f, &widths, row.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

pub fn revenue_lines(summary: &RevenueSummary, currency: &str) -> String {
    let avg = summary
        .avg_transaction_value
        .map(|v| money(currency, v))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "Total Revenue: {}\nTotal Transactions: {}\nAverage Transaction Value: {}",
        money(currency, summary.total_revenue),
        summary.total_transactions,
        avg
    )
}

pub fn category_table(rows: &[CategorySales]) -> Table {
    let mut t = Table::new(&["Category"], &["Total Sales", "Transactions", "Quantity Sold"]);
    for r in rows {
        t.push(vec![
            r.category.clone(),
            thousands(r.total_sales),
            r.transactions.to_string(),
            r.quantity_sold.to_string(),
        ]);
    }
    t
}

pub fn product_table(rows: &[ProductSales]) -> Table {
    let mut t = Table::new(&["Product ID", "Product Name"], &["Total Sales", "Quantity Sold"]);
    for r in rows {
        t.push(vec![
            r.product_id.clone(),
            r.product_name.clone(),
            thousands(r.total_sales),
            r.quantity_sold.to_string(),
        ]);
    }
    t
}

pub fn city_table(rows: &[CitySales]) -> Table {
    let mut t = Table::new(&["City"], &["Total Sales", "Unique Customers", "Transactions"]);
    for r in rows {
        t.push(vec![
            r.city.clone(),
            thousands(r.total_sales),
            r.unique_customers.to_string(),
            r.transactions.to_string(),
        ]);
    }
    t
}

pub fn payment_table(rows: &[PaymentSales]) -> Table {
    let mut t = Table::new(
        &["Payment Method"],
        &["Total Sales", "Transactions", "Avg Transaction"],
    );
    for r in rows {
        t.push(vec![
            r.payment_method.clone(),
            thousands(r.total_sales),
            r.transactions.to_string(),
            thousands(r.avg_transaction),
        ]);
    }
    t
}

pub fn customer_table(rows: &[CustomerSpending]) -> Table {
    let mut t = Table::new(
        &["Customer ID", "Name"],
        &["Total Spending", "Transactions", "Avg per Transaction"],
    );
    for r in rows {
        t.push(vec![
            r.customer_id.clone(),
            r.name.clone(),
            thousands(r.total_spending),
            r.transactions.to_string(),
            thousands(r.avg_per_transaction),
        ]);
    }
    t
}

pub fn trend_table(rows: &[DailySales], limit: usize) -> Table {
    let mut t = Table::new(&["Date"], &["Total Sales", "Transactions"]);
    for r in rows.iter().take(limit) {
        t.push(vec![
            r.date.format("%Y-%m-%d").to_string(),
            thousands(r.total_sales),
            r.transactions.to_string(),
        ]);
    }
    t
}
