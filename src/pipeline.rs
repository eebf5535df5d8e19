use crate::category::sales_by_category;
use crate::city::sales_by_city;
use crate::config::Config;
use crate::customer::top_customers;
use crate::dashboard::{DashboardData, ensure_output_dir, render_dashboard};
use crate::data::SalesTables;
use crate::error::Result;
use crate::fact::build_sales_fact;
use crate::payment::sales_by_payment;
use crate::product::{ProductSales, top_products};
use crate::revenue::{RevenueSummary, revenue_summary};
use crate::table::{
    category_table, city_table, customer_table, payment_table, product_table, revenue_lines,
    section, trend_table,
};
use crate::trend::daily_sales;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub customers: usize,
    pub products: usize,
    pub transactions: usize,
    pub completed_transactions: usize,
    pub sales_rows: usize,
    pub revenue: RevenueSummary,
    pub dashboard: PathBuf,
}

/// Loads the extracts named by `config` and runs every report over them.
pub fn run(config: &Config) -> Result<RunSummary> {
    let mut out = io::stdout().lock();
    if ensure_output_dir(&config.output_dir)? {
        writeln!(out, "✓ Folder '{}' created", config.output_dir.display())?;
    } else {
        writeln!(out, "✓ Folder '{}' already exists", config.output_dir.display())?;
    }

    writeln!(out, "{}", section("LOADING DATA"))?;
    let tables = SalesTables::load(config)?;
    report(config, &tables, &mut out)
}

/// Runs every report over already-loaded tables, printing to stdout.
pub fn run_tables(config: &Config, tables: &SalesTables) -> Result<RunSummary> {
    report(config, tables, &mut io::stdout().lock())
}

/// The first `limit` products, the ones the dashboard draws.
fn chart_products(products: &[ProductSales], limit: usize) -> &[ProductSales] {
    &products[..products.len().min(limit)]
}

/// Writes every section to `out` in order and draws the dashboard last.
pub fn report<W: Write>(config: &Config, tables: &SalesTables, out: &mut W) -> Result<RunSummary> {
    let start = Instant::now();

    writeln!(out, "✓ Customers: {} rows", tables.customers.height())?;
    writeln!(out, "✓ Products: {} rows", tables.products.height())?;
    writeln!(out, "✓ Transactions: {} rows", tables.transactions.height())?;
    writeln!(out)?;

    writeln!(out, "{}", section("DATA PREPARATION"))?;
    let fact = build_sales_fact(tables, &config.completed_status)?;
    let (rows, cols) = fact.shape();
    writeln!(out, "Completed transactions: {}", fact.completed_transactions)?;
    writeln!(out, "Sales data shape: ({rows}, {cols})")?;
    writeln!(out)?;

    writeln!(out, "{}", section("TOTAL REVENUE ANALYSIS"))?;
    let revenue = revenue_summary(&fact)?;
    writeln!(out, "{}", revenue_lines(&revenue, &config.currency))?;
    writeln!(out)?;

    writeln!(out, "{}", section("SALES BY CATEGORY"))?;
    let categories = sales_by_category(&fact)?;
    writeln!(out, "{}", category_table(&categories))?;

    writeln!(out, "{}", section(&format!("TOP {} BEST SELLING PRODUCTS", config.top_n)))?;
    let products = top_products(&fact, config.top_n)?;
    writeln!(out, "{}", product_table(&products))?;

    writeln!(out, "{}", section("SALES BY CITY"))?;
    let cities = sales_by_city(&fact)?;
    writeln!(out, "{}", city_table(&cities))?;

    writeln!(out, "{}", section("SALES BY PAYMENT METHOD"))?;
    let payments = sales_by_payment(&fact)?;
    writeln!(out, "{}", payment_table(&payments))?;

    writeln!(out, "{}", section(&format!("TOP {} CUSTOMERS BY SPENDING", config.top_n)))?;
    let customers = top_customers(&fact, config.top_n)?;
    writeln!(out, "{}", customer_table(&customers))?;

    writeln!(out, "{}", section("DAILY SALES TREND"))?;
    let daily = daily_sales(&fact)?;
    writeln!(out, "{}", trend_table(&daily, config.trend_rows))?;

    writeln!(out, "{}", section("CREATING VISUALIZATIONS"))?;
    let dashboard = config.dashboard_path();
    render_dashboard(
        &DashboardData {
            categories: &categories,
            products: chart_products(&products, config.chart_top_products),
            cities: &cities,
            payments: &payments,
            currency: &config.currency,
        },
        &dashboard,
        (config.chart_width, config.chart_height),
    )?;
    writeln!(out, "✓ Dashboard saved as '{}'", dashboard.display())?;
    writeln!(out)?;

    writeln!(out, "{}", section("ANALYSIS COMPLETED!"))?;
    info!(
        elapsed = ?start.elapsed(),
        sales_rows = rows,
        days = daily.len(),
        "analysis completed"
    );

    Ok(RunSummary {
        customers: tables.customers.height(),
        products: tables.products.height(),
        transactions: tables.transactions.height(),
        completed_transactions: fact.completed_transactions,
        sales_rows: rows,
        revenue,
        dashboard,
    })
}

#[cfg(test)]
mod test_pipeline {
    use super::*;
    use crate::fixtures::sample_tables;
    use crate::table::RULE_WIDTH;
    use std::fs;
    use tempfile::TempDir;

    fn headings(output: &str) -> Vec<&str> {
        let rule = "=".repeat(RULE_WIDTH);
        let lines: Vec<&str> = output.lines().collect();
        lines
            .windows(3)
            .filter(|w| w[0] == rule && w[2] == rule && w[1] != rule)
            .map(|w| w[1])
            .collect()
    }

    fn config_in(dir: &TempDir) -> Config {
        Config {
            output_dir: dir.path().join("outputs"),
            dashboard_file: "dash.svg".to_string(),
            chart_top_products: 2,
            trend_rows: 2,
            chart_width: 900,
            chart_height: 600,
            ..Config::default()
        }
    }

    #[test]
    fn test_sections_in_order() -> Result<()> {
        let dir = TempDir::new()?;
        let config = config_in(&dir);
        let mut out = Vec::new();
        let summary = report(&config, &sample_tables()?, &mut out)?;
        let output = String::from_utf8_lossy(&out);

        assert_eq!(
            headings(&output),
            [
                "DATA PREPARATION",
                "TOTAL REVENUE ANALYSIS",
                "SALES BY CATEGORY",
                "TOP 10 BEST SELLING PRODUCTS",
                "SALES BY CITY",
                "SALES BY PAYMENT METHOD",
                "TOP 10 CUSTOMERS BY SPENDING",
                "DAILY SALES TREND",
                "CREATING VISUALIZATIONS",
                "ANALYSIS COMPLETED!",
            ]
        );
        assert!(output.contains("Completed transactions: 7"));
        assert!(output.contains("Total Revenue: Rp 599,000"));
        assert_eq!(summary.sales_rows, 6);
        assert!(summary.dashboard.is_file());
        Ok(())
    }

    #[test]
    fn test_trend_and_chart_limits() -> Result<()> {
        let dir = TempDir::new()?;
        let config = config_in(&dir);
        let mut out = Vec::new();
        let summary = report(&config, &sample_tables()?, &mut out)?;
        let output = String::from_utf8_lossy(&out);

        assert!(output.contains("2024-03-01"));
        assert!(output.contains("2024-03-02"));
        assert!(!output.contains("2024-03-03"));

        // Roti is the third product, past the two the chart keeps.
        let svg = fs::read_to_string(&summary.dashboard)?;
        assert!(output.contains("Roti"));
        assert!(!svg.contains("Roti"));
        Ok(())
    }

    #[test]
    fn test_chart_products_slice() -> Result<()> {
        let fact = crate::fact::build_sales_fact(&sample_tables()?, "Completed")?;
        let products = top_products(&fact, 10)?;
        let names = |rows: &[ProductSales]| -> Vec<String> {
            rows.iter().map(|r| r.product_name.clone()).collect()
        };
        assert_eq!(names(chart_products(&products, 2)), ["Headphone", "Sepatu"]);
        assert_eq!(chart_products(&products, 50).len(), 4);
        assert!(chart_products(&products, 0).is_empty());
        Ok(())
    }
}
