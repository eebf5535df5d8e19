use crate::error::{DashboardError, Result};
use crate::fact::SalesFact;
use crate::report::round_money;
use ahash::HashMap;
use chrono::NaiveDate;
use polars::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub transactions: i64,
}

const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

// chrono's `%Y` also takes `24` as year 24, so the year field is checked first.
fn has_full_year(date_part: &str, fmt: &str) -> bool {
    let mut fields = date_part.split(['/', '-', '.']);
    let year = if fmt.starts_with("%Y") {
        fields.next()
    } else {
        fields.last()
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses a day-first transaction date with a four-digit year. A trailing
/// time of day is dropped.
pub fn parse_transaction_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
    let date_part = date_part.split('T').next().unwrap_or(date_part);

    DATE_FORMATS
        .iter()
        .filter(|fmt| has_full_year(date_part, fmt))
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .ok_or_else(|| DashboardError::Date {
            value: value.to_string(),
        })
}

// SELECT transaction_date, SUM(total_sales), COUNT(transaction_id)
// FROM sales GROUP BY transaction_date ORDER BY 1
pub fn daily_sales(fact: &SalesFact) -> Result<Vec<DailySales>> {
    let df = fact
        .df
        .clone()
        .lazy()
        .select([
            col("transaction_date").cast(DataType::String),
            col("transaction_id").is_not_null().alias("has_id"),
            col("total_sales"),
        ])
        .collect()?;

    let mut by_day: HashMap<NaiveDate, (f64, i64)> = HashMap::default();

    for ((date, has_id), total_sales) in df
        .column("transaction_date")?
        .str()?
        .into_iter()
        .zip(df.column("has_id")?.bool()?)
        .zip(df.column("total_sales")?.f64()?)
    {
        if let Some(date) = date {
            let entry = by_day.entry(parse_transaction_date(date)?).or_default();
            entry.0 += total_sales.unwrap_or(0.0);
            if has_id == Some(true) {
                entry.1 += 1;
            }
        }
    }

    let mut rows: Vec<DailySales> = by_day
        .into_iter()
        .map(|(date, (total_sales, transactions))| DailySales {
            date,
            total_sales: round_money(total_sales),
            transactions,
        })
        .collect();
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

#[cfg(test)]
mod test_trend {
    use super::*;
    use crate::fact::build_sales_fact;
    use crate::fixtures::sample_tables;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first_formats() -> Result<()> {
        assert_eq!(parse_transaction_date("05/04/2024")?, ymd(2024, 4, 5));
        assert_eq!(parse_transaction_date("05-04-2024")?, ymd(2024, 4, 5));
        assert_eq!(parse_transaction_date("05.04.2024")?, ymd(2024, 4, 5));
        assert_eq!(parse_transaction_date("2024-04-05")?, ymd(2024, 4, 5));
        assert_eq!(parse_transaction_date(" 31/12/2023 14:30 ")?, ymd(2023, 12, 31));
        assert_eq!(parse_transaction_date("2024-04-05T08:00:00")?, ymd(2024, 4, 5));
        Ok(())
    }

    #[test]
    fn test_bad_date_names_value() {
        match parse_transaction_date("31/31/2024") {
            Err(DashboardError::Date { value }) => assert_eq!(value, "31/31/2024"),
            other => panic!("expected date error, got {other:?}"),
        }
    }

    #[test]
    fn test_two_digit_year_rejected() {
        for value in ["05/04/24", "05-04-24", "24-04-05", "5/4/024"] {
            match parse_transaction_date(value) {
                Err(DashboardError::Date { value: bad }) => assert_eq!(bad, value),
                other => panic!("expected date error for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_daily_sales() -> Result<()> {
        let fact = build_sales_fact(&sample_tables()?, "Completed")?;
        let rows = daily_sales(&fact)?;
        assert_eq!(
            rows,
            vec![
                DailySales {
                    date: ymd(2024, 3, 1),
                    total_sales: 280_000.0,
                    transactions: 2,
                },
                DailySales {
                    date: ymd(2024, 3, 2),
                    total_sales: 39_000.0,
                    transactions: 2,
                },
                DailySales {
                    date: ymd(2024, 3, 3),
                    total_sales: 280_000.0,
                    transactions: 2,
                },
            ]
        );
        Ok(())
    }
}
