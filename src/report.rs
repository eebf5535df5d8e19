//! Helpers shared by the per-breakdown reports.
//!
//! Every report groups the sales fact, sorts by its money metric descending
//! (group key ascending on ties, since the engine returns groups in no
//! particular order), and hands back typed rows with money rounded to whole
//! units.

use polars::prelude::*;

/// Sort options for "largest `metric` first, then `keys` ascending".
pub fn metric_desc_then_keys(metric: &str, keys: &[&str]) -> (Vec<PlSmallStr>, SortMultipleOptions) {
    let mut by = vec![PlSmallStr::from(metric)];
    by.extend(keys.iter().map(|k| PlSmallStr::from(*k)));

    let mut descending = vec![true];
    descending.extend(keys.iter().map(|_| false));

    let options = SortMultipleOptions::default()
        .with_order_descending_multi(descending)
        .with_maintain_order(true);
    (by, options)
}

/// Group key as a string column, whatever the extract inferred.
pub fn key(name: &str) -> Expr {
    col(name).cast(DataType::String)
}

pub fn sum_money(name: &str, alias: &str) -> Expr {
    col(name).cast(DataType::Float64).sum().alias(alias)
}

pub fn sum_count(name: &str, alias: &str) -> Expr {
    col(name).cast(DataType::Int64).sum().alias(alias)
}

pub fn count_rows(name: &str, alias: &str) -> Expr {
    col(name).count().cast(DataType::Int64).alias(alias)
}

/// `LIMIT n` for the engine; counts past the index range keep every row.
pub fn row_limit(n: usize) -> IdxSize {
    IdxSize::try_from(n).unwrap_or(IdxSize::MAX)
}

/// Whole units, halves to even (`22_500.5` -> `22_500`).
pub fn round_money(value: f64) -> f64 {
    value.round_ties_even()
}

/// `round(total / count)`, zero when there is nothing to divide by.
pub fn average_money(total: f64, count: i64) -> f64 {
    if count == 0 {
        0.0
    } else {
        round_money(total / count as f64)
    }
}
