use crate::data::SalesTables;
use polars::prelude::*;

// Three customers in two cities, four products in four categories, and
// eight transactions: one Pending and one whose product is not in the
// catalogue.
//
// completed sales (price x quantity):
//   T01 c1 p1  2 x 15000 = 30000  01/03/2024 Cash
//   T02 c2 p2  1 x 250000 = 250000 01/03/2024 Credit Card
//   T03 c1 p3  3 x 8000  = 24000  02/03/2024 E-Wallet
//   T04 c3 p1  1 x 15000 = 15000  02/03/2024 Cash
//   T06 c2 p4  2 x 120000 = 240000 03/03/2024 Credit Card
//   T08 c3 p3  5 x 8000  = 40000  03/03/2024 E-Wallet
pub fn sample_tables() -> PolarsResult<SalesTables> {
    let customers = df!(
        "customer_id" => [1i64, 2, 3],
        "name" => ["Ani", "Budi", "Citra"],
        "city" => ["Bandung", "Jakarta", "Bandung"],
    )?;
    let products = df!(
        "product_id" => [1i64, 2, 3, 4],
        "product_name" => ["Kopi Susu", "Headphone", "Roti", "Sepatu"],
        "category" => ["Beverage", "Electronics", "Food", "Fashion"],
        "price" => [15000i64, 250000, 8000, 120000],
    )?;
    let transactions = df!(
        "transaction_id" => ["T01", "T02", "T03", "T04", "T05", "T06", "T07", "T08"],
        "customer_id" => [1i64, 2, 1, 3, 2, 2, 1, 3],
        "product_id" => [1i64, 2, 3, 1, 2, 4, 99, 3],
        "quantity" => [2i64, 1, 3, 1, 4, 2, 1, 5],
        "transaction_date" => [
            "01/03/2024", "01/03/2024", "02/03/2024", "02/03/2024",
            "02/03/2024", "03/03/2024", "03/03/2024", "03/03/2024",
        ],
        "status" => [
            "Completed", "Completed", "Completed", "Completed",
            "Pending", "Completed", "Completed", "Completed",
        ],
        "payment_method" => [
            "Cash", "Credit Card", "E-Wallet", "Cash",
            "Cash", "Credit Card", "Cash", "E-Wallet",
        ],
    )?;
    Ok(SalesTables::from_frames(customers, products, transactions))
}
