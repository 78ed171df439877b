use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    time::Duration,
};

use crate::{
    catalogue::{normalize, PriceIndex},
    usd::Usd,
};

/// Holds the result of pricing a sales record.
///
/// To build one, use [`Report::tally`]. To get the printable report, use its
/// [`Display`] implementation.
#[derive(Debug, Default)]
pub struct Report {
    /// Revenue over all accepted sales.
    pub total: Usd,
    /// Cumulative quantity per normalized product name, accepted sales only.
    pub product_totals: BTreeMap<String, f64>,
    /// Sales that could not be priced, verbatim, in encounter order.
    pub invalid_entries: Vec<Value>,
    /// How long loading and aggregation took. Informational only.
    pub elapsed: Duration,
    prices: PriceIndex,
}

impl Report {
    /// Prices each sale in `sales` against `prices`, in input order.
    ///
    /// A sale is accepted when its `"Product"` field names a catalogued
    /// product (matching is trim- and case-insensitive) and its `"Quantity"`
    /// field is a JSON number. Quantities that are strings, booleans, null,
    /// or missing are not numbers, even if they look like one, so those
    /// sales land in [`Report::invalid_entries`] untouched. A missing or
    /// non-string product is treated as the empty name.
    ///
    /// Zero and negative quantities are accepted arithmetically: a zero
    /// quantity still lists the product as sold, contributing nothing to
    /// revenue.
    #[must_use]
    pub fn tally(prices: PriceIndex, sales: Vec<Value>) -> Self {
        let mut report = Self {
            prices,
            ..Self::default()
        };
        for sale in sales {
            let product = normalize(sale.get("Product").and_then(Value::as_str).unwrap_or(""));
            let quantity = sale.get("Quantity").and_then(Value::as_f64);
            match (report.prices.price(&product), quantity) {
                (Some(price), Some(qty)) => {
                    report.total += price * qty;
                    *report.product_totals.entry(product).or_insert(0.0) += qty;
                }
                _ => report.invalid_entries.push(sale),
            }
        }
        report
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SALES RESULTS")?;
        writeln!(f, "Total sales cost: {}", self.total)?;
        writeln!(
            f,
            "Execution time: {:.4} seconds",
            self.elapsed.as_secs_f64()
        )?;
        writeln!(f, "Products sold:")?;
        if self.product_totals.is_empty() {
            writeln!(f, "No products were sold.")?;
        } else {
            for (product, quantity) in &self.product_totals {
                let price = self.prices.price(product).unwrap_or_default();
                writeln!(
                    f,
                    "- {} ({quantity} units at {price} each)",
                    title_case(product),
                )?;
            }
        }
        writeln!(f, "Errors found in the data:")?;
        write!(f, "{}", dump_entries(&self.invalid_entries)?)
    }
}

/// Pretty-prints the invalid entries with 4-space indentation, preserving
/// each entry's original field order.
fn dump_entries(entries: &[Value]) -> Result<String, fmt::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut ser).map_err(|_| fmt::Error)?;
    String::from_utf8(buf).map_err(|_| fmt::Error)
}

/// Display form of a normalized product name: every letter that follows a
/// non-letter is uppercased, the rest lowercased ("coffee mug" becomes
/// "Coffee Mug").
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = true;
    for c in name.chars() {
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        boundary = !c.is_alphabetic();
    }
    out
}
