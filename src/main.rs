use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use std::{fs, path::PathBuf, time::Instant};

use sales_report::{load_json, PriceEntry, PriceIndex, Report};

/// The report is overwritten here on every successful run.
const RESULTS_FILE: &str = "SalesResults.txt";

/// Prices a sales record against a product catalogue and reports total
/// revenue, units sold per product, and entries that could not be priced.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// JSON file listing each product's title and unit price
    price_catalogue: PathBuf,
    /// JSON file listing the sales to price
    sales_record: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();
    let catalogue: Vec<PriceEntry> = match load_json(&args.price_catalogue) {
        Ok(catalogue) => catalogue,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let sales: Vec<Value> = match load_json(&args.sales_record) {
        Ok(sales) => sales,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let mut report = Report::tally(PriceIndex::from_catalogue(catalogue), sales);
    report.elapsed = start.elapsed();
    let text = report.to_string();
    println!("{text}");
    fs::write(RESULTS_FILE, text)?;
    Ok(())
}
