#![doc = include_str!("../README.md")]

pub mod catalogue;
pub mod load;
pub mod report;
pub mod usd;

pub use catalogue::{normalize, PriceEntry, PriceIndex};
pub use load::{load_json, LoadError};
pub use report::Report;
pub use usd::Usd;
