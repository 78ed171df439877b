use serde::Deserialize;

use std::collections::HashMap;

use crate::usd::Usd;

/// One line of the price catalogue: a product title and its unit price.
///
/// Extra fields in the catalogue file are ignored.
#[derive(Debug, Deserialize)]
pub struct PriceEntry {
    pub title: String,
    pub price: Usd,
}

/// Returns the matching key for a product name: surrounding whitespace
/// trimmed, lowercased.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Maps normalized product names to unit prices.
///
/// Built once from the catalogue and read-only afterwards. When two catalogue
/// entries normalize to the same name, the later entry wins.
#[derive(Debug, Default)]
pub struct PriceIndex(HashMap<String, Usd>);

impl PriceIndex {
    /// Builds the index from catalogue entries, in catalogue order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_report::{PriceEntry, PriceIndex, Usd};
    /// let index = PriceIndex::from_catalogue(vec![PriceEntry {
    ///     title: "Apple".into(),
    ///     price: Usd(2.0),
    /// }]);
    /// assert_eq!(index.price(" APPLE "), Some(Usd(2.0)));
    /// assert_eq!(index.price("banana"), None);
    /// ```
    #[must_use]
    pub fn from_catalogue(entries: Vec<PriceEntry>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|entry| (normalize(&entry.title), entry.price))
                .collect(),
        )
    }

    /// Returns the unit price for `product`, if the catalogue lists it.
    ///
    /// `product` is normalized before lookup, so matching is insensitive to
    /// case and surrounding whitespace.
    #[must_use]
    pub fn price(&self, product: &str) -> Option<Usd> {
        self.0.get(&normalize(product)).copied()
    }
}
