use serde::Deserialize;

use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a float, because sale quantities may themselves be
/// fractional, and the [`Display`] implementation formats it for display as
/// dollars to 2 decimal places.
#[derive(Clone, Copy, Default, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Usd(pub f64);

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dollars_to_two_decimal_places() {
        assert_eq!(Usd(6.0).to_string(), "$6.00");
        assert_eq!(Usd(8.75).to_string(), "$8.75");
        assert_eq!(Usd(-3.5).to_string(), "$-3.50");
    }

    #[test]
    fn mul_scales_price_by_quantity() {
        let mut total = Usd::default();
        total += Usd(2.0) * 3.0;
        total += Usd(1.5) * 0.5;
        assert_eq!(total, Usd(6.75));
    }

    #[test]
    fn deserializes_from_a_bare_json_number() {
        let price: Usd = serde_json::from_str("2").unwrap();
        assert_eq!(price, Usd(2.0));
        let price: Usd = serde_json::from_str("8.75").unwrap();
        assert_eq!(price, Usd(8.75));
    }
}
