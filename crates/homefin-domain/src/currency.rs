//! Static currency conversion table and display helpers.
//!
//! Rates are fixed at call time; the tracker does not fetch live quotes.
//! All forecasting and summary math is carried out in EUR.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// EUR value of one unit of each supported currency.
static CONVERSION_RATES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("EUR", 1.0),
        ("USD", 0.92),
        ("GBP", 1.17),
        ("CHF", 1.04),
        ("SEK", 0.088),
        ("NOK", 0.086),
        ("DKK", 0.134),
        ("PLN", 0.23),
        ("CZK", 0.040),
        ("HUF", 0.0025),
        ("RON", 0.20),
        ("BGN", 0.51),
        ("JPY", 0.0062),
        ("CAD", 0.68),
        ("AUD", 0.61),
    ])
});

/// EUR rate for the given ISO 4217 code, case-insensitive.
pub fn conversion_rate(code: &str) -> Option<f64> {
    CONVERSION_RATES
        .get(code.to_uppercase().as_str())
        .copied()
}

pub fn symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "AUD" => "A$",
        _ => "",
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_converts_at_parity() {
        assert_eq!(conversion_rate("EUR"), Some(1.0));
        assert_eq!(conversion_rate("eur"), Some(1.0));
    }

    #[test]
    fn unknown_codes_have_no_rate() {
        assert_eq!(conversion_rate("XXX"), None);
        assert_eq!(conversion_rate(""), None);
    }

    #[test]
    fn minor_units_default_to_two() {
        assert_eq!(minor_units_for("JPY"), 0);
        assert_eq!(minor_units_for("EUR"), 2);
    }
}
