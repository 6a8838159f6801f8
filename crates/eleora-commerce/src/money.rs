//! Price formatting and minor-unit conversion.
//!
//! The storefront trades in a single currency (INR) and displays whole
//! rupees everywhere, so formatting is a fixed policy rather than a
//! configurable formatter. Amounts are `f64` at the domain boundary and
//! integer paise on the payment-gateway wire.

/// Currency symbol used in all rendered prices.
pub const RUPEE: &str = "\u{20b9}";

/// Format an amount as a whole-rupee string, without symbol.
///
/// Missing or non-numeric amounts render as "0" rather than failing:
/// a broken price on a product page is preferable to no page at all.
///
/// ```
/// use eleora_commerce::money::format_price;
/// assert_eq!(format_price(Some(99.5)), "100");
/// assert_eq!(format_price(None), "0");
/// ```
pub fn format_price(amount: Option<f64>) -> String {
    match amount {
        // f64::round ties away from zero; `{:.0}` alone would round
        // ties to even and turn 99.5 into "100" but 98.5 into "98".
        Some(v) if v.is_finite() => format!("{:.0}", v.round()),
        _ => "0".to_string(),
    }
}

/// Format an amount with the currency symbol (e.g., "₹1235").
pub fn format_currency(amount: Option<f64>) -> String {
    format!("{}{}", RUPEE, format_price(amount))
}

/// Convert a rupee amount to integer paise for the payment gateway.
///
/// Rounds to the nearest minor unit.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
