/// Format a price with precision scaled to its magnitude.
///
/// Sub-unit prices keep more decimals, large prices are rounded to whole
/// units, and trailing zeros are dropped. Zero and non-finite values print
/// as `0.00`.
pub fn format_price(price: f64) -> String {
    if price == 0.0 || !price.is_finite() {
        return "0.00".to_string();
    }

    let abs_price = price.abs();
    let formatted = if abs_price < 0.000001 {
        format!("{:.8}", price)
    } else if abs_price < 0.0001 {
        format!("{:.6}", price)
    } else if abs_price < 1.0 {
        format!("{:.4}", price)
    } else if abs_price < 1000.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.0}", price)
    };

    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}
