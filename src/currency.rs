//! Monetary text helpers for the amounts the workshop handles.

/// Currency marker tolerated on CSV amounts and produced by [`format_brl`].
pub const CURRENCY_MARKER: &str = "R$";

/// Formats a magnitude for display, e.g. `R$ 1250.00`.
pub fn format_brl(value: f64) -> String {
    format!("{} {:.2}", CURRENCY_MARKER, value)
}

/// Parses a monetary magnitude, stripping a leading currency marker and
/// surrounding whitespace. Returns `None` when the remainder is not a number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix(CURRENCY_MARKER).unwrap_or(trimmed);
    stripped.trim().parse::<f64>().ok()
}
