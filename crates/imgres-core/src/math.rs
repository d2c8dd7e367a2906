//! Shared arithmetic for sizes and ratios.

/// Bytes in one megabyte (binary, 1024 * 1024).
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `width / height` rounded to two decimals. A zero height yields 0.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    round2(width as f64 / height as f64)
}

/// Shortest decimal form of a ratio, keeping at least one fractional digit
/// (`0.5`, `1.33`, `4.0`).
pub fn format_ratio(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
