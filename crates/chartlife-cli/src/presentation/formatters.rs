/// Proportional bar for chart blocks, scaled against the view's maximum.
///
/// A non-zero value always yields at least one cell so small buckets stay
/// visible next to large ones.
pub fn scaled_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 || width == 0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// Day quantities read as integers upstream but arrive as floats; print whole
/// values without a fraction and everything else with two decimals.
pub fn format_days(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
