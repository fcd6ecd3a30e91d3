/// Size formatting utilities.
///
/// All internal sizes are `u64` bytes. Floating point is only used at the
/// display-formatting boundary.

const MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as mebibytes with two decimals, e.g. `"150.00 MB"`.
///
/// This is the fixed unit used for every row and prompt, so sizes in a
/// listing line up and compare at a glance.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

/// Format a byte count with an appropriate binary unit (B, KB, MB, GB, TB).
///
/// Used for totals in the status bar where the magnitude varies widely.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
