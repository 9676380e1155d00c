//! Human-readable size formatting for interactive output.
//!
//! Machine-readable output always carries exact byte counts; this formatter
//! exists only for tables read by people.

const UNITS: &[(u32, &str)] = &[
    (60, "EiB"),
    (50, "PiB"),
    (40, "TiB"),
    (30, "GiB"),
    (20, "MiB"),
    (10, "KiB"),
    (0, "B"),
];

/// Format a byte count with the largest binary prefix it reaches.
///
/// Exact multiples render as integers, everything else with two decimals.
/// No space separates value and unit: `1GiB`, `1.50KiB`.
pub fn approximate_size_string(size_bytes: u64) -> String {
    for (shift, unit) in UNITS {
        let factor = 1u64 << shift;
        if size_bytes >= factor {
            if size_bytes % factor == 0 {
                return format!("{}{}", size_bytes / factor, unit);
            }
            return format!("{:.2}{}", size_bytes as f64 / factor as f64, unit);
        }
    }
    "0B".to_string()
}
