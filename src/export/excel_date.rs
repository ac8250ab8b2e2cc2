use chrono::{NaiveDate, NaiveDateTime};

/// Number format for entry and exit timestamps.
pub(crate) const TIMESTAMP_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial value of an exported timestamp (`YYYY-MM-DD HH:MM:SS`).
/// Empty exit times of ongoing sessions yield `None`.
pub(crate) fn timestamp_serial(s: &str) -> Option<f64> {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (dt - epoch).num_seconds() as f64;
    Some(secs / 86_400.0)
}
