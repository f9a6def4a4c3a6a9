//! Timestamp suffix formatting for preserved file copies.

use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};

/// Format a Unix timestamp (seconds) as the suffix used when preserving
/// a superseded or shadowed file: `YYYY-MM-DD--at--HH-MM-SS`, local time.
pub fn format_suffix(unix_seconds: i64) -> String {
    match Local.timestamp_opt(unix_seconds, 0) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d--at--%H-%M-%S").to_string()
        }
        // Out-of-range timestamps cannot come from real file metadata;
        // fall back to the raw seconds so the name stays unique.
        chrono::LocalResult::None => format!("at--{}", unix_seconds),
    }
}

/// Build the preserved-copy name for `path`: the full file name with
/// `--<formatted timestamp>` appended (after any extension).
pub fn suffixed_path(path: &Path, unix_seconds: i64) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push("--");
    name.push(format_suffix(unix_seconds));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_format_suffix_shape() {
        let suffix = format_suffix(1_600_000_000);
        // YYYY-MM-DD--at--HH-MM-SS
        assert_eq!(suffix.len(), 24);
        assert!(suffix.contains("--at--"));
    }

    #[test]
    fn test_format_suffix_round_trips_local_time() {
        let secs = 1_600_000_000;
        let dt = Local.timestamp_opt(secs, 0).unwrap();
        let suffix = format_suffix(secs);

        assert!(suffix.starts_with(&format!(
            "{:04}-{:02}-{:02}",
            dt.year(),
            dt.month(),
            dt.day()
        )));
        assert!(suffix.ends_with(&format!(
            "{:02}-{:02}-{:02}",
            dt.hour(),
            dt.minute(),
            dt.second()
        )));
    }

    #[test]
    fn test_suffixed_path_appends_after_extension() {
        let path = PathBuf::from("/dest/report.txt");
        let suffixed = suffixed_path(&path, 1_600_000_000);
        let name = suffixed.file_name().unwrap().to_string_lossy();

        assert!(name.starts_with("report.txt--"));
        assert_eq!(suffixed.parent(), path.parent());
    }
}
