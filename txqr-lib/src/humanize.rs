use std::time::Duration;

/// Formats a byte count using binary multiples, e.g. `"512 B"` or `"45.2 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    let suffixes = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} {}", bytes, suffixes[0]);
    }

    let mut index = 0;
    let mut size = bytes as f64;

    while size >= 1024.0 && index < suffixes.len() - 1 {
        size /= 1024.0;
        index += 1;
    }

    format!("{:.1} {}", size, suffixes[index])
}

/// Formats a bytes-per-second rate, e.g. `"45.2 KB/s"`.
pub fn format_rate(bytes_per_sec: u64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Formats a duration for display. Anything under a second is shown in whole milliseconds, longer
/// durations are truncated to a tenth of a second: `"850ms"`, `"12.2s"`, `"1m3.4s"`.
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }
    if duration < Duration::from_secs(1) {
        return format!("{}ms", duration.as_millis());
    }

    let tenths = duration.as_millis() / 100;

    let hours = tenths / 36_000;
    let minutes = (tenths / 600) % 60;
    let seconds = (tenths / 10) % 60;
    let tenth = tenths % 10;

    if hours > 0 {
        format!("{}h{}m{}.{}s", hours, minutes, seconds, tenth)
    } else if minutes > 0 {
        format!("{}m{}.{}s", minutes, seconds, tenth)
    } else {
        format!("{}.{}s", seconds, tenth)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_bytes, format_duration, format_rate};
    use std::time::Duration;

    #[test]
    fn bytes_are_humanized() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(46_285), "45.2 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2.0 GB");
        assert_eq!(format_rate(2048), "2.0 KB/s");
    }

    #[test]
    fn durations_are_truncated_to_tenths() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.0s");
        assert_eq!(format_duration(Duration::from_nanos(12_232_312_313)), "12.2s");
        assert_eq!(format_duration(Duration::from_millis(63_499)), "1m3.4s");
        assert_eq!(format_duration(Duration::from_millis(3_723_000)), "1h2m3.0s");
    }
}
