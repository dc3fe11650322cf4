use std::time::Duration;

/// Formats an elapsed time as `HH:MM:SS.mmm`.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = duration.subsec_millis();
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

pub fn mb_from_bytes(bytes: u64) -> f64 {
    bytes as f64 / 1_048_576.0
}

pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(Duration::ZERO), "00:00:00.000");
    }

    #[test]
    fn format_duration_keeps_milliseconds() {
        let short = Duration::from_millis(1_250);
        assert_eq!(format_duration(short), "00:00:01.250");
        assert_eq!(format_duration(Duration::from_secs(3661)), "01:01:01.000");
    }

    #[test]
    fn output_size_in_megabytes() {
        assert_eq!(mb_from_bytes(0), 0.0);
        assert_eq!(round_two_decimals(mb_from_bytes(1_572_864)), 1.5);
        assert_eq!(round_two_decimals(mb_from_bytes(10_000)), 0.01);
    }
}
