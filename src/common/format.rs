use colored::*;

const MB: f64 = 1024.0 * 1024.0;

/// Format bytes as megabytes with two decimals, e.g. `1.00 MB`
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MB)
}

/// Render a report section header, bold and underlined when `color` is set
pub fn header(title: &str, color: bool) -> String {
    if color {
        title.bold().underline().to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mb() {
        assert_eq!(format_mb(0), "0.00 MB");
        assert_eq!(format_mb(18), "0.00 MB");
        assert_eq!(format_mb(1024), "0.00 MB");
        assert_eq!(format_mb(1_048_576), "1.00 MB");
        assert_eq!(format_mb(1_048_577), "1.00 MB");
        assert_eq!(format_mb(1_572_864), "1.50 MB");
        assert_eq!(format_mb(10 * 1024 * 1024 * 1024), "10240.00 MB");
    }

    #[test]
    fn test_plain_header() {
        assert_eq!(header("Large files:", false), "Large files:");
    }
}
