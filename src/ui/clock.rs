/// Render whole seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(7), "0:07");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(450), "7:30");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "60:00");
    }
}
