//! Rendering of the encoding report.
//!
//! The body is `Original: <message>` followed by one
//! `Encoded (<Label>): <value>` line per transform, joined by `\n` with no
//! trailing newline.

use std::fmt;

use crate::encoding::Encoding;

/// Write the full report for `message` into `out`.
pub fn render_report<W: fmt::Write>(out: &mut W, message: &str) -> fmt::Result {
    write!(out, "Original: {}", message)?;
    for encoding in Encoding::ALL {
        write!(out, "\nEncoded ({}): {}", encoding.label(), encoding.apply(message))?;
    }
    Ok(())
}

/// Render the report into a fresh `String`.
pub fn report(message: &str) -> Result<String, fmt::Error> {
    let mut body = String::new();
    render_report(&mut body, message)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::MESSAGE;

    /// A sink that fails after accepting `budget` writes.
    struct FailingSink {
        budget: usize,
    }

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            if self.budget == 0 {
                return Err(fmt::Error);
            }
            self.budget -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_report_has_thirteen_lines_in_order() {
        let body = report(MESSAGE).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Original: Hello, World!");
        assert_eq!(lines[1], "Encoded (Base64): SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(lines[5], "Encoded (ROT13): Uryyb, Jbeyq!");
        assert_eq!(lines[12], "Encoded (Base85): %uJ|<6#K0p|E`giO");
        assert!(!body.ends_with('\n'));
    }

    #[test]
    fn test_empty_message_still_renders() {
        let body = report("").unwrap();
        assert_eq!(body.split('\n').count(), 13);
        assert!(body.starts_with("Original: \nEncoded (Base64): \n"));
        assert!(body.ends_with("Encoded (Base85): "));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = FailingSink { budget: 3 };
        assert!(render_report(&mut sink, MESSAGE).is_err());
    }
}
