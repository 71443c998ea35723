// VidKit Timecode Parsing
// Copyright (c) 2026 Xing_The_Creator | VidKit

use crate::error::{MediaError, Result};

/// Parse `HH:MM:SS`, `MM:SS` or `SS` into seconds.
///
/// Components may be fractional or negative; they are combined
/// arithmetically without range checks.
pub fn parse_time_to_seconds(input: &str) -> Result<f64> {
    let bad = || MediaError::TimeFormat {
        input: input.to_string(),
    };

    let parts = input
        .split(':')
        .map(|p| p.trim().parse::<f64>().map_err(|_| bad()))
        .collect::<Result<Vec<f64>>>()?;

    match parts.as_slice() {
        [s] => Ok(*s),
        [m, s] => Ok(m * 60.0 + s),
        [h, m, s] => Ok(h * 3600.0 + m * 60.0 + s),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_scaling() {
        assert_eq!(parse_time_to_seconds("01:02:03").unwrap(), 3723.0);
        assert_eq!(parse_time_to_seconds("02:03").unwrap(), 123.0);
        assert_eq!(parse_time_to_seconds("45").unwrap(), 45.0);
    }

    #[test]
    fn test_fractional_and_negative_pass_through() {
        assert_eq!(parse_time_to_seconds("00:01.5").unwrap(), 1.5);
        assert_eq!(parse_time_to_seconds("-1:30").unwrap(), -30.0);
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["", "1:2:3:4", "ab:10", "10:", "1::2"] {
            assert!(
                matches!(parse_time_to_seconds(input), Err(MediaError::TimeFormat { .. })),
                "expected failure for {:?}",
                input
            );
        }
    }
}
