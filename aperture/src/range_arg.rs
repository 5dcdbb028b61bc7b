//! Focal length range argument for the command line.
//!
//! Provides a clap-compatible type for `min:max` focal length sweeps with
//! parsing, validation, and display formatting.

use crate::error::ApertureError;
use crate::selector::{FocalLengthDomain, DEFAULT_MAX_FOCAL_LENGTH_MM, DEFAULT_MIN_FOCAL_LENGTH_MM};
use std::fmt;
use std::str::FromStr;

/// Parse an inclusive focal length range in mm.
///
/// # Format Specification
/// Input format: "min:max"
/// - **min**: Shortest focal length, a positive integer
/// - **max**: Longest focal length (inclusive), not below min
///
/// The sweep always steps by 1mm.
///
/// # Examples
/// Valid: "13:200", "70:70"
///
/// Invalid:
/// - "13" - Missing max
/// - "0:200" - Focal length must be positive
/// - "200:13" - Max below min
/// - "13.5:200" - Not an integer
pub fn parse_focal_range(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err("Focal range must be in format 'min:max'".to_string());
    }

    let min = parts[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| "Invalid min focal length".to_string())?;
    let max = parts[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| "Invalid max focal length".to_string())?;

    if min == 0 {
        return Err("Focal lengths must be positive".to_string());
    }

    if min > max {
        return Err(format!("Max focal length ({max}) is below min ({min})"));
    }

    Ok((min, max))
}

/// Inclusive focal length sweep from the command line, in mm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocalRangeArg(pub u32, pub u32);

impl Default for FocalRangeArg {
    fn default() -> Self {
        FocalRangeArg(DEFAULT_MIN_FOCAL_LENGTH_MM, DEFAULT_MAX_FOCAL_LENGTH_MM)
    }
}

impl FromStr for FocalRangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = parse_focal_range(s)?;
        Ok(FocalRangeArg(min, max))
    }
}

impl fmt::Display for FocalRangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

impl FocalRangeArg {
    pub fn min(&self) -> u32 {
        self.0
    }

    pub fn max(&self) -> u32 {
        self.1
    }

    /// Convert to the domain swept by the selector
    pub fn to_domain(&self) -> Result<FocalLengthDomain, ApertureError> {
        FocalLengthDomain::new(self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_range_parsing() {
        assert_eq!(parse_focal_range("13:200").unwrap(), (13, 200));
        assert_eq!(parse_focal_range(" 70 : 70 ").unwrap(), (70, 70));

        assert!(parse_focal_range("13").is_err()); // Missing max
        assert!(parse_focal_range("13:200:1").is_err()); // Too many parts
        assert!(parse_focal_range("wide:200").is_err()); // Invalid min
        assert!(parse_focal_range("13:tele").is_err()); // Invalid max
        assert!(parse_focal_range("13.5:200").is_err()); // Not an integer
        assert!(parse_focal_range("-13:200").is_err()); // Negative
        assert!(parse_focal_range("0:200").is_err()); // Zero
    }

    #[test]
    fn test_focal_range_reversed() {
        let err = parse_focal_range("200:13").unwrap_err();
        assert!(err.contains("Max focal length (13) is below min (200)"));
    }

    #[test]
    fn test_focal_range_arg_display_round_trip() {
        let range: FocalRangeArg = "24:105".parse().unwrap();
        assert_eq!(range.min(), 24);
        assert_eq!(range.max(), 105);
        assert_eq!(range.to_string(), "24:105");
        assert_eq!(FocalRangeArg::default().to_string(), "13:200");
    }

    #[test]
    fn test_focal_range_arg_to_domain() {
        let domain = FocalRangeArg::default().to_domain().unwrap();
        assert_eq!(domain, FocalLengthDomain::reference());
        assert_eq!(FocalRangeArg(50, 60).to_domain().unwrap().len(), 11);
    }
}
