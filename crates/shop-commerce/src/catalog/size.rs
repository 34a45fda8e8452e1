//! Shoe sizes.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A shoe size such as `8` or `8.5`.
///
/// Stored in tenths so it can take part in hashed keys; serialized as a plain
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ShoeSize(u32);

impl ShoeSize {
    /// Create a size from tenths (e.g., `85` for size 8.5).
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Create a size from a number, rejecting values that are not positive,
    /// not finite, or finer than a tenth.
    pub fn new(value: f64) -> Result<Self, CommerceError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CommerceError::InvalidSize(value.to_string()));
        }
        let tenths = (value * 10.0).round();
        if (tenths / 10.0 - value).abs() > 1e-9 || tenths > u32::MAX as f64 {
            return Err(CommerceError::InvalidSize(value.to_string()));
        }
        Ok(Self(tenths as u32))
    }

    /// The size in tenths.
    pub fn tenths(&self) -> u32 {
        self.0
    }

    /// The size as a number.
    pub fn value(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl TryFrom<f64> for ShoeSize {
    type Error = CommerceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ShoeSize::new(value)
    }
}

impl From<ShoeSize> for f64 {
    fn from(size: ShoeSize) -> f64 {
        size.value()
    }
}

impl FromStr for ShoeSize {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| CommerceError::InvalidSize(s.to_string()))?;
        ShoeSize::new(value)
    }
}

impl fmt::Display for ShoeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_sizes() {
        let size = ShoeSize::new(8.5).unwrap();
        assert_eq!(size.tenths(), 85);
        assert_eq!(size.to_string(), "8.5");
        assert_eq!(ShoeSize::new(10.0).unwrap().to_string(), "10");
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        assert!(ShoeSize::new(0.0).is_err());
        assert!(ShoeSize::new(-7.0).is_err());
        assert!(ShoeSize::new(f64::NAN).is_err());
        assert!(ShoeSize::new(8.25).is_err());
        assert!("nine".parse::<ShoeSize>().is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("9.5".parse::<ShoeSize>(), Ok(ShoeSize::from_tenths(95)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ShoeSize::from_tenths(65)).unwrap();
        assert_eq!(json, "6.5");

        let size: ShoeSize = serde_json::from_str("12").unwrap();
        assert_eq!(size, ShoeSize::from_tenths(120));

        assert!(serde_json::from_str::<ShoeSize>("-1").is_err());
    }

    #[test]
    fn test_ordering() {
        let mut sizes = vec![ShoeSize::from_tenths(95), ShoeSize::from_tenths(60)];
        sizes.sort();
        assert_eq!(sizes[0].value(), 6.0);
    }
}
