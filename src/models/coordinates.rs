//! Coordinate pair as received from the caller or the geocoder.

use std::fmt;

use serde::Serialize;

/// A latitude/longitude pair kept in the exact text form it arrived in.
///
/// No numeric normalization happens here, so `"-74.0060"` and `"-74.006"` are
/// distinct cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Cache key: `"<latitude>,<longitude>"`.
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_joins_raw_text() {
        let coords = Coordinates::new("40.7128", "-74.006");
        assert_eq!(coords.cache_key(), "40.7128,-74.006");
    }

    #[test]
    fn test_cache_key_is_not_normalized() {
        let a = Coordinates::new("40.7128", "-74.0060");
        let b = Coordinates::new("40.7128", "-74.006");
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
