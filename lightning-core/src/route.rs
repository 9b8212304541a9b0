use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Ordered `ORIGIN-DEST` pair. `JFK-LAX` and `LAX-JFK` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    /// Builds a key from two codes, upper-casing both.
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.trim().to_uppercase(),
            destination: destination.trim().to_uppercase(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

impl FromStr for RouteKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, destination) = s
            .split_once('-')
            .ok_or_else(|| CoreError::InvalidRoute(s.to_string()))?;

        let valid = |code: &str| {
            (3..=4).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic())
        };
        if !valid(origin.trim()) || !valid(destination.trim()) {
            return Err(CoreError::InvalidRoute(s.to_string()));
        }

        Ok(Self::new(origin, destination))
    }
}

impl TryFrom<String> for RouteKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RouteKey> for String {
    fn from(key: RouteKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let key: RouteKey = "jfk-lhr".parse().unwrap();
        assert_eq!(key.origin, "JFK");
        assert_eq!(key.destination, "LHR");
        assert_eq!(key.to_string(), "JFK-LHR");

        let icao: RouteKey = "OMDW-FCO".parse().unwrap();
        assert_eq!(icao.origin, "OMDW");
    }

    #[test]
    fn test_rejects_malformed_keys() {
        assert!("JFKLAX".parse::<RouteKey>().is_err());
        assert!("JF-LAX".parse::<RouteKey>().is_err());
        assert!("JFK-L4X".parse::<RouteKey>().is_err());
        assert!(matches!(
            "nope".parse::<RouteKey>(),
            Err(CoreError::InvalidRoute(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let key = RouteKey::new("bos", "sfo");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"BOS-SFO\"");
        let back: RouteKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<RouteKey>("\"BOS\"").is_err());
    }
}
