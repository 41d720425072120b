use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a grouping column. Keys order numerically or lexicographically, so charts list
/// their bars in ascending key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl GroupKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            // debug formatting keeps the decimal point on whole values, e.g. `0.0`
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.cmp(rhs),
            (Self::Float(lhs), Self::Float(rhs)) => lhs.total_cmp(rhs),
            (Self::Integer(lhs), Self::Float(rhs)) => (*lhs as f64).total_cmp(rhs),
            (Self::Float(lhs), Self::Integer(rhs)) => lhs.total_cmp(&(*rhs as f64)),
            (Self::Text(lhs), Self::Text(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => lhs.rank().cmp(&rhs.rank()),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl From<i64> for GroupKey {
    fn from(that: i64) -> Self {
        Self::Integer(that)
    }
}

impl From<f64> for GroupKey {
    fn from(that: f64) -> Self {
        Self::Float(that)
    }
}

impl From<&str> for GroupKey {
    fn from(that: &str) -> Self {
        Self::Text(that.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GroupKey::from(100_000).to_string(), "100000");
        assert_eq!(GroupKey::from(0.0).to_string(), "0.0");
        assert_eq!(GroupKey::from(0.1).to_string(), "0.1");
        assert_eq!(GroupKey::from("universal").to_string(), "universal");
    }

    #[test]
    fn test_ordering() {
        let mut keys = vec![
            GroupKey::from(0.5),
            GroupKey::from(0.0),
            GroupKey::from(0.25),
            GroupKey::from(-0.0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                GroupKey::from(-0.0),
                GroupKey::from(0.0),
                GroupKey::from(0.25),
                GroupKey::from(0.5)
            ]
        );

        let mut keys = vec![GroupKey::from(1000), GroupKey::from(100), GroupKey::from(10_000)];
        keys.sort();
        assert_eq!(
            keys,
            vec![GroupKey::from(100), GroupKey::from(1000), GroupKey::from(10_000)]
        );

        assert!(GroupKey::from("leveled") < GroupKey::from("universal"));
        assert!(GroupKey::from(9_999_999) < GroupKey::from("0"));
    }
}
