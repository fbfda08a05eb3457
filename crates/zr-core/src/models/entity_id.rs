use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque server-assigned identifier.
///
/// The gateway hands out ids either as JSON strings or as JSON numbers. Both
/// compare by their textual form, so `42` and `"42"` name the same entity.
/// The numeric flag only decides how the id is written back on the wire.
#[derive(Debug, Clone, Eq)]
pub struct EntityId {
    raw: String,
    numeric: bool,
}

impl EntityId {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self {
            raw: raw.into(),
            numeric: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self {
            raw: value.to_string(),
            numeric: true,
        }
    }
}

impl FromStr for EntityId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.raw.parse::<i64>() {
            Ok(n) if self.numeric => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.raw),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => EntityId::from(n),
            RawId::Text(s) => EntityId::new(s),
        })
    }
}
