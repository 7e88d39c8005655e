use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend record.
///
/// Accepts either a JSON number or a JSON string so the mirrors do not depend
/// on how a given backend entity encodes its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_deserialize() {
        let numeric: EntityId = serde_json::from_str("42").unwrap();
        let text: EntityId = serde_json::from_str("\"a1b2\"").unwrap();

        assert_eq!(numeric, EntityId::Numeric(42));
        assert_eq!(text, EntityId::Text("a1b2".to_string()));
        assert_eq!(numeric.to_string(), "42");
        assert_eq!(text.to_string(), "a1b2");
    }
}
