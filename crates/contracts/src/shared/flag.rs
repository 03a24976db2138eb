//! SQL `BIT` columns reach the wire either as JSON booleans or as 0/1.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl RawFlag {
    fn into_bool(self) -> bool {
        match self {
            RawFlag::Bool(b) => b,
            RawFlag::Int(n) => n != 0,
            RawFlag::Text(s) => matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        }
    }
}

pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    RawFlag::deserialize(deserializer).map(RawFlag::into_bool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_flag")]
        flag: bool,
    }

    fn parse(raw: &str) -> bool {
        serde_json::from_str::<Row>(raw).unwrap().flag
    }

    #[test]
    fn test_flag_accepts_all_encodings() {
        assert!(parse(r#"{"flag":true}"#));
        assert!(!parse(r#"{"flag":false}"#));
        assert!(parse(r#"{"flag":1}"#));
        assert!(!parse(r#"{"flag":0}"#));
        assert!(parse(r#"{"flag":"True"}"#));
        assert!(!parse(r#"{"flag":"no"}"#));
    }
}
