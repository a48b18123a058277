use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One session row as served by the availability endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub session_type: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    /// Remaining open spots at last check. The endpoint serves this as an
    /// integer, a numeric string, or null.
    #[serde(default, deserialize_with = "deserialize_availability")]
    pub last_availability: Option<i64>,
}

fn deserialize_availability<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("availability count is not an integer")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid availability count: {}", s))),
        other => Err(D::Error::custom(format!(
            "unexpected availability value: {}",
            other
        ))),
    }
}
