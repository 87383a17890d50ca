use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One event inferred by the parsing service.
///
/// Every field is optional. Scalars of the wrong type are coerced to their
/// JSON text instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// HH:MM
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_minutes", skip_serializing_if = "Option::is_none")]
    pub reminder_minutes_before: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub time_unspecified: Option<bool>,
}

/// Body sent to the parsing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// Events returned by the parsing service
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResponse {
    pub events: Vec<CalendarEvent>,
}

impl ParseResponse {
    /// Extract events from a decoded response body.
    ///
    /// A missing, null or non-array `events` field yields no events. Entries
    /// that are not objects are skipped.
    pub fn from_json(body: &Value) -> Self {
        let events = match body.get("events") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match item {
                    Value::Object(_) => match CalendarEvent::deserialize(item) {
                        Ok(event) => Some(event),
                        Err(e) => {
                            warn!("Skipping event {} in parse response: {}", index, e);
                            None
                        }
                    },
                    other => {
                        warn!("Skipping event {} in parse response, not an object: {}", index, other);
                        None
                    }
                })
                .collect(),
            Some(other) => {
                warn!("Parse response `events` is not a list: {}", other);
                Vec::new()
            }
        };

        Self { events }
    }
}

/// Visible state of one playground
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaygroundState {
    pub text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub events: Vec<CalendarEvent>,
    pub last_parsed_at: Option<DateTime<Utc>>,
}

/// Why a submission did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The text is empty after trimming
    Blank,
    /// A request is already in flight
    Busy,
}

/// Result of asking the playground to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Started { token: u64 },
    Ignored { reason: IgnoreReason },
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => s.trim().parse::<bool>().ok(),
        _ => None,
    })
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
