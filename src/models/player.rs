//! Player data structure and normalization of untrusted player input.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a player. Opaque string, assigned once at creation
/// and never reused or mutated.
pub type PlayerId = String;

/// The full set of players for one game. Ordered for display by points
/// (descending); identity-unordered otherwise. Saved and loaded as a whole,
/// never patched per player.
pub type Roster = Vec<Player>;

/// A player on a scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub points: i64,
}

impl Player {
    /// Create a new player with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            wins: 0,
            points: 0,
        }
    }

    /// Normalize one element of an incoming roster. Fields are coerced, never
    /// rejected:
    /// - `id`: taken as-is when a string, otherwise empty.
    /// - `name`: string trimmed; number rendered to its decimal string;
    ///   otherwise empty.
    /// - `wins` / `points`: number or numeric string coerced to integer
    ///   (fractions truncate toward zero), otherwise 0. Negative values pass
    ///   through.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: match raw.get("id") {
                Some(Value::String(s)) => s.clone(),
                _ => String::new(),
            },
            name: coerce_name(raw.get("name")),
            wins: coerce_count(raw.get("wins")),
            points: coerce_count(raw.get("points")),
        }
    }
}

fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn coerce_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    }
}
