use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::addendum::Addendum;
use super::vehicle::Vehicle;
use crate::error::ConsoleError;

/// Envelope shared by every backend endpoint: `{ success, message?, data? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response, `None` when `success` is false.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Extracts the addendum list from a `GET /api/addendums` body.
///
/// A body without a `data` array yields an empty list. Entries that do not
/// match the addendum shape are skipped and counted in the second value.
pub fn parse_addendum_list(body: &str) -> (Vec<Addendum>, usize) {
    let envelope: ApiResponse<Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => return (Vec::new(), 0),
    };
    match envelope.data {
        Some(Value::Array(items)) => parse_items(items),
        _ => (Vec::new(), 0),
    }
}

/// Extracts the matches from a `GET /api/vehicles?vehicleType=&search=` body.
///
/// A body that is not a JSON envelope is a server fault. A failed or
/// empty envelope means no matches. Records that do not deserialize are
/// skipped and counted, so one odd record cannot hide the others.
pub fn parse_vehicle_list(body: &str) -> Result<(Vec<Vehicle>, usize), ConsoleError> {
    let envelope: ApiResponse<Value> =
        serde_json::from_str(body).map_err(|_| ConsoleError::ServerFault)?;
    match envelope.into_data() {
        Some(Value::Array(items)) => Ok(parse_items(items)),
        _ => Ok((Vec::new(), 0)),
    }
}

fn parse_items<T: DeserializeOwned>(items: Vec<Value>) -> (Vec<T>, usize) {
    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let skipped = total - parsed.len();
    (parsed, skipped)
}
