//! Classification of the identifier typed into the submission form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConsoleError, MISSING_VEHICLE_MESSAGE};

static OBJECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("object id pattern compiles"));

/// True when `input` (trimmed) is a 24-character hexadecimal string.
pub fn is_object_id(input: &str) -> bool {
    OBJECT_ID.is_match(input.trim())
}

/// How a user-supplied identifier is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// `GET /vehicles/{id}`.
    Direct(String),
    /// Plate substring searched in both categories.
    Plate(String),
}

impl LookupKey {
    pub fn classify(input: &str) -> Result<Self, ConsoleError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConsoleError::Validation(MISSING_VEHICLE_MESSAGE.to_string()));
        }
        if is_object_id(trimmed) {
            Ok(LookupKey::Direct(trimmed.to_string()))
        } else {
            Ok(LookupKey::Plate(trimmed.to_string()))
        }
    }
}
