use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ScheduleError};

/// A minister eligible for assignment, as registered in the parish system.
///
/// Preference and avoidance lists hold weekend mass ids. Both are optional
/// in the input and default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Minister {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub preferred_positions: Vec<u32>,
    #[serde(default)]
    pub avoid_positions: Vec<u32>,
}

/// One questionnaire response. A minister may submit several responses;
/// availability is granted if any one of them grants it.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResponse {
    pub user_id: String,
    /// Free-text weekend availability entries, e.g. "Domingo 10h" or a bare "10h".
    #[serde(default)]
    pub available_sundays: Vec<String>,
    /// Localized day names for daily masses, e.g. "Segunda-feira".
    #[serde(default)]
    pub daily_mass_availability: Vec<String>,
    /// Detailed per-day flags keyed by English day name ("monday".."friday").
    #[serde(default)]
    pub weekdays: HashMap<String, bool>,
}

/// The full input document: registered users plus their questionnaire responses.
#[derive(Debug, Clone)]
pub struct ScheduleInput {
    pub users: Vec<Minister>,
    pub responses: Vec<AvailabilityResponse>,
}

/// Reads and validates the input document from any reader.
///
/// Top-level shape problems (bad JSON, missing `users`/`responses`) are
/// `MalformedInput`; field-level problems on individual records are
/// `InvalidRecord`.
pub fn read_input<R: Read>(reader: R) -> Result<ScheduleInput> {
    let document: Value = serde_json::from_reader(reader)
        .map_err(|e| ScheduleError::MalformedInput(e.to_string()))?;

    let Value::Object(mut document) = document else {
        return Err(ScheduleError::MalformedInput(
            "top level must be a JSON object".to_string(),
        ));
    };

    let users = document
        .remove("users")
        .ok_or_else(|| ScheduleError::MalformedInput("missing required key: users".to_string()))?;
    let responses = document.remove("responses").ok_or_else(|| {
        ScheduleError::MalformedInput("missing required key: responses".to_string())
    })?;

    let users: Vec<Minister> = serde_json::from_value(users)
        .map_err(|e| ScheduleError::InvalidRecord(format!("users: {}", e)))?;
    let responses: Vec<AvailabilityResponse> = serde_json::from_value(responses)
        .map_err(|e| ScheduleError::InvalidRecord(format!("responses: {}", e)))?;

    Ok(ScheduleInput { users, responses })
}

/// Loads the input document from a file.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ScheduleInput> {
    read_input(File::open(path)?)
}
