use serde::{Deserialize, Serialize};

/// A validated generation request. Exactly one variant is active per request;
/// the dispatcher produces it from raw query parameters before any generator
/// runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomRequest {
    Integer { min: i64, max: i64 },
    Guid,
    String { length: i64, special: bool },
    Topic { topic: String },
}

/// Synthetic user record, built fresh per request and never stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub address: Address,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub house_number: i64,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}
