use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::adapters::random_generator::RandomGenerator;
use crate::adapters::user_generator::UserGenerator;
use crate::domain::RandomRequest;

/// Shared state for the REST endpoints.
#[derive(Clone)]
pub struct ApiState {
    pub random: Arc<RandomGenerator>,
    pub users: Arc<UserGenerator>,
}

/// Raw query parameters as they arrive on the wire. Everything is a string
/// until the schema-validation step coerces it into a typed `RandomRequest`.
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub len: Option<String>,
    pub special: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

/// Body of a 400 response: a plain message for dispatch/range errors, or the
/// list of coercion issues collected during parameter validation.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

const UNSUPPORTED_TYPE: &str = "Invalid or missing type parameter. Supported types: integer, guid, string. Or provide a topic parameter.";

/// Coerce and validate raw query parameters into a typed request.
///
/// Resolution order: a non-empty `topic` wins over everything else, then the
/// `type` parameter selects the variant. An empty `topic` counts as absent.
fn parse_request(query: &RandomQuery) -> Result<RandomRequest, ErrorBody> {
    if let Some(topic) = query.topic.as_deref().filter(|t| !t.is_empty()) {
        return Ok(RandomRequest::Topic {
            topic: topic.to_string(),
        });
    }

    match query.type_.as_deref() {
        Some("integer") => {
            let mut issues = Vec::new();
            let min = parse_number("min", query.min.as_deref(), 0, &mut issues);
            let max = parse_number("max", query.max.as_deref(), 100, &mut issues);
            if issues.is_empty() {
                Ok(RandomRequest::Integer { min, max })
            } else {
                Err(ErrorBody::Issues(issues))
            }
        }
        Some("guid") => Ok(RandomRequest::Guid),
        Some("string") => {
            let mut issues = Vec::new();
            let length = parse_number("len", query.len.as_deref(), 10, &mut issues);
            if length < 0 {
                issues.push(ValidationIssue {
                    field: "len",
                    message: "must be greater than or equal to 0".to_string(),
                });
            }
            let special = query.special.as_deref() == Some("true");
            if issues.is_empty() {
                Ok(RandomRequest::String { length, special })
            } else {
                Err(ErrorBody::Issues(issues))
            }
        }
        _ => Err(ErrorBody::Message(UNSUPPORTED_TYPE.to_string())),
    }
}

fn parse_number(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
    issues: &mut Vec<ValidationIssue>,
) -> i64 {
    match raw {
        None => default,
        // An empty value coerces to 0, not the default.
        Some(text) if text.is_empty() => 0,
        Some(text) => match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                issues.push(ValidationIssue {
                    field,
                    message: "expected a number".to_string(),
                });
                default
            }
        },
    }
}

/// GET /api/random - generate a random value selected by query parameters
pub async fn get_random(
    State(state): State<ApiState>,
    Query(query): Query<RandomQuery>,
) -> impl IntoResponse {
    let request = match parse_request(&query) {
        Ok(request) => request,
        Err(body) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": body })));
        }
    };

    let result = match request {
        RandomRequest::Integer { min, max } => {
            state.random.generate_integer(min, max).map(Value::from)
        }
        RandomRequest::Guid => Ok(Value::from(state.random.generate_guid())),
        RandomRequest::String { length, special } => {
            state.random.generate_string(length, special).map(Value::from)
        }
        RandomRequest::Topic { topic } => {
            Ok(Value::from(state.random.generate_from_topic(&topic)))
        }
    };

    match result {
        Ok(value) => (StatusCode::OK, Json(json!({ "result": value }))),
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
        }
    }
}

/// GET /api/random/user - generate a synthetic user record
pub async fn get_random_user(State(state): State<ApiState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.users.random_user()))
}

/// GET /api/random/destination - pick a random flight destination
pub async fn get_random_destination(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "result": state.random.generate_destination() })),
    )
}

/// GET /api/time/utc - current UTC time, RFC 3339 with millisecond precision
pub async fn get_utc_time() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "utc_time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true) })),
    )
}
