//! Request and response payloads for the users endpoints.
//!
//! Request fields are optional at the serde layer so a missing `name` reaches
//! the handler and is reported with the endpoint's own message rather than a
//! generic deserialisation error. Bodies that are not JSON objects, or whose
//! `name` is not a string, still fail extraction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON body `{"name": string}` accepted by `POST /users` and both `PUT`
/// variants.
///
/// Only objects are accepted; arrays and scalars are rejected even though
/// serde's derived struct visitor would take a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct UserNamePayload {
    pub name: Option<String>,
}

impl TryFrom<Map<String, Value>> for UserNamePayload {
    type Error = String;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        match body.remove("name") {
            None | Some(Value::Null) => Ok(Self { name: None }),
            Some(Value::String(name)) => Ok(Self { name: Some(name) }),
            Some(other) => Err(format!("`name` must be a string, found {other}")),
        }
    }
}

/// Query string `?name=` accepted by the name-addressed endpoints.
///
/// A repeated `name` parameter resolves to its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct NameQuery {
    pub name: Option<String>,
}

impl From<Vec<(String, String)>> for NameQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            name: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "name").then_some(value)),
        }
    }
}

/// Response body `{"message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Wrap `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
