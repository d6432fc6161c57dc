//! Minimal PokeAPI list structures (`/pokemon`, `/pokemon-species`, ...).

use serde::Deserialize;
use serde_json::Value;

/// Root of a named-resource list response. `count`, `next` and `previous`
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct ApiDocument {
    pub results: Vec<ApiRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ApiRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    name: Option<Value>,
}

impl ApiRecord {
    /// Resource name, if present and a string. Only used for log output.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }
}
