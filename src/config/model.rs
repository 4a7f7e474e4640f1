use std::collections::HashMap;

use reqwest::Method;
use serde::Deserialize;

/// A single HTTP endpoint to be health-checked.
///
/// Only the URL is required. The method defaults to GET, headers default to
/// empty, and the body is absent unless configured, in which case it is sent
/// JSON-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Absolute URL of the endpoint to probe.
    pub url: String,

    /// HTTP method, case-insensitive. Defaults to GET.
    #[serde(default = "default_method")]
    pub method: String,

    /// Extra request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Optional structured request body, sent as JSON when present.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl EndpointConfig {
    /// The configured method normalized to uppercase.
    ///
    /// A method string that is not a valid HTTP token falls back to GET.
    pub fn http_method(&self) -> Method {
        Method::from_bytes(self.method.to_ascii_uppercase().as_bytes()).unwrap_or(Method::GET)
    }
}
