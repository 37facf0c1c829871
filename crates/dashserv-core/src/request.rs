//! Per-call request description handed to a [`Transport`](crate::Transport).

use serde_json::Value;
use std::fmt;

/// HTTP verbs used by the dashserv API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Returns the method as an upper-case string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as a JSON document
    Json(Value),
    /// Serialized as `application/x-www-form-urlencoded`
    Form(Vec<(&'static str, String)>),
}

/// A single API call: verb, path segments, query pairs and optional body.
///
/// Path segments are kept unencoded; the transport percent-encodes each one
/// when it assembles the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<RequestBody>,
}

impl ApiRequest {
    /// Create a request for the given verb and path segments.
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Get, segments)
    }

    /// Shorthand for a POST request.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Post, segments)
    }

    /// Shorthand for a PUT request.
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Put, segments)
    }

    /// Shorthand for a DELETE request.
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Delete, segments)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a form-encoded body.
    #[must_use]
    pub fn with_form(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.body = Some(RequestBody::Form(pairs));
        self
    }

    /// Attach query parameters.
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// HTTP verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Unencoded path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Query pairs.
    #[must_use]
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Path relative to the base URL, e.g. `/vserver/abc/status`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_rendering() {
        let request = ApiRequest::get(["vserver", "abc-123", "status"]);
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/vserver/abc-123/status");
        assert!(request.body().is_none());
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_bodies() {
        let request = ApiRequest::put(["vserver", "a"]).with_json(json!({"cpu": 2}));
        assert_eq!(request.body(), Some(&RequestBody::Json(json!({"cpu": 2}))));

        let request =
            ApiRequest::post(["vserver"]).with_form(vec![("interval", "DAILY".to_string())]);
        assert!(matches!(request.body(), Some(RequestBody::Form(pairs)) if pairs.len() == 1));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }
}
