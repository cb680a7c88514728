//! Blocking HTTP implementation of the metadata resolver
//!
//! Talks to the docman lookup service:
//! - `GET {endpoint}/isbn/{isbn}` returns book author/title/publisher/year
//! - `GET {endpoint}/title/{encoded-url}` returns `{"title": ...}`

use serde_json::Value;

use super::{BookMeta, MetadataResolver, ResolveError};

/// Default lookup service endpoint; override with the `DOCMAN_API` env var.
pub const DEFAULT_ENDPOINT: &str = "http://docman.lcpu.dev";

/// Metadata resolver backed by the docman HTTP lookup service
pub struct HttpResolver {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpResolver {
    /// Creates a resolver against the given endpoint (no trailing slash)
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Creates a resolver against `DOCMAN_API` or the default endpoint
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("DOCMAN_API").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    fn get_json(&self, url: &str) -> Result<Value, ResolveError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16(), url.to_string()));
        }
        Ok(response.json()?)
    }
}

impl MetadataResolver for HttpResolver {
    fn book_by_isbn(&self, isbn: &str) -> Result<BookMeta, ResolveError> {
        let url = format!("{}/isbn/{}", self.endpoint, encode_uri_component(isbn));
        let body = self.get_json(&url)?;
        Ok(BookMeta {
            author: required_string(&body, "author")?,
            title: required_string(&body, "title")?,
            publisher: required_string(&body, "publisher")?,
            year: required_string(&body, "year")?,
        })
    }

    fn title_for_url(&self, url: &str) -> Result<String, ResolveError> {
        let request_url = format!("{}/title/{}", self.endpoint, encode_uri_component(url));
        let body = self.get_json(&request_url)?;
        required_string(&body, "title")
    }
}

fn required_string(body: &Value, field: &'static str) -> Result<String, ResolveError> {
    match body.get(field) {
        // The service is loose about numeric years; accept them as text.
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ResolveError::MissingField(field)),
    }
}

/// Percent-encodes a string for use as one path segment of a lookup URL
fn encode_uri_component(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_uri_component("abc-DEF_1.2~"), "abc-DEF_1.2~");
    }

    #[test]
    fn space_becomes_plus() {
        assert_eq!(encode_uri_component("a b"), "a+b");
    }

    #[test]
    fn url_characters_are_percent_encoded() {
        assert_eq!(
            encode_uri_component("https://a.io/x?y=1"),
            "https%3A%2F%2Fa.io%2Fx%3Fy%3D1"
        );
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let body = serde_json::json!({"title": "T"});
        let err = required_string(&body, "author").unwrap_err();
        assert!(matches!(err, ResolveError::MissingField("author")));
    }

    #[test]
    fn numeric_field_is_accepted_as_text() {
        let body = serde_json::json!({"year": 1968});
        assert_eq!(required_string(&body, "year").unwrap(), "1968");
    }
}
