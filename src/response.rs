use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GraphResponse is the decoded JSON object returned by a publishing call.
/// It is kept opaque; accessors cover the fields callers usually need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphResponse {
    fields: Map<String, Value>,
}

impl GraphResponse {
    /// Wrap an already decoded JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        GraphResponse { fields }
    }

    /// Identifier of the created object (photo, video or post).
    /// Numeric ids are returned as strings.
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Identifier of the feed story, returned by some photo uploads
    pub fn post_id(&self) -> Option<String> {
        self.get_string("post_id")
    }

    /// Get a value by a slash-separated path.
    /// For example, "images/0/source" reads the first image's source.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('/').filter(|s| !s.is_empty());

        let mut current = self.fields.get(parts.next()?)?;

        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Take the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl TryFrom<Value> for GraphResponse {
    type Error = Value;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(GraphResponse { fields }),
            other => Err(other),
        }
    }
}

/// Error envelope the Graph API returns on failure
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    pub error: GraphErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorDetail {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<i64>,
    pub error_subcode: Option<i64>,
    pub fbtrace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_id() {
        let response: GraphResponse =
            serde_json::from_str(r#"{"id": "111", "post_id": "42_111"}"#).unwrap();
        assert_eq!(response.id(), Some("111".to_string()));
        assert_eq!(response.post_id(), Some("42_111".to_string()));
    }

    #[test]
    fn test_response_numeric_id() {
        let response: GraphResponse = serde_json::from_str(r#"{"id": 987}"#).unwrap();
        assert_eq!(response.id(), Some("987".to_string()));
    }

    #[test]
    fn test_response_missing_id() {
        let response: GraphResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.id(), None);

        let empty: GraphResponse = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert_eq!(empty.id(), None);
    }

    #[test]
    fn test_response_get_path() {
        let response: GraphResponse = serde_json::from_str(
            r#"{"images": [{"source": "https://cdn.example/a.jpg", "width": 720}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.get_string("images/0/source"),
            Some("https://cdn.example/a.jpg".to_string())
        );
        assert_eq!(response.get("images/0/width"), Some(&Value::from(720)));
        assert_eq!(response.get("images/1/source"), None);
        assert_eq!(response.get(""), None);
    }

    #[test]
    fn test_response_rejects_non_object() {
        let value = serde_json::json!(["id"]);
        assert!(GraphResponse::try_from(value).is_err());
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{
            "error": {
                "message": "Invalid OAuth access token.",
                "type": "OAuthException",
                "code": 190,
                "fbtrace_id": "AbCdEf"
            }
        }"#;

        let body: GraphErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, Some(190));
        assert_eq!(body.error.error_type.as_deref(), Some("OAuthException"));
        assert_eq!(body.error.error_subcode, None);
    }
}
