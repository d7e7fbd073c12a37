use serde::{Deserialize, Serialize};
use std::fmt;

pub mod api;
pub mod session;

/// Default client parameters
pub mod defaults {
    pub const REQUEST_TIMEOUT_MS: u32 = 120_000;
    pub const NAME_MIN_CHARS: usize = 3;
    pub const DESCRIPTION_MIN_CHARS: usize = 10;
}

/// A name/description pair entered by the user. Immutable once submitted;
/// the next submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    pub description: String,
}

/// The mapped output of a successful generation call. At most one result
/// is live per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    pub name: String,
    pub description: String,
    /// Generated article body, markdown text.
    pub content: String,
    pub quality_score: Option<u32>,
    pub iteration_count: Option<u32>,
    pub improvements: Vec<String>,
    /// Wall clock at mapping time, epoch milliseconds.
    pub created_at: f64,
}

/// Request body expected by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGenerateRequest {
    pub article_name: String,
    pub article_description: String,
}

// Field rename only; values pass through verbatim, whitespace included.
// Validation happens upstream in `validate_request`.
impl From<&GenerationRequest> for WireGenerateRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            article_name: request.name.clone(),
            article_description: request.description.clone(),
        }
    }
}

/// Response shape returned by both generation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub article_content: String,
    #[serde(default)]
    pub quality_score: Option<u32>,
    #[serde(default)]
    pub iteration_count: Option<u32>,
    #[serde(default)]
    pub improvements: Vec<String>,
    /// Workflow messages for diagnostics; logged, never rendered.
    #[serde(default)]
    pub messages: Vec<String>,
    pub success: bool,
}

/// Response of `GET /system-info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemInfo {
    pub version: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl ArticleResult {
    /// Map a generation response into the local result shape.
    ///
    /// Name and description come from the request the user submitted (the
    /// server does not echo them). The test endpoint has no originating
    /// request, in which case both default to empty strings.
    pub fn from_response(response: GenerateResponse, request: Option<&GenerationRequest>) -> Self {
        let (name, description) = match request {
            Some(req) => (req.name.clone(), req.description.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            name,
            description,
            content: response.article_content,
            quality_score: response.quality_score,
            iteration_count: response.iteration_count,
            improvements: response.improvements,
            created_at: now_ms(),
        }
    }
}

/// Per-field validation messages; empty means the request is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Validate a candidate request. Pure; no network or state side effects.
pub fn validate_request(request: &GenerationRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let name = request.name.trim();
    if name.is_empty() {
        errors.name = Some("Article name is required".to_string());
    } else if name.chars().count() < defaults::NAME_MIN_CHARS {
        errors.name = Some(format!(
            "Article name must be at least {} characters",
            defaults::NAME_MIN_CHARS
        ));
    }

    let description = request.description.trim();
    if description.is_empty() {
        errors.description = Some("Description is required".to_string());
    } else if description.chars().count() < defaults::DESCRIPTION_MIN_CHARS {
        errors.description = Some(format!(
            "Description must be at least {} characters",
            defaults::DESCRIPTION_MIN_CHARS
        ));
    }

    errors
}

// Transport-level failure of a remote call. Collapsed to a single generic
// message at the controller boundary; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped.
    Request(String),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The payload did not match the expected shape.
    Decode(String),
    /// No response arrived within the configured deadline.
    TimedOut,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(detail) => write!(f, "Request failed: {}", detail),
            ApiError::Status(code) => write!(f, "Server returned status {}", code),
            ApiError::Decode(detail) => write!(f, "Malformed response payload: {}", detail),
            ApiError::TimedOut => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Current wall clock in epoch milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str) -> GenerationRequest {
        GenerationRequest {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn response(content: &str) -> GenerateResponse {
        GenerateResponse {
            article_content: content.to_string(),
            quality_score: Some(80),
            iteration_count: Some(2),
            improvements: vec!["fixed tone".to_string()],
            messages: vec![],
            success: true,
        }
    }

    #[test]
    fn empty_fields_are_required() {
        let errors = validate_request(&request("", "   "));
        assert_eq!(errors.name.as_deref(), Some("Article name is required"));
        assert_eq!(
            errors.description.as_deref(),
            Some("Description is required")
        );
        assert!(!errors.is_empty());
    }

    #[test]
    fn short_name_is_rejected_after_trimming() {
        // Two non-whitespace characters padded to length five.
        let errors = validate_request(&request("  ab ", "a sufficiently long description"));
        assert_eq!(
            errors.name.as_deref(),
            Some("Article name must be at least 3 characters")
        );
        assert!(errors.description.is_none());
    }

    #[test]
    fn short_description_is_rejected() {
        let errors = validate_request(&request("Rust", "too short"));
        assert!(errors.name.is_none());
        assert_eq!(
            errors.description.as_deref(),
            Some("Description must be at least 10 characters")
        );
    }

    #[test]
    fn valid_request_yields_no_errors() {
        let errors = validate_request(&request("Foo", "Bar baz qux quux"));
        assert!(errors.is_empty());
    }

    #[test]
    fn request_mapping_renames_without_trimming() {
        let wire = WireGenerateRequest::from(&request(" Foo ", "Bar baz\n"));
        assert_eq!(wire.article_name, " Foo ");
        assert_eq!(wire.article_description, "Bar baz\n");
    }

    #[test]
    fn request_mapping_serializes_wire_field_names() {
        let wire = WireGenerateRequest::from(&request("Foo", "Bar baz"));
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "article_name": "Foo",
                "article_description": "Bar baz",
            })
        );
    }

    #[test]
    fn response_mapping_carries_request_and_stamps_clock() {
        let before = now_ms();
        let result =
            ArticleResult::from_response(response("# Hi"), Some(&request("Foo", "Bar baz")));
        let after = now_ms();

        assert_eq!(result.name, "Foo");
        assert_eq!(result.description, "Bar baz");
        assert_eq!(result.content, "# Hi");
        assert_eq!(result.quality_score, Some(80));
        assert_eq!(result.iteration_count, Some(2));
        assert_eq!(result.improvements, vec!["fixed tone".to_string()]);
        assert!(result.created_at >= before && result.created_at <= after);
    }

    #[test]
    fn response_mapping_without_request_defaults_to_empty_fields() {
        let result = ArticleResult::from_response(response("body"), None);
        assert_eq!(result.name, "");
        assert_eq!(result.description, "");
        assert_eq!(result.content, "body");
    }

    #[test]
    fn response_decoding_tolerates_missing_metadata() {
        let raw = r##"{"article_content": "# Hi", "success": true}"##;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.article_content, "# Hi");
        assert_eq!(response.quality_score, None);
        assert_eq!(response.iteration_count, None);
        assert!(response.improvements.is_empty());
        assert!(response.messages.is_empty());
    }

    #[test]
    fn system_info_decodes_camel_case_fields() {
        let raw = r#"{
            "version": "1.0.0",
            "modelName": "claude-v2",
            "maxTokens": 4096,
            "features": ["fetch_readme"]
        }"#;
        let info: SystemInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.model_name, "claude-v2");
        assert_eq!(info.max_tokens, 4096);
        assert_eq!(info.features, vec!["fetch_readme".to_string()]);
    }
}
