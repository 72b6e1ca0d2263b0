use crate::config::EnvConfig;
use crate::models::{LikeRejection, LikeResponse};

/// Marks a request as script-originated so the backend answers with JSON instead of a page.
pub(crate) const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub(crate) const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The backend answered with a non-success status.
    Rejected,
    Network,
    Parse,
}

#[derive(Clone, Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub struct LikeClient {
    pub(crate) base_url: String,
}

impl LikeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the configured backend; an empty `api_url` targets the page's own origin.
    pub fn from_config(config: &EnvConfig) -> Self {
        if !config.api_url.trim().is_empty() {
            return Self::new(config.api_url.clone());
        }

        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    pub(crate) fn like_url(&self, book_id: &str) -> String {
        format!(
            "{}/like-book/{}",
            self.base_url,
            urlencoding::encode(book_id)
        )
    }

    /// Fire a single like for `book_id`. No retry, no timeout.
    pub async fn like_book(&self, book_id: &str) -> ApiResult<LikeResponse> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.like_url(book_id))
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::network)?;

        if status.is_success() {
            parse_like_body(&body)
        } else {
            Err(rejection_error(status.as_u16(), &body))
        }
    }
}

/// Success bodies are optional; an empty body is a like without a count.
pub(crate) fn parse_like_body(body: &str) -> ApiResult<LikeResponse> {
    if body.trim().is_empty() {
        return Ok(LikeResponse::default());
    }
    serde_json::from_str(body).map_err(ApiError::parse)
}

/// A JSON refusal locks the button out; its `error` text is shown when present.
///
/// A non-JSON error body (proxy or server error page) is not a refusal and stays retryable.
pub(crate) fn rejection_error(status: u16, body: &str) -> ApiError {
    let data: serde_json::Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => return ApiError::parse(format!("Request failed ({status}): {e}")),
    };

    match serde_json::from_value::<LikeRejection>(data) {
        Ok(rejection) => ApiError::rejected(rejection.error),
        Err(_) => ApiError::rejected(format!("Request failed ({status})")),
    }
}
