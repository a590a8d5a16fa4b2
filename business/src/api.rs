//! Uniform request/response contract over [`crate::http`].
//!
//! Every backend response is normalized into an [`Envelope`]
//! (`{ success, data, message }`). Non-2xx statuses become [`ApiError::Status`],
//! transport failures become [`ApiError::Unreachable`], and a 2xx body that is not
//! JSON is wrapped as `{ success: true, data: <text> }`.
//!
//! A 2xx envelope carrying `success: false` is returned as-is; callers decide what to
//! do with it, usually via [`Envelope::into_data`] / [`Envelope::into_message`].

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{Client, HttpError, Method, Response};

/// Message shown when the backend cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "Cannot reach the server, check the network connection or whether the server is running";

/// Normalized API failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// Non-2xx response. `message` is the backend's `message` field or `HTTP {status}: {text}`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx envelope with `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        if err.is_connect() {
            Self::Unreachable
        } else {
            Self::Transport(err.message)
        }
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

/// The `{ success, data, message }` wrapper all endpoints answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Envelope used for successful non-JSON bodies.
    pub fn from_text(text: String) -> Self {
        Self {
            success: true,
            data: Some(Value::String(text)),
            message: None,
        }
    }

    fn rejection(self) -> ApiError {
        ApiError::Rejected {
            message: self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Request was rejected".to_owned()),
        }
    }

    /// Decode `data` into `T`, or turn `success: false` into [`ApiError::Rejected`].
    pub fn into_data<T: DeserializeOwned>(self) -> ApiResult<T> {
        if !self.success {
            return Err(self.rejection());
        }
        let data = self.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For mutations: keep only the backend message, or turn `success: false` into an error.
    pub fn into_message(self) -> ApiResult<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self.rejection())
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn status_error(response: &Response) -> ApiError {
    let fallback = format!("HTTP {}: {}", response.status, response.status_text);
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);

    ApiError::Status {
        status: response.status,
        message,
    }
}

/// Client bound to one backend origin.
///
/// An empty base URL keeps paths relative, which is what the web build wants (same origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send one request and normalize the outcome.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<Envelope> {
        let url = self.url(path);
        debug!("{} {url}", method.as_str());

        let mut request = Client::request(method, &url).header("content-type", "application/json");
        if let Some(body) = body {
            request = request
                .json(&body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
        }

        let response = request.send().await.map_err(|err| {
            if err.is_connect() {
                error!("API request to {url} failed, server unreachable: {err}");
            } else {
                error!("API request to {url} failed: {err}");
            }
            ApiError::from(err)
        })?;

        if !response.is_success() {
            let err = status_error(&response);
            error!("API request to {url} returned {}: {err}", response.status);
            return Err(err);
        }

        if response.is_json() {
            response
                .json::<Envelope>()
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let text = response
                .text()
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Envelope::from_text(text))
        }
    }

    pub async fn get(&self, path: &str) -> ApiResult<Envelope> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Envelope> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Envelope> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Envelope> {
        self.request(Method::Delete, path, None).await
    }
}
