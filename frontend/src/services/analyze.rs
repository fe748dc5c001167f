//! HTTP service uploading a CSV file to the analysis endpoint.
//!
//! The request goes through [`AnalysisTransport`] so the reply handling can
//! run outside a browser. [`HttpTransport`] is the `gloo-net` implementation
//! used by the application.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::FALLBACK_ERROR_MESSAGE;
use crate::types::{AnalysisResult, AppError, AppResult};

/// File handle that can be attached to the multipart body.
pub trait UploadFile: Clone {
    fn file_name(&self) -> String;
}

impl UploadFile for File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Multipart fields of `POST /analyze`.
#[derive(Clone, Debug)]
pub struct UploadRequest<F> {
    /// Sent as form field `file`
    pub file: F,
    /// Sent verbatim as form field `comment_column`
    pub comment_column: String,
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one upload request and returns the raw reply.
///
/// Implementations make exactly one network call per `send`.
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    type File: UploadFile;

    async fn send(&self, request: UploadRequest<Self::File>) -> AppResult<HttpReply>;
}

/// Browser transport built on `fetch` through `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl AnalysisTransport for HttpTransport {
    type File = File;

    async fn send(&self, request: UploadRequest<File>) -> AppResult<HttpReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename("file", &request.file, &request.file.name())
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
        form_data
            .append_with_str("comment_column", &request.comment_column)
            .map_err(|e| AppError::Network(format!("Failed to append comment column: {:?}", e)))?;

        let response = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(transport_message(e)))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // An unreadable error body falls back to the generic message
            Err(_) if !response.ok() => String::new(),
            Err(e) => return Err(AppError::Network(format!("Failed to read response: {}", e))),
        };

        Ok(HttpReply { status, body })
    }
}

/// Text of a failed `fetch`, without the JS error name.
///
/// `TypeError: Failed to fetch` is shown as `Failed to fetch`.
fn transport_message(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) if !js.message.is_empty() => js.message,
        other => other.to_string(),
    }
}

/// Error payload of a failed analysis.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

/// Message to show for a non-success response body.
///
/// Uses the body's `error` string when present and non-empty, otherwise
/// [`FALLBACK_ERROR_MESSAGE`].
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|error| match error {
            Value::String(message) if !message.is_empty() => Some(message),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Turn a raw reply into an analysis result or an error.
pub fn interpret_reply(reply: HttpReply) -> AppResult<AnalysisResult> {
    if !reply.ok() {
        return Err(AppError::Server {
            status: reply.status,
            message: server_error_message(&reply.body),
        });
    }

    serde_json::from_str(&reply.body).map_err(|e| AppError::Parse(e.to_string()))
}

/// Send one request and interpret its reply.
pub async fn run_analysis<T: AnalysisTransport>(
    transport: &T,
    request: UploadRequest<T::File>,
) -> AppResult<AnalysisResult> {
    let reply = transport.send(request).await?;
    log::debug!("Analysis service replied with status {}", reply.status);
    interpret_reply(reply)
}
