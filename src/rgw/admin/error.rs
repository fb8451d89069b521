// Ceph Admin Rust Library for RADOS Gateway and CephFS administration
// Copyright 2026 The ceph-admin Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for RGW admin operations

use crate::rgw::admin::response::AdminErrorResponse;
use thiserror::Error;

/// Errors detected on the client side, before any request leaves the process.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("missing user ID")]
    MissingUserId,

    #[error("missing user access key")]
    MissingAccessKey,

    #[error("missing bucket")]
    MissingBucket,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ValidationErr {
    fn from(err: reqwest::Error) -> Self {
        ValidationErr::HttpClient(err)
    }
}

/// Local I/O failures, e.g. while loading a CA bundle.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Transport failures raised by the underlying HTTP client.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    ReqwestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

/// Non-success responses returned by the admin endpoint.
#[derive(Error, Debug)]
pub enum AdminServerError {
    #[error("{0}")]
    ErrorResponse(Box<AdminErrorResponse>),
}

/// A response body that does not match the expected JSON shape.
///
/// The raw body is kept for diagnostics.
#[derive(Error, Debug)]
#[error("failed to unmarshal radosgw http response while {context}. {body}. {source}")]
pub struct DecodeErr {
    pub context: String,
    pub body: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeErr {
    pub fn new(context: impl Into<String>, body: &[u8], source: serde_json::Error) -> Self {
        Self {
            context: context.into(),
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }
}

/// Top-level error returned by every admin operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("admin server error: {0}")]
    AdminServer(#[from] AdminServerError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeErr),
}

impl Error {
    /// Returns the server response if this error came from a non-success status.
    pub fn admin_error_response(&self) -> Option<&AdminErrorResponse> {
        match self {
            Error::AdminServer(AdminServerError::ErrorResponse(resp)) => Some(resp),
            _ => None,
        }
    }

    /// Returns `true` for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationErr::MissingUserId.to_string(), "missing user ID");
        assert_eq!(
            ValidationErr::MissingAccessKey.to_string(),
            "missing user access key"
        );
        assert_eq!(ValidationErr::MissingBucket.to_string(), "missing bucket");
    }

    #[test]
    fn test_validation_wraps_into_error() {
        let err: Error = ValidationErr::MissingBucket.into();
        assert!(err.is_validation());
        assert!(err.admin_error_response().is_none());
        assert_eq!(err.to_string(), "validation error: missing bucket");
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = DecodeErr::new("parsing keys", b"not json", source);
        assert_eq!(err.body, "not json");
        assert!(
            err.to_string()
                .starts_with("failed to unmarshal radosgw http response while parsing keys. not json.")
        );
    }
}
