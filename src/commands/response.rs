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

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

const EINVAL: i32 = -22;
const ENOTSUP: i32 = -95;

/// Status suffix Ceph appends to calls scheduled for removal.
const DEPRECATED_SUFFIX: &str = "call is deprecated and will be removed in a future release";

/// Error half of a command [`Response`].
#[derive(Clone, Debug, Error)]
pub enum ResponseError {
    /// The command was expected to return no status text but did.
    #[error("response status not empty")]
    StatusNotEmpty,

    /// The command was expected to return no body but did.
    #[error("response body not empty")]
    BodyNotEmpty,

    /// The command failed with a negative errno.
    #[error("ret={0}")]
    Errno(i32),

    #[error("failed to decode response body: {0}")]
    Json(Arc<serde_json::Error>),

    #[error("{0}")]
    Other(String),
}

impl ResponseError {
    /// Returns the errno when the command itself failed.
    pub fn errno(&self) -> Option<i32> {
        match self {
            ResponseError::Errno(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::Json(Arc::new(err))
    }
}

/// Outcome of a Ceph command: raw body, status text and an optional error.
#[derive(Clone, Debug, Default)]
pub struct Response {
    body: Vec<u8>,
    status: String,
    err: Option<ResponseError>,
}

impl Response {
    pub fn new(
        body: impl Into<Vec<u8>>,
        status: impl Into<String>,
        err: Option<ResponseError>,
    ) -> Self {
        Self {
            body: body.into(),
            status: status.into(),
            err,
        }
    }

    fn with_error(self, err: ResponseError) -> Self {
        Self {
            err: Some(err),
            ..self
        }
    }

    /// Returns `true` when the command succeeded.
    pub fn ok(&self) -> bool {
        self.err.is_none()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn error(&self) -> Option<&ResponseError> {
        self.err.as_ref()
    }

    /// Fails a successful response that carries a status text.
    pub fn no_status(self) -> Self {
        if self.ok() && !self.status.is_empty() {
            return self.with_error(ResponseError::StatusNotEmpty);
        }
        self
    }

    /// Fails a successful response that carries a body.
    pub fn no_body(self) -> Self {
        if self.ok() && !self.body.is_empty() {
            return self.with_error(ResponseError::BodyNotEmpty);
        }
        self
    }

    /// Fails a successful response that carries a status or a body.
    pub fn no_data(self) -> Self {
        self.no_status().no_body()
    }

    /// Like [`Response::no_body`], but an empty JSON object or array counts
    /// as no body.
    pub fn empty_body(self) -> Self {
        if !self.ok() || self.body.is_empty() {
            return self;
        }
        match serde_json::from_slice::<serde_json::Value>(&self.body) {
            Err(e) => self.with_error(e.into()),
            Ok(serde_json::Value::Object(m)) if m.is_empty() => self,
            Ok(serde_json::Value::Array(a)) if a.is_empty() => self,
            Ok(_) => self.with_error(ResponseError::BodyNotEmpty),
        }
    }

    /// Clears the status when it starts with `prefix`.
    pub fn filter_prefix(self, prefix: &str) -> Self {
        if self.ok() && self.status.starts_with(prefix) {
            return Self {
                status: String::new(),
                ..self
            };
        }
        self
    }

    /// Clears the status when it ends with `suffix`.
    pub fn filter_suffix(self, suffix: &str) -> Self {
        if self.ok() && self.status.ends_with(suffix) {
            return Self {
                status: String::new(),
                ..self
            };
        }
        self
    }

    /// Clears the body when it starts with `prefix`.
    pub fn filter_body_prefix(self, prefix: &str) -> Self {
        if self.ok() && self.body.starts_with(prefix.as_bytes()) {
            return Self {
                body: Vec::new(),
                ..self
            };
        }
        self
    }

    /// Clears a status that only announces the call is deprecated.
    pub fn filter_deprecated(self) -> Self {
        self.filter_suffix(DEPRECATED_SUFFIX)
    }

    /// Decodes the JSON body. A failed or undecodable response is returned
    /// as the error.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, Response> {
        if !self.ok() {
            return Err(self.clone());
        }
        serde_json::from_slice(&self.body).map_err(|e| Response {
            body: self.body.clone(),
            status: String::new(),
            err: Some(e.into()),
        })
    }

    /// Finishes a chain of checks.
    pub fn end(self) -> Result<(), CommandError> {
        let Some(err) = &self.err else {
            return Ok(());
        };
        if is_not_implemented(err, &self.status) {
            return Err(NotImplementedError { response: self }.into());
        }
        Err(CommandError::Failed(self))
    }
}

fn is_not_implemented(err: &ResponseError, status: &str) -> bool {
    match err.errno() {
        Some(ENOTSUP) => true,
        Some(EINVAL) => {
            let status = status.to_lowercase();
            status.contains("unknown command") || status.contains("unrecognized command")
        }
        _ => false,
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.err {
            None => f.write_str(&self.status),
            Some(e) if self.status.is_empty() => write!(f, "{e}"),
            Some(e) => write!(f, "{e}: {:?}", self.status),
        }
    }
}

impl std::error::Error for Response {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.err
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// The server does not implement the command, typically because it runs an
/// older Ceph release.
#[derive(Clone, Debug, Error)]
#[error("API call not implemented server-side: {response}")]
pub struct NotImplementedError {
    response: Response,
}

impl NotImplementedError {
    pub fn response(&self) -> &Response {
        &self.response
    }
}

/// Error returned by [`Response::end`].
#[derive(Clone, Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    #[error(transparent)]
    Failed(Response),
}
