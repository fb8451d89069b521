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

pub use crate::commands::{CommandError, NotImplementedError, Response, ResponseError};

/// Alias of [`ResponseError::StatusNotEmpty`], the error a `no_status` check
/// yields.
pub const ERR_STATUS_NOT_EMPTY: ResponseError = ResponseError::StatusNotEmpty;

/// Alias of [`ResponseError::BodyNotEmpty`], the error a `no_body` check
/// yields.
pub const ERR_BODY_NOT_EMPTY: ResponseError = ResponseError::BodyNotEmpty;

/// Wraps the raw result of a command. Entry point for in-crate command
/// callers building a `Response` from a mgr/mon reply.
#[allow(dead_code)]
pub(crate) fn new_response(
    body: impl Into<Vec<u8>>,
    status: impl Into<String>,
    err: Option<ResponseError>,
) -> Response {
    Response::new(body, status, err)
}
