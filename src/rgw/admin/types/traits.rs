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

//! Core traits for admin request and response handling.

use super::admin_request::AdminRequest;
use crate::rgw::admin::error::{Error, ValidationErr};
use crate::rgw::admin::multimap_ext::Multimap;
use async_trait::async_trait;

/// Serializes a parameter struct into admin API query parameters.
///
/// Unset optional fields and empty strings are left out, so the server
/// applies its own defaults for them.
pub trait ToQueryParams {
    fn to_query_params(&self) -> Multimap;
}

/// Trait for converting a request builder into a concrete admin HTTP request.
///
/// Validation of required fields happens here, so a builder that fails to
/// convert never reaches the network.
pub trait ToAdminRequest: Sized {
    /// Consumes this request builder and returns an [`AdminRequest`].
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into strongly typed admin response objects.
#[async_trait]
pub trait FromAdminResponse: Sized {
    /// Converts the outcome of executing `request` into a typed response.
    ///
    /// Errors from the transport or from a non-success status are passed
    /// through unchanged; body decoding failures become [`Error::Decode`].
    async fn from_admin_response(
        request: AdminRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Trait that defines a common interface for all admin API request builders.
#[async_trait]
pub trait AdminApi: ToAdminRequest {
    /// The response type associated with this request builder.
    type Response: FromAdminResponse;

    /// Sends the admin API request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::Response, Error> {
        let mut req: AdminRequest = self.to_admin_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::Response::from_admin_response(req, resp).await
    }
}
