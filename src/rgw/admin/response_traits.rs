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

//! Traits giving uniform access to the raw parts of admin responses.

use crate::rgw::admin::types::AdminRequest;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromAdminResponse` trait for responses that keep the raw
/// body without decoding it.
macro_rules! impl_from_admin_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::rgw::admin::types::FromAdminResponse for $ty {
                async fn from_admin_response(
                    request: $crate::rgw::admin::types::AdminRequest,
                    response: Result<reqwest::Response, $crate::rgw::admin::error::Error>,
                ) -> Result<Self, $crate::rgw::admin::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::rgw::admin::error::NetworkError::ReadBody)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasAdminFields` trait for the specified types.
macro_rules! impl_has_admin_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::rgw::admin::response_traits::HasAdminFields for $ty {
                #[inline]
                fn request(&self) -> &$crate::rgw::admin::types::AdminRequest {
                    &self.request
                }

                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasAdminFields {
    /// The request that was sent to the admin API.
    fn request(&self) -> &AdminRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the user the request was about, taken from the `uid` query parameter.
pub trait HasUid: HasAdminFields {
    #[inline]
    fn uid(&self) -> &str {
        self.request()
            .query_params()
            .get("uid")
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Returns the bucket the request was about.
pub trait HasBucket: HasAdminFields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request()
            .query_params()
            .get("bucket")
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Returns the request id the gateway assigned (`x-amz-request-id`).
pub trait HasRequestId: HasAdminFields {
    #[inline]
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(crate::rgw::admin::header_constants::X_AMZ_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}
