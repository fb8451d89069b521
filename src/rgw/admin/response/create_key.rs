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

use crate::impl_has_admin_fields;
use crate::rgw::admin::error::{Error, NetworkError};
use crate::rgw::admin::response::decode_json;
use crate::rgw::admin::response_traits::HasUid;
use crate::rgw::admin::types::{AdminRequest, FromAdminResponse, UserKey};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::mem;

/// Response of the [create_key()](crate::rgw::admin::RgwAdminClient::create_key) API call.
///
/// Holds every S3 key of the user after the new one was added.
#[derive(Clone, Debug)]
pub struct CreateKeyResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,

    keys: Vec<UserKey>,
}
impl_has_admin_fields!(CreateKeyResponse);

impl HasUid for CreateKeyResponse {}

#[async_trait]
impl FromAdminResponse for CreateKeyResponse {
    async fn from_admin_response(
        request: AdminRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReadBody)?;
        let keys: Vec<UserKey> = decode_json(&body, "creating key")?;

        Ok(Self {
            request,
            headers,
            body,
            keys,
        })
    }
}

impl CreateKeyResponse {
    pub fn keys(&self) -> &[UserKey] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<UserKey> {
        self.keys
    }
}
