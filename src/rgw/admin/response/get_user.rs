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
use crate::rgw::admin::response_traits::{HasRequestId, HasUid};
use crate::rgw::admin::types::{AdminRequest, FromAdminResponse, UserInfo};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::mem;

/// Response of the [get_user()](crate::rgw::admin::RgwAdminClient::get_user) API call.
#[derive(Clone, Debug)]
pub struct GetUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,

    info: UserInfo,
}
impl_has_admin_fields!(GetUserResponse);

impl HasRequestId for GetUserResponse {}
impl HasUid for GetUserResponse {}

#[async_trait]
impl FromAdminResponse for GetUserResponse {
    async fn from_admin_response(
        request: AdminRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReadBody)?;
        let info: UserInfo = decode_json(&body, "getting user info")?;

        Ok(Self {
            request,
            headers,
            body,
            info,
        })
    }
}

impl GetUserResponse {
    pub fn info(&self) -> &UserInfo {
        &self.info
    }

    pub fn into_info(self) -> UserInfo {
        self.info
    }
}
