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
use crate::rgw::admin::types::{AdminRequest, FromAdminResponse, QuotaSpec};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::mem;

/// Response of the [get_user_quota()](crate::rgw::admin::RgwAdminClient::get_user_quota) API call.
#[derive(Clone, Debug)]
pub struct GetUserQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,

    quota: QuotaSpec,
}
impl_has_admin_fields!(GetUserQuotaResponse);

impl HasUid for GetUserQuotaResponse {}

#[async_trait]
impl FromAdminResponse for GetUserQuotaResponse {
    async fn from_admin_response(
        request: AdminRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReadBody)?;
        let mut quota: QuotaSpec = decode_json(&body, "getting user quota")?;
        // the document does not echo the user back
        if quota.uid.is_empty() {
            quota.uid = request
                .query_params()
                .get("uid")
                .cloned()
                .unwrap_or_default();
        }
        quota.quota_type = Some("user".into());

        Ok(Self {
            request,
            headers,
            body,
            quota,
        })
    }
}

impl GetUserQuotaResponse {
    /// The user quota, with `uid` and `quota_type` filled in.
    pub fn quota(&self) -> &QuotaSpec {
        &self.quota
    }
}
