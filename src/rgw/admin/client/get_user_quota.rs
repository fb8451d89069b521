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

use crate::rgw::admin::builders::{GetUserQuota, GetUserQuotaBldr};
use crate::rgw::admin::client::RgwAdminClient;
use crate::rgw::admin::types::QuotaSpec;

impl RgwAdminClient {
    /// Creates a [`GetUserQuota`] request builder for the user named in `spec.uid`.
    ///
    /// To execute the request, call [`GetUserQuota::send()`](crate::rgw::admin::types::AdminApi::send),
    /// which returns a [`Result`] containing a [`GetUserQuotaResponse`](crate::rgw::admin::response::GetUserQuotaResponse).
    pub fn get_user_quota(&self, spec: QuotaSpec) -> GetUserQuotaBldr {
        GetUserQuota::builder().client(self.clone()).spec(spec)
    }
}
