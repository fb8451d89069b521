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

use crate::rgw::admin::response_traits::{HasRequestId, HasUid};
use crate::rgw::admin::types::AdminRequest;
use crate::{impl_from_admin_response, impl_has_admin_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the [set_user_quota()](crate::rgw::admin::RgwAdminClient::set_user_quota) API call.
#[derive(Clone, Debug)]
pub struct SetUserQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_admin_response!(SetUserQuotaResponse);
impl_has_admin_fields!(SetUserQuotaResponse);

impl HasUid for SetUserQuotaResponse {}
impl HasRequestId for SetUserQuotaResponse {}
