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

use crate::rgw::admin::client::RgwAdminClient;
use crate::rgw::admin::error::ValidationErr;
use crate::rgw::admin::multimap_ext::{Multimap, MultimapExt};
use crate::rgw::admin::response::RemoveKeyResponse;
use crate::rgw::admin::types::{AdminApi, AdminRequest, KeySpec, ToAdminRequest, ToQueryParams};
use crate::rgw::admin::utils::insert;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`Remove Key`](https://docs.ceph.com/en/latest/radosgw/adminops/#remove-key) admin operation.
///
/// Removes an existing key from a user or subuser. The `secret_key` of the
/// spec is not sent. Built by [`RgwAdminClient::remove_key`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveKey {
    #[builder(!default)] // force required
    client: RgwAdminClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)]
    spec: KeySpec,
}

pub type RemoveKeyBldr = RemoveKeyBuilder<((RgwAdminClient,), (), (), (KeySpec,))>;

impl AdminApi for RemoveKey {
    type Response = RemoveKeyResponse;
}

impl ToAdminRequest for RemoveKey {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        let mut spec = self.spec;
        if !spec.has_owner() {
            return Err(ValidationErr::MissingUserId);
        }
        // S3 keys of a user are addressed by access key
        if !spec.uid.is_empty() && spec.access_key.is_empty() {
            return Err(ValidationErr::MissingAccessKey);
        }
        spec.secret_key.clear();

        let mut query_params: Multimap = insert(self.extra_query_params, "key");
        query_params.set_multimap(spec.to_query_params());

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/user")
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
