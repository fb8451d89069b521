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
use crate::rgw::admin::response::CreateKeyResponse;
use crate::rgw::admin::types::{AdminApi, AdminRequest, KeySpec, ToAdminRequest, ToQueryParams};
use crate::rgw::admin::utils::insert;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`Create Key`](https://docs.ceph.com/en/latest/radosgw/adminops/#create-key) admin operation.
///
/// Generates a new key pair, or adds the supplied one, to the keyring of a
/// user or subuser. Built by [`RgwAdminClient::create_key`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateKey {
    #[builder(!default)] // force required
    client: RgwAdminClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)]
    spec: KeySpec,
}

pub type CreateKeyBldr = CreateKeyBuilder<((RgwAdminClient,), (), (), (KeySpec,))>;

impl AdminApi for CreateKey {
    type Response = CreateKeyResponse;
}

impl ToAdminRequest for CreateKey {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if !self.spec.has_owner() {
            return Err(ValidationErr::MissingUserId);
        }

        let mut query_params: Multimap = insert(self.extra_query_params, "key");
        query_params.set_multimap(self.spec.to_query_params());

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
