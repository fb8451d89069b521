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
use crate::rgw::admin::response::SetIndividualBucketQuotaResponse;
use crate::rgw::admin::types::{
    AdminApi, AdminRequest, IndividualBucketQuotaSpec, ToAdminRequest, ToQueryParams,
};
use crate::rgw::admin::utils::insert;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`Set Quota for an Individual Bucket`](https://docs.ceph.com/en/latest/radosgw/adminops/#set-quota-for-an-individual-bucket)
/// admin operation.
///
/// The quota type is always sent as `bucket`, whatever the spec holds.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetIndividualBucketQuota {
    #[builder(!default)] // force required
    client: RgwAdminClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)]
    spec: IndividualBucketQuotaSpec,
}

pub type SetIndividualBucketQuotaBldr =
    SetIndividualBucketQuotaBuilder<((RgwAdminClient,), (), (), (IndividualBucketQuotaSpec,))>;

impl AdminApi for SetIndividualBucketQuota {
    type Response = SetIndividualBucketQuotaResponse;
}

impl ToAdminRequest for SetIndividualBucketQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        let mut spec = self.spec;
        spec.quota_type = Some("bucket".into());

        if spec.uid.is_empty() {
            return Err(ValidationErr::MissingUserId);
        }
        if spec.bucket.is_empty() {
            return Err(ValidationErr::MissingBucket);
        }

        let mut query_params: Multimap = insert(self.extra_query_params, "quota");
        query_params.set_multimap(spec.to_query_params());

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/bucket")
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
