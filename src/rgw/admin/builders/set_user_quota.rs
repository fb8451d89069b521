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
use crate::rgw::admin::response::SetUserQuotaResponse;
use crate::rgw::admin::types::{AdminApi, AdminRequest, QuotaSpec, ToAdminRequest, ToQueryParams};
use crate::rgw::admin::utils::insert;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`Set User Quota`](https://docs.ceph.com/en/latest/radosgw/adminops/#set-user-quota) admin operation.
///
/// Only the fields set on the spec are changed on the gateway.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetUserQuota {
    #[builder(!default)] // force required
    client: RgwAdminClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)]
    spec: QuotaSpec,
}

pub type SetUserQuotaBldr = SetUserQuotaBuilder<((RgwAdminClient,), (), (), (QuotaSpec,))>;

impl AdminApi for SetUserQuota {
    type Response = SetUserQuotaResponse;
}

impl ToAdminRequest for SetUserQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        let mut spec = self.spec;
        spec.quota_type = Some("user".into());

        if spec.uid.is_empty() {
            return Err(ValidationErr::MissingUserId);
        }

        let mut query_params: Multimap = insert(self.extra_query_params, "quota");
        query_params.set_multimap(spec.to_query_params());

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgw::admin::creds::StaticProvider;
    use crate::rgw::admin::http::BaseUrl;

    fn client() -> RgwAdminClient {
        let base_url: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
        RgwAdminClient::new(base_url, Some(StaticProvider::new("a", "s", None)), None, None)
            .unwrap()
    }

    #[test]
    fn test_missing_uid() {
        let err = client()
            .set_user_quota(QuotaSpec::default())
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingUserId));
    }

    #[test]
    fn test_quota_type_is_user() {
        let spec = QuotaSpec {
            uid: "alice".into(),
            quota_type: Some("bucket".into()),
            enabled: Some(true),
            max_objects: Some(100),
            ..Default::default()
        };
        let req = client()
            .set_user_quota(spec)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method(), &Method::PUT);
        let q = req.query_params();
        assert_eq!(q.get("quota-type").map(String::as_str), Some("user"));
        assert_eq!(q.get("max-objects").map(String::as_str), Some("100"));
        assert!(q.contains_key("quota"));
    }

    #[test]
    fn test_extra_params_cannot_override_quota_type() {
        let mut extra = Multimap::new();
        extra.add("quota-type", "bucket");
        let spec = QuotaSpec {
            uid: "alice".into(),
            ..Default::default()
        };
        let req = client()
            .set_user_quota(spec)
            .extra_query_params(extra)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(
            req.query_params().get_vec("quota-type"),
            Some(&vec!["user".to_string()])
        );
    }
}
