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
use crate::rgw::admin::response::GetUserResponse;
use crate::rgw::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`Get User Info`](https://docs.ceph.com/en/latest/radosgw/adminops/#get-user-info) admin operation.
///
/// The user is looked up by `uid`, or by one of its access keys when no
/// `uid` is given.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUser {
    #[builder(!default)] // force required
    client: RgwAdminClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    uid: String,
    #[builder(default, setter(into))]
    access_key: String,
    /// Ask the gateway to include usage statistics.
    #[builder(default, setter(into))]
    stats: Option<bool>,
}

pub type GetUserBldr = GetUserBuilder<((RgwAdminClient,), (), (), (), (), ())>;

impl AdminApi for GetUser {
    type Response = GetUserResponse;
}

impl ToAdminRequest for GetUser {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if self.uid.is_empty() && self.access_key.is_empty() {
            return Err(ValidationErr::MissingUserId);
        }

        let mut lookup = Multimap::new();
        lookup.add_opt("uid", Some(self.uid));
        lookup.add_opt("access-key", Some(self.access_key));
        lookup.add_opt("stats", self.stats);

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.set_multimap(lookup);

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
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
    fn test_requires_uid_or_access_key() {
        let err = client().get_user().build().to_admin_request().unwrap_err();
        assert!(matches!(err, ValidationErr::MissingUserId));
    }

    #[test]
    fn test_lookup_by_access_key() {
        let req = client()
            .get_user()
            .access_key("AK")
            .stats(true)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method(), &Method::GET);
        let q = req.query_params();
        assert!(!q.contains_key("uid"));
        assert_eq!(q.get("access-key").map(String::as_str), Some("AK"));
        assert_eq!(q.get("stats").map(String::as_str), Some("true"));
    }
}
