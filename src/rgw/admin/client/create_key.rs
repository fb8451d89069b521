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

use crate::rgw::admin::builders::{CreateKey, CreateKeyBldr};
use crate::rgw::admin::client::RgwAdminClient;
use crate::rgw::admin::types::KeySpec;

impl RgwAdminClient {
    /// Creates a [`CreateKey`] request builder.
    ///
    /// To execute the request, call [`CreateKey::send()`](crate::rgw::admin::types::AdminApi::send),
    /// which returns a [`Result`] containing a [`CreateKeyResponse`](crate::rgw::admin::response::CreateKeyResponse)
    /// listing every key of the user after the change.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ceph_admin::rgw::admin::RgwAdminClient;
    /// use ceph_admin::rgw::admin::creds::StaticProvider;
    /// use ceph_admin::rgw::admin::http::BaseUrl;
    /// use ceph_admin::rgw::admin::types::{AdminApi, KeySpec};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://rgw.local:8080".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("admin-access", "admin-secret", None);
    ///     let client = RgwAdminClient::new(base_url, Some(static_provider), None, None).unwrap();
    ///     let resp = client
    ///         .create_key(KeySpec::for_user("alice"))
    ///         .build().send().await.unwrap();
    ///     println!("alice now has {} keys", resp.keys().len());
    /// }
    /// ```
    pub fn create_key(&self, spec: KeySpec) -> CreateKeyBldr {
        CreateKey::builder().client(self.clone()).spec(spec)
    }
}
