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

//! AdminRequest struct and implementation for executing HTTP requests.

use crate::rgw::admin::client::RgwAdminClient;
use crate::rgw::admin::error::Error;
use crate::rgw::admin::multimap_ext::Multimap;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic admin request: a method, a resource path below the admin entry
/// point and the query parameters carrying the operation's arguments.
pub struct AdminRequest {
    #[builder(!default)] // force required
    pub(crate) client: RgwAdminClient,

    #[builder(!default)] // force required
    method: Method,

    /// Resource path relative to the admin entry point, e.g. `/user`.
    #[builder(setter(into))]
    path: String,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,
}

impl AdminRequest {
    /// Execute the request, returning the response. Only used in [`AdminApi::send()`](crate::rgw::admin::types::AdminApi::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                &self.path,
                &mut self.headers,
                &self.query_params,
            )
            .await
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }
}
