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

//! Request lifecycle hooks.
//!
//! Hooks observe (and may rewrite) every admin request the client sends. They
//! run in registration order: [`RequestHooks::before_signing_mut`] just before
//! the request is signed, and [`RequestHooks::after_execute`] once the
//! transport returned, successful or not.

pub use http::Extensions;

use crate::rgw::admin::error::Error;
use crate::rgw::admin::http::Url;
use crate::rgw::admin::multimap_ext::Multimap;
use http::Method;
use reqwest::Response;
use std::fmt::Debug;

#[async_trait::async_trait]
pub trait RequestHooks: Debug {
    fn name(&self) -> &'static str;

    /// Called before the request is signed. Returning an error aborts the request.
    async fn before_signing_mut(
        &self,
        _method: &Method,
        _url: &mut Url,
        _region: &str,
        _headers: &mut Multimap,
        _query_params: &Multimap,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        Ok(())
    }

    async fn after_execute(
        &self,
        _method: &Method,
        _url: &Url,
        _region: &str,
        _headers: &Multimap,
        _query_params: &Multimap,
        _resp: &Result<Response, reqwest::Error>,
        _extensions: &mut Extensions,
    ) {
    }
}
