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

use ceph_admin::rgw::admin::client::hooks::{Extensions, RequestHooks};
use ceph_admin::rgw::admin::error::Error;
use ceph_admin::rgw::admin::http::Url;
use ceph_admin::rgw::admin::multimap_ext::Multimap;
use http::Method;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts the requests the client tried to send and the ones that came back.
#[derive(Debug, Default)]
pub struct CountingHook {
    attempted: AtomicUsize,
    completed: AtomicUsize,
}

impl CountingHook {
    pub fn attempted(&self) -> usize {
        self.attempted.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RequestHooks for CountingHook {
    fn name(&self) -> &'static str {
        "counting-hook"
    }

    async fn before_signing_mut(
        &self,
        method: &Method,
        url: &mut Url,
        _region: &str,
        _headers: &mut Multimap,
        _query_params: &Multimap,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        log::trace!("sending {method} {}", url.path);
        self.attempted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn after_execute(
        &self,
        _method: &Method,
        _url: &Url,
        _region: &str,
        _headers: &Multimap,
        _query_params: &Multimap,
        _resp: &Result<reqwest::Response, reqwest::Error>,
        _extensions: &mut Extensions,
    ) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}
