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

use crate::counting_hook::CountingHook;
use crate::mock_rgw::MockRgw;
use crate::utils::{rand_access_key, rand_secret_key};
use ceph_admin::rgw::admin::client::DEFAULT_REGION;
use ceph_admin::rgw::admin::creds::StaticProvider;
use ceph_admin::rgw::admin::http::BaseUrl;
use ceph_admin::rgw::admin::{RgwAdminClient, RgwAdminClientBuilder};
use std::sync::Arc;

const DEFAULT_ADMIN_UID: &str = "admin";
const DEFAULT_TEST_BUCKET: &str = "rgw-admin-test";

/// Everything an integration test needs to talk to a gateway.
///
/// When `RGW_ENDPOINT`, `RGW_ACCESS_KEY` and `RGW_SECRET_KEY` are set the
/// tests run against that gateway; the credentials must belong to
/// `RGW_ADMIN_UID` and `RGW_TEST_BUCKET` must already exist and be owned by
/// that user. Otherwise an in-process mock is started.
#[derive(Clone)]
pub struct TestContext {
    pub client: RgwAdminClient,
    pub base_url: BaseUrl,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub admin_uid: String,
    pub test_bucket: String,
    pub ignore_cert_check: bool,
    pub hook: Arc<CountingHook>,
    pub mock: Option<MockRgw>,
}

impl TestContext {
    pub async fn new_from_env() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let admin_uid =
            std::env::var("RGW_ADMIN_UID").unwrap_or(DEFAULT_ADMIN_UID.to_string());
        let test_bucket =
            std::env::var("RGW_TEST_BUCKET").unwrap_or(DEFAULT_TEST_BUCKET.to_string());
        let region = std::env::var("RGW_REGION").unwrap_or(DEFAULT_REGION.to_string());
        let ignore_cert_check: bool = std::env::var("RGW_IGNORE_CERT_CHECK")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        let live = (
            std::env::var("RGW_ENDPOINT"),
            std::env::var("RGW_ACCESS_KEY"),
            std::env::var("RGW_SECRET_KEY"),
        );
        let (endpoint, access_key, secret_key, mock) = match live {
            (Ok(endpoint), Ok(access_key), Ok(secret_key)) => {
                log::debug!("RGW_ENDPOINT={endpoint}");
                log::debug!("RGW_ACCESS_KEY={access_key}");
                log::debug!("RGW_SECRET_KEY=*****");
                (endpoint, access_key, secret_key, None)
            }
            _ => {
                let access_key = rand_access_key();
                let secret_key = rand_secret_key();
                let mock = MockRgw::start(&admin_uid, &access_key, &secret_key, &test_bucket)
                    .await
                    .unwrap();
                log::debug!("using mock rgw at {}", mock.endpoint());
                (mock.endpoint(), access_key, secret_key, Some(mock))
            }
        };
        log::debug!("RGW_ADMIN_UID={admin_uid}");
        log::debug!("RGW_TEST_BUCKET={test_bucket}");
        log::debug!("RGW_REGION={region}");

        let base_url: BaseUrl = endpoint.parse().unwrap();
        let hook = Arc::new(CountingHook::default());
        let client = RgwAdminClientBuilder::new(base_url.clone())
            .provider(Some(StaticProvider::new(&access_key, &secret_key, None)))
            .region(region.clone())
            .ignore_cert_check(Some(ignore_cert_check))
            .hook(hook.clone())
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            region,
            access_key,
            secret_key,
            admin_uid,
            test_bucket,
            ignore_cert_check,
            hook,
            mock,
        }
    }

    /// Returns a client for the same gateway signing with the given key pair.
    pub fn client_with_keys(&self, access_key: &str, secret_key: &str) -> RgwAdminClient {
        RgwAdminClientBuilder::new(self.base_url.clone())
            .provider(Some(StaticProvider::new(access_key, secret_key, None)))
            .region(self.region.clone())
            .ignore_cert_check(Some(self.ignore_cert_check))
            .build()
            .unwrap()
    }
}
