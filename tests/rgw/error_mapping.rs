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

use ceph_admin::rgw::admin::error::Error;
use ceph_admin::rgw::admin::response::AdminErrorCode;
use ceph_admin::rgw::admin::types::AdminApi;
use ceph_admin_common::TestContext;
use ceph_admin_common::utils::{rand_access_key, rand_secret_key};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wrong_secret_is_rejected() {
    let ctx = TestContext::new_from_env().await;
    let client = ctx.client_with_keys(&ctx.access_key, &rand_secret_key());

    let err = client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.code(), AdminErrorCode::SignatureDoesNotMatch);
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.resource(), "/admin/user");
    assert!(
        err.to_string()
            .contains("failed with status 403: code SignatureDoesNotMatch")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unknown_access_key_is_rejected() {
    let ctx = TestContext::new_from_env().await;
    let client = ctx.client_with_keys(&rand_access_key(), &rand_secret_key());

    let err = client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AdminServer(_)));
    assert_eq!(
        err.admin_error_response().unwrap().code(),
        AdminErrorCode::InvalidAccessKeyId
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn mock_error_document_fields() {
    let ctx = TestContext::new_from_env().await;
    if ctx.mock.is_none() {
        return;
    }
    let client = ctx.client_with_keys(&ctx.access_key, &rand_secret_key());

    let err = client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.request_id(), "tx00000mock");
    assert_eq!(resp.host_id(), "mock-default");
}
