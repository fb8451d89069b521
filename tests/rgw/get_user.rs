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

use ceph_admin::rgw::admin::error::{Error, ValidationErr};
use ceph_admin::rgw::admin::response::{AdminErrorCode, GetUserResponse};
use ceph_admin::rgw::admin::response_traits::HasUid;
use ceph_admin::rgw::admin::types::AdminApi;
use ceph_admin_common::TestContext;
use ceph_admin_common::utils::{rand_access_key, rand_uid};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_user_by_uid() {
    let ctx = TestContext::new_from_env().await;

    let resp: GetUserResponse = ctx
        .client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.uid(), ctx.admin_uid);

    let info = resp.info();
    assert_eq!(info.user_id, ctx.admin_uid);
    assert!(!info.is_suspended());
    let key = info.key(&ctx.access_key).unwrap();
    assert_eq!(key.user, ctx.admin_uid);
    assert_eq!(key.secret_key, ctx.secret_key);
    assert!(info.caps.iter().any(|c| c.cap_type == "users"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_user_by_access_key() {
    let ctx = TestContext::new_from_env().await;

    let info = ctx
        .client
        .get_user()
        .access_key(&ctx.access_key)
        .build()
        .send()
        .await
        .unwrap()
        .into_info();
    assert_eq!(info.user_id, ctx.admin_uid);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_user_without_identifier() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx.client.get_user().build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingUserId)
    ));
    assert_eq!(ctx.hook.attempted(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_unknown_user() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .get_user()
        .uid(rand_uid())
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.code(), AdminErrorCode::NoSuchUser);
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.method(), &http::Method::GET);

    if ctx.mock.is_some() {
        let err = ctx
            .client
            .get_user()
            .access_key(rand_access_key())
            .build()
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.admin_error_response().unwrap().code(),
            AdminErrorCode::NoSuchUser
        );
    }
}
