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
use ceph_admin::rgw::admin::response::{AdminErrorCode, CreateKeyResponse, RemoveKeyResponse};
use ceph_admin::rgw::admin::response_traits::HasUid;
use ceph_admin::rgw::admin::types::{AdminApi, KeySpec, KeyType};
use ceph_admin_common::TestContext;
use ceph_admin_common::utils::{rand_access_key, rand_secret_key, rand_uid};

async fn key_count(ctx: &TestContext) -> usize {
    ctx.client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap()
        .info()
        .keys
        .len()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_key_without_owner_is_rejected_locally() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .create_key(KeySpec::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingUserId)
    ));
    assert_eq!(ctx.hook.attempted(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn remove_key_requires_access_key() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .remove_key(KeySpec::for_user(&ctx.admin_uid))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingAccessKey)
    ));

    let err = ctx
        .client
        .remove_key(KeySpec {
            access_key: "AK".into(),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingUserId)
    ));
    assert_eq!(ctx.hook.attempted(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_and_remove_keys() {
    let ctx = TestContext::new_from_env().await;
    let initial = key_count(&ctx).await;
    if ctx.mock.is_some() {
        assert_eq!(initial, 1);
    }

    let resp: CreateKeyResponse = ctx
        .client
        .create_key(KeySpec {
            key_type: Some(KeyType::S3),
            ..KeySpec::for_user(&ctx.admin_uid)
        })
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.uid(), ctx.admin_uid);
    assert_eq!(resp.keys().len(), initial + 1);
    assert!(resp.keys().iter().any(|k| k.access_key == ctx.access_key));
    let generated = resp
        .keys()
        .iter()
        .find(|k| k.access_key != ctx.access_key)
        .map(|k| k.access_key.clone())
        .unwrap();

    let explicit = rand_access_key();
    let resp = ctx
        .client
        .create_key(KeySpec {
            access_key: explicit.clone(),
            secret_key: rand_secret_key(),
            ..KeySpec::for_user(&ctx.admin_uid)
        })
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.keys().len(), initial + 2);
    assert!(resp.keys().iter().any(|k| k.access_key == explicit));
    assert!(resp.keys().iter().all(|k| k.user == ctx.admin_uid));

    for access_key in [&generated, &explicit] {
        let _resp: RemoveKeyResponse = ctx
            .client
            .remove_key(KeySpec {
                access_key: access_key.clone(),
                ..KeySpec::for_user(&ctx.admin_uid)
            })
            .build()
            .send()
            .await
            .unwrap();
    }

    let info = ctx
        .client
        .get_user()
        .uid(&ctx.admin_uid)
        .build()
        .send()
        .await
        .unwrap()
        .into_info();
    assert_eq!(info.keys.len(), initial);
    assert!(info.key(&generated).is_none());
    assert!(info.key(&explicit).is_none());
    assert!(info.key(&ctx.access_key).is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn remove_key_never_sends_secret() {
    let ctx = TestContext::new_from_env().await;
    let Some(mock) = ctx.mock.clone() else {
        return;
    };

    let access_key = rand_access_key();
    ctx.client
        .create_key(KeySpec {
            access_key: access_key.clone(),
            ..KeySpec::for_user(&ctx.admin_uid)
        })
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .remove_key(KeySpec {
            access_key: access_key.clone(),
            secret_key: "must-not-leak".into(),
            ..KeySpec::for_user(&ctx.admin_uid)
        })
        .build()
        .send()
        .await
        .unwrap();

    let requests = mock.requests().await;
    let removal = requests.last().unwrap();
    assert_eq!(removal.method, http::Method::DELETE);
    assert_eq!(removal.path, "/admin/user");
    assert!(removal.has_param("key"));
    assert_eq!(removal.param("access-key"), Some(access_key.as_str()));
    assert!(!removal.has_param("secret-key"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_key_for_unknown_user() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .create_key(KeySpec::for_user(rand_uid()))
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.code(), AdminErrorCode::NoSuchUser);
    assert_eq!(resp.status(), 404);
    assert_eq!(ctx.hook.attempted(), 1);
    assert_eq!(ctx.hook.completed(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_key_for_another_users_access_key() {
    let ctx = TestContext::new_from_env().await;
    let Some(mock) = ctx.mock.clone() else {
        return;
    };
    let other = rand_uid();
    mock.add_user(&other).await;

    let resp = ctx
        .client
        .create_key(KeySpec::for_user(&other))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.keys().len(), 1);
    assert!(resp.keys().iter().all(|k| k.user == other));

    let err = ctx
        .client
        .create_key(KeySpec {
            access_key: ctx.access_key.clone(),
            ..KeySpec::for_user(&other)
        })
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.code(), AdminErrorCode::KeyExists);
    assert_eq!(resp.status(), 409);
}
