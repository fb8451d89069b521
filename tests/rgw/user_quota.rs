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
use ceph_admin::rgw::admin::response::{GetUserQuotaResponse, SetUserQuotaResponse};
use ceph_admin::rgw::admin::response_traits::{HasAdminFields, HasUid};
use ceph_admin::rgw::admin::types::{AdminApi, QuotaSpec};
use ceph_admin_common::TestContext;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn user_quota_requires_uid() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .set_user_quota(QuotaSpec::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingUserId)
    ));

    let err = ctx
        .client
        .get_user_quota(QuotaSpec::default())
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
async fn set_then_get_user_quota() {
    let ctx = TestContext::new_from_env().await;

    let resp: SetUserQuotaResponse = ctx
        .client
        .set_user_quota(QuotaSpec {
            uid: ctx.admin_uid.clone(),
            quota_type: Some("bucket".into()),
            enabled: Some(true),
            max_objects: Some(5000),
            max_size: Some(1 << 30),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.uid(), ctx.admin_uid);
    assert_eq!(
        resp.request().query_params().get("quota-type").map(String::as_str),
        Some("user")
    );

    let resp: GetUserQuotaResponse = ctx
        .client
        .get_user_quota(QuotaSpec {
            uid: ctx.admin_uid.clone(),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap();
    let quota = resp.quota();
    assert_eq!(quota.uid, ctx.admin_uid);
    assert_eq!(quota.quota_type.as_deref(), Some("user"));
    assert_eq!(quota.enabled, Some(true));
    assert_eq!(quota.max_objects, Some(5000));
    assert_eq!(quota.max_size, Some(1 << 30));

    ctx.client
        .set_user_quota(QuotaSpec {
            uid: ctx.admin_uid.clone(),
            enabled: Some(false),
            max_objects: Some(-1),
            max_size: Some(-1),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(ctx.hook.attempted(), 3);
}
