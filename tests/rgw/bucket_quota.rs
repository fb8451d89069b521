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
use ceph_admin::rgw::admin::multimap_ext::{Multimap, MultimapExt};
use ceph_admin::rgw::admin::response::{AdminErrorCode, SetIndividualBucketQuotaResponse};
use ceph_admin::rgw::admin::response_traits::{HasAdminFields, HasBucket, HasUid};
use ceph_admin::rgw::admin::types::{AdminApi, IndividualBucketQuotaSpec};
use ceph_admin_common::TestContext;
use ceph_admin_common::utils::rand_uid;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bucket_quota_requires_uid_and_bucket() {
    let ctx = TestContext::new_from_env().await;

    let err = ctx
        .client
        .set_individual_bucket_quota(IndividualBucketQuotaSpec {
            bucket: ctx.test_bucket.clone(),
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

    let err = ctx
        .client
        .set_individual_bucket_quota(IndividualBucketQuotaSpec {
            uid: ctx.admin_uid.clone(),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingBucket)
    ));
    assert_eq!(ctx.hook.attempted(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bucket_quota_always_sends_bucket_type() {
    let ctx = TestContext::new_from_env().await;

    let resp: SetIndividualBucketQuotaResponse = ctx
        .client
        .set_individual_bucket_quota(IndividualBucketQuotaSpec {
            uid: ctx.admin_uid.clone(),
            bucket: ctx.test_bucket.clone(),
            quota_type: Some("user".into()),
            enabled: Some(true),
            max_objects: Some(100),
            max_size_kb: Some(2048),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.uid(), ctx.admin_uid);
    assert_eq!(resp.bucket(), ctx.test_bucket);
    assert_eq!(
        resp.request().query_params().get("quota-type").map(String::as_str),
        Some("bucket")
    );

    let Some(mock) = ctx.mock.clone() else {
        return;
    };
    let requests = mock.requests().await;
    let sent = requests.last().unwrap();
    assert_eq!(sent.method, http::Method::PUT);
    assert_eq!(sent.path, "/admin/bucket");
    assert!(sent.has_param("quota"));
    assert_eq!(sent.params("quota-type"), vec!["bucket"]);
    assert!(!sent.has_param("check-on-raw"));

    let quota = mock.bucket_quota(&ctx.test_bucket).await.unwrap();
    assert!(quota.enabled);
    assert_eq!(quota.max_objects, 100);
    assert_eq!(quota.max_size_kb, 2048);
    assert_eq!(quota.max_size, 2048 * 1024);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bucket_quota_for_unknown_bucket() {
    let ctx = TestContext::new_from_env().await;
    if ctx.mock.is_none() {
        return;
    }

    let err = ctx
        .client
        .set_individual_bucket_quota(IndividualBucketQuotaSpec {
            uid: ctx.admin_uid.clone(),
            bucket: rand_uid(),
            enabled: Some(false),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap_err();
    let resp = err.admin_error_response().unwrap();
    assert_eq!(resp.code(), AdminErrorCode::NoSuchBucket);
    assert_eq!(resp.resource(), "/admin/bucket");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bucket_quota_type_survives_extra_params() {
    let ctx = TestContext::new_from_env().await;

    let mut extra = Multimap::new();
    extra.add("quota-type", "user");
    ctx.client
        .set_individual_bucket_quota(IndividualBucketQuotaSpec {
            uid: ctx.admin_uid.clone(),
            bucket: ctx.test_bucket.clone(),
            enabled: Some(false),
            ..Default::default()
        })
        .extra_query_params(extra)
        .build()
        .send()
        .await
        .unwrap();

    let Some(mock) = ctx.mock.clone() else {
        return;
    };
    let requests = mock.requests().await;
    let sent = requests.last().unwrap();
    assert_eq!(sent.params("quota-type"), vec!["bucket"]);
    assert!(!mock.bucket_quota(&ctx.test_bucket).await.unwrap().enabled);
}
