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

use serde::{Deserialize, Serialize};

use super::traits::ToQueryParams;
use crate::rgw::admin::multimap_ext::{Multimap, MultimapExt};

/// Quota settings of a user, also the shape of the `bucket_quota` and
/// `user_quota` objects embedded in [`UserInfo`](super::UserInfo).
///
/// `None` fields are left untouched by the gateway on update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaSpec {
    #[serde(rename = "user_id", default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket: String,
    #[serde(skip)]
    pub quota_type: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default)]
    pub check_on_raw: bool,
    pub max_size: Option<i64>,
    pub max_size_kb: Option<i64>,
    pub max_objects: Option<i64>,
}

/// Quota applied to one bucket of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualBucketQuotaSpec {
    #[serde(rename = "user_id", default)]
    pub uid: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(skip)]
    pub quota_type: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default)]
    pub check_on_raw: bool,
    pub max_size: Option<i64>,
    pub max_size_kb: Option<i64>,
    pub max_objects: Option<i64>,
}

fn quota_query_params(
    uid: &str,
    bucket: &str,
    quota_type: Option<&str>,
    enabled: Option<bool>,
    max_size: Option<i64>,
    max_size_kb: Option<i64>,
    max_objects: Option<i64>,
) -> Multimap {
    let mut q = Multimap::new();
    q.add_opt("uid", Some(uid));
    q.add_opt("bucket", Some(bucket));
    q.add_opt("quota-type", quota_type);
    q.add_opt("enabled", enabled);
    q.add_opt("max-size", max_size);
    q.add_opt("max-size-kb", max_size_kb);
    q.add_opt("max-objects", max_objects);
    q
}

impl ToQueryParams for QuotaSpec {
    fn to_query_params(&self) -> Multimap {
        quota_query_params(
            &self.uid,
            &self.bucket,
            self.quota_type.as_deref(),
            self.enabled,
            self.max_size,
            self.max_size_kb,
            self.max_objects,
        )
    }
}

impl ToQueryParams for IndividualBucketQuotaSpec {
    fn to_query_params(&self) -> Multimap {
        quota_query_params(
            &self.uid,
            &self.bucket,
            self.quota_type.as_deref(),
            self.enabled,
            self.max_size,
            self.max_size_kb,
            self.max_objects,
        )
    }
}
