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

use super::key::UserKey;
use super::quota::QuotaSpec;

/// A subuser and its permission level (`read`, `write`, `readwrite`, `full-control`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubuserSpec {
    pub id: String,
    pub permissions: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftKey {
    pub user: String,
    pub secret_key: String,
}

/// An admin capability such as `users=read`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCapSpec {
    #[serde(rename = "type")]
    pub cap_type: String,
    pub perm: String,
}

/// User record returned by `GET /admin/user`. Fields the gateway adds in
/// newer releases are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub suspended: i32,
    pub max_buckets: i64,
    pub subusers: Vec<SubuserSpec>,
    pub keys: Vec<UserKey>,
    pub swift_keys: Vec<SwiftKey>,
    pub caps: Vec<UserCapSpec>,
    pub op_mask: String,
    pub system: Option<bool>,
    pub admin: Option<bool>,
    pub default_placement: String,
    pub default_storage_class: String,
    pub placement_tags: Vec<String>,
    pub bucket_quota: QuotaSpec,
    pub user_quota: QuotaSpec,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl UserInfo {
    pub fn is_suspended(&self) -> bool {
        self.suspended != 0
    }

    /// Looks up one of the user's S3 keys by access key.
    pub fn key(&self, access_key: &str) -> Option<&UserKey> {
        self.keys.iter().find(|k| k.access_key == access_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "user_id": "alice",
        "display_name": "Alice",
        "email": "",
        "suspended": 0,
        "max_buckets": 1000,
        "subusers": [{"id": "alice:swift", "permissions": "full-control"}],
        "keys": [{"user": "alice", "access_key": "AK1", "secret_key": "SK1"}],
        "swift_keys": [{"user": "alice:swift", "secret_key": "SW1"}],
        "caps": [{"type": "users", "perm": "*"}],
        "op_mask": "read, write, delete",
        "default_placement": "",
        "default_storage_class": "",
        "placement_tags": [],
        "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
        "user_quota": {"enabled": true, "check_on_raw": false, "max_size": 4096, "max_size_kb": 4, "max_objects": 10},
        "temp_url_keys": [],
        "type": "rgw",
        "mfa_ids": []
    }"#;

    #[test]
    fn test_decode_user_info() {
        let info: UserInfo = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(info.user_id, "alice");
        assert!(!info.is_suspended());
        assert_eq!(info.subusers[0].permissions, "full-control");
        assert_eq!(info.caps[0].cap_type, "users");
        assert_eq!(info.user_type, "rgw");
        assert_eq!(info.user_quota.max_objects, Some(10));
        assert_eq!(info.key("AK1").map(|k| k.secret_key.as_str()), Some("SK1"));
        assert!(info.key("missing").is_none());
    }
}
