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
use std::fmt;

use super::traits::ToQueryParams;
use crate::rgw::admin::multimap_ext::{Multimap, MultimapExt};

/// Kind of credential managed by the key endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    S3,
    Swift,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::S3 => f.write_str("s3"),
            KeyType::Swift => f.write_str("swift"),
        }
    }
}

/// Arguments of the key create and remove operations.
///
/// Either `uid` or `subuser` identifies the owner. When `generate_key` is
/// unset the gateway generates a key unless one is supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeySpec {
    pub uid: String,
    pub subuser: String,
    pub key_type: Option<KeyType>,
    pub access_key: String,
    pub secret_key: String,
    pub generate_key: Option<bool>,
}

impl KeySpec {
    /// Spec targeting the keys of `uid`.
    pub fn for_user(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub(crate) fn has_owner(&self) -> bool {
        !self.uid.is_empty() || !self.subuser.is_empty()
    }
}

impl ToQueryParams for KeySpec {
    fn to_query_params(&self) -> Multimap {
        let mut q = Multimap::new();
        q.add_opt("uid", Some(&self.uid));
        q.add_opt("subuser", Some(&self.subuser));
        q.add_opt("key-type", self.key_type);
        q.add_opt("access-key", Some(&self.access_key));
        q.add_opt("secret-key", Some(&self.secret_key));
        q.add_opt("generate-key", self.generate_key);
        q
    }
}

/// S3 credential record as listed in a user's `keys` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserKey {
    pub user: String,
    pub access_key: String,
    pub secret_key: String,
}
