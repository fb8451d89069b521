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

use rand::distr::{Alphanumeric, SampleString};

pub fn rand_uid() -> String {
    format!(
        "test-{}",
        Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
    )
}

/// Random access key in the shape RGW generates: 20 upper-case alphanumerics.
pub fn rand_access_key() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), 20)
        .to_uppercase()
}

pub fn rand_secret_key() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 40)
}
