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

//! Argument builders for the admin operations.

#[cfg(feature = "preview")]
mod create_key;
mod get_user;
mod get_user_quota;
#[cfg(feature = "preview")]
mod remove_key;
#[cfg(feature = "preview")]
mod set_individual_bucket_quota;
mod set_user_quota;

#[cfg(feature = "preview")]
pub use create_key::*;
pub use get_user::*;
pub use get_user_quota::*;
#[cfg(feature = "preview")]
pub use remove_key::*;
#[cfg(feature = "preview")]
pub use set_individual_bucket_quota::*;
pub use set_user_quota::*;
