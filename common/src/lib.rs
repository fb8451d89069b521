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

pub mod counting_hook;
pub mod mock_rgw;
pub mod test_context;
pub mod utils;

pub use test_context::TestContext;
