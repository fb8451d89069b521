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

//! Shared result type of Ceph mon/mgr/MDS commands.
//!
//! Commands answer with a `(body, status, error)` triple. [`Response`]
//! carries that triple and offers the checks callers chain before decoding
//! the body.

mod response;

pub use response::{CommandError, NotImplementedError, Response, ResponseError};
