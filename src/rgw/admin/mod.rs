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

//! Implementation of the RADOS Gateway admin operations API client.
//!
//! The admin API lives under `/admin` on every RGW endpoint and is
//! authenticated with AWS Signature Version 4 using the credentials of a
//! user holding the relevant admin capabilities (`users=*`, `buckets=*`).
//!
//! Operations marked *preview* are only compiled with the `preview` feature.

pub mod admin_error_response;
pub mod builders;
pub mod client;
pub mod creds;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod signer;
pub mod types;
pub mod utils;

pub use client::{RgwAdminClient, RgwAdminClientBuilder};
