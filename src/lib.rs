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

//! # Ceph Admin Rust SDK (`ceph-admin`)
//!
//! This crate provides a strongly-typed, async-first interface to the Ceph
//! RADOS Gateway (RGW) admin operations API, together with the response types
//! used by the CephFS admin tooling.
//!
//! Each supported admin operation has a corresponding request builder (e.g.,
//! [`rgw::admin::builders::GetUser`], [`rgw::admin::builders::SetUserQuota`]),
//! obtained from a method on [`rgw::admin::RgwAdminClient`].
//!
//! All request builders implement the [`rgw::admin::types::AdminApi`] trait, which
//! provides the async [`send`](crate::rgw::admin::types::AdminApi::send) method to
//! execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use ceph_admin::rgw::admin::RgwAdminClient;
//! use ceph_admin::rgw::admin::creds::StaticProvider;
//! use ceph_admin::rgw::admin::http::BaseUrl;
//! use ceph_admin::rgw::admin::types::AdminApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "http://rgw.local:8080".parse().unwrap();
//!     let provider = StaticProvider::new("access", "secret", None);
//!     let client = RgwAdminClient::new(base_url, Some(provider), None, None).unwrap();
//!
//!     let user = client
//!         .get_user()
//!         .uid("admin")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("{} has {} keys", user.info().user_id, user.info().keys.len());
//! }
//! ```
//!
//! ## Features
//! - `preview`: enables admin endpoints whose server-side API is still
//!   considered unstable (key management and per-bucket quotas).
//! - `default-tls` / `native-tls` / `rustls-tls`: select the TLS backend.
//!
//! ## Design
//! - Each API method on [`rgw::admin::RgwAdminClient`] returns a builder struct
//! - Builders implement [`rgw::admin::types::ToAdminRequest`] for request conversion
//!   and [`rgw::admin::types::AdminApi`] for execution
//! - Responses implement [`rgw::admin::types::FromAdminResponse`] for consistent
//!   deserialization

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]

pub mod cephfs;
mod commands;
pub mod rgw;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
