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

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const AUTHORIZATION: &str = "Authorization";
pub const HOST: &str = "Host";

pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const X_AMZ_CONTENT_SHA256: &str = "X-Amz-Content-SHA256";
pub const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";
pub const X_AMZ_REQUEST_ID: &str = "x-amz-request-id";
