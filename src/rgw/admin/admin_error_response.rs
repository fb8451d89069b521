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

use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::Deserialize;
use std::convert::Infallible;
use std::str::FromStr;

use crate::rgw::admin::header_constants::X_AMZ_REQUEST_ID;

/// Error codes returned by the RADOS Gateway admin API in the `Code` field
/// of an error document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdminErrorCode {
    /// The error response carried no recognizable code.
    #[default]
    NoError,
    NoSuchUser,
    NoSuchKey,
    NoSuchBucket,
    NoSuchSubUser,
    InvalidAccessKeyId,
    InvalidArgument,
    InvalidKeyType,
    InvalidSecretKey,
    KeyExists,
    UserAlreadyExists,
    BucketAlreadyExists,
    BucketNotEmpty,
    AccessDenied,
    SignatureDoesNotMatch,
    QuotaExceeded,
    /// Catch-all for codes not listed above.
    OtherError(String),
}

#[allow(dead_code)]
const ALL_ADMIN_ERROR_CODE: &[AdminErrorCode] = &[
    AdminErrorCode::NoError,
    AdminErrorCode::NoSuchUser,
    AdminErrorCode::NoSuchKey,
    AdminErrorCode::NoSuchBucket,
    AdminErrorCode::NoSuchSubUser,
    AdminErrorCode::InvalidAccessKeyId,
    AdminErrorCode::InvalidArgument,
    AdminErrorCode::InvalidKeyType,
    AdminErrorCode::InvalidSecretKey,
    AdminErrorCode::KeyExists,
    AdminErrorCode::UserAlreadyExists,
    AdminErrorCode::BucketAlreadyExists,
    AdminErrorCode::BucketNotEmpty,
    AdminErrorCode::AccessDenied,
    AdminErrorCode::SignatureDoesNotMatch,
    AdminErrorCode::QuotaExceeded,
];

impl FromStr for AdminErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.to_lowercase().as_str() {
            "" | "noerror" => AdminErrorCode::NoError,
            "nosuchuser" => AdminErrorCode::NoSuchUser,
            "nosuchkey" => AdminErrorCode::NoSuchKey,
            "nosuchbucket" => AdminErrorCode::NoSuchBucket,
            "nosuchsubuser" => AdminErrorCode::NoSuchSubUser,
            "invalidaccesskeyid" => AdminErrorCode::InvalidAccessKeyId,
            "invalidargument" => AdminErrorCode::InvalidArgument,
            "invalidkeytype" => AdminErrorCode::InvalidKeyType,
            "invalidsecretkey" => AdminErrorCode::InvalidSecretKey,
            "keyexists" => AdminErrorCode::KeyExists,
            "useralreadyexists" => AdminErrorCode::UserAlreadyExists,
            "bucketalreadyexists" => AdminErrorCode::BucketAlreadyExists,
            "bucketnotempty" => AdminErrorCode::BucketNotEmpty,
            "accessdenied" => AdminErrorCode::AccessDenied,
            "signaturedoesnotmatch" => AdminErrorCode::SignatureDoesNotMatch,
            "quotaexceeded" => AdminErrorCode::QuotaExceeded,
            _ => AdminErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for AdminErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminErrorCode::NoError => write!(f, "NoError"),
            AdminErrorCode::NoSuchUser => write!(f, "NoSuchUser"),
            AdminErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            AdminErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            AdminErrorCode::NoSuchSubUser => write!(f, "NoSuchSubUser"),
            AdminErrorCode::InvalidAccessKeyId => write!(f, "InvalidAccessKeyId"),
            AdminErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            AdminErrorCode::InvalidKeyType => write!(f, "InvalidKeyType"),
            AdminErrorCode::InvalidSecretKey => write!(f, "InvalidSecretKey"),
            AdminErrorCode::KeyExists => write!(f, "KeyExists"),
            AdminErrorCode::UserAlreadyExists => write!(f, "UserAlreadyExists"),
            AdminErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            AdminErrorCode::BucketNotEmpty => write!(f, "BucketNotEmpty"),
            AdminErrorCode::AccessDenied => write!(f, "AccessDenied"),
            AdminErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            AdminErrorCode::QuotaExceeded => write!(f, "QuotaExceeded"),
            AdminErrorCode::OtherError(code) => write!(f, "{code}"),
        }
    }
}

/// Body of an RGW admin error, e.g.
/// `{"Code":"NoSuchUser","RequestId":"tx0000…","HostId":"4114-default"}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct ErrorDocument {
    code: String,
    request_id: String,
    host_id: String,
}

/// Typed error returned when the gateway answers with a non-success status.
#[derive(Clone, Debug)]
pub struct AdminErrorResponse {
    method: Method,
    resource: String,
    status: u16,
    code: AdminErrorCode,
    request_id: String,
    host_id: String,
    headers: HeaderMap,
    body: Bytes,
}

impl AdminErrorResponse {
    /// Builds the error from a failed response. A body that is not an RGW
    /// error document leaves the code at [`AdminErrorCode::NoError`]; the
    /// status and raw body are kept either way.
    pub fn new(
        method: Method,
        resource: impl Into<String>,
        status: u16,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        let doc: ErrorDocument = serde_json::from_slice(&body).unwrap_or_default();
        let request_id = if doc.request_id.is_empty() {
            headers
                .get(X_AMZ_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        } else {
            doc.request_id
        };
        let Ok(code) = AdminErrorCode::from_str(&doc.code);

        Self {
            method,
            resource: resource.into(),
            status,
            code,
            request_id,
            host_id: doc.host_id,
            headers,
            body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
    /// Path of the admin resource, e.g. `/admin/user`.
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn status(&self) -> u16 {
        self.status
    }
    pub fn code(&self) -> AdminErrorCode {
        self.code.clone()
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Raw response body as returned by the server.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl std::fmt::Display for AdminErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} failed with status {}: code {}",
            self.method, self.resource, self.status, self.code
        )?;
        if !self.request_id.is_empty() {
            write!(f, ", request_id {}", self.request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for AdminErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_code_roundtrip() {
        for code in ALL_ADMIN_ERROR_CODE {
            let str = code.to_string();
            let code_obs: AdminErrorCode = str.parse().unwrap();
            assert_eq!(
                code_obs, *code,
                "Failed AdminErrorCode round-trip: code {code} -> str '{str}' -> code {code_obs}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let code: AdminErrorCode = "ERANGE".parse().unwrap();
        assert_eq!(code, AdminErrorCode::OtherError("ERANGE".into()));
        assert_eq!(code.to_string(), "ERANGE");
    }

    #[test]
    fn test_error_response_from_rgw_document() {
        let body = Bytes::from_static(
            br#"{"Code":"NoSuchUser","RequestId":"tx000001","HostId":"1234-default"}"#,
        );
        let e = AdminErrorResponse::new(Method::GET, "/admin/user", 404, HeaderMap::new(), body);
        assert_eq!(e.code(), AdminErrorCode::NoSuchUser);
        assert_eq!(e.status(), 404);
        assert_eq!(e.request_id(), "tx000001");
        assert_eq!(e.host_id(), "1234-default");
        assert_eq!(
            e.to_string(),
            "GET /admin/user failed with status 404: code NoSuchUser, request_id tx000001"
        );
    }

    #[test]
    fn test_error_response_without_document() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_REQUEST_ID, "tx-from-header".parse().unwrap());
        let e = AdminErrorResponse::new(
            Method::PUT,
            "/admin/bucket",
            500,
            headers,
            Bytes::from_static(b"<html>oops</html>"),
        );
        assert_eq!(e.code(), AdminErrorCode::NoError);
        assert_eq!(e.request_id(), "tx-from-header");
        assert_eq!(e.body().as_ref(), b"<html>oops</html>");
    }
}
