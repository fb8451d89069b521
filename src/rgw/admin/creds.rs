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

//! Credential providers

/// Credentials of an RGW user holding admin capabilities.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"*****")
            .field("session_token", &self.session_token.as_ref().map(|_| "*****"))
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key, secret key and optional session token
    ///
    /// # Examples
    ///
    /// ```
    /// use ceph_admin::rgw::admin::creds::StaticProvider;
    /// let provider = StaticProvider::new("admin-access-key", "admin-secret-key", None);
    /// ```
    pub fn new(access_key: &str, secret_key: &str, session_token: Option<&str>) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
                session_token: session_token.map(|v| v.to_string()),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secret() {
        let provider = StaticProvider::new("AK", "SECRET", Some("TOKEN"));
        let rendered = format!("{provider:?}");
        assert!(rendered.contains("AK"));
        assert!(!rendered.contains("SECRET"));
        assert!(!rendered.contains("TOKEN"));
        assert_eq!(provider.fetch().secret_key, "SECRET");
    }
}
