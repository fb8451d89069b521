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

use crate::rgw::admin::error::ValidationErr;
use crate::rgw::admin::multimap_ext::{Multimap, MultimapExt};
use crate::rgw::admin::utils::match_hostname;
use http::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

/// Query parameters whose values are masked in logs and error messages.
const SENSITIVE_QUERY_PARAMS: &[&str] = &["secret-key"];

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Renders the URL with the values of credential parameters masked.
    pub fn redacted(&self) -> String {
        let mut url = self.clone();
        for key in SENSITIVE_QUERY_PARAMS {
            if let Some(values) = url.query.get_vec_mut(*key) {
                values.iter_mut().for_each(|v| *v = "REDACTED".into());
            }
        }
        url.to_string()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            write!(f, "{}:{}", self.host, self.port)?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug)]
/// Represents the base URL of an RGW endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: false,
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use ceph_admin::rgw::admin::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://rgw.example.com:8080".parse().unwrap();
    /// let base_url: BaseUrl = "https://192.168.124.63".parse().unwrap();
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:7480".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let is_ip = host.trim_matches(|c| c == '[' || c == ']').parse::<std::net::IpAddr>().is_ok();
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = format!("[{host}]");
        }
        if !is_ip && !match_hostname(&host) {
            return Err(ValidationErr::InvalidBaseUrl(format!(
                "invalid host name {host}"
            )));
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl { https, host, port })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL of an admin resource, e.g. `/admin/user`.
    pub fn build_url(&self, path: &str, query: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: path.to_string(),
            query: query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_http_with_port() {
        let base: BaseUrl = "http://rgw.example.com:8080".parse().unwrap();
        assert!(!base.https);
        assert_eq!(base.host(), "rgw.example.com");
        assert_eq!(base.port(), 8080);
    }

    #[test]
    fn test_base_url_default_ports_dropped() {
        let base: BaseUrl = "https://rgw.example.com:443".parse().unwrap();
        assert!(base.https);
        assert_eq!(base.port(), 0);
        let base: BaseUrl = "http://rgw.example.com:80/".parse().unwrap();
        assert_eq!(base.port(), 0);
    }

    #[test]
    fn test_base_url_ipv6() {
        let base: BaseUrl = "http://[::1]:7480".parse().unwrap();
        assert_eq!(base.host(), "[::1]");
        assert_eq!(base.build_url("/admin/user", &Multimap::new()).host_header_value(), "[::1]:7480");
    }

    #[test]
    fn test_base_url_rejects_path_query_and_scheme() {
        assert!("http://rgw:8080/admin".parse::<BaseUrl>().is_err());
        assert!("http://rgw:8080/?uid=a".parse::<BaseUrl>().is_err());
        assert!("ftp://rgw:8080".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn test_url_display() {
        let base: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
        let mut query = Multimap::new();
        query.add("uid", "tenant$admin");
        let url = base.build_url("/admin/user", &query);
        assert_eq!(url.to_string(), "http://127.0.0.1:8080/admin/user?uid=tenant%24admin");
    }

    #[test]
    fn test_url_redacts_secret_key() {
        let base: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
        let mut query = Multimap::new();
        query.add("access-key", "AK");
        query.add("secret-key", "TOPSECRET");
        let url = base.build_url("/admin/user", &query);

        let redacted = url.redacted();
        assert!(!redacted.contains("TOPSECRET"));
        assert!(redacted.contains("secret-key=REDACTED"));
        assert!(redacted.contains("access-key=AK"));
        assert!(url.to_string().contains("secret-key=TOPSECRET"));
    }

    #[test]
    fn test_url_display_requires_host() {
        let url = Url::default();
        assert!(std::fmt::write(&mut String::new(), format_args!("{url}")).is_err());
    }
}
