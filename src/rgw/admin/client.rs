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

//! RADOS Gateway admin client.
//!
//! Every request goes to `<base_url>/<admin_entry>/<resource>` and, when a
//! credential provider is configured, is signed with AWS Signature Version 4.

use bytes::Bytes;
use http::HeaderMap;
pub use http::Method;
pub use reqwest::Response;
use std::fs::File;
use std::io::prelude::*;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub use crate::rgw::admin::client::hooks::RequestHooks;
use crate::rgw::admin::creds::Provider;
use crate::rgw::admin::error::{AdminServerError, Error, IoError, NetworkError, ValidationErr};
use crate::rgw::admin::header_constants::*;
use crate::rgw::admin::http::{BaseUrl, Url};
use crate::rgw::admin::multimap_ext::{Multimap, MultimapExt};
use crate::rgw::admin::response::AdminErrorResponse;
use crate::rgw::admin::signer::sign_v4_admin;
use crate::rgw::admin::utils::{EMPTY_SHA256, to_amz_date, utc_now};

#[cfg(feature = "preview")]
mod create_key;
mod get_user;
mod get_user_quota;
pub mod hooks;
#[cfg(feature = "preview")]
mod remove_key;
#[cfg(feature = "preview")]
mod set_individual_bucket_quota;
mod set_user_quota;

/// Region used in the signing scope when none is configured.
pub const DEFAULT_REGION: &str = "default";

/// Entry point of the admin API, i.e. the `rgw_admin_entry` option.
pub const DEFAULT_ADMIN_ENTRY: &str = "admin";

/// HTTP connection pool tuning.
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 8
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 8,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures an [`RgwAdminClient`] using given parameters.
#[derive(Debug)]
pub struct RgwAdminClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not set, requests are sent unsigned.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    client_hooks: Vec<Arc<dyn RequestHooks + Send + Sync + 'static>>,
    region: String,
    admin_entry: String,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    timeout: Option<Duration>,
    connection_pool_config: ConnectionPoolConfig,
}

impl RgwAdminClientBuilder {
    /// Creates a builder given the base URL of a RADOS Gateway endpoint.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            client_hooks: Vec::new(),
            region: DEFAULT_REGION.to_string(),
            admin_entry: DEFAULT_ADMIN_ENTRY.to_string(),
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            timeout: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Add a client hook to the builder. Hooks will be called after each other in
    /// order they were added.
    pub fn hook(mut self, hooks: Arc<dyn RequestHooks + Send + Sync + 'static>) -> Self {
        self.client_hooks.push(hooks);
        self
    }

    /// Set the credential provider. If not set, requests are sent unsigned.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the region used in the signature scope.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the admin entry point if the gateway runs with a non-default
    /// `rgw_admin_entry`.
    pub fn admin_entry(mut self, admin_entry: impl Into<String>) -> Self {
        self.admin_entry = admin_entry.into().trim_matches('/').to_string();
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set a total timeout applied to every request.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RgwAdminClient, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        if let Some(v) = self.timeout {
            builder = builder.timeout(v);
        }

        let mut user_agent = String::from("ceph-admin (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") ceph-admin-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(RgwAdminClient {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
                client_hooks: self.client_hooks,
                region: self.region,
                admin_entry: self.admin_entry,
            }),
        })
    }
}

/// Client for the RADOS Gateway admin operations API.
///
/// If a credential provider is passed, all requests are signed using AWS
/// Signature Version 4; else they are sent anonymously, which RGW rejects
/// for every admin resource.
#[derive(Clone, Debug)]
pub struct RgwAdminClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl RgwAdminClient {
    /// Returns an admin client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use ceph_admin::rgw::admin::RgwAdminClient;
    /// use ceph_admin::rgw::admin::creds::StaticProvider;
    /// use ceph_admin::rgw::admin::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://rgw.local:8080".parse().unwrap();
    /// let static_provider = StaticProvider::new("admin-access", "admin-secret", None);
    /// let client = RgwAdminClient::new(base_url, Some(static_provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        RgwAdminClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns whether this client talks TLS to the gateway.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn region(&self) -> &str {
        &self.shared.region
    }

    /// Full path of an admin resource, e.g. `/admin/user` for `/user`.
    pub(crate) fn admin_path(&self, resource: &str) -> String {
        format!(
            "/{}/{}",
            self.shared.admin_entry,
            resource.trim_start_matches('/')
        )
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        resource: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
    ) -> Result<reqwest::Response, Error> {
        let region: &str = &self.shared.region;
        let path = self.admin_path(resource);
        let mut url = self.shared.base_url.build_url(&path, query_params);
        let mut extensions = http::Extensions::default();

        headers.add(HOST, url.host_header_value());
        if matches!(method, Method::PUT | Method::POST) {
            headers.add(CONTENT_LENGTH, "0");
        }
        headers.add(X_AMZ_CONTENT_SHA256, EMPTY_SHA256);

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        self.run_before_signing_hooks(
            &method,
            &mut url,
            region,
            headers,
            query_params,
            &mut extensions,
        )
        .await?;

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_admin(
                &method,
                &url.path,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                EMPTY_SHA256,
                date,
            );
        }

        let url_str = url.to_string();
        let url_log = url.redacted();
        log::debug!("{method} {url_log}");

        let mut req = self.http_client.request(method.clone(), &url_str);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        let resp = req.send().await;

        self.run_after_execute_hooks(
            &method,
            &url,
            region,
            headers,
            query_params,
            &resp,
            &mut extensions,
        )
        .await;

        let mut resp = resp.map_err(|source| NetworkError::ReqwestError {
            url: url_log.clone(),
            source: source.without_url(),
        })?;
        log::debug!("{method} {url_log} -> {}", resp.status());
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::ReadBody)?;

        let e = AdminErrorResponse::new(method, path, status_code, headers, body);
        log::debug!("admin request failed: {e}");
        Err(Error::AdminServer(AdminServerError::ErrorResponse(Box::new(e))))
    }

    async fn run_after_execute_hooks(
        &self,
        method: &Method,
        url: &Url,
        region: &str,
        headers: &Multimap,
        query_params: &Multimap,
        resp: &Result<Response, reqwest::Error>,
        extensions: &mut http::Extensions,
    ) {
        for hook in self.shared.client_hooks.iter() {
            hook.after_execute(method, url, region, headers, query_params, resp, extensions)
                .await;
        }
    }

    async fn run_before_signing_hooks(
        &self,
        method: &Method,
        url: &mut Url,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        extensions: &mut http::Extensions,
    ) -> Result<(), Error> {
        for hook in self.shared.client_hooks.iter() {
            hook.before_signing_mut(method, url, region, headers, query_params, extensions)
                .await
                .inspect_err(|e| log::warn!("Hook {} failed {e}", hook.name()))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    client_hooks: Vec<Arc<dyn RequestHooks + Send + Sync + 'static>>,
    region: String,
    admin_entry: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgw::admin::creds::StaticProvider;

    fn client(entry: Option<&str>) -> RgwAdminClient {
        let base_url: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
        let mut builder = RgwAdminClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new("access", "secret", None)));
        if let Some(e) = entry {
            builder = builder.admin_entry(e);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_default_admin_path() {
        let c = client(None);
        assert_eq!(c.admin_path("/user"), "/admin/user");
        assert_eq!(c.admin_path("bucket"), "/admin/bucket");
        assert_eq!(c.region(), DEFAULT_REGION);
        assert!(!c.is_secure());
    }

    #[test]
    fn test_custom_admin_entry() {
        let c = client(Some("/rgw-admin/"));
        assert_eq!(c.admin_path("/user"), "/rgw-admin/user");
    }

    #[tokio::test]
    async fn test_transport_error_hides_secret_key() {
        let base_url: BaseUrl = "http://127.0.0.1:1".parse().unwrap();
        let c = RgwAdminClient::new(base_url, Some(StaticProvider::new("a", "s", None)), None, None)
            .unwrap();
        let mut query = Multimap::new();
        query.add("uid", "alice");
        query.add("secret-key", "TOPSECRET");

        let err = c
            .execute(Method::PUT, "/user", &mut Multimap::new(), &query)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(NetworkError::ReqwestError { .. })));
        let msg = err.to_string();
        assert!(!msg.contains("TOPSECRET"), "{msg}");
        assert!(msg.contains("secret-key=REDACTED"), "{msg}");
    }

    #[test]
    fn test_connection_pool_config_setters() {
        let config = ConnectionPoolConfig::default()
            .max_idle_per_host(2)
            .idle_timeout(Duration::from_secs(5))
            .tcp_nodelay(false);
        assert_eq!(config.max_idle_per_host, 2);
        assert_eq!(config.idle_timeout, Duration::from_secs(5));
        assert!(!config.tcp_nodelay);
        assert_eq!(config.tcp_keepalive, Duration::from_secs(60));
    }
}
