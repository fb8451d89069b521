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

//! In-process stand-in for the RGW admin endpoints the client talks to.
//!
//! It keeps users, keys, buckets and quotas in memory, checks the Signature
//! V4 of every request against the stored secret and answers with the same
//! JSON documents and error codes a real gateway uses.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use ceph_admin::rgw::admin::header_constants::{AUTHORIZATION, X_AMZ_CONTENT_SHA256, X_AMZ_DATE};
use ceph_admin::rgw::admin::multimap_ext::{Multimap, MultimapExt};
use ceph_admin::rgw::admin::signer::sign_v4_admin;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use crate::utils::{rand_access_key, rand_secret_key};

type Params = HashMap<String, String>;

/// A request as seen by the mock. The query keeps every pair in wire order,
/// repeated keys included.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    /// First value of `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params(key).into_iter().next()
    }

    pub fn params(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MockQuota {
    pub enabled: bool,
    pub check_on_raw: bool,
    pub max_size: i64,
    pub max_size_kb: i64,
    pub max_objects: i64,
}

impl Default for MockQuota {
    fn default() -> Self {
        Self {
            enabled: false,
            check_on_raw: false,
            max_size: -1,
            max_size_kb: 0,
            max_objects: -1,
        }
    }
}

impl MockQuota {
    fn apply(&mut self, query: &Params) -> Result<(), Response> {
        if let Some(v) = query.get("enabled") {
            self.enabled = v.parse().map_err(|_| invalid_argument())?;
        }
        if let Some(v) = query.get("max-objects") {
            self.max_objects = v.parse().map_err(|_| invalid_argument())?;
        }
        if let Some(v) = query.get("max-size") {
            let size: i64 = v.parse().map_err(|_| invalid_argument())?;
            self.max_size = size;
            self.max_size_kb = if size < 0 { 0 } else { (size + 1023) / 1024 };
        }
        if let Some(v) = query.get("max-size-kb") {
            let kb: i64 = v.parse().map_err(|_| invalid_argument())?;
            self.max_size_kb = kb;
            self.max_size = kb * 1024;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct MockKey {
    access_key: String,
    secret_key: String,
}

#[derive(Clone, Debug, Default)]
struct MockUser {
    display_name: String,
    keys: Vec<MockKey>,
    user_quota: MockQuota,
}

#[derive(Clone, Debug, Default)]
struct MockBucket {
    owner: String,
    quota: MockQuota,
}

#[derive(Debug, Default)]
pub struct MockState {
    users: HashMap<String, MockUser>,
    buckets: HashMap<String, MockBucket>,
    requests: Vec<RecordedRequest>,
}

impl MockState {
    fn secret_of(&self, access_key: &str) -> Option<(&str, &str)> {
        self.users.iter().find_map(|(uid, user)| {
            user.keys
                .iter()
                .find(|k| k.access_key == access_key)
                .map(|k| (uid.as_str(), k.secret_key.as_str()))
        })
    }

    fn user_json(&self, uid: &str, user: &MockUser) -> serde_json::Value {
        let keys: Vec<serde_json::Value> = user
            .keys
            .iter()
            .map(|k| json!({"user": uid, "access_key": k.access_key, "secret_key": k.secret_key}))
            .collect();
        json!({
            "user_id": uid,
            "display_name": user.display_name,
            "email": "",
            "suspended": 0,
            "max_buckets": 1000,
            "subusers": [],
            "keys": keys,
            "swift_keys": [],
            "caps": [{"type": "buckets", "perm": "*"}, {"type": "users", "perm": "*"}],
            "op_mask": "read, write, delete",
            "default_placement": "",
            "default_storage_class": "",
            "placement_tags": [],
            "bucket_quota": MockQuota::default(),
            "user_quota": user.user_quota,
            "temp_url_keys": [],
            "type": "rgw",
            "mfa_ids": []
        })
    }
}

pub type SharedState = Arc<RwLock<MockState>>;

/// Handle of a running mock gateway.
#[derive(Clone, Debug)]
pub struct MockRgw {
    addr: SocketAddr,
    state: SharedState,
}

impl MockRgw {
    /// Starts the mock on an ephemeral port. `uid` owns the key pair used to
    /// sign requests and the bucket `bucket`.
    pub async fn start(
        uid: &str,
        access_key: &str,
        secret_key: &str,
        bucket: &str,
    ) -> std::io::Result<Self> {
        let mut state = MockState::default();
        state.users.insert(
            uid.to_string(),
            MockUser {
                display_name: uid.to_string(),
                keys: vec![MockKey {
                    access_key: access_key.to_string(),
                    secret_key: secret_key.to_string(),
                }],
                user_quota: MockQuota::default(),
            },
        );
        state.buckets.insert(
            bucket.to_string(),
            MockBucket {
                owner: uid.to_string(),
                quota: MockQuota::default(),
            },
        );
        let state: SharedState = Arc::new(RwLock::new(state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = app(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                log::error!("mock rgw stopped: {e}");
            }
        });
        log::debug!("mock rgw listening on {addr}");

        Ok(Self { addr, state })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far, including rejected ones.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    pub async fn bucket_quota(&self, bucket: &str) -> Option<MockQuota> {
        self.state
            .read()
            .await
            .buckets
            .get(bucket)
            .map(|b| b.quota.clone())
    }

    /// Adds a user without keys.
    pub async fn add_user(&self, uid: &str) {
        self.state.write().await.users.insert(
            uid.to_string(),
            MockUser {
                display_name: uid.to_string(),
                ..Default::default()
            },
        );
    }
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/admin/user", get(user).put(user).delete(user))
        .route("/admin/bucket", put(bucket))
        .with_state(state)
}

fn error(status: StatusCode, code: &str) -> Response {
    (
        status,
        Json(json!({"Code": code, "RequestId": "tx00000mock", "HostId": "mock-default"})),
    )
        .into_response()
}

fn invalid_argument() -> Response {
    error(StatusCode::BAD_REQUEST, "InvalidArgument")
}

fn no_such_user() -> Response {
    error(StatusCode::NOT_FOUND, "NoSuchUser")
}

/// Verifies the Signature V4 `Authorization` header against the stored secret.
fn authenticate(
    state: &MockState,
    method: &Method,
    path: &str,
    headers: &HeaderMap,
    query: &[(String, String)],
) -> Result<(), Response> {
    let denied = || error(StatusCode::FORBIDDEN, "AccessDenied");
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    let auth = header(AUTHORIZATION).ok_or_else(denied)?;
    let fields = auth.strip_prefix("AWS4-HMAC-SHA256 ").ok_or_else(denied)?;
    let mut credential = "";
    let mut signed_headers = "";
    for part in fields.split(", ") {
        if let Some(v) = part.strip_prefix("Credential=") {
            credential = v;
        } else if let Some(v) = part.strip_prefix("SignedHeaders=") {
            signed_headers = v;
        }
    }
    let mut scope = credential.split('/');
    let access_key = scope.next().unwrap_or_default();
    let region = scope.nth(1).unwrap_or_default();

    let (_, secret_key) = state
        .secret_of(access_key)
        .ok_or_else(|| error(StatusCode::FORBIDDEN, "InvalidAccessKeyId"))?;

    let date = header(X_AMZ_DATE)
        .and_then(|v| NaiveDateTime::parse_from_str(v, "%Y%m%dT%H%M%SZ").ok())
        .ok_or_else(denied)?
        .and_utc();
    let content_sha256 = header(X_AMZ_CONTENT_SHA256).unwrap_or_default();

    let mut signed = Multimap::new();
    for name in signed_headers.split(';') {
        signed.add(name, header(name).unwrap_or_default());
    }
    let mut query_params = Multimap::new();
    for (k, v) in query {
        query_params.add(k.as_str(), v.as_str());
    }

    sign_v4_admin(
        method,
        path,
        region,
        &mut signed,
        &query_params,
        access_key,
        secret_key,
        content_sha256,
        date,
    );
    if signed.get(AUTHORIZATION).map(String::as_str) != Some(auth) {
        return Err(error(StatusCode::FORBIDDEN, "SignatureDoesNotMatch"));
    }
    Ok(())
}

/// Records the request, checks its signature and folds the query into a map.
/// A repeated parameter is rejected with `InvalidArgument`.
fn record(
    state: &mut MockState,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    pairs: Vec<(String, String)>,
) -> Result<Params, Response> {
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: pairs.clone(),
    });
    authenticate(state, method, uri.path(), headers, &pairs)?;

    let mut query = Params::new();
    for (k, v) in pairs {
        if query.insert(k, v).is_some() {
            return Err(invalid_argument());
        }
    }
    Ok(query)
}

fn owner_uid(query: &Params) -> Option<String> {
    if let Some(uid) = query.get("uid").filter(|v| !v.is_empty()) {
        return Some(uid.clone());
    }
    query
        .get("subuser")
        .and_then(|s| s.split(':').next())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

async fn user(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let mut state = state.write().await;
    let query = match record(&mut state, &method, &uri, &headers, pairs) {
        Ok(query) => query,
        Err(resp) => return resp,
    };

    let result = match (
        method,
        query.contains_key("key"),
        query.contains_key("quota"),
    ) {
        (Method::GET, _, true) => get_user_quota(&state, &query),
        (Method::GET, _, false) => get_user_info(&state, &query),
        (Method::PUT, true, _) => create_key(&mut state, &query),
        (Method::PUT, _, true) => set_user_quota(&mut state, &query),
        (Method::DELETE, true, _) => remove_key(&mut state, &query),
        _ => Err(error(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed")),
    };
    result.unwrap_or_else(|e| e)
}

async fn bucket(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let mut state = state.write().await;
    let query = match record(&mut state, &method, &uri, &headers, pairs) {
        Ok(query) => query,
        Err(resp) => return resp,
    };
    if !query.contains_key("quota") {
        return error(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed");
    }
    set_bucket_quota(&mut state, &query).unwrap_or_else(|e| e)
}

fn get_user_info(state: &MockState, query: &Params) -> Result<Response, Response> {
    let uid = match query.get("uid").filter(|v| !v.is_empty()) {
        Some(uid) => uid.clone(),
        None => {
            let access_key = query.get("access-key").ok_or_else(invalid_argument)?;
            let (uid, _) = state.secret_of(access_key).ok_or_else(no_such_user)?;
            uid.to_string()
        }
    };
    let user = state.users.get(&uid).ok_or_else(no_such_user)?;
    Ok(Json(state.user_json(&uid, user)).into_response())
}

fn create_key(state: &mut MockState, query: &Params) -> Result<Response, Response> {
    let uid = owner_uid(query).ok_or_else(invalid_argument)?;
    if !state.users.contains_key(&uid) {
        return Err(no_such_user());
    }
    if query.get("key-type").is_some_and(|t| t != "s3") {
        return Err(error(StatusCode::BAD_REQUEST, "InvalidKeyType"));
    }

    let access_key = query
        .get("access-key")
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(rand_access_key);
    let secret_key = query
        .get("secret-key")
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(rand_secret_key);

    let taken = state
        .secret_of(&access_key)
        .is_some_and(|(owner, _)| owner != uid);
    if taken {
        return Err(error(StatusCode::CONFLICT, "KeyExists"));
    }

    let user = state.users.get_mut(&uid).ok_or_else(no_such_user)?;
    match user.keys.iter_mut().find(|k| k.access_key == access_key) {
        Some(existing) => existing.secret_key = secret_key,
        None => user.keys.push(MockKey {
            access_key,
            secret_key,
        }),
    }

    let keys: Vec<serde_json::Value> = user
        .keys
        .iter()
        .map(|k| json!({"user": uid, "access_key": k.access_key, "secret_key": k.secret_key}))
        .collect();
    Ok(Json(keys).into_response())
}

fn remove_key(state: &mut MockState, query: &Params) -> Result<Response, Response> {
    let uid = owner_uid(query).ok_or_else(invalid_argument)?;
    let access_key = query
        .get("access-key")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| error(StatusCode::FORBIDDEN, "InvalidAccessKeyId"))?;
    let user = state.users.get_mut(&uid).ok_or_else(no_such_user)?;
    let before = user.keys.len();
    user.keys.retain(|k| &k.access_key != access_key);
    if user.keys.len() == before {
        return Err(error(StatusCode::FORBIDDEN, "InvalidAccessKeyId"));
    }
    Ok(StatusCode::OK.into_response())
}

fn check_quota_type(query: &Params, expected: &str) -> Result<(), Response> {
    match query.get("quota-type") {
        Some(t) if t == expected => Ok(()),
        _ => Err(invalid_argument()),
    }
}

fn get_user_quota(state: &MockState, query: &Params) -> Result<Response, Response> {
    check_quota_type(query, "user")?;
    let uid = query.get("uid").ok_or_else(invalid_argument)?;
    let user = state.users.get(uid).ok_or_else(no_such_user)?;
    Ok(Json(&user.user_quota).into_response())
}

fn set_user_quota(state: &mut MockState, query: &Params) -> Result<Response, Response> {
    check_quota_type(query, "user")?;
    let uid = query.get("uid").ok_or_else(invalid_argument)?;
    let user = state.users.get_mut(uid).ok_or_else(no_such_user)?;
    user.user_quota.apply(query)?;
    Ok(StatusCode::OK.into_response())
}

fn set_bucket_quota(state: &mut MockState, query: &Params) -> Result<Response, Response> {
    check_quota_type(query, "bucket")?;
    let uid = query.get("uid").ok_or_else(invalid_argument)?;
    let name = query.get("bucket").ok_or_else(invalid_argument)?;
    if !state.users.contains_key(uid) {
        return Err(no_such_user());
    }
    let bucket = state
        .buckets
        .get_mut(name)
        .filter(|b| &b.owner == uid)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "NoSuchBucket"))?;
    bucket.quota.apply(query)?;
    Ok(StatusCode::OK.into_response())
}
