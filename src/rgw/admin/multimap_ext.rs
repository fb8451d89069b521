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

use crate::rgw::admin::utils::url_encode;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Collapses multiple spaces into a single space.
///
/// Returns `Cow::Borrowed` when no transformation is needed.
#[inline]
fn collapse_spaces(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(result)
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds the value only when it is present and not empty
    fn add_opt<K: Into<String>, V: ToString>(&mut self, key: K, value: Option<V>);

    /// Adds a multimap, dropping values already stored under its keys
    fn set_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_opt<K: Into<String>, V: ToString>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            let v = v.to_string();
            if !v.is_empty() {
                self.insert(key.into(), v);
            }
        }
    }

    fn set_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.remove(&key);
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(url_encode(key))
                .or_default()
                .extend(values.iter().map(|v| url_encode(v)));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                query.push('=');
                query.push_str(&value);
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();

            let mut value = String::new();
            for v in vs {
                if !value.is_empty() {
                    value.push(',');
                }
                value.push_str(&collapse_spaces(v));
            }
            btmap.insert(key, value);
        }

        let mut signed_headers = String::new();
        let mut canonical_headers = String::new();
        let mut add_delim = false;
        for (key, value) in &btmap {
            if add_delim {
                signed_headers.push(';');
                canonical_headers.push('\n');
            }

            signed_headers.push_str(key);

            canonical_headers.push_str(key);
            canonical_headers.push(':');
            canonical_headers.push_str(value);

            add_delim = true;
        }

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert!(matches!(collapse_spaces("application/json"), Cow::Borrowed(_)));
        assert_eq!(collapse_spaces("  a   b  c "), "a b c");
    }

    #[test]
    fn test_add_opt_skips_none_and_empty() {
        let mut m = Multimap::new();
        m.add_opt("uid", Some("admin"));
        m.add_opt("subuser", Some(""));
        m.add_opt::<_, bool>("generate-key", None);
        m.add_opt("enabled", Some(false));
        assert_eq!(m.get("uid").map(String::as_str), Some("admin"));
        assert_eq!(m.get("enabled").map(String::as_str), Some("false"));
        assert!(!m.contains_key("subuser"));
        assert!(!m.contains_key("generate-key"));
    }

    #[test]
    fn test_set_multimap_replaces_existing_keys() {
        let mut m = Multimap::new();
        m.add("quota", "");
        m.add("quota-type", "user");
        m.add("quota-type", "user");

        let mut other = Multimap::new();
        other.add("quota-type", "bucket");
        other.add("uid", "alice");
        m.set_multimap(other);

        assert_eq!(m.get_vec("quota-type"), Some(&vec!["bucket".to_string()]));
        assert_eq!(m.get("uid").map(String::as_str), Some("alice"));
        assert!(m.contains_key("quota"));
    }

    #[test]
    fn test_canonical_query_string_is_sorted_and_encoded() {
        let mut m = Multimap::new();
        m.add("uid", "tenant$admin");
        m.add("key", "");
        m.add("access-key", "AK");
        assert_eq!(
            m.get_canonical_query_string(),
            "access-key=AK&key=&uid=tenant%24admin"
        );
    }

    #[test]
    fn test_canonical_headers_skip_authorization() {
        let mut m = Multimap::new();
        m.add("Host", "rgw:8080");
        m.add("X-Amz-Date", "20130524T000000Z");
        m.add("Authorization", "ignored");
        m.add("User-Agent", "ignored");
        let (signed, canonical) = m.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date");
        assert_eq!(canonical, "host:rgw:8080\nx-amz-date:20130524T000000Z");
    }
}
