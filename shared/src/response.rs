//! API Response types
//!
//! The recruiting API wraps payloads as `{"data": ...}`, with list
//! endpoints nesting a paginated result under `data`. Older deployments
//! are not uniform: some endpoints return bare arrays, some `{"items":
//! [...]}`, some `{"data": [...]}`. Rather than every resource client
//! re-implementing the unwrapping, [`extract_list`] / [`extract_item`] /
//! [`ListPage::from_value`] normalize all known shapes in one place.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard envelope for single-object endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message, present on some error responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Server timestamp, present on sync-style endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Paginated list payload as the canonical deployments send it:
/// `{"data": {"result": [...], "total": ..., "page": ..., ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub result: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Candidate JSON pointer paths for a list payload's items array, probed
/// in order. A bare top-level array is checked before any of these.
const LIST_PATHS: &[&str] = &["/data/result", "/data/items", "/data", "/result", "/items"];

/// Candidate JSON pointer paths for a single-object payload.
const ITEM_PATHS: &[&str] = &["/data/result", "/data"];

/// Pull the items array out of whatever envelope shape arrived.
///
/// Returns an empty vec (not an error) when no candidate path holds an
/// array, or when the array's elements don't deserialize as `T`.
pub fn extract_list<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    if value.is_array() {
        return serde_json::from_value(value.clone()).unwrap_or_default();
    }
    for path in LIST_PATHS {
        if let Some(node) = value.pointer(path)
            && node.is_array()
        {
            return serde_json::from_value(node.clone()).unwrap_or_default();
        }
    }
    Vec::new()
}

/// Pull a single object out of whatever envelope shape arrived.
///
/// Probes the nested paths first; a bare object is accepted as a last
/// resort so un-enveloped deployments keep working.
pub fn extract_item<T: DeserializeOwned>(value: &Value) -> Option<T> {
    for path in ITEM_PATHS {
        if let Some(node) = value.pointer(path)
            && !node.is_null()
            && let Ok(item) = serde_json::from_value(node.clone())
        {
            return Some(item);
        }
    }
    serde_json::from_value(value.clone()).ok()
}

/// A normalized page of list results, independent of envelope shape.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Normalize a raw list response.
    ///
    /// Pagination metadata is read from the object that carries it
    /// (`data` in canonical deployments, the top level in older ones);
    /// when absent, the page is synthesized as a single full page.
    pub fn from_value(value: &Value) -> Self {
        let items: Vec<T> = extract_list(value);

        let meta = ["/data", ""]
            .iter()
            .filter_map(|p| if p.is_empty() { Some(value) } else { value.pointer(p) })
            .find(|node| node.is_object() && node.get("total").is_some());

        let len = items.len() as u64;
        match meta {
            Some(node) => {
                let total = node.get("total").and_then(Value::as_u64).unwrap_or(len);
                let page = node.get("page").and_then(Value::as_u64).unwrap_or(1) as u32;
                let page_size = node
                    .get("page_size")
                    .and_then(Value::as_u64)
                    .unwrap_or(len.max(1)) as u32;
                let total_pages = node
                    .get("total_pages")
                    .and_then(Value::as_u64)
                    .unwrap_or_else(|| total.div_ceil(page_size.max(1) as u64))
                    as u32;
                Self {
                    items,
                    total,
                    page,
                    page_size,
                    total_pages,
                }
            }
            None => Self {
                total: len,
                page: 1,
                page_size: len.max(1) as u32,
                total_pages: 1,
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_list_canonical_envelope() {
        let value = json!({"data": {"result": [1, 2, 3], "total": 3}});
        let items: Vec<i32> = extract_list(&value);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_extract_list_bare_array() {
        let value = json!([{"name": "a"}, {"name": "b"}]);
        let items: Vec<Value> = extract_list(&value);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_extract_list_items_key() {
        let value = json!({"items": ["x", "y"]});
        let items: Vec<String> = extract_list(&value);
        assert_eq!(items, vec!["x", "y"]);
    }

    #[test]
    fn test_extract_list_data_array() {
        let value = json!({"data": [10]});
        let items: Vec<i64> = extract_list(&value);
        assert_eq!(items, vec![10]);
    }

    #[test]
    fn test_extract_list_unrecognized_shape_is_empty() {
        let value = json!({"payload": [1, 2]});
        let items: Vec<i32> = extract_list(&value);
        assert!(items.is_empty());
    }

    #[test]
    fn test_extract_item_enveloped_and_bare() {
        #[derive(Deserialize, PartialEq, Debug)]
        struct Thing {
            name: String,
        }

        let enveloped = json!({"data": {"name": "a"}});
        let bare = json!({"name": "b"});
        assert_eq!(
            extract_item::<Thing>(&enveloped).unwrap().name,
            "a".to_string()
        );
        assert_eq!(extract_item::<Thing>(&bare).unwrap().name, "b".to_string());
    }

    #[test]
    fn test_list_page_reads_server_pagination() {
        let value = json!({
            "data": {
                "result": [1, 2],
                "total": 41,
                "page": 3,
                "page_size": 2,
                "total_pages": 21
            }
        });
        let page: ListPage<i32> = ListPage::from_value(&value);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 41);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_pages, 21);
    }

    #[test]
    fn test_list_page_synthesized_for_bare_array() {
        let value = json!([1, 2, 3]);
        let page: ListPage<i32> = ListPage::from_value(&value);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
