//! Request types for the shared crate
//!
//! Common query types used by every list endpoint.

/// Pagination query parameters
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Search keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: None,
        }
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, keyword: impl Into<String>) -> Self {
        self.search = Some(keyword.into());
        self
    }

    /// Page size clamped to the server's maximum
    pub fn limit(&self) -> u32 {
        std::cmp::min(self.page_size, 100)
    }

    /// Query-string pairs in the order the API documents them
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.limit().to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = ListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 20);
        assert!(q.search.is_none());
    }

    #[test]
    fn test_limit_clamped() {
        let q = ListQuery {
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(q.limit(), 100);
    }

    #[test]
    fn test_to_pairs_includes_search() {
        let q = ListQuery::page(2).with_search("rust");
        let pairs = q.to_pairs();
        assert_eq!(pairs[0], ("page", "2".to_string()));
        assert_eq!(pairs[2], ("search", "rust".to_string()));
    }
}
