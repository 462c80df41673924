//! List envelope and pagination types

use serde::{Deserialize, Serialize};

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Common pagination query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    /// Number of records to skip for this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Pagination metadata returned alongside list results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// A page of records plus its pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        Self {
            data,
            pagination: Pagination::new(page, limit, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn test_page_query_offset() {
        let q = PageQuery { page: 3, limit: 20 };
        assert_eq!(q.offset(), 40);

        // Page 0 clamps to the first page
        let q = PageQuery { page: 0, limit: 20 };
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_pagination_total_pages() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(1, 0, 5).total_pages, 0);
    }

    #[test]
    fn test_pagination_serialize_camel_case() {
        let p = Pagination::new(2, 10, 25);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"totalPages\":3"));
    }

    #[test]
    fn test_sort_order() {
        let o: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(o, SortOrder::Asc);
        assert_eq!(o.as_sql(), "ASC");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
