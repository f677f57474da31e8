use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Keeps `(page - 1) * page_size` inside SQLite's signed 64-bit OFFSET
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Rows skipped before `page` (1-based); saturates instead of overflowing
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page.max(1)
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(i64::MAX as u64)
}

/// Query parameters accepted by every paginated list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    /// Free text search
    #[serde(default)]
    pub q: Option<String>,
    /// Inclusive, YYYY-MM-DD
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive, YYYY-MM-DD
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_desc: Option<bool>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        page_offset(self.page(), self.page_size())
    }

    /// Trimmed search text, `None` when blank
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref().filter(|s| !s.is_empty())
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref().filter(|s| !s.is_empty())
    }

    /// Copy with page/page_size clamped into their valid ranges
    pub fn normalized(&self) -> Self {
        Self {
            page: Some(self.page()),
            page_size: Some(self.page_size()),
            q: self.search().map(str::to_string),
            start_date: self.start_date().map(str::to_string),
            end_date: self.end_date().map(str::to_string),
            sort_by: self.sort_by.clone(),
            sort_desc: self.sort_desc,
        }
    }

    /// True when `date` (YYYY-MM-DD) falls inside the requested range
    pub fn date_in_range(&self, date: &str) -> bool {
        if let Some(start) = self.start_date() {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date() {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Pagination metadata returned next to list items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
    /// 1-based position of the first item on the page, 0 when empty
    pub from: u64,
    /// 1-based position of the last item on the page, 0 when empty
    pub to: u64,
}

impl PageMeta {
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let offset = page_offset(page, page_size);
        let (from, to) = if total == 0 || offset >= total {
            (0, 0)
        } else {
            (offset + 1, offset.saturating_add(page_size).min(total))
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
            from,
            to,
        }
    }

    pub fn for_query(query: &ListQuery, total: u64) -> Self {
        Self::new(query.page(), query.page_size(), total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }

    /// Paginates an in-memory collection
    pub fn from_vec(all: Vec<T>, query: &ListQuery) -> Self {
        let meta = PageMeta::for_query(query, all.len() as u64);
        let items = all
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size() as usize)
            .collect();
        Self { items, meta }
    }
}

/// Body of 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Body of 409 responses: the record is referenced or not unique
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConflict {
    pub message: String,
}

/// Result of an upsert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedId {
    pub id: String,
}

/// Option for pickers and select boxes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefOption {
    pub id: String,
    pub code: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_middle_page() {
        let meta = PageMeta::new(2, 10, 35);
        assert_eq!(meta.total_pages, 4);
        assert!(meta.has_next);
        assert!(meta.has_prev);
        assert_eq!((meta.from, meta.to), (11, 20));
    }

    #[test]
    fn test_page_meta_last_partial_page() {
        let meta = PageMeta::new(4, 10, 35);
        assert!(!meta.has_next);
        assert_eq!((meta.from, meta.to), (31, 35));
    }

    #[test]
    fn test_page_meta_empty() {
        let meta = PageMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
        assert_eq!((meta.from, meta.to), (0, 0));
    }

    #[test]
    fn test_list_query_clamps() {
        let q = ListQuery {
            page: Some(0),
            page_size: Some(1000),
            q: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), MAX_PAGE_SIZE);
        assert_eq!(q.search(), None);
        assert_eq!(ListQuery::default().page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_date_in_range_is_inclusive() {
        let q = ListQuery {
            start_date: Some("2025-01-01".into()),
            end_date: Some("2025-01-31".into()),
            ..Default::default()
        };
        assert!(q.date_in_range("2025-01-01"));
        assert!(q.date_in_range("2025-01-31"));
        assert!(!q.date_in_range("2025-02-01"));
        assert!(!q.date_in_range("2024-12-31"));
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let q = ListQuery {
            page: Some(u64::MAX),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(q.page(), MAX_PAGE);
        assert!(q.offset() <= i64::MAX as u64);

        let meta = PageMeta::new(u64::MAX, 10, 35);
        assert_eq!((meta.from, meta.to), (0, 0));
        assert!(!meta.has_next);
        assert!(meta.has_prev);

        let resp = ListResponse::from_vec(vec![1, 2, 3], &q);
        assert!(resp.items.is_empty());
        assert_eq!(page_offset(u64::MAX, u64::MAX), i64::MAX as u64);
        assert_eq!(page_offset(0, 10), 0);
    }

    #[test]
    fn test_from_vec_slices_page() {
        let q = ListQuery {
            page: Some(2),
            page_size: Some(2),
            ..Default::default()
        };
        let resp = ListResponse::from_vec(vec![1, 2, 3, 4, 5], &q);
        assert_eq!(resp.items, vec![3, 4]);
        assert_eq!(resp.meta.total, 5);
    }
}
