//! Server-side paginated list state shared by every list page.

use crate::shared::api_utils::{delete, get_json, query_string, with_query};
use contracts::shared::list::{ListQuery, ListResponse, PageMeta, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Request path for one page: list query first, then the extra filters.
pub fn list_request_path(endpoint: &str, query: &ListQuery, filters: &[(&'static str, String)]) -> String {
    let mut pairs: Vec<(&str, Option<String>)> = vec![
        ("page", query.page.map(|p| p.to_string())),
        ("page_size", query.page_size.map(|s| s.to_string())),
        ("q", query.q.clone()),
        ("start_date", query.start_date.clone()),
        ("end_date", query.end_date.clone()),
        ("sort_by", query.sort_by.clone()),
        ("sort_desc", query.sort_desc.map(|d| d.to_string())),
    ];
    pairs.extend(filters.iter().map(|(k, v)| (*k, Some(v.clone()))));
    with_query(endpoint, &query_string(&pairs))
}

/// Items, page metadata, filters and row selection of a list page.
pub struct PagedList<T: Send + Sync + 'static> {
    pub endpoint: &'static str,
    pub items: RwSignal<Vec<T>>,
    pub meta: RwSignal<PageMeta>,
    pub query: RwSignal<ListQuery>,
    /// Endpoint specific filters, e.g. `product_ref`
    pub filters: RwSignal<Vec<(&'static str, String)>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub selected: RwSignal<HashSet<String>>,
}

impl<T: Send + Sync + 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedList<T> {}

impl<T> PagedList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            items: RwSignal::new(Vec::new()),
            meta: RwSignal::new(PageMeta::default()),
            query: RwSignal::new(ListQuery {
                page: Some(1),
                page_size: Some(DEFAULT_PAGE_SIZE),
                ..Default::default()
            }),
            filters: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            selected: RwSignal::new(HashSet::new()),
        }
    }

    pub fn request_path(&self) -> String {
        let query = self.query.get_untracked();
        self.filters
            .with_untracked(|filters| list_request_path(self.endpoint, &query, filters))
    }

    async fn load(self) {
        let path = self.request_path();
        self.loading.set(true);
        match get_json::<ListResponse<T>>(&path).await {
            Ok(response) => {
                self.items.set(response.items);
                self.meta.set(response.meta);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("failed to load {}: {}", self.endpoint, e);
                self.error.set(Some(e));
            }
        }
        self.loading.set(false);
    }

    pub fn fetch(&self) {
        spawn_local(self.load());
    }

    /// 0-indexed page as used by `PaginationControls`
    pub fn current_page(&self) -> usize {
        self.meta.with(|m| m.page.saturating_sub(1) as usize)
    }

    pub fn total_pages(&self) -> usize {
        self.meta.with(|m| m.total_pages as usize)
    }

    pub fn total_count(&self) -> usize {
        self.meta.with(|m| m.total as usize)
    }

    pub fn page_size(&self) -> usize {
        self.query
            .with(|q| q.page_size.unwrap_or(DEFAULT_PAGE_SIZE) as usize)
    }

    pub fn set_page(&self, page: usize) {
        self.query.update(|q| q.page = Some(page as u64 + 1));
        self.fetch();
    }

    pub fn set_page_size(&self, size: usize) {
        self.query.update(|q| {
            q.page_size = Some(size as u64);
            q.page = Some(1);
        });
        self.fetch();
    }

    pub fn set_search(&self, text: String) {
        self.query.update(|q| {
            q.q = Some(text).filter(|t| !t.trim().is_empty());
            q.page = Some(1);
        });
        self.fetch();
    }

    pub fn set_date_range(&self, start: Option<String>, end: Option<String>) {
        self.query.update(|q| {
            q.start_date = start.filter(|s| !s.is_empty());
            q.end_date = end.filter(|s| !s.is_empty());
            q.page = Some(1);
        });
        self.fetch();
    }

    /// Sets or clears one extra filter and reloads from the first page
    pub fn set_filter(&self, key: &'static str, value: Option<String>) {
        self.filters.update(|filters| {
            filters.retain(|(k, _)| *k != key);
            if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
                filters.push((key, v));
            }
        });
        self.query.update(|q| q.page = Some(1));
        self.fetch();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.with(|s| s.contains(id))
    }

    pub fn toggle(&self, id: String, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    }

    pub fn set_all(&self, ids: Vec<String>, checked: bool) {
        self.selected.update(|s| {
            for id in ids {
                if checked {
                    s.insert(id);
                } else {
                    s.remove(&id);
                }
            }
        });
    }

    /// Deletes the selected rows one by one after a confirmation.
    ///
    /// Rows the backend refuses (still referenced, posted) stay selected
    /// and their messages are shown as the list error.
    pub fn delete_selected(&self) {
        let ids: Vec<String> = self.selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} selected record(s)?", ids.len()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let this = *self;
        spawn_local(async move {
            let mut failures = Vec::new();
            for id in ids {
                match delete(&format!("{}/{}", this.endpoint, id)).await {
                    Ok(()) => this.selected.update(|s| {
                        s.remove(&id);
                    }),
                    Err(e) => failures.push(e),
                }
            }
            this.load().await;
            if !failures.is_empty() {
                this.error.set(Some(failures.join("; ")));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_path_includes_filters() {
        let query = ListQuery {
            page: Some(2),
            page_size: Some(25),
            q: Some("blue".into()),
            ..Default::default()
        };
        let path = list_request_path("/api/a002_product", &query, &[("account_ref", "x1".into())]);
        assert_eq!(path, "/api/a002_product?page=2&page_size=25&q=blue&account_ref=x1");
    }

    #[test]
    fn test_list_request_path_without_params() {
        assert_eq!(
            list_request_path("/api/a001_supplier", &ListQuery::default(), &[]),
            "/api/a001_supplier"
        );
    }
}
