//! Grid search requests and responses shared by all record kinds.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parameterized request for a filtered, sorted, paginated slice.
/// `sort_by` is matched case-insensitively against the kind's allow-list;
/// an empty `filter_by` means no filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSearch {
    pub page: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub filter_by: String,
    pub is_sort_asc: bool,
}

impl Default for GridSearch {
    fn default() -> Self {
        GridSearch {
            page: 1,
            page_size: 10,
            sort_by: "Name".into(),
            filter_by: String::new(),
            is_sort_asc: true,
        }
    }
}

/// Grid search plus the set of columns the caller wants projected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedGridSearch {
    #[serde(flatten)]
    pub grid: GridSearch,
    #[serde(default)]
    pub selected_columns: Vec<String>,
}

/// Query parameters of the standard (GET) search variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    pub filter_by: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

fn default_sort_by() -> String {
    "Name".into()
}

/// Total count is over the filtered set, before pagination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse<T> {
    pub total_count: i64,
    pub items: Vec<T>,
}

/// Requested projection columns, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct SelectedColumns(HashSet<String>);

impl SelectedColumns {
    pub fn new(columns: &[String]) -> Self {
        SelectedColumns(columns.iter().map(|c| c.to_lowercase()).collect())
    }

    /// `column` must already be lower-case.
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grid_search_defaults() {
        let search: GridSearch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(search.page, 1);
        assert_eq!(search.page_size, 10);
        assert_eq!(search.sort_by, "Name");
        assert_eq!(search.filter_by, "");
        assert!(search.is_sort_asc);
    }

    #[test]
    fn grid_search_camel_case_fields() {
        let search: GridSearch = serde_json::from_value(json!({
            "page": 2,
            "pageSize": 25,
            "sortBy": "hitpoints",
            "filterBy": "Aria",
            "isSortAsc": false
        }))
        .unwrap();
        assert_eq!(search.page, 2);
        assert_eq!(search.page_size, 25);
        assert_eq!(search.sort_by, "hitpoints");
        assert_eq!(search.filter_by, "Aria");
        assert!(!search.is_sort_asc);
    }

    #[test]
    fn expanded_search_flattens_grid_fields() {
        let search: ExpandedGridSearch = serde_json::from_value(json!({
            "page": 3,
            "pageSize": 5,
            "selectedColumns": ["Name", "HitPoints"]
        }))
        .unwrap();
        assert_eq!(search.grid.page, 3);
        assert_eq!(search.grid.page_size, 5);
        assert_eq!(search.selected_columns, vec!["Name", "HitPoints"]);
    }

    #[test]
    fn expanded_search_columns_default_empty() {
        let search: ExpandedGridSearch = serde_json::from_value(json!({})).unwrap();
        assert!(search.selected_columns.is_empty());
    }

    #[test]
    fn selected_columns_match_case_insensitively() {
        let cols = SelectedColumns::new(&["Name".into(), "HitPoints".into()]);
        assert!(cols.contains("name"));
        assert!(cols.contains("hitpoints"));
        assert!(!cols.contains("price"));
    }

    #[test]
    fn grid_response_serializes_camel_case() {
        let body = serde_json::to_value(GridResponse {
            total_count: 2,
            items: vec!["a", "b"],
        })
        .unwrap();
        assert_eq!(body, json!({"totalCount": 2, "items": ["a", "b"]}));
    }
}
