//! Builds parameterized SELECT, COUNT, and DELETE statements for grid and CRUD queries.
//!
//! Table and column names only ever come from the `GridEntity` constants and
//! sort allow-lists, never from request input; the filter string is always a
//! bind parameter.

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// LIKE pattern matching rows whose name contains `filter` as a substring.
/// `\`, `%` and `_` in the input are escaped so they match literally.
pub fn like_pattern(filter: &str) -> String {
    let escaped = filter
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// SELECT the whole table, ordered by id.
pub fn select_all(table: &str, select_list: &str) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_list,
        quoted(table),
        quoted("id")
    )
}

/// SELECT a single row by id. Caller binds the id as sole parameter.
pub fn select_by_id(table: &str, select_list: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_list,
        quoted(table),
        quoted("id")
    )
}

/// DELETE a single row by id. Caller binds the id as sole parameter.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted("id"))
}

/// Filtered, sorted, paginated page SELECT.
///
/// `order` is `(column, ascending)` where the column has already passed the
/// kind's allow-list; `None` applies no ordering. Pagination is
/// `OFFSET (page-1)*page_size LIMIT page_size`; callers validate that both
/// values are at least 1.
pub fn grid_select(
    table: &str,
    select_list: &str,
    filter: &str,
    order: Option<(&str, bool)>,
    page: i64,
    page_size: i64,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", select_list, quoted(table));
    push_filter(&mut q, filter);
    if let Some((column, ascending)) = order {
        let dir = if ascending { "ASC" } else { "DESC" };
        q.sql
            .push_str(&format!(" ORDER BY {} {}", quoted(column), dir));
    }
    q.sql.push_str(&format!(
        " LIMIT {} OFFSET {}",
        page_size,
        (page - 1) * page_size
    ));
    q
}

/// COUNT over the same filter as `grid_select`, before pagination.
pub fn grid_count(table: &str, filter: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", quoted(table));
    push_filter(&mut q, filter);
    q
}

fn push_filter(q: &mut QueryBuf, filter: &str) {
    if !filter.is_empty() {
        let n = q.push_param(like_pattern(filter));
        q.sql
            .push_str(&format!(" WHERE {} LIKE ${}", quoted("name"), n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_orders_by_id() {
        assert_eq!(
            select_all("products", "id, name, price"),
            "SELECT id, name, price FROM \"products\" ORDER BY \"id\""
        );
    }

    #[test]
    fn select_by_id_binds_single_param() {
        assert_eq!(
            select_by_id("characters", "id, name"),
            "SELECT id, name FROM \"characters\" WHERE \"id\" = $1"
        );
    }

    #[test]
    fn grid_select_unfiltered_unsorted() {
        let q = grid_select("characters", "id, name", "", None, 1, 10);
        assert_eq!(q.sql, "SELECT id, name FROM \"characters\" LIMIT 10 OFFSET 0");
        assert!(q.params.is_empty());
    }

    #[test]
    fn grid_select_full() {
        let q = grid_select(
            "characters",
            "id, name",
            "Aria",
            Some(("hit_points", false)),
            2,
            25,
        );
        assert_eq!(
            q.sql,
            "SELECT id, name FROM \"characters\" WHERE \"name\" LIKE $1 \
             ORDER BY \"hit_points\" DESC LIMIT 25 OFFSET 25"
        );
        assert_eq!(q.params, vec!["%Aria%"]);
    }

    #[test]
    fn grid_select_ascending() {
        let q = grid_select("products", "id, name, price", "", Some(("price", true)), 1, 5);
        assert_eq!(
            q.sql,
            "SELECT id, name, price FROM \"products\" ORDER BY \"price\" ASC LIMIT 5 OFFSET 0"
        );
    }

    #[test]
    fn grid_count_shares_the_filter() {
        let q = grid_count("products", "Sword");
        assert_eq!(q.sql, "SELECT COUNT(*) FROM \"products\" WHERE \"name\" LIKE $1");
        assert_eq!(q.params, vec!["%Sword%"]);

        let q = grid_count("products", "");
        assert_eq!(q.sql, "SELECT COUNT(*) FROM \"products\"");
        assert!(q.params.is_empty());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Aria"), "%Aria%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
