//! Generic CRUD and grid-search execution against PostgreSQL.

use crate::error::AppError;
use crate::grid::{ExpandedGridSearch, GridResponse, GridSearch, SelectedColumns, StandardParams};
use crate::model::GridEntity;
use crate::service::validate_paging;
use crate::sql::{delete_by_id, grid_count, grid_select, select_all, select_by_id};
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// Full table, mapped to detail shapes, in id order.
    pub async fn get_all<E: GridEntity>(pool: &PgPool) -> Result<Vec<E::Dto>, AppError> {
        let sql = select_all(E::TABLE, E::SELECT_LIST);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<E> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Single row by id. Absence is a `NotFound` error, not a null payload.
    pub async fn get_by_id<E: GridEntity>(pool: &PgPool, id: i32) -> Result<E::Dto, AppError> {
        let sql = select_by_id(E::TABLE, E::SELECT_LIST);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<E> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        row.map(Into::into)
            .ok_or_else(|| AppError::not_found(E::KIND, id))
    }

    /// Insert, then return the freshly loaded complete list.
    pub async fn create<E: GridEntity>(
        pool: &PgPool,
        input: E::Create,
    ) -> Result<Vec<E::Dto>, AppError> {
        let created = E::insert(pool, &input).await?;
        tracing::debug!(kind = E::KIND, id = created.id(), "created");
        Self::get_all::<E>(pool).await
    }

    /// Overwrite every mutable field of the row with the input's id.
    pub async fn update<E: GridEntity>(pool: &PgPool, input: E::Update) -> Result<E::Dto, AppError> {
        let id = E::update_id(&input);
        let row = E::update_row(pool, &input).await?;
        row.map(Into::into)
            .ok_or_else(|| AppError::not_found(E::KIND, id))
    }

    /// Remove the row, then return the refreshed complete list.
    pub async fn delete<E: GridEntity>(pool: &PgPool, id: i32) -> Result<Vec<E::Dto>, AppError> {
        let sql = delete_by_id(E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(E::KIND, id));
        }
        Self::get_all::<E>(pool).await
    }

    /// Standard variant: ascending order only; unknown sort keys fall back to
    /// ordering by id.
    pub async fn search_standard<E: GridEntity>(
        pool: &PgPool,
        params: StandardParams,
    ) -> Result<GridResponse<E::Dto>, AppError> {
        validate_paging(params.page, params.page_size)?;
        let order = E::sort_column(&params.sort_by.to_lowercase())
            .map(|column| (column, true))
            .unwrap_or(("id", true));
        let filter = params.filter_by.as_deref().unwrap_or("");
        let (total_count, rows) =
            Self::grid_page::<E>(pool, filter, Some(order), params.page, params.page_size).await?;
        Ok(GridResponse {
            total_count,
            items: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// Generic variant: allow-listed sort with an explicit direction; unknown
    /// sort keys apply no ordering.
    pub async fn search_generic<E: GridEntity>(
        pool: &PgPool,
        search: GridSearch,
    ) -> Result<GridResponse<E::Dto>, AppError> {
        validate_paging(search.page, search.page_size)?;
        let order = E::sort_column(&search.sort_by.to_lowercase())
            .map(|column| (column, search.is_sort_asc));
        let (total_count, rows) =
            Self::grid_page::<E>(pool, &search.filter_by, order, search.page, search.page_size)
                .await?;
        Ok(GridResponse {
            total_count,
            items: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// Expanded variant: same filter/sort/paging as the generic one, rows
    /// projected down to the selected columns.
    pub async fn search_expanded<E: GridEntity>(
        pool: &PgPool,
        search: ExpandedGridSearch,
    ) -> Result<GridResponse<E::Projected>, AppError> {
        validate_paging(search.grid.page, search.grid.page_size)?;
        let order = E::sort_column(&search.grid.sort_by.to_lowercase())
            .map(|column| (column, search.grid.is_sort_asc));
        let (total_count, rows) = Self::grid_page::<E>(
            pool,
            &search.grid.filter_by,
            order,
            search.grid.page,
            search.grid.page_size,
        )
        .await?;
        let selected = SelectedColumns::new(&search.selected_columns);
        Ok(GridResponse {
            total_count,
            items: rows.iter().map(|row| row.project(&selected)).collect(),
        })
    }

    /// Count over the filtered set, then fetch the requested page.
    async fn grid_page<E: GridEntity>(
        pool: &PgPool,
        filter: &str,
        order: Option<(&str, bool)>,
        page: i64,
        page_size: i64,
    ) -> Result<(i64, Vec<E>), AppError> {
        let count = grid_count(E::TABLE, filter);
        tracing::debug!(sql = %count.sql, params = ?count.params, "query");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count.sql);
        for p in &count.params {
            count_query = count_query.bind(p.as_str());
        }
        let total_count = count_query.fetch_one(pool).await?;

        let select = grid_select(E::TABLE, E::SELECT_LIST, filter, order, page, page_size);
        tracing::debug!(sql = %select.sql, params = ?select.params, "query");
        let mut select_query = sqlx::query_as::<_, E>(&select.sql);
        for p in &select.params {
            select_query = select_query.bind(p.as_str());
        }
        let rows = select_query.fetch_all(pool).await?;
        Ok((total_count, rows))
    }
}
