//! Persistence entities and the capability trait the generic service is built over.

mod character;
mod product;

pub use character::{Character, RpgClass};
pub use product::Product;

use crate::error::AppError;
use crate::grid::SelectedColumns;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

/// Capability surface of a grid-searchable record kind: table and column
/// names for the SQL builder, transfer shapes for the handlers, and the typed
/// insert/update statements. One `CrudService` instantiation per implementor
/// replaces a hand-written service per kind.
#[async_trait]
pub trait GridEntity:
    for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin + Sized + 'static
{
    /// Kind name as it appears in routes and not-found messages.
    const KIND: &'static str;
    const TABLE: &'static str;
    /// Column list for SELECT/RETURNING, in table order.
    const SELECT_LIST: &'static str;

    /// Full detail transfer shape.
    type Dto: Serialize + From<Self> + Send + 'static;
    /// Create input; carries no id, the store assigns one.
    type Create: DeserializeOwned + Send + Sync + 'static;
    /// Update input; the full record including id.
    type Update: DeserializeOwned + Send + Sync + 'static;
    /// Row shape of the expanded (column-projected) search variant.
    type Projected: Serialize + Send + 'static;

    fn id(&self) -> i32;
    fn update_id(input: &Self::Update) -> i32;

    /// Allow-listed sort keys, keyed by lower-cased display name. Unknown
    /// keys yield `None`.
    fn sort_column(key: &str) -> Option<&'static str>;

    /// Projection for the expanded variant: id always, the remaining columns
    /// only when selected.
    fn project(&self, selected: &SelectedColumns) -> Self::Projected;

    async fn insert(pool: &PgPool, input: &Self::Create) -> Result<Self, AppError>;

    /// Overwrite every mutable field of the row carrying `input`'s id.
    /// Returns `None` when no such row exists. Never touches the id.
    async fn update_row(pool: &PgPool, input: &Self::Update) -> Result<Option<Self>, AppError>;
}
