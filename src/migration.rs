//! Schema bootstrap: the `rpg_class` enum type and the two entity tables.

use crate::error::AppError;
use sqlx::PgPool;

const CHARACTERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS characters (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    hit_points INTEGER NOT NULL,
    strength INTEGER NOT NULL,
    defense INTEGER NOT NULL,
    intelligence INTEGER NOT NULL,
    class rpg_class NOT NULL
)
"#;

const PRODUCTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL
)
"#;

/// Create the enum type and tables if missing. Idempotent; safe to run on
/// every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    // CREATE TYPE has no IF NOT EXISTS; a pre-existing type is fine.
    let _ = sqlx::query("CREATE TYPE rpg_class AS ENUM ('knight', 'mage', 'cleric')")
        .execute(pool)
        .await;
    sqlx::query(CHARACTERS_DDL).execute(pool).await?;
    sqlx::query(PRODUCTS_DDL).execute(pool).await?;
    Ok(())
}
