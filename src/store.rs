//! Database bootstrap: create the target database when it is missing.

use crate::error::AppError;
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Create the database named in `database_url` if it does not exist yet,
/// by connecting to the maintenance `postgres` database. Run before the
/// main pool is opened.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }

    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;

    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        let ddl = format!("CREATE DATABASE \"{}\"", db_name.replace('"', "\"\""));
        sqlx::query(&ddl).execute(&mut conn).await?;
    }
    Ok(())
}

/// Split a connection URL into (same URL pointing at `postgres`, database name).
/// The database name is the final path segment, minus any query string.
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let slash = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no database path".into()))?;
    let tail = &url[slash + 1..];
    let db_name = tail.split('?').next().unwrap_or("").trim();
    Ok((format!("{}postgres", &url[..slash + 1]), db_name.to_string()))
}
