/// Common test utilities and fixtures
use anyhow::Result;
use moody_storage::SqlitePool;
use tempfile::TempDir;

/// Create a test database with migrations applied.
///
/// The pool points at a real sqlite file inside the returned directory;
/// dropping the directory removes it.
pub async fn create_test_database() -> Result<(SqlitePool, TempDir)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}", db_path.display());

    let pool = moody_storage::create_pool(&url).await?;
    moody_storage::run_migrations(&pool).await?;

    Ok((pool, dir))
}
