use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Database location, overridable via the INKPOST_DB environment variable.
pub fn db_path() -> String {
    std::env::var("INKPOST_DB").unwrap_or_else(|_| "site/db/inkpost.db".to_string())
}

pub fn init_pool() -> Result<DbPool, Box<dyn std::error::Error>> {
    let manager = SqliteConnectionManager::file(db_path());
    let pool = Pool::builder().max_size(10).build(manager)?;

    // Enable WAL mode for better concurrent read performance
    let conn = pool.get()?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    conn.execute_batch(
        "
        -- Blog posts
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            subtitle TEXT NOT NULL,
            date TEXT NOT NULL,
            body TEXT NOT NULL,
            author TEXT NOT NULL,
            img_url TEXT NOT NULL
        );
        ",
    )?;

    Ok(())
}
