//! Table bootstrap for projects and palettes
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each
//! start and from `palette-picker migrate`.

use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id SERIAL PRIMARY KEY,
        project_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS palettes (
        id SERIAL PRIMARY KEY,
        project_id INTEGER REFERENCES projects(id),
        palette_name TEXT NOT NULL,
        color1 TEXT NOT NULL,
        color2 TEXT NOT NULL,
        color3 TEXT NOT NULL,
        color4 TEXT NOT NULL,
        color5 TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_palettes_project_id ON palettes(project_id)",
];

/// Create the `projects` and `palettes` tables if they don't exist.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Bootstrapping schema...");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema ready");
    Ok(())
}
