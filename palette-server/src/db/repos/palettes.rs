//! Palette repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewPalette, Palette};

const COLUMNS: &str = "id, project_id, palette_name, color1, color2, color3, color4, color5";

/// Palette repository
pub struct PaletteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PaletteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All palettes, oldest first.
    pub async fn list(&self) -> Result<Vec<Palette>, DbError> {
        let palettes =
            sqlx::query_as::<_, Palette>(&format!("SELECT {COLUMNS} FROM palettes ORDER BY id"))
                .fetch_all(self.pool)
                .await?;

        Ok(palettes)
    }

    /// Insert a palette, returning the generated id.
    ///
    /// An unknown `project_id` surfaces as a foreign-key violation.
    pub async fn create(&self, palette: &NewPalette) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO palettes (project_id, palette_name, color1, color2, color3, color4, color5)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(palette.project_id)
        .bind(&palette.palette_name)
        .bind(&palette.color1)
        .bind(&palette.color2)
        .bind(&palette.color3)
        .bind(&palette.color4)
        .bind(&palette.color5)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Delete by id, returning the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM palettes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Palettes filed under `project_id`, oldest first.
    pub async fn for_project(&self, project_id: i32) -> Result<Vec<Palette>, DbError> {
        let palettes = sqlx::query_as::<_, Palette>(&format!(
            "SELECT {COLUMNS} FROM palettes WHERE project_id = $1 ORDER BY id"
        ))
        .bind(project_id)
        .fetch_all(self.pool)
        .await?;

        Ok(palettes)
    }
}
