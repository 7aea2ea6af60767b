//! Persistence seam used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, PaletteRepo, ProjectRepo};
use crate::models::{NewPalette, NewProject, Palette, Project};

/// Everything the route handlers need from persistence.
///
/// Each method maps to a single statement; there are no multi-step
/// operations and no transactions.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, DbError>;

    /// Returns the generated id.
    async fn create_project(&self, project: &NewProject) -> Result<i32, DbError>;

    async fn find_project(&self, id: i32) -> Result<Vec<Project>, DbError>;

    async fn list_palettes(&self) -> Result<Vec<Palette>, DbError>;

    /// Returns the generated id.
    async fn create_palette(&self, palette: &NewPalette) -> Result<i32, DbError>;

    /// Returns the number of rows deleted.
    async fn delete_palette(&self, id: i32) -> Result<u64, DbError>;

    async fn project_palettes(&self, project_id: i32) -> Result<Vec<Palette>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_projects(&self) -> Result<Vec<Project>, DbError> {
        ProjectRepo::new(&self.pool).list().await
    }

    async fn create_project(&self, project: &NewProject) -> Result<i32, DbError> {
        ProjectRepo::new(&self.pool).create(project).await
    }

    async fn find_project(&self, id: i32) -> Result<Vec<Project>, DbError> {
        ProjectRepo::new(&self.pool).find(id).await
    }

    async fn list_palettes(&self) -> Result<Vec<Palette>, DbError> {
        PaletteRepo::new(&self.pool).list().await
    }

    async fn create_palette(&self, palette: &NewPalette) -> Result<i32, DbError> {
        PaletteRepo::new(&self.pool).create(palette).await
    }

    async fn delete_palette(&self, id: i32) -> Result<u64, DbError> {
        PaletteRepo::new(&self.pool).delete(id).await
    }

    async fn project_palettes(&self, project_id: i32) -> Result<Vec<Palette>, DbError> {
        PaletteRepo::new(&self.pool).for_project(project_id).await
    }
}
