//! In-memory [`Store`] for router tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::Store;
use crate::models::{NewPalette, NewProject, Palette, Project};

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    palettes: Vec<Palette>,
    next_project_id: i32,
    next_palette_id: i32,
}

/// Vec-backed store mirroring the PostgreSQL semantics the handlers rely on.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a dropped connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DbError> {
        if self.failing {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>, DbError> {
        self.check()?;
        Ok(self.tables.read().await.projects.clone())
    }

    async fn create_project(&self, project: &NewProject) -> Result<i32, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables.next_project_id += 1;
        let id = tables.next_project_id;
        tables.projects.push(project.clone().into_project(id));
        Ok(id)
    }

    async fn find_project(&self, id: i32) -> Result<Vec<Project>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().filter(|p| p.id == id).cloned().collect())
    }

    async fn list_palettes(&self) -> Result<Vec<Palette>, DbError> {
        self.check()?;
        Ok(self.tables.read().await.palettes.clone())
    }

    async fn create_palette(&self, palette: &NewPalette) -> Result<i32, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        if let Some(project_id) = palette.project_id {
            if !tables.projects.iter().any(|p| p.id == project_id) {
                return Err(DbError::Sqlx(sqlx::Error::RowNotFound));
            }
        }
        tables.next_palette_id += 1;
        let id = tables.next_palette_id;
        tables.palettes.push(palette.clone().into_palette(id));
        Ok(id)
    }

    async fn delete_palette(&self, id: i32) -> Result<u64, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let before = tables.palettes.len();
        tables.palettes.retain(|p| p.id != id);
        Ok((before - tables.palettes.len()) as u64)
    }

    async fn project_palettes(&self, project_id: i32) -> Result<Vec<Palette>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .palettes
            .iter()
            .filter(|p| p.project_id == Some(project_id))
            .cloned()
            .collect())
    }
}
