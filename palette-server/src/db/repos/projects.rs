//! Project repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewProject, Project};

/// Project repository
pub struct ProjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All projects, oldest first.
    pub async fn list(&self) -> Result<Vec<Project>, DbError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, project_name FROM projects ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }

    /// Insert a project, returning the generated id.
    pub async fn create(&self, project: &NewProject) -> Result<i32, DbError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO projects (project_name) VALUES ($1) RETURNING id")
                .bind(&project.project_name)
                .fetch_one(self.pool)
                .await?;

        Ok(id)
    }

    /// Rows matching `id`. Empty when there is no such project.
    pub async fn find(&self, id: i32) -> Result<Vec<Project>, DbError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, project_name FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }
}
