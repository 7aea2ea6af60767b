//! Projects - named groups of palettes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RequestSchema;

/// Project row. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Project {
    pub id: i32,
    pub project_name: String,
}

/// POST /api/v1/projects body
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub project_name: String,
}

impl RequestSchema for NewProject {
    const REQUIRED: &'static [&'static str] = &["project_name"];
    const EXPECTED_FORMAT: &'static str = "{ project_name: <String> }";
}

impl NewProject {
    /// Response body for a freshly inserted row.
    pub fn into_project(self, id: i32) -> Project {
        Project {
            id,
            project_name: self.project_name,
        }
    }
}
