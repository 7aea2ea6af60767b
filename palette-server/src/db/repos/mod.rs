//! Repository implementations for database access
//!
//! One repository per table. Every method issues exactly one statement.

pub mod palettes;
pub mod projects;

pub use palettes::PaletteRepo;
pub use projects::ProjectRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
