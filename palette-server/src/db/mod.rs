//! Database layer - connection pool, schema bootstrap and repositories
//!
//! Handlers never touch the pool directly; they go through [`Store`], which
//! [`PgStore`] implements on top of the repositories.

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, PaletteRepo, ProjectRepo};
pub use store::{PgStore, Store};
