//! Row types and request schemas
//!
//! Request bodies are checked for presence first (see [`validation`]) and
//! then decoded into the typed schema for their endpoint.

pub mod palette;
pub mod project;
pub mod validation;

pub use palette::{CreatedPalette, NewPalette, Palette};
pub use project::{NewProject, Project};
pub use validation::{RequestSchema, ValidationError};
