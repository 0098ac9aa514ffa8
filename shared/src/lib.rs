//! Shared types for the lunch log
//!
//! Record models written by `lunch-store` and produced by the forms in
//! `lunch-tui`.

pub mod models;

// Re-exports
pub use models::*;
pub use serde::{Deserialize, Serialize};
