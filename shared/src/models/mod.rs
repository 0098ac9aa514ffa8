//! Data models
//!
//! All IDs are `i64`, assigned by the record store starting at 1.

pub mod lunch_order;
pub mod office_tally;

// Re-exports
pub use lunch_order::*;
pub use office_tally::*;
