//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod counters;
pub mod footer;
pub mod header;
pub mod logs;
pub mod student_table;
