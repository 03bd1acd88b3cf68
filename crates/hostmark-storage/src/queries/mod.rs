//! SQL queries grouped by table.

pub mod annotation_runs;
pub mod attributes;
pub mod elements;
