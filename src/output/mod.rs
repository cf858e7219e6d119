//! Result presentation module

pub mod formatter;
pub mod report;
