//! Command implementations

pub mod lifecycle;
