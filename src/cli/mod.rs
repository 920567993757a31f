//! Command implementations for the `gwalk` binary.

pub mod commands;
