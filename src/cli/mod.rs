//! Command implementations for the `lzmp` binary.

pub mod commands;
