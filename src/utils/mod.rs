//! Command line and configuration plumbing.

pub mod cli;
pub mod config;
