//! Library components of the `tracker-import` CLI.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;
