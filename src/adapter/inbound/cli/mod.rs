//! CLI module graph.

pub mod command;
pub mod config;
pub mod output;
pub mod select;
