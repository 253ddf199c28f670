//! tdelta CLI library.
//!
//! This crate provides the command-line interface for the duration parser.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, OutputArgs, OutputFormat};
pub use config::Config;
