//! CLI subcommand implementations.

pub mod between;
pub mod convert;
pub mod fields;
pub mod parse;
pub mod render;
pub mod tuple;
