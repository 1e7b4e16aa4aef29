//! Command-line interface: command implementations and the tutorial.

pub mod commands;
pub mod tutorial;
