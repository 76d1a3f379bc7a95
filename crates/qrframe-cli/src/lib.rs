//! qrframe CLI library
//!
//! Argument definitions and command implementations live here so the
//! parsing and style-resolution logic is testable without spawning the
//! binary.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, InfoArgs, RenderArgs};
