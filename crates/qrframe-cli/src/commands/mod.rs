//! Command dispatch

pub mod info;
pub mod render;
