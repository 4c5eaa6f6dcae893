//! Shared utilities

pub mod config;
pub mod logging;
pub mod process;

pub use config::{BuildOptions, LogLevel, PluginOptions, ResolveOptions};
pub use process::ProcessBuilder;
