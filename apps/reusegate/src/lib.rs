//! # ReuseGate Application Library
//!
//! Presentation boundary around `reusegate-core`: HTTP API, CLI, parameter
//! files and display formatting. Exposed as a library so integration tests
//! can build the router without starting a server.

pub mod api;
pub mod cli;
pub mod config;
pub mod format;
