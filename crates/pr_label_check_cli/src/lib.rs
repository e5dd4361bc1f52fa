//! PR label check CLI library exports for integration testing.
//!
//! This module exposes the command implementation and its supporting pieces.

pub mod commands;
pub mod config;
pub mod context;
pub mod errors;
pub mod logging;
pub mod report;
