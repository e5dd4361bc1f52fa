//! Command modules for the PR label check CLI.
//!
//! - `check_cmd`: runs the label check against a pull request

pub mod check_cmd;
