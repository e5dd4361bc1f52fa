//! # PR Label Check Core
//!
//! This crate holds the label policy for pull requests and the procedure that
//! enforces it against GitHub.
//!
//! ## Overview
//!
//! A check run:
//! 1. reads the labels on a pull request,
//! 2. when no primary `type::*` label is set, infers one from a semantic commit
//!    prefix (`feat: ...`, `fix(scope): ...`) in the title or head commit and
//!    applies it,
//! 3. validates the labels against the fixed taxonomy in [`taxonomy`].
//!
//! ## Examples
//!
//! ```no_run
//! use github_client::{create_token_client, GitHubClient};
//! use pr_label_check_core::{run_label_check, CheckOptions, PullRequestRef};
//! use secrecy::SecretString;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let token = SecretString::from("ghp_example".to_string());
//! let client = GitHubClient::new(create_token_client(&token, None)?);
//! let pr = PullRequestRef::new("octocat", "hello-world", 42);
//!
//! match run_label_check(&client, &pr, &CheckOptions::default()).await {
//!     Ok(outcome) => println!("Labels OK: {:?}", outcome.labels),
//!     Err(e) => eprintln!("Label check failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The procedure talks to GitHub only through the
//! [`github_client::PullRequestClient`] trait, so tests drive it with an
//! in-memory client.

pub mod check;
pub mod errors;
pub mod policy;
pub mod semantic;
pub mod taxonomy;

pub use check::{run_label_check, CheckOptions, CheckOutcome, PullRequestRef};
pub use errors::Error;
pub use policy::{validate_labels, PolicyViolation};
