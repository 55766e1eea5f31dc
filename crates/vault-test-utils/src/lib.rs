//! Shared test fixtures for the vaultwatch workspace.
//!
//! This crate provides standardised vault/repository fixtures to
//! eliminate duplication across crate test suites. It is a
//! dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures with local bare remotes

pub mod git;
