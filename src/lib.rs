//! Threadmark - per-user read tracking for forum threads.
//!
//! This crate tracks whether a discussion thread is unread or updated for a
//! given user, records read events, and computes a thread's derived display
//! attributes (routes, pagination, last-post info). Storage, authorization
//! and configuration are reached through explicit ports.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the tracker and presenter services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and in-memory adapters.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "threadmark";
