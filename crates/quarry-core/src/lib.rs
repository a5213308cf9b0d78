//! Core types and trait definitions for the Quarry job-search tracker.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod application;
pub mod follow_up;
pub mod job;
pub mod patch;
pub mod saved_job;
pub mod store;
pub mod template;
pub mod views;
