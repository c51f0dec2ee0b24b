//! Integration tests for wp_perf_monitor
//!
//! These tests drive the public API end to end from a host export
//! written to a temporary file.
//! Run with: cargo test --test integration

mod helpers;

mod collect;
mod dashboard;
mod output;
