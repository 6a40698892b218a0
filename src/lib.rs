//! `gemini-bamboo` - Bamboo-compatible result aggregator for
//! visual-regression test runs.
//!
//! Subscribes to runner lifecycle events, buckets per-test outcomes into
//! passes/failures/skipped, and at end-of-run writes a `gemini-bamboo.json`
//! report plus a one-line colorized console summary.
//!
//! See `README.md` for user documentation and `DESIGN.md` for architecture.

pub mod cli;
pub mod console;
pub mod events;
pub mod model;
pub mod replay;
pub mod reporter;
