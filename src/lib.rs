//! Headless core of an AI-agent evaluation analytics dashboard.
//!
//! Two pieces of real logic live here. The [`runner`] module drives a staged
//! mock evaluation job to a synthesized [`outcome::EvaluationResult`], and the
//! [`selection`] module reshapes a selected set of taxonomies or use cases
//! into table, bar, radar, and time-series projections. Everything else
//! ([`catalog`] and [`summary`]) is fixed backing data behind pure accessors,
//! consumed by presentation collaborators.
//!
//! The crate performs no network I/O and persists nothing; each page mount
//! owns one [`runner::EvalRunner`] and one [`selection::SelectionModel`] and
//! discards them on navigation.

pub mod catalog;
pub mod logging;
pub mod outcome;
pub mod runner;
pub mod selection;
pub mod summary;
