//! # benchtab
//!
//! Turns the textual log output of a graph-clustering benchmark run into
//! CSV tables for downstream analysis.
//!
//! The pipeline is read-before-write: [`parse`] consumes raw log text and
//! produces a [`LogTable`] (graph name, in first-seen order, mapped to the
//! result records emitted for that graph), and [`dispatch`] decides whether
//! the table is written as one combined CSV or one CSV per graph, handing
//! the rendered text to a [`TableSink`] for persistence.
//!
//! ## Modules
//!
//! - [`record`] - Result records and the ordered graph table
//! - [`parser`] - Line-pattern state machine over the raw log
//! - [`table`] - CSV rendering
//! - [`dispatch`] - Output-mode decision and sink hand-off
//!
//! This crate performs no filesystem I/O; reading the log and persisting
//! tables belong to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod error;
pub mod parser;
pub mod record;
pub mod table;

pub use dispatch::{TableSink, dispatch};
pub use error::{Error, Result};
pub use parser::parse;
pub use record::{COLUMNS, LogTable, ResultRecord};
pub use table::render_csv;
