//! `despacho-model` defines the core filing-record data structures.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the consolidation/distribution engine
//! - the spreadsheet import/export layer
//! - the Tauri/IPC boundary via `serde` (JSON-safe schema)

pub mod dates;
mod display;
mod types;

pub use dates::{parse_received, parse_start_date, DateParseError};
pub use display::truncate_with_ellipsis;
pub use types::{FilingRecord, ListadoEntry, MergedEntry};
