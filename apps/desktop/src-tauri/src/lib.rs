//! Backend of the Despacho desktop shell.
//!
//! Everything here compiles and tests headless; the Tauri wiring lives in
//! `main.rs` behind the `desktop` feature.

pub mod commands;
pub mod state;
