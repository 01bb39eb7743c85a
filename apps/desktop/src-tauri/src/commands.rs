//! IPC command layer.
//!
//! Plain functions over `&mut AppState` so they stay testable headless; the
//! Tauri wiring in `main.rs` only adds the shell. Every outcome is a
//! structured result object with a status and message, never a raw error
//! bubbling to the frontend. File dialogs live in the frontend: commands
//! take explicit paths, and an empty path means the user aborted the
//! selection.

use chrono::Local;
use despacho_engine::{summarize, DatasetSummary, DistributionSession};
use despacho_model::dates;
use despacho_xlsx::{
    build_document, read_dataset, write_distribution_workbook, write_listado_workbook, DateTag,
};
use serde::Serialize;
use std::path::Path;

use crate::state::AppState;

const MSG_NO_FILE: &str = "No se ha seleccionado ningún archivo.";
const MSG_CANCELLED: &str = "Exportación cancelada por el usuario.";
const MSG_NO_DATA: &str = "No hay datos cargados para exportar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Cancelled,
    Error,
    NoFile,
    NoData,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadResult {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DatasetSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Bounded split only: anchor date for a follow-up continuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assigned_date: Option<String>,
    /// Bounded split only: raw rows consumed so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_index: Option<usize>,
}

impl ExportResult {
    fn ok(path: &str) -> Self {
        Self {
            status: Status::Ok,
            message: None,
            path: Some(path.to_string()),
            last_assigned_date: None,
            last_index: None,
        }
    }

    fn cancelled() -> Self {
        Self {
            status: Status::Cancelled,
            message: Some(MSG_CANCELLED.to_string()),
            path: None,
            last_assigned_date: None,
            last_index: None,
        }
    }

    fn no_data() -> Self {
        Self {
            status: Status::NoData,
            message: Some(MSG_NO_DATA.to_string()),
            path: None,
            last_assigned_date: None,
            last_index: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            path: None,
            last_assigned_date: None,
            last_index: None,
        }
    }
}

/// Load a dataset, replacing the previous session and its cursor, and
/// report summary statistics.
pub fn load_dataset(state: &mut AppState, path: &str) -> LoadResult {
    if path.trim().is_empty() {
        return LoadResult {
            status: Status::NoFile,
            message: Some(MSG_NO_FILE.to_string()),
            summary: None,
        };
    }

    match read_dataset(Path::new(path)) {
        Ok(records) => {
            tracing::info!(records = records.len(), path, "dataset loaded");
            let summary = summarize(&records, Local::now().date_naive());
            state.replace_session(DistributionSession::new(records));
            LoadResult {
                status: Status::Ok,
                message: None,
                summary: Some(summary),
            }
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "dataset load failed");
            LoadResult {
                status: Status::Error,
                message: Some(err.to_string()),
                summary: None,
            }
        }
    }
}

/// Export every loaded record as the flat listado workbook.
pub fn export_listado_excel(state: &mut AppState, path: &str) -> ExportResult {
    if path.trim().is_empty() {
        return ExportResult::cancelled();
    }
    let Ok(session) = state.session() else {
        return ExportResult::no_data();
    };

    let entries = match session.listados(Local::now().date_naive()) {
        Ok(entries) => entries,
        Err(err) => return ExportResult::error(err.to_string()),
    };

    match write_listado_workbook(Path::new(path), &entries) {
        Ok(()) => {
            tracing::info!(path, rows = entries.len(), "listado workbook exported");
            ExportResult::ok(path)
        }
        Err(err) => ExportResult::error(err.to_string()),
    }
}

/// Bounded split export: first `recipients * 15` raw rows, consolidated and
/// dealt round-robin. Reports the recorded continuation anchors on success.
pub fn export_distribution(state: &mut AppState, path: &str, recipients: i64) -> ExportResult {
    if path.trim().is_empty() {
        return ExportResult::cancelled();
    }
    let Ok(session) = state.session_mut() else {
        return ExportResult::no_data();
    };

    let today = Local::now().date_naive();
    let cursor_before = session.cursor();
    // A non-positive count falls through as zero and is rejected by the
    // engine's own validation.
    let recipients = usize::try_from(recipients).unwrap_or(0);
    let split = match session.split_initial(recipients, today) {
        Ok(split) => split,
        Err(err) => return ExportResult::error(err.to_string()),
    };

    let document = build_document(&split.groups, DateTag::Repartidas);
    if let Err(err) = write_distribution_workbook(Path::new(path), &document) {
        // The split already advanced the cursor; a failed export must leave
        // the session as if it never ran.
        session.restore_cursor(cursor_before);
        return ExportResult::error(err.to_string());
    }

    let cursor = session.cursor();
    tracing::info!(path, recipients, consumed = cursor.consumed, "distribution exported");
    ExportResult {
        last_assigned_date: cursor.last_assigned.map(dates::format_long),
        last_index: Some(cursor.consumed),
        ..ExportResult::ok(path)
    }
}

/// Continuation export: resume after the rows consumed by prior splits,
/// assigning correlative dates from `start_date` onwards.
pub fn export_distribution_continuation(
    state: &mut AppState,
    path: &str,
    start_date: &str,
    lists: i64,
) -> ExportResult {
    if path.trim().is_empty() {
        return ExportResult::cancelled();
    }
    let Ok(session) = state.session_mut() else {
        return ExportResult::no_data();
    };

    // Unlike per-row received dates, an unparseable start date is fatal.
    let start = match dates::parse_start_date(start_date) {
        Ok(start) => start,
        Err(err) => return ExportResult::error(err.to_string()),
    };

    let today = Local::now().date_naive();
    let cursor_before = session.cursor();
    let lists = usize::try_from(lists).unwrap_or(0);
    let split = match session.split_continuation(start, lists, today) {
        Ok(split) => split,
        Err(err) => return ExportResult::error(err.to_string()),
    };

    let document = build_document(&split.groups, DateTag::Continuas);
    if let Err(err) = write_distribution_workbook(Path::new(path), &document) {
        session.restore_cursor(cursor_before);
        return ExportResult::error(err.to_string());
    }

    tracing::info!(path, lists, consumed = split.consumed, "continuation exported");
    ExportResult::ok(path)
}
