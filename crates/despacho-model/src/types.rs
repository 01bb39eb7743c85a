use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw filing as ingested from the source spreadsheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilingRecord {
    pub titulo: String,
    pub expediente: String,
    /// `None` when the source cell matched none of the accepted date formats.
    /// Aggregate statistics skip missing dates; the listado builder rejects
    /// them outright.
    pub recibido: Option<NaiveDate>,
    pub presentante: String,
    pub tipo: String,
}

/// Normalized five-field projection of a filing, one per record, used by
/// every downstream export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListadoEntry {
    pub titulo: String,
    pub expediente: String,
    /// Received date formatted `dd/mm/yy`.
    pub recibido: String,
    pub presentante: String,
    /// Aging label, e.g. `"12 días al 05/08"`.
    pub dias: String,
}

/// One or more listado entries for the same expediente collapsed into a
/// single display row. `recibido`, `presentante` and `dias` come from the
/// first occurrence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub titulo: String,
    pub expediente: String,
    pub recibido: String,
    pub presentante: String,
    pub dias: String,
    /// Number of entries collapsed into this row (>= 1).
    pub count: usize,
}
