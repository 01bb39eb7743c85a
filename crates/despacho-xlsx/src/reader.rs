//! Ingestion of the source presentaciones report.
//!
//! The reports carry a banner block above the actual column header, so the
//! header row is discovered by scanning the leading rows for the required
//! column labels instead of hard-coding an offset.

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use despacho_model::{dates, FilingRecord};
use std::path::Path;
use thiserror::Error;

/// Column labels the header row must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Título", "Expte", "Recibido", "Apellido", "Tipo"];

/// Leading rows scanned for the header before giving up.
const HEADER_SCAN_ROWS: usize = 16;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open workbook: {0}")]
    Open(#[from] calamine::Error),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("no header row with the required columns (Título, Expte, Recibido, Apellido, Tipo)")]
    MissingColumns,
}

struct Columns {
    titulo: usize,
    expediente: usize,
    recibido: usize,
    apellido: usize,
    tipo: usize,
}

/// Read the first worksheet of `path` into filing records.
///
/// String cells are trimmed; received dates are accepted as native date
/// cells or parsed from text under the accepted formats, and fall back to
/// missing rather than failing the load. Fully empty rows are skipped.
pub fn read_dataset(path: &Path) -> Result<Vec<FilingRecord>, ReadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ReadError::NoWorksheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let rows: Vec<&[Data]> = range.rows().collect();
    let (header_idx, columns) = find_header(&rows).ok_or(ReadError::MissingColumns)?;

    let mut records = Vec::new();
    for row in rows.iter().skip(header_idx + 1) {
        let titulo = text_at(row, columns.titulo);
        let expediente = text_at(row, columns.expediente);
        let presentante = text_at(row, columns.apellido);
        let tipo = text_at(row, columns.tipo);
        let recibido = date_at(row, columns.recibido);

        let recibido_blank = matches!(row.get(columns.recibido), None | Some(Data::Empty));
        if titulo.is_empty()
            && expediente.is_empty()
            && presentante.is_empty()
            && tipo.is_empty()
            && recibido_blank
        {
            continue;
        }

        records.push(FilingRecord {
            titulo,
            expediente,
            recibido,
            presentante,
            tipo,
        });
    }

    Ok(records)
}

fn find_header(rows: &[&[Data]]) -> Option<(usize, Columns)> {
    for (idx, row) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let labels: Vec<String> = row.iter().map(cell_text).collect();
        let position = |name: &str| labels.iter().position(|label| label == name);
        if let (Some(titulo), Some(expediente), Some(recibido), Some(apellido), Some(tipo)) = (
            position("Título"),
            position("Expte"),
            position("Recibido"),
            position("Apellido"),
            position("Tipo"),
        ) {
            return Some((
                idx,
                Columns {
                    titulo,
                    expediente,
                    recibido,
                    apellido,
                    tipo,
                },
            ));
        }
    }
    None
}

fn text_at(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_text).unwrap_or_default()
}

fn date_at(row: &[Data], idx: usize) -> Option<NaiveDate> {
    row.get(idx).and_then(cell_date)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|ndt| ndt.date()),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()),
        other => dates::parse_received(&cell_text(other)),
    }
}
