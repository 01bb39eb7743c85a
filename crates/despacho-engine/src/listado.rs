//! Projection of raw filings into listado entries.

use chrono::NaiveDate;
use despacho_model::{dates, FilingRecord, ListadoEntry};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListadoError {
    #[error("row {row}: missing required field {field}")]
    MissingField { row: usize, field: &'static str },
}

/// Project raw records into listado entries, preserving input order.
///
/// A malformed record fails the whole build: a dataset with holes must not
/// silently produce corrupt listings. `today` is the export timestamp the
/// aging labels are computed against.
pub fn build_listados(
    records: &[FilingRecord],
    today: NaiveDate,
) -> Result<Vec<ListadoEntry>, ListadoError> {
    let day_month = dates::format_day_month(today);
    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            if record.titulo.trim().is_empty() {
                return Err(ListadoError::MissingField {
                    row,
                    field: "Título",
                });
            }
            if record.expediente.trim().is_empty() {
                return Err(ListadoError::MissingField { row, field: "Expte" });
            }
            if record.presentante.trim().is_empty() {
                return Err(ListadoError::MissingField {
                    row,
                    field: "Apellido",
                });
            }
            let recibido = record.recibido.ok_or(ListadoError::MissingField {
                row,
                field: "Recibido",
            })?;

            let outstanding = (today - recibido).num_days();
            Ok(ListadoEntry {
                titulo: record.titulo.clone(),
                expediente: record.expediente.clone(),
                recibido: dates::format_short(recibido),
                presentante: record.presentante.clone(),
                dias: format!("{outstanding} días al {day_month}"),
            })
        })
        .collect()
}
