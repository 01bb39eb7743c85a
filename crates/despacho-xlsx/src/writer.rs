//! Workbook output: the flat listado dump and rendered distribution
//! documents. Workbooks are serialized to a buffer and written atomically.

use chrono::NaiveDateTime;
use despacho_model::ListadoEntry;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

use crate::atomic::write_file_atomic;
use crate::document::{ListadoDocument, EMPTY_SECTION_MARKER, TABLE_HEADERS};

/// Character widths loosely matching the print layout's column proportions.
const COLUMN_WIDTHS: [f64; 5] = [42.0, 22.0, 12.0, 18.0, 18.0];

/// Straight dump of all loaded records: one "Listados" sheet, one row per
/// entry with the five fields in order, no header row.
pub fn write_listado_workbook(path: &Path, entries: &[ListadoEntry]) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Listados").map_err(xlsx_err)?;

    for (row, entry) in entries.iter().enumerate() {
        let row = row as u32;
        worksheet
            .write_string(row, 0, &entry.titulo)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 1, &entry.expediente)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 2, &entry.recibido)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 3, &entry.presentante)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 4, &entry.dias)
            .map_err(xlsx_err)?;
    }

    let bytes = workbook.save_to_buffer().map_err(xlsx_err)?;
    write_file_atomic(path, &bytes)
}

/// Render a distribution document as one worksheet per listado: a heading
/// line, a shaded header row, striped body rows, and an empty-section marker
/// when a recipient got nothing.
pub fn write_distribution_workbook(path: &Path, document: &ListadoDocument) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();

    let heading_format = Format::new().set_bold();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9D9D9))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let body_format = Format::new().set_border(FormatBorder::Thin);
    let stripe_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xF5F5F5));

    for (idx, section) in document.sections.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(format!("Listado {}", idx + 1))
            .map_err(xlsx_err)?;
        worksheet
            .write_string_with_format(0, 0, &section.heading, &heading_format)
            .map_err(xlsx_err)?;

        for (col, header) in TABLE_HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(2, col as u16, *header, &header_format)
                .map_err(xlsx_err)?;
        }

        if section.rows.is_empty() {
            worksheet
                .write_string(3, 0, EMPTY_SECTION_MARKER)
                .map_err(xlsx_err)?;
        }

        for (offset, row) in section.rows.iter().enumerate() {
            let format = if offset % 2 == 0 {
                &body_format
            } else {
                &stripe_format
            };
            for (col, value) in row.iter().enumerate() {
                worksheet
                    .write_string_with_format(3 + offset as u32, col as u16, value, format)
                    .map_err(xlsx_err)?;
            }
        }

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(xlsx_err)?;
        }
    }

    let bytes = workbook.save_to_buffer().map_err(xlsx_err)?;
    write_file_atomic(path, &bytes)
}

/// Export flavor, for default file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Listado,
    Distribution,
    Continuation,
}

/// Default export file name, stamped like the rest of the office's exports:
/// `proveyentes_05-08-2024_14-30hs.xlsx`.
pub fn default_filename(kind: ExportKind, now: NaiveDateTime) -> String {
    let prefix = match kind {
        ExportKind::Listado => "listado",
        ExportKind::Distribution => "proveyentes",
        ExportKind::Continuation => "proveyentes_continuo",
    };
    format!("{prefix}_{}hs.xlsx", now.format("%d-%m-%Y_%H-%M"))
}

fn xlsx_err(err: XlsxError) -> anyhow::Error {
    anyhow::anyhow!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{build_document, DateTag};
    use calamine::{open_workbook_auto, Data, Reader};
    use chrono::NaiveDate;
    use despacho_model::MergedEntry;
    use pretty_assertions::assert_eq;

    fn entry(n: usize) -> ListadoEntry {
        ListadoEntry {
            titulo: format!("Escrito {n}"),
            expediente: format!("E-{n}"),
            recibido: "05/08/24".to_string(),
            presentante: "PEREZ".to_string(),
            dias: "1 días al 06/08".to_string(),
        }
    }

    fn merged(n: usize) -> MergedEntry {
        MergedEntry {
            titulo: format!("Escrito {n}"),
            expediente: format!("E-{n}"),
            recibido: "05/08/24".to_string(),
            presentante: "PEREZ".to_string(),
            dias: "1 días al 06/08".to_string(),
            count: 1,
        }
    }

    #[test]
    fn listado_workbook_is_a_headerless_dump() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("listado.xlsx");
        write_listado_workbook(&path, &[entry(0), entry(1)]).expect("write");

        let mut workbook = open_workbook_auto(&path).expect("open");
        let range = workbook.worksheet_range("Listados").expect("range");
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Data::String("Escrito 0".to_string()));
        assert_eq!(rows[1][1], Data::String("E-1".to_string()));
        assert_eq!(rows[1][4], Data::String("1 días al 06/08".to_string()));
    }

    #[test]
    fn distribution_workbook_has_one_sheet_per_listado() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("proveyentes.xlsx");

        let groups = vec![vec![merged(0), merged(1)], Vec::new()];
        let document = build_document(&groups, DateTag::Repartidas);
        write_distribution_workbook(&path, &document).expect("write");

        let mut workbook = open_workbook_auto(&path).expect("open");
        assert_eq!(
            workbook.sheet_names().to_owned(),
            vec!["Listado 1".to_string(), "Listado 2".to_string()]
        );

        let first = workbook.worksheet_range("Listado 1").expect("range");
        let rows: Vec<&[Data]> = first.rows().collect();
        assert_eq!(
            rows[0][0],
            Data::String("Listado 1 (Fechas repartidas)".to_string())
        );
        assert_eq!(rows[2][0], Data::String("Título".to_string()));
        assert_eq!(rows[2][4], Data::String("Días corridos".to_string()));
        assert_eq!(rows[3][0], Data::String("Escrito 0".to_string()));
        assert_eq!(rows[4][0], Data::String("Escrito 1".to_string()));

        let second = workbook.worksheet_range("Listado 2").expect("range");
        let rows: Vec<&[Data]> = second.rows().collect();
        assert_eq!(rows[3][0], Data::String(EMPTY_SECTION_MARKER.to_string()));
    }

    #[test]
    fn default_filenames_follow_the_office_scheme() {
        let stamp = NaiveDate::from_ymd_opt(2024, 8, 5)
            .expect("date")
            .and_hms_opt(14, 30, 0)
            .expect("time");
        assert_eq!(
            default_filename(ExportKind::Listado, stamp),
            "listado_05-08-2024_14-30hs.xlsx"
        );
        assert_eq!(
            default_filename(ExportKind::Distribution, stamp),
            "proveyentes_05-08-2024_14-30hs.xlsx"
        );
        assert_eq!(
            default_filename(ExportKind::Continuation, stamp),
            "proveyentes_continuo_05-08-2024_14-30hs.xlsx"
        );
    }
}
