//! Render model for distribution exports.
//!
//! A [`ListadoDocument`] is the contract between the distribution engine's
//! output groups and whatever sink prints them (the workbook writer here, a
//! PDF collaborator elsewhere): section headings, fixed column order and
//! presentation truncation are all settled at this layer.

use despacho_model::{truncate_with_ellipsis, MergedEntry};

/// Column headers of a rendered listado table.
pub const TABLE_HEADERS: [&str; 5] = [
    "Título",
    "Expediente",
    "Fecha",
    "Presentante",
    "Días corridos",
];

/// Column-width display caps. Applied at render time only; independent of
/// the consolidation engine's title truncation, which is already baked into
/// merged titles.
pub const TITLE_COLUMN_MAX: usize = 42;
pub const PRESENTANTE_COLUMN_MAX: usize = 15;

/// Marker rendered for a recipient with no assigned rows.
pub const EMPTY_SECTION_MARKER: &str = "Sin registros asignados.";

/// Date-allocation flavor shown in the section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTag {
    /// Bounded split: dates as received ("Fechas repartidas").
    Repartidas,
    /// Continuation split with correlative dates ("Fechas continuas").
    Continuas,
}

impl DateTag {
    pub fn label(self) -> &'static str {
        match self {
            DateTag::Repartidas => "Fechas repartidas",
            DateTag::Continuas => "Fechas continuas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListadoSection {
    pub heading: String,
    /// Rendered cells in [`TABLE_HEADERS`] order.
    pub rows: Vec<[String; 5]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListadoDocument {
    pub sections: Vec<ListadoSection>,
}

/// Render distribution groups into a document, one section per recipient.
pub fn build_document(groups: &[Vec<MergedEntry>], tag: DateTag) -> ListadoDocument {
    let sections = groups
        .iter()
        .enumerate()
        .map(|(idx, group)| ListadoSection {
            heading: format!("Listado {} ({})", idx + 1, tag.label()),
            rows: group.iter().map(render_row).collect(),
        })
        .collect();
    ListadoDocument { sections }
}

fn render_row(row: &MergedEntry) -> [String; 5] {
    [
        truncate_with_ellipsis(&row.titulo, TITLE_COLUMN_MAX),
        row.expediente.clone(),
        row.recibido.clone(),
        truncate_with_ellipsis(&row.presentante, PRESENTANTE_COLUMN_MAX),
        row.dias.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn merged(titulo: &str, presentante: &str) -> MergedEntry {
        MergedEntry {
            titulo: titulo.to_string(),
            expediente: "E-1".to_string(),
            recibido: "05/08/24".to_string(),
            presentante: presentante.to_string(),
            dias: "1 días al 06/08".to_string(),
            count: 1,
        }
    }

    #[test]
    fn sections_are_numbered_and_tagged() {
        let groups = vec![vec![merged("Oficio", "PEREZ")], Vec::new()];
        let document = build_document(&groups, DateTag::Repartidas);
        assert_eq!(document.sections.len(), 2);
        assert_eq!(document.sections[0].heading, "Listado 1 (Fechas repartidas)");
        assert_eq!(document.sections[1].heading, "Listado 2 (Fechas repartidas)");
        assert!(document.sections[1].rows.is_empty());

        let continuas = build_document(&groups, DateTag::Continuas);
        assert_eq!(continuas.sections[0].heading, "Listado 1 (Fechas continuas)");
    }

    #[test]
    fn rows_apply_presentation_truncation() {
        let long_title = "Contestación de demanda con ofrecimiento de prueba";
        let long_name = "FERNANDEZ DE LA VEGA Y ASOCIADOS";
        let document = build_document(
            &[vec![merged(long_title, long_name)]],
            DateTag::Repartidas,
        );

        let row = &document.sections[0].rows[0];
        assert!(row[0].ends_with("..."));
        assert_eq!(row[0].chars().count(), TITLE_COLUMN_MAX + 3);
        assert!(row[3].ends_with("..."));
        assert_eq!(row[3].chars().count(), PRESENTANTE_COLUMN_MAX + 3);
        assert_eq!(row[1], "E-1");
        assert_eq!(row[2], "05/08/24");
        assert_eq!(row[4], "1 días al 06/08");
    }
}
