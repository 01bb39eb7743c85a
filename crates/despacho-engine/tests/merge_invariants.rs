//! Property coverage for the consolidation and distribution invariants.

use despacho_engine::consolidate::{merge_by_expediente, TITLE_DISPLAY_MAX};
use despacho_engine::distribute::split_initial;
use despacho_model::ListadoEntry;
use proptest::prelude::*;

fn entry(titulo: String, expediente: String) -> ListadoEntry {
    ListadoEntry {
        titulo,
        expediente,
        recibido: "05/08/24".to_string(),
        presentante: "PEREZ".to_string(),
        dias: "1 días al 06/08".to_string(),
    }
}

proptest! {
    #[test]
    fn merge_preserves_row_mass_and_first_seen_order(
        raw in prop::collection::vec((0usize..8, "[A-Za-zÁÉÍÓÚáéíóú ]{1,60}"), 0..60)
    ) {
        let entries: Vec<ListadoEntry> = raw
            .iter()
            .map(|(e, t)| entry(t.clone(), format!("E-{e}")))
            .collect();

        let merged = merge_by_expediente(&entries);

        prop_assert!(merged.len() <= entries.len());
        prop_assert_eq!(
            merged.iter().map(|m| m.count).sum::<usize>(),
            entries.len()
        );

        let mut first_seen: Vec<&str> = Vec::new();
        for e in &entries {
            if !first_seen.contains(&e.expediente.as_str()) {
                first_seen.push(e.expediente.as_str());
            }
        }
        let order: Vec<&str> = merged.iter().map(|m| m.expediente.as_str()).collect();
        prop_assert_eq!(order, first_seen);
    }

    #[test]
    fn truncated_titles_are_bounded_and_marked(
        raw in prop::collection::vec((0usize..4, "[A-Za-z ]{1,80}"), 1..40)
    ) {
        let entries: Vec<ListadoEntry> = raw
            .iter()
            .map(|(e, t)| entry(t.clone(), format!("E-{e}")))
            .collect();

        for merged in merge_by_expediente(&entries) {
            if merged.count == 1 {
                // No annotation: bounded by the display cap plus ellipsis.
                prop_assert!(merged.titulo.chars().count() <= TITLE_DISPLAY_MAX + 3);
            } else {
                // Annotation survives truncation.
                let otros = merged.count - 1;
                let suffix = if otros == 1 {
                    " (+1 otro escrito)".to_string()
                } else {
                    format!(" (+{otros} otros escritos)")
                };
                prop_assert!(merged.titulo.ends_with(&suffix), "{:?}", merged.titulo);
            }
        }
    }

    #[test]
    fn round_robin_positions_map_back_to_merged_order(
        count in 0usize..80,
        recipients in 1usize..6
    ) {
        // Unique expedientes keep merged order identical to raw order, so
        // group membership can be checked positionally.
        let entries: Vec<ListadoEntry> = (0..count)
            .map(|n| entry(format!("Escrito {n}"), format!("E-{n}")))
            .collect();

        let split = split_initial(&entries, recipients, 15).expect("split");
        prop_assert_eq!(split.groups.len(), recipients);

        for (g, group) in split.groups.iter().enumerate() {
            for (i, row) in group.iter().enumerate() {
                let position = i * recipients + g;
                let expected = format!("E-{position}");
                prop_assert_eq!(row.expediente.as_str(), expected.as_str());
            }
        }

        // Balanced within one merged row.
        let sizes: Vec<usize> = split.groups.iter().map(Vec::len).collect();
        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
    }
}
