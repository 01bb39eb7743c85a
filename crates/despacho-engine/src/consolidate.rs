//! Same-expediente consolidation.

use despacho_model::{truncate_with_ellipsis, ListadoEntry, MergedEntry};
use std::collections::HashMap;

/// Display titles longer than this are truncated with an ellipsis before the
/// occurrence annotation is appended.
pub const TITLE_DISPLAY_MAX: usize = 42;

/// Collapse entries sharing an expediente into single display rows, in
/// first-seen expediente order.
///
/// Titles accumulate unbounded during the walk (`" | "`-joined); truncation
/// and the `(+k otros escritos)` annotation happen only at finalization, so
/// the annotation itself can never be truncated away.
pub fn merge_by_expediente(entries: &[ListadoEntry]) -> Vec<MergedEntry> {
    let mut index_by_expediente: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<MergedEntry> = Vec::new();

    for entry in entries {
        match index_by_expediente.get(entry.expediente.as_str()) {
            Some(&idx) => {
                let slot = &mut merged[idx];
                slot.count += 1;
                slot.titulo.push_str(" | ");
                slot.titulo.push_str(&entry.titulo);
            }
            None => {
                index_by_expediente.insert(entry.expediente.as_str(), merged.len());
                merged.push(MergedEntry {
                    titulo: entry.titulo.clone(),
                    expediente: entry.expediente.clone(),
                    recibido: entry.recibido.clone(),
                    presentante: entry.presentante.clone(),
                    dias: entry.dias.clone(),
                    count: 1,
                });
            }
        }
    }

    for slot in &mut merged {
        slot.titulo = finalize_title(&slot.titulo, slot.count);
    }
    merged
}

fn finalize_title(titulo: &str, count: usize) -> String {
    let mut out = truncate_with_ellipsis(titulo, TITLE_DISPLAY_MAX);
    if count > 1 {
        let otros = count - 1;
        if otros == 1 {
            out.push_str(" (+1 otro escrito)");
        } else {
            out.push_str(&format!(" (+{otros} otros escritos)"));
        }
    }
    out
}
