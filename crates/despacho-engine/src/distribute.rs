//! Distribution of consolidated listados across recipients.
//!
//! Two strategies: a bounded first-N split (strict round-robin over the
//! merged sequence) and a date-continuation split (sequential chunks with
//! correlative assigned dates). Both count their consumption against the
//! raw, pre-merge listado sequence so the caller's cursor stays consistent
//! between the two.

use chrono::{Duration, NaiveDate};
use despacho_model::{dates, ListadoEntry, MergedEntry};
use thiserror::Error;

use crate::consolidate::merge_by_expediente;

/// Raw listado rows drawn per recipient before consolidation.
pub const PER_LIST_DEFAULT: usize = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributeError {
    #[error("recipient count must be greater than zero")]
    InvalidRecipientCount,
}

/// Outcome of the bounded first-N split.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSplit {
    /// One group per recipient; merged row `i` lands in group
    /// `i % recipients`.
    pub groups: Vec<Vec<MergedEntry>>,
    /// Raw (pre-merge) rows consumed, for the continuation cursor.
    pub consumed: usize,
    /// Latest parseable received date among the selected raw rows.
    pub last_received: Option<NaiveDate>,
}

/// Outcome of a date-continuation split. Groups are contiguous chunks, not
/// round-robin; there may be fewer than requested when the input runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuationSplit {
    pub groups: Vec<Vec<MergedEntry>>,
    pub consumed: usize,
}

/// Bounded split: cap the **pre-merge** sequence at `recipients * per_list`
/// rows, consolidate the capped prefix, then deal the merged rows round-robin.
///
/// Capping before the merge keeps every filing of one expediente inside a
/// single recipient's group while never drawing raw rows beyond the cap; a
/// group may therefore hold fewer than `per_list` merged rows.
pub fn split_initial(
    entries: &[ListadoEntry],
    recipients: usize,
    per_list: usize,
) -> Result<InitialSplit, DistributeError> {
    if recipients == 0 {
        return Err(DistributeError::InvalidRecipientCount);
    }

    let cap = recipients * per_list;
    let selected = &entries[..cap.min(entries.len())];

    let mut groups = vec![Vec::new(); recipients];
    for (idx, row) in merge_by_expediente(selected).into_iter().enumerate() {
        groups[idx % recipients].push(row);
    }

    let last_received = selected
        .iter()
        .filter_map(|entry| dates::parse_listado_date(&entry.recibido))
        .max();

    Ok(InitialSplit {
        groups,
        consumed: selected.len(),
        last_received,
    })
}

/// Continuation split: resume at `start_index` into the raw sequence, cap at
/// `lists * per_list` rows, and partition sequentially into chunks of
/// `per_list` raw rows.
///
/// Every selected raw row receives a correlative assigned date
/// (`start_date + i`, `i` counted across the whole capped subsequence) and
/// its aging label is recomputed against `today`. Each chunk is consolidated
/// independently afterwards, so an expediente spanning two chunks stays in
/// both.
pub fn split_continuation(
    entries: &[ListadoEntry],
    start_index: usize,
    start_date: NaiveDate,
    lists: usize,
    per_list: usize,
    today: NaiveDate,
) -> Result<ContinuationSplit, DistributeError> {
    if lists == 0 {
        return Err(DistributeError::InvalidRecipientCount);
    }

    let remaining = &entries[start_index.min(entries.len())..];
    let cap = lists * per_list;
    let selected = &remaining[..cap.min(remaining.len())];
    if per_list == 0 || selected.is_empty() {
        return Ok(ContinuationSplit {
            groups: Vec::new(),
            consumed: 0,
        });
    }

    let day_month = dates::format_day_month(today);
    let mut assigned = start_date;
    let mut groups = Vec::new();
    for chunk in selected.chunks(per_list) {
        let mut redated = Vec::with_capacity(chunk.len());
        for entry in chunk {
            let outstanding = (today - assigned).num_days();
            redated.push(ListadoEntry {
                titulo: entry.titulo.clone(),
                expediente: entry.expediente.clone(),
                recibido: dates::format_short(assigned),
                presentante: entry.presentante.clone(),
                dias: format!("{outstanding} días al {day_month}"),
            });
            assigned += Duration::days(1);
        }
        groups.push(merge_by_expediente(&redated));
    }

    Ok(ContinuationSplit {
        groups,
        consumed: selected.len(),
    })
}
