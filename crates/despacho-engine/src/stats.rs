//! Dataset summary statistics reported after a successful load.

use chrono::NaiveDate;
use despacho_model::{dates, FilingRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub titulo: String,
    pub cantidad: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBreakdown {
    /// Received date formatted `dd/mm/yyyy`.
    pub fecha: String,
    pub escritos: usize,
    pub proyectos: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub unique_expedientes: usize,
    pub presentaciones: usize,
    pub proyectos: usize,
    pub transferencias: usize,
    /// Oldest received date (`dd/mm/yyyy`), empty when no date parsed.
    pub oldest_record: String,
    /// Days between the oldest received date and today; 0 without dates.
    pub days_outstanding: i64,
    pub today: String,
    /// `"<oldest> a <today>"`, empty when no date parsed.
    pub period: String,
    /// Ten most frequent titles, ties broken by first appearance.
    pub top_titles: Vec<TitleCount>,
    /// Per-day tallies in chronological order; rows whose received date
    /// never parsed are excluded.
    pub by_date: Vec<DailyBreakdown>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub fn summarize(records: &[FilingRecord], today: NaiveDate) -> DatasetSummary {
    let presentaciones = records
        .iter()
        .filter(|r| contains_ci(&r.tipo, "escrito"))
        .count();
    let proyectos = records
        .iter()
        .filter(|r| contains_ci(&r.tipo, "proyecto"))
        .count();
    let transferencias = records
        .iter()
        .filter(|r| contains_ci(&r.titulo, "transferencia"))
        .count();

    let unique_expedientes = records
        .iter()
        .map(|r| r.expediente.as_str())
        .collect::<HashSet<_>>()
        .len();

    let oldest = records.iter().filter_map(|r| r.recibido).min();
    let oldest_record = oldest.map(dates::format_long).unwrap_or_default();
    let days_outstanding = oldest.map(|d| (today - d).num_days()).unwrap_or(0);
    let today_text = dates::format_long(today);
    let period = if oldest_record.is_empty() {
        String::new()
    } else {
        format!("{oldest_record} a {today_text}")
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for record in records {
        let slot = counts.entry(record.titulo.as_str()).or_insert(0);
        if *slot == 0 {
            first_seen.push(record.titulo.as_str());
        }
        *slot += 1;
    }
    let mut top_titles: Vec<TitleCount> = first_seen
        .into_iter()
        .map(|titulo| TitleCount {
            titulo: titulo.to_string(),
            cantidad: counts[titulo],
        })
        .collect();
    // Stable sort: equal counts keep first-appearance order.
    top_titles.sort_by(|a, b| b.cantidad.cmp(&a.cantidad));
    top_titles.truncate(10);

    let mut by_day: BTreeMap<NaiveDate, (usize, usize, usize)> = BTreeMap::new();
    for record in records {
        let Some(day) = record.recibido else { continue };
        let tally = by_day.entry(day).or_default();
        if contains_ci(&record.tipo, "escrito") {
            tally.0 += 1;
        }
        if contains_ci(&record.tipo, "proyecto") {
            tally.1 += 1;
        }
        tally.2 += 1;
    }
    let by_date = by_day
        .into_iter()
        .map(|(day, (escritos, proyectos, total))| DailyBreakdown {
            fecha: dates::format_long(day),
            escritos,
            proyectos,
            total,
        })
        .collect();

    DatasetSummary {
        total_records: records.len(),
        unique_expedientes,
        presentaciones,
        proyectos,
        transferencias,
        oldest_record,
        days_outstanding,
        today: today_text,
        period,
        top_titles,
        by_date,
    }
}
