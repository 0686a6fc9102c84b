use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use super::model::{ClusterId, ClusterKeywords, PaperRecord, PaperTable};

pub const TITLE_COLUMN: &str = "title";
pub const YEAR_COLUMN: &str = "year";
pub const CITATIONS_COLUMN: &str = "citationCount";
pub const CLUSTER_COLUMN: &str = "cluster_combined";

// ---------------------------------------------------------------------------
// Papers CSV
// ---------------------------------------------------------------------------

/// Parse the clustered-papers CSV.
///
/// Layout: header row with column names. `title`, `year`, `citationCount`
/// and `cluster_combined` are required; every other column is carried
/// through untyped. Rows must all have the header's width.
pub fn parse_papers(bytes: &[u8]) -> Result<PaperTable> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let title_idx = column(TITLE_COLUMN)?;
    let year_idx = column(YEAR_COLUMN)?;
    let citations_idx = column(CITATIONS_COLUMN)?;
    let cluster_idx = column(CLUSTER_COLUMN)?;
    let typed = [title_idx, year_idx, citations_idx, cluster_idx];

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();

        let year = parse_whole_number(&cells[year_idx])
            .with_context(|| format!("CSV row {row_no}: '{}' is not a year", cells[year_idx]))?;
        let citations = parse_whole_number(&cells[citations_idx]).with_context(|| {
            format!(
                "CSV row {row_no}: '{}' is not a citation count",
                cells[citations_idx]
            )
        })?;
        let Ok(citation_count) = u64::try_from(citations) else {
            bail!("CSV row {row_no}: negative citation count {citations}");
        };
        if cells[cluster_idx].trim().is_empty() {
            bail!("CSV row {row_no}: empty '{CLUSTER_COLUMN}'");
        }
        let cluster = ClusterId::Text(cells[cluster_idx].clone());

        let extra: BTreeMap<String, String> = cells
            .iter()
            .enumerate()
            .filter(|(i, _)| !typed.contains(i))
            .map(|(i, cell)| (headers[i].clone(), cell.clone()))
            .collect();

        rows.push(PaperRecord {
            title: cells[title_idx].clone(),
            year,
            citation_count,
            cluster,
            extra,
            cells,
        });
    }

    type_cluster_column(&mut rows);
    Ok(PaperTable { headers, rows })
}

/// Give the whole cluster column one type: integers only when every cell
/// parses as one, raw text otherwise.
fn type_cluster_column(rows: &mut [PaperRecord]) {
    let integers: Option<Vec<i64>> = rows
        .iter()
        .map(|r| match &r.cluster {
            ClusterId::Text(cell) => cell.trim().parse::<i64>().ok(),
            ClusterId::Integer(i) => Some(*i),
        })
        .collect();

    if let Some(integers) = integers {
        for (row, id) in rows.iter_mut().zip(integers) {
            row.cluster = ClusterId::Integer(id);
        }
    }
}

/// Integer cell, also accepting integral floats such as `2020.0`.
fn parse_whole_number(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Cluster keywords JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema (object key order is kept):
///
/// ```json
/// {
///   "0": ["translation", "neural", "attention"],
///   "1": ["graph", "citation", "gcn"]
/// }
/// ```
pub fn parse_keywords(bytes: &[u8]) -> Result<ClusterKeywords> {
    let entries: IndexMap<String, Vec<String>> =
        serde_json::from_slice(bytes).context("parsing cluster keywords JSON")?;
    Ok(ClusterKeywords { entries })
}
