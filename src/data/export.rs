use anyhow::{Context, Result};

use super::model::PaperTable;

/// Download name offered for the full-table export.
pub const EXPORT_FILE_NAME: &str = "clustered_papers.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// A ready-to-save export: name, MIME type and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Serialise the complete table, header first, cells exactly as loaded.
pub fn export_csv(table: &PaperTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&table.headers)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.cells())
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV export: {}", e.error()))
}

/// The export as offered to the user.
pub fn export_file(table: &PaperTable) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: EXPORT_FILE_NAME,
        mime: EXPORT_MIME,
        bytes: export_csv(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_papers;

    const SOURCE: &str = "\
title,year,citationCount,cluster_combined,graph_degree,venue
\"Graphs, Again\",2020.0,5,1,0.25,ACL
B,2021,3,2,,\"EMNLP \"\"main\"\"\"
C,2019,9,topic-x,1e-3,
";

    #[test]
    fn export_round_trips_every_column() {
        let table = parse_papers(SOURCE.as_bytes()).unwrap();
        let bytes = export_csv(&table).unwrap();
        let reparsed = parse_papers(&bytes).unwrap();

        assert_eq!(reparsed.len(), table.len());
        assert_eq!(reparsed.headers, table.headers);
        assert_eq!(reparsed, table);
    }

    #[test]
    fn export_keeps_raw_cell_text() {
        let table = parse_papers(SOURCE.as_bytes()).unwrap();
        let text = String::from_utf8(export_csv(&table).unwrap()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("title,year,citationCount,cluster_combined,graph_degree,venue")
        );
        assert_eq!(lines.next(), Some("\"Graphs, Again\",2020.0,5,1,0.25,ACL"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn empty_table_exports_header_only() {
        let table = parse_papers(b"title,year,citationCount,cluster_combined\n").unwrap();
        let bytes = export_csv(&table).unwrap();
        assert_eq!(bytes, b"title,year,citationCount,cluster_combined\n");
    }

    #[test]
    fn export_file_is_named_csv() {
        let table = parse_papers(SOURCE.as_bytes()).unwrap();
        let file = export_file(&table).unwrap();
        assert_eq!(file.file_name, "clustered_papers.csv");
        assert_eq!(file.mime, "text/csv");
        assert!(!file.bytes.is_empty());
    }
}
