use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// ClusterId – the categorical `cluster_combined` value
// ---------------------------------------------------------------------------

/// A cluster identifier as found in the `cluster_combined` column.
///
/// The loader types the whole column at once, so a loaded table holds
/// either only `Integer` ids (numeric order) or only `Text` ids (raw cell
/// text, lexicographic order).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClusterId {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterId::Integer(i) => write!(f, "{i}"),
            ClusterId::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PaperRecord – one row of the clustered-papers CSV
// ---------------------------------------------------------------------------

/// A single paper with its typed display columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRecord {
    pub title: String,
    pub year: i64,
    pub citation_count: u64,
    pub cluster: ClusterId,
    /// Every column without a typed field: column_name → raw cell.
    pub extra: BTreeMap<String, String>,
    /// All cells exactly as read, in header order.
    pub(crate) cells: Vec<String>,
}

impl PaperRecord {
    /// Raw cells in header order, as they appeared in the source file.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

// ---------------------------------------------------------------------------
// PaperTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All papers in file order, plus the header they were read with.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperTable {
    pub headers: Vec<String>,
    pub rows: Vec<PaperRecord>,
}

impl PaperTable {
    /// Number of papers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no papers.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ClusterKeywords – cluster id → descriptive keywords
// ---------------------------------------------------------------------------

/// Keyword lists per cluster, in the key order of the source JSON object.
///
/// Keys are not required to match the table's cluster identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterKeywords {
    pub entries: IndexMap<String, Vec<String>>,
}

impl ClusterKeywords {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// LoadedResults – what a successful load hands out
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResults {
    pub papers: PaperTable,
    pub keywords: ClusterKeywords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_order_numerically_not_lexically() {
        let mut ids = vec![
            ClusterId::Integer(10),
            ClusterId::Integer(2),
            ClusterId::Integer(-1),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                ClusterId::Integer(-1),
                ClusterId::Integer(2),
                ClusterId::Integer(10)
            ]
        );
    }

    #[test]
    fn text_orders_lexically() {
        let mut ids: Vec<ClusterId> = ["2", "10", "01", "x"]
            .map(|s| ClusterId::Text(s.to_string()))
            .to_vec();
        ids.sort();
        let labels: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["01", "10", "2", "x"]);
    }

    #[test]
    fn display_matches_source_text() {
        assert_eq!(ClusterId::Integer(7).to_string(), "7");
        assert_eq!(ClusterId::Text("topic-a".into()).to_string(), "topic-a");
    }
}
