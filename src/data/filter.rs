use std::collections::{BTreeMap, BTreeSet};

use super::model::{ClusterId, ClusterKeywords, PaperTable};

/// Rows shown for a selected cluster unless the caller asks otherwise.
pub const DEFAULT_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Cluster identifiers
// ---------------------------------------------------------------------------

/// Distinct cluster identifiers, strictly ascending.
pub fn list_cluster_ids(table: &PaperTable) -> Vec<ClusterId> {
    table
        .rows
        .iter()
        .map(|r| r.cluster.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of papers per cluster.
pub fn cluster_sizes(table: &PaperTable) -> BTreeMap<ClusterId, usize> {
    let mut sizes = BTreeMap::new();
    for row in &table.rows {
        *sizes.entry(row.cluster.clone()).or_insert(0) += 1;
    }
    sizes
}

// ---------------------------------------------------------------------------
// Selection: papers of one cluster, projected to display columns
// ---------------------------------------------------------------------------

/// The display projection of a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperRow<'a> {
    pub title: &'a str,
    pub year: i64,
    pub citation_count: u64,
}

/// The first `limit` papers of `cluster`, in table order.
///
/// An identifier with no papers yields an empty selection.
pub fn select_cluster<'a>(
    table: &'a PaperTable,
    cluster: &ClusterId,
    limit: usize,
) -> Vec<PaperRow<'a>> {
    table
        .rows
        .iter()
        .filter(|r| r.cluster == *cluster)
        .take(limit)
        .map(|r| PaperRow {
            title: &r.title,
            year: r.year,
            citation_count: r.citation_count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Keyword summaries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSummary<'a> {
    pub cluster: &'a str,
    pub text: String,
}

/// One summary per keyword entry, in map order.
pub fn keyword_summaries(keywords: &ClusterKeywords) -> Vec<KeywordSummary<'_>> {
    keywords
        .entries
        .iter()
        .map(|(cluster, words)| KeywordSummary {
            cluster,
            text: words.join(", "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{parse_keywords, parse_papers};

    fn scenario_table() -> PaperTable {
        parse_papers(
            b"title,year,citationCount,cluster_combined\n\
              A,2020,5,1\n\
              B,2021,3,2\n\
              C,2019,9,1\n",
        )
        .unwrap()
    }

    fn titles<'a>(rows: &[PaperRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.title).collect()
    }

    #[test]
    fn scenario_ids_and_selection() {
        let table = scenario_table();
        assert_eq!(
            list_cluster_ids(&table),
            vec![ClusterId::Integer(1), ClusterId::Integer(2)]
        );

        let selected = select_cluster(&table, &ClusterId::Integer(1), DEFAULT_LIMIT);
        assert_eq!(titles(&selected), ["A", "C"]);
        assert_eq!(
            selected[1],
            PaperRow {
                title: "C",
                year: 2019,
                citation_count: 9
            }
        );
    }

    #[test]
    fn selection_only_returns_the_requested_cluster() {
        let table = scenario_table();
        for id in list_cluster_ids(&table) {
            let selected = select_cluster(&table, &id, DEFAULT_LIMIT);
            assert!(!selected.is_empty());
            for row in selected {
                let source = table.rows.iter().find(|r| r.title == row.title).unwrap();
                assert_eq!(source.cluster, id);
            }
        }
    }

    #[test]
    fn selection_respects_limit() {
        let mut csv = String::from("title,year,citationCount,cluster_combined\n");
        for i in 0..25 {
            csv.push_str(&format!("P{i},2000,{i},{}\n", i % 2));
        }
        let table = parse_papers(csv.as_bytes()).unwrap();

        for limit in [0, 1, 5, 10, 12, 13, 100] {
            for id in list_cluster_ids(&table) {
                assert!(select_cluster(&table, &id, limit).len() <= limit);
            }
        }
        let evens = select_cluster(&table, &ClusterId::Integer(0), DEFAULT_LIMIT);
        assert_eq!(evens.len(), 10);
        assert_eq!(evens[0].title, "P0");
        assert_eq!(evens[9].title, "P18");
    }

    #[test]
    fn unknown_cluster_selects_nothing() {
        let table = scenario_table();
        assert!(select_cluster(&table, &ClusterId::Integer(42), DEFAULT_LIMIT).is_empty());
        assert!(select_cluster(&table, &ClusterId::Text("1x".into()), DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn ids_are_strictly_ascending() {
        let table = parse_papers(
            b"title,year,citationCount,cluster_combined\n\
              a,2000,0,10\nb,2000,0,3\nc,2000,0,2\nd,2000,0,-4\ne,2000,0,10\nf,2000,0,2\n",
        )
        .unwrap();
        let ids = list_cluster_ids(&table);
        assert_eq!(ids, [-4, 2, 3, 10].map(ClusterId::Integer).to_vec());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn mixed_column_is_listed_and_matched_as_text() {
        let table = parse_papers(
            b"title,year,citationCount,cluster_combined\n\
              a,2000,0,10\nb,2000,0,2\nc,2000,0,x\nd,2000,0,01\ne,2000,0,1\n",
        )
        .unwrap();
        let ids = list_cluster_ids(&table);
        let labels: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["01", "1", "10", "2", "x"]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let one = select_cluster(&table, &ClusterId::Text("1".into()), DEFAULT_LIMIT);
        assert_eq!(titles(&one), ["e"]);
        let zero_one = select_cluster(&table, &ClusterId::Text("01".into()), DEFAULT_LIMIT);
        assert_eq!(titles(&zero_one), ["d"]);
        assert!(select_cluster(&table, &ClusterId::Integer(1), DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn sizes_count_every_paper() {
        let sizes = cluster_sizes(&scenario_table());
        assert_eq!(sizes[&ClusterId::Integer(1)], 2);
        assert_eq!(sizes[&ClusterId::Integer(2)], 1);
        assert_eq!(sizes.values().sum::<usize>(), 3);
    }

    #[test]
    fn keyword_scenario_renders_in_key_order() {
        let keywords = parse_keywords(br#"{"1": ["nlp","bert"], "2": ["graph","gcn"]}"#).unwrap();
        let summaries = keyword_summaries(&keywords);
        assert_eq!(
            summaries,
            vec![
                KeywordSummary {
                    cluster: "1",
                    text: "nlp, bert".to_string()
                },
                KeywordSummary {
                    cluster: "2",
                    text: "graph, gcn".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_keyword_list_renders_empty_text() {
        let keywords = parse_keywords(br#"{"7": []}"#).unwrap();
        assert_eq!(keyword_summaries(&keywords)[0].text, "");
    }
}
