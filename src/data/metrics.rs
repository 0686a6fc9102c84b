// ---------------------------------------------------------------------------
// Clustering quality of the three embedding variants (computed offline)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRecord {
    pub method: &'static str,
    pub silhouette: f64,
    pub davies_bouldin: f64,
    pub calinski_harabasz: f64,
}

pub const RESULT_METRICS: [MetricRecord; 3] = [
    MetricRecord {
        method: "SBERT-only",
        silhouette: 0.0523,
        davies_bouldin: 4.09,
        calinski_harabasz: 56.39,
    },
    MetricRecord {
        method: "GCN-only",
        silhouette: 0.4261,
        davies_bouldin: 0.89,
        calinski_harabasz: 1131.39,
    },
    MetricRecord {
        method: "Combined",
        silhouette: 0.2838,
        davies_bouldin: 1.37,
        calinski_harabasz: 480.94,
    },
];

/// One numeric column of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Silhouette,
    DaviesBouldin,
    CalinskiHarabasz,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::Silhouette,
        Metric::DaviesBouldin,
        Metric::CalinskiHarabasz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Silhouette => "Silhouette",
            Metric::DaviesBouldin => "Davies-Bouldin",
            Metric::CalinskiHarabasz => "Calinski-Harabasz",
        }
    }

    /// Davies-Bouldin improves downwards, the others upwards.
    pub fn higher_is_better(self) -> bool {
        !matches!(self, Metric::DaviesBouldin)
    }

    pub fn value(self, record: &MetricRecord) -> f64 {
        match self {
            Metric::Silhouette => record.silhouette,
            Metric::DaviesBouldin => record.davies_bouldin,
            Metric::CalinskiHarabasz => record.calinski_harabasz,
        }
    }

    /// Index of the best-scoring record in `records`.
    pub fn best(self, records: &[MetricRecord]) -> Option<usize> {
        let key = |i: &usize| {
            let v = self.value(&records[*i]);
            if self.higher_is_better() {
                v
            } else {
                -v
            }
        };
        (0..records.len()).max_by(|a, b| key(a).total_cmp(&key(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_three_fixed_methods() {
        let methods: Vec<&str> = RESULT_METRICS.iter().map(|m| m.method).collect();
        assert_eq!(methods, ["SBERT-only", "GCN-only", "Combined"]);
        assert_eq!(RESULT_METRICS[2].calinski_harabasz, 480.94);
    }

    #[test]
    fn best_respects_metric_direction() {
        assert_eq!(Metric::Silhouette.best(&RESULT_METRICS), Some(1));
        assert_eq!(Metric::DaviesBouldin.best(&RESULT_METRICS), Some(1));
        assert_eq!(Metric::CalinskiHarabasz.best(&RESULT_METRICS), Some(1));

        let swapped = [RESULT_METRICS[0], RESULT_METRICS[2]];
        assert_eq!(Metric::DaviesBouldin.best(&swapped), Some(1));
        assert_eq!(Metric::Silhouette.best(&[]), None);
    }
}
