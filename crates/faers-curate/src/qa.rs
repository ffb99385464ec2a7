//! Run-level quality statistics.

use std::collections::BTreeMap;

use faers_model::{CuratedTables, RejectReason};

/// Rejection histogram keyed by stable reason code, sorted by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    counts: BTreeMap<&'static str, usize>,
}

impl RejectionCounts {
    pub fn record(&mut self, reason: RejectReason) {
        *self.counts.entry(reason.as_str()).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().map(|(reason, count)| (*reason, *count))
    }
}

/// QA summary for one curation run.
#[derive(Debug, Clone)]
pub struct QaSummary {
    pub raw_file: String,
    pub total_input: usize,
    pub total_valid: usize,
    pub total_rejected: usize,
    pub rejections: RejectionCounts,
    /// `(field, percent non-null)` for the four tracked report fields.
    pub completeness: Vec<(&'static str, f64)>,
}

/// Completeness percentages for the tracked report fields.
///
/// `patient_sex` and `country` are always-populated strings in the
/// report rows, so their percentages reflect row presence; the dates and
/// age are genuinely optional.
pub fn report_completeness(tables: &CuratedTables) -> Vec<(&'static str, f64)> {
    let total = tables.reports.len();
    let received = tables
        .reports
        .iter()
        .filter(|r| r.received_date.is_some())
        .count();
    let ages = tables
        .reports
        .iter()
        .filter(|r| r.patient_age_years.is_some())
        .count();
    vec![
        ("received_date", pct(received, total)),
        ("patient_sex", pct(total, total)),
        ("patient_age_years", pct(ages, total)),
        ("country", pct(total, total)),
    ]
}

fn pct(non_null: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    non_null as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use faers_model::{CanonicalReport, ReporterType, Sex};

    fn report(received: Option<&str>, age: Option<f64>) -> CanonicalReport {
        CanonicalReport {
            safetyreportid: "1".to_string(),
            received_date: received.map(String::from),
            event_date: None,
            patient_age_years: age,
            age_unit_raw: String::new(),
            patient_sex: Sex::Unknown,
            reporter_type: ReporterType::Other,
            reporter_type_raw: String::new(),
            country: String::new(),
            country_raw: String::new(),
            death: false,
            hospitalization: false,
            life_threatening: false,
            disability: false,
            congenital_anomaly: false,
            intervention: false,
            other: false,
        }
    }

    #[test]
    fn histogram_sorts_by_code() {
        let mut counts = RejectionCounts::default();
        counts.record(RejectReason::NotAnObject);
        counts.record(RejectReason::InvalidPatient);
        counts.record(RejectReason::NotAnObject);
        let collected: Vec<_> = counts.iter().collect();
        assert_eq!(
            collected,
            vec![("invalid_patient", 1), ("not_a_object", 2)]
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn completeness_percentages() {
        let tables = CuratedTables {
            reports: vec![
                report(Some("2023-06-15"), Some(2.0)),
                report(None, None),
                report(Some("2023"), None),
                report(Some("2023-01"), None),
            ],
            ..CuratedTables::default()
        };
        let completeness = report_completeness(&tables);
        assert_eq!(completeness[0], ("received_date", 75.0));
        assert_eq!(completeness[1], ("patient_sex", 100.0));
        assert_eq!(completeness[2], ("patient_age_years", 25.0));
        assert_eq!(completeness[3], ("country", 100.0));
    }

    #[test]
    fn empty_tables_are_zero_percent() {
        let completeness = report_completeness(&CuratedTables::default());
        assert!(completeness.iter().all(|(_, pct)| *pct == 0.0));
    }
}
