//! Human-readable QA summary.

use std::fmt::Write as _;

use faers_curate::QaSummary;

/// Render `QA_SUMMARY.md` contents.
pub fn render_qa_summary(qa: &QaSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Raw file: {}", qa.raw_file);
    let _ = writeln!(out, "Total input records: {}", qa.total_input);
    let _ = writeln!(out, "Valid records (pre-dedup): {}", qa.total_valid);
    let _ = writeln!(out, "Rejected records: {}", qa.total_rejected);
    let _ = writeln!(out, "Rejection reasons:");
    if qa.rejections.is_empty() {
        let _ = writeln!(out, "- none");
    } else {
        for (reason, count) in qa.rejections.iter() {
            let _ = writeln!(out, "- {reason}: {count}");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Field completeness (Reports.csv):");
    for (field, pct) in &qa.completeness {
        let _ = writeln!(out, "- {field}: {pct:.1}% non-null");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faers_curate::RejectionCounts;
    use faers_model::RejectReason;

    #[test]
    fn summary_layout() {
        let mut rejections = RejectionCounts::default();
        rejections.record(RejectReason::InvalidPatient);
        rejections.record(RejectReason::InvalidPatient);
        let qa = QaSummary {
            raw_file: "artifacts/raw_faers/faers_run1.json".to_string(),
            total_input: 10,
            total_valid: 8,
            total_rejected: 2,
            rejections,
            completeness: vec![("received_date", 87.5), ("patient_sex", 100.0)],
        };
        let text = render_qa_summary(&qa);
        assert!(text.starts_with("Raw file: artifacts/raw_faers/faers_run1.json\n"));
        assert!(text.contains("Total input records: 10\n"));
        assert!(text.contains("- invalid_patient: 2\n"));
        assert!(text.contains("- received_date: 87.5% non-null\n"));
        assert!(text.contains("- patient_sex: 100.0% non-null\n"));
    }

    #[test]
    fn no_rejections_prints_none() {
        let qa = QaSummary {
            raw_file: "raw.json".to_string(),
            total_input: 0,
            total_valid: 0,
            total_rejected: 0,
            rejections: RejectionCounts::default(),
            completeness: Vec::new(),
        };
        assert!(render_qa_summary(&qa).contains("Rejection reasons:\n- none\n"));
    }
}
