//! Shared domain types for RISKLY.
//!
//! Everything the demo displays is a compile-time constant: the five risk
//! rows, the three summary metrics, and the status color map. Nothing here
//! is ever derived from an uploaded file.

pub mod formatting;

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Risk Assessment Table
// ─────────────────────────────────────────────────────────────────────────────

/// Status classification for a risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Critical,
    Stable,
    Safe,
}

impl RiskStatus {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Critical => "Critical",
            RiskStatus::Stable => "Stable",
            RiskStatus::Safe => "Safe",
        }
    }

    /// Chart/badge color for this status.
    pub fn color(&self) -> &'static str {
        match self {
            RiskStatus::Critical => "#FF4B4B",
            RiskStatus::Stable => "#00E676",
            RiskStatus::Safe => "#2979FF",
        }
    }

    /// All statuses, in legend order.
    pub fn all() -> &'static [RiskStatus] {
        &[RiskStatus::Critical, RiskStatus::Stable, RiskStatus::Safe]
    }
}

/// One row of the canned risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRow {
    pub category: &'static str,
    /// Score in the 0-100 range.
    pub score: u8,
    pub status: RiskStatus,
}

/// The assessment shown after any upload. Identical on every render;
/// the uploaded file's content plays no part in it.
pub const RISK_ROWS: [RiskRow; 5] = [
    RiskRow {
        category: "Fraud",
        score: 92,
        status: RiskStatus::Critical,
    },
    RiskRow {
        category: "Compliance",
        score: 45,
        status: RiskStatus::Stable,
    },
    RiskRow {
        category: "Operational",
        score: 20,
        status: RiskStatus::Safe,
    },
    RiskRow {
        category: "Liquidity",
        score: 35,
        status: RiskStatus::Stable,
    },
    RiskRow {
        category: "Market",
        score: 88,
        status: RiskStatus::Critical,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Summary Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Visual tone of a metric's delta badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaTone {
    /// Rendered green with an up arrow.
    Positive,
    /// Rendered red with a down arrow.
    Negative,
}

/// One summary metric card displayed above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub tone: DeltaTone,
}

/// The three metric cards. Display literals only; the average is NOT the
/// mean of [`RISK_ROWS`] and must stay that way.
pub const SUMMARY_METRICS: [SummaryMetric; 3] = [
    SummaryMetric {
        label: "Avg Risk Score",
        value: "76.4",
        delta: "+12.5",
        tone: DeltaTone::Positive,
    },
    SummaryMetric {
        label: "Critical Anomalies",
        value: "2",
        delta: "Immediate Action",
        tone: DeltaTone::Negative,
    },
    SummaryMetric {
        label: "Audit Status",
        value: "ACTION REQUIRED",
        delta: "Flagged",
        tone: DeltaTone::Positive,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Upload Widget Constants
// ─────────────────────────────────────────────────────────────────────────────

/// File extensions the upload control accepts. Declared on the input
/// element; the files themselves are never parsed.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// Duration of the simulated analysis pause, in milliseconds.
pub const ANALYSIS_DELAY_MS: u32 = 2000;

/// Value for the file input's `accept` attribute.
///
/// # Examples
/// ```
/// assert_eq!(riskly_types::accept_attr(), ".csv,.xlsx");
/// ```
pub fn accept_attr() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_rows_match_advertised_assessment() {
        let expected = [
            ("Fraud", 92, RiskStatus::Critical),
            ("Compliance", 45, RiskStatus::Stable),
            ("Operational", 20, RiskStatus::Safe),
            ("Liquidity", 35, RiskStatus::Stable),
            ("Market", 88, RiskStatus::Critical),
        ];
        assert_eq!(RISK_ROWS.len(), expected.len());
        for (row, (category, score, status)) in RISK_ROWS.iter().zip(expected) {
            assert_eq!(row.category, category);
            assert_eq!(row.score, score);
            assert_eq!(row.status, status);
        }
    }

    #[test]
    fn scores_stay_in_range() {
        for row in RISK_ROWS {
            assert!(row.score <= 100, "{} out of range", row.category);
        }
    }

    #[test]
    fn status_colors() {
        assert_eq!(RiskStatus::Critical.color(), "#FF4B4B");
        assert_eq!(RiskStatus::Stable.color(), "#00E676");
        assert_eq!(RiskStatus::Safe.color(), "#2979FF");
    }

    #[test]
    fn summary_metrics_are_the_advertised_literals() {
        assert_eq!(SUMMARY_METRICS[0].value, "76.4");
        assert_eq!(SUMMARY_METRICS[1].value, "2");
        assert_eq!(SUMMARY_METRICS[2].value, "ACTION REQUIRED");
    }

    #[test]
    fn avg_metric_is_not_recomputed_from_rows() {
        // The displayed average deliberately disagrees with the actual mean
        // of the rows (56.0). Keep the literal; do not "fix" it.
        let mean = RISK_ROWS.iter().map(|r| r.score as f64).sum::<f64>() / RISK_ROWS.len() as f64;
        assert_ne!(format!("{mean:.1}"), SUMMARY_METRICS[0].value);
    }

    #[test]
    fn accept_attr_lists_both_extensions() {
        assert_eq!(accept_attr(), ".csv,.xlsx");
    }
}
