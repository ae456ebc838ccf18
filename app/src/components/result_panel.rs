//! Result panel: empty placeholder, analysis spinner, or the canned report.

use dioxus::prelude::*;

use riskly_types::{DeltaTone, RiskStatus, SUMMARY_METRICS, SummaryMetric};

use crate::components::risk_chart::RiskChart;
use crate::state::{PanelState, use_simulator};

#[component]
pub fn ResultPanel() -> Element {
    let sim = use_simulator();

    match sim.panel() {
        PanelState::Empty => rsx! {
            div { class: "result-placeholder",
                i { "Chart will appear here after upload" }
            }
        },
        PanelState::Analyzing { .. } => rsx! {
            div { class: "result-analyzing",
                i { class: "fa-solid fa-spinner fa-spin" }
                span { "AI is scanning for anomalies..." }
            }
        },
        PanelState::Simulated { .. } => rsx! {
            div { class: "result-report",
                div { class: "metric-row",
                    for metric in SUMMARY_METRICS.iter() {
                        MetricCard { metric: *metric }
                    }
                }
                h4 { class: "report-heading", "Real-time Risk Assessment" }
                RiskChart {}
                div { class: "status-legend",
                    for status in RiskStatus::all() {
                        span { class: "legend-entry",
                            span {
                                class: "legend-dot",
                                style: "background-color: {status.color()};"
                            }
                            "{status.label()}"
                        }
                    }
                }
            }
        },
    }
}

/// One summary metric card with a toned delta badge.
#[component]
fn MetricCard(metric: SummaryMetric) -> Element {
    let (tone_class, arrow) = match metric.tone {
        DeltaTone::Positive => ("metric-delta-up", "fa-solid fa-arrow-trend-up"),
        DeltaTone::Negative => ("metric-delta-down", "fa-solid fa-arrow-trend-down"),
    };

    rsx! {
        div { class: "metric-card",
            span { class: "metric-label", "{metric.label}" }
            span { class: "metric-value", "{metric.value}" }
            span { class: "metric-delta {tone_class}",
                i { class: "{arrow}" }
                " {metric.delta}"
            }
        }
    }
}
