//! File upload widget for the risk simulator.
//!
//! The only place external input enters the system. Only the file's name
//! and size are kept for display; content is never read.

use dioxus::prelude::*;

use riskly_types::accept_attr;
use riskly_types::formatting::format_file_size;

use crate::state::{PanelState, SelectedFile, use_simulator};

#[component]
pub fn UploadPanel() -> Element {
    let mut sim = use_simulator();
    let panel = sim.panel();

    rsx! {
        div { class: "upload-panel",
            h4 { "1. Upload Financial Data" }
            p { class: "upload-caption", "Upload your ledger (CSV/XLSX) to trigger AI analysis." }

            match &panel {
                PanelState::Empty => rsx! {
                    label { class: "upload-dropzone",
                        i { class: "fa-solid fa-file-arrow-up" }
                        span { class: "upload-label", "Upload Audit Trail" }
                        span { class: "upload-hint", "CSV or XLSX" }
                        input {
                            r#type: "file",
                            class: "upload-input",
                            accept: accept_attr(),
                            onchange: move |evt| {
                                if let Some(file) = evt.files().into_iter().next() {
                                    sim.select_file(SelectedFile {
                                        name: file.name(),
                                        size_bytes: file.size(),
                                    });
                                }
                            }
                        }
                    }
                    p { class: "upload-info",
                        i { class: "fa-solid fa-circle-info" }
                        " Upload a file to see the risk analysis."
                    }
                },
                PanelState::Analyzing { file, .. } | PanelState::Simulated { file } => rsx! {
                    div { class: "upload-chip",
                        i { class: "fa-solid fa-file-lines" }
                        span { class: "upload-chip-name", "{file.name}" }
                        span { class: "upload-chip-size", "{format_file_size(file.size_bytes)}" }
                        button {
                            class: "upload-chip-clear",
                            title: "Remove file",
                            onclick: move |_| sim.clear_file(),
                            "X"
                        }
                    }
                },
            }
        }
    }
}
