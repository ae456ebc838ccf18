//! View state for the risk simulator.
//!
//! Discrete UI events are folded into a new immutable panel state by the
//! pure [`apply`] function; signals only hold the current value. No
//! component reads another's internals.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local as spawn;

use riskly_types::ANALYSIS_DELAY_MS;

// ─────────────────────────────────────────────────────────────────────────────
// Events and States
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for the currently selected file. Content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

/// Discrete UI events that drive the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatorEvent {
    FileSelected { file: SelectedFile, run_id: u32 },
    FileCleared,
    /// Fired by the analysis timer. Carries the run it belongs to so a
    /// timer from a cleared or superseded upload cannot apply.
    AnalysisFinished { run_id: u32 },
}

/// Display state of the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    /// No file selected; placeholder box.
    #[default]
    Empty,
    /// File present, fixed delay running. Not a real computation.
    Analyzing { file: SelectedFile, run_id: u32 },
    /// Canned metrics and chart visible.
    Simulated { file: SelectedFile },
}

/// Apply one event to the current panel state, producing the next state.
pub fn apply(state: &PanelState, event: &SimulatorEvent) -> PanelState {
    match event {
        SimulatorEvent::FileSelected { file, run_id } => PanelState::Analyzing {
            file: file.clone(),
            run_id: *run_id,
        },
        SimulatorEvent::FileCleared => PanelState::Empty,
        SimulatorEvent::AnalysisFinished { run_id } => match state {
            PanelState::Analyzing {
                file,
                run_id: current,
            } if current == run_id => PanelState::Simulated { file: file.clone() },
            other => other.clone(),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared State Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Global simulator state manager.
///
/// Access via `use_simulator()` from any component.
#[derive(Clone, Copy)]
pub struct SimulatorState {
    panel: Signal<PanelState>,
    next_run: Signal<u32>,
}

impl SimulatorState {
    /// Create a new manager in the Empty state.
    pub fn new() -> Self {
        Self {
            panel: Signal::new(PanelState::Empty),
            next_run: Signal::new(0),
        }
    }

    /// Current panel state.
    pub fn panel(&self) -> PanelState {
        self.panel.read().clone()
    }

    /// Handle a file selection from the upload control.
    ///
    /// Moves the panel to Analyzing and schedules the fixed delay after
    /// which the canned result appears.
    pub fn select_file(&mut self, file: SelectedFile) {
        let run_id = *self.next_run.peek();
        *self.next_run.write() += 1;
        info!(
            file = %file.name,
            size_bytes = file.size_bytes,
            "file selected, starting simulated analysis"
        );
        self.dispatch(SimulatorEvent::FileSelected { file, run_id });

        let mut panel = self.panel;
        spawn(async move {
            TimeoutFuture::new(ANALYSIS_DELAY_MS).await;
            let next = apply(&panel.peek(), &SimulatorEvent::AnalysisFinished { run_id });
            panel.set(next);
        });
    }

    /// Handle removal of the selected file.
    pub fn clear_file(&mut self) {
        info!("file cleared, returning to empty state");
        self.dispatch(SimulatorEvent::FileCleared);
    }

    fn dispatch(&mut self, event: SimulatorEvent) {
        let next = apply(&self.panel.peek(), &event);
        self.panel.set(next);
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the simulator state provider at app root.
///
/// Call this once in the App component before any children that use it.
pub fn use_simulator_provider() -> SimulatorState {
    use_context_provider(SimulatorState::new)
}

/// Get the simulator state from context.
pub fn use_simulator() -> SimulatorState {
    use_context::<SimulatorState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            size_bytes: 0,
        }
    }

    #[test]
    fn selecting_a_file_starts_analysis() {
        let next = apply(
            &PanelState::Empty,
            &SimulatorEvent::FileSelected {
                file: file("test.csv"),
                run_id: 0,
            },
        );
        assert_eq!(
            next,
            PanelState::Analyzing {
                file: file("test.csv"),
                run_id: 0
            }
        );
    }

    #[test]
    fn analysis_completes_for_the_current_run() {
        let analyzing = PanelState::Analyzing {
            file: file("ledger.xlsx"),
            run_id: 3,
        };
        let next = apply(&analyzing, &SimulatorEvent::AnalysisFinished { run_id: 3 });
        assert_eq!(
            next,
            PanelState::Simulated {
                file: file("ledger.xlsx")
            }
        );
    }

    #[test]
    fn stale_timer_does_not_apply() {
        let analyzing = PanelState::Analyzing {
            file: file("second.csv"),
            run_id: 2,
        };
        let next = apply(&analyzing, &SimulatorEvent::AnalysisFinished { run_id: 1 });
        assert_eq!(next, analyzing);
    }

    #[test]
    fn timer_firing_after_clear_is_a_no_op() {
        let next = apply(&PanelState::Empty, &SimulatorEvent::AnalysisFinished { run_id: 0 });
        assert_eq!(next, PanelState::Empty);
    }

    #[test]
    fn clearing_returns_to_empty_from_any_state() {
        let analyzing = PanelState::Analyzing {
            file: file("a.csv"),
            run_id: 0,
        };
        let simulated = PanelState::Simulated { file: file("a.csv") };
        assert_eq!(apply(&analyzing, &SimulatorEvent::FileCleared), PanelState::Empty);
        assert_eq!(apply(&simulated, &SimulatorEvent::FileCleared), PanelState::Empty);
    }

    #[test]
    fn reselecting_supersedes_a_finished_report() {
        let simulated = PanelState::Simulated { file: file("a.csv") };
        let next = apply(
            &simulated,
            &SimulatorEvent::FileSelected {
                file: file("b.csv"),
                run_id: 1,
            },
        );
        assert_eq!(
            next,
            PanelState::Analyzing {
                file: file("b.csv"),
                run_id: 1
            }
        );
    }
}
