//! Global Application State
//!
//! The store snapshot lives in a single signal. Dispatching an intent
//! replaces the snapshot with the reduced one, and every view that reads
//! the signal re-derives its data on the next render.

use leptos::*;
use std::sync::Arc;

use pitwall::store::{trace_dispatch, Intent, RootState};
use pitwall::views::Palette;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current store snapshot
    pub snapshot: RwSignal<Arc<RootState>>,
    /// Number of intents dispatched so far
    pub revision: RwSignal<u64>,
    /// Series colors for derived charts
    pub palette: RwSignal<Palette>,
    /// Dataset fetch in flight
    pub loading: RwSignal<bool>,
    /// Time of the last successful dataset load
    pub last_sync: RwSignal<Option<chrono::DateTime<chrono::Local>>>,
    /// Shell-level error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new(palette: Palette) -> Self {
        Self {
            snapshot: create_rw_signal(Arc::new(RootState::default())),
            revision: create_rw_signal(0),
            palette: create_rw_signal(palette),
            loading: create_rw_signal(false),
            last_sync: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Apply an intent and publish the new snapshot
    pub fn dispatch(&self, intent: impl Into<Intent>) {
        let intent = intent.into();
        let revision = self.revision.get_untracked() + 1;
        trace_dispatch(&intent, revision);

        self.snapshot
            .update(|snapshot| *snapshot = Arc::new(snapshot.reduce(intent)));
        self.revision.set(revision);
    }

    /// Apply intents in order, publishing once at the end
    pub fn dispatch_all<I>(&self, intents: I)
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut revision = self.revision.get_untracked();
        self.snapshot.update(|snapshot| {
            let mut next = RootState::clone(snapshot);
            for intent in intents {
                revision += 1;
                trace_dispatch(&intent, revision);
                next.apply(intent);
            }
            *snapshot = Arc::new(next);
        });
        self.revision.set(revision);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState::new(Palette::default());
    provide_context(state);
    state
}
