//! Pitwall Store
//!
//! Client-side state for the dashboard:
//!
//! - **types**: Domain records (Driver, Team, Race, User) and partial updates
//! - **intent**: The closed intent vocabulary and its JSON wire form
//! - **driver / team / race / user**: One slice per entity kind
//!
//! # Data flow
//!
//! ```text
//!   Intent → Store::dispatch → slice reducer → new Arc<RootState> → subscribers
//! ```
//!
//! Every dispatch builds a complete new root snapshot. Snapshots already
//! handed out are never mutated, so a reader holding one sees a consistent
//! view no matter what is dispatched afterwards.
//!
//! # Example
//!
//! ```rust
//! use pitwall::store::{DriverIntent, Driver, Store};
//!
//! let mut store = Store::new();
//! store.dispatch(DriverIntent::AddDriver(Driver::new("ver", "Max Verstappen", 1)));
//! store.dispatch(DriverIntent::AddToComparison("ver".into()));
//!
//! assert_eq!(store.state().driver.comparison_drivers.len(), 1);
//! ```

pub mod driver;
pub mod intent;
pub mod race;
pub mod team;
pub mod types;
pub mod user;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use driver::{Comparison, ComparisonPhase, DriverState, MAX_COMPARISON};
pub use intent::{DriverIntent, Intent, RaceIntent, TeamIntent, UserIntent};
pub use race::RaceState;
pub use team::TeamState;
pub use types::{
    Driver, DriverPerformance, DriverPerformancePatch, FavoriteDriver, FavoriteTeam, LapTime,
    PitStop, QualifyingRecord, Race, Team, TeamPerformance, TeamPerformancePatch, User,
    UserPreferences,
};
pub use user::UserState;

/// Complete store snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub race: RaceState,
    pub user: UserState,
    pub team: TeamState,
    pub driver: DriverState,
}

impl RootState {
    /// Apply one intent in place
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Driver(i) => self.driver.reduce(i),
            Intent::Team(i) => self.team.reduce(i),
            Intent::Race(i) => self.race.reduce(i),
            Intent::User(i) => self.user.reduce(i),
        }
    }

    /// Produce the snapshot that follows `self` after `intent`
    pub fn reduce(&self, intent: impl Into<Intent>) -> RootState {
        let mut next = self.clone();
        next.apply(intent.into());
        next
    }
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<RootState>)>;

/// State container owned by a presentation shell
///
/// Not a global: each shell creates its own and passes it where needed.
pub struct Store {
    state: Arc<RootState>,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug event for one dispatched intent
///
/// Every shell that reduces snapshots calls this so dispatches log the
/// same way whichever store owns the state.
pub fn trace_dispatch(intent: &Intent, revision: u64) {
    tracing::debug!(
        slice = intent.slice(),
        intent = intent.name(),
        revision,
        "dispatch"
    );
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    /// Start from an existing snapshot
    pub fn with_state(state: RootState) -> Self {
        Self {
            state: Arc::new(state),
            revision: 0,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<RootState> {
        Arc::clone(&self.state)
    }

    /// Number of intents dispatched so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent, replace the snapshot and notify subscribers
    pub fn dispatch(&mut self, intent: impl Into<Intent>) {
        let intent = intent.into();
        trace_dispatch(&intent, self.revision + 1);

        self.state = Arc::new(self.state.reduce(intent));
        self.revision += 1;

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Dispatch a sequence of intents in order
    pub fn dispatch_all<I>(&mut self, intents: I)
    where
        I: IntoIterator<Item = Intent>,
    {
        for intent in intents {
            self.dispatch(intent);
        }
    }

    /// Register a listener called after every dispatch
    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<RootState>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}
