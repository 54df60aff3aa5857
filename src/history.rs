// Edge-triggered, window-bounded input state history

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};

/// How far back state transitions are retained.
pub const HISTORY_WINDOW: Duration = Duration::from_millis(1000);

/// One state transition: the value and when it began.
#[derive(Debug, Clone, Copy)]
struct StateRecord {
    state: bool,
    start: Instant,
}

/// Edge-triggered history of a single on/off input.
///
/// Records are kept newest-first. A record is appended only when the state
/// actually flips; repeated identical updates leave the history untouched.
/// Updates prune records that can no longer answer a state query within
/// `HISTORY_WINDOW`, always retaining at least the newest record.
#[derive(Debug, Default)]
pub struct BinaryHistory {
    records: VecDeque<StateRecord>,
}

impl BinaryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the newest record, or `false` for an empty history.
    pub fn current_state(&self) -> bool {
        self.records.front().map(|r| r.state).unwrap_or(false)
    }

    /// How long the current state has been held. Zero for an empty history.
    pub fn current_duration(&self) -> Duration {
        self.records
            .front()
            .map(|r| r.start.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Records a state transition if `state` differs from the current
    /// state. Time is sampled once per call.
    pub fn update(&mut self, state: bool) {
        self.update_at(state, Instant::now());
    }

    pub(crate) fn update_at(&mut self, state: bool, now: Instant) {
        if state == self.current_state() {
            return;
        }
        self.records.push_front(StateRecord { state, start: now });
        // The oldest record can go once the one after it already covers
        // the whole retention window.
        while self.records.len() > 1 {
            let second_oldest = self.records[self.records.len() - 2];
            if second_oldest.start + HISTORY_WINDOW < now {
                self.records.pop_back();
            } else {
                break;
            }
        }
    }

    pub(crate) fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// History for one action: a binary history driven by the OR of all raw
/// inputs currently asserting the action.
#[derive(Debug, Default)]
pub struct ActionHistory {
    history: BinaryHistory,
    active_inputs: HashSet<String>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> bool {
        self.history.current_state()
    }

    pub fn current_duration(&self) -> Duration {
        self.history.current_duration()
    }

    /// Records that one contributing raw input changed state. The
    /// aggregate history only records a transition when the OR over all
    /// contributing inputs flips.
    pub fn update(&mut self, input: &str, state: bool) {
        self.update_at(input, state, Instant::now());
    }

    pub(crate) fn update_at(&mut self, input: &str, state: bool, now: Instant) {
        if state {
            self.active_inputs.insert(input.to_string());
        } else {
            self.active_inputs.remove(input);
        }
        self.history.update_at(!self.active_inputs.is_empty(), now);
    }

    pub(crate) fn record_count(&self) -> usize {
        self.history.record_count()
    }
}

/// Lazily-populated histories for keys, mouse buttons, and actions.
///
/// The three namespaces are independent. Entries are created on first
/// access and live for the tracker's lifetime; repeated access with the
/// same identifier returns the same entry.
#[derive(Debug, Default)]
pub struct InputHistoryTracker {
    keys: HashMap<String, BinaryHistory>,
    buttons: HashMap<u8, BinaryHistory>,
    actions: HashMap<String, ActionHistory>,
}

impl InputHistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// History for a key code, created empty on first access.
    pub fn history_for_key(&mut self, code: &str) -> &mut BinaryHistory {
        self.keys.entry(code.to_string()).or_default()
    }

    /// History for a mouse button code, created empty on first access.
    pub fn history_for_button(&mut self, code: u8) -> &mut BinaryHistory {
        self.buttons.entry(code).or_default()
    }

    /// History for an action, created empty on first access.
    pub fn history_for_action(&mut self, action: &str) -> &mut ActionHistory {
        self.actions.entry(action.to_string()).or_default()
    }

    /// Read-only lookup that does not create an entry.
    pub fn key_history(&self, code: &str) -> Option<&BinaryHistory> {
        self.keys.get(code)
    }

    /// Read-only lookup that does not create an entry.
    pub fn button_history(&self, code: u8) -> Option<&BinaryHistory> {
        self.buttons.get(&code)
    }

    /// Read-only lookup that does not create an entry.
    pub fn action_history(&self, action: &str) -> Option<&ActionHistory> {
        self.actions.get(action)
    }
}
