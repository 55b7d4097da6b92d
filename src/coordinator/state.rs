//! Onboarding state machine — tracks which step each originator is on.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// The steps of the onboarding conversation.
///
/// Progresses linearly: NotStarted → AwaitingProfile → AwaitingGeolocation →
/// Ready. The one backward edge (AwaitingGeolocation → AwaitingProfile) covers
/// geolocation failure or timeout, which re-prompts for the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    NotStarted,
    AwaitingProfile,
    AwaitingGeolocation,
    Ready,
}

impl OnboardingStep {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStep) -> bool {
        use OnboardingStep::*;
        matches!(
            (self, target),
            (NotStarted, AwaitingProfile)
                | (AwaitingProfile, AwaitingGeolocation)
                | (AwaitingGeolocation, Ready)
                | (AwaitingGeolocation, AwaitingProfile)
        )
    }

    /// Whether this step is terminal (general features unlocked).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotStarted => "not_started",
            Self::AwaitingProfile => "awaiting_profile",
            Self::AwaitingGeolocation => "awaiting_geolocation",
            Self::Ready => "ready",
        };
        write!(f, "{s}")
    }
}

/// Per-originator conversation state.
///
/// Created on first message from that originator and mutated in place;
/// lives for the process lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserState {
    pub step: OnboardingStep,
    pub name: Option<String>,
    pub locality: Option<String>,
}

/// Shared per-originator state, keyed by originator id.
///
/// Injected into the Porter rather than held as ambient storage, so the
/// state machine stays independently testable. Cheap to clone.
#[derive(Clone, Default)]
pub struct StateStore {
    states: Arc<RwLock<HashMap<String, UserState>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the state for an originator, if any.
    pub async fn get(&self, originator_id: &str) -> Option<UserState> {
        self.states.read().await.get(originator_id).cloned()
    }

    /// Snapshot the state for an originator, inserting the default if absent.
    /// Returns the state and whether it was newly created.
    pub async fn get_or_create(&self, originator_id: &str) -> (UserState, bool) {
        let mut states = self.states.write().await;
        match states.get(originator_id) {
            Some(state) => (state.clone(), false),
            None => {
                let state = UserState::default();
                states.insert(originator_id.to_string(), state.clone());
                (state, true)
            }
        }
    }

    /// Mutate the state for an originator in place.
    ///
    /// A no-op if the originator is unknown (e.g. a stale geolocation
    /// callback for a state that was never created).
    pub async fn update<F>(&self, originator_id: &str, f: F)
    where
        F: FnOnce(&mut UserState),
    {
        let mut states = self.states.write().await;
        if let Some(state) = states.get_mut(originator_id) {
            f(state);
        }
    }
}
