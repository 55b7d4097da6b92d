//! The Porter — onboarding state machine, profile parsing, intent routing,
//! and delegation to responders or the text-generation fallback.

pub mod parser;
pub mod porter;
pub mod prompts;
pub mod router;
pub mod state;

pub use porter::{Porter, ResponderRegistry};
pub use router::Intent;
pub use state::{OnboardingStep, StateStore, UserState};
