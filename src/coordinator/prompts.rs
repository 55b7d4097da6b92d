//! User-facing canned text and the fallback persona instruction.

use chrono::{DateTime, Utc};

/// First-contact welcome, asking for name and locality.
pub const WELCOME: &str = "Welcome to LocalHive! I'm your assistant for community events \
    and services. To get started, please tell me your name and your locality \
    (e.g., 'My name is Alice and I live in Bhopal, India').";

/// Retry prompt when neither name nor locality could be parsed.
pub const PARSE_RETRY: &str = "I couldn't understand your name and locality. Please try \
    again in the format: 'My name is [Your Name] and I live in [Your Locality]'.";

/// Clarification prompt when only the name was found.
pub const LOCALITY_CLARIFICATION: &str = "I got your name, but please tell me your \
    locality too (e.g., 'My name is Alice and I live in Bhopal, India').";

/// Emitted while a geolocation request is in flight and another message arrives.
pub const STILL_WAITING: &str = "Still getting your location details. Please wait a moment.";

/// Apology when the text-generation fallback fails.
pub const LLM_APOLOGY: &str = "I'm having trouble processing your request at the moment. \
    Please try again in a bit.";

/// Acknowledgement sent right after the profile parses.
pub fn thanks_geolocation(name: &str, locality: &str) -> String {
    format!(
        "Thanks, {name}! I'm now getting the coordinates for {locality}. \
         Please wait a moment."
    )
}

/// Completion message once the profile is stored.
pub fn onboarding_complete(name: &str, locality: &str) -> String {
    format!(
        "Great, {name}! I've saved your location ({locality}). You are now fully \
         onboarded and ready to use LocalHive! How can I help you today?"
    )
}

/// Degraded completion when the profile write failed — onboarding still
/// finishes, the failure never aborts the state machine.
pub fn onboarding_complete_degraded(name: &str) -> String {
    format!(
        "Welcome, {name}! I got your location, but had trouble saving your profile. \
         You are now onboarded. How can I help you today?"
    )
}

/// Re-prompt after a geolocation failure or timeout reverts onboarding.
pub fn geolocation_failed(locality: &str) -> String {
    format!(
        "Sorry, I couldn't get the coordinates for {locality}. Please tell me your \
         name and locality again (e.g., 'My name is Alice and I live in Bhopal, India')."
    )
}

/// Emitted when a routed-to responder is not configured.
pub fn responder_unavailable(responder: &str) -> String {
    format!("My {responder} expert isn't available yet. Please try again later.")
}

/// System instruction for the text-generation fallback.
///
/// Names the assistant's purpose, the user's locality, and the current time.
pub fn fallback_persona(locality: &str, now: DateTime<Utc>) -> String {
    format!(
        "You are a helpful assistant for LocalHive, designed for local event planning \
         and service exchange in communities. Your current location is {locality}. \
         The current time is {}. If the user asks about something outside these \
         domains, provide a polite and general helpful response, or suggest how they \
         can use LocalHive. Keep responses concise and helpful.",
        now.format("%A, %B %d, %Y at %H:%M:%S UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_prompts_include_fields() {
        assert!(thanks_geolocation("Alice", "Bhopal").contains("Alice"));
        assert!(thanks_geolocation("Alice", "Bhopal").contains("Bhopal"));
        assert!(onboarding_complete("Bob", "Indore").contains("(Indore)"));
        assert!(geolocation_failed("Atlantis").contains("Atlantis"));
        assert!(responder_unavailable("event planner").contains("event planner"));
    }

    #[test]
    fn persona_names_locality_and_time() {
        let now = "2025-06-01T12:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let persona = fallback_persona("Bhopal, India", now);
        assert!(persona.contains("Bhopal, India"));
        assert!(persona.contains("June 01, 2025"));
        assert!(persona.contains("LocalHive"));
    }
}
