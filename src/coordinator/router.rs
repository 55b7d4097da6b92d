//! Intent router — ordered keyword rules applied once onboarding is done.
//!
//! An explicit ordered list of keyword-set/intent pairs; first match wins and
//! no match falls through to the text-generation fallback. Keeping the list
//! as data makes the ordering and the fallback testable.

use tracing::debug;

/// The routable intents, one per responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    EventPlanning,
    ServiceExchange,
    Finance,
    LocalResource,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EventPlanning => "event_planning",
            Self::ServiceExchange => "service_exchange",
            Self::Finance => "finance",
            Self::LocalResource => "local_resource",
        };
        write!(f, "{s}")
    }
}

/// Evaluation order matters: earlier rows shadow later ones
/// ("help me plan" routes to events, not the service exchange).
const RULES: &[(&[&str], Intent)] = &[
    (&["event", "organize", "plan"], Intent::EventPlanning),
    (&["service", "help", "find"], Intent::ServiceExchange),
    (&["budget", "sponsor", "finance"], Intent::Finance),
    (&["location", "venue", "map"], Intent::LocalResource),
];

/// Classify a message. Returns `None` when no keyword set matches, which
/// sends the request to the text-generation fallback.
pub fn classify(text: &str) -> Option<Intent> {
    let lowered = text.to_lowercase();
    for (keywords, intent) in RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            debug!(%intent, keywords = ?keywords, "Intent matched");
            return Some(*intent);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_keywords_route_to_event_planning() {
        assert_eq!(classify("I want to plan an event"), Some(Intent::EventPlanning));
        assert_eq!(classify("let's organize something"), Some(Intent::EventPlanning));
    }

    #[test]
    fn service_keywords_route_to_service_exchange() {
        assert_eq!(classify("can you find a gardener"), Some(Intent::ServiceExchange));
        assert_eq!(classify("I need some help"), Some(Intent::ServiceExchange));
    }

    #[test]
    fn finance_keywords_route_to_finance() {
        assert_eq!(classify("what about the budget?"), Some(Intent::Finance));
        assert_eq!(classify("who could sponsor us"), Some(Intent::Finance));
    }

    #[test]
    fn resource_keywords_route_to_local_resource() {
        assert_eq!(classify("suggest a venue"), Some(Intent::LocalResource));
        assert_eq!(classify("show me a map"), Some(Intent::LocalResource));
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        // "plan" (row 1) beats "venue" (row 4)
        assert_eq!(
            classify("plan something at a venue"),
            Some(Intent::EventPlanning)
        );
        // "help" (row 2) beats "budget" (row 3)
        assert_eq!(
            classify("help me with the budget"),
            Some(Intent::ServiceExchange)
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("PLAN A PICNIC"), Some(Intent::EventPlanning));
    }

    #[test]
    fn no_keyword_falls_through() {
        assert_eq!(classify("what's the weather like today?"), None);
        assert_eq!(classify(""), None);
    }
}
