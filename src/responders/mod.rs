//! Responder stubs — stateless canned-answer tables for narrow topics.
//!
//! A responder is an ordered association list of `(keyword set, canned
//! response)` pairs plus a fixed default. It carries no behavior beyond
//! lookup: first rule whose keyword set matches the lowercased input wins.
//! The four instances (event, resource, service exchange, finance) differ
//! only in table contents — see [`catalog`].

pub mod catalog;

use tracing::debug;

/// One row of a responder table.
#[derive(Debug, Clone)]
pub struct CannedRule {
    /// Keywords — any match selects this rule.
    pub keywords: &'static [&'static str],
    /// The canned response returned on match.
    pub response: &'static str,
}

/// A stateless keyword-matching responder.
#[derive(Debug, Clone)]
pub struct Responder {
    name: &'static str,
    rules: Vec<CannedRule>,
    default_response: &'static str,
}

impl Responder {
    pub fn new(
        name: &'static str,
        rules: Vec<CannedRule>,
        default_response: &'static str,
    ) -> Self {
        Self {
            name,
            rules,
            default_response,
        }
    }

    /// Responder name for logging and "not available" messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Scan the table in order and return the first matching canned response,
    /// or the default if no rule matches.
    pub fn respond(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
                debug!(responder = self.name, keywords = ?rule.keywords, "Canned rule matched");
                return rule.response;
            }
        }
        debug!(responder = self.name, "No rule matched, returning default");
        self.default_response
    }
}
