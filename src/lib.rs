//! LocalHive — a demo multi-agent community assistant.
//!
//! A coordinating Porter collects a user's name and locality through a short
//! onboarding dialogue, then routes free-text requests to canned-answer
//! responders by keyword, falling back to an LLM call when nothing matches.

pub mod channels;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod providers;
pub mod responders;
pub mod store;
