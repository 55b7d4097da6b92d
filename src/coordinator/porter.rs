//! The Porter — owns per-originator onboarding state, dispatches geolocation,
//! stores profiles, and routes onboarded requests to responders or the
//! text-generation fallback.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{RwLock, mpsc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::channels::{IncomingMessage, OutgoingReply};
use crate::config::PorterConfig;
use crate::coordinator::parser::{ParsedProfile, ProfileParser};
use crate::coordinator::prompts;
use crate::coordinator::router::{self, Intent};
use crate::coordinator::state::{OnboardingStep, StateStore};
use crate::error::ProviderError;
use crate::providers::{Coordinates, GeolocationProvider, TextGenProvider};
use crate::responders::{Responder, catalog};
use crate::store::{ProfileStore, UserProfile, profile_key};

/// The responders the Porter can route to, one optional slot per intent.
///
/// An empty slot is a configuration gap, not an error: routing to it yields
/// a "not available yet" reply.
#[derive(Default)]
pub struct ResponderRegistry {
    event: Option<Responder>,
    service: Option<Responder>,
    finance: Option<Responder>,
    resource: Option<Responder>,
}

impl ResponderRegistry {
    /// All four stock responders.
    pub fn full() -> Self {
        Self {
            event: Some(catalog::event_planner()),
            service: Some(catalog::service_exchange()),
            finance: Some(catalog::sponsorship_finance()),
            resource: Some(catalog::local_resources()),
        }
    }

    /// No responders configured (every route yields "not available yet").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the responder for an intent.
    pub fn with(mut self, intent: Intent, responder: Responder) -> Self {
        *self.slot_mut(intent) = Some(responder);
        self
    }

    /// Clear the responder for an intent.
    pub fn without(mut self, intent: Intent) -> Self {
        *self.slot_mut(intent) = None;
        self
    }

    fn slot_mut(&mut self, intent: Intent) -> &mut Option<Responder> {
        match intent {
            Intent::EventPlanning => &mut self.event,
            Intent::ServiceExchange => &mut self.service,
            Intent::Finance => &mut self.finance,
            Intent::LocalResource => &mut self.resource,
        }
    }

    fn get(&self, intent: Intent) -> Option<&Responder> {
        match intent {
            Intent::EventPlanning => self.event.as_ref(),
            Intent::ServiceExchange => self.service.as_ref(),
            Intent::Finance => self.finance.as_ref(),
            Intent::LocalResource => self.resource.as_ref(),
        }
    }

    /// Human-readable label for an intent's responder, for the
    /// "not available yet" message.
    fn label(intent: Intent) -> &'static str {
        match intent {
            Intent::EventPlanning => "event planning",
            Intent::ServiceExchange => "service exchange",
            Intent::Finance => "finance and sponsorship",
            Intent::LocalResource => "local resources",
        }
    }
}

/// The coordinating agent.
///
/// Replies flow to originators over the outbound queue returned by [`new`];
/// the caller (usually `main`) forwards them to the channel layer. All
/// failure paths end in a user-facing reply — nothing here is fatal.
///
/// [`new`]: Porter::new
pub struct Porter {
    config: PorterConfig,
    parser: ProfileParser,
    states: StateStore,
    profiles: Arc<dyn ProfileStore>,
    geolocation: Arc<dyn GeolocationProvider>,
    textgen: Arc<dyn TextGenProvider>,
    responders: ResponderRegistry,
    /// In-flight geolocation requests: correlation id → originator id.
    /// Responses are resolved by direct lookup here, never by scanning
    /// states, so interleaved onboardings stay correct.
    pending_geo: RwLock<HashMap<Uuid, String>>,
    outbound: mpsc::UnboundedSender<OutgoingReply>,
}

impl Porter {
    /// Build a Porter and the outbound reply queue it sends on.
    pub fn new(
        config: PorterConfig,
        states: StateStore,
        profiles: Arc<dyn ProfileStore>,
        geolocation: Arc<dyn GeolocationProvider>,
        textgen: Arc<dyn TextGenProvider>,
        responders: ResponderRegistry,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<OutgoingReply>) {
        let (outbound, rx) = mpsc::unbounded_channel();
        let porter = Arc::new(Self {
            config,
            parser: ProfileParser::new(),
            states,
            profiles,
            geolocation,
            textgen,
            responders,
            pending_geo: RwLock::new(HashMap::new()),
            outbound,
        });
        (porter, rx)
    }

    /// Handle one inbound message to completion.
    pub async fn handle_message(self: &Arc<Self>, msg: IncomingMessage) {
        let originator = msg.originator_id.clone();
        let (state, created) = self.states.get_or_create(&originator).await;
        if created {
            info!(originator = %originator, "New user detected, starting onboarding");
        }

        match state.step {
            OnboardingStep::NotStarted => {
                self.states
                    .update(&originator, |s| s.step = OnboardingStep::AwaitingProfile)
                    .await;
                self.send(&originator, prompts::WELCOME);
            }
            OnboardingStep::AwaitingProfile => {
                self.handle_awaiting_profile(&originator, &msg.text).await;
            }
            OnboardingStep::AwaitingGeolocation => {
                self.send(&originator, prompts::STILL_WAITING);
            }
            OnboardingStep::Ready => {
                self.handle_ready(&originator, &msg.text, state.locality.as_deref())
                    .await;
            }
        }
    }

    /// AwaitingProfile: parse the message and either dispatch geolocation or
    /// re-prompt.
    async fn handle_awaiting_profile(self: &Arc<Self>, originator: &str, text: &str) {
        match self.parser.parse(text) {
            ParsedProfile::Complete { name, locality } => {
                info!(
                    originator = %originator,
                    name = %name,
                    locality = %locality,
                    "Profile parsed, requesting geolocation"
                );
                self.states
                    .update(originator, |s| {
                        s.name = Some(name.clone());
                        s.locality = Some(locality.clone());
                        s.step = OnboardingStep::AwaitingGeolocation;
                    })
                    .await;

                let request_id = Uuid::new_v4();
                self.pending_geo
                    .write()
                    .await
                    .insert(request_id, originator.to_string());
                self.spawn_geolocation(request_id, locality.clone());

                self.send(originator, prompts::thanks_geolocation(&name, &locality));
            }
            ParsedProfile::NameOnly { name } => {
                self.states
                    .update(originator, |s| s.name = Some(name))
                    .await;
                self.send(originator, prompts::LOCALITY_CLARIFICATION);
            }
            ParsedProfile::NoMatch => {
                self.send(originator, prompts::PARSE_RETRY);
            }
        }
    }

    /// Run the geolocation call in its own task under the configured timeout.
    fn spawn_geolocation(self: &Arc<Self>, request_id: Uuid, locality: String) {
        let porter = Arc::clone(self);
        let timeout = self.config.geolocation_timeout;
        tokio::spawn(async move {
            let result =
                match tokio::time::timeout(timeout, porter.geolocation.locate(&locality)).await {
                    Ok(result) => result,
                    Err(_) => Err(ProviderError::Timeout {
                        provider: "geolocation".to_string(),
                        seconds: timeout.as_secs(),
                    }),
                };
            porter.complete_geolocation(request_id, result).await;
        });
    }

    /// Resolve a geolocation outcome back to its originator by correlation id.
    ///
    /// Success stores the profile and completes onboarding; failure or
    /// timeout reverts the originator to AwaitingProfile with an error
    /// prompt. A failed profile write still completes onboarding, with a
    /// degraded message.
    pub async fn complete_geolocation(
        &self,
        request_id: Uuid,
        result: Result<Coordinates, ProviderError>,
    ) {
        let Some(originator) = self.pending_geo.write().await.remove(&request_id) else {
            warn!(%request_id, "Geolocation response with no pending request, dropping");
            return;
        };

        let Some(state) = self.states.get(&originator).await else {
            warn!(originator = %originator, "Geolocation response for unknown originator");
            return;
        };
        if state.step != OnboardingStep::AwaitingGeolocation {
            warn!(
                originator = %originator,
                step = %state.step,
                "Geolocation response for originator not awaiting one, dropping"
            );
            return;
        }
        let (Some(name), Some(locality)) = (state.name, state.locality) else {
            warn!(originator = %originator, "Awaiting geolocation without a parsed profile");
            return;
        };

        let coords = match result {
            Ok(coords) => coords,
            Err(e) => {
                warn!(originator = %originator, error = %e, "Geolocation failed, reverting");
                self.states
                    .update(&originator, |s| s.step = OnboardingStep::AwaitingProfile)
                    .await;
                self.send(&originator, prompts::geolocation_failed(&locality));
                return;
            }
        };

        info!(
            originator = %originator,
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Geolocation resolved"
        );

        let profile = UserProfile {
            name: name.clone(),
            locality: locality.clone(),
            latitude: coords.latitude,
            longitude: coords.longitude,
            last_updated: Utc::now(),
        };
        let key = profile_key(&name, &locality);

        let reply = match self.profiles.put(&key, &profile).await {
            Ok(()) => {
                info!(key = %key, "Profile stored");
                prompts::onboarding_complete(&name, &locality)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Profile write failed, completing degraded");
                prompts::onboarding_complete_degraded(&name)
            }
        };

        self.states
            .update(&originator, |s| s.step = OnboardingStep::Ready)
            .await;
        self.send(&originator, reply);
    }

    /// Ready: route by intent to a responder, or fall back to text
    /// generation. The responder's reply is awaited and forwarded — it is
    /// never dropped.
    async fn handle_ready(&self, originator: &str, text: &str, locality: Option<&str>) {
        match router::classify(text) {
            Some(intent) => match self.responders.get(intent) {
                Some(responder) => {
                    info!(%intent, responder = responder.name(), "Delegating request");
                    self.send(originator, responder.respond(text));
                }
                None => {
                    warn!(%intent, "No responder configured for intent");
                    self.send(
                        originator,
                        prompts::responder_unavailable(ResponderRegistry::label(intent)),
                    );
                }
            },
            None => {
                let locality = locality.unwrap_or(&self.config.default_locality);
                let persona = prompts::fallback_persona(locality, Utc::now());
                info!(model = self.textgen.model_name(), "No intent matched, using fallback");
                let reply = match self.textgen.generate(&persona, text).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(error = %e, "Text-generation fallback failed");
                        prompts::LLM_APOLOGY.to_string()
                    }
                };
                self.send(originator, reply);
            }
        }
    }

    fn send(&self, originator: &str, text: impl Into<String>) {
        if self
            .outbound
            .send(OutgoingReply::new(originator, text))
            .is_err()
        {
            warn!(originator = %originator, "Outbound queue closed, dropping reply");
        }
    }
}
