//! Session state machine

use std::time::Duration;

use super::effect::Effect;
use super::event::SessionEvent;
use crate::traits::LookupResult;
use crate::types::{AddressSlot, DetailState, Family, Target, TargetKind, Unavailable};

/// How long "Refreshing..." stays in the footer.
pub const REFRESH_MESSAGE_TTL: Duration = Duration::from_millis(500);

/// How long a copy confirmation stays in the footer.
pub const COPY_MESSAGE_TTL: Duration = Duration::from_secs(2);

const NO_USABLE_ADDRESS: &str = "No usable address to locate";

/// Short-lived footer message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ephemeral {
    id: u64,
    text: String,
}

/// State of one query session.
///
/// Only [`Session::start`] and [`Session::handle`] mutate it; both return the
/// effects the caller must run.
#[derive(Debug, Clone)]
pub struct Session {
    target: Target,
    ipv4: AddressSlot,
    ipv6: AddressSlot,
    detail: DetailState,
    detail_requested: bool,
    detail_in_flight: bool,
    generation: u64,
    message: Option<Ephemeral>,
    next_message_id: u64,
}

impl Session {
    #[must_use]
    pub fn new(target: Target, detail_requested: bool) -> Self {
        Self {
            target,
            ipv4: AddressSlot::Pending,
            ipv6: AddressSlot::Pending,
            detail: DetailState::NotRequested,
            detail_requested,
            detail_in_flight: false,
            generation: 0,
            message: None,
            next_message_id: 0,
        }
    }

    /// Initialise the current generation.
    ///
    /// Literal targets settle both slots immediately; everything else asks for
    /// both address lookups at once.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        match self.target.kind() {
            TargetKind::Literal(family) => {
                let literal = AddressSlot::Resolved(self.target.host().to_string());
                let other = AddressSlot::Unavailable(Unavailable::NotApplicable);
                match family {
                    Family::V4 => {
                        self.ipv4 = literal;
                        self.ipv6 = other;
                    }
                    Family::V6 => {
                        self.ipv4 = other;
                        self.ipv6 = literal;
                    }
                }
            }
            TargetKind::Local | TargetKind::Hostname => {
                for family in [Family::V4, Family::V6] {
                    effects.push(Effect::FetchAddress {
                        family,
                        target: self.target.clone(),
                        generation: self.generation,
                    });
                }
            }
        }

        if self.detail_requested {
            effects.extend(self.try_start_detail());
        }

        log::debug!(
            "session generation {} started for {:?}",
            self.generation,
            self.target.display_name()
        );
        effects
    }

    /// Merge one event and return the effects it calls for.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::Ipv4Completed {
                generation,
                outcome,
            } => self.on_address(Family::V4, generation, outcome),
            SessionEvent::Ipv6Completed {
                generation,
                outcome,
            } => self.on_address(Family::V6, generation, outcome),
            SessionEvent::GeoCompleted { generation, detail } => {
                self.on_detail(generation, DetailState::Available(detail));
                Vec::new()
            }
            SessionEvent::GeoFailed {
                generation,
                message,
            } => {
                self.on_detail(generation, DetailState::Failed(message));
                Vec::new()
            }
            SessionEvent::DetailModeEnabled => {
                if self.detail_requested {
                    return Vec::new();
                }
                self.detail_requested = true;
                self.try_start_detail()
            }
            SessionEvent::RefreshRequested => self.refresh(),
            SessionEvent::CopyRequested(family) => self.copy(family),
            SessionEvent::EphemeralMessageExpired { id } => {
                if self.message.as_ref().is_some_and(|m| m.id == id) {
                    self.message = None;
                }
                Vec::new()
            }
        }
    }

    fn on_address(
        &mut self,
        family: Family,
        generation: u64,
        outcome: LookupResult<String>,
    ) -> Vec<Effect> {
        if generation != self.generation {
            log::debug!("dropping stale {family} result from generation {generation}");
            return Vec::new();
        }
        if let Err(e) = &outcome {
            log::warn!("{family} lookup failed: {e}");
        }

        let slot = match family {
            Family::V4 => &mut self.ipv4,
            Family::V6 => &mut self.ipv6,
        };
        if slot.is_settled() {
            return Vec::new();
        }
        *slot = AddressSlot::from_lookup(outcome);

        self.try_start_detail()
    }

    fn on_detail(&mut self, generation: u64, outcome: DetailState) {
        if generation != self.generation || !self.detail_in_flight {
            log::debug!("dropping stale geolocation result from generation {generation}");
            return;
        }
        self.detail_in_flight = false;
        self.detail = outcome;
    }

    /// Start the geolocation fetch on the first usable address, IPv4 first.
    ///
    /// No-op unless detail is wanted, nothing is in flight and no result has
    /// arrived yet. With both slots settled and nothing usable the detail fails
    /// so that loading can end.
    fn try_start_detail(&mut self) -> Vec<Effect> {
        if !self.detail_requested || self.detail_in_flight || self.detail.is_settled() {
            return Vec::new();
        }

        if let Some(ip) = self.first_usable() {
            let ip = ip.to_string();
            self.detail_in_flight = true;
            self.detail = DetailState::Pending;
            log::debug!("fetching geolocation for {ip}");
            return vec![Effect::FetchGeoDetail {
                ip,
                generation: self.generation,
            }];
        }

        if self.ipv4.is_settled() && self.ipv6.is_settled() {
            self.detail = DetailState::Failed(NO_USABLE_ADDRESS.to_string());
        }
        Vec::new()
    }

    fn refresh(&mut self) -> Vec<Effect> {
        self.generation += 1;
        self.ipv4 = AddressSlot::Pending;
        self.ipv6 = AddressSlot::Pending;
        self.detail = DetailState::NotRequested;
        self.detail_in_flight = false;

        let mut effects = self.start();
        effects.push(self.show_message("Refreshing...", REFRESH_MESSAGE_TTL));
        effects
    }

    fn copy(&mut self, family: Family) -> Vec<Effect> {
        let Some(ip) = self.slot(family).usable().map(str::to_string) else {
            return Vec::new();
        };
        vec![
            Effect::WriteClipboard(ip),
            self.show_message(&format!("Copied {family} to clipboard!"), COPY_MESSAGE_TTL),
        ]
    }

    fn show_message(&mut self, text: &str, ttl: Duration) -> Effect {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.message = Some(Ephemeral {
            id,
            text: text.to_string(),
        });
        Effect::ExpireMessage { id, after: ttl }
    }

    fn first_usable(&self) -> Option<&str> {
        self.ipv4.usable().or_else(|| self.ipv6.usable())
    }

    /// Whether any outstanding work remains for this generation.
    ///
    /// Derived on every call, never stored.
    #[must_use]
    pub fn loading(&self) -> bool {
        let addresses_settled = self.ipv4.is_settled() && self.ipv6.is_settled();
        let detail_settled = !self.detail_requested || self.detail.is_settled();
        !(addresses_settled && detail_settled)
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn slot(&self, family: Family) -> &AddressSlot {
        match family {
            Family::V4 => &self.ipv4,
            Family::V6 => &self.ipv6,
        }
    }

    #[must_use]
    pub fn ipv4(&self) -> &AddressSlot {
        &self.ipv4
    }

    #[must_use]
    pub fn ipv6(&self) -> &AddressSlot {
        &self.ipv6
    }

    #[must_use]
    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    #[must_use]
    pub fn detail_requested(&self) -> bool {
        self.detail_requested
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current footer message, if one is showing.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }
}
