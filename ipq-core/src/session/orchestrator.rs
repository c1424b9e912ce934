//! Effect runner
//!
//! Owns the [`Session`] and runs its effects as tokio tasks. Every task
//! reports back through one unbounded channel, so the session only ever sees
//! one event at a time.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::effect::Effect;
use super::event::SessionEvent;
use super::state::Session;
use crate::traits::{ClipboardWriter, LookupGateway};

/// Drives a [`Session`] against real collaborators.
pub struct Orchestrator {
    session: Session,
    gateway: Arc<dyn LookupGateway>,
    clipboard: Arc<dyn ClipboardWriter>,
    tx: mpsc::UnboundedSender<SessionEvent>,
    rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        session: Session,
        gateway: Arc<dyn LookupGateway>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session,
            gateway,
            clipboard,
            tx,
            rx,
        }
    }

    /// Start the session and launch its first lookups.
    pub fn start(&mut self) {
        let effects = self.session.start();
        self.run(effects);
    }

    /// Feed one event to the session and launch whatever it asks for.
    pub fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.handle(event);
        self.run(effects);
    }

    /// Wait for the next completion from a spawned task.
    ///
    /// The orchestrator keeps a sender alive, so this only resolves when an
    /// event is available.
    pub async fn next_completion(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }

    /// Dispatch completions until nothing is loading.
    pub async fn settle(&mut self) {
        while self.session.loading() {
            match self.rx.recv().await {
                Some(event) => self.dispatch(event),
                None => break,
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.spawn(effect);
        }
    }

    fn spawn(&self, effect: Effect) {
        let tx = self.tx.clone();

        match effect {
            Effect::FetchAddress {
                family,
                target,
                generation,
            } => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    let outcome = gateway.fetch_address(family, &target).await;
                    send(&tx, SessionEvent::address_completed(family, generation, outcome));
                });
            }
            Effect::FetchGeoDetail { ip, generation } => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    let event = match gateway.fetch_geo_detail(&ip).await {
                        Ok(detail) => SessionEvent::GeoCompleted { generation, detail },
                        Err(e) => {
                            log::warn!("geolocation of {ip} failed: {e}");
                            SessionEvent::GeoFailed {
                                generation,
                                message: e.to_string(),
                            }
                        }
                    };
                    send(&tx, event);
                });
            }
            Effect::WriteClipboard(text) => {
                let clipboard = Arc::clone(&self.clipboard);
                tokio::spawn(async move {
                    if let Err(e) = clipboard.write_text(&text).await {
                        log::warn!("clipboard write failed: {e}");
                    }
                });
            }
            Effect::ExpireMessage { id, after } => {
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    send(&tx, SessionEvent::EphemeralMessageExpired { id });
                });
            }
        }
    }
}

fn send(tx: &mpsc::UnboundedSender<SessionEvent>, event: SessionEvent) {
    if tx.send(event).is_err() {
        log::debug!("session closed, dropping completion");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::COPY_MESSAGE_TTL;
    use crate::test_utils::{sample_detail, MockClipboard, MockGateway};
    use crate::traits::LookupError;
    use crate::types::{AddressSlot, DetailState, Family, Target, Unavailable};

    fn orchestrator(
        target: &str,
        detail: bool,
        gateway: &Arc<MockGateway>,
        clipboard: &Arc<MockClipboard>,
    ) -> Orchestrator {
        let session = Session::new(Target::parse(target).unwrap(), detail);
        Orchestrator::new(session, gateway.clone(), clipboard.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_literal_target_without_detail_has_no_work() {
        let gateway = Arc::new(MockGateway::new());
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("1.1.1.1", false, &gateway, &clipboard);

        orch.start();
        assert!(!orch.session().loading());

        let mut next = tokio_test::task::spawn(orch.next_completion());
        tokio_test::assert_pending!(next.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hostname_with_detail_settles() {
        let gateway = Arc::new(MockGateway::new().with_delays(
            Duration::from_millis(50),
            Duration::from_millis(200),
            Duration::from_millis(100),
        ));
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("example.com", true, &gateway, &clipboard);

        orch.start();
        assert!(orch.session().loading());
        orch.settle().await;

        let session = orch.session();
        assert!(!session.loading());
        assert!(session.ipv4().usable().is_some());
        assert!(session.ipv6().usable().is_some());
        assert_eq!(session.detail(), &DetailState::Available(sample_detail()));
        assert_eq!(gateway.ipv4_calls(), 1);
        assert_eq!(gateway.ipv6_calls(), 1);
        assert_eq!(gateway.geo_ips(), vec![MockGateway::IPV4.to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_faster_ipv6_wins_detail() {
        let gateway = Arc::new(MockGateway::new().with_delays(
            Duration::from_millis(300),
            Duration::from_millis(10),
            Duration::from_millis(10),
        ));
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("example.com", true, &gateway, &clipboard);

        orch.start();
        orch.settle().await;

        assert_eq!(gateway.geo_ips(), vec![MockGateway::IPV6.to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_literal_target_skips_address_lookups() {
        let gateway = Arc::new(MockGateway::new());
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("8.8.8.8", true, &gateway, &clipboard);

        orch.start();
        orch.settle().await;

        assert_eq!(gateway.ipv4_calls(), 0);
        assert_eq!(gateway.ipv6_calls(), 0);
        assert_eq!(
            orch.session().ipv6(),
            &AddressSlot::Unavailable(Unavailable::NotApplicable)
        );
        assert_eq!(gateway.geo_ips(), vec!["8.8.8.8".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_degrade_without_aborting() {
        let gateway = Arc::new(
            MockGateway::new()
                .with_ipv4(Err(LookupError::Timeout))
                .with_geo(Err(LookupError::Failed(
                    "Reserved IP (no geolocation)".to_string(),
                ))),
        );
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("example.com", true, &gateway, &clipboard);

        orch.start();
        orch.settle().await;

        let session = orch.session();
        assert_eq!(
            session.ipv4(),
            &AddressSlot::Unavailable(Unavailable::NotDetected)
        );
        assert!(session.ipv6().usable().is_some());
        assert_eq!(
            session.detail(),
            &DetailState::Failed("Reserved IP (no geolocation)".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_discards_stale_completions() {
        let gateway = Arc::new(MockGateway::new().with_delays(
            Duration::from_millis(100),
            Duration::from_millis(100),
            Duration::ZERO,
        ));
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("example.com", false, &gateway, &clipboard);

        orch.start();
        orch.dispatch(SessionEvent::RefreshRequested);
        assert_eq!(orch.session().generation(), 1);
        assert!(orch.session().loading());

        // Both generations complete; only generation 1 may settle the slots.
        let mut seen = 0;
        while seen < 4 {
            let event = orch.next_completion().await.unwrap();
            if matches!(
                event,
                SessionEvent::Ipv4Completed { .. } | SessionEvent::Ipv6Completed { .. }
            ) {
                seen += 1;
            }
            orch.dispatch(event);
        }

        assert!(!orch.session().loading());
        assert_eq!(gateway.ipv4_calls(), 2);
        assert_eq!(gateway.ipv6_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_writes_clipboard_and_expires_message() {
        let gateway = Arc::new(MockGateway::new());
        let clipboard = Arc::new(MockClipboard::new());
        let mut orch = orchestrator("1.1.1.1", false, &gateway, &clipboard);

        orch.start();
        orch.dispatch(SessionEvent::CopyRequested(Family::V4));
        assert_eq!(orch.session().message(), Some("Copied IPv4 to clipboard!"));

        tokio::time::sleep(COPY_MESSAGE_TTL / 2).await;
        assert_eq!(clipboard.writes(), vec!["1.1.1.1".to_string()]);

        let event = orch.next_completion().await.unwrap();
        assert_eq!(event, SessionEvent::EphemeralMessageExpired { id: 1 });
        orch.dispatch(event);
        assert_eq!(orch.session().message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clipboard_failure_is_not_surfaced() {
        let gateway = Arc::new(MockGateway::new());
        let clipboard = Arc::new(MockClipboard::failing());
        let mut orch = orchestrator("1.1.1.1", false, &gateway, &clipboard);

        orch.start();
        orch.dispatch(SessionEvent::CopyRequested(Family::V4));
        tokio::task::yield_now().await;

        assert!(clipboard.writes().is_empty());
        assert_eq!(orch.session().message(), Some("Copied IPv4 to clipboard!"));
    }
}
