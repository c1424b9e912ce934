//! Update 层：状态更新
//!
//! 接收 Message 层的 `AppMessage`，修改 Model。
//! 查询相关的消息全部翻译成 `SessionEvent` 交给会话，
//! 会话返回的副作用由 Orchestrator 启动为后台任务。

use ipq_core::SessionEvent;

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Refresh => {
            app.orchestrator.dispatch(SessionEvent::RefreshRequested);
        }

        AppMessage::EnableDetail => {
            app.orchestrator.dispatch(SessionEvent::DetailModeEnabled);
        }

        AppMessage::Copy(family) => {
            app.orchestrator.dispatch(SessionEvent::CopyRequested(family));
        }

        AppMessage::Session(event) => {
            app.orchestrator.dispatch(event);
        }

        AppMessage::Tick => {
            app.tick();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use ipq_core::types::{Family, GeoDetail, Target};
    use ipq_core::{
        ClipboardWriter, CoreResult, LookupError, LookupGateway, LookupResult, Orchestrator,
        Session,
    };

    use super::*;
    use crate::view::theme::Palette;

    struct StaticGateway;

    #[async_trait]
    impl LookupGateway for StaticGateway {
        async fn fetch_ipv4(&self, _target: &Target) -> LookupResult<String> {
            Ok("198.51.100.7".to_string())
        }

        async fn fetch_ipv6(&self, _target: &Target) -> LookupResult<String> {
            Err(LookupError::Timeout)
        }

        async fn fetch_geo_detail(&self, _ip: &str) -> LookupResult<GeoDetail> {
            Ok(GeoDetail {
                isp: "Example Net".to_string(),
                ..GeoDetail::default()
            })
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ClipboardWriter for RecordingClipboard {
        async fn write_text(&self, text: &str) -> CoreResult<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn app(clipboard: Arc<RecordingClipboard>) -> App {
        let session = Session::new(Target::local(), false);
        let mut orchestrator = Orchestrator::new(session, Arc::new(StaticGateway), clipboard);
        orchestrator.start();
        App::new(orchestrator, Palette::monochrome())
    }

    async fn settle(app: &mut App) {
        app.orchestrator.settle().await;
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = app(Arc::default());
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_session_completions_settle_addresses() {
        let mut app = app(Arc::default());
        settle(&mut app).await;

        assert!(!app.session().loading());
        assert_eq!(app.session().ipv4().usable(), Some("198.51.100.7"));
        assert!(app.session().ipv6().usable().is_none());
    }

    #[tokio::test]
    async fn test_enable_detail_fetches_geolocation() {
        let mut app = app(Arc::default());
        settle(&mut app).await;

        update(&mut app, AppMessage::EnableDetail);
        assert!(app.session().loading());
        settle(&mut app).await;

        assert!(app.session().detail_requested());
        assert!(!app.session().loading());
    }

    #[tokio::test]
    async fn test_copy_writes_clipboard() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let mut app = app(Arc::clone(&clipboard));
        settle(&mut app).await;

        update(&mut app, AppMessage::Copy(Family::V4));
        assert_eq!(app.session().message(), Some("Copied IPv4 to clipboard!"));

        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert_eq!(
            clipboard.writes.lock().unwrap().as_slice(),
            ["198.51.100.7".to_string()]
        );
    }

    #[tokio::test]
    async fn test_refresh_restarts_lookups() {
        let mut app = app(Arc::default());
        settle(&mut app).await;
        let generation = app.session().generation();

        update(&mut app, AppMessage::Refresh);
        assert!(app.session().loading());
        assert_eq!(app.session().generation(), generation + 1);
        assert_eq!(app.session().message(), Some("Refreshing..."));
    }

    #[tokio::test]
    async fn test_tick_only_moves_while_loading() {
        let mut app = app(Arc::default());
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.spinner, 1);

        settle(&mut app).await;
        update(&mut app, AppMessage::Tick);
        assert_eq!(app.spinner, 1);
    }
}
