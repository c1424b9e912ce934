//! 剪贴板抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Clipboard sink for copied addresses.
///
/// Failures are logged by the caller and never surface in the session.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> CoreResult<()>;
}
