//! 错误提示块
//!
//! ```text
//! ✗ Invalid target
//!   'foo bar' is not a valid IP address or domain
//!
//!   → Use an IP (8.8.8.8) or domain (google.com)
//! ```

use super::Styles;

/// Title, optional reason and optional suggestion, ready for stderr.
pub fn friendly_error(styles: Styles, title: &str, reason: &str, suggestion: &str) -> String {
    let mut out = String::from("\n");
    out.push_str(&styles.error(&format!("✗ {title}")));
    out.push('\n');

    if !reason.is_empty() {
        out.push_str(&styles.hint(&format!("  {reason}")));
        out.push('\n');
    }

    if !suggestion.is_empty() {
        out.push('\n');
        out.push_str(&styles.suggestion(&format!("  → {suggestion}")));
        out.push('\n');
    }

    out
}
