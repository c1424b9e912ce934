//! Target extraction and validation
//!
//! Users paste browser URLs, `host:port` pairs and quoted strings; these
//! helpers reduce such input to a bare host or IP and decide whether the
//! result is worth querying.

use super::classify::is_valid_ip;

/// Longest host name DNS allows.
const MAX_HOST_LEN: usize = 253;

/// Reduce pasted text to a bare host or IP.
///
/// - `"https://github.com/user/repo"` -> `"github.com"`
/// - `"http://192.168.1.1:8080/path"` -> `"192.168.1.1"`
/// - `"http://[::1]:8080/path"` -> `"::1"`
/// - `"2001:db8::1"` -> `"2001:db8::1"` (unbracketed IPv6 keeps its colons)
///
/// Never fails, and applying it twice gives the same result as applying it
/// once.
#[must_use]
pub fn extract_host(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = extract_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

// Every step only removes characters, so repeated passes reach a fixed point.
fn extract_once(input: &str) -> String {
    let mut input = input.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();

    if let Some(idx) = input.find("://") {
        input = &input[idx + 3..];
    }

    if let Some(idx) = input.find('/') {
        input = &input[..idx];
    }

    if let Some(host) = split_host_port(input) {
        return host.to_string();
    }

    let input = input.strip_prefix('[').unwrap_or(input);
    let input = input.strip_suffix(']').unwrap_or(input);
    input.to_string()
}

/// Host part of `host:port` or `[host]:port`; `None` when there is no port
/// or the brackets and colons do not form a valid pair.
fn split_host_port(input: &str) -> Option<&str> {
    if let Some(rest) = input.strip_prefix('[') {
        let end = rest.find(']')?;
        let host = &rest[..end];
        let after = &rest[end + 1..];
        let port = after.strip_prefix(':')?;
        if host.contains('[') || port.contains(']') || port.contains('[') {
            return None;
        }
        return Some(host);
    }

    let idx = input.rfind(':')?;
    let host = &input[..idx];
    if host.contains(':') || input.contains('[') || input.contains(']') {
        return None;
    }
    Some(host)
}

/// Whether `text` is an IP address (zone suffix allowed) or a plausible host
/// name.
///
/// Purely syntactic: host names need at least one dot (or be `localhost`)
/// and may only contain ASCII letters, digits, `.`, `-` and `:`.
#[must_use]
pub fn is_acceptable_target(text: &str) -> bool {
    let text = text.trim();

    if is_valid_ip(text) {
        return true;
    }

    if text.len() > MAX_HOST_LEN {
        return false;
    }

    if text.chars().any(char::is_whitespace) {
        return false;
    }

    if !text.contains('.') && text != "localhost" {
        return false;
    }

    text.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_host_urls() {
        let cases = [
            ("https://github.com/user/repo", "github.com"),
            ("http://192.168.1.1:8080/path", "192.168.1.1"),
            ("http://[::1]:8080/path", "::1"),
            ("http://[::1]/path", "::1"),
            ("google.com", "google.com"),
            ("  \"example.com\"  ", "example.com"),
            ("'8.8.8.8'", "8.8.8.8"),
            ("example.com:443", "example.com"),
            ("2001:db8::1", "2001:db8::1"),
            ("[2001:db8::1]", "2001:db8::1"),
            ("", ""),
        ];
        for (raw, expected) in cases {
            assert_eq!(extract_host(raw), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_extract_host_idempotent() {
        let inputs = [
            "https://github.com/user/repo",
            "http://[::1]:8080/path",
            "ftp://user@host.example:21/a/b",
            "\"'https://example.com'\"",
            "[[::1]]",
            "a:b:c",
            "host:",
            "[::1]:80:90",
            "https://https://example.com",
            "  [ 10.0.0.1 ]:53 ",
            "::ffff:1.2.3.4",
            "]weird[",
            "://",
        ];
        for raw in inputs {
            let once = extract_host(raw);
            assert_eq!(extract_host(&once), once, "{raw:?}");
        }
    }

    #[test]
    fn test_is_acceptable_target_truth_table() {
        let cases = [
            ("8.8.8.8", true),
            ("2001:db8::1", true),
            ("::1", true),
            ("fe80::1%eth0", true),
            ("fe80::1%", false),
            ("google.com", true),
            ("sub.example.co.uk", true),
            ("localhost", true),
            ("  example.com  ", true),
            ("google", false),
            ("", false),
            ("exa mple.com", false),
            ("example.com/path", false),
            ("under_score.com", false),
            ("例子.com", false),
        ];
        for (text, expected) in cases {
            assert_eq!(is_acceptable_target(text), expected, "{text:?}");
        }
    }

    #[test]
    fn test_is_acceptable_target_length() {
        let ok = format!("{}.com", "a".repeat(249));
        assert_eq!(ok.len(), 253);
        assert!(is_acceptable_target(&ok));

        let too_long = format!("{}.com", "a".repeat(250));
        assert!(!is_acceptable_target(&too_long));
    }
}
