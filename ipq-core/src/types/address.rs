//! Per-family address slots

use std::fmt;

use serde::Serialize;

use super::category::IpCategory;
use crate::utils::classify;

/// Placeholder shown when a lookup failed or timed out.
pub const NOT_DETECTED: &str = "Not Detected";

/// Placeholder shown when the target is a literal of the other family.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        })
    }
}

/// Why a slot holds no address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unavailable {
    /// Lookup failed or timed out
    NotDetected,
    /// Target is a literal of the other family
    NotApplicable,
}

impl Unavailable {
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::NotDetected => NOT_DETECTED,
            Self::NotApplicable => NOT_APPLICABLE,
        }
    }
}

/// State of one address family for the current refresh cycle.
///
/// A slot only goes back to [`AddressSlot::Pending`] through a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddressSlot {
    #[default]
    Pending,
    Resolved(String),
    Unavailable(Unavailable),
}

impl AddressSlot {
    /// Settle a slot from a lookup outcome.
    ///
    /// A successful lookup that carries one of the placeholder strings maps to
    /// the matching [`Unavailable`] reason, and so does an empty answer.
    #[must_use]
    pub fn from_lookup<E>(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() || text == NOT_DETECTED {
                    Self::Unavailable(Unavailable::NotDetected)
                } else if text == NOT_APPLICABLE {
                    Self::Unavailable(Unavailable::NotApplicable)
                } else {
                    Self::Resolved(text.to_string())
                }
            }
            Err(_) => Self::Unavailable(Unavailable::NotDetected),
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Resolved address text, if any.
    #[must_use]
    pub fn usable(&self) -> Option<&str> {
        match self {
            Self::Resolved(text) => Some(text),
            _ => None,
        }
    }

    /// Category of the resolved address; `None` until resolved.
    #[must_use]
    pub fn category(&self) -> Option<IpCategory> {
        self.usable().map(classify::classify)
    }

    /// Text for reports: the address, a placeholder, or `None` while pending.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Resolved(text) => Some(text),
            Self::Unavailable(reason) => Some(reason.placeholder()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_success() {
        let slot = AddressSlot::from_lookup::<()>(Ok("8.8.8.8".to_string()));
        assert_eq!(slot, AddressSlot::Resolved("8.8.8.8".to_string()));
        assert_eq!(slot.usable(), Some("8.8.8.8"));
        assert_eq!(slot.category(), Some(IpCategory::Public));
    }

    #[test]
    fn test_from_lookup_failure() {
        let slot = AddressSlot::from_lookup(Err("boom"));
        assert_eq!(slot, AddressSlot::Unavailable(Unavailable::NotDetected));
        assert!(slot.is_settled());
        assert_eq!(slot.usable(), None);
    }

    #[test]
    fn test_from_lookup_sentinels() {
        assert_eq!(
            AddressSlot::from_lookup::<()>(Ok(NOT_DETECTED.to_string())),
            AddressSlot::Unavailable(Unavailable::NotDetected)
        );
        assert_eq!(
            AddressSlot::from_lookup::<()>(Ok(NOT_APPLICABLE.to_string())),
            AddressSlot::Unavailable(Unavailable::NotApplicable)
        );
        assert_eq!(
            AddressSlot::from_lookup::<()>(Ok("  ".to_string())),
            AddressSlot::Unavailable(Unavailable::NotDetected)
        );
    }

    #[test]
    fn test_pending_is_not_settled() {
        let slot = AddressSlot::default();
        assert!(!slot.is_settled());
        assert_eq!(slot.display_text(), None);
        assert_eq!(slot.category(), None);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(Family::V4.to_string(), "IPv4");
        assert_eq!(Family::V6.to_string(), "IPv6");
    }
}
