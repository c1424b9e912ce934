//! Query target

use super::address::Family;
use crate::error::{CoreError, CoreResult};
use crate::utils::{classify, host};

/// How a target is resolved, fixed once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Empty target: the local host's public address
    Local,
    /// IP literal of the given family
    Literal(Family),
    /// Name resolved through DNS
    Hostname,
}

/// Immutable input of one query session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    kind: TargetKind,
}

impl Target {
    /// The local host.
    #[must_use]
    pub fn local() -> Self {
        Self {
            host: String::new(),
            kind: TargetKind::Local,
        }
    }

    /// Normalise a pasted string and validate it as a query target.
    ///
    /// URLs, ports and brackets are stripped first. The empty string is the
    /// local host.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidTarget`] when the normalised text is neither
    /// an IP literal nor a plausible host name.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let extracted = host::extract_host(raw);
        if extracted.is_empty() {
            return Ok(Self::local());
        }
        if !host::is_acceptable_target(&extracted) {
            return Err(CoreError::InvalidTarget(format!(
                "'{}' is not a valid IP address or domain",
                raw.trim()
            )));
        }

        let kind = match classify::family_of(&extracted) {
            Some(family) => TargetKind::Literal(family),
            None => TargetKind::Hostname,
        };
        Ok(Self {
            host: extracted,
            kind,
        })
    }

    /// Normalised host or IP text; empty for the local host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        self.kind
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.kind == TargetKind::Local
    }

    /// Title text for the result page.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.host.is_empty() {
            "Localhost"
        } else {
            &self.host
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::local()
    }
}
