//! Session Marker Entity
//!
//! Proof, kept in session-scoped storage, that the credential check passed.
//! The token minted here is `base64("<email>:<issued_at_ms>")`, but a stored
//! token is never re-derived or compared; it carries no secret.

use kernel::email::Email;
use platform::crypto::to_base64;
use std::time::Duration;

/// Session marker entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    /// Opaque token
    pub token: String,
    /// Admin email the marker was issued to, as stored
    pub email: String,
    /// Issue time (Unix timestamp ms)
    pub issued_at_ms: i64,
}

impl SessionMarker {
    /// Mint a marker for `email` issued at `issued_at_ms`
    pub fn mint(email: Email, issued_at_ms: i64) -> Self {
        Self {
            token: Self::token_for(&email, issued_at_ms),
            email: email.into_inner(),
            issued_at_ms,
        }
    }

    /// Rebuild a marker from its stored parts.
    ///
    /// Token and email are taken as-is; only a non-numeric time makes the
    /// parts unusable.
    pub fn restore(token: &str, email: &str, issued_at: &str) -> Option<Self> {
        let issued_at_ms: i64 = issued_at.trim().parse().ok()?;
        Some(Self {
            token: token.to_string(),
            email: email.to_string(),
            issued_at_ms,
        })
    }

    fn token_for(email: &Email, issued_at_ms: i64) -> String {
        to_base64(format!("{}:{}", email.as_str(), issued_at_ms).as_bytes())
    }

    pub fn expires_at_ms(&self, ttl: Duration) -> i64 {
        self.issued_at_ms.saturating_add(ttl_ms(ttl))
    }

    /// Expired once strictly more than `ttl` has passed since issue
    pub fn is_expired_at(&self, now_ms: i64, ttl: Duration) -> bool {
        now_ms.saturating_sub(self.issued_at_ms) > ttl_ms(ttl)
    }
}

fn ttl_ms(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}

/// Outcome of checking the session scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No marker (or a malformed one)
    Unauthenticated,
    /// A marker was present but past its TTL; it has been removed
    Expired,
    Authenticated(SessionMarker),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn marker(&self) -> Option<&SessionMarker> {
        match self {
            SessionState::Authenticated(marker) => Some(marker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 3600);
    const T0: i64 = 1_714_557_600_000;

    fn marker() -> SessionMarker {
        SessionMarker::mint(Email::new("admin@example.com").unwrap(), T0)
    }

    #[test]
    fn test_token_format() {
        assert_eq!(
            marker().token,
            "YWRtaW5AZXhhbXBsZS5jb206MTcxNDU1NzYwMDAwMA=="
        );
    }

    #[test]
    fn test_restore_roundtrip() {
        let m = marker();
        let restored = SessionMarker::restore(&m.token, "admin@example.com", "1714557600000");
        assert_eq!(restored, Some(m));
    }

    #[test]
    fn test_restore_keeps_token_and_email_opaque() {
        let restored =
            SessionMarker::restore("opaque-token", "Jawh3r@Gmail.com", "1714557600001").unwrap();
        assert_eq!(restored.token, "opaque-token");
        assert_eq!(restored.email, "Jawh3r@Gmail.com");
        assert_eq!(restored.issued_at_ms, T0 + 1);
    }

    #[test]
    fn test_restore_needs_numeric_time() {
        assert!(SessionMarker::restore("t", "admin@example.com", "soon").is_none());
        assert!(SessionMarker::restore("t", "admin@example.com", "").is_none());
        assert!(SessionMarker::restore("t", "admin@example.com", " 1714557600000 ").is_some());
    }

    #[test]
    fn test_expiry_boundary() {
        let m = marker();
        let day_ms = 24 * 3600 * 1000;

        assert!(!m.is_expired_at(T0, DAY));
        assert!(!m.is_expired_at(T0 + day_ms, DAY));
        assert!(m.is_expired_at(T0 + day_ms + 1, DAY));
        assert_eq!(m.expires_at_ms(DAY), T0 + day_ms);
    }

    #[test]
    fn test_state_accessors() {
        assert!(!SessionState::Unauthenticated.is_authenticated());
        assert!(!SessionState::Expired.is_authenticated());
        let state = SessionState::Authenticated(marker());
        assert!(state.is_authenticated());
        assert_eq!(state.marker().map(|m| m.issued_at_ms), Some(T0));
    }
}
