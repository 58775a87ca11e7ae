//! Opaque session tokens and the `fertiflow.sid` cookie.
//!
//! The browser holds a random token; the database holds only its SHA-256
//! hex digest.

use chrono::Duration;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "fertiflow.sid";

/// Default session lifetime: one week.
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 366;

/// Session lifetime and cookie flags.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a session stays valid after login or registration.
    pub ttl_hours: i64,
    /// Add the `Secure` attribute to the cookie (HTTPS deployments).
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                  | Default |
    /// |--------------------------|---------|
    /// | `SESSION_TTL_HOURS`      | `168`   |
    /// | `SESSION_COOKIE_SECURE`  | `false` |
    ///
    /// Panics at startup if `SESSION_TTL_HOURS` is outside
    /// `1..=`[`MAX_SESSION_TTL_HOURS`].
    pub fn from_env() -> Self {
        let ttl_hours = parse_ttl_hours(
            &std::env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string()),
        )
        .expect("invalid SESSION_TTL_HOURS");

        let cookie_secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            ttl_hours,
            cookie_secure,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::hours(self.ttl_hours)
    }
}

/// Parse a session lifetime in hours, bounded to `1..=MAX_SESSION_TTL_HOURS`.
pub fn parse_ttl_hours(raw: &str) -> Result<i64, String> {
    let hours: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number of hours"))?;
    if !(1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        return Err(format!("{hours} is outside 1..={MAX_SESSION_TTL_HOURS} hours"));
    }
    Ok(hours)
}

/// Generate a new session token.
///
/// Returns `(plaintext, sha256_hex_hash)`. The plaintext goes into the cookie;
/// only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest of a session token, used as the lookup key.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `Set-Cookie` value that installs a session token.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        config.ttl().num_seconds()
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Pull the session token out of a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_hashes_to_stored_value() {
        let (plaintext, hash) = generate_session_token();

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash_session_token(&plaintext), hash);
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn cookie_carries_expected_attributes() {
        let cookie = session_cookie("abc", &SessionConfig::default());

        assert!(cookie.starts_with("fertiflow.sid=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn secure_flag_follows_config() {
        let config = SessionConfig {
            ttl_hours: 1,
            cookie_secure: true,
        };

        assert!(session_cookie("abc", &config).ends_with("; Secure"));
        assert!(session_cookie("abc", &config).contains("Max-Age=3600"));
        assert!(clear_session_cookie(&config).contains("Secure"));
    }

    #[test]
    fn clearing_cookie_expires_it() {
        let cookie = clear_session_cookie(&SessionConfig::default());
        assert!(cookie.starts_with("fertiflow.sid=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn token_found_among_other_cookies() {
        let header = "theme=dark; fertiflow.sid=tok-123 ; lang=bn";
        assert_eq!(token_from_cookie_header(header), Some("tok-123"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header("fertiflow.sid="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn similarly_named_cookie_is_ignored() {
        assert_eq!(token_from_cookie_header("fertiflow.sid2=nope"), None);
    }

    #[test]
    fn ttl_hours_within_bounds_are_accepted() {
        assert_eq!(parse_ttl_hours("168"), Ok(168));
        assert_eq!(parse_ttl_hours(" 1 "), Ok(1));
        assert_eq!(
            parse_ttl_hours(&MAX_SESSION_TTL_HOURS.to_string()),
            Ok(MAX_SESSION_TTL_HOURS)
        );
    }

    #[test]
    fn ttl_hours_out_of_range_are_rejected() {
        for raw in ["0", "-5", "10000000000", "8785", "week", ""] {
            assert!(parse_ttl_hours(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn longest_ttl_still_yields_valid_expiry() {
        let config = SessionConfig {
            ttl_hours: MAX_SESSION_TTL_HOURS,
            cookie_secure: false,
        };
        let expires_at = chrono::Utc::now().checked_add_signed(config.ttl());
        assert!(expires_at.is_some());
    }
}
