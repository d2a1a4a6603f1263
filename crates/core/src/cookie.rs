use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Cookie marking that the notice was dismissed by either action.
pub const CONSENT_COOKIE: &str = "cookie_notice";
/// Cookie marking explicit opt-out, set on the Deny path only.
pub const DENY_COOKIE: &str = "deny_personal_cookies";
/// Session cookie used for the write/read support probe.
pub const PROBE_COOKIE: &str = "testCookie";

/// User response to the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Accept,
    Deny,
}

/// Expiry instant for a consent cookie recorded at `clicked_at`:
/// `days × 24 × 60 × 60 × 1000` milliseconds later.
pub fn expiry_after_days(clicked_at: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    clicked_at + TimeDelta::milliseconds(i64::from(days) * 24 * 60 * 60 * 1000)
}

/// `name=1; expires=<UTC timestamp>; path=/`
///
/// No Secure/SameSite attributes; browser defaults apply.
pub fn encode_cookie(name: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}=1; expires={}; path=/",
        name,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// Raw cookie strings to write for `choice`, in write order.
///
/// Deny writes the consent cookie first, then the deny flag, with identical
/// expiry. The two writes are sequential, not atomic.
pub fn cookies_for_choice(choice: Choice, expires: DateTime<Utc>) -> Vec<String> {
    match choice {
        Choice::Accept => vec![encode_cookie(CONSENT_COOKIE, expires)],
        Choice::Deny => vec![
            encode_cookie(CONSENT_COOKIE, expires),
            encode_cookie(DENY_COOKIE, expires),
        ],
    }
}
