#[cfg(any(feature = "local-bin", feature = "local-lib"))]
mod local;
#[cfg(any(feature = "local-bin", feature = "local-lib"))]
pub use local::*;

#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
mod remote;
#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
pub use remote::*;

/// Durable storage records. Each is settable/removable on its own,
/// there is no cross-key transaction.
pub const AUTH_TOKEN_STORE: &str = "auth-token";
pub const USER_PROFILE_STORE: &str = "user-profile";
pub const PENDING_SIGNUP_EMAIL_STORE: &str = "pending-signup-email";
/// Session-scoped: the referral trail is a per-browser-session breadcrumb,
/// never shared across devices.
pub const REFERRAL_TRAIL_STORE: &str = "referral-trail";

/// Levels the referral endpoints return buckets for.
pub const MAX_REFERRAL_LEVELS: u8 = 4;

pub const FALLBACK_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/initials/svg";

pub mod social {
    pub const TELEGRAM_RIDENOVA: &str = "https://t.me/ridenova";
    pub const TWITTER_RIDENOVA: &str = "https://twitter.com/ridenova_app";
    pub const FACEBOOK_RIDENOVA: &str = "https://facebook.com/ridenova";
}

pub mod rewards {
    /// Program slugs as they appear in `/rewards/:program` routes.
    pub const CRR: &str = "crr";
    pub const DDR: &str = "ddr";
    pub const BBR: &str = "bbr";
    pub const HLR: &str = "hlr";
    pub const REGIONAL_AMBASSADOR: &str = "regional-ambassador";
}
