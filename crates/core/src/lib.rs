pub mod config;
pub mod cookie;
pub mod env;
pub mod error;
pub mod locale;
pub mod markup;

pub use config::{NoticeConfig, NoticeOverrides, NoticePosition};
pub use cookie::{
    CONSENT_COOKIE, Choice, DENY_COOKIE, PROBE_COOKIE, cookies_for_choice, encode_cookie,
    expiry_after_days,
};
pub use env::{MemoryPage, PageEnv};
pub use error::NoticeError;
pub use locale::{FALLBACK_LOCALE, LocaleMap, locale_key};
pub use markup::{
    ACCEPT_CLASS, DENY_CLASS, LEARN_MORE_CLASS, LearnMoreLink, NOTICE_ID, NoticeButton,
    NoticeMarkup,
};
