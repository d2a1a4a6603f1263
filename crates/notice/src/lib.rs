mod fade;
mod render;
mod timing;

pub use timing::NoticeTiming;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tracing::{debug, info};

use consent_core::{
    CONSENT_COOKIE, Choice, NoticeConfig, NoticeError, NoticeOverrides, PROBE_COOKIE, PageEnv,
    cookies_for_choice, expiry_after_days, locale_key,
};

/// Result of an install attempt. The non-`Installed` variants are silent
/// no-ops, not errors: nothing was added to the page.
pub enum InstallOutcome {
    /// The banner was rendered; drive it with [`NoticeHandle::run`].
    Installed(NoticeHandle),
    /// An earlier install through this manager already won.
    AlreadyInstalled,
    /// The write/read cookie probe failed.
    CookiesUnsupported,
    /// A `cookie_notice` cookie is already present.
    ConsentRecorded,
}

impl fmt::Debug for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed(_) => f.write_str("Installed"),
            Self::AlreadyInstalled => f.write_str("AlreadyInstalled"),
            Self::CookiesUnsupported => f.write_str("CookiesUnsupported"),
            Self::ConsentRecorded => f.write_str("ConsentRecorded"),
        }
    }
}

/// Factory owning the single-instance flag.
///
/// At most one banner is installed per manager; the first call wins and
/// later calls are no-ops, including calls made after a first attempt that
/// was gated off (matching the original widget, where a constructed instance
/// counts even when no banner was rendered).
pub struct NoticeManager {
    installed: AtomicBool,
    defaults: NoticeConfig,
    timing: NoticeTiming,
}

impl NoticeManager {
    pub fn new() -> Self {
        Self::with_defaults(NoticeConfig::default())
    }

    pub fn with_defaults(defaults: NoticeConfig) -> Self {
        Self {
            installed: AtomicBool::new(false),
            defaults,
            timing: NoticeTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: NoticeTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Decide whether the banner should be shown on `env` and, if so, render
    /// it.
    ///
    /// Gate order: instance flag, cookie support probe, prior consent. Each
    /// gate short-circuits into its [`InstallOutcome`] variant without
    /// touching the page any further.
    pub async fn install(
        &self,
        env: Arc<dyn PageEnv>,
        overrides: NoticeOverrides,
    ) -> Result<InstallOutcome, NoticeError> {
        if self.installed.swap(true, Ordering::SeqCst) {
            debug!("install skipped, instance already constructed");
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        env.set_cookie(&format!("{}=1", PROBE_COOKIE)).await?;
        let jar = env.cookie_string().await?;
        if !jar.contains(PROBE_COOKIE) {
            debug!("install skipped, cookies unsupported");
            return Ok(InstallOutcome::CookiesUnsupported);
        }
        if jar.contains(CONSENT_COOKIE) {
            debug!("install skipped, consent already recorded");
            return Ok(InstallOutcome::ConsentRecorded);
        }

        let config = overrides.apply_to(&self.defaults);
        let document_language = env.document_language().await?;
        let navigator_language = env.navigator_language().await?;
        let locale = locale_key(document_language.as_deref(), navigator_language.as_deref());

        let markup = render::build_markup(&config, &locale);
        env.insert_notice(&markup).await?;
        info!(locale = %locale, "consent notice rendered");

        Ok(InstallOutcome::Installed(NoticeHandle {
            env,
            expires_in_days: config.expires_in_days,
            timing: self.timing.clone(),
        }))
    }

    /// Clear the instance flag. Test escape hatch, not for production use.
    #[doc(hidden)]
    pub fn reset(&self) {
        self.installed.store(false, Ordering::SeqCst);
    }
}

impl Default for NoticeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a rendered banner awaiting the user's response.
pub struct NoticeHandle {
    env: Arc<dyn PageEnv>,
    expires_in_days: u32,
    timing: NoticeTiming,
}

impl NoticeHandle {
    /// Wait for a click, persist the choice, fade the banner out.
    ///
    /// Polls the environment for a recorded click, writes the cookie(s) with
    /// an expiry computed from the click time, then runs the fade-out to
    /// detachment and returns the choice. One-way: not shown → shown →
    /// dismissed.
    pub async fn run(self) -> Result<Choice, NoticeError> {
        let choice = loop {
            if let Some(choice) = self.env.poll_choice().await? {
                break choice;
            }
            tokio::time::sleep(self.timing.choice_poll).await;
        };

        let expires = expiry_after_days(Utc::now(), self.expires_in_days);
        for raw in cookies_for_choice(choice, expires) {
            self.env.set_cookie(&raw).await?;
        }
        debug!(?choice, "consent recorded");

        fade::fade_out(self.env.as_ref(), &self.timing).await?;
        Ok(choice)
    }
}

impl fmt::Debug for NoticeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoticeHandle")
            .field("expires_in_days", &self.expires_in_days)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
