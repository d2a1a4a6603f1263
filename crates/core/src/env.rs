use async_trait::async_trait;
use std::sync::Mutex;

use crate::cookie::Choice;
use crate::error::NoticeError;
use crate::markup::NoticeMarkup;

/// Capability surface the notice driver needs from a page.
///
/// Implemented over a live Chromium page in production and by [`MemoryPage`]
/// for tests and embedding.
#[async_trait]
pub trait PageEnv: Send + Sync {
    /// Current `document.cookie` serialization (`name=value` pairs joined
    /// with `; `, attributes not included).
    async fn cookie_string(&self) -> Result<String, NoticeError>;

    /// Append one raw cookie string (`name=value[; attributes]`).
    async fn set_cookie(&self, raw: &str) -> Result<(), NoticeError>;

    /// The page's declared language (`<html lang>`), if any.
    async fn document_language(&self) -> Result<Option<String>, NoticeError>;

    /// The browser's reported language, if any.
    async fn navigator_language(&self) -> Result<Option<String>, NoticeError>;

    /// Build the banner subtree and append it to the document body.
    async fn insert_notice(&self, markup: &NoticeMarkup) -> Result<(), NoticeError>;

    /// A recorded, not-yet-consumed click on either button. Consuming.
    async fn poll_choice(&self) -> Result<Option<Choice>, NoticeError>;

    /// Set the opacity of the notice container.
    async fn set_notice_opacity(&self, opacity: f64) -> Result<(), NoticeError>;

    /// Detach the notice container from the document.
    async fn remove_notice(&self) -> Result<(), NoticeError>;
}

#[derive(Debug, Default)]
struct PageState {
    cookies: Vec<String>,
    document_language: Option<String>,
    navigator_language: Option<String>,
    notice: Option<NoticeMarkup>,
    opacity: Option<f64>,
    pending_choice: Option<Choice>,
    removed: bool,
}

/// In-memory [`PageEnv`] for tests and headless embedding.
///
/// Records every cookie write verbatim, stores the inserted markup and the
/// opacity trail, and lets a test stage a click with [`MemoryPage::press`].
pub struct MemoryPage {
    cookies_enabled: bool,
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            cookies_enabled: true,
            state: Mutex::new(PageState::default()),
        }
    }

    /// A page on which every cookie write is silently dropped, so the
    /// write/read support probe fails.
    pub fn cookies_disabled() -> Self {
        Self {
            cookies_enabled: false,
            state: Mutex::new(PageState::default()),
        }
    }

    pub fn with_document_language(self, lang: impl Into<String>) -> Self {
        self.state.lock().unwrap().document_language = Some(lang.into());
        self
    }

    pub fn with_navigator_language(self, lang: impl Into<String>) -> Self {
        self.state.lock().unwrap().navigator_language = Some(lang.into());
        self
    }

    /// Pre-seed a cookie, e.g. `cookie_notice=1` to simulate prior consent.
    pub fn with_cookie(self, raw: &str) -> Self {
        self.store_cookie(raw);
        self
    }

    /// Stage a click on the accept or deny button.
    pub fn press(&self, choice: Choice) {
        self.state.lock().unwrap().pending_choice = Some(choice);
    }

    /// Raw cookie strings as written, attributes included.
    pub fn cookies(&self) -> Vec<String> {
        self.state.lock().unwrap().cookies.clone()
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.state
            .lock()
            .unwrap()
            .cookies
            .iter()
            .find(|raw| raw.starts_with(&prefix))
            .cloned()
    }

    pub fn notice(&self) -> Option<NoticeMarkup> {
        self.state.lock().unwrap().notice.clone()
    }

    /// Whether the banner is currently attached to the document.
    pub fn notice_present(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.notice.is_some() && !state.removed
    }

    pub fn opacity(&self) -> Option<f64> {
        self.state.lock().unwrap().opacity
    }

    pub fn removed(&self) -> bool {
        self.state.lock().unwrap().removed
    }

    fn store_cookie(&self, raw: &str) {
        let name = raw.split('=').next().unwrap_or(raw).to_string();
        let mut state = self.state.lock().unwrap();
        let prefix = format!("{}=", name);
        if let Some(existing) = state.cookies.iter_mut().find(|c| c.starts_with(&prefix)) {
            *existing = raw.to_string();
        } else {
            state.cookies.push(raw.to_string());
        }
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageEnv for MemoryPage {
    async fn cookie_string(&self) -> Result<String, NoticeError> {
        // document.cookie exposes name=value pairs without attributes
        let pairs: Vec<String> = self
            .state
            .lock()
            .unwrap()
            .cookies
            .iter()
            .map(|raw| raw.split(';').next().unwrap_or(raw).trim().to_string())
            .collect();
        Ok(pairs.join("; "))
    }

    async fn set_cookie(&self, raw: &str) -> Result<(), NoticeError> {
        if self.cookies_enabled {
            self.store_cookie(raw);
        }
        Ok(())
    }

    async fn document_language(&self) -> Result<Option<String>, NoticeError> {
        Ok(self.state.lock().unwrap().document_language.clone())
    }

    async fn navigator_language(&self) -> Result<Option<String>, NoticeError> {
        Ok(self.state.lock().unwrap().navigator_language.clone())
    }

    async fn insert_notice(&self, markup: &NoticeMarkup) -> Result<(), NoticeError> {
        let mut state = self.state.lock().unwrap();
        if state.notice.is_some() && !state.removed {
            return Err(NoticeError::environment("notice already present"));
        }
        state.notice = Some(markup.clone());
        state.opacity = None;
        state.removed = false;
        Ok(())
    }

    async fn poll_choice(&self) -> Result<Option<Choice>, NoticeError> {
        Ok(self.state.lock().unwrap().pending_choice.take())
    }

    async fn set_notice_opacity(&self, opacity: f64) -> Result<(), NoticeError> {
        let mut state = self.state.lock().unwrap();
        if state.notice.is_none() || state.removed {
            return Err(NoticeError::environment("notice not found"));
        }
        state.opacity = Some(opacity);
        Ok(())
    }

    async fn remove_notice(&self) -> Result<(), NoticeError> {
        let mut state = self.state.lock().unwrap();
        if state.notice.is_none() || state.removed {
            return Err(NoticeError::environment("notice not found"));
        }
        state.removed = true;
        Ok(())
    }
}
