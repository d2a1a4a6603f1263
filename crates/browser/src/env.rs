use async_trait::async_trait;
use chromiumoxide::page::Page;
use serde_json::{Value, json};
use tracing::debug;

use consent_core::{Choice, NoticeError, NoticeMarkup, PageEnv};

use crate::errors::to_notice_error;
use crate::js;

/// [`PageEnv`] over a live Chromium page driven through CDP.
pub struct ChromiumPage {
    page: Page,
}

impl ChromiumPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    async fn eval(&self, call: String, action: &str) -> Result<Value, NoticeError> {
        let result = self
            .page
            .evaluate(call)
            .await
            .map_err(|e| to_notice_error(e, action))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    /// Fail on `{ success: false, error }` result objects.
    fn check_success(value: &Value, action: &str) -> Result<(), NoticeError> {
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let reason = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            return Err(NoticeError::script(format!("{}: {}", action, reason)));
        }
        Ok(())
    }
}

#[async_trait]
impl PageEnv for ChromiumPage {
    async fn cookie_string(&self) -> Result<String, NoticeError> {
        let value = self
            .eval(js::build_js_call(js::COOKIE_STRING, &[]), "CookieString")
            .await?;
        Ok(value.as_str().unwrap_or("").to_string())
    }

    async fn set_cookie(&self, raw: &str) -> Result<(), NoticeError> {
        let value = self
            .eval(js::build_js_call(js::SET_COOKIE, &[json!(raw)]), "SetCookie")
            .await?;
        Self::check_success(&value, "SetCookie")
    }

    async fn document_language(&self) -> Result<Option<String>, NoticeError> {
        let value = self
            .eval(js::build_js_call(js::PAGE_LANGUAGE, &[]), "PageLanguage")
            .await?;
        Ok(value
            .get("document")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn navigator_language(&self) -> Result<Option<String>, NoticeError> {
        let value = self
            .eval(js::build_js_call(js::PAGE_LANGUAGE, &[]), "PageLanguage")
            .await?;
        Ok(value
            .get("navigator")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn insert_notice(&self, markup: &NoticeMarkup) -> Result<(), NoticeError> {
        let markup_json = serde_json::to_value(markup)
            .map_err(|e| NoticeError::environment(format!("markup serialization failed: {}", e)))?;
        let value = self
            .eval(
                js::build_js_call(js::INSERT_NOTICE, &[markup_json]),
                "InsertNotice",
            )
            .await?;
        Self::check_success(&value, "InsertNotice")?;
        debug!("notice inserted into page");
        Ok(())
    }

    async fn poll_choice(&self) -> Result<Option<Choice>, NoticeError> {
        let value = self
            .eval(js::build_js_call(js::TAKE_CHOICE, &[]), "TakeChoice")
            .await?;
        match value.get("choice").and_then(Value::as_str) {
            Some("accept") => Ok(Some(Choice::Accept)),
            Some("deny") => Ok(Some(Choice::Deny)),
            Some(other) => Err(NoticeError::script(format!(
                "TakeChoice: unexpected choice '{}'",
                other
            ))),
            None => Ok(None),
        }
    }

    async fn set_notice_opacity(&self, opacity: f64) -> Result<(), NoticeError> {
        let value = self
            .eval(
                js::build_js_call(js::SET_NOTICE_OPACITY, &[json!(opacity)]),
                "SetNoticeOpacity",
            )
            .await?;
        Self::check_success(&value, "SetNoticeOpacity")
    }

    async fn remove_notice(&self) -> Result<(), NoticeError> {
        let value = self
            .eval(js::build_js_call(js::REMOVE_NOTICE, &[]), "RemoveNotice")
            .await?;
        Self::check_success(&value, "RemoveNotice")
    }
}
