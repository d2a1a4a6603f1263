use chromiumoxide::browser::{Browser, BrowserConfig, HeadlessMode};
use futures::StreamExt;

use consent_core::NoticeError;

/// Launch a Chromium instance with a unique temporary profile directory and
/// a spawned task draining the CDP handler.
pub async fn launch(headless: bool) -> Result<Browser, NoticeError> {
    let temp_dir = std::env::temp_dir().join(format!("chromium-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir)
        .map_err(|e| NoticeError::browser(format!("Failed to create temp dir: {}", e)))?;

    let config = BrowserConfig::builder()
        .headless_mode(if headless {
            HeadlessMode::True
        } else {
            HeadlessMode::False
        })
        .user_data_dir(temp_dir)
        .build()
        .map_err(|e| NoticeError::browser(format!("Config failed: {}", e)))?;

    let (browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| NoticeError::browser(format!("Launch failed: {}", e)))?;

    tokio::spawn(async move { while handler.next().await.is_some() {} });
    Ok(browser)
}
