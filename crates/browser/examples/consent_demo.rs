use std::sync::Arc;

use consent_browser::{ChromiumPage, launch, to_notice_error};
use consent_core::NoticeOverrides;
use consent_notice::{InstallOutcome, NoticeManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let browser = launch(false).await?;
    let page = browser
        .new_page("https://example.com")
        .await
        .map_err(|e| to_notice_error(e, "NewPage"))?;
    page.wait_for_navigation()
        .await
        .map_err(|e| to_notice_error(e, "Navigation"))?;

    let overrides: NoticeOverrides = serde_json::from_str(
        r#"{
            "cookieNoticePosition": "bottom",
            "learnMoreLinkEnabled": true,
            "expiresIn": 7
        }"#,
    )?;

    let manager = NoticeManager::new();
    let env = Arc::new(ChromiumPage::new(page));
    match manager.install(env, overrides).await? {
        InstallOutcome::Installed(handle) => {
            println!("Notice shown, waiting for a click...");
            let choice = handle.run().await?;
            println!("User choice: {:?}", choice);
        }
        other => println!("Notice not shown: {:?}", other),
    }

    Ok(())
}
