use std::sync::Arc;

use chrono::{DateTime, Utc};
use consent_core::{Choice, LocaleMap, MemoryPage, NoticeOverrides};

use crate::{InstallOutcome, NoticeManager};

fn expiry_of(raw_cookie: &str) -> DateTime<Utc> {
    let expires = raw_cookie
        .split("expires=")
        .nth(1)
        .and_then(|rest| rest.split(';').next())
        .expect("cookie carries an expires attribute");
    DateTime::parse_from_rfc2822(expires)
        .expect("expires parses as a UTC timestamp")
        .with_timezone(&Utc)
}

async fn installed(manager: &NoticeManager, page: &Arc<MemoryPage>) -> crate::NoticeHandle {
    match manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap()
    {
        InstallOutcome::Installed(handle) => handle,
        other => panic!("expected an installed banner, got {:?}", other),
    }
}

#[tokio::test]
async fn install_renders_the_banner_once() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());

    let outcome = manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::Installed(_)));
    assert!(page.notice_present());
    // the support probe leaves its session cookie behind
    assert!(page.cookie("testCookie").is_some());
}

#[tokio::test]
async fn second_install_is_a_no_op() {
    let manager = NoticeManager::new();
    let first = Arc::new(MemoryPage::new());
    let _ = installed(&manager, &first).await;

    let second = Arc::new(MemoryPage::new());
    let outcome = manager
        .install(second.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::AlreadyInstalled));
    assert!(!second.notice_present());
    assert!(second.cookies().is_empty());
}

#[tokio::test]
async fn gated_first_attempt_still_claims_the_instance() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::cookies_disabled());

    let outcome = manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::CookiesUnsupported));

    let retry = manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(retry, InstallOutcome::AlreadyInstalled));
}

#[tokio::test]
async fn prior_consent_suppresses_the_banner() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new().with_cookie("cookie_notice=1"));

    let outcome = manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::ConsentRecorded));
    assert!(!page.notice_present());
}

#[tokio::test]
async fn unsupported_cookies_suppress_the_banner() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::cookies_disabled());

    let outcome = manager
        .install(page.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::CookiesUnsupported));
    assert!(!page.notice_present());
}

#[tokio::test]
async fn reset_allows_a_fresh_install() {
    let manager = NoticeManager::new();
    let first = Arc::new(MemoryPage::new());
    let _ = installed(&manager, &first).await;

    manager.reset();

    let second = Arc::new(MemoryPage::new());
    let outcome = manager
        .install(second.clone(), NoticeOverrides::default())
        .await
        .unwrap();
    assert!(matches!(outcome, InstallOutcome::Installed(_)));
    assert!(second.notice_present());
}

#[tokio::test]
async fn document_language_selects_the_message() {
    let manager = NoticeManager::new();
    let page = Arc::new(
        MemoryPage::new()
            .with_document_language("fr-FR")
            .with_navigator_language("de"),
    );

    let _ = installed(&manager, &page).await;
    let markup = page.notice().unwrap();
    assert!(markup.message.starts_with("Nous utilisons des cookies"));
    assert_eq!(markup.accept.label, "Accepter tous les cookies");
}

#[tokio::test]
async fn unknown_locale_falls_back_to_en() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new().with_document_language("xx"));

    let _ = installed(&manager, &page).await;
    let markup = page.notice().unwrap();
    assert!(markup.message.starts_with("We use cookies"));
    assert_eq!(markup.deny.label, "Only required cookies");
}

#[tokio::test]
async fn overrides_flow_into_the_rendered_markup() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new().with_document_language("en"));

    let overrides: NoticeOverrides = serde_json::from_str(
        r#"{
            "cookieNoticePosition": "top",
            "learnMoreLinkEnabled": true,
            "learnMoreLinkHref": "/privacy.html",
            "buttonLocales": { "en": "Sure" }
        }"#,
    )
    .unwrap();

    let outcome = manager.install(page.clone(), overrides).await.unwrap();
    assert!(matches!(outcome, InstallOutcome::Installed(_)));

    let markup = page.notice().unwrap();
    assert_eq!(markup.accept.label, "Sure");
    let link = markup.learn_more.unwrap();
    assert_eq!(link.href, "/privacy.html");
    assert_eq!(link.label, "Learn more...");
}

#[tokio::test(start_paused = true)]
async fn accept_records_the_consent_cookie_only() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());
    let handle = installed(&manager, &page).await;

    page.press(Choice::Accept);
    let before = Utc::now();
    let choice = handle.run().await.unwrap();
    let after = Utc::now();

    assert_eq!(choice, Choice::Accept);
    assert!(page.cookie("deny_personal_cookies").is_none());

    let consent = page.cookie("cookie_notice").unwrap();
    assert!(consent.starts_with("cookie_notice=1"));
    assert!(consent.ends_with("path=/"));

    // default expiresIn is 30 days from the click time
    let expires = expiry_of(&consent);
    let thirty_days = chrono::TimeDelta::milliseconds(30 * 86_400_000);
    assert!(expires >= before + thirty_days - chrono::TimeDelta::seconds(2));
    assert!(expires <= after + thirty_days + chrono::TimeDelta::seconds(2));
}

#[tokio::test(start_paused = true)]
async fn deny_records_both_cookies_with_one_expiry() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());
    let handle = installed(&manager, &page).await;

    page.press(Choice::Deny);
    let choice = handle.run().await.unwrap();

    assert_eq!(choice, Choice::Deny);
    let consent = page.cookie("cookie_notice").unwrap();
    let deny = page.cookie("deny_personal_cookies").unwrap();
    assert!(deny.starts_with("deny_personal_cookies=1"));
    assert_eq!(expiry_of(&consent), expiry_of(&deny));
}

#[tokio::test(start_paused = true)]
async fn banner_is_detached_after_a_click() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());
    let handle = installed(&manager, &page).await;

    page.press(Choice::Accept);
    handle.run().await.unwrap();

    assert!(page.removed());
    assert!(!page.notice_present());
    assert!(page.opacity().unwrap() < 0.01);
}

#[tokio::test(start_paused = true)]
async fn run_waits_for_a_click() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());
    let handle = installed(&manager, &page).await;

    let task = tokio::spawn(handle.run());
    // let the poll loop spin a few empty rounds on the paused clock
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
    assert!(!task.is_finished());

    page.press(Choice::Deny);
    let choice = task.await.unwrap().unwrap();
    assert_eq!(choice, Choice::Deny);
    assert!(page.removed());
}

#[tokio::test]
async fn custom_expiry_is_used_for_the_cookie() {
    let manager = NoticeManager::new();
    let page = Arc::new(MemoryPage::new());

    let overrides = NoticeOverrides {
        expires_in_days: Some(1),
        message_locales: Some(LocaleMap::from_pairs(&[("en", "short lived")])),
        ..Default::default()
    };
    let handle = match manager.install(page.clone(), overrides).await.unwrap() {
        InstallOutcome::Installed(handle) => handle,
        other => panic!("expected an installed banner, got {:?}", other),
    };

    page.press(Choice::Accept);
    let before = Utc::now();
    handle.run().await.unwrap();

    let expires = expiry_of(&page.cookie("cookie_notice").unwrap());
    let one_day = chrono::TimeDelta::milliseconds(86_400_000);
    assert!((expires - (before + one_day)).abs() < chrono::TimeDelta::seconds(5));
}
