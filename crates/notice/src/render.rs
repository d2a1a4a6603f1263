use consent_core::{LearnMoreLink, NoticeButton, NoticeConfig, NoticeMarkup};

/// Resolve the four localized texts independently and assemble the banner
/// subtree description for the page environment.
pub(crate) fn build_markup(config: &NoticeConfig, locale: &str) -> NoticeMarkup {
    let resolve = |map: &consent_core::LocaleMap| map.resolve(locale).unwrap_or_default().to_string();

    let learn_more = config.learn_more_link_enabled.then(|| LearnMoreLink {
        // the ellipsis is appended after resolution, it is not part of the map
        label: format!("{}...", resolve(&config.learn_more_link_text)),
        href: config.learn_more_link_href.clone(),
        color: config.link_color.clone(),
    });

    NoticeMarkup {
        message: resolve(&config.message_locales),
        position: config.position,
        bg_color: config.notice_bg_color.clone(),
        text_color: config.notice_text_color.clone(),
        learn_more,
        deny: NoticeButton {
            label: resolve(&config.deny_button_text),
            bg_color: config.deny_button_bg_color.clone(),
            text_color: config.button_text_color.clone(),
        },
        accept: NoticeButton {
            label: resolve(&config.button_locales),
            bg_color: config.button_bg_color.clone(),
            text_color: config.button_text_color.clone(),
        },
    }
}
