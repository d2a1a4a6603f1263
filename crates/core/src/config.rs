use serde::{Deserialize, Serialize};

use crate::locale::LocaleMap;

/// Screen edge the notice bar is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePosition {
    Top,
    Bottom,
}

/// Fully resolved notice configuration.
///
/// Built by merging a partial [`NoticeOverrides`] onto [`NoticeConfig::default`];
/// the merge always produces a fresh value, the defaults are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeConfig {
    pub message_locales: LocaleMap,
    pub position: NoticePosition,
    pub learn_more_link_enabled: bool,
    pub learn_more_link_href: String,
    pub learn_more_link_text: LocaleMap,
    pub deny_button_text: LocaleMap,
    pub button_locales: LocaleMap,
    pub expires_in_days: u32,
    pub button_bg_color: String,
    pub deny_button_bg_color: String,
    pub button_text_color: String,
    pub notice_bg_color: String,
    pub notice_text_color: String,
    pub link_color: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            message_locales: LocaleMap::from_pairs(&[
                (
                    "it",
                    "Utilizziamo i cookie per essere sicuri che tu possa avere la migliore \
                     esperienza sul nostro sito. Se continui ad utilizzare questo sito assumiamo \
                     che tu ne sia felice.",
                ),
                (
                    "en",
                    "We use cookies to make sure you can have the best experience on our website. \
                     If you continue to use this site we assume that you will be happy with it.",
                ),
                (
                    "de",
                    "Wir verwenden Cookies um sicherzustellen dass Sie das beste Erlebnis auf \
                     unserer Website haben.",
                ),
                (
                    "oc",
                    "Utilizam de cookies per vos provesir la melhora experiéncia possibla sus \
                     nòstre site web. Se contunhatz d'utilizar aqueste site web considerarem que \
                     sètz d'acòrdi amb aquò.",
                ),
                (
                    "fr",
                    "Nous utilisons des cookies afin d'être sûr que vous pouvez avoir la \
                     meilleure expérience sur notre site. Si vous continuez à utiliser ce site, \
                     nous supposons que vous acceptez.",
                ),
            ]),
            position: NoticePosition::Bottom,
            learn_more_link_enabled: false,
            learn_more_link_href: "/cookie-banner-information.html".to_string(),
            learn_more_link_text: LocaleMap::from_pairs(&[
                ("it", "Saperne di più"),
                ("en", "Learn more"),
                ("de", "Mehr erfahren"),
                ("oc", "Ne saber mai"),
                ("fr", "En savoir plus"),
            ]),
            deny_button_text: LocaleMap::from_pairs(&[
                ("it", "Solo i cookie necessari"),
                ("en", "Only required cookies"),
                ("de", "Nur erforderliche Cookies"),
                ("oc", "Sólo las cookies necesarias"),
                ("fr", "Seulement les nécessaires"),
            ]),
            button_locales: LocaleMap::from_pairs(&[
                ("it", "Consenti tutti i cookies"),
                ("en", "Accept all cookies"),
                ("de", "Alle Cookies zulassen"),
                ("oc", "Permitir todas las cookies"),
                ("fr", "Accepter tous les cookies"),
            ]),
            expires_in_days: 30,
            button_bg_color: "#07e".to_string(),
            deny_button_bg_color: "#596c71".to_string(),
            button_text_color: "#fff".to_string(),
            notice_bg_color: "#364245".to_string(),
            notice_text_color: "#fff".to_string(),
            link_color: "#009fdd".to_string(),
        }
    }
}

/// Caller-supplied partial configuration.
///
/// Deserializes from the original option document shape (camelCase keys);
/// unrecognized keys are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoticeOverrides {
    pub message_locales: Option<LocaleMap>,
    #[serde(rename = "cookieNoticePosition")]
    pub position: Option<NoticePosition>,
    pub learn_more_link_enabled: Option<bool>,
    pub learn_more_link_href: Option<String>,
    pub learn_more_link_text: Option<LocaleMap>,
    pub deny_button_text: Option<LocaleMap>,
    pub button_locales: Option<LocaleMap>,
    #[serde(rename = "expiresIn")]
    pub expires_in_days: Option<u32>,
    pub button_bg_color: Option<String>,
    pub deny_button_bg_color: Option<String>,
    pub button_text_color: Option<String>,
    pub notice_bg_color: Option<String>,
    pub notice_text_color: Option<String>,
    pub link_color: Option<String>,
}

impl NoticeOverrides {
    /// Merge onto `defaults`, returning a fresh config.
    ///
    /// Locale-map fields merge per-key; every other field overwrites when
    /// present and retains the default otherwise.
    pub fn apply_to(&self, defaults: &NoticeConfig) -> NoticeConfig {
        let mut merged = defaults.clone();

        if let Some(locales) = &self.message_locales {
            merged.message_locales.merge_from(locales);
        }
        if let Some(locales) = &self.learn_more_link_text {
            merged.learn_more_link_text.merge_from(locales);
        }
        if let Some(locales) = &self.deny_button_text {
            merged.deny_button_text.merge_from(locales);
        }
        if let Some(locales) = &self.button_locales {
            merged.button_locales.merge_from(locales);
        }

        if let Some(position) = self.position {
            merged.position = position;
        }
        if let Some(enabled) = self.learn_more_link_enabled {
            merged.learn_more_link_enabled = enabled;
        }
        if let Some(href) = &self.learn_more_link_href {
            merged.learn_more_link_href = href.clone();
        }
        if let Some(days) = self.expires_in_days {
            merged.expires_in_days = days;
        }
        if let Some(color) = &self.button_bg_color {
            merged.button_bg_color = color.clone();
        }
        if let Some(color) = &self.deny_button_bg_color {
            merged.deny_button_bg_color = color.clone();
        }
        if let Some(color) = &self.button_text_color {
            merged.button_text_color = color.clone();
        }
        if let Some(color) = &self.notice_bg_color {
            merged.notice_bg_color = color.clone();
        }
        if let Some(color) = &self.notice_text_color {
            merged.notice_text_color = color.clone();
        }
        if let Some(color) = &self.link_color {
            merged.link_color = color.clone();
        }

        merged
    }
}
