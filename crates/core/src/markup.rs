use serde::Serialize;

use crate::config::NoticePosition;

/// Element id of the notice container. Part of the public styling contract.
pub const NOTICE_ID: &str = "cookieNotice";
/// Class of the accept control. Part of the public styling contract.
pub const ACCEPT_CLASS: &str = "confirm";
/// Class of the deny control, used to tell the two buttons apart.
pub const DENY_CLASS: &str = "deny";
/// Class of the learn-more link. Part of the public styling contract.
pub const LEARN_MORE_CLASS: &str = "learn-more";

/// One response button: solid background, configured text color, no
/// underline, inline-block, fixed left margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeButton {
    pub label: String,
    pub bg_color: String,
    pub text_color: String,
}

/// Optional link opening in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnMoreLink {
    pub label: String,
    pub href: String,
    pub color: String,
}

/// The banner subtree an environment builds and appends to the document:
/// message, optional learn-more link, a line break, deny button, accept
/// button, in that order, inside a fixed full-width bar at `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeMarkup {
    pub message: String,
    pub position: NoticePosition,
    pub bg_color: String,
    pub text_color: String,
    pub learn_more: Option<LearnMoreLink>,
    pub deny: NoticeButton,
    pub accept: NoticeButton,
}
