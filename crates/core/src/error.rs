use thiserror::Error;

/// Failures surfaced while driving a page environment.
///
/// The two silent no-op conditions (cookies unsupported, consent already
/// recorded) are not errors; they are install outcomes.
#[derive(Debug, Clone, Error)]
pub enum NoticeError {
    /// A script evaluated on the page failed or reported failure.
    #[error("script evaluation failed: {0}")]
    Script(String),
    /// The browser or its transport failed.
    #[error("browser error: {0}")]
    Browser(String),
    /// The page environment itself misbehaved.
    #[error("environment error: {0}")]
    Environment(String),
}

impl NoticeError {
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script(message.into())
    }

    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser(message.into())
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment(message.into())
    }
}
