use consent_core::NoticeError;

/// Map a chromiumoxide failure onto [`NoticeError`] by message inspection.
pub fn to_notice_error(e: impl std::fmt::Display, action: &str) -> NoticeError {
    let s = e.to_string();
    if s.contains("Cannot find context") || s.contains("Execution context was destroyed") {
        NoticeError::script(format!("{} lost page context: {}", action, s))
    } else if s.contains("timeout") || s.contains("Timeout") {
        NoticeError::browser(format!("{} timed out: {}", action, s))
    } else {
        NoticeError::browser(format!("{} failed: {}", action, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_loss_maps_to_script_error() {
        let err = to_notice_error("Execution context was destroyed", "InsertNotice");
        assert!(matches!(err, NoticeError::Script(_)));
    }

    #[test]
    fn other_failures_map_to_browser_error() {
        let err = to_notice_error("connection reset", "SetCookie");
        assert!(matches!(err, NoticeError::Browser(_)));
    }
}
