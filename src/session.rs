//! Desktop Session Guard
//!
//! The editor only targets GNOME sessions; anything else is refused at startup.

/// Environment variable naming the current desktop session
pub const SESSION_ENV: &str = "DESKTOP_SESSION";

/// The only supported session (exact, case-sensitive)
pub const EXPECTED_SESSION: &str = "gnome";

/// Heading of the warning shown for unsupported sessions
pub const UNSUPPORTED_TITLE: &str = "Unsupported DESKTOP_SESSION";

/// Outcome of the desktop session check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheck {
    /// Supported session, keep running
    Continue,

    /// Unsupported session; the application must warn and terminate
    Unsupported { detected: Option<String> },
}

impl SessionCheck {
    /// Check the session named by `DESKTOP_SESSION`
    pub fn from_env() -> Self {
        let value = std::env::var(SESSION_ENV).ok();
        check_desktop_session(value.as_deref())
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, SessionCheck::Continue)
    }
}

/// Decide whether `session` is supported
pub fn check_desktop_session(session: Option<&str>) -> SessionCheck {
    match session {
        Some(EXPECTED_SESSION) => SessionCheck::Continue,
        other => SessionCheck::Unsupported {
            detected: other.map(str::to_string),
        },
    }
}

/// Body text of the unsupported-session warning
pub fn unsupported_message(detected: Option<&str>) -> String {
    format!(
        "Only GNOME Desktop Sessions are supported. Your current desktop session is: {}",
        detected.unwrap_or("(unset)")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gnome_continues() {
        assert_eq!(check_desktop_session(Some("gnome")), SessionCheck::Continue);
    }

    #[test]
    fn test_other_sessions_rejected() {
        assert_eq!(
            check_desktop_session(Some("kde")),
            SessionCheck::Unsupported { detected: Some("kde".to_string()) }
        );
        assert!(!check_desktop_session(Some("")).is_supported());
        assert_eq!(
            check_desktop_session(None),
            SessionCheck::Unsupported { detected: None }
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!check_desktop_session(Some("GNOME")).is_supported());
        assert!(!check_desktop_session(Some("gnome-xorg")).is_supported());
    }

    #[test]
    fn test_message_names_detected_value() {
        assert!(unsupported_message(Some("kde")).contains("kde"));
        assert!(unsupported_message(None).contains("(unset)"));
        assert!(unsupported_message(Some("")).ends_with("is: "));
    }
}
