//! User-facing wording for failed turns.

/// Shown when the service rejected the configured credentials.
pub const INVALID_KEY_MESSAGE: &str = "Vaš API ključ nije važeći. Provjerite postavke.";

/// Shown when the service reports an exhausted quota.
pub const QUOTA_MESSAGE: &str = "Dosegnuli ste ograničenje za API. Molimo pokušajte kasnije.";

/// Shown for every other failure.
pub const GENERIC_MESSAGE: &str = "Došlo je do neočekivane pogreške. Molimo pokušajte ponovno.";

/// Maps a transport failure description to a localized message.
#[must_use]
pub fn failure_message(detail: &str) -> &'static str {
    if detail.contains("API key not valid") {
        INVALID_KEY_MESSAGE
    } else if detail.to_lowercase().contains("quota") {
        QUOTA_MESSAGE
    } else {
        GENERIC_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_is_recognised() {
        assert_eq!(
            failure_message("400 Bad Request: API key not valid. Please pass a valid API key."),
            INVALID_KEY_MESSAGE
        );
    }

    #[test]
    fn quota_is_recognised_case_insensitively() {
        assert_eq!(failure_message("429: Quota exceeded for model"), QUOTA_MESSAGE);
        assert_eq!(failure_message("RESOURCE_EXHAUSTED quota"), QUOTA_MESSAGE);
    }

    #[test]
    fn anything_else_is_generic() {
        assert_eq!(failure_message("connection reset by peer"), GENERIC_MESSAGE);
        assert_eq!(failure_message(""), GENERIC_MESSAGE);
    }
}
