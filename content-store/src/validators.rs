use once_cell::sync::Lazy;
use regex::Regex;

/// Input validation for column-level constraints

/// Length bound of `users.username`
pub const MAX_USERNAME_LEN: usize = 30;
/// Length bound of `users.first_name` / `users.last_name`
pub const MAX_NAME_LEN: usize = 50;
/// Length bound of `users.email`
pub const MAX_EMAIL_LEN: usize = 50;
/// Length bound of `posts.title`
pub const MAX_POST_TITLE_LEN: usize = 255;
/// Length bound of `posts.body`
pub const MAX_POST_BODY_LEN: usize = 2200;
/// Length bound of `comments.body`
pub const MAX_COMMENT_LEN: usize = 1000;
/// Length bound of the descriptive columns on characters and planets
pub const MAX_LABEL_LEN: usize = 100;

// Compile regex patterns once at startup
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // This regex is hardcoded and validated - it is a compile-time constant in practice
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

/// Validate email format (RFC 5322 simplified) and column length
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= MAX_EMAIL_LEN && EMAIL_REGEX.is_match(email)
}

/// Validate that a required text column is non-empty and within its length bound
pub fn validate_bounded_text(value: &str, max_len: usize) -> bool {
    let count = value.chars().count();
    count >= 1 && count <= max_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("leia.organa+tag@alderaan.gov"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_email_over_column_length() {
        let local = "a".repeat(MAX_EMAIL_LEN);
        assert!(!validate_email(&format!("{}@example.com", local)));
    }

    #[test]
    fn test_bounded_text_accepts_limits() {
        assert!(validate_bounded_text("a", MAX_USERNAME_LEN));
        assert!(validate_bounded_text(
            &"x".repeat(MAX_USERNAME_LEN),
            MAX_USERNAME_LEN
        ));
    }

    #[test]
    fn test_bounded_text_rejects_empty_and_overflow() {
        assert!(!validate_bounded_text("", MAX_USERNAME_LEN));
        assert!(!validate_bounded_text(
            &"x".repeat(MAX_USERNAME_LEN + 1),
            MAX_USERNAME_LEN
        ));
    }

    #[test]
    fn test_bounded_text_counts_characters_not_bytes() {
        // 3 characters, 9 bytes
        assert!(validate_bounded_text("äöü", 3));
    }
}
